//! Tokenizer turning a text written with command line syntax into a sequence of arguments.
#![no_std]
#![deny(missing_docs)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod lines;
pub mod quote;
pub mod tokenizer;

pub use quote::{Markers, QuoteKind, trim_quote};
pub use tokenizer::{Tokenizer, tokenize};
