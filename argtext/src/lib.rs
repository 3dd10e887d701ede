//! argtext, a `no_std` tokenizer for configuration written with command line argument syntax.
//!
//! A configuration text is split into arguments with [`tokenize`], then collected with
//! [`ParsedArgs`] the same way command line arguments would be.
#![no_std]
#![deny(missing_docs)]

#[cfg(test)]
extern crate alloc;

pub use argtext_parser as parser;
pub use argtext_tokenizer as tokenizer;

pub use parser::ParsedArgs;
pub use tokenizer::{Tokenizer, tokenize, trim_quote};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// An error comes from the parsing of arguments.
    #[error(transparent)]
    Parser(#[from] parser::Error),
}
