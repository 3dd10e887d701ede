#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod lexer;
pub mod parser;

pub use lexer::{Flag, Tokens};
pub use parser::{Error, ParsedArgs};
