//! Collects lexed flags and the values following them into a fixed-capacity table.

use core::str::FromStr;

use heapless::Vec;

use crate::lexer::{Flag, IntoTokens, Token, Values};

/// Errors raised while collecting or reading arguments.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// A flag has no matching identifier.
    #[error("unknown flag")]
    UnknownFlag,

    /// The value cannot be parsed into the requested type, or more than one value was given.
    #[error("invalid value")]
    InvalidValue,

    /// The flag is absent, or was given without a value.
    #[error("missing value")]
    MissingValue,

    /// More flags than the table can hold.
    #[error("too many flags")]
    TooManyFlags,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Entry<'a> {
    id: &'a str,
    values: Values<'a>,
}

/// Flags found in the arguments, keyed by identifier, each with the values that follow it.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParsedArgs<'a, const CAPACITY: usize = 8> {
    entries: Vec<Entry<'a>, CAPACITY>,
}

impl<'a, const CAPACITY: usize> ParsedArgs<'a, CAPACITY> {
    /// Collect the flags of the arguments. Each entry of `ids` maps a flag to its identifier.
    pub fn try_parse(
        argv: impl IntoTokens<'a>,
        ids: &[(Flag<'a>, &'a str)],
    ) -> Result<Self, Error> {
        let mut tokens = argv.into_tokens();
        let mut entries = Vec::new();

        while let Some(token) = tokens.next() {
            let Token::Flag(flag) = token else {
                continue;
            };

            let id = ids
                .iter()
                .find_map(|&(f, id)| (f == flag).then_some(id))
                .ok_or(Error::UnknownFlag)?;

            entries
                .push(Entry {
                    id,
                    values: tokens.values(),
                })
                .map_err(|_| Error::TooManyFlags)?;
        }

        Ok(ParsedArgs { entries })
    }

    /// Check if the flag with the given identifier is present.
    #[inline(always)]
    pub fn contains(&self, id: &str) -> bool {
        self.entry(id).is_some()
    }

    /// Parse the single value of the flag with the given identifier.
    pub fn get_one<T>(&self, id: &str) -> Result<T, Error>
    where
        T: FromStr,
    {
        let mut values = self.entry(id).ok_or(Error::MissingValue)?.values.clone();

        let value = values.next().ok_or(Error::MissingValue)?;
        if values.next().is_some() {
            return Err(Error::InvalidValue);
        }

        value.parse().map_err(|_| Error::InvalidValue)
    }

    // A repeated flag overrides the earlier ones.
    fn entry(&self, id: &str) -> Option<&Entry<'a>> {
        self.entries.iter().rev().find(|e| e.id == id)
    }
}
