//! A lexer for generating tokens from tokenized arguments.

use argtext_tokenizer::trim_quote;

/// Variant of `Flag` token. Only store the identifier, not the hyphens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flag<'a> {
    /// A short flag (e.g. -v).
    Short(char),

    /// A long flag (e.g. --verbose or -verbose).
    Long(&'a str),
}

/// Defines a `Token` that has been read from the arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Token<'a> {
    /// Flag.
    Flag(Flag<'a>),

    /// Value (i.e. everything that is not a short or long flag).
    Value(&'a str),
}

impl Token<'_> {
    /// Evaluate if the token string is a flag.
    #[inline(always)]
    pub fn is_flag(input: &str) -> bool {
        input.starts_with('-') && input.len() >= 2 && !Self::is_number(input)
    }

    /// Evaluate if the token string represents a number.
    pub fn is_number(input: &str) -> bool {
        let mut position_of_e = None;
        let mut have_seen_dot = false;

        // Remove the front sign is any.
        let input = input.trim_start_matches('-');

        if input.is_empty() {
            return false;
        }

        for (i, c) in input.as_bytes().iter().enumerate() {
            match c {
                b'0'..=b'9' => {}

                // Exponential, OK if not the first character.
                b'e' | b'E' if position_of_e.is_none() && i > 0 => {
                    position_of_e = Some(i);
                }

                // Dot is valid if unique, not the first character and before any exponential.
                b'.' if !have_seen_dot && position_of_e.is_none() && i > 0 => {
                    have_seen_dot = true;
                }

                _ => return false,
            }
        }

        if let Some(pos) = position_of_e {
            pos != input.len() - 1
        } else {
            true
        }
    }

    /// Split a flag argument into its flag and its inline value, if any.
    ///
    /// Both `--name` and `-name` are long flags, `-n` is a short flag. The inline value of
    /// `--name=value` has one layer of quotes stripped.
    pub fn split_flag(input: &str) -> Option<(Flag<'_>, Option<&str>)> {
        if !Self::is_flag(input) {
            return None;
        }

        let name = input
            .strip_prefix("--")
            .or_else(|| input.strip_prefix('-'))
            .unwrap_or(input);

        let (name, value) = match name.split_once('=') {
            Some((name, value)) => (name, Some(trim_quote(value))),
            None => (name, None),
        };

        let mut chars = name.chars();
        let flag = match (chars.next(), chars.next()) {
            (None, _) => return None,
            (Some(c), None) if !input.starts_with("--") => Flag::Short(c),
            _ => Flag::Long(name),
        };

        Some((flag, value))
    }
}

/// Conversion into a token stream.
pub trait IntoTokens<'a> {
    /// Convert into tokens.
    fn into_tokens(self) -> Tokens<'a>;
}

impl<'a> IntoTokens<'a> for Tokens<'a> {
    #[inline(always)]
    fn into_tokens(self) -> Tokens<'a> {
        self
    }
}

impl<'a> IntoTokens<'a> for &'a [&'a str] {
    #[inline(always)]
    fn into_tokens(self) -> Tokens<'a> {
        Tokens::new(self)
    }
}

impl<'a, const N: usize> IntoTokens<'a> for &'a [&'a str; N] {
    #[inline(always)]
    fn into_tokens(self) -> Tokens<'a> {
        Tokens::new(self)
    }
}

/// Defines a `Tokens` stream that is responsible for lexing the arguments.
///
/// It acts like an forward iterator.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    argv: &'a [&'a str],
    cursor: usize,
    inline: Option<&'a str>,
}

impl<'a> Tokens<'a> {
    /// Create a new lexer from the arguments.
    pub fn new(argv: &'a [&'a str]) -> Self {
        Tokens {
            argv,
            cursor: 0,
            inline: None,
        }
    }

    /// Retreive an iterator to the values of the last flag.
    #[inline(always)]
    pub fn values(&self) -> Values<'a> {
        match self.inline {
            Some(value) => Values::inline(value),
            None => Values::new(&self.argv[self.cursor..]),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.inline.take() {
            return Some(Token::Value(value));
        }

        if self.cursor >= self.argv.len() {
            return None;
        }

        let arg = self.argv[self.cursor];
        self.cursor += 1;

        match Token::split_flag(arg) {
            Some((flag, value)) => {
                self.inline = value;
                Some(Token::Flag(flag))
            }
            None => Some(Token::Value(arg)),
        }
    }
}

/// A iterator over value tokens.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Values<'a> {
    argv: &'a [&'a str],
    cursor: usize,
    inline: Option<&'a str>,
    done: bool,
}

impl<'a> Values<'a> {
    /// Create a value iterator over the given arguments, up to the next flag.
    pub fn new(argv: &'a [&'a str]) -> Self {
        Values {
            argv,
            cursor: 0,
            inline: None,
            done: false,
        }
    }

    /// Create a value iterator over the single inline value of a flag.
    pub fn inline(value: &'a str) -> Self {
        Values {
            argv: &[],
            cursor: 0,
            inline: Some(value),
            done: false,
        }
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.inline.take() {
            self.done = true;
            return Some(value);
        }

        if self.done || self.cursor >= self.argv.len() {
            return None;
        }

        let arg = self.argv[self.cursor];
        self.cursor += 1;

        if Token::split_flag(arg).is_some() {
            self.done = true;
            None
        } else {
            Some(arg)
        }
    }
}
