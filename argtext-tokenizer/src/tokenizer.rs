//! A tokenizer for splitting a text written with command line syntax into arguments.

use alloc::string::String;
use alloc::vec::Vec;

use crate::lines::join_lines;
use crate::quote::{Action, Markers, QuoteState};

/// Defines a `Tokenizer` that splits a text into shell-like arguments.
///
/// The input is first flattened into a single line, then split on spaces. Fragments belonging to
/// a quoted region are reassembled into one argument, and one layer of matching quotes is
/// stripped from every argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tokenizer {
    markers: Markers,
}

impl Tokenizer {
    /// Create a tokenizer with the default markers.
    pub const fn new() -> Self {
        Tokenizer {
            markers: Markers::DEFAULT,
        }
    }

    /// Create a tokenizer with the given markers.
    pub const fn with_markers(markers: Markers) -> Self {
        Tokenizer { markers }
    }

    /// Split the input into arguments.
    ///
    /// This never fails: an unterminated quoted region at the end of the input is dropped, and
    /// empty arguments are never emitted.
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        let line = join_lines(input, self.markers.separator);

        let mut out = Vec::new();
        let mut buffer = String::new();
        let mut state = QuoteState::default();

        for fragment in line.split(self.markers.separator) {
            let (next, action) = state.next(fragment, &self.markers);
            state = next;

            match action {
                Action::Open => {
                    buffer.clear();
                    buffer.push_str(fragment);
                }

                Action::Append => {
                    buffer.push(self.markers.separator);
                    buffer.push_str(fragment);
                }

                Action::Close => {
                    buffer.push(self.markers.separator);
                    buffer.push_str(fragment);
                    self.push(&mut out, &buffer);
                    buffer.clear();
                }

                Action::Emit => self.push(&mut out, fragment),
            }
        }

        #[cfg(feature = "defmt")]
        if let QuoteState::Quoted(kind) = state {
            defmt::trace!("dropping unterminated {} quoted argument", kind);
        }

        out
    }

    fn push(&self, out: &mut Vec<String>, raw: &str) {
        let arg = self.markers.trim_quote(raw);

        if !arg.is_empty() {
            out.push(String::from(arg));
        }
    }
}

/// Split the input into arguments with the default tokenizer.
///
/// ```
/// use argtext_tokenizer::tokenize;
///
/// let args = tokenize("--tag --port=8081  --path '/some/path'");
/// assert_eq!(args, ["--tag", "--port=8081", "--path", "/some/path"]);
/// ```
pub fn tokenize(input: &str) -> Vec<String> {
    Tokenizer::new().tokenize(input)
}
