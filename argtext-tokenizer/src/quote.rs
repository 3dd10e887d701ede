//! Quote markers and the quote-tracking state machine.

/// Kind of quote marker. The same character opens and closes a quoted region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QuoteKind {
    /// Double quote (`"`).
    Double,

    /// Single quote (`'`).
    Single,

    /// Back quote (`` ` ``).
    Back,
}

impl QuoteKind {
    /// The marker character of this kind.
    #[inline(always)]
    pub const fn as_char(self) -> char {
        match self {
            QuoteKind::Double => '"',
            QuoteKind::Single => '\'',
            QuoteKind::Back => '`',
        }
    }

    /// Evaluate if the fragment opens a quoted region of this kind without closing it.
    ///
    /// A flag with an attached quoted value (e.g. `--comment="some`) also opens a region, even
    /// though the quote is not the first character.
    pub fn opens(self, fragment: &str) -> bool {
        let q = self.as_char();

        if fragment.ends_with(q) {
            return false;
        }

        fragment.starts_with(q) || (fragment.starts_with('-') && fragment.contains(q))
    }

    /// Evaluate if the fragment closes a quoted region of this kind.
    #[inline(always)]
    pub fn closes(self, fragment: &str) -> bool {
        let q = self.as_char();
        !fragment.starts_with(q) && fragment.ends_with(q)
    }
}

/// Fixed table of markers driving the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Markers {
    /// Quote kinds, in priority order.
    pub quotes: [QuoteKind; 3],

    /// Fragment separator.
    pub separator: char,
}

impl Markers {
    /// Double, single then back quotes, separated by a single space.
    pub const DEFAULT: Markers = Markers {
        quotes: [QuoteKind::Double, QuoteKind::Single, QuoteKind::Back],
        separator: ' ',
    };

    /// Find the first quote kind opened by the fragment, if any.
    pub fn opening(&self, fragment: &str) -> Option<QuoteKind> {
        self.quotes.iter().copied().find(|q| q.opens(fragment))
    }

    /// Trim surrounding whitespace, then strip one matching pair of quote markers.
    ///
    /// Only the first quote kind found on both ends is stripped, so `"'a'"` becomes `'a'`.
    pub fn trim_quote<'a>(&self, input: &'a str) -> &'a str {
        let input = input.trim();

        for q in self.quotes.iter().map(|q| q.as_char()) {
            if input.starts_with(q) && input.ends_with(q) {
                let inner = &input[q.len_utf8()..];

                // A lone marker shares its opening and closing character.
                return inner.strip_suffix(q).unwrap_or(inner);
            }
        }

        input
    }
}

impl Default for Markers {
    fn default() -> Self {
        Markers::DEFAULT
    }
}

/// Trim a value and strip one matching pair of surrounding quotes, using the default markers.
///
/// Useful on a flag value that kept its quotes, like the `"done"` of `--comment="done"`.
#[inline(always)]
pub fn trim_quote(input: &str) -> &str {
    Markers::DEFAULT.trim_quote(input)
}

/// What the tokenizer does with a fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Start a new buffer with the fragment.
    Open,

    /// Append the fragment to the current buffer.
    Append,

    /// Append the fragment and emit the buffer as one token.
    Close,

    /// Emit the fragment as one token.
    Emit,
}

/// Quote state while walking fragments. At most one kind is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QuoteState {
    /// Outside of any quoted region.
    #[default]
    Unquoted,

    /// Inside a quoted region of the given kind.
    Quoted(QuoteKind),
}

impl QuoteState {
    /// Compute the next state and the action to apply to the fragment.
    pub fn next(self, fragment: &str, markers: &Markers) -> (Self, Action) {
        match self {
            QuoteState::Unquoted => match markers.opening(fragment) {
                Some(kind) => (QuoteState::Quoted(kind), Action::Open),
                None => (QuoteState::Unquoted, Action::Emit),
            },

            QuoteState::Quoted(kind) if kind.closes(fragment) => {
                (QuoteState::Unquoted, Action::Close)
            }

            QuoteState::Quoted(_) => (self, Action::Append),
        }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn it_should_open_on_leading_quote() {
        assert_that!(QuoteKind::Double.opens("\"some"), eq(true));
        assert_that!(QuoteKind::Single.opens("'some"), eq(true));
        assert_that!(QuoteKind::Back.opens("`some"), eq(true));
    }

    #[test]
    fn it_should_open_on_flag_with_attached_quote() {
        assert_that!(QuoteKind::Double.opens("--comment=\"some"), eq(true));
        assert_that!(QuoteKind::Double.opens("comment=\"some"), eq(false));
    }

    #[test]
    fn it_should_not_open_on_self_quoted_fragment() {
        assert_that!(QuoteKind::Double.opens("\"x\""), eq(false));
        assert_that!(QuoteKind::Double.opens("\""), eq(false));
        assert_that!(QuoteKind::Double.opens("--comment=\"done\""), eq(false));
    }

    #[test]
    fn it_should_close_on_trailing_quote_only() {
        assert_that!(QuoteKind::Single.closes("path'"), eq(true));
        assert_that!(QuoteKind::Single.closes("'path'"), eq(false));
        assert_that!(QuoteKind::Single.closes("path\""), eq(false));
    }

    #[test]
    fn it_should_pick_quote_kinds_in_priority_order() {
        let markers = Markers::DEFAULT;

        assert_that!(markers.opening("-a'b\"c"), eq(Some(QuoteKind::Double)));
        assert_that!(markers.opening("`a'b"), eq(Some(QuoteKind::Back)));
        assert_that!(markers.opening("\"a'b"), eq(Some(QuoteKind::Double)));
        assert_that!(markers.opening("'a`b"), eq(Some(QuoteKind::Single)));
        assert_that!(markers.opening("-a`b'c"), eq(Some(QuoteKind::Single)));
        assert_that!(markers.opening("plain"), eq(None));
    }

    #[test]
    fn it_should_transition_between_states() {
        let markers = Markers::DEFAULT;
        let dq = QuoteState::Quoted(QuoteKind::Double);

        assert_that!(
            QuoteState::Unquoted.next("\"a", &markers),
            eq((dq, Action::Open))
        );
        assert_that!(dq.next("b", &markers), eq((dq, Action::Append)));
        assert_that!(dq.next("c'", &markers), eq((dq, Action::Append)));
        assert_that!(
            dq.next("c\"", &markers),
            eq((QuoteState::Unquoted, Action::Close))
        );
        assert_that!(
            QuoteState::Unquoted.next("plain", &markers),
            eq((QuoteState::Unquoted, Action::Emit))
        );
    }

    #[test]
    fn it_should_append_self_quoted_fragment_while_quoted() {
        let dq = QuoteState::Quoted(QuoteKind::Double);

        assert_that!(
            dq.next("\"x\"", &Markers::DEFAULT),
            eq((dq, Action::Append))
        );
    }

    #[test]
    fn it_should_trim_one_quote_layer() {
        assert_that!(trim_quote("  \"some value\" "), eq("some value"));
        assert_that!(trim_quote("'some value'"), eq("some value"));
        assert_that!(trim_quote("`some value`"), eq("some value"));
        assert_that!(trim_quote("\"'nested'\""), eq("'nested'"));
    }

    #[test]
    fn it_should_not_trim_mismatched_quotes() {
        assert_that!(trim_quote("\"value'"), eq("\"value'"));
        assert_that!(trim_quote("--comment=\"done\""), eq("--comment=\"done\""));
    }

    #[test]
    fn it_should_trim_lone_quote_to_empty() {
        assert_that!(trim_quote("\""), eq(""));
        assert_that!(trim_quote("\"\""), eq(""));
        assert_that!(trim_quote("   "), eq(""));
    }

    #[test]
    fn it_should_preserve_unicode_inside_quotes() {
        assert_that!(trim_quote("\"تست ۱\""), eq("تست ۱"));
        assert_that!(trim_quote("'تست ۲'"), eq("تست ۲"));
        assert_that!(trim_quote("`تست ۳`"), eq("تست ۳"));
    }

    proptest! {
        #[test]
        fn trim_quote_is_idempotent_on_single_layer(
            body in "[a-zA-Z0-9./=-]{1,8}( [a-zA-Z0-9./=-]{1,8}){0,2}",
            quote in prop::sample::select(alloc::vec!['"', '\'', '`']),
        ) {
            let quoted = alloc::format!("{quote}{body}{quote}");
            let once = trim_quote(&quoted);

            prop_assert_eq!(trim_quote(once), once);
            prop_assert_eq!(trim_quote(&body), trim_quote(trim_quote(&body)));
        }
    }
}
