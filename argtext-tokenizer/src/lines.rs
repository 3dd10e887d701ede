//! A line reader over a string slice.

/// Iterator over the lines of a text, recognizing `\n`, `\r\n` and `\r` terminators.
///
/// Terminators are stripped. A terminator at the very end of the input does not produce a
/// trailing empty line, and an empty input produces no line at all.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    /// Create a line reader from the text input.
    pub fn new(input: &'a str) -> Self {
        Lines { rest: input }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(pos) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let (line, tail) = self.rest.split_at(pos);
        let len = if tail.starts_with("\r\n") { 2 } else { 1 };
        self.rest = &tail[len..];

        Some(line)
    }
}

/// Join all the lines of the input with the given separator.
pub fn join_lines(input: &str, separator: char) -> alloc::string::String {
    let mut out = alloc::string::String::with_capacity(input.len());

    for (i, line) in Lines::new(input).enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(line);
    }

    out
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_split_on_all_terminators() {
        let lines: Vec<_> = Lines::new("a\nb\r\nc\rd").collect();
        assert_that!(lines, eq(&alloc::vec!["a", "b", "c", "d"]));
    }

    #[test]
    fn it_should_keep_empty_lines_in_between() {
        let lines: Vec<_> = Lines::new("a\n\nb").collect();
        assert_that!(lines, eq(&alloc::vec!["a", "", "b"]));
    }

    #[test]
    fn it_should_ignore_final_terminator() {
        let lines: Vec<_> = Lines::new("a\r\n").collect();
        assert_that!(lines, eq(&alloc::vec!["a"]));

        let lines: Vec<_> = Lines::new("\n").collect();
        assert_that!(lines, eq(&alloc::vec![""]));
    }

    #[test]
    fn it_should_produce_nothing_from_empty_input() {
        assert_that!(Lines::new("").next(), eq(None));
    }

    #[test]
    fn it_should_join_lines_with_separator() {
        assert_that!(join_lines("--save\r\n--port=8081\n", ' '), eq("--save --port=8081"));
    }
}
