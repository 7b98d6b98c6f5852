//! One physical source line and its derived properties.
//!
//! The matcher never touches the raw source directly; everything it needs
//! (trimmed text, indent, prefix tests, the end-of-input flag) comes
//! through this type. Line numbers are 0-based internally and surfaced as
//! 1-based on token locations.

/// A single physical line, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    raw: String,
    index: usize,
    eof: bool,
}

impl Line {
    /// Wrap one physical line. `index` is the 0-based position of the line
    /// in its document.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkin_lex::Line;
    ///
    /// let line = Line::new("  Scenario: Logging in", 4);
    /// assert_eq!(line.indent(), 2);
    /// assert_eq!(line.trimmed(), "Scenario: Logging in");
    /// assert_eq!(line.number(), 5);
    /// ```
    #[must_use]
    pub fn new(raw: impl Into<String>, index: usize) -> Self {
        Self {
            raw: raw.into(),
            index,
            eof: false,
        }
    }

    /// The synthetic line marking end of input.
    #[must_use]
    pub fn eof(index: usize) -> Self {
        Self {
            raw: String::new(),
            index,
            eof: true,
        }
    }

    /// `true` for the synthetic end-of-input line.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// `true` when the line holds nothing but whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Count of leading space and tab characters.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.raw
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .count()
    }

    /// The raw, untrimmed line text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.raw
    }

    /// The line text with leading spaces and tabs removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.raw.trim_start_matches([' ', '\t'])
    }

    /// 1-based line number, as surfaced in token locations.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Does the trimmed line start with `prefix`?
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.trimmed().starts_with(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("no indent", 0)]
    #[case("  two spaces", 2)]
    #[case("\ttab", 1)]
    #[case(" \t mixed", 3)]
    fn indent_counts_leading_whitespace(#[case] raw: &str, #[case] expected: usize) {
        assert_eq!(Line::new(raw, 0).indent(), expected);
    }

    #[test]
    fn empty_covers_whitespace_only_lines() {
        assert!(Line::new("", 0).is_empty());
        assert!(Line::new("   \t", 0).is_empty());
        assert!(!Line::new(" x", 0).is_empty());
    }

    #[test]
    fn eof_line_is_flagged() {
        let line = Line::eof(7);
        assert!(line.is_eof());
        assert!(line.is_empty());
        assert_eq!(line.number(), 8);
    }

    #[test]
    fn prefix_test_ignores_indent() {
        let line = Line::new("   @wip", 0);
        assert!(line.starts_with("@"));
        assert!(!line.starts_with("#"));
    }
}
