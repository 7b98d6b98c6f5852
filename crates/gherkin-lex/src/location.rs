//! Source locations reported on tokens and diagnostics.

use std::fmt;

/// A 1-based `(line, column)` position in the source text.
///
/// Columns count characters, not bytes, so positions inside lines with
/// localized keywords or non-ASCII text remain meaningful.
///
/// # Examples
///
/// ```
/// use gherkin_lex::Location;
///
/// let loc = Location::new(3, 5);
/// assert_eq!(loc.to_string(), "3:5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// 1-based line number.
    pub line: usize,
    /// 1-based character column.
    pub column: usize,
}

impl Location {
    /// Create a location from 1-based coordinates.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
