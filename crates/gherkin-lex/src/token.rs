//! Typed tokens produced by the matcher.

use crate::location::Location;

/// Structural category of a matched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// A line holding only whitespace.
    Empty,
    /// A `#` comment line.
    Comment,
    /// A line of `@tag` entries.
    TagLine,
    /// A `Feature:` title line.
    FeatureLine,
    /// A `Background:` title line.
    BackgroundLine,
    /// A `Scenario:` title line.
    ScenarioLine,
    /// A `Scenario Outline:` title line.
    ScenarioOutlineLine,
    /// An `Examples:` title line.
    ExamplesLine,
    /// A `Given`/`When`/`Then`-style step line.
    StepLine,
    /// A `"""` or ``` ``` ``` docstring fence, opening or closing.
    DocStringSeparator,
    /// A `|`-delimited table row.
    TableRow,
    /// A `# language: <code>` directive.
    Language,
    /// Any line no other recognizer claimed; docstring content ends up here.
    Other,
}

/// A column-positioned fragment of a line: one tag, or one table cell.
///
/// `column` is the 1-based character offset of the fragment's first
/// character in the original, untrimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpan {
    /// 1-based character column in the untrimmed line.
    pub column: usize,
    /// The fragment text; empty for an empty table cell.
    pub text: String,
}

impl LineSpan {
    /// Create a span at a 1-based column.
    #[must_use]
    pub fn new(column: usize, text: impl Into<String>) -> Self {
        Self {
            column,
            text: text.into(),
        }
    }
}

/// One matched line, as handed to the downstream grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Structural category.
    pub kind: TokenKind,
    /// 1-based position of the token within the source.
    pub location: Location,
    /// Matched keyword, on title and step lines.
    pub keyword: Option<String>,
    /// Free-text payload; its meaning depends on `kind` (title text, step
    /// text, comment text, docstring content type, language code).
    pub text: Option<String>,
    /// Ordered sub-token spans: tags on a tag line, cells on a table row.
    pub spans: Vec<LineSpan>,
    /// Language code that was active when this token was matched.
    pub language: String,
}

impl Token {
    /// Create a bare token; payload fields start out empty.
    #[must_use]
    pub fn new(kind: TokenKind, location: Location, language: impl Into<String>) -> Self {
        Self {
            kind,
            location,
            keyword: None,
            text: None,
            spans: Vec::new(),
            language: language.into(),
        }
    }
}
