//! The token matcher: ordered per-line recognizers over carried state.
//!
//! One [`TokenMatcher`] serves one document. Each call takes a [`Line`]
//! and the matcher's carried state (active dialect, open docstring fence,
//! pending indent-to-strip) and produces a [`MatchOutcome`]. Two
//! recognizers mutate that state: the language directive swaps the active
//! dialect, and the docstring fence opens or closes a verbatim block.
//!
//! Keyword ambiguity is resolved by dialect list order, not longest match:
//! the first keyword in the dialect's list that matches the line wins,
//! even when a later keyword would consume more characters. Changing this
//! would change which inputs some dialects accept.

use std::sync::LazyLock;

use gherkin_lex_dialects::{DEFAULT_LANGUAGE, Dialect, DialectProvider};
use log::{debug, trace};
use regex::Regex;

use crate::error::{LexError, MatchOutcome};
use crate::line::Line;
use crate::location::Location;
use crate::token::{LineSpan, Token, TokenKind};

/// Prefix starting a comment line.
pub const COMMENT_PREFIX: &str = "#";
/// Prefix starting each tag on a tag line.
pub const TAG_PREFIX: char = '@';
/// Separator between a title keyword and its text.
pub const TITLE_KEYWORD_SEPARATOR: char = ':';
/// Delimiter between table cells.
pub const TABLE_CELL_SEPARATOR: char = '|';
/// Primary docstring fence literal.
pub const DOCSTRING_SEPARATOR: &str = "\"\"\"";
/// Alternate docstring fence literal.
pub const DOCSTRING_ALTERNATIVE_SEPARATOR: &str = "```";

static LANGUAGE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#\s*language\s*:\s*([a-zA-Z\-_]+)\s*$").unwrap_or_else(|_| unreachable!())
});

/// Stateful per-line recognizer for one document.
///
/// The `&mut self` on every recognizer gives each call exclusive access to
/// the carried state; a matcher instance must not be shared between
/// documents or threads.
///
/// # Examples
///
/// ```
/// use gherkin_lex::{Line, MatchOutcome, TokenKind, TokenMatcher};
/// use gherkin_lex_dialects::BuiltinDialects;
///
/// let provider = BuiltinDialects::new();
/// let mut matcher = TokenMatcher::new(&provider);
/// let MatchOutcome::Match(token) = matcher.match_line(&Line::new("Scenario: Logging in", 0))
/// else {
///     panic!("scenario line should match");
/// };
/// assert_eq!(token.kind, TokenKind::ScenarioLine);
/// assert_eq!(token.keyword.as_deref(), Some("Scenario"));
/// assert_eq!(token.text.as_deref(), Some("Logging in"));
/// ```
#[derive(Debug)]
pub struct TokenMatcher<'d, P: DialectProvider> {
    provider: &'d P,
    language: String,
    dialect: &'d Dialect,
    active_fence: Option<&'static str>,
    indent_to_remove: usize,
}

impl<'d, P: DialectProvider> TokenMatcher<'d, P> {
    /// Recognizers in priority order; the first that matches wins.
    const PRIORITY: [fn(&mut Self, &Line) -> MatchOutcome; 14] = [
        Self::match_eof,
        Self::match_empty,
        Self::match_language,
        Self::match_comment,
        Self::match_tag_line,
        Self::match_feature_line,
        Self::match_background_line,
        Self::match_scenario_line,
        Self::match_scenario_outline_line,
        Self::match_examples_line,
        Self::match_step_line,
        Self::match_docstring_separator,
        Self::match_table_row,
        Self::match_other,
    ];

    /// Recognizers tried while a docstring fence is open: only the closing
    /// fence or verbatim content can appear, so structural recognizers are
    /// skipped and content lines fall to the catch-all.
    const DOCSTRING_PRIORITY: [fn(&mut Self, &Line) -> MatchOutcome; 3] = [
        Self::match_eof,
        Self::match_docstring_separator,
        Self::match_other,
    ];

    /// Create a matcher starting in [`DEFAULT_LANGUAGE`].
    ///
    /// # Panics
    ///
    /// Panics when `provider` has no dialect for [`DEFAULT_LANGUAGE`].
    #[must_use]
    pub fn new(provider: &'d P) -> Self {
        let dialect = provider.dialect(DEFAULT_LANGUAGE).unwrap_or_else(|| {
            panic!("dialect provider must supply the default language {DEFAULT_LANGUAGE:?}")
        });
        Self {
            provider,
            language: DEFAULT_LANGUAGE.to_string(),
            dialect,
            active_fence: None,
            indent_to_remove: 0,
        }
    }

    /// Language code of the most recently resolved `# language:` directive.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// `true` while a docstring fence is open.
    #[must_use]
    pub fn in_docstring(&self) -> bool {
        self.active_fence.is_some()
    }

    /// Try every recognizer in priority order and return the first match.
    ///
    /// Always matches: the catch-all claims any line no other recognizer
    /// wants. While a docstring fence is open only the fence and catch-all
    /// recognizers run, so docstring content is never misread as
    /// structural lines.
    pub fn match_line(&mut self, line: &Line) -> MatchOutcome {
        let recognizers: &[fn(&mut Self, &Line) -> MatchOutcome] = if self.in_docstring() {
            &Self::DOCSTRING_PRIORITY
        } else {
            &Self::PRIORITY
        };
        for recognize in recognizers {
            match recognize(self, line) {
                MatchOutcome::NoMatch => {}
                outcome => return outcome,
            }
        }
        MatchOutcome::NoMatch
    }

    /// Match the synthetic end-of-input line.
    pub fn match_eof(&mut self, line: &Line) -> MatchOutcome {
        if !line.is_eof() {
            return MatchOutcome::NoMatch;
        }
        MatchOutcome::Match(self.token(TokenKind::Eof, line, line.indent()))
    }

    /// Match a line holding only whitespace.
    pub fn match_empty(&mut self, line: &Line) -> MatchOutcome {
        if !line.is_empty() {
            return MatchOutcome::NoMatch;
        }
        MatchOutcome::Match(self.token(TokenKind::Empty, line, line.indent()))
    }

    /// Match a `#` comment line; the token carries the entire untrimmed
    /// line so comments can be reproduced verbatim.
    pub fn match_comment(&mut self, line: &Line) -> MatchOutcome {
        if !line.starts_with(COMMENT_PREFIX) {
            return MatchOutcome::NoMatch;
        }
        let mut token = self.token(TokenKind::Comment, line, 0);
        token.text = Some(line.text().to_string());
        MatchOutcome::Match(token)
    }

    /// Match a `@tag` line, emitting one span per non-empty tag.
    ///
    /// The trimmed text is split on `@`; fragments that trim to nothing
    /// (stray or doubled prefixes) are dropped, and each span's column is
    /// accumulated from the consumed segment lengths so it points at the
    /// `@` in the original line. Duplicate tags are preserved.
    pub fn match_tag_line(&mut self, line: &Line) -> MatchOutcome {
        if !line.trimmed().starts_with(TAG_PREFIX) {
            return MatchOutcome::NoMatch;
        }
        let mut spans = Vec::new();
        let mut column = line.indent();
        for segment in line.trimmed().split(TAG_PREFIX) {
            let text = segment.trim_matches(' ');
            if !text.is_empty() {
                spans.push(LineSpan::new(column, format!("{TAG_PREFIX}{text}")));
            }
            column += segment.chars().count() + 1;
        }
        let mut token = self.token(TokenKind::TagLine, line, line.indent());
        token.spans = spans;
        MatchOutcome::Match(token)
    }

    /// Match a `Feature:` title line.
    pub fn match_feature_line(&mut self, line: &Line) -> MatchOutcome {
        self.match_title_line(line, TokenKind::FeatureLine, self.dialect.feature_keywords())
    }

    /// Match a `Background:` title line.
    pub fn match_background_line(&mut self, line: &Line) -> MatchOutcome {
        self.match_title_line(
            line,
            TokenKind::BackgroundLine,
            self.dialect.background_keywords(),
        )
    }

    /// Match a `Scenario:` title line.
    pub fn match_scenario_line(&mut self, line: &Line) -> MatchOutcome {
        self.match_title_line(
            line,
            TokenKind::ScenarioLine,
            self.dialect.scenario_keywords(),
        )
    }

    /// Match a `Scenario Outline:` title line.
    pub fn match_scenario_outline_line(&mut self, line: &Line) -> MatchOutcome {
        self.match_title_line(
            line,
            TokenKind::ScenarioOutlineLine,
            self.dialect.scenario_outline_keywords(),
        )
    }

    /// Match an `Examples:` title line.
    pub fn match_examples_line(&mut self, line: &Line) -> MatchOutcome {
        self.match_title_line(
            line,
            TokenKind::ExamplesLine,
            self.dialect.examples_keywords(),
        )
    }

    /// Match a step line: the trimmed text must literally start with a
    /// dialect step keyword, no separator required. The first keyword in
    /// dialect order wins even when a later one would consume more
    /// characters.
    pub fn match_step_line(&mut self, line: &Line) -> MatchOutcome {
        for keyword in self.dialect.step_keywords() {
            if let Some(rest) = line.trimmed().strip_prefix(keyword) {
                let mut token = self.token(TokenKind::StepLine, line, line.indent());
                token.keyword = Some(keyword.to_string());
                token.text = Some(rest.trim_matches(' ').to_string());
                return MatchOutcome::Match(token);
            }
        }
        MatchOutcome::NoMatch
    }

    /// Match a docstring fence, opening or closing a verbatim block.
    ///
    /// While closed, either fence literal opens; the line's indent is
    /// recorded for de-indenting content and the remainder after the
    /// literal rides along as a free-form content type. While open, only
    /// the exact literal that opened the block closes it; the other
    /// literal is ordinary content.
    pub fn match_docstring_separator(&mut self, line: &Line) -> MatchOutcome {
        if let Some(fence) = self.active_fence {
            if !line.starts_with(fence) {
                return MatchOutcome::NoMatch;
            }
            trace!("docstring closed by {fence} at line {}", line.number());
            self.indent_to_remove = 0;
            self.active_fence = None;
            return MatchOutcome::Match(self.token(
                TokenKind::DocStringSeparator,
                line,
                line.indent(),
            ));
        }

        let fence = if line.starts_with(DOCSTRING_SEPARATOR) {
            DOCSTRING_SEPARATOR
        } else if line.starts_with(DOCSTRING_ALTERNATIVE_SEPARATOR) {
            DOCSTRING_ALTERNATIVE_SEPARATOR
        } else {
            return MatchOutcome::NoMatch;
        };
        let content_type = line.trimmed().strip_prefix(fence).unwrap_or_default();
        trace!("docstring opened by {fence} at line {}", line.number());
        self.active_fence = Some(fence);
        self.indent_to_remove = line.indent();
        let mut token = self.token(TokenKind::DocStringSeparator, line, line.indent());
        token.text = Some(content_type.to_string());
        MatchOutcome::Match(token)
    }

    /// Match a `|`-delimited table row, emitting one span per cell.
    ///
    /// One leading and one trailing delimiter are stripped, the remainder
    /// is split on the delimiter, and each cell's column is computed from
    /// the running offset plus its leading spaces. Empty cells between two
    /// delimiters survive as empty-text spans. Column-count consistency
    /// across rows is the downstream grammar's concern, not checked here.
    pub fn match_table_row(&mut self, line: &Line) -> MatchOutcome {
        let trimmed = line.trimmed().trim_matches(' ');
        let Some(inner) = trimmed.strip_prefix(TABLE_CELL_SEPARATOR) else {
            return MatchOutcome::NoMatch;
        };
        let inner = inner.strip_suffix(TABLE_CELL_SEPARATOR).unwrap_or(inner);
        let mut spans = Vec::new();
        let mut column = line.indent() + 1;
        for cell in inner.split(TABLE_CELL_SEPARATOR) {
            let leading = cell.chars().take_while(|c| *c == ' ').count();
            spans.push(LineSpan::new(
                column + leading + 1,
                cell.trim_matches(' ').to_string(),
            ));
            column += cell.chars().count() + 1;
        }
        let mut token = self.token(TokenKind::TableRow, line, line.indent());
        token.spans = spans;
        MatchOutcome::Match(token)
    }

    /// Match a `# language: <code>` directive.
    ///
    /// A resolved code swaps the active dialect for all subsequent calls.
    /// An unresolved code still yields the language token, plus an
    /// [`LexError::UnsupportedLanguage`] diagnostic alongside it; the
    /// previous dialect stays active so the caller may continue.
    pub fn match_language(&mut self, line: &Line) -> MatchOutcome {
        let Some(captures) = LANGUAGE_DIRECTIVE.captures(line.trimmed()) else {
            return MatchOutcome::NoMatch;
        };
        let code = captures.get(1).map_or("", |m| m.as_str());
        let mut token = self.token(TokenKind::Language, line, line.indent());
        token.text = Some(code.to_string());
        match self.provider.dialect(code) {
            Some(dialect) => {
                debug!("switching dialect: {} -> {code}", self.language);
                self.language = code.to_string();
                self.dialect = dialect;
                MatchOutcome::Match(token)
            }
            None => {
                debug!("unsupported language {code:?}; keeping {}", self.language);
                let error = LexError::UnsupportedLanguage {
                    code: code.to_string(),
                    location: token.location,
                };
                MatchOutcome::Diagnostic { token, error }
            }
        }
    }

    /// The catch-all: always matches, carrying the raw line with up to
    /// the pending indent-to-strip leading spaces removed so docstring
    /// content is de-indented to its opening fence.
    pub fn match_other(&mut self, line: &Line) -> MatchOutcome {
        let strip = line
            .text()
            .chars()
            .take(self.indent_to_remove)
            .take_while(|c| *c == ' ')
            .count();
        let mut token = self.token(TokenKind::Other, line, 0);
        token.text = Some(line.text().chars().skip(strip).collect());
        MatchOutcome::Match(token)
    }

    fn match_title_line(
        &self,
        line: &Line,
        kind: TokenKind,
        keywords: &[String],
    ) -> MatchOutcome {
        for keyword in keywords {
            let title = line
                .trimmed()
                .strip_prefix(keyword.as_str())
                .and_then(|rest| rest.strip_prefix(TITLE_KEYWORD_SEPARATOR));
            if let Some(title) = title {
                let mut token = self.token(kind, line, line.indent());
                token.keyword = Some(keyword.clone());
                token.text = Some(title.trim_matches(' ').to_string());
                return MatchOutcome::Match(token);
            }
        }
        MatchOutcome::NoMatch
    }

    /// Build a token at the 0-based character `index` of `line`, surfaced
    /// as a 1-based column.
    fn token(&self, kind: TokenKind, line: &Line, index: usize) -> Token {
        Token::new(
            kind,
            Location::new(line.number(), index + 1),
            self.language.clone(),
        )
    }
}
