//! Feeds physical lines to a [`TokenMatcher`] in priority order.
//!
//! This is the loop the downstream grammar sits on top of: split the
//! source into [`Line`]s, offer each to the matcher, and hand back one
//! [`MatchOutcome`] per line. Input is a `&str`; file and stream I/O stay
//! with the caller.

use gherkin_lex_dialects::DialectProvider;

use crate::error::{LexError, MatchOutcome};
use crate::line::Line;
use crate::matcher::TokenMatcher;
use crate::token::Token;

/// Split source text into physical lines plus one end-of-input line.
///
/// Lines are split on `\n`; a trailing `\r` is tolerated so CRLF input
/// lexes identically. A trailing newline does not produce a phantom empty
/// line.
///
/// # Examples
///
/// ```
/// use gherkin_lex::split_lines;
///
/// let lines = split_lines("Feature: a\n  Scenario: b\n");
/// assert_eq!(lines.len(), 3);
/// assert!(lines[2].is_eof());
/// ```
#[must_use]
pub fn split_lines(source: &str) -> Vec<Line> {
    let mut lines: Vec<Line> = source
        .split('\n')
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
        .enumerate()
        .map(|(index, text)| Line::new(text, index))
        .collect();
    if source.is_empty() || source.ends_with('\n') {
        lines.pop();
    }
    let eof_index = lines.len();
    lines.push(Line::eof(eof_index));
    lines
}

/// Iterator over match outcomes for one document.
///
/// Yields exactly one [`MatchOutcome`] per physical line, then one for the
/// synthetic end-of-input line, then `None`. The catch-all recognizer
/// guarantees every yielded outcome carries a token.
pub struct Scanner<'d, P: DialectProvider> {
    matcher: TokenMatcher<'d, P>,
    lines: std::vec::IntoIter<Line>,
}

impl<'d, P: DialectProvider> Scanner<'d, P> {
    /// Scan `source` with an existing matcher (and whatever dialect state
    /// it carries).
    #[must_use]
    pub fn new(source: &str, matcher: TokenMatcher<'d, P>) -> Self {
        Self {
            matcher,
            lines: split_lines(source).into_iter(),
        }
    }

    /// The matcher and its carried state, for inspection mid-scan.
    #[must_use]
    pub fn matcher(&self) -> &TokenMatcher<'d, P> {
        &self.matcher
    }
}

impl<P: DialectProvider> Iterator for Scanner<'_, P> {
    type Item = MatchOutcome;

    fn next(&mut self) -> Option<MatchOutcome> {
        let line = self.lines.next()?;
        Some(self.matcher.match_line(&line))
    }
}

/// Lex a whole document, collecting tokens and diagnostics side by side.
///
/// Diagnostics are recoverable: the token stream keeps going after an
/// unsupported language directive, matched against the prior dialect.
///
/// # Examples
///
/// ```
/// use gherkin_lex::{TokenKind, lex};
/// use gherkin_lex_dialects::BuiltinDialects;
///
/// let provider = BuiltinDialects::new();
/// let (tokens, errors) = lex("Feature: Withdrawals\n", &provider);
/// assert!(errors.is_empty());
/// assert_eq!(tokens[0].kind, TokenKind::FeatureLine);
/// assert_eq!(tokens[1].kind, TokenKind::Eof);
/// ```
pub fn lex<P: DialectProvider>(source: &str, provider: &P) -> (Vec<Token>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for outcome in Scanner::new(source, TokenMatcher::new(provider)) {
        match outcome {
            MatchOutcome::Match(token) => tokens.push(token),
            MatchOutcome::Diagnostic { token, error } => {
                tokens.push(token);
                errors.push(error);
            }
            MatchOutcome::NoMatch => {
                unreachable!("the catch-all recognizer matches every line")
            }
        }
    }
    (tokens, errors)
}
