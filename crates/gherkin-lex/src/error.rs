//! The lexer's single diagnostic and the three-way match result.

use thiserror::Error;

use crate::location::Location;
use crate::token::Token;

/// Recoverable diagnostics raised while matching lines.
///
/// The only kind originating in this layer is an unresolved language code.
/// It is delivered alongside its language token, never instead of it, and
/// the matcher keeps its previous dialect so the caller may continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A `# language: <code>` directive named a code the dialect provider
    /// does not know.
    #[error("language not supported: {code} at {location}")]
    UnsupportedLanguage {
        /// The unresolved language code, verbatim.
        code: String,
        /// Position of the directive line.
        location: Location,
    },
}

/// Outcome of offering one line to one recognizer.
///
/// Recognizers never fail: they match, decline, or match while raising a
/// recoverable diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum MatchOutcome {
    /// The recognizer declined the line.
    NoMatch,
    /// The recognizer claimed the line.
    Match(Token),
    /// The recognizer claimed the line and raised a diagnostic alongside
    /// the token.
    Diagnostic {
        /// The matched token, usable for error reporting and recovery.
        token: Token,
        /// The diagnostic raised while matching.
        error: LexError,
    },
}

impl MatchOutcome {
    /// `true` unless the recognizer declined the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkin_lex::MatchOutcome;
    ///
    /// assert!(!MatchOutcome::NoMatch.matched());
    /// ```
    #[must_use]
    pub fn matched(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }

    /// Extract the token, if any, discarding a diagnostic.
    #[must_use]
    pub fn into_token(self) -> Option<Token> {
        match self {
            Self::NoMatch => None,
            Self::Match(token) | Self::Diagnostic { token, .. } => Some(token),
        }
    }
}
