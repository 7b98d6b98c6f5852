//! A dialect-aware line lexer for Gherkin feature files.
//!
//! The lexer turns raw physical lines into typed tokens for a downstream
//! grammar. Its core is [`TokenMatcher`]: an ordered set of per-line
//! recognizers over carried state (active dialect, open docstring fence,
//! pending indent-to-strip). [`Scanner`] and [`lex`] drive the matcher
//! over whole documents; keyword tables come from the
//! [`gherkin_lex_dialects`] crate or any other
//! [`DialectProvider`](gherkin_lex_dialects::DialectProvider).
//!
//! ```
//! use gherkin_lex::{TokenKind, lex};
//! use gherkin_lex_dialects::BuiltinDialects;
//!
//! let provider = BuiltinDialects::new();
//! let source = "Feature: Accounts\n  Scenario: Login\n    Given a user\n";
//! let (tokens, errors) = lex(source, &provider);
//! assert!(errors.is_empty());
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::FeatureLine,
//!         TokenKind::ScenarioLine,
//!         TokenKind::StepLine,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

mod error;
mod line;
mod location;
mod matcher;
mod scanner;
mod token;

pub use error::{LexError, MatchOutcome};
pub use line::Line;
pub use location::Location;
pub use matcher::{
    COMMENT_PREFIX, DOCSTRING_ALTERNATIVE_SEPARATOR, DOCSTRING_SEPARATOR, TABLE_CELL_SEPARATOR,
    TAG_PREFIX, TITLE_KEYWORD_SEPARATOR, TokenMatcher,
};
pub use scanner::{Scanner, lex, split_lines};
pub use token::{LineSpan, Token, TokenKind};
