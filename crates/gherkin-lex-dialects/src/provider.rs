//! Dialect lookup: the [`DialectProvider`] seam and the built-in table.
//!
//! The lexer takes any provider, so callers can inject their own keyword
//! tables (for instance to add a language this crate does not ship). The
//! built-in table is embedded JSON parsed once and shared by every
//! [`BuiltinDialects`] instance.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use thiserror::Error;

use crate::dialect::Dialect;

/// Language code assumed before any `# language:` directive is seen.
pub const DEFAULT_LANGUAGE: &str = "en";

const EMBEDDED_TABLE: &str = include_str!("dialects.json");

/// Maps a language code to its keyword table.
///
/// Implementations must be pure lookups: the lexer may call `dialect` any
/// number of times with the same code and expects a stable answer.
pub trait DialectProvider {
    /// Look up the dialect for `language`, or `None` when unsupported.
    fn dialect(&self, language: &str) -> Option<&Dialect>;
}

/// Error raised when a dialect table fails to deserialize.
#[derive(Debug, Error)]
#[error("malformed dialect table: {0}")]
pub struct DialectTableError(#[from] serde_json::Error);

/// Parse a JSON dialect table keyed by language code.
///
/// # Errors
///
/// Returns [`DialectTableError`] when the JSON is malformed or a dialect
/// entry is missing a keyword category.
pub fn parse_table(json: &str) -> Result<BTreeMap<String, Dialect>, DialectTableError> {
    Ok(serde_json::from_str(json)?)
}

static BUILTIN: LazyLock<BTreeMap<String, Dialect>> = LazyLock::new(|| {
    parse_table(EMBEDDED_TABLE)
        .unwrap_or_else(|e| panic!("embedded dialect table failed to parse: {e}"))
});

/// Provider backed by the embedded dialect table.
///
/// Cheap to construct; all instances share one parsed table.
///
/// # Examples
///
/// ```
/// use gherkin_lex_dialects::{BuiltinDialects, DialectProvider, DEFAULT_LANGUAGE};
///
/// let provider = BuiltinDialects::new();
/// assert!(provider.dialect(DEFAULT_LANGUAGE).is_some());
/// assert!(provider.dialect("tlh").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDialects;

impl BuiltinDialects {
    /// Create a provider over the embedded table.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Language codes shipped with this crate, in sorted order.
    pub fn languages() -> impl Iterator<Item = &'static str> {
        BUILTIN.keys().map(String::as_str)
    }
}

impl DialectProvider for BuiltinDialects {
    fn dialect(&self, language: &str) -> Option<&Dialect> {
        BUILTIN.get(language)
    }
}
