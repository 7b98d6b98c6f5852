//! Localized Gherkin keyword tables for `gherkin-lex`.
//!
//! A [`Dialect`] holds one ordered keyword list per structural token
//! category; a [`DialectProvider`] resolves language codes to dialects.
//! The lexer treats both as injected, read-only data: load once, share
//! across matcher instances.

mod dialect;
mod provider;

pub use dialect::Dialect;
pub use provider::{
    BuiltinDialects, DEFAULT_LANGUAGE, DialectProvider, DialectTableError, parse_table,
};
