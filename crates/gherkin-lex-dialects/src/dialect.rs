//! The [`Dialect`] type: one ordered keyword list per token category.
//!
//! Keyword order within each list is significant. The lexer resolves
//! ambiguity between overlapping keywords by taking the first listed match,
//! not the longest one, so reordering a list changes which inputs a dialect
//! accepts.

use serde::Deserialize;

/// Localized keyword lists for one language.
///
/// Title keywords (`feature`, `background`, `scenario`, `scenario_outline`,
/// `examples`) are matched against a line followed by the `:` separator.
/// Step keywords carry their own trailing separator where the language uses
/// one (`"Given "` does, Japanese `"前提"` does not), so they are matched as
/// literal prefixes.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dialect {
    /// English name of the language.
    pub name: String,
    /// Name of the language in the language itself.
    pub native: String,
    feature: Vec<String>,
    background: Vec<String>,
    scenario: Vec<String>,
    #[serde(rename = "scenarioOutline")]
    scenario_outline: Vec<String>,
    examples: Vec<String>,
    given: Vec<String>,
    when: Vec<String>,
    then: Vec<String>,
    and: Vec<String>,
    but: Vec<String>,
}

impl Dialect {
    /// Keywords opening a `Feature:` title line.
    #[must_use]
    pub fn feature_keywords(&self) -> &[String] {
        &self.feature
    }

    /// Keywords opening a `Background:` title line.
    #[must_use]
    pub fn background_keywords(&self) -> &[String] {
        &self.background
    }

    /// Keywords opening a `Scenario:` title line.
    #[must_use]
    pub fn scenario_keywords(&self) -> &[String] {
        &self.scenario
    }

    /// Keywords opening a `Scenario Outline:` title line.
    #[must_use]
    pub fn scenario_outline_keywords(&self) -> &[String] {
        &self.scenario_outline
    }

    /// Keywords opening an `Examples:` title line.
    #[must_use]
    pub fn examples_keywords(&self) -> &[String] {
        &self.examples
    }

    /// All step keywords in matching order: given, when, then, and, but.
    ///
    /// The wildcard keyword `"* "` appears in several source lists; the
    /// duplicates are harmless because the first match wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkin_lex_dialects::BuiltinDialects;
    /// use gherkin_lex_dialects::DialectProvider;
    ///
    /// let provider = BuiltinDialects::new();
    /// let en = provider.dialect("en").unwrap();
    /// assert!(en.step_keywords().any(|kw| kw == "Given "));
    /// ```
    pub fn step_keywords(&self) -> impl Iterator<Item = &str> {
        self.given
            .iter()
            .chain(&self.when)
            .chain(&self.then)
            .chain(&self.and)
            .chain(&self.but)
            .map(String::as_str)
    }
}
