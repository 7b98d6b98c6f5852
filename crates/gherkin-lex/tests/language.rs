//! Language directives across whole documents: switching, diagnostics,
//! and recovery with the prior dialect.

use gherkin_lex::{LexError, Location, TokenKind, lex};
use gherkin_lex_dialects::BuiltinDialects;

#[test]
fn directive_switches_keywords_for_the_rest_of_the_document() {
    let provider = BuiltinDialects::new();
    let source = "\
# language: fr
Fonctionnalité: Retraits
  Scénario: Retrait simple
    Soit un solde de 100
    Quand je retire 40
    Alors le solde est 60
";
    let (tokens, errors) = lex(source, &provider);
    assert!(errors.is_empty());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Language,
            TokenKind::FeatureLine,
            TokenKind::ScenarioLine,
            TokenKind::StepLine,
            TokenKind::StepLine,
            TokenKind::StepLine,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[3].keyword.as_deref(), Some("Soit "));
    assert_eq!(tokens[3].language, "fr");
}

#[test]
fn list_order_resolves_the_french_apostrophe_keyword() {
    let provider = BuiltinDialects::new();
    let source = "# language: fr\nLorsqu'un retrait est demandé\n";
    let (tokens, errors) = lex(source, &provider);
    assert!(errors.is_empty());
    assert_eq!(tokens[1].kind, TokenKind::StepLine);
    assert_eq!(tokens[1].keyword.as_deref(), Some("Lorsqu'"));
    assert_eq!(tokens[1].text.as_deref(), Some("un retrait est demandé"));
}

#[test]
fn unsupported_code_reports_and_parsing_continues_in_english() {
    let provider = BuiltinDialects::new();
    let source = "\
# language: fr-CA
Feature: Still English
  Scenario: Fallback
";
    let (tokens, errors) = lex(source, &provider);

    assert_eq!(
        errors,
        [LexError::UnsupportedLanguage {
            code: "fr-CA".to_string(),
            location: Location::new(1, 1),
        }]
    );

    // The language token is still emitted, then the default dialect
    // carries on matching.
    assert_eq!(tokens[0].kind, TokenKind::Language);
    assert_eq!(tokens[0].text.as_deref(), Some("fr-CA"));
    assert_eq!(tokens[1].kind, TokenKind::FeatureLine);
    assert_eq!(tokens[2].kind, TokenKind::ScenarioLine);
}

#[test]
fn diagnostic_message_names_the_code_and_location() {
    let provider = BuiltinDialects::new();
    let (_, errors) = lex("  # language: tlh\n", &provider);
    assert_eq!(
        errors
            .first()
            .map(std::string::ToString::to_string)
            .unwrap_or_default(),
        "language not supported: tlh at 1:3"
    );
}

#[test]
fn later_directive_can_switch_again() {
    let provider = BuiltinDialects::new();
    let source = "\
# language: de
Funktionalität: Erste
# language: ja
機能: 二番目
";
    let (tokens, errors) = lex(source, &provider);
    assert!(errors.is_empty());
    assert_eq!(tokens[1].kind, TokenKind::FeatureLine);
    assert_eq!(tokens[1].keyword.as_deref(), Some("Funktionalität"));
    assert_eq!(tokens[3].kind, TokenKind::FeatureLine);
    assert_eq!(tokens[3].keyword.as_deref(), Some("機能"));
}
