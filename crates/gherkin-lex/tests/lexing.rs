//! End-to-end lexing of whole feature documents.

use gherkin_lex::{LineSpan, TokenKind, lex};
use gherkin_lex_dialects::BuiltinDialects;

const FEATURE: &str = "\
@billing @accounts
Feature: Withdrawals
  Background: An account exists

  Scenario Outline: Withdraw cash
    Given a balance of <balance>
    When I withdraw <amount>
    Then the balance is <remaining>

    Examples:
      | balance | amount | remaining |
      | 100     | 40     | 60        |
";

#[test]
fn full_document_token_sequence() {
    let provider = BuiltinDialects::new();
    let (tokens, errors) = lex(FEATURE, &provider);
    assert!(errors.is_empty());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::TagLine,
            TokenKind::FeatureLine,
            TokenKind::BackgroundLine,
            TokenKind::Empty,
            TokenKind::ScenarioOutlineLine,
            TokenKind::StepLine,
            TokenKind::StepLine,
            TokenKind::StepLine,
            TokenKind::Empty,
            TokenKind::ExamplesLine,
            TokenKind::TableRow,
            TokenKind::TableRow,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn locations_are_one_based_and_column_accurate() {
    let provider = BuiltinDialects::new();
    let (tokens, _) = lex(FEATURE, &provider);

    let feature = &tokens[1];
    assert_eq!(feature.location.line, 2);
    assert_eq!(feature.location.column, 1);

    let outline = &tokens[4];
    assert_eq!(outline.location.line, 5);
    assert_eq!(outline.location.column, 3);
}

#[test]
fn tag_and_cell_spans_survive_the_pipeline() {
    let provider = BuiltinDialects::new();
    let (tokens, _) = lex(FEATURE, &provider);

    assert_eq!(
        tokens[0].spans,
        [LineSpan::new(1, "@billing"), LineSpan::new(10, "@accounts")]
    );

    let header = &tokens[10];
    let cells: Vec<&str> = header.spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(cells, ["balance", "amount", "remaining"]);
    for span in &header.spans {
        assert!(span.column > header.location.column);
    }
}

#[test]
fn step_payloads_keep_placeholders_verbatim() {
    let provider = BuiltinDialects::new();
    let (tokens, _) = lex(FEATURE, &provider);
    let steps: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::StepLine)
        .filter_map(|t| t.text.as_deref())
        .collect();
    assert_eq!(
        steps,
        [
            "a balance of <balance>",
            "I withdraw <amount>",
            "the balance is <remaining>",
        ]
    );
}

#[test]
fn docstring_blocks_pass_through_verbatim() {
    let provider = BuiltinDialects::new();
    let source = "\
Scenario: Payload
  Given a request body
  \"\"\"json
  {
    \"amount\": 40
  }
  \"\"\"
";
    let (tokens, errors) = lex(source, &provider);
    assert!(errors.is_empty());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::ScenarioLine,
            TokenKind::StepLine,
            TokenKind::DocStringSeparator,
            TokenKind::Other,
            TokenKind::Other,
            TokenKind::Other,
            TokenKind::DocStringSeparator,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[2].text.as_deref(), Some("json"));

    // Content is de-indented to the opening fence.
    let body: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Other)
        .filter_map(|t| t.text.as_deref())
        .collect();
    assert_eq!(body, ["{", "  \"amount\": 40", "}"]);
}
