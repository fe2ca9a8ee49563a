use rowan::TextRange;

use super::*;

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::ExpectedExpression,
            TextRange::new(0.into(), 5.into()),
        )
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics.is_empty());
    assert_eq!(
        diagnostics.primary().map(|d| d.message()),
        Some("expected an expression")
    );
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::UnknownClause,
            TextRange::new(0.into(), 4.into()),
        )
        .message("LOAD")
        .emit();

    assert_eq!(
        diagnostics.primary().map(|d| d.message()),
        Some("`LOAD` is not a supported clause")
    );
}

#[test]
fn primary_prefers_structural_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::UnexpectedToken,
            TextRange::new(3.into(), 4.into()),
        )
        .emit();
    diagnostics
        .report(
            DiagnosticKind::UnclosedParen,
            TextRange::new(0.into(), 4.into()),
        )
        .emit();

    let primary = diagnostics.primary().map(|d| d.kind());
    assert_eq!(primary, Some(DiagnosticKind::UnclosedParen));
}

#[test]
fn builder_with_related() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::UnclosedParen,
            TextRange::new(0.into(), 5.into()),
        )
        .message("primary")
        .related_to("related info", TextRange::new(6.into(), 10.into()))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    let result = diagnostics.printer("hello world!").render();
    insta::assert_snapshot!(result, @r"
    error: missing closing `)`; primary
      |
    1 | hello world!
      | ^^^^^ ---- related info
    ");
}

#[test]
fn display_plain() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::UnclosedBracket,
            TextRange::new(2.into(), 7.into()),
        )
        .message("list opened here")
        .related_to("opened here", TextRange::new(2.into(), 3.into()))
        .emit();

    let rendered: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    insta::assert_snapshot!(rendered.join("\n"), @"error at 2..7: missing closing `]`; list opened here (related: opened here at 2..3)");
}

#[test]
fn default_hint_attached() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::ExpectedClause,
            TextRange::new(0.into(), 1.into()),
        )
        .emit();

    let rendered = diagnostics.iter().map(|d| d.to_string()).collect::<String>();
    assert!(rendered.contains("(hint: a query starts with a clause"));
}

#[test]
fn empty_renders_nothing() {
    let diagnostics = Diagnostics::new();
    assert_eq!(diagnostics.render("MATCH (n)"), "");
}
