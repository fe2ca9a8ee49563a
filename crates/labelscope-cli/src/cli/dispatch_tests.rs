//! Tests for CLI dispatch logic: argument validation and params extraction.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{ast_command, check_command, fmt_command, rewrite_command};
use crate::commands::rewrite::OutputFormat;

#[test]
fn cli_definition_is_valid() {
    build_cli().debug_assert();
}

#[test]
fn rewrite_extracts_label_and_query() {
    let m = rewrite_command()
        .try_get_matches_from(["rewrite", "-q", "MATCH (n) RETURN n", "-l", "Tenant"])
        .unwrap();

    let params = RewriteParams::from_matches(&m);

    assert_eq!(params.query_text.as_deref(), Some("MATCH (n) RETURN n"));
    assert_eq!(params.label.as_deref(), Some("Tenant"));
    assert_eq!(params.config, None);
    assert_eq!(params.format, OutputFormat::Text);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn rewrite_extracts_config_and_format() {
    let m = rewrite_command()
        .try_get_matches_from([
            "rewrite",
            "--query-file",
            "-",
            "--config",
            "settings.json",
            "--format",
            "json",
            "--color",
            "never",
        ])
        .unwrap();

    let params = RewriteParams::from_matches(&m);

    assert_eq!(params.query_file, Some(PathBuf::from("-")));
    assert_eq!(params.config, Some(PathBuf::from("settings.json")));
    assert_eq!(params.label, None);
    assert_eq!(params.format, OutputFormat::Json);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn rewrite_requires_a_label_source() {
    let result = rewrite_command().try_get_matches_from(["rewrite", "-q", "MATCH (n) RETURN n"]);
    assert!(result.is_err(), "rewrite without --label or --config must fail");
}

#[test]
fn rewrite_rejects_label_and_config_together() {
    let result = rewrite_command().try_get_matches_from([
        "rewrite",
        "-q",
        "MATCH (n) RETURN n",
        "-l",
        "A",
        "--config",
        "settings.json",
    ]);
    assert!(result.is_err(), "--label and --config are exclusive");
}

#[test]
fn query_text_conflicts_with_query_file() {
    let result =
        check_command().try_get_matches_from(["check", "-q", "RETURN 1", "--query-file", "q.cypher"]);
    assert!(result.is_err(), "-q and --query-file are exclusive");
}

#[test]
fn rejects_unknown_format() {
    let result = rewrite_command()
        .try_get_matches_from(["rewrite", "-q", "RETURN 1", "-l", "A", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn check_extracts_params() {
    let m = check_command()
        .try_get_matches_from(["check", "--query-file", "q.cypher", "--color", "always"])
        .unwrap();

    let params = CheckParams::from_matches(&m);

    assert_eq!(params.query_file, Some(PathBuf::from("q.cypher")));
    assert_eq!(params.query_text, None);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn ast_extracts_spans() {
    let m = ast_command()
        .try_get_matches_from(["ast", "-q", "RETURN 1", "--spans"])
        .unwrap();

    let params = AstParams::from_matches(&m);

    assert!(params.spans);
    assert_eq!(params.query_text.as_deref(), Some("RETURN 1"));
}

#[test]
fn fmt_extracts_params() {
    let m = fmt_command()
        .try_get_matches_from(["fmt", "-q", "RETURN 1"])
        .unwrap();

    let params = FmtParams::from_matches(&m);

    assert_eq!(params.query_text.as_deref(), Some("RETURN 1"));
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn color_choice_resolves_explicit_modes() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    for name in ["rewrite", "check", "ast", "fmt"] {
        assert!(help.contains(name), "help should mention {name}:\n{help}");
    }
}
