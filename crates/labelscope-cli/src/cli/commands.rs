//! Command builders for the CLI.

use clap::{ArgGroup, Command};

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("labelscope")
        .about("Scope Cypher queries to a partition by injecting a label")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(rewrite_command())
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(fmt_command())
}

fn with_query_args(cmd: Command) -> Command {
    cmd.arg(query_text_arg()).arg(query_file_arg())
}

/// Add a label to every node pattern of a query.
pub fn rewrite_command() -> Command {
    let cmd = Command::new("rewrite")
        .about("Add a label to every node pattern of a query")
        .override_usage(
            "\
  labelscope rewrite -q <TEXT> --label <LABEL>
  labelscope rewrite --query-file <FILE> --config <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  labelscope rewrite -q 'MATCH (n) RETURN n' -l Tenant42
  labelscope rewrite --query-file query.cypher -l Tenant42 --format json
  cat query.cypher | labelscope rewrite --query-file - --config settings.json"#,
        )
        .arg(label_arg())
        .arg(config_arg())
        .group(
            ArgGroup::new("label_source")
                .args(["label", "config"])
                .required(true),
        )
        .arg(format_arg())
        .arg(color_arg());

    with_query_args(cmd)
}

/// Validate query syntax.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate query syntax")
        .after_help(
            r#"EXAMPLES:
  labelscope check -q 'MATCH (n RETURN n'
  labelscope check --query-file query.cypher"#,
        )
        .arg(color_arg());

    with_query_args(cmd)
}

/// Show the syntax tree of a query.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the syntax tree of a query")
        .after_help(
            r#"EXAMPLES:
  labelscope ast -q 'MATCH (n:Person) RETURN n'
  labelscope ast --query-file query.cypher --spans"#,
        )
        .arg(spans_arg())
        .arg(color_arg());

    with_query_args(cmd)
}

/// Print a query in canonical form without adding a label.
pub fn fmt_command() -> Command {
    let cmd = Command::new("fmt")
        .about("Print a query in canonical form")
        .after_help(
            r#"EXAMPLES:
  labelscope fmt -q "match (n{name:'x'}) return n""#,
        )
        .arg(color_arg());

    with_query_args(cmd)
}
