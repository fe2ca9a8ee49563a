//! Shared logic for the query commands.

use std::path::Path;

use labelscope_syntax::Statement;

use super::query_loader::load_query_source;

/// Loads the query or exits with an error message.
pub fn load_query(query_file: Option<&Path>, query_text: Option<&str>) -> String {
    let query = match load_query_source(query_file, query_text) {
        Ok(query) => query,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    if query.trim().is_empty() {
        eprintln!("error: query cannot be empty");
        std::process::exit(1);
    }

    query
}

/// Parses the query or exits after printing its diagnostics.
pub fn parse_query(query: &str, color: bool) -> Statement {
    match labelscope_syntax::parse(query) {
        Ok(statement) => statement,
        Err(err) => exit_with_parse_error(query, &err, color),
    }
}

pub fn exit_with_parse_error(query: &str, err: &labelscope_syntax::Error, color: bool) -> ! {
    match err.diagnostics() {
        Some(diagnostics) => eprint!("{}", diagnostics.render_colored(query, color)),
        None => eprintln!("error: {}", err),
    }
    std::process::exit(1);
}
