mod expressions_tests;

use crate::parse;

/// Parses `input` and dumps the tree, panicking on syntax errors.
fn dump(input: &str) -> String {
    match parse(input) {
        Ok(statement) => statement.printer().dump(),
        Err(err) => panic!("{}: {:?}", err, err.diagnostics()),
    }
}

fn dump_with_spans(input: &str) -> String {
    match parse(input) {
        Ok(statement) => statement.printer().with_spans(true).dump(),
        Err(err) => panic!("{}: {:?}", err, err.diagnostics()),
    }
}

/// Parses `input` expecting failure and renders the diagnostics plainly.
fn errors(input: &str) -> String {
    let err = match parse(input) {
        Ok(statement) => panic!("expected a syntax error, got:\n{}", statement.printer().dump()),
        Err(err) => err,
    };
    let diagnostics = err
        .diagnostics()
        .unwrap_or_else(|| panic!("expected diagnostics, got {}", err));
    diagnostics
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
