//! Show the syntax tree of a query.

use std::path::PathBuf;

use super::run_common;

pub struct AstArgs {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let query = run_common::load_query(args.query_file.as_deref(), args.query_text.as_deref());
    let statement = run_common::parse_query(&query, args.color);

    print!("{}", statement.printer().with_spans(args.spans).dump());
}
