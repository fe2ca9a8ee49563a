use std::path::PathBuf;

use super::run_common;

pub struct CheckArgs {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let query = run_common::load_query(args.query_file.as_deref(), args.query_text.as_deref());
    run_common::parse_query(&query, args.color);

    // Silent on success (like cargo check)
}
