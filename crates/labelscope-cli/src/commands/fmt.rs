//! Print a query in canonical form, without adding a label.

use std::path::PathBuf;

use super::run_common;

pub struct FmtArgs {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: FmtArgs) {
    let query = run_common::load_query(args.query_file.as_deref(), args.query_text.as_deref());
    let statement = run_common::parse_query(&query, args.color);

    println!("{}", labelscope_lib::render(&statement));
}
