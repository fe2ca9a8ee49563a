pub mod ast;
pub mod check;
pub mod fmt;
pub mod query_loader;
pub mod rewrite;
pub mod run_common;
