mod cli;
mod commands;

use std::io::IsTerminal;

use cli::{AstParams, CheckParams, FmtParams, RewriteParams, build_cli};
use tracing_subscriber::EnvFilter;

/// Log filter variable, e.g. `LABELSCOPE_LOG=labelscope_lib=trace`.
const LOG_ENV: &str = "LABELSCOPE_LOG";

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("rewrite", m)) => {
            let params = RewriteParams::from_matches(m);
            commands::rewrite::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("fmt", m)) => {
            let params = FmtParams::from_matches(m);
            commands::fmt::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
