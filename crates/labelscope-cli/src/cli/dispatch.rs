//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep the unresolved
//! `ColorChoice`; the `From` impls resolve it when handing off to a command.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::fmt::FmtArgs;
use crate::commands::rewrite::{OutputFormat, RewriteArgs};

pub struct RewriteParams {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub label: Option<String>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl RewriteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
        Self {
            query_text: m.get_one::<String>("query_text").cloned(),
            query_file: m.get_one::<PathBuf>("query_file").cloned(),
            label: m.get_one::<String>("label").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            format,
            color: parse_color(m),
        }
    }
}

impl From<RewriteParams> for RewriteArgs {
    fn from(p: RewriteParams) -> Self {
        Self {
            query_text: p.query_text,
            query_file: p.query_file,
            label: p.label,
            config: p.config,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_text: m.get_one::<String>("query_text").cloned(),
            query_file: m.get_one::<PathBuf>("query_file").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            query_text: p.query_text,
            query_file: p.query_file,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub spans: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_text: m.get_one::<String>("query_text").cloned(),
            query_file: m.get_one::<PathBuf>("query_file").cloned(),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            query_text: p.query_text,
            query_file: p.query_file,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FmtParams {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub color: ColorChoice,
}

impl FmtParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_text: m.get_one::<String>("query_text").cloned(),
            query_file: m.get_one::<PathBuf>("query_file").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<FmtParams> for FmtArgs {
    fn from(p: FmtParams) -> Self {
        Self {
            query_text: p.query_text,
            query_file: p.query_file,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
