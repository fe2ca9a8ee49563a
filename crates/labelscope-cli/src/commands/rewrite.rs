//! Add a label to every node pattern of a query.

use std::fs;
use std::path::{Path, PathBuf};

use labelscope_lib::{ConfigMap, Error, LabelModification, LabelPolicy, Modification};
use serde::Serialize;
use tracing::debug;

use super::run_common;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct RewriteArgs {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub label: Option<String>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: bool,
}

#[derive(Serialize)]
struct RewriteOutput<'a> {
    label: Option<&'a str>,
    query: &'a str,
}

pub fn run(args: RewriteArgs) {
    let query = run_common::load_query(args.query_file.as_deref(), args.query_text.as_deref());

    let modification = match build_modification(args.label.as_deref(), args.config.as_deref()) {
        Ok(modification) => modification,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let rewritten = match modification.apply(&query) {
        Ok(rewritten) => rewritten,
        Err(Error::Parse(err)) => run_common::exit_with_parse_error(&query, &err, args.color),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    print!(
        "{}",
        format_output(args.format, configured_label(&modification), &rewritten)
    );
}

/// `--label` wins; otherwise the label is read from the JSON settings file.
pub fn build_modification(label: Option<&str>, config: Option<&Path>) -> Result<Modification, String> {
    if let Some(label) = label {
        return Ok(Modification::Label(LabelModification::for_label(label).into()));
    }

    let Some(path) = config else {
        return Err("a label is required: use -l/--label or --config".to_string());
    };
    debug!(path = %path.display(), "loading settings");
    let source = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    let config = ConfigMap::from_json(&source).map_err(|e| e.to_string())?;
    labelscope_lib::modification_from_config(&config).map_err(|e| e.to_string())
}

fn configured_label(modification: &Modification) -> Option<&str> {
    match modification {
        Modification::Label(m) => match m.policy() {
            LabelPolicy::Constant(label) => Some(label.as_str()),
            LabelPolicy::Provider(_) => None,
        },
        Modification::Identity => None,
    }
}

pub fn format_output(format: OutputFormat, label: Option<&str>, query: &str) -> String {
    match format {
        OutputFormat::Text => format!("{}\n", query),
        OutputFormat::Json => {
            let output = RewriteOutput { label, query };
            let json = serde_json::to_string_pretty(&output)
                .expect("string fields always serialize");
            format!("{}\n", json)
        }
    }
}
