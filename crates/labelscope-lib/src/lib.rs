//! labelscope: scopes Cypher queries to a logical partition by adding a label
//! to every node pattern.
//!
//! # Example
//!
//! ```
//! use labelscope_lib::LabelModification;
//!
//! let modification = LabelModification::for_label("Tenant42");
//! let query = modification.apply("MATCH (n)-[:KNOWS]->(m) RETURN n, m").unwrap();
//! assert_eq!(query, "MATCH (n:Tenant42)-[:KNOWS]->(m:Tenant42) RETURN n, m");
//! ```
//!
//! The pipeline is: resolve the label from its [`LabelPolicy`], parse the
//! query with [`labelscope_syntax`], rewrite the tree, render it back to text.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod label;
pub mod modification;
pub mod render;
pub mod rewrite;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod label_tests;
#[cfg(test)]
mod rewrite_tests;

pub use config::{CONFIGURATION_KEY, ConfigMap, ConfigValue};
pub use label::{Label, LabelPolicy, LabelProvider};
pub use modification::{LabelModification, Modification, modification_from_config};
pub use render::{StatementRenderer, render};
pub use rewrite::{LabelRewriter, rewrite};

/// Errors raised while configuring or applying a label modification.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The resolved label is empty, starts with a non-letter or contains a
    /// non-alphanumeric character. Raised before the query is parsed.
    #[error(
        "Only labels with alpha-numeric characters are allowed, starting with an alphabetic character. This label does not match the rule: {label}"
    )]
    InvalidLabel { label: String },

    /// The configuration entry holds neither a label nor a label provider.
    #[error("{key} value type is not supported: found {found}, expected a label string or a label provider")]
    ConfigurationType { key: String, found: &'static str },

    /// The configuration source could not be read as a JSON object.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Parse(#[from] labelscope_syntax::Error),
}

/// Result type for label modification operations.
pub type Result<T> = std::result::Result<T, Error>;
