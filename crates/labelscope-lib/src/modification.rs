//! Text-to-text entry point: resolve the label, parse, rewrite, render.

use std::sync::Arc;

use labelscope_syntax::Parser;
use labelscope_syntax::lexer::lex;
use labelscope_syntax::parser::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_FUEL};
use tracing::debug;

use crate::config::{CONFIGURATION_KEY, ConfigMap, ConfigValue};
use crate::label::LabelPolicy;
use crate::render::render;
use crate::rewrite::rewrite;
use crate::{Error, Result};

/// Adds a label to every node pattern of the queries it is applied to.
///
/// Holds no per-query state and can be shared across threads. Each
/// [`apply`](Self::apply) resolves the label anew, so a provider policy may
/// return a different label per call.
#[derive(Debug, Clone)]
pub struct LabelModification {
    policy: LabelPolicy,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
}

impl LabelModification {
    pub fn new(policy: impl Into<LabelPolicy>) -> Self {
        Self {
            policy: policy.into(),
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    pub fn for_label(label: impl Into<String>) -> Self {
        Self::new(LabelPolicy::Constant(label.into()))
    }

    pub fn with_provider(provider: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self::new(LabelPolicy::provider(provider))
    }

    /// Parser execution fuel. `None` = unlimited.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    /// Parser nesting limit. `None` = unlimited.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    pub fn policy(&self) -> &LabelPolicy {
        &self.policy
    }

    /// Returns `query` with the label added.
    ///
    /// The label is validated before the query is parsed, so an illegal
    /// label is reported even for malformed queries.
    pub fn apply(&self, query: &str) -> Result<String> {
        let label = self.policy.resolve()?;
        debug!(label = %label, query_len = query.len(), "applying label modification");

        let statement = Parser::new(query, lex(query))
            .with_exec_fuel(self.exec_fuel)
            .with_recursion_fuel(self.recursion_fuel)
            .parse()?;

        Ok(render(&rewrite(statement, &label)))
    }
}

/// Query transform registered with a host.
#[derive(Debug, Clone, Default)]
pub enum Modification {
    /// Returns queries unchanged.
    #[default]
    Identity,
    Label(Arc<LabelModification>),
}

impl Modification {
    pub fn apply(&self, query: &str) -> Result<String> {
        match self {
            Self::Identity => Ok(query.to_string()),
            Self::Label(modification) => modification.apply(query),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

/// Builds the transform configured under [`CONFIGURATION_KEY`].
///
/// A missing key yields [`Modification::Identity`]. The label itself is not
/// validated here; an illegal label fails on the first `apply`.
pub fn modification_from_config(config: &ConfigMap) -> Result<Modification> {
    let policy = match config.get(CONFIGURATION_KEY) {
        None => {
            debug!(key = CONFIGURATION_KEY, "no label configured");
            return Ok(Modification::Identity);
        }
        Some(ConfigValue::Text(label)) => LabelPolicy::Constant(label.clone()),
        Some(ConfigValue::Provider(provider)) => LabelPolicy::Provider(Arc::clone(provider)),
        Some(other) => {
            return Err(Error::ConfigurationType {
                key: CONFIGURATION_KEY.to_string(),
                found: other.type_name(),
            });
        }
    };
    Ok(Modification::Label(Arc::new(LabelModification::new(policy))))
}
