//! Host settings map and the value types it can carry.
//!
//! Hosts register the modification through a settings map. The label lives
//! under [`CONFIGURATION_KEY`] either as a string or as a provider function.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::label::LabelProvider;
use crate::{Error, Result};

/// Settings key holding the label or label provider.
pub const CONFIGURATION_KEY: &str = "cypher.modification.label";

/// One settings value.
#[derive(Clone)]
pub enum ConfigValue {
    Text(String),
    Provider(LabelProvider),
    /// Anything else a settings source may hold.
    Other(Value),
}

impl ConfigValue {
    /// Short name of the value's type, used in configuration errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Provider(_) => "provider",
            Self::Other(Value::Null) => "null",
            Self::Other(Value::Bool(_)) => "boolean",
            Self::Other(Value::Number(_)) => "number",
            Self::Other(Value::String(_)) => "string",
            Self::Other(Value::Array(_)) => "array",
            Self::Other(Value::Object(_)) => "object",
        }
    }
}

impl fmt::Debug for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
            Self::Other(value) => f.debug_tuple("Other").field(value).finish(),
        }
    }
}

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<LabelProvider> for ConfigValue {
    fn from(provider: LabelProvider) -> Self {
        Self::Provider(provider)
    }
}

/// Insertion-ordered settings map.
#[derive(Debug, Clone, Default)]
pub struct ConfigMap(IndexMap<String, ConfigValue>);

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn insert_provider(
        &mut self,
        key: impl Into<String>,
        provider: impl Fn() -> String + Send + Sync + 'static,
    ) -> Option<ConfigValue> {
        self.0
            .insert(key.into(), ConfigValue::Provider(Arc::new(provider)))
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Reads a flat JSON object: `{"cypher.modification.label": "Tenant"}`.
    pub fn from_json(source: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(Error::InvalidConfig(format!(
                    "expected a JSON object, found {}",
                    ConfigValue::Other(other).type_name()
                )));
            }
        };
        Ok(object
            .into_iter()
            .map(|(key, value)| (key, ConfigValue::from(value)))
            .collect())
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
