//! Label values and the policy that produces them.

use std::fmt;
use std::sync::Arc;

use crate::{Error, Result};

/// A label that passed validation: a letter followed by letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if !is_legal(&label) {
            return Err(Error::InvalidLabel { label });
        }
        Ok(Self(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_legal(label: &str) -> bool {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => chars.all(char::is_alphanumeric),
        _ => false,
    }
}

/// Zero-argument function that yields the label for one rewrite.
pub type LabelProvider = Arc<dyn Fn() -> String + Send + Sync>;

/// Where the label comes from: a fixed string or a provider called once per
/// rewrite. Neither form is validated until [`LabelPolicy::resolve`].
#[derive(Clone)]
pub enum LabelPolicy {
    Constant(String),
    Provider(LabelProvider),
}

impl LabelPolicy {
    pub fn constant(label: impl Into<String>) -> Self {
        Self::Constant(label.into())
    }

    pub fn provider(f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(f))
    }

    /// Produces the label for the current rewrite and validates it.
    pub fn resolve(&self) -> Result<Label> {
        let label = match self {
            Self::Constant(label) => label.clone(),
            Self::Provider(provider) => provider(),
        };
        Label::new(label)
    }
}

impl fmt::Debug for LabelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(label) => f.debug_tuple("Constant").field(label).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

impl From<&str> for LabelPolicy {
    fn from(label: &str) -> Self {
        Self::constant(label)
    }
}

impl From<String> for LabelPolicy {
    fn from(label: String) -> Self {
        Self::Constant(label)
    }
}

impl From<LabelProvider> for LabelPolicy {
    fn from(provider: LabelProvider) -> Self {
        Self::Provider(provider)
    }
}
