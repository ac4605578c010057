use std::fmt;

use serde::{Deserialize, Serialize};

/// Parameter store key, conventionally hierarchical: `/app/prod/db_password`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ParameterName(String);

impl ParameterName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Flattens the hierarchy into a single file-system friendly name:
    /// leading and trailing `/` are trimmed, remaining separators become `-`.
    /// Distinct keys can flatten to the same name; the last write wins.
    pub fn file_stem(&self) -> String {
        self.0.trim_matches('/').replace('/', "-")
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved parameter as returned by the store: name plus plaintext value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    name: ParameterName,
    value: String,
}

impl ParameterRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: ParameterName::new(name),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &ParameterName {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}
