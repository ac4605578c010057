use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ParameterRecord;

/// One bulk lookup result: the parameters the store resolved plus the names
/// it could not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterResponse {
    parameters: Vec<ParameterRecord>,
    invalid_names: Vec<String>,
}

impl ParameterResponse {
    pub fn new(parameters: Vec<ParameterRecord>, invalid_names: Vec<String>) -> Self {
        Self {
            parameters,
            invalid_names,
        }
    }

    pub fn parameters(&self) -> &[ParameterRecord] {
        &self.parameters
    }

    pub fn invalid_names(&self) -> &[String] {
        &self.invalid_names
    }

    pub fn into_parts(self) -> (Vec<ParameterRecord>, Vec<String>) {
        (self.parameters, self.invalid_names)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    ConnectionFailed(String),
    MalformedResponse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            Self::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Minimal capability a parameter source has to provide: one bulk lookup,
/// with secure values resolved to plaintext when `decrypt` is set.
#[async_trait::async_trait]
pub trait ParameterStore: Send + Sync {
    async fn get_parameters(
        &self,
        names: &[String],
        decrypt: bool,
    ) -> Result<ParameterResponse, StoreError>;
}
