use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::configs::ExportConfig;
use crate::store::repository::ParameterStore;

pub mod fetch;
pub mod materialize;

pub use fetch::Fetcher;
pub use materialize::Materializer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    InvalidInput(String),
    Transport(String),
    InvalidParameters(Vec<String>),
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Transport(msg) => write!(f, "Parameter store request failed: {}", msg),
            Self::InvalidParameters(names) => write!(
                f,
                "Parameter store reported invalid parameter(s): {}",
                names.join(", ")
            ),
            Self::Io(msg) => write!(f, "File operation failed: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

/// Fetches parameters in one bulk call and writes each value to its own
/// file under the configured output directory.
pub struct ParameterExporter {
    fetcher: Fetcher,
    materializer: Materializer,
}

impl ParameterExporter {
    pub fn new(store: Arc<dyn ParameterStore>, config: ExportConfig) -> Self {
        Self {
            fetcher: Fetcher::new(store, config.decrypt),
            materializer: Materializer::new(config.output_dir),
        }
    }

    /// Returns the written paths, one per parameter, in the order the store
    /// returned the values. The first failure wins; on any failure no path
    /// list is produced.
    pub async fn export_to_files(&self, names: &[String]) -> Result<Vec<PathBuf>, ExportError> {
        info!(count = names.len(), "Exporting parameters to files");

        let records = self.fetcher.fetch(names).await?;
        let paths = self.materializer.materialize(&records).await?;

        info!(files = paths.len(), "Export finished");
        Ok(paths)
    }

    /// Same as [`Self::export_to_files`] for callers handing over a raw JSON
    /// payload. Anything but an array of strings is rejected before the
    /// store is contacted.
    pub async fn export_json(&self, input: &Value) -> Result<Vec<PathBuf>, ExportError> {
        let names = parameter_names_from_json(input)?;
        self.export_to_files(&names).await
    }
}

pub fn parameter_names_from_json(input: &Value) -> Result<Vec<String>, ExportError> {
    let items = input.as_array().ok_or_else(|| {
        ExportError::InvalidInput("expected an array of parameter names".to_string())
    })?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ExportError::InvalidInput(format!(
                    "expected an array of strings, found element: {}",
                    item
                ))
            })
        })
        .collect()
}
