use std::sync::Arc;

use tracing::debug;

use crate::domain::ParameterRecord;
use crate::export::ExportError;
use crate::store::repository::ParameterStore;

pub struct Fetcher {
    store: Arc<dyn ParameterStore>,
    decrypt: bool,
}

impl Fetcher {
    pub fn new(store: Arc<dyn ParameterStore>, decrypt: bool) -> Self {
        Self { store, decrypt }
    }

    /// One bulk lookup. Any name the store cannot resolve fails the whole
    /// call; nothing partial is handed downstream.
    pub async fn fetch(&self, names: &[String]) -> Result<Vec<ParameterRecord>, ExportError> {
        debug!(count = names.len(), "Fetching parameters");

        let response = self
            .store
            .get_parameters(names, self.decrypt)
            .await
            .map_err(|err| ExportError::Transport(err.to_string()))?;

        let (parameters, invalid_names) = response.into_parts();

        if !invalid_names.is_empty() {
            return Err(ExportError::InvalidParameters(invalid_names));
        }

        Ok(parameters)
    }
}
