use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use anyhow::{Result as AnyResult, anyhow};

use crate::domain::ParameterRecord;
use crate::store::repository::{ParameterResponse, ParameterStore, StoreError};

/// In-memory parameter source. Stands in for the remote store in tests and
/// offline runs; names it does not hold are reported as invalid, the way the
/// remote store reports them.
#[derive(Clone)]
pub struct LocalParameterStore {
    parameters: Arc<RwLock<HashMap<String, String>>>,
}

impl LocalParameterStore {
    pub fn new() -> Self {
        Self {
            parameters: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_parameters<N, V>(entries: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        for (name, value) in entries {
            store.insert(name, value);
        }
        store
    }

    /// Loads a JSON object of name/value pairs, e.g. `{"/app/key": "value"}`.
    pub fn from_file(path: impl AsRef<Path>) -> AnyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("unable to read parameters from {}: {}", path.display(), e))?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| anyhow!("invalid parameters file {}: {}", path.display(), e))?;

        Ok(Self {
            parameters: Arc::new(RwLock::new(entries)),
        })
    }

    pub fn insert(&self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters
            .write()
            .unwrap()
            .insert(name.into(), value.into());
    }

    pub fn clear(&self) {
        self.parameters.write().unwrap().clear();
    }
}

impl Default for LocalParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ParameterStore for LocalParameterStore {
    async fn get_parameters(
        &self,
        names: &[String],
        _decrypt: bool,
    ) -> Result<ParameterResponse, StoreError> {
        let parameters_map = self.parameters.read().unwrap();

        let mut parameters = Vec::new();
        let mut invalid_names = Vec::new();
        for name in names {
            match parameters_map.get(name) {
                Some(value) => parameters.push(ParameterRecord::new(name.clone(), value.clone())),
                None => invalid_names.push(name.clone()),
            }
        }

        Ok(ParameterResponse::new(parameters, invalid_names))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn test_resolves_in_request_order() {
        let store = LocalParameterStore::with_parameters([
            ("/app/first", "1"),
            ("/app/second", "2"),
        ]);

        let names = vec!["/app/second".to_string(), "/app/first".to_string()];
        let response = store.get_parameters(&names, true).await.unwrap();

        assert_eq!(response.invalid_names().len(), 0);
        assert_eq!(response.parameters()[0].name().as_str(), "/app/second");
        assert_eq!(response.parameters()[1].name().as_str(), "/app/first");
    }

    #[tokio::test]
    async fn test_unknown_names_reported_invalid() {
        let store = LocalParameterStore::with_parameters([("/app/known", "v")]);

        let names = vec!["/app/known".to_string(), "/app/unknown".to_string()];
        let response = store.get_parameters(&names, true).await.unwrap();

        assert_eq!(response.parameters().len(), 1);
        assert_eq!(response.invalid_names(), ["/app/unknown".to_string()]);
    }

    #[tokio::test]
    async fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("parameters.json");
        fs::write(&path, r#"{"/app/key": "file value"}"#).unwrap();

        let store = LocalParameterStore::from_file(&path).unwrap();
        let response = store
            .get_parameters(&["/app/key".to_string()], true)
            .await
            .unwrap();

        assert_eq!(response.parameters()[0].value(), "file value");
    }

    #[test]
    fn test_from_file_rejects_non_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("parameters.json");
        fs::write(&path, r#"["not", "an", "object"]"#).unwrap();

        let result = LocalParameterStore::from_file(&path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("invalid parameters file")
        );
    }
}
