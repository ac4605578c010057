use std::sync::Arc;

use anyhow::anyhow;

use crate::{
    configs::{ExporterConfig, ParameterStoreBackend},
    store::{
        adapters::{local_store::LocalParameterStore, ssm_store::SsmParameterStore},
        repository::ParameterStore,
    },
};

pub struct ParameterStoreFactory {
    config: Arc<ExporterConfig>,
}

impl ParameterStoreFactory {
    pub fn new(config: Arc<ExporterConfig>) -> Self {
        Self { config }
    }

    pub async fn create(&self) -> Result<Arc<dyn ParameterStore>, Box<dyn std::error::Error>> {
        let store: Arc<dyn ParameterStore> = match self.config.store_config.backend {
            ParameterStoreBackend::Ssm => {
                let ssm_config = self.config.store_config.ssm_config.clone();
                let ssm = SsmParameterStore::new(ssm_config)
                    .await
                    .map_err(|e| anyhow!(e.to_string()))?;
                Arc::new(ssm)
            }
            ParameterStoreBackend::Local => {
                let local_config = self.config.store_config.local_config.clone();
                let local = LocalParameterStore::from_file(&local_config.path)
                    .map_err(|e| anyhow!(e.to_string()))?;
                Arc::new(local)
            }
        };

        Ok(store)
    }
}
