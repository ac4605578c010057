pub mod export;
pub mod store;

pub use export::ExportConfig;
pub use store::{LocalStoreConfig, ParameterStoreBackend, SsmStoreConfig, StoreConfig};

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, Clone)]
pub struct ExporterConfig {
    pub export_config: ExportConfig,
    pub store_config: StoreConfig,
}

#[async_trait::async_trait]
impl Configs for ExporterConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self {
            export_config: ExportConfig::load().await?,
            store_config: StoreConfig::load().await?,
        })
    }
}
