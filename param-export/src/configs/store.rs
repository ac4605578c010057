use std::env;

use super::Configs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterStoreBackend {
    Ssm,
    Local,
}

#[derive(Debug, Clone, Default)]
pub struct SsmStoreConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LocalStoreConfig {
    pub is_enabled: bool,
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: ParameterStoreBackend,
    pub ssm_config: SsmStoreConfig,
    pub local_config: LocalStoreConfig,
}

fn load_store_backend() -> ParameterStoreBackend {
    let backend_str = env::var("EXPORT_STORE_BACKEND")
        .unwrap_or("ssm".to_string())
        .to_lowercase();
    match backend_str.as_str() {
        "local" | "file" => ParameterStoreBackend::Local,
        _ => ParameterStoreBackend::Ssm,
    }
}

#[async_trait::async_trait]
impl Configs for SsmStoreConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if load_store_backend() == ParameterStoreBackend::Ssm {
            Ok(SsmStoreConfig {
                region: env::var("AWS_REGION").ok(),
                profile: env::var("AWS_PROFILE").ok(),
                endpoint_url: env::var("AWS_ENDPOINT")
                    .or_else(|_| env::var("SSM_ENDPOINT"))
                    .ok(),
            })
        } else {
            Ok(Default::default())
        }
    }
}

#[async_trait::async_trait]
impl Configs for LocalStoreConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if load_store_backend() == ParameterStoreBackend::Local {
            Ok(LocalStoreConfig {
                is_enabled: true,
                path: env::var("LOCAL_PARAMETERS_PATH").map_err(|_| {
                    "Missing required environment variable: LOCAL_PARAMETERS_PATH"
                })?,
            })
        } else {
            Ok(Default::default())
        }
    }
}

#[async_trait::async_trait]
impl Configs for StoreConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let backend = load_store_backend();
        Ok(StoreConfig {
            backend,
            ssm_config: SsmStoreConfig::load().await?,
            local_config: LocalStoreConfig::load().await?,
        })
    }
}
