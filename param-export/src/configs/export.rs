use std::env;
use std::path::PathBuf;

use super::Configs;

const DEFAULT_OUTPUT_DIR: &str = "./data";

/// Where exported values land and whether secure values are resolved to
/// plaintext when fetched.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub decrypt: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            decrypt: true,
        }
    }
}

#[async_trait::async_trait]
impl Configs for ExportConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let output_dir = env::var("EXPORT_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let decrypt = env::var("EXPORT_WITH_DECRYPTION")
            .map(|v| v.trim().to_lowercase() != "false")
            .unwrap_or(true);

        Ok(ExportConfig {
            output_dir,
            decrypt,
        })
    }
}
