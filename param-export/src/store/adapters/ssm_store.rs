use anyhow::Result as AnyResult;
use aws_config::BehaviorVersion;
use aws_sdk_ssm::Client;
use aws_types::region::Region;
use tracing::debug;

use crate::{
    configs::SsmStoreConfig,
    domain::ParameterRecord,
    store::repository::{ParameterResponse, ParameterStore, StoreError},
};

#[derive(Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub async fn new(config: SsmStoreConfig) -> AnyResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let shared_config = loader.load().await;
        let client = Client::new(&shared_config);

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl std::fmt::Debug for SsmParameterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmParameterStore").finish()
    }
}

#[async_trait::async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameters(
        &self,
        names: &[String],
        decrypt: bool,
    ) -> Result<ParameterResponse, StoreError> {
        debug!(count = names.len(), decrypt, "Requesting parameters from SSM");

        let response = self
            .client
            .get_parameters()
            .set_names(Some(names.to_vec()))
            .with_decryption(decrypt)
            .send()
            .await
            .map_err(|err| {
                StoreError::ConnectionFailed(format!(
                    "Failed to fetch parameters from SSM: {}",
                    err
                ))
            })?;

        let invalid_names = response.invalid_parameters().to_vec();

        let mut parameters = Vec::with_capacity(response.parameters().len());
        for parameter in response.parameters() {
            let name = parameter.name().ok_or_else(|| {
                StoreError::MalformedResponse(
                    "SSM returned a parameter without a name".to_string(),
                )
            })?;
            let value = parameter.value().ok_or_else(|| {
                StoreError::MalformedResponse(format!(
                    "SSM returned parameter '{}' without a value",
                    name
                ))
            })?;
            parameters.push(ParameterRecord::new(name, value));
        }

        Ok(ParameterResponse::new(parameters, invalid_names))
    }
}
