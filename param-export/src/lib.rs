pub mod configs;
pub mod domain;
pub mod export;
pub mod store;

pub use configs::{Configs, ExportConfig, ExporterConfig, ParameterStoreBackend, StoreConfig};
pub use domain::{ParameterName, ParameterRecord};
pub use export::{
    ExportError, Fetcher, Materializer, ParameterExporter, parameter_names_from_json,
};
pub use store::adapters::{local_store::LocalParameterStore, ssm_store::SsmParameterStore};
pub use store::factory::ParameterStoreFactory;
pub use store::repository::{ParameterResponse, ParameterStore, StoreError};
