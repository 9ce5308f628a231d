pub mod app_config;
pub mod brand;
pub mod config;
pub mod run;

pub use app_config::AppConfig;
pub use brand::{BrandInput, BrandOutcome, FailureRecord, SellerInfo, SuccessRecord};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use run::{EmailEntry, RunAccumulator, RunSummary, Snapshot};
