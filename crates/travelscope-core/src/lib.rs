pub mod advisory;
pub mod app_config;
pub mod config;

use thiserror::Error;

pub use advisory::{AdvisoryLevel, AdvisoryRecord, AdvisoryStatus, HealthLevel};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_USER_AGENT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
