pub mod app_config;
pub mod config;
pub mod directory;
pub mod facility;
pub mod search;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use directory::{Directory, DirectoryView, LoadState};
pub use facility::{FacilityRecord, FacilityStatus, FacilityType};
pub use search::{search, Query, SearchField};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown facility status: {0}")]
    UnknownStatus(String),
}
