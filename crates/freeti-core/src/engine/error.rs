use thiserror::Error;

use super::config::ConfigError;
use crate::core::profile::ProfileError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to build diagnostic profile: {source}")]
    Profile {
        #[from]
        source: ProfileError,
    },

    #[error("Failed to write profile data: {0}")]
    Csv(#[from] csv::Error),
}
