use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file '{0}' not found")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse configuration file '{0}'")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("Required configuration field '{0}' is missing or empty")]
    MissingField(&'static str),

    #[error("Configuration field '{0}' still holds a placeholder value")]
    Placeholder(&'static str),

    #[error("Target date '{0}' is not a valid YYYYMMDD date")]
    InvalidTargetDate(String),

    #[error("Invalid target hour")]
    InvalidTargetHour(#[from] crate::types::hour_key::InvalidHourKey),

    #[error("Configuration field '{0}' must be greater than zero")]
    NotPositive(&'static str),
}
