use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to inspect sheet file '{0}'")]
    Metadata(PathBuf, #[source] std::io::Error),

    #[error("Failed to create sheet directory '{0}'")]
    DirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to open sheet file '{0}' for appending")]
    Open(PathBuf, #[source] std::io::Error),

    #[error("Failed to write row to sheet file '{0}'")]
    Write(PathBuf, #[source] csv::Error),

    #[error("Failed to flush sheet file '{0}'")]
    Flush(PathBuf, #[source] std::io::Error),

    #[error("Sheet rejected row: {0}")]
    Rejected(String),
}
