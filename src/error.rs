use crate::config::error::ConfigError;
use crate::sheet::error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to prepare sheet")]
    SheetHeader(#[source] StoreError),

    #[error("Failed to append row for {hour} after writing {written} rows this cycle")]
    StoreWrite {
        hour: String,
        written: usize,
        #[source]
        source: StoreError,
    },
}
