//! Loads and validates the collector's configuration.
//!
//! The file is JSON with the keys the collector has always used
//! (`api_key`, `dong_code`, `target_date`, `sheet_name`, `google_auth_file`),
//! plus optional tuning keys. Validation happens once, up front, and produces an
//! immutable [`ForecastConfig`] that is passed explicitly to the collector.

use crate::config::error::ConfigError;
use crate::fetch::variable_fetcher::{DEFAULT_BASE_URL, DEFAULT_NUM_OF_ROWS};
use crate::types::hour_key::{HourKey, DEFAULT_TARGET_HOURS};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Markers left in the shipped config template.
const PLACEHOLDER_MARKERS: [&str; 3] = ["여기에", "본인의", "YOUR_"];

/// Configuration exactly as read from disk. Nothing here has been checked yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    pub api_key: Option<String>,
    pub dong_code: Option<String>,
    pub target_date: Option<String>,
    pub sheet_name: Option<String>,
    pub google_auth_file: Option<String>,
    pub base_url: Option<String>,
    pub num_of_rows: Option<u32>,
    pub target_hours: Option<Vec<String>>,
    pub request_timeout_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
}

/// Validated configuration for one collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastConfig {
    pub api_key: String,
    pub cell_code: String,
    pub target_date: NaiveDate,
    /// Sorted, without duplicates.
    pub target_hours: Vec<HourKey>,
    pub sheet_name: String,
    pub credentials_file: PathBuf,
    pub base_url: String,
    pub num_of_rows: u32,
    pub request_timeout: Duration,
    pub output_dir: PathBuf,
}

/// Reads a [`RawConfig`] from a JSON file.
pub fn load_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Read(path.to_path_buf(), e),
    })?;
    serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
}

impl RawConfig {
    /// Checks every field and builds a [`ForecastConfig`].
    ///
    /// # Errors
    ///
    /// * [`ConfigError::MissingField`] if a required field is absent or blank.
    /// * [`ConfigError::Placeholder`] if a required field still holds a template marker.
    /// * [`ConfigError::InvalidTargetDate`] if `target_date` is not `YYYYMMDD`.
    /// * [`ConfigError::InvalidTargetHour`] if a target hour is not `00`..`23`.
    /// * [`ConfigError::NotPositive`] for a zero `num_of_rows` or timeout.
    pub fn validate(self) -> Result<ForecastConfig, ConfigError> {
        let api_key = required("api_key", self.api_key)?;
        let cell_code = required("dong_code", self.dong_code)?;
        let target_date_raw = required("target_date", self.target_date)?;
        let sheet_name = required("sheet_name", self.sheet_name)?;
        let credentials_file = required("google_auth_file", self.google_auth_file)?;

        let target_date = parse_target_date(&target_date_raw)?;

        let target_hours = match self.target_hours {
            Some(hours) if !hours.is_empty() => hours
                .iter()
                .map(|h| h.trim().parse::<HourKey>())
                .collect::<Result<BTreeSet<_>, _>>()?
                .into_iter()
                .collect(),
            Some(_) => return Err(ConfigError::MissingField("target_hours")),
            None => DEFAULT_TARGET_HOURS.to_vec(),
        };

        let num_of_rows = self.num_of_rows.unwrap_or(DEFAULT_NUM_OF_ROWS);
        if num_of_rows == 0 {
            return Err(ConfigError::NotPositive("num_of_rows"));
        }
        let timeout_secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::NotPositive("request_timeout_secs"));
        }

        Ok(ForecastConfig {
            api_key,
            cell_code,
            target_date,
            target_hours,
            sheet_name,
            credentials_file: PathBuf::from(credentials_file),
            base_url: self
                .base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            num_of_rows,
            request_timeout: Duration::from_secs(timeout_secs),
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

impl ForecastConfig {
    /// The target date as sent and stored, `YYYYMMDD`.
    pub fn target_date_key(&self) -> String {
        self.target_date.format("%Y%m%d").to_string()
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingField(field))?;
    if is_placeholder(&value) {
        return Err(ConfigError::Placeholder(field));
    }
    Ok(value)
}

fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_MARKERS.iter().any(|marker| value.contains(marker))
        || (value.starts_with('<') && value.ends_with('>'))
}

/// Parses a strict `YYYYMMDD` date.
pub fn parse_target_date(raw: &str) -> Result<NaiveDate, ConfigError> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidTargetDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map_err(|_| ConfigError::InvalidTargetDate(raw.to_string()))
}
