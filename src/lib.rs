mod assembler;
mod collector;
mod config;
mod error;
mod fetch;
mod filtering;
mod schedule;
mod sheet;
mod types;

pub use error::ForecastError;

pub use collector::{CycleReport, ForecastCollector};

pub use assembler::{PartialHourRecord, RecordAssembler};
pub use filtering::WindowFilter;
pub use schedule::run_schedule::{
    service_time, RunSchedule, RunWindow, LDAPS_WINDOWS, SERVICE_UTC_OFFSET_HOURS,
};

pub use fetch::response::parse_forecast_items;
pub use fetch::variable_fetcher::{
    fetch_isolated, ForecastSource, VariableFetcher, VariableSeries, DEFAULT_BASE_URL,
    DEFAULT_NUM_OF_ROWS,
};

pub use sheet::csv_sheet::CsvSheet;
pub use sheet::memory_sheet::MemorySheet;
pub use sheet::store::{ensure_header, SheetStore};

pub use config::forecast_config::{
    load_config, parse_target_date, ForecastConfig, RawConfig, DEFAULT_CONFIG_FILE,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};

pub use types::forecast_item::ForecastItem;
pub use types::hour_key::{HourKey, InvalidHourKey, DEFAULT_TARGET_HOURS};
pub use types::row::{Row, COLLECTED_AT_FORMAT, SHEET_HEADER};
pub use types::run_identifier::RunIdentifier;
pub use types::variable_kind::VariableKind;

pub use config::error::ConfigError;
pub use fetch::error::FetchError;
pub use schedule::error::ScheduleError;
pub use sheet::error::StoreError;
