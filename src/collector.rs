//! This module provides the main entry point: [`ForecastCollector`] runs one
//! collection cycle, from resolving the model run to appending finished rows to a
//! [`SheetStore`].

use crate::assembler::RecordAssembler;
use crate::config::forecast_config::ForecastConfig;
use crate::error::ForecastError;
use crate::fetch::variable_fetcher::{fetch_isolated, ForecastSource, VariableFetcher};
use crate::filtering::WindowFilter;
use crate::schedule::run_schedule::RunSchedule;
use crate::sheet::store::{ensure_header, SheetStore};
use crate::types::hour_key::HourKey;
use crate::types::row::COLLECTED_AT_FORMAT;
use crate::types::run_identifier::RunIdentifier;
use crate::types::variable_kind::VariableKind;
use bon::bon;
use chrono::{NaiveDateTime, Timelike};
use futures_util::future::join_all;
use log::{info, warn};
use reqwest::Client;
use std::fmt;

/// Summary of one collection cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub run: RunIdentifier,
    pub collected_at: NaiveDateTime,
    pub target_date: String,
    pub header_written: bool,
    /// Hours appended, in the order they were written.
    pub hours_written: Vec<HourKey>,
    pub failed_variables: Vec<VariableKind>,
}

impl CycleReport {
    pub fn rows_written(&self) -> usize {
        self.hours_written.len()
    }

    /// True when no hour produced a row. This is a normal outcome when the
    /// selected run does not reach the target date yet.
    pub fn is_empty(&self) -> bool {
        self.hours_written.is_empty()
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(
                f,
                "No forecast data found for {} (run {})",
                self.target_date, self.run
            )?;
        } else {
            write!(
                f,
                "Saved {} rows for {} (run {}, collected {})",
                self.rows_written(),
                self.target_date,
                self.run,
                self.collected_at.format(COLLECTED_AT_FORMAT)
            )?;
        }
        if !self.failed_variables.is_empty() {
            let names: Vec<&str> = self
                .failed_variables
                .iter()
                .map(|kind| kind.display_name())
                .collect();
            write!(f, "; failed variables: {}", names.join(", "))?;
        }
        Ok(())
    }
}

/// Runs collection cycles for one configured grid cell and target date.
///
/// # Examples
///
/// ```no_run
/// # use kma_forecast::{service_time, ForecastCollector, ForecastError, MemorySheet, RawConfig};
/// # async fn run(raw: RawConfig) -> Result<(), ForecastError> {
/// let config = raw.validate()?;
/// let collector = ForecastCollector::from_config(config)?;
/// let mut sheet = MemorySheet::new();
/// let report = collector
///     .run_cycle(service_time(chrono::Utc::now()), &mut sheet)
///     .await?;
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ForecastCollector<S> {
    config: ForecastConfig,
    source: S,
    schedule: RunSchedule,
}

#[bon]
impl<S: ForecastSource> ForecastCollector<S> {
    /// Creates a collector over any [`ForecastSource`].
    ///
    /// # Arguments
    ///
    /// * `.config(ForecastConfig)`: **Required.** Validated configuration.
    /// * `.source(S)`: **Required.** Where variable series come from.
    /// * `.schedule(RunSchedule)`: Optional. Defaults to the LDAPS publication table.
    #[builder]
    pub fn new(config: ForecastConfig, source: S, schedule: Option<RunSchedule>) -> Self {
        Self {
            config,
            source,
            schedule: schedule.unwrap_or_default(),
        }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Runs one cycle at wall-clock instant `now`.
    ///
    /// The header is written first if the store is empty. All four variables
    /// are then fetched concurrently against a single run; a failing variable
    /// only leaves its columns blank. Rows are appended in ascending hour order
    /// once every fetch has finished.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::SheetHeader`] if the store cannot be inspected or
    /// the header cannot be written, and [`ForecastError::StoreWrite`] if a row
    /// append fails. Rows appended before the failure stay in the store and the
    /// remaining rows are not attempted.
    pub async fn run_cycle<T: SheetStore + ?Sized>(
        &self,
        now: NaiveDateTime,
        store: &mut T,
    ) -> Result<CycleReport, ForecastError> {
        let collected_at = now.with_nanosecond(0).unwrap_or(now);
        let target_date = self.config.target_date_key();
        let header_written = ensure_header(store).map_err(ForecastError::SheetHeader)?;

        let run = self.schedule.resolve(now);
        info!(
            "Collecting {} for cell {} at {} using run {}",
            target_date,
            self.config.cell_code,
            collected_at.format(COLLECTED_AT_FORMAT),
            run
        );

        let fetches = VariableKind::ALL
            .into_iter()
            .map(|kind| fetch_isolated(&self.source, &run, &self.config.cell_code, kind));
        let outcomes = join_all(fetches).await;

        let filter = WindowFilter::new(
            self.config.target_date,
            self.config.target_hours.iter().copied(),
        );
        let mut assembler =
            RecordAssembler::new(collected_at, self.config.target_date, run, filter.hours());
        let mut failed_variables = Vec::new();
        for series in outcomes {
            if series.failed {
                failed_variables.push(series.kind);
            }
            assembler.merge(series.kind, filter.apply(&series.items));
        }

        let rows = assembler.finish();
        let mut hours_written = Vec::with_capacity(rows.len());
        for row in &rows {
            store
                .append_row(&row.to_cells())
                .map_err(|source| ForecastError::StoreWrite {
                    hour: row.hour.label(),
                    written: hours_written.len(),
                    source,
                })?;
            info!(" -> {} row written", row.hour.label());
            hours_written.push(row.hour);
        }

        if hours_written.is_empty() {
            warn!("No forecast data found for {} in run {}", target_date, run);
        } else {
            info!("Saved {} rows for {}", hours_written.len(), target_date);
        }

        Ok(CycleReport {
            run,
            collected_at,
            target_date,
            header_written,
            hours_written,
            failed_variables,
        })
    }
}

impl ForecastCollector<VariableFetcher> {
    /// Creates a collector that talks to the configured LDAPS endpoint, with the
    /// configured request timeout applied to every call.
    pub fn from_config(config: ForecastConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ForecastError::HttpClient)?;
        let fetcher = VariableFetcher::new(
            client,
            config.base_url.clone(),
            config.api_key.clone(),
            config.num_of_rows,
        );
        Ok(Self::builder().config(config).source(fetcher).build())
    }
}
