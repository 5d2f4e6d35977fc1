//! Contains `Row`, the finalized per-hour record handed to a [`crate::SheetStore`].

use crate::types::hour_key::HourKey;
use crate::types::run_identifier::RunIdentifier;
use crate::types::variable_kind::VariableKind;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Header cells written to an empty sheet. The order matches [`Row::to_cells`].
pub const SHEET_HEADER: [&str; 8] = [
    "수집일시",
    "예보대상일",
    "시간",
    "기온(℃)",
    "습도(%)",
    "풍속(m/s)",
    "강수(mm)",
    "발표기준시각",
];

/// Format of the collection timestamp column.
pub const COLLECTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One output row: every tracked variable's value for a single forecast hour.
///
/// Rows are only produced by [`crate::RecordAssembler`], and only for hours
/// where at least one variable contributed a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub collected_at: NaiveDateTime,
    pub target_date: NaiveDate,
    pub hour: HourKey,
    pub run: RunIdentifier,
    values: BTreeMap<VariableKind, String>,
}

impl Row {
    pub(crate) fn new(
        collected_at: NaiveDateTime,
        target_date: NaiveDate,
        hour: HourKey,
        run: RunIdentifier,
        values: BTreeMap<VariableKind, String>,
    ) -> Self {
        Self {
            collected_at,
            target_date,
            hour,
            run,
            values,
        }
    }

    /// The value reported for `kind`, or an empty string if that variable
    /// never matched this hour.
    pub fn value(&self, kind: VariableKind) -> &str {
        self.values.get(&kind).map(String::as_str).unwrap_or("")
    }

    /// Renders the row in [`SHEET_HEADER`] column order.
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(SHEET_HEADER.len());
        cells.push(self.collected_at.format(COLLECTED_AT_FORMAT).to_string());
        cells.push(self.target_date.format("%Y%m%d").to_string());
        cells.push(self.hour.label());
        cells.extend(
            VariableKind::COLUMN_ORDER
                .iter()
                .map(|kind| self.value(*kind).to_string()),
        );
        cells.push(self.run.base_time());
        cells
    }
}
