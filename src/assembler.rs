//! Merges per-variable window matches into one [`Row`] per forecast hour.

use crate::types::hour_key::HourKey;
use crate::types::row::Row;
use crate::types::run_identifier::RunIdentifier;
use crate::types::variable_kind::VariableKind;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Values gathered so far for a single hour, keyed by variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialHourRecord {
    values: BTreeMap<VariableKind, String>,
}

impl PartialHourRecord {
    pub fn set(&mut self, kind: VariableKind, value: String) {
        self.values.insert(kind, value);
    }

    pub fn get(&self, kind: VariableKind) -> Option<&str> {
        self.values.get(&kind).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Accumulates window matches for one collection cycle.
///
/// Every cycle builds a fresh assembler; the merge is commutative across
/// variables, so the order in which fetches complete does not matter.
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    collected_at: NaiveDateTime,
    target_date: NaiveDate,
    run: RunIdentifier,
    partials: BTreeMap<HourKey, PartialHourRecord>,
}

impl RecordAssembler {
    pub fn new(
        collected_at: NaiveDateTime,
        target_date: NaiveDate,
        run: RunIdentifier,
        hours: impl IntoIterator<Item = HourKey>,
    ) -> Self {
        Self {
            collected_at,
            target_date,
            run,
            partials: hours
                .into_iter()
                .map(|hour| (hour, PartialHourRecord::default()))
                .collect(),
        }
    }

    /// Records `kind`'s value for each matched hour, overwriting an earlier
    /// value for the same (hour, variable) pair. Hours outside the target set
    /// are ignored.
    pub fn merge(&mut self, kind: VariableKind, matched: BTreeMap<HourKey, String>) {
        for (hour, value) in matched {
            if let Some(partial) = self.partials.get_mut(&hour) {
                partial.set(kind, value);
            }
        }
    }

    pub fn partial(&self, hour: HourKey) -> Option<&PartialHourRecord> {
        self.partials.get(&hour)
    }

    /// Emits rows in ascending hour order, skipping hours that received no value.
    pub fn finish(self) -> Vec<Row> {
        let Self {
            collected_at,
            target_date,
            run,
            partials,
        } = self;
        partials
            .into_iter()
            .filter(|(_, partial)| !partial.is_empty())
            .map(|(hour, partial)| Row::new(collected_at, target_date, hour, run, partial.values))
            .collect()
    }
}
