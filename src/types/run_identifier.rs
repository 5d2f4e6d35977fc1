//! Contains `RunIdentifier`, the (date, anchor time) pair naming one execution of
//! the forecast model.

use chrono::{NaiveDate, NaiveTime};
use std::fmt;

/// Identifies a specific model run whose output is queried.
///
/// Formats as `YYYYMMDDHHmm`, which is the `baseTime` parameter expected by the
/// LDAPS point service.
///
/// # Examples
///
/// ```
/// use kma_forecast::RunIdentifier;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let run = RunIdentifier::new(date, 21).unwrap();
/// assert_eq!(run.to_string(), "202403012100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunIdentifier {
    date: NaiveDate,
    time: NaiveTime,
}

impl RunIdentifier {
    /// Creates a run identifier for the top of `anchor_hour` on `date`.
    /// Returns `None` if `anchor_hour` is not a valid hour of the day.
    pub fn new(date: NaiveDate, anchor_hour: u32) -> Option<Self> {
        let time = NaiveTime::from_hms_opt(anchor_hour, 0, 0)?;
        Some(Self { date, time })
    }

    pub(crate) fn from_parts(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// The `baseTime` query value, `YYYYMMDDHHmm`.
    pub fn base_time(&self) -> String {
        self.date.and_time(self.time).format("%Y%m%d%H%M").to_string()
    }
}

impl fmt::Display for RunIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_time_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let run = RunIdentifier::new(date, 3).unwrap();
        assert_eq!(run.base_time(), "202401050300");
        assert_eq!(run.date(), date);
        assert_eq!(run.time(), NaiveTime::from_hms_opt(3, 0, 0).unwrap());
    }

    #[test]
    fn test_rejects_out_of_range_hour() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert!(RunIdentifier::new(date, 24).is_none());
    }
}
