//! Maps a wall-clock instant to the most recent model run that is guaranteed to be
//! queryable, given the service's publication latency.
//!
//! The LDAPS model runs at 03, 09, 15 and 21 o'clock and its output appears roughly
//! four hours later. Rather than branching on the hour, the schedule is a table of
//! contiguous hour windows covering the whole day; each window names the run that
//! is current while the clock is inside it.

use crate::schedule::error::ScheduleError;
use crate::types::run_identifier::RunIdentifier;
use chrono::{DateTime, Days, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};

/// One row of the schedule table.
///
/// While the clock hour is in `[start_hour, end_hour)`, the current run is the one
/// anchored at `anchor_hour` on the day `days_back` days before today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    pub days_back: u64,
    pub anchor_hour: u32,
}

impl RunWindow {
    pub const fn new(start_hour: u32, end_hour: u32, days_back: u64, anchor_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
            days_back,
            anchor_hour,
        }
    }
}

/// KST is UTC+9 all year round; run anchors and `fcstTime` values are KST.
pub const SERVICE_UTC_OFFSET_HOURS: i64 = 9;

/// Converts an absolute instant to the service's wall-clock time, independent of
/// the host's timezone.
pub fn service_time(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.naive_utc() + TimeDelta::hours(SERVICE_UTC_OFFSET_HOURS)
}

/// Publication table for the LDAPS point service.
pub const LDAPS_WINDOWS: [RunWindow; 4] = [
    RunWindow::new(0, 7, 1, 21),
    RunWindow::new(7, 13, 0, 3),
    RunWindow::new(13, 19, 0, 9),
    RunWindow::new(19, 24, 0, 15),
];

/// A validated, total mapping from clock hour to run window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSchedule {
    windows: Vec<RunWindow>,
    anchors: Vec<NaiveTime>,
    by_hour: [usize; 24],
}

impl RunSchedule {
    /// Builds a schedule from windows ordered by start hour.
    ///
    /// The windows must be non-empty, contiguous, start at 00:00 and end at 24:00,
    /// so that every hour of the day maps to exactly one window.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] describing the first gap, overlap or
    /// out-of-range value found.
    pub fn new(windows: Vec<RunWindow>) -> Result<Self, ScheduleError> {
        if windows.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let mut expected_start = 0;
        for (index, window) in windows.iter().enumerate() {
            if window.start_hour != expected_start {
                return Err(ScheduleError::NotContiguous {
                    index,
                    expected: expected_start,
                    found: window.start_hour,
                });
            }
            if window.start_hour >= window.end_hour || window.end_hour > 24 {
                return Err(ScheduleError::InvalidBounds {
                    index,
                    start: window.start_hour,
                    end: window.end_hour,
                });
            }
            if window.anchor_hour >= 24 {
                return Err(ScheduleError::InvalidAnchor {
                    index,
                    anchor_hour: window.anchor_hour,
                });
            }
            expected_start = window.end_hour;
        }
        if expected_start != 24 {
            return Err(ScheduleError::Incomplete(expected_start));
        }

        Ok(Self::from_table(windows))
    }

    // Callers must pass a table that `new` would accept.
    fn from_table(windows: Vec<RunWindow>) -> Self {
        let anchors = windows
            .iter()
            .map(|window| NaiveTime::MIN + TimeDelta::hours(i64::from(window.anchor_hour)))
            .collect();
        let mut by_hour = [0usize; 24];
        for (index, window) in windows.iter().enumerate() {
            let (start, end) = (window.start_hour as usize, window.end_hour as usize);
            for slot in by_hour.iter_mut().take(end).skip(start) {
                *slot = index;
            }
        }
        Self {
            windows,
            anchors,
            by_hour,
        }
    }

    pub fn windows(&self) -> &[RunWindow] {
        &self.windows
    }

    /// Returns the run that is current at `now`.
    ///
    /// Window bounds are inclusive below and exclusive above, and a window with
    /// `days_back > 0` rolls the calendar date backwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use kma_forecast::RunSchedule;
    /// use chrono::NaiveDate;
    ///
    /// let schedule = RunSchedule::default();
    /// let now = NaiveDate::from_ymd_opt(2024, 3, 2)
    ///     .unwrap()
    ///     .and_hms_opt(2, 0, 0)
    ///     .unwrap();
    /// assert_eq!(schedule.resolve(now).to_string(), "202403012100");
    /// ```
    pub fn resolve(&self, now: NaiveDateTime) -> RunIdentifier {
        let index = self.by_hour[now.hour() as usize];
        let date = now
            .date()
            .checked_sub_days(Days::new(self.windows[index].days_back))
            .unwrap_or(now.date());
        RunIdentifier::from_parts(date, self.anchors[index])
    }
}

impl Default for RunSchedule {
    fn default() -> Self {
        Self::from_table(LDAPS_WINDOWS.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_default_is_the_ldaps_table() -> Result<(), ScheduleError> {
        assert_eq!(RunSchedule::default().windows(), &LDAPS_WINDOWS);
        assert_eq!(
            RunSchedule::default(),
            RunSchedule::new(LDAPS_WINDOWS.to_vec())?
        );
        Ok(())
    }

    #[test]
    fn test_service_time_is_kst() {
        let utc = at(2024, 3, 14, 22, 30).and_utc();
        assert_eq!(service_time(utc), at(2024, 3, 15, 7, 30));
        // 22:30 UTC is already the 03 run in Korea, not the previous day's 15 run
        assert_eq!(
            RunSchedule::default().resolve(service_time(utc)).base_time(),
            "202403150300"
        );
    }

    #[test]
    fn test_resolve_at_window_boundaries() {
        let schedule = RunSchedule::default();
        let cases = [
            ((0, 0), "202403142100"),
            ((6, 59), "202403142100"),
            ((7, 0), "202403150300"),
            ((12, 59), "202403150300"),
            ((13, 0), "202403150900"),
            ((18, 59), "202403150900"),
            ((19, 0), "202403151500"),
            ((23, 59), "202403151500"),
        ];
        for ((hour, minute), expected) in cases {
            let run = schedule.resolve(at(2024, 3, 15, hour, minute));
            assert_eq!(run.base_time(), expected, "at {hour:02}:{minute:02}");
        }
    }

    #[test]
    fn test_midnight_rollover_uses_previous_day() {
        let schedule = RunSchedule::default();
        let run = schedule.resolve(at(2024, 3, 2, 2, 0));
        assert_eq!(run.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(run.base_time(), "202403012100");
    }

    #[test]
    fn test_rollover_crosses_month_and_year() {
        let schedule = RunSchedule::default();
        assert_eq!(schedule.resolve(at(2024, 3, 1, 5, 0)).base_time(), "202402292100");
        assert_eq!(schedule.resolve(at(2024, 1, 1, 0, 30)).base_time(), "202312312100");
    }

    #[test]
    fn test_resolution_is_pure() {
        let schedule = RunSchedule::default();
        let now = at(2024, 3, 15, 14, 10);
        assert_eq!(schedule.resolve(now), schedule.resolve(now));
    }

    #[test]
    fn test_fifth_run_is_a_table_edit() -> Result<(), ScheduleError> {
        let schedule = RunSchedule::new(vec![
            RunWindow::new(0, 5, 1, 21),
            RunWindow::new(5, 7, 1, 23),
            RunWindow::new(7, 13, 0, 3),
            RunWindow::new(13, 19, 0, 9),
            RunWindow::new(19, 24, 0, 15),
        ])?;
        assert_eq!(schedule.resolve(at(2024, 3, 15, 6, 0)).base_time(), "202403142300");
        assert_eq!(schedule.resolve(at(2024, 3, 15, 4, 0)).base_time(), "202403142100");
        Ok(())
    }

    #[test]
    fn test_rejects_gaps_and_partial_days() {
        assert_eq!(RunSchedule::new(vec![]), Err(ScheduleError::Empty));
        assert_eq!(
            RunSchedule::new(vec![RunWindow::new(0, 7, 1, 21), RunWindow::new(8, 24, 0, 3)]),
            Err(ScheduleError::NotContiguous {
                index: 1,
                expected: 7,
                found: 8
            })
        );
        assert_eq!(
            RunSchedule::new(vec![RunWindow::new(0, 20, 0, 3)]),
            Err(ScheduleError::Incomplete(20))
        );
        assert_eq!(
            RunSchedule::new(vec![RunWindow::new(0, 25, 0, 3)]),
            Err(ScheduleError::InvalidBounds {
                index: 0,
                start: 0,
                end: 25
            })
        );
        assert_eq!(
            RunSchedule::new(vec![RunWindow::new(0, 24, 0, 24)]),
            Err(ScheduleError::InvalidAnchor {
                index: 0,
                anchor_hour: 24
            })
        );
    }
}
