use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Run schedule has no windows")]
    Empty,

    #[error("Window {index} spans [{start}, {end}), which is empty or runs past 24:00")]
    InvalidBounds { index: usize, start: u32, end: u32 },

    #[error("Window {index} starts at {found:02}:00 but the previous window ends at {expected:02}:00")]
    NotContiguous {
        index: usize,
        expected: u32,
        found: u32,
    },

    #[error("Run schedule ends at {0:02}:00 instead of covering the day through 24:00")]
    Incomplete(u32),

    #[error("Window {index} names anchor hour {anchor_hour}, which is not an hour of the day")]
    InvalidAnchor { index: usize, anchor_hour: u32 },
}
