//! Contains `HourKey`, a forecast-horizon hour slot such as `09` or `15`.

use std::fmt;
use std::str::FromStr;

/// Hour slots collected when no explicit list is configured.
pub const DEFAULT_TARGET_HOURS: [HourKey; 4] = [HourKey(9), HourKey(12), HourKey(15), HourKey(18)];

/// A forecast hour of interest on the target date.
///
/// This names a slot in the forecast horizon, not the wall-clock hour at which
/// the collector runs. Keys order numerically, so a sorted collection of keys
/// is in ascending hour order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourKey(u8);

impl HourKey {
    /// Creates an `HourKey`, returning `None` unless `hour` is in `0..=23`.
    pub fn new(hour: u8) -> Option<Self> {
        (hour < 24).then_some(HourKey(hour))
    }

    pub fn hour(&self) -> u8 {
        self.0
    }

    /// Parses the two-digit form used in `fcstTime` (`"09"`, `"18"`).
    ///
    /// Anything other than exactly two ASCII digits naming an hour of the day
    /// is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use kma_forecast::HourKey;
    ///
    /// assert_eq!(HourKey::parse("09").map(|h| h.hour()), Some(9));
    /// assert!(HourKey::parse("9").is_none());
    /// assert!(HourKey::parse("24").is_none());
    /// ```
    pub fn parse(digits: &str) -> Option<Self> {
        let bytes = digits.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }
        Self::new((bytes[0] - b'0') * 10 + (bytes[1] - b'0'))
    }

    /// The label written to the sheet's hour column, e.g. `09시`.
    pub fn label(&self) -> String {
        format!("{:02}시", self.0)
    }
}

impl fmt::Display for HourKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a two-digit hour between 00 and 23")]
pub struct InvalidHourKey(pub String);

impl FromStr for HourKey {
    type Err = InvalidHourKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HourKey::parse(s).ok_or_else(|| InvalidHourKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_two_digit_hours() {
        assert_eq!(HourKey::parse("00"), Some(HourKey(0)));
        assert_eq!(HourKey::parse("23"), Some(HourKey(23)));
        assert_eq!("12".parse::<HourKey>(), Ok(HourKey(12)));
    }

    #[test]
    fn test_parse_rejects_malformed_hours() {
        for input in ["", "1", "123", "24", "99", "a9", " 9", "-1"] {
            assert!(HourKey::parse(input).is_none(), "accepted {input:?}");
        }
        assert_eq!(
            "7".parse::<HourKey>(),
            Err(InvalidHourKey("7".to_string()))
        );
    }

    #[test]
    fn test_display_and_label_are_zero_padded() {
        let key = HourKey(9);
        assert_eq!(key.to_string(), "09");
        assert_eq!(key.label(), "09시");
    }

    #[test]
    fn test_default_hours_are_ascending() {
        let mut sorted = DEFAULT_TARGET_HOURS;
        sorted.sort();
        assert_eq!(sorted, DEFAULT_TARGET_HOURS);
    }
}
