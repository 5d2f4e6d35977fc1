/// One `item` element from an LDAPS point response.
///
/// `fcst_time` is kept verbatim (`YYYYMMDDHHmm` as sent by the service) and
/// `value` is kept as text; neither is interpreted until the window filter
/// looks at them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ForecastItem {
    pub fcst_time: String,
    pub value: String,
}

impl ForecastItem {
    pub fn new(fcst_time: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            fcst_time: fcst_time.into(),
            value: value.into(),
        }
    }

    /// The `YYYYMMDD` date prefix of the forecast timestamp, if present.
    pub fn date_part(&self) -> Option<&str> {
        self.fcst_time.get(0..8)
    }

    /// The two characters following the date, which carry the hour.
    pub fn hour_part(&self) -> Option<&str> {
        self.fcst_time.get(8..10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_parts() {
        let item = ForecastItem::new("202403151230", "7.5");
        assert_eq!(item.date_part(), Some("20240315"));
        assert_eq!(item.hour_part(), Some("12"));
    }

    #[test]
    fn test_short_timestamp_has_no_hour() {
        let item = ForecastItem::new("20240315", "7.5");
        assert_eq!(item.date_part(), Some("20240315"));
        assert_eq!(item.hour_part(), None);
        assert_eq!(ForecastItem::new("2024", "1").date_part(), None);
    }
}
