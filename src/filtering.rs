use crate::types::forecast_item::ForecastItem;
use crate::types::hour_key::HourKey;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Restricts a fetched series to one target date and a fixed set of hours.
///
/// Only the first ten characters of `fcstTime` are inspected: `YYYYMMDD`
/// followed by the two-digit hour. Sub-hour digits after that are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFilter {
    date_key: String,
    hours: BTreeSet<HourKey>,
}

impl WindowFilter {
    pub fn new(target_date: NaiveDate, hours: impl IntoIterator<Item = HourKey>) -> Self {
        Self {
            date_key: target_date.format("%Y%m%d").to_string(),
            hours: hours.into_iter().collect(),
        }
    }

    pub fn hours(&self) -> impl Iterator<Item = HourKey> + '_ {
        self.hours.iter().copied()
    }

    /// Maps each target hour to the value of the matching item.
    ///
    /// Items for other dates or hours are dropped silently. When several items
    /// match the same hour, the one that comes last in `items` wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use kma_forecast::{ForecastItem, HourKey, WindowFilter};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let filter = WindowFilter::new(date, [HourKey::new(9).unwrap()]);
    /// let items = [
    ///     ForecastItem::new("202403150900", "5"),
    ///     ForecastItem::new("202403151000", "6"),
    ///     ForecastItem::new("202403160900", "7"),
    /// ];
    /// let matched = filter.apply(&items);
    /// assert_eq!(matched.len(), 1);
    /// assert_eq!(matched[&HourKey::new(9).unwrap()], "5");
    /// ```
    pub fn apply(&self, items: &[ForecastItem]) -> BTreeMap<HourKey, String> {
        let mut matched = BTreeMap::new();
        for item in items {
            if item.date_part() != Some(self.date_key.as_str()) {
                continue;
            }
            let Some(hour) = item.hour_part().and_then(HourKey::parse) else {
                continue;
            };
            if self.hours.contains(&hour) {
                matched.insert(hour, item.value.clone());
            }
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::hour_key::DEFAULT_TARGET_HOURS;

    fn filter() -> WindowFilter {
        WindowFilter::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            DEFAULT_TARGET_HOURS,
        )
    }

    fn hour(h: u8) -> HourKey {
        HourKey::new(h).unwrap()
    }

    #[test]
    fn test_keeps_only_target_date_and_hours() {
        let items = vec![
            ForecastItem::new("202403150600", "1"),
            ForecastItem::new("202403150900", "2"),
            ForecastItem::new("202403151200", "3"),
            ForecastItem::new("202403151300", "4"),
            ForecastItem::new("202403141500", "5"),
            ForecastItem::new("202403161800", "6"),
            ForecastItem::new("202403151800", "7"),
        ];
        let matched = filter().apply(&items);
        assert_eq!(
            matched,
            BTreeMap::from([
                (hour(9), "2".to_string()),
                (hour(12), "3".to_string()),
                (hour(18), "7".to_string()),
            ])
        );
    }

    #[test]
    fn test_sub_hour_digits_are_ignored() {
        let items = vec![ForecastItem::new("202403151530", "9.5")];
        assert_eq!(filter().apply(&items).get(&hour(15)).map(String::as_str), Some("9.5"));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let items = vec![
            ForecastItem::new("202403151200", "first"),
            ForecastItem::new("202403150900", "other"),
            ForecastItem::new("202403151200", "second"),
        ];
        let matched = filter().apply(&items);
        assert_eq!(matched[&hour(12)], "second");
        assert_eq!(matched[&hour(9)], "other");
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let items = vec![
            ForecastItem::new("202403150900", "5"),
            ForecastItem::new("202403151200", "7"),
            ForecastItem::new("202403151200", "8"),
        ];
        let f = filter();
        assert_eq!(f.apply(&items), f.apply(&items));
    }

    #[test]
    fn test_malformed_timestamps_are_dropped() {
        let items = vec![
            ForecastItem::new("", "1"),
            ForecastItem::new("20240315", "2"),
            ForecastItem::new("202403159", "3"),
            ForecastItem::new("20240315ab00", "4"),
            ForecastItem::new("2024-03-15T09:00", "5"),
        ];
        assert!(filter().apply(&items).is_empty());
    }

    #[test]
    fn test_hours_are_deduplicated_and_sorted() {
        let f = WindowFilter::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            [hour(18), hour(9), hour(18)],
        );
        assert_eq!(f.hours().collect::<Vec<_>>(), vec![hour(9), hour(18)]);
    }
}
