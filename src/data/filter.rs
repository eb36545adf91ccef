use chrono::NaiveDate;

use super::model::{DailyRecord, ProductionSeries};
use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// Date range predicate
// ---------------------------------------------------------------------------

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| DataError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Inclusive `[start, end]` date range.
///
/// A range whose `start` is after its `end` contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Build a range from two ISO date strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Return the records whose date falls inside `range`, keeping their order.
pub fn filter_by_date(series: &ProductionSeries, range: &DateRange) -> ProductionSeries {
    let records: Vec<DailyRecord> = series
        .records
        .iter()
        .filter(|r| range.contains(r.date))
        .copied()
        .collect();

    log::info!(
        "Date filter {}..={} kept {} of {} records",
        range.start,
        range.end,
        records.len(),
        series.len()
    );
    ProductionSeries::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::simulate_seeded;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_accepts_iso_dates() {
        assert_eq!(parse_date("2023-12-31").unwrap(), date(2023, 12, 31));
        assert_eq!(parse_date(" 2023-01-01 ").unwrap(), date(2023, 1, 1));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_date("2023-13-45").unwrap_err();
        assert!(matches!(err, DataError::InvalidDate { ref input, .. } if input == "2023-13-45"));
        assert!(DateRange::parse("2023-01-01", "yesterday").is_err());
    }

    #[test]
    fn full_range_keeps_everything_in_order() {
        let series = simulate_seeded(365, date(2023, 1, 1), 5);
        let range = DateRange::parse("2023-01-01", "2023-12-31").unwrap();
        assert_eq!(filter_by_date(&series, &range), series);
    }

    #[test]
    fn range_outside_data_is_empty() {
        let series = simulate_seeded(365, date(2023, 1, 1), 5);
        let before = DateRange::new(date(2022, 1, 1), date(2022, 12, 31));
        let after = DateRange::new(date(2024, 1, 1), date(2024, 6, 30));
        assert!(filter_by_date(&series, &before).is_empty());
        assert!(filter_by_date(&series, &after).is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        let series = simulate_seeded(365, date(2023, 1, 1), 5);
        let march = DateRange::new(date(2023, 3, 1), date(2023, 3, 31));
        let kept = filter_by_date(&series, &march);
        assert_eq!(kept.len(), 31);
        assert_eq!(kept.first_date(), Some(date(2023, 3, 1)));
        assert_eq!(kept.last_date(), Some(date(2023, 3, 31)));
        assert_eq!(kept.records[..], series.records[59..90]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let series = simulate_seeded(30, date(2023, 1, 1), 5);
        let inverted = DateRange::new(date(2023, 1, 20), date(2023, 1, 10));
        assert!(filter_by_date(&series, &inverted).is_empty());
    }
}
