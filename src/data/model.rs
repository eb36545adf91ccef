use std::fmt;
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Metric – one numeric column of a DailyRecord
// ---------------------------------------------------------------------------

/// Column selector for the three simulated measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Energy,
    Carbon,
    Ph,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Energy, Metric::Carbon, Metric::Ph];

    /// Column name as it appears in exported files.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Energy => "energy_generated",
            Metric::Carbon => "carbon_content",
            Metric::Ph => "ph_level",
        }
    }

    /// Human readable name used in the printed summary.
    pub fn display_name(self) -> &'static str {
        match self {
            Metric::Energy => "energy generated",
            Metric::Carbon => "carbon content",
            Metric::Ph => "pH level",
        }
    }

    /// Physical unit, `None` for the dimensionless pH.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Metric::Energy => Some("kWh"),
            Metric::Carbon => Some("mg/L"),
            Metric::Ph => None,
        }
    }

    /// Y axis label for charts.
    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::Energy => "Energy Generated (kWh)",
            Metric::Carbon => "Carbon (mg/L)",
            Metric::Ph => "pH",
        }
    }

    /// Bounds of the uniform distribution the generator samples from.
    pub fn sample_range(self) -> RangeInclusive<f64> {
        match self {
            Metric::Energy => 50.0..=150.0,
            Metric::Carbon => 0.1..=5.0,
            Metric::Ph => 6.0..=8.5,
        }
    }

    /// Read this column from a record.
    pub fn value(self, record: &DailyRecord) -> f64 {
        match self {
            Metric::Energy => record.energy_generated,
            Metric::Carbon => record.carbon_content,
            Metric::Ph => record.ph_level,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// DailyRecord – one row of the series
// ---------------------------------------------------------------------------

/// One day's simulated measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Energy produced by the algae in kWh.
    pub energy_generated: f64,
    /// Dissolved carbon in mg/L.
    pub carbon_content: f64,
    pub ph_level: f64,
}

// ---------------------------------------------------------------------------
// ProductionSeries – the full ordered table
// ---------------------------------------------------------------------------

/// Daily records ordered by date, one record per day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductionSeries {
    pub records: Vec<DailyRecord>,
}

impl ProductionSeries {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// All values of one column, in date order.
    pub fn column(&self, metric: Metric) -> Vec<f64> {
        self.records.iter().map(|r| metric.value(r)).collect()
    }

    /// Min and max of a column, `None` when the series is empty.
    pub fn bounds(&self, metric: Metric) -> Option<(f64, f64)> {
        self.records.iter().map(|r| metric.value(r)).fold(None, |acc, v| {
            Some(match acc {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            })
        })
    }
}

impl<'a> IntoIterator for &'a ProductionSeries {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, energy: f64) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            energy_generated: energy,
            carbon_content: 1.0,
            ph_level: 7.0,
        }
    }

    #[test]
    fn bounds_of_empty_series_is_none() {
        assert_eq!(ProductionSeries::default().bounds(Metric::Energy), None);
    }

    #[test]
    fn bounds_track_min_and_max() {
        let series = ProductionSeries::new(vec![record(1, 80.0), record(2, 60.0), record(3, 120.0)]);
        assert_eq!(series.bounds(Metric::Energy), Some((60.0, 120.0)));
        assert_eq!(series.first_date(), NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(series.last_date(), NaiveDate::from_ymd_opt(2023, 1, 3));
    }

    #[test]
    fn metric_reads_its_own_column() {
        let r = DailyRecord {
            date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            energy_generated: 99.0,
            carbon_content: 2.5,
            ph_level: 7.1,
        };
        assert_eq!(Metric::Energy.value(&r), 99.0);
        assert_eq!(Metric::Carbon.value(&r), 2.5);
        assert_eq!(Metric::Ph.value(&r), 7.1);
        assert_eq!(Metric::Ph.unit(), None);
    }
}
