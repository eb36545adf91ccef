use super::filter::{filter_by_date, DateRange};
use super::model::{DailyRecord, Metric, ProductionSeries};

/// Arithmetic mean of one column.
///
/// An empty slice yields `NaN`; callers that care must check for emptiness
/// themselves.
pub fn mean(records: &[DailyRecord], metric: Metric) -> f64 {
    let sum: f64 = records.iter().map(|r| metric.value(r)).sum();
    sum / records.len() as f64
}

/// Averages of the three measurements over a selection of days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insights {
    pub avg_energy: f64,
    pub avg_carbon: f64,
    pub avg_ph: f64,
}

impl Insights {
    /// Average every column of `series`.
    pub fn from_series(series: &ProductionSeries) -> Self {
        if series.is_empty() {
            log::warn!("Averaging an empty selection, results are NaN");
        }
        Self {
            avg_energy: mean(&series.records, Metric::Energy),
            avg_carbon: mean(&series.records, Metric::Carbon),
            avg_ph: mean(&series.records, Metric::Ph),
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Energy => self.avg_energy,
            Metric::Carbon => self.avg_carbon,
            Metric::Ph => self.avg_ph,
        }
    }
}

/// Filter `series` to `range` and average what is left.
pub fn generate_insights(series: &ProductionSeries, range: &DateRange) -> Insights {
    let filtered = filter_by_date(series, range);
    Insights::from_series(&filtered)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::generator::simulate_seeded;

    fn record(day: u32, energy: f64, carbon: f64, ph: f64) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            energy_generated: energy,
            carbon_content: carbon,
            ph_level: ph,
        }
    }

    #[test]
    fn mean_of_known_values() {
        let records = vec![
            record(1, 50.0, 1.0, 6.0),
            record(2, 100.0, 2.0, 7.0),
            record(3, 150.0, 4.5, 8.0),
        ];
        assert_eq!(mean(&records, Metric::Energy), 100.0);
        assert!((mean(&records, Metric::Carbon) - 2.5).abs() < 1e-12);
        assert_eq!(mean(&records, Metric::Ph), 7.0);
    }

    #[test]
    fn mean_ignores_order() {
        let series = simulate_seeded(50, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 11);
        let mut reversed = series.records.clone();
        reversed.reverse();
        for metric in Metric::ALL {
            let a = mean(&series.records, metric);
            let b = mean(&reversed, metric);
            assert!((a - b).abs() < 1e-9, "{metric}: {a} vs {b}");
        }
    }

    #[test]
    fn mean_of_nothing_is_nan() {
        assert!(mean(&[], Metric::Energy).is_nan());
        let insights = Insights::from_series(&ProductionSeries::default());
        assert!(insights.avg_carbon.is_nan());
    }

    #[test]
    fn insights_cover_only_the_filtered_days() {
        let series = ProductionSeries::new(vec![
            record(1, 60.0, 1.0, 6.5),
            record(2, 80.0, 2.0, 7.0),
            record(3, 140.0, 3.0, 8.0),
        ]);
        let range = DateRange::parse("2023-01-02", "2023-01-03").unwrap();
        let insights = generate_insights(&series, &range);
        assert_eq!(insights.get(Metric::Energy), 110.0);
        assert_eq!(insights.get(Metric::Carbon), 2.5);
        assert_eq!(insights.get(Metric::Ph), 7.5);
    }
}
