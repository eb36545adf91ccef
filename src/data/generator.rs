use chrono::NaiveDate;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::{DailyRecord, Metric, ProductionSeries};

fn uniform(metric: Metric) -> Uniform<f64> {
    let range = metric.sample_range();
    Uniform::new_inclusive(*range.start(), *range.end())
}

/// Simulate `num_days` consecutive daily records starting at `start`.
///
/// Every field is an independent uniform draw from [`Metric::sample_range`];
/// there is no model linking energy, carbon and pH.
pub fn simulate<R: Rng + ?Sized>(num_days: usize, start: NaiveDate, rng: &mut R) -> ProductionSeries {
    let energy = uniform(Metric::Energy);
    let carbon = uniform(Metric::Carbon);
    let ph = uniform(Metric::Ph);

    let records: Vec<DailyRecord> = start
        .iter_days()
        .take(num_days)
        .map(|date| DailyRecord {
            date,
            energy_generated: energy.sample(rng),
            carbon_content: carbon.sample(rng),
            ph_level: ph.sample(rng),
        })
        .collect();

    log::info!(
        "Simulated {} daily records starting {start}",
        records.len()
    );
    ProductionSeries::new(records)
}

/// Deterministic variant of [`simulate`] for reproducible output.
pub fn simulate_seeded(num_days: usize, start: NaiveDate, seed: u64) -> ProductionSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    simulate(num_days, start, &mut rng)
}
