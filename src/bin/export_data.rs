use std::path::PathBuf;

use algae_insights::config::PipelineConfig;
use algae_insights::data::export::write_file;
use algae_insights::data::generator::simulate_seeded;
use anyhow::{Context, Result};

const SEED: u64 = 42;
const DEFAULT_OUTPUT: &str = "algae_data.parquet";

fn main() -> Result<()> {
    env_logger::init();

    let output_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let config = PipelineConfig::default();
    let series = simulate_seeded(config.num_days, config.start_date, SEED);

    write_file(&output_path, &series)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!(
        "Wrote {} daily records ({} to {}) to {}",
        series.len(),
        config.start_date,
        series.last_date().unwrap_or(config.start_date),
        output_path.display()
    );
    Ok(())
}
