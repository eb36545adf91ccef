use algae_insights::app::show_charts;
use algae_insights::config::PipelineConfig;
use algae_insights::data::aggregate::generate_insights;
use algae_insights::data::filter::{filter_by_date, DateRange};
use algae_insights::data::generator::simulate;
use algae_insights::report::print_summary;
use algae_insights::ui::charts::default_charts;
use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::init();

    let config = PipelineConfig::default();

    let series = simulate(config.num_days, config.start_date, &mut rand::thread_rng());
    let range = DateRange::parse(&config.range_start, &config.range_end)
        .context("parsing analysis date range")?;

    let insights = generate_insights(&series, &range);
    print_summary(&insights);

    let filtered = filter_by_date(&series, &range);
    show_charts(&filtered, &default_charts(), &config.viewer)
}
