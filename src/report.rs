use crate::data::aggregate::Insights;
use crate::data::model::Metric;

/// One summary line, e.g. `Average carbon content: 2.51 mg/L`.
pub fn summary_line(metric: Metric, value: f64) -> String {
    match metric.unit() {
        Some(unit) => format!("Average {}: {value:.2} {unit}", metric.display_name()),
        None => format!("Average {}: {value:.2}", metric.display_name()),
    }
}

/// Summary lines for all metrics, energy first.
pub fn summary_lines(insights: &Insights) -> Vec<String> {
    Metric::ALL
        .iter()
        .map(|&m| summary_line(m, insights.get(m)))
        .collect()
}

pub fn print_summary(insights: &Insights) {
    for line in summary_lines(insights) {
        println!("{line}");
    }
}
