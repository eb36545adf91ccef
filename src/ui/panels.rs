use eframe::egui::{self, RichText, Ui};

use super::charts::ChartSpec;
use crate::data::model::ProductionSeries;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the chart title and position in the chart sequence.
pub fn top_bar(ui: &mut Ui, chart: &ChartSpec, position: usize, total: usize) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(chart.title.as_str());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.label(RichText::new(format!("Chart {position} of {total}")).weak());
        });
    });
}

// ---------------------------------------------------------------------------
// Bottom status bar
// ---------------------------------------------------------------------------

/// Render the date span and a hint on how to move on.
pub fn status_bar(ui: &mut Ui, series: &ProductionSeries, is_last: bool) {
    ui.horizontal(|ui: &mut Ui| {
        match (series.first_date(), series.last_date()) {
            (Some(first), Some(last)) => {
                ui.label(format!("{} days, {first} to {last}", series.len()));
            }
            _ => {
                ui.label("0 days");
            }
        }

        ui.separator();

        let hint = if is_last {
            "Close this window to finish"
        } else {
            "Close this window to show the next chart"
        };
        ui.label(RichText::new(hint).italics());
    });
}
