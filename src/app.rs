use anyhow::{anyhow, Result};
use eframe::egui;

use crate::config::ViewerConfig;
use crate::data::model::ProductionSeries;
use crate::ui::charts::ChartSpec;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// One chart window.
pub struct ChartApp {
    pub chart: ChartSpec,
    pub series: ProductionSeries,
    /// 1-based position in the chart sequence.
    pub position: usize,
    pub total: usize,
}

impl ChartApp {
    pub fn new(chart: ChartSpec, series: ProductionSeries, position: usize, total: usize) -> Self {
        Self {
            chart,
            series,
            position,
            total,
        }
    }

    fn is_last(&self) -> bool {
        self.position >= self.total
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.chart, self.position, self.total);
        });

        // ---- Bottom panel: status ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.series, self.is_last());
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.chart, &self.series);
        });
    }
}

// ---------------------------------------------------------------------------
// Sequential chart windows
// ---------------------------------------------------------------------------

/// Show each chart in its own native window, one after another.
///
/// Blocks until the user closes the current window before opening the next.
pub fn show_charts(series: &ProductionSeries, charts: &[ChartSpec], config: &ViewerConfig) -> Result<()> {
    let total = charts.len();

    for (i, chart) in charts.iter().enumerate() {
        let position = i + 1;
        log::debug!("Opening chart {position}/{total}: {}", chart.title);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(chart.title.as_str())
                .with_inner_size(config.inner_size)
                .with_min_inner_size(config.min_inner_size),
            ..Default::default()
        };

        let app = ChartApp::new(chart.clone(), series.clone(), position, total);
        eframe::run_native(
            &chart.title,
            options,
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| anyhow!("chart window '{}' failed: {e}", chart.title))?;

        log::debug!("Chart {position}/{total} closed");
    }

    Ok(())
}
