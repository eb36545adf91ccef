use chrono::{Duration, NaiveDate};
use eframe::egui::Ui;
use egui_plot::{AxisHints, HPlacement, Legend, Line, Plot, PlotPoints};

use super::charts::{AxisSide, ChartSpec, X_AXIS_LABEL};
use super::twin_axis::AxisMapping;
use crate::data::model::ProductionSeries;

// ---------------------------------------------------------------------------
// Date axis helpers
// ---------------------------------------------------------------------------

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Plot x coordinate for a date: days since 1970-01-01.
pub fn date_to_x(date: NaiveDate) -> f64 {
    date.signed_duration_since(epoch()).num_days() as f64
}

/// Inverse of [`date_to_x`], rounded to the nearest day.
pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    Duration::try_days(x.round() as i64).and_then(|offset| epoch().checked_add_signed(offset))
}

fn date_label(x: f64) -> String {
    x_to_date(x)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Chart plot (central panel)
// ---------------------------------------------------------------------------

/// Render one chart of `series` in the central panel.
pub fn chart_plot(ui: &mut Ui, chart: &ChartSpec, series: &ProductionSeries) {
    if series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No records in the selected date range");
        });
        return;
    }

    let primary = chart.primary();
    let secondary = chart.secondary();

    // Secondary values are squeezed into the primary's range; the right axis
    // labels map them back.
    let mapping = match (primary, secondary) {
        (Some(p), Some(s)) => AxisMapping::between(series.bounds(s.metric), series.bounds(p.metric)),
        _ => AxisMapping::identity(),
    };

    let mut y_axes = Vec::new();
    if let Some(p) = primary {
        y_axes.push(AxisHints::new_y().label(p.metric.axis_label()));
    }
    if let Some(s) = secondary {
        y_axes.push(
            AxisHints::new_y()
                .label(s.metric.axis_label())
                .placement(HPlacement::Right)
                .formatter(move |mark, _range| format!("{:.2}", mapping.inverse(mark.value))),
        );
    }

    let secondary_name = secondary.map(|s| s.metric.axis_label());

    Plot::new(("chart_plot", chart.title.as_str()))
        .legend(Legend::default())
        .x_axis_label(X_AXIS_LABEL)
        .x_axis_formatter(|mark, _range| date_label(mark.value))
        .custom_y_axes(y_axes)
        .label_formatter(move |name, point| {
            let y = if Some(name) == secondary_name {
                mapping.inverse(point.y)
            } else {
                point.y
            };
            if name.is_empty() {
                format!("{}\n{y:.2}", date_label(point.x))
            } else {
                format!("{name}\n{}\n{y:.2}", date_label(point.x))
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for spec in &chart.series {
                let points: PlotPoints = series
                    .records
                    .iter()
                    .map(|r| {
                        let value = spec.metric.value(r);
                        let y = match spec.axis {
                            AxisSide::Left => value,
                            AxisSide::Right => mapping.forward(value),
                        };
                        [date_to_x(r.date), y]
                    })
                    .collect();

                let line = Line::new(points)
                    .name(spec.metric.axis_label())
                    .color(spec.color)
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
