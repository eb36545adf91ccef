use eframe::egui::Color32;

use crate::data::model::Metric;

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

pub const RED: Color32 = Color32::from_rgb(0xd6, 0x27, 0x28);
pub const BLUE: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);
pub const GREEN: Color32 = Color32::from_rgb(0x2c, 0xa0, 0x2c);

// ---------------------------------------------------------------------------
// Chart descriptions
// ---------------------------------------------------------------------------

/// Which side's y axis a series is read against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

/// One line on a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub metric: Metric,
    pub color: Color32,
    pub axis: AxisSide,
}

impl SeriesSpec {
    pub fn left(metric: Metric, color: Color32) -> Self {
        Self { metric, color, axis: AxisSide::Left }
    }

    pub fn right(metric: Metric, color: Color32) -> Self {
        Self { metric, color, axis: AxisSide::Right }
    }
}

/// A titled chart of one or two series over time.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub series: Vec<SeriesSpec>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, series: Vec<SeriesSpec>) -> Self {
        Self { title: title.into(), series }
    }

    /// Single-series chart against the left axis.
    pub fn single(title: impl Into<String>, metric: Metric, color: Color32) -> Self {
        Self::new(title, vec![SeriesSpec::left(metric, color)])
    }

    /// Metric plotted against the left axis, if any.
    pub fn primary(&self) -> Option<&SeriesSpec> {
        self.series.iter().find(|s| s.axis == AxisSide::Left)
    }

    /// Metric plotted against the right axis, if any.
    pub fn secondary(&self) -> Option<&SeriesSpec> {
        self.series.iter().find(|s| s.axis == AxisSide::Right)
    }
}

pub const X_AXIS_LABEL: &str = "Date";

const OVERVIEW_TITLE: &str = "Energy, Carbon and pH Over Time";

/// The five charts shown after the summary, in display order.
pub fn default_charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec::new(
            OVERVIEW_TITLE,
            vec![
                SeriesSpec::left(Metric::Energy, RED),
                SeriesSpec::right(Metric::Carbon, BLUE),
            ],
        ),
        ChartSpec::single(OVERVIEW_TITLE, Metric::Ph, GREEN),
        ChartSpec::single("Algae Energy Generation Over Time", Metric::Energy, BLUE),
        ChartSpec::single("Water Carbon Level Over Time", Metric::Carbon, BLUE),
        ChartSpec::single("Water pH Level Over Time", Metric::Ph, BLUE),
    ]
}
