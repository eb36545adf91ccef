use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Run constants
// ---------------------------------------------------------------------------

/// Native window sizing for the chart viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            inner_size: [960.0, 600.0],
            min_inner_size: [480.0, 320.0],
        }
    }
}

/// Everything one pipeline run needs. The binaries take no flags, so this is
/// only ever built from `Default`.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Days of data to simulate.
    pub num_days: usize,
    /// First simulated day.
    pub start_date: NaiveDate,
    /// Inclusive analysis window, as ISO date strings.
    pub range_start: String,
    pub range_end: String,
    pub viewer: ViewerConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            num_days: 365,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            range_start: "2023-01-01".to_string(),
            range_end: "2023-12-31".to_string(),
            viewer: ViewerConfig::default(),
        }
    }
}
