//! Second y axis support.
//!
//! `egui_plot` draws every line in one coordinate space. A right-hand axis
//! with its own scale is emulated by linearly mapping the secondary series
//! onto the primary series' range before plotting, and mapping grid marks
//! back when labelling the right axis.

/// Affine map from a secondary value range onto a primary plotting range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapping {
    scale: f64,
    offset: f64,
}

impl Default for AxisMapping {
    fn default() -> Self {
        Self::identity()
    }
}

impl AxisMapping {
    pub fn identity() -> Self {
        Self { scale: 1.0, offset: 0.0 }
    }

    /// Map `secondary` (min, max) onto `primary` (min, max).
    ///
    /// Falls back to identity when either range is missing or has zero width.
    pub fn between(secondary: Option<(f64, f64)>, primary: Option<(f64, f64)>) -> Self {
        let (Some((s_lo, s_hi)), Some((p_lo, p_hi))) = (secondary, primary) else {
            return Self::identity();
        };
        let s_width = s_hi - s_lo;
        let p_width = p_hi - p_lo;
        if s_width.abs() < f64::EPSILON || p_width.abs() < f64::EPSILON {
            return Self::identity();
        }
        let scale = p_width / s_width;
        Self {
            scale,
            offset: p_lo - s_lo * scale,
        }
    }

    /// Secondary value → plot coordinate.
    pub fn forward(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Plot coordinate → secondary value.
    pub fn inverse(&self, y: f64) -> f64 {
        (y - self.offset) / self.scale
    }
}
