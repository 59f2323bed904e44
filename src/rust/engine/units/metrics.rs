use serde::{Deserialize, Serialize};

/// Dots per inch of the baseline (density 1.0) display.
pub const BASELINE_DPI: f32 = 160.0;

/// Density and scale factors of one display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayMetrics {
    /// Pixels per density-independent point.
    pub density: f32,
    /// Pixels per scale-independent point (density times the font scale).
    pub scaled_density: f32,
    /// Physical horizontal dots per inch.
    pub xdpi: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            density: 1.0,
            scaled_density: 1.0,
            xdpi: BASELINE_DPI,
        }
    }
}

impl DisplayMetrics {
    pub fn new(density: f32, scaled_density: f32, xdpi: f32) -> Self {
        Self {
            density,
            scaled_density,
            xdpi,
        }
    }

    /// Metrics of a display whose logical and physical dpi are both `dpi`.
    pub fn from_dpi(dpi: f32, font_scale: f32) -> Self {
        let density = dpi / BASELINE_DPI;
        Self {
            density,
            scaled_density: density * font_scale,
            xdpi: dpi,
        }
    }

    pub fn font_scale(&self) -> f32 {
        self.scaled_density / self.density
    }
}

/// Anything able to describe the display being measured against.
pub trait MetricsProvider {
    fn display_metrics(&self) -> DisplayMetrics;
}

impl MetricsProvider for DisplayMetrics {
    fn display_metrics(&self) -> DisplayMetrics {
        *self
    }
}
