#![cfg(feature = "cli")]

pub mod config;
pub mod convert;
pub mod time;

use anyhow::Result;
use clap::Args;

use crate::engine::units::{DisplayMetrics, MetricsProvider};
use crate::platform::config::validate_metrics;

/// Display overrides shared by the conversion commands.
#[derive(Debug, Clone, Default, Args)]
pub struct MetricsArgs {
    /// Derive density, scaled density and xdpi from a dots-per-inch value
    #[arg(long)]
    pub dpi: Option<f32>,

    /// Font scale applied on top of the density (used with --dpi)
    #[arg(long)]
    pub font_scale: Option<f32>,

    #[arg(long)]
    pub density: Option<f32>,

    #[arg(long)]
    pub scaled_density: Option<f32>,

    #[arg(long)]
    pub xdpi: Option<f32>,
}

impl MetricsArgs {
    /// Layer the flags over `base`: --dpi first, explicit factors last.
    pub fn resolve(&self, base: &impl MetricsProvider) -> Result<DisplayMetrics> {
        let mut metrics = base.display_metrics();

        if let Some(dpi) = self.dpi {
            let font_scale = self.font_scale.unwrap_or_else(|| metrics.font_scale());
            metrics = DisplayMetrics::from_dpi(dpi, font_scale);
        } else if let Some(font_scale) = self.font_scale {
            metrics.scaled_density = metrics.density * font_scale;
        }

        if let Some(density) = self.density {
            metrics.density = density;
        }
        if let Some(scaled_density) = self.scaled_density {
            metrics.scaled_density = scaled_density;
        }
        if let Some(xdpi) = self.xdpi {
            metrics.xdpi = xdpi;
        }

        validate_metrics(&metrics)?;
        Ok(metrics)
    }
}

#[cfg(test)]
#[path = "test_commands.rs"]
mod tests;
