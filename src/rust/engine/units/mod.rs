//! Conversions between screen-density relative measurement units

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "cli")]
use clap::ValueEnum;
use thiserror::Error;

pub mod legacy;
pub mod metrics;

pub use metrics::{BASELINE_DPI, DisplayMetrics, MetricsProvider};

pub const MM_PER_INCH: f32 = 25.4;
pub const POINTS_PER_INCH: f32 = 72.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("unknown unit '{0}' (expected one of px, dp, sp, pt, in, mm)")]
    UnknownUnit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "lower"))]
pub enum Unit {
    Px,
    #[cfg_attr(feature = "cli", clap(alias = "dp"))]
    Dip,
    Sp,
    Pt,
    #[cfg_attr(feature = "cli", clap(alias = "inch"))]
    In,
    Mm,
}

impl Unit {
    pub const ALL: [Unit; 6] = [Unit::Px, Unit::Dip, Unit::Sp, Unit::Pt, Unit::In, Unit::Mm];

    /// Stable numeric code of the unit.
    pub fn code(self) -> u32 {
        match self {
            Unit::Px => 0,
            Unit::Dip => 1,
            Unit::Sp => 2,
            Unit::Pt => 3,
            Unit::In => 4,
            Unit::Mm => 5,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Unit::Px),
            1 => Some(Unit::Dip),
            2 => Some(Unit::Sp),
            3 => Some(Unit::Pt),
            4 => Some(Unit::In),
            5 => Some(Unit::Mm),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Dip => "dp",
            Unit::Sp => "sp",
            Unit::Pt => "pt",
            Unit::In => "in",
            Unit::Mm => "mm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "px" => Ok(Unit::Px),
            "dp" | "dip" => Ok(Unit::Dip),
            "sp" => Ok(Unit::Sp),
            "pt" => Ok(Unit::Pt),
            "in" | "inch" => Ok(Unit::In),
            "mm" => Ok(Unit::Mm),
            _ => Err(UnitError::UnknownUnit(s.to_string())),
        }
    }
}

/// Value expressed in `unit`, as raw pixels.
pub fn to_pixels(unit: Unit, value: f32, metrics: &DisplayMetrics) -> f32 {
    match unit {
        Unit::Px => value,
        Unit::Dip => value * metrics.density,
        Unit::Sp => value * metrics.scaled_density,
        Unit::Pt => value * metrics.xdpi * (1.0 / POINTS_PER_INCH),
        Unit::In => value * metrics.xdpi,
        Unit::Mm => value * metrics.xdpi * (1.0 / MM_PER_INCH),
    }
}

/// `to_pixels` truncated toward zero, with no rounding bias.
pub fn to_pixels_rounded(unit: Unit, value: f32, metrics: &DisplayMetrics) -> i32 {
    to_pixels(unit, value, metrics) as i32
}

/// Raw pixels expressed in `unit`.
pub fn from_pixels(px: f32, unit: Unit, metrics: &DisplayMetrics) -> f32 {
    match unit {
        Unit::Px => px,
        Unit::Dip => px / metrics.density,
        Unit::Sp => px / metrics.scaled_density,
        Unit::Pt => (px * POINTS_PER_INCH) / metrics.xdpi,
        Unit::In => px / metrics.xdpi,
        Unit::Mm => (px * MM_PER_INCH) / metrics.xdpi,
    }
}

/// Convert `value` from `source` to `target` by way of pixels.
pub fn convert(source: Unit, value: f32, metrics: &DisplayMetrics, target: Unit) -> f32 {
    from_pixels(to_pixels(source, value, metrics), target, metrics)
}

/// Numeric-code form of [`to_pixels`]. Unknown codes measure as zero pixels.
pub fn to_pixels_code(source: u32, value: f32, metrics: &DisplayMetrics) -> f32 {
    Unit::from_code(source)
        .map(|unit| to_pixels(unit, value, metrics))
        .unwrap_or(0.0)
}

/// Numeric-code form of [`convert`]. An unknown target code yields the pixel
/// value unchanged.
pub fn convert_code(source: u32, value: f32, metrics: &DisplayMetrics, target: u32) -> f32 {
    let px = to_pixels_code(source, value, metrics);
    match Unit::from_code(target) {
        Some(unit) => from_pixels(px, unit, metrics),
        None => px,
    }
}

#[cfg(test)]
#[path = "test_units.rs"]
mod tests;
