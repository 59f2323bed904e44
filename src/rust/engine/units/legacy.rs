//! Single-purpose helpers kept for callers relying on their exact results.
//!
//! Each adds 0.5 before truncating toward zero. That rounds half up for
//! non-negative results but pulls negative results toward zero
//! (`px2dip(-10.0)` at density 2.0 is -4, not -5).

use super::DisplayMetrics;

#[deprecated(note = "use units::to_pixels(Unit::Dip, ..) instead")]
pub fn dip2px(metrics: &DisplayMetrics, dip_value: i32) -> i32 {
    (dip_value as f32 * metrics.density + 0.5) as i32
}

#[deprecated(note = "use units::convert(Unit::Px, .., Unit::Dip) instead")]
pub fn px2dip(metrics: &DisplayMetrics, px_value: f32) -> i32 {
    (px_value / metrics.density + 0.5) as i32
}

#[deprecated(note = "use units::to_pixels(Unit::Sp, ..) instead")]
pub fn sp2px(metrics: &DisplayMetrics, sp_value: f32) -> i32 {
    (sp_value * metrics.scaled_density + 0.5) as i32
}

#[deprecated(note = "use units::convert(Unit::Px, .., Unit::Sp) instead")]
pub fn px2sp(metrics: &DisplayMetrics, px_value: f32) -> i32 {
    (px_value / metrics.scaled_density + 0.5) as i32
}

#[cfg(test)]
#[path = "test_legacy.rs"]
mod tests;
