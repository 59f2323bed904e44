#![allow(deprecated)]

use super::*;

#[test]
fn test_dip2px_rounds_half_up() {
    let metrics = DisplayMetrics::new(1.5, 1.5, 240.0);
    assert_eq!(dip2px(&metrics, 10), 15);
    assert_eq!(dip2px(&metrics, 1), 2);
    assert_eq!(dip2px(&metrics, 0), 0);
}

#[test]
fn test_px2dip() {
    let metrics = DisplayMetrics::new(2.0, 2.0, 320.0);
    assert_eq!(px2dip(&metrics, 20.0), 10);
    assert_eq!(px2dip(&metrics, 21.0), 11);
}

#[test]
fn test_px2dip_negative_input_moves_toward_zero() {
    let metrics = DisplayMetrics::new(2.0, 2.0, 320.0);
    assert_eq!(px2dip(&metrics, -10.0), -4);
}

#[test]
fn test_sp_helpers_use_scaled_density() {
    let metrics = DisplayMetrics::new(1.0, 1.5, 160.0);
    assert_eq!(sp2px(&metrics, 14.0), 21);
    assert_eq!(px2sp(&metrics, 21.0), 14);
    assert_eq!(px2sp(&metrics, 22.0), 15);
}

#[test]
fn test_legacy_differs_from_truncating_conversion() {
    let metrics = DisplayMetrics::new(1.5, 1.5, 240.0);
    assert_eq!(dip2px(&metrics, 1), 2);
    assert_eq!(
        crate::engine::units::to_pixels_rounded(crate::engine::units::Unit::Dip, 1.0, &metrics),
        1
    );
}
