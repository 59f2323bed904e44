use super::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * b.abs().max(1.0)
}

fn sample_metrics() -> DisplayMetrics {
    DisplayMetrics::new(2.0, 2.0, 160.0)
}

#[test]
fn test_dip_to_pixels() {
    let metrics = sample_metrics();
    assert_eq!(to_pixels(Unit::Dip, 10.0, &metrics), 20.0);
    assert_eq!(convert(Unit::Dip, 10.0, &metrics, Unit::Px), 20.0);
}

#[test]
fn test_pixels_to_dip() {
    let metrics = sample_metrics();
    assert_eq!(convert(Unit::Px, 20.0, &metrics, Unit::Dip), 10.0);
}

#[test]
fn test_physical_units() {
    let metrics = DisplayMetrics::new(1.0, 1.0, 160.0);
    assert!(approx(to_pixels(Unit::In, 1.0, &metrics), 160.0));
    assert!(approx(to_pixels(Unit::Pt, 72.0, &metrics), 160.0));
    assert!(approx(to_pixels(Unit::Mm, 25.4, &metrics), 160.0));

    assert!(approx(convert(Unit::Px, 160.0, &metrics, Unit::In), 1.0));
    assert!(approx(convert(Unit::Px, 160.0, &metrics, Unit::Pt), 72.0));
    assert!(approx(convert(Unit::Px, 160.0, &metrics, Unit::Mm), 25.4));
    assert!(approx(convert(Unit::In, 1.0, &metrics, Unit::Mm), 25.4));
}

#[test]
fn test_sp_uses_scaled_density() {
    let metrics = DisplayMetrics::new(2.0, 3.0, 320.0);
    assert_eq!(to_pixels(Unit::Sp, 10.0, &metrics), 30.0);
    assert_eq!(convert(Unit::Px, 30.0, &metrics, Unit::Sp), 10.0);
    assert_eq!(convert(Unit::Sp, 10.0, &metrics, Unit::Dip), 15.0);
}

#[test]
fn test_same_unit_is_identity() {
    let metrics = DisplayMetrics::new(2.625, 2.89, 403.4);
    for unit in Unit::ALL {
        for value in [0.0_f32, 1.0, 13.5, -7.25, 480.0] {
            let back = convert(unit, value, &metrics, unit);
            assert!(approx(back, value), "{unit}: {value} came back as {back}");
        }
    }
}

#[test]
fn test_rounded_pixels_truncate_toward_zero() {
    let metrics = DisplayMetrics::new(1.5, 1.5, 160.0);
    assert_eq!(to_pixels_rounded(Unit::Dip, 10.0, &metrics), 15);
    assert_eq!(to_pixels_rounded(Unit::Dip, 1.0, &metrics), 1);
    assert_eq!(to_pixels_rounded(Unit::Dip, -1.0, &metrics), -1);
    assert_eq!(to_pixels_rounded(Unit::Mm, 10.0, &metrics), 62);
}

#[test]
fn test_code_round_trip() {
    for unit in Unit::ALL {
        assert_eq!(Unit::from_code(unit.code()), Some(unit));
    }
    assert_eq!(Unit::from_code(17), None);
}

#[test]
fn test_unknown_target_code_passes_pixels_through() {
    let metrics = sample_metrics();
    assert_eq!(convert_code(Unit::Dip.code(), 10.0, &metrics, 99), 20.0);
    assert_eq!(
        convert_code(Unit::Px.code(), 20.0, &metrics, Unit::Dip.code()),
        10.0
    );
}

#[test]
fn test_unknown_source_code_measures_zero() {
    let metrics = sample_metrics();
    assert_eq!(to_pixels_code(42, 10.0, &metrics), 0.0);
    assert_eq!(convert_code(42, 10.0, &metrics, Unit::Dip.code()), 0.0);
}

#[test]
fn test_parse_units() {
    assert_eq!("dp".parse::<Unit>(), Ok(Unit::Dip));
    assert_eq!("DIP".parse::<Unit>(), Ok(Unit::Dip));
    assert_eq!(" inch ".parse::<Unit>(), Ok(Unit::In));
    assert_eq!("mm".parse::<Unit>(), Ok(Unit::Mm));
    assert_eq!(
        "furlong".parse::<Unit>(),
        Err(UnitError::UnknownUnit("furlong".to_string()))
    );
}

#[test]
fn test_unit_display_parses_back() {
    for unit in Unit::ALL {
        assert_eq!(unit.to_string().parse::<Unit>(), Ok(unit));
    }
}

#[test]
fn test_metrics_from_dpi() {
    let metrics = DisplayMetrics::from_dpi(320.0, 1.5);
    assert_eq!(metrics.density, 2.0);
    assert_eq!(metrics.scaled_density, 3.0);
    assert_eq!(metrics.xdpi, 320.0);
    assert_eq!(metrics.font_scale(), 1.5);
    assert_eq!(metrics.display_metrics(), metrics);
}

#[test]
fn test_default_metrics_are_baseline() {
    let metrics = DisplayMetrics::default();
    assert_eq!(metrics, DisplayMetrics::from_dpi(BASELINE_DPI, 1.0));
    assert_eq!(to_pixels(Unit::Dip, 48.0, &metrics), 48.0);
}
