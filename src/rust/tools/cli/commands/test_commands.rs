use super::*;

#[test]
fn test_no_flags_keep_base_metrics() {
    let base = DisplayMetrics::new(2.0, 2.2, 320.0);
    let resolved = MetricsArgs::default().resolve(&base).unwrap();
    assert_eq!(resolved, base);
}

#[test]
fn test_dpi_derives_all_factors() {
    let args = MetricsArgs {
        dpi: Some(480.0),
        ..Default::default()
    };
    let resolved = args.resolve(&DisplayMetrics::default()).unwrap();
    assert_eq!(resolved, DisplayMetrics::new(3.0, 3.0, 480.0));
}

#[test]
fn test_explicit_factors_override_dpi() {
    let args = MetricsArgs {
        dpi: Some(320.0),
        font_scale: Some(1.5),
        xdpi: Some(300.0),
        ..Default::default()
    };
    let resolved = args.resolve(&DisplayMetrics::default()).unwrap();
    assert_eq!(resolved, DisplayMetrics::new(2.0, 3.0, 300.0));
}

#[test]
fn test_font_scale_alone_rescales_sp() {
    let args = MetricsArgs {
        font_scale: Some(1.25),
        ..Default::default()
    };
    let resolved = args.resolve(&DisplayMetrics::new(2.0, 2.0, 320.0)).unwrap();
    assert_eq!(resolved.scaled_density, 2.5);
    assert_eq!(resolved.density, 2.0);
}

#[test]
fn test_non_positive_override_rejected() {
    let args = MetricsArgs {
        density: Some(0.0),
        ..Default::default()
    };
    assert!(args.resolve(&DisplayMetrics::default()).is_err());
}
