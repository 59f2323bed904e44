use super::*;
use tempfile::tempdir;

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let config = AppConfig::load(dir.path()).unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(!config.timer.debug);
    assert_eq!(config.display, DisplayMetrics::default());
}

#[test]
fn test_load_partial_toml() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(TOML_FILE),
        "[timer]\ndebug = true\nlabel = \"startup\"\n\n[display]\ndensity = 2.0\n",
    )
    .unwrap();

    let config = AppConfig::load(dir.path()).unwrap();
    assert!(config.timer.debug);
    assert_eq!(config.timer.label, "startup");
    assert_eq!(config.timer.tag, "metrickit");
    assert_eq!(config.display.density, 2.0);
    assert_eq!(config.display.xdpi, 160.0);
    assert_eq!(config.display_metrics(), config.display);
}

#[test]
fn test_load_json() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(JSON_FILE),
        r#"{ "display": { "density": 3.0, "scaled_density": 3.3, "xdpi": 480.0 } }"#,
    )
    .unwrap();

    let config = AppConfig::load(dir.path()).unwrap();
    assert_eq!(config.display, DisplayMetrics::new(3.0, 3.3, 480.0));
}

#[test]
fn test_dot_file_content_sniffing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(DOT_FILE), r#"{ "timer": { "from_start": true } }"#).unwrap();
    assert!(AppConfig::load(dir.path()).unwrap().timer.from_start);

    fs::write(dir.path().join(DOT_FILE), "[timer]\ntag = \"dot\"\n").unwrap();
    assert_eq!(AppConfig::load(dir.path()).unwrap().timer.tag, "dot");
}

#[test]
fn test_toml_wins_over_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(JSON_FILE), r#"{ "timer": { "tag": "json" } }"#).unwrap();
    fs::write(dir.path().join(TOML_FILE), "[timer]\ntag = \"toml\"\n").unwrap();
    assert_eq!(AppConfig::load(dir.path()).unwrap().timer.tag, "toml");
}

#[test]
fn test_invalid_metrics_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(TOML_FILE), "[display]\nxdpi = 0.0\n").unwrap();
    let err = AppConfig::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains("xdpi"));
}

#[test]
fn test_malformed_file_reports_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(TOML_FILE), "[timer\n").unwrap();
    let err = AppConfig::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains(TOML_FILE));
}

#[test]
fn test_write_default_round_trips() {
    let dir = tempdir().unwrap();
    let path = AppConfig::write_default(dir.path()).unwrap();
    assert_eq!(path, dir.path().join(TOML_FILE));
    assert_eq!(AppConfig::load(dir.path()).unwrap(), AppConfig::default());
    assert!(AppConfig::write_default(dir.path()).is_err());
}
