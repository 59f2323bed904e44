use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn metrickit(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("metrickit").expect("binary not found");
    cmd.current_dir(dir);
    cmd
}

#[test]
fn convert_dp_to_px() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args(["convert", "10", "--from", "dp", "--to", "px", "--density", "2"])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn convert_px_to_dip() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args(["convert", "20", "--from", "px", "--to", "dip", "--dpi", "320"])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn px_rounded_truncates() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args(["px", "10", "--from", "mm", "--round"])
        .assert()
        .success()
        .stdout("62\n");
}

#[test]
fn legacy_px2dip_keeps_negative_quirk() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args(["legacy", "px2dip", "-10", "--density", "2"])
        .assert()
        .success()
        .stdout("-4\n");
}

#[test]
fn legacy_dip2px_rounds_half_up() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args(["legacy", "dip2px", "10", "--density", "1.5"])
        .assert()
        .success()
        .stdout("15\n");
}

#[test]
fn unknown_unit_is_rejected() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args(["convert", "1", "--from", "furlong", "--to", "px"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("furlong"));
}

#[test]
fn metrics_come_from_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("metrickit.toml"),
        "[display]\ndensity = 3.0\n",
    )
    .unwrap();
    metrickit(dir.path())
        .args(["px", "4", "--from", "dp"])
        .assert()
        .success()
        .stdout("12\n");
}
