use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn config_show_prints_defaults() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("metrickit")
        .expect("binary not found")
        .arg("--config-dir")
        .arg(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[timer]"))
        .stdout(predicate::str::contains("debug = false"))
        .stdout(predicate::str::contains("[display]"));
}

#[test]
fn config_init_writes_file_once() {
    let dir = tempdir().unwrap();
    let run = || {
        let mut cmd = Command::cargo_bin("metrickit").expect("binary not found");
        cmd.arg("--config-dir").arg(dir.path()).args(["config", "init"]);
        cmd
    };

    run()
        .assert()
        .success()
        .stdout(predicate::str::contains("[SUCCESS]"))
        .stdout(predicate::str::contains("Config written to"));
    assert!(dir.path().join("metrickit.toml").exists());
    run().assert().failure();
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("metrickit.toml"), "[display]\nxdpi = -1.0\n").unwrap();
    Command::cargo_bin("metrickit")
        .expect("binary not found")
        .arg("--config-dir")
        .arg(dir.path())
        .args(["px", "1", "--from", "in"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xdpi"));
}
