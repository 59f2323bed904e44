use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_prints_version() {
    let mut cmd = Command::cargo_bin("metrickit").expect("binary not found");
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("metrickit"));
}

#[test]
fn cli_help_lists_commands() {
    let mut cmd = Command::cargo_bin("metrickit").expect("binary not found");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("time"));
}
