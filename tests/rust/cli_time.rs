use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn metrickit(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("metrickit").expect("binary not found");
    cmd.current_dir(dir);
    cmd
}

#[cfg(unix)]
#[test]
fn time_reports_each_command_when_debug() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args(["time", "--debug", "--label", "build", "true", "echo hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("build: begin"))
        .stdout(predicate::str::contains("ms, true"))
        .stdout(predicate::str::contains("ms, echo hello"))
        .stdout(predicate::str::contains("build: end, "))
        .stdout(predicate::str::contains("hello"));
}

#[cfg(unix)]
#[test]
fn time_is_silent_without_debug() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args(["time", "--label", "quiet", "echo ran"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ran"))
        .stdout(predicate::str::contains("quiet: begin").not());
}

#[cfg(unix)]
#[test]
fn time_debug_can_come_from_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("metrickit.toml"),
        "[timer]\ndebug = true\nlabel = \"configured\"\n",
    )
    .unwrap();
    metrickit(dir.path())
        .args(["time", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("configured: begin"));
}

#[cfg(unix)]
#[test]
fn time_json_report() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args(["time", "--debug", "--json", "--label", "j", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"j\""))
        .stdout(predicate::str::contains("\"entries\""))
        .stdout(predicate::str::contains("\"total_ms\""));
}

#[cfg(unix)]
#[test]
fn time_fails_when_a_command_fails() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args(["time", "--debug", "exit 3", "true"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[ERROR]"))
        .stdout(predicate::str::contains("'exit 3' exited with"))
        .stderr(predicate::str::contains("1 of 2 command(s) failed"));
}

#[cfg(unix)]
#[test]
fn time_from_start_prefixes_tag() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args([
            "time",
            "--debug",
            "--tag",
            "T",
            "--from-start",
            "--label",
            "build",
            "true",
            "true",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("T: build: begin"))
        .stdout(predicate::str::contains("T: build:      "))
        .stdout(predicate::str::contains("T: build: end, "));
}

#[cfg(unix)]
#[test]
fn time_from_start_flag_reaches_report() {
    let dir = tempdir().unwrap();
    let output = metrickit(dir.path())
        .args(["time", "--debug", "--json", "--from-start", "sleep 0.05", "true"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["from_start"], true);
    let first = report["entries"][0]["delta_ms"].as_u64().unwrap();
    let second = report["entries"][1]["delta_ms"].as_u64().unwrap();
    assert!(first >= 50);
    assert!(second >= first);
    assert_eq!(report["total_ms"].as_u64().unwrap(), second);
}

#[cfg(unix)]
#[test]
fn time_from_start_and_tag_come_from_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("metrickit.toml"),
        "[timer]\ndebug = true\nfrom_start = true\ntag = \"cfgtag\"\n",
    )
    .unwrap();
    metrickit(dir.path())
        .args(["time", "--json", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"from_start\": true"))
        .stdout(predicate::str::contains("\"tag\": \"cfgtag\""));

    metrickit(dir.path())
        .args(["time", "--label", "cfg", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cfgtag: cfg: begin"));
}

#[cfg(unix)]
#[test]
fn time_defaults_to_previous_split_deltas() {
    let dir = tempdir().unwrap();
    metrickit(dir.path())
        .args(["time", "--debug", "--json", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"from_start\": false"))
        .stdout(predicate::str::contains("\"tag\": \"metrickit\""));
}
