//! End-to-end tests for the svgmap-extractor binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

/// Path to a fixture file under tests/fixtures/worldmap/.
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("worldmap")
        .join(name)
}

fn cmd() -> Command {
    Command::cargo_bin("svgmap-extractor").unwrap()
}

#[test]
fn test_extract_succeeds_and_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("locations.json");

    cmd()
        .arg(fixture_path("world.svg"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Locations: 5"))
        .stdout(predicate::str::contains("Saved to:"));

    let content = fs::read_to_string(&output).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["name"], "FRA");
}

#[test]
fn test_default_output_lands_in_current_directory() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .current_dir(dir.path())
        .arg(fixture_path("world.svg"))
        .assert()
        .success();

    assert!(dir.path().join("locations.json").exists());
}

#[test]
fn test_missing_input_fails() {
    cmd()
        .arg("does-not-exist.svg")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_unparseable_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.svg");
    fs::write(&broken, "<svg><path id=\"FRA\" d=\"M0 0\">").unwrap();

    cmd()
        .arg(&broken)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("SVG parsing failed"));
}

#[test]
fn test_missing_output_directory_fails_before_parsing() {
    cmd()
        .arg(fixture_path("world.svg"))
        .arg("--output")
        .arg("no/such/dir/locations.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory does not exist"));
}

#[test]
fn test_repeated_runs_produce_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    for output in [&first, &second] {
        cmd()
            .arg(fixture_path("world.svg"))
            .arg("--output")
            .arg(output)
            .assert()
            .success();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}
