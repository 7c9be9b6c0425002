//! Command-line integration tests for the `infogain` binary.
//!
//! These run the compiled executable with `assert_cmd` and check stdout,
//! stderr, and the exit status. Datasets and config files are written to
//! temporary directories so tests stay isolated.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use test_log::test;

/// Path of the sample bug dataset shipped with the workspace.
fn sample_dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("ml-bugs.csv")
}

fn infogain() -> Command {
    let mut cmd = Command::cargo_bin("infogain").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("INFOGAIN_DATA");
    cmd
}

#[test]
fn entropy_of_three_outcomes() {
    infogain()
        .args(["entropy", "8", "3", "2"])
        .assert()
        .success()
        .stdout("entropy\t: 1.3347\n");
}

#[test]
fn simple_entropy_two_outcomes() {
    infogain()
        .args(["entropy", "--simple", "4", "10"])
        .assert()
        .success()
        .stdout("simple entropy\t: 0.8631\n");
}

#[test]
fn simple_entropy_rejects_zero_count() {
    infogain()
        .args(["entropy", "--simple", "0", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid distribution"));
}

#[test]
fn entropy_rejects_negative_count() {
    infogain()
        .args(["entropy", "3", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative count"));
}

#[test]
fn sigmoid_of_zero() {
    infogain()
        .args(["sigmoid", "0"])
        .assert()
        .success()
        .stdout("sigmoid\t: 0.5000\n");
}

#[test]
fn gain_over_sample_dataset() {
    let expected = "\
parent entropy\t: 0.9950
green entropy\t: 0.0276
blue entropy\t: 0.0276
brown entropy\t: 0.1438
<17 entropy\t: 0.1243
<20 entropy\t: 0.1301
";
    infogain()
        .arg("gain")
        .arg("--data")
        .arg(sample_dataset())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn gain_reads_default_relative_path() -> Result<()> {
    let dir = tempdir()?;
    fs::copy(sample_dataset(), dir.path().join("ml-bugs.csv"))?;

    infogain()
        .current_dir(dir.path())
        .args(["gain", "--split", "Brown"])
        .assert()
        .success()
        .stdout("parent entropy\t: 0.9950\nbrown entropy\t: 0.1438\n");
    Ok(())
}

#[test]
fn gain_data_path_from_environment() {
    infogain()
        .env("INFOGAIN_DATA", sample_dataset())
        .args(["gain", "--split", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<20 entropy\t: 0.1301"));
}

#[test]
fn gain_with_config_file() -> Result<()> {
    let dir = tempdir()?;
    let csv = dir.path().join("bugs.csv");
    fs::write(&csv, "Kind,Shade,Size\nA,Red,1\nB,Red,2\nA,Blue,3\nB,Blue,4\nA,Red,5\n")?;
    let config = dir.path().join("config.yaml");
    fs::write(
        &config,
        "dataset:\n  path: bugs.csv\n  label_column: Kind\n  positive_label: A\n  categorical_column: Shade\n  numeric_column: Size\nsplits:\n  - categorical: Red\n  - threshold: 2.5\n",
    )?;

    infogain()
        .current_dir(dir.path())
        .args(["gain", "--config", "config.yaml"])
        .assert()
        .success()
        .stdout("parent entropy\t: 0.9710\nred entropy\t: 0.0200\n<2.5 entropy\t: 0.0200\n");
    Ok(())
}

#[test]
fn gain_json_output() -> Result<()> {
    let output = infogain()
        .arg("gain")
        .arg("--data")
        .arg(sample_dataset())
        .args(["--format", "json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["rows"], 24);
    assert_eq!(value["splits"].as_array().map(Vec::len), Some(5));
    assert_eq!(value["best_split"], "brown");
    Ok(())
}

#[test]
fn gain_table_output() {
    infogain()
        .arg("gain")
        .arg("--data")
        .arg(sample_dataset())
        .args(["--format", "table", "--show-data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Information gain"))
        .stdout(predicate::str::contains("(24 rows, positive label 'Mobug')"))
        .stdout(predicate::str::contains("[24 rows x 3 columns]"))
        .stdout(predicate::str::contains("== Brown *"));
}

#[test]
fn gain_missing_file_fails() -> Result<()> {
    let dir = tempdir()?;
    infogain()
        .current_dir(dir.path())
        .arg("gain")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset file not found: ml-bugs.csv"));
    Ok(())
}

#[test]
fn gain_empty_partition_fails() {
    infogain()
        .arg("gain")
        .arg("--data")
        .arg(sample_dataset())
        .args(["--split", "Purple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Split 'purple' leaves the matching partition empty"));
}

#[test]
fn gain_single_label_partition_fails() {
    // Only two Mobug rows are shorter than 12 mm.
    infogain()
        .arg("gain")
        .arg("--data")
        .arg(sample_dataset())
        .args(["--split", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid distribution: split '<12' leaves a single label in the matching partition",
        ));
}
