// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Integration tests for the `colette` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn colette() -> Command {
    let mut cmd = Command::cargo_bin("colette").unwrap();
    cmd.env_remove("COLETTE_LOG_LEVEL")
        .env_remove("NO_COLOR")
        .arg("--no-color");
    cmd
}

#[test]
fn test_to256_hex() {
    colette()
        .args(["to256", "#ff0000"])
        .assert()
        .success()
        .stdout("196\n");
}

#[test]
fn test_to256_triplet_grey() {
    colette()
        .args(["to256", "128,128,128"])
        .assert()
        .success()
        .stdout("244\n");
}

#[test]
fn test_to16() {
    colette().args(["to16", "21"]).assert().success().stdout("12\n");
}

#[test]
fn test_to_rgb() {
    colette()
        .args(["to-rgb", "120"])
        .assert()
        .success()
        .stdout("#87ff87\n");
}

#[test]
fn test_join_and_split() {
    colette()
        .args(["join", "200", "200", "200"])
        .assert()
        .success()
        .stdout("0xc8c8c8\n");

    colette()
        .args(["split", "0xc8c8c8"])
        .assert()
        .success()
        .stdout("200 200 200\n");
}

#[test]
fn test_degrade_to_ansi16() {
    colette()
        .args(["degrade", "255,0,0", "--depth", "ansi16"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_palette_json() {
    let assert = colette()
        .args(["palette", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 256);
    assert_eq!(entries[120]["hex"], "#87ff87");
}

#[test]
fn test_palette_text_without_color_has_no_escape_codes() {
    colette()
        .arg("palette")
        .assert()
        .success()
        .stdout(predicate::str::contains("196  #ff0000   9  cube"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_palette_text_piped_has_no_escape_codes() {
    let mut cmd = Command::cargo_bin("colette").unwrap();
    cmd.env_remove("NO_COLOR")
        .env_remove("COLETTE_LOG_LEVEL")
        .arg("palette")
        .assert()
        .success()
        .stdout(predicate::str::contains("  0  #000000   0  basic"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_signed_packed_value_fails() {
    colette()
        .args(["split", "0x+ff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("colette::parse::packed_rgb"));
    colette().args(["split", "+255"]).assert().failure();
}

#[test]
fn test_bad_hex_color_fails() {
    colette()
        .args(["to256", "#ff00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("colette::parse::hex_color"));
}

#[test]
fn test_out_of_range_index_fails() {
    colette().args(["to-rgb", "256"]).assert().failure();
}

#[test]
fn test_no_args_prints_help() {
    Command::cargo_bin("colette")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage").or(predicate::str::contains("USAGE")));
}

#[test]
fn test_enable_logging_writes_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("colette.log");

    colette()
        .args(["to256", "#ff0000", "--enable-logging", "--log-level", "info"])
        .arg("--log-file")
        .arg(&log_file)
        .assert()
        .success()
        .stdout("196\n");

    let content = std::fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("to256"));
}
