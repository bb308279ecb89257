use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn render_lists_inline_elements() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("msg.txt");
    fs::write(&input, "*Sale* ends ~today~").unwrap();

    let mut cmd = cargo_bin_cmd!("chatmark");
    cmd.arg("render").arg(&input);

    cmd.assert()
        .success()
        .stdout("bold: Sale\ntext:  ends \nstrike: today\n");
}

#[test]
fn render_detects_links() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("msg.txt");
    fs::write(&input, "see https://example.com").unwrap();

    let mut cmd = cargo_bin_cmd!("chatmark");
    cmd.arg("render").arg(&input);

    cmd.assert()
        .success()
        .stdout("text: see \nlink: https://example.com\n");
}

#[test]
fn render_link_detection_can_be_disabled() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("msg.txt");
    fs::write(&input, "see https://example.com").unwrap();

    let mut cmd = cargo_bin_cmd!("chatmark");
    cmd.arg("render")
        .arg(&input)
        .arg("--extra-detect-links")
        .arg("false");

    cmd.assert()
        .success()
        .stdout("text: see https://example.com\n");
}

#[test]
fn render_as_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("msg.txt");
    fs::write(&input, "_*Thanks*_").unwrap();

    let mut cmd = cargo_bin_cmd!("chatmark");
    cmd.arg("render").arg(&input).arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "type": "bold-italic", "text": "Thanks" }])
    );
}

#[test]
fn render_missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("chatmark");
    cmd.arg("render").arg("does-not-exist.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn render_rejects_invalid_boolean_extra() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("msg.txt");
    fs::write(&input, "hi").unwrap();

    let mut cmd = cargo_bin_cmd!("chatmark");
    cmd.arg("render")
        .arg(&input)
        .arg("--extra-detect-links")
        .arg("maybe");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid boolean value 'maybe'"));
}
