//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("code-bundle"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("code-bundle"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("code-bundle"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bundle the source files"))
        .stdout(predicate::str::contains("bundle"))
        .stdout(predicate::str::contains("create-rsp"));
}

#[test]
fn test_bundle_reports_missing_languages() {
    let root = TempDir::new().expect("temp root");
    let out = TempDir::new().expect("temp out");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("code-bundle"));
    cmd.args([
        "bundle",
        "--path",
        root.path().to_str().expect("utf8 path"),
        "--output",
        out.path().join("b.txt").to_str().expect("utf8 path"),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("An error occurred: Option '--languages' is required"));
}

#[test]
fn test_bundle_reports_missing_directory() {
    let out = TempDir::new().expect("temp out");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("code-bundle"));
    cmd.args([
        "bundle",
        "--path",
        out.path().join("does-not-exist").to_str().expect("utf8 path"),
        "--output",
        out.path().join("b.txt").to_str().expect("utf8 path"),
        "--languages",
        "all",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("An error occurred:"))
        .stdout(predicate::str::contains("Packaging successful").not());
    assert!(!out.path().join("b.txt").exists());
}

#[test]
fn test_error_is_reported_once_without_log_noise() {
    let out = TempDir::new().expect("temp out");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("code-bundle"));
    cmd.env_remove("RUST_LOG").args([
        "bundle",
        "--path",
        out.path().join("does-not-exist").to_str().expect("utf8 path"),
        "--output",
        out.path().join("b.txt").to_str().expect("utf8 path"),
        "--languages",
        "all",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("An error occurred:").count(1))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_rust_log_enables_debug_output() {
    let root = TempDir::new().expect("temp root");
    fs::write(root.path().join("a.py"), "a\n").expect("write fixture");
    let out = TempDir::new().expect("temp out");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("code-bundle"));
    cmd.env("RUST_LOG", "debug").args([
        "bundle",
        "--path",
        root.path().to_str().expect("utf8 path"),
        "--output",
        out.path().join("b.txt").to_str().expect("utf8 path"),
        "--languages",
        "all",
    ]);
    cmd.assert().success().stderr(predicate::str::contains("scanned 1 files"));
}

#[test]
fn test_bundle_rejects_invalid_boolean() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("code-bundle"));
    cmd.args(["bundle", "--languages", "all", "--note", "maybe"]);
    cmd.assert().failure().stderr(predicate::str::contains("maybe"));
}

#[test]
fn test_create_rsp_writes_response_file() {
    let cwd = TempDir::new().expect("temp cwd");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("code-bundle"));
    cmd.current_dir(cwd.path())
        .arg("create-rsp")
        .write_stdin(" out/bundle.txt \npy, js\nY\ntype\nn\nAda Lovelace\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Enter the output file path and name"))
        .stdout(predicate::str::contains("Response file created successfully: bundle.rsp"));

    let rsp = fs::read_to_string(cwd.path().join("bundle.rsp")).expect("read rsp");
    assert_eq!(
        rsp,
        "--output out/bundle.txt\n--languages py, js\n--note true\n--sort type\n--remove-empty-lines false\n--author Ada Lovelace\n"
    );
}

#[test]
fn test_missing_response_file_fails() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("code-bundle"));
    cmd.args(["bundle", "@/definitely/not/here.rsp"]);
    cmd.assert().failure().stderr(predicate::str::contains("Could not read response file"));
}
