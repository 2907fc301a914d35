use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use stamp::cli::Args;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("stamp")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["task.json"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.task_file, PathBuf::from("task.json"));
    assert!(!parsed.verbose);
}

#[test]
fn test_verbose_flag() {
    let args = make_args(&["-v", "task.yml"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
}

#[test]
fn test_missing_args() {
    let args = make_args(&[]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["task.json", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_runner_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("greeting.txt");
    fs::write(&target, "hello {{name}}").unwrap();

    let task = temp_dir.path().join("task.json");
    let definition = serde_json::json!({
        "files": target.to_str().unwrap(),
        "data": { "name": "world" }
    });
    fs::write(&task, definition.to_string()).unwrap();

    Command::cargo_bin("stamp").unwrap().arg(&task).assert().success();

    assert_eq!(fs::read_to_string(&target).unwrap(), "hello world");
}

#[test]
fn test_runner_reports_failure() {
    let temp_dir = TempDir::new().unwrap();
    let task = temp_dir.path().join("task.json");
    let definition = serde_json::json!({
        "files": format!("{}/*.txt", temp_dir.path().display()),
        "data": { "secret": format!("{}/missing.txt", temp_dir.path().display()) },
        "type": "file"
    });
    fs::write(&task, definition.to_string()).unwrap();

    Command::cargo_bin("stamp")
        .unwrap()
        .arg(&task)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_runner_rejects_unreadable_task_file() {
    Command::cargo_bin("stamp")
        .unwrap()
        .arg("no-such-task.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-task.json"));
}
