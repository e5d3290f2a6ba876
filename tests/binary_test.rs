use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn command(root: &Path, config: &str) -> Command {
    let mut cmd = Command::cargo_bin("import-project").unwrap();
    cmd.arg("--config")
        .arg(root.join(config))
        .arg("--target-dir")
        .arg(root.join("project"))
        .arg("--source-dir")
        .arg(root.join("skeleton"))
        .arg("--destination-dir")
        .arg(root.join("project"));
    cmd
}

#[test]
fn test_missing_config_exits_with_1() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("skeleton")).unwrap();

    command(temp_dir.path(), "absent")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file"))
        .stderr(predicate::str::contains("absent.json is missing!"));
    assert!(!temp_dir.path().join("project").exists());
}

#[test]
fn test_missing_source_exits_with_2() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.json"), "{}").unwrap();

    command(temp_dir.path(), "config")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist!"));
}

#[test]
fn test_missing_flags_exit_with_3() {
    let mut cmd = Command::cargo_bin("import-project").unwrap();
    cmd.arg("--config")
        .arg("settings")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--target-dir"))
        .stderr(predicate::str::contains("--source-dir"))
        .stderr(predicate::str::contains("--destination-dir"));
}

#[test]
fn test_verbose_run_succeeds_with_missing_target() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("skeleton")).unwrap();
    fs::write(root.join("skeleton/greeting.txt"), "Hello ${NAME}!").unwrap();
    fs::write(
        root.join("config.json"),
        r#"{"greeting.txt": {"NAME": "World"}, "absent.txt": {"NAME": "World"}}"#,
    )
    .unwrap();

    command(root, "config.json")
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported configuration from"))
        .stdout(predicate::str::contains("Copied project structure from"))
        .stdout(predicate::str::contains("Warning: Target file"))
        .stdout(predicate::str::contains("Applied transformations to"));

    assert_eq!(
        fs::read_to_string(root.join("project/greeting.txt")).unwrap(),
        "Hello World!"
    );
}

#[test]
fn test_quiet_run_prints_only_warnings() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("skeleton")).unwrap();
    fs::write(root.join("config.json"), r#"{"absent.txt": {"NAME": "World"}}"#).unwrap();

    command(root, "config.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Target file"))
        .stdout(predicate::str::contains("Imported configuration").not());
}

#[test]
fn test_unknown_flag_exits_with_3() {
    let mut cmd = Command::cargo_bin("import-project").unwrap();
    cmd.args(["--config", "c", "--bogus"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_flag_without_value_exits_with_3() {
    let mut cmd = Command::cargo_bin("import-project").unwrap();
    cmd.arg("--config").assert().code(3);
}

#[test]
fn test_help_exits_with_0() {
    let mut cmd = Command::cargo_bin("import-project").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--destination-dir"));
}
