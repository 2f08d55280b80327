//! Integration tests for the dirnode binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str], home: &Path) -> Output {
    run_with_env(args, home, &[])
}

fn run_with_env(args: &[&str], home: &Path, vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dirnode"));
    command
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_STATE_HOME", home.join("state"));
    for key in [
        "DIRNODE_LOG",
        "DIRNODE_LOG_FORMAT",
        "DIRNODE_LOG_OUTPUT",
        "DIRNODE_LOG_MODULES",
    ] {
        command.env_remove(key);
    }
    command.envs(vars.iter().copied()).args(args).output().unwrap()
}

fn fixture() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let tree = temp_dir.path().join("tree");
    fs::create_dir_all(tree.join("sub")).unwrap();
    fs::write(tree.join("b.txt"), "bee").unwrap();
    fs::write(tree.join("sub").join("a.txt"), "ay").unwrap();
    temp_dir
}

#[test]
fn test_hash_command_prints_hex() {
    let temp_dir = fixture();
    let tree = temp_dir.path().join("tree");

    let output = run(&["hash", tree.to_str().unwrap()], temp_dir.path());

    assert!(
        output.status.success(),
        "dirnode hash should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let hash = stdout.trim();
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_show_command_prints_canonical_form() {
    let temp_dir = fixture();
    let tree = temp_dir.path().join("tree");

    let output = run(&["show", tree.to_str().unwrap()], temp_dir.path());

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "(b.txt<bee> sub(a.txt<ay>))"
    );
}

#[test]
fn test_show_json_and_children_agree_on_hash() {
    let temp_dir = fixture();
    let tree = temp_dir.path().join("tree");
    let tree = tree.to_str().unwrap();

    let show = run(&["show", tree, "--format", "json"], temp_dir.path());
    let hash = run(&["hash", tree], temp_dir.path());
    assert!(show.status.success());

    let json: serde_json::Value = serde_json::from_slice(&show.stdout).unwrap();
    assert_eq!(json["child_count"], 2);
    assert_eq!(
        json["hash"].as_str().unwrap(),
        String::from_utf8_lossy(&hash.stdout).trim()
    );

    let children = run(&["children", tree, "--format", "json"], temp_dir.path());
    let json: serde_json::Value = serde_json::from_slice(&children.stdout).unwrap();
    assert_eq!(json[0]["name"], "b.txt");
    assert_eq!(json[1]["name"], "sub");
    assert_eq!(json[1]["is_directory"], true);
}

#[test]
fn test_missing_directory_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let output = run(&["hash", missing.to_str().unwrap()], temp_dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid path"));
}

#[test]
fn test_file_logging_keeps_stdout_clean() {
    let temp_dir = fixture();
    let tree = temp_dir.path().join("tree");
    let log_file = temp_dir.path().join("logs").join("dirnode.log");

    let output = run(
        &[
            "hash",
            tree.to_str().unwrap(),
            "--verbose",
            "--log-output",
            "file",
            "--log-file",
            log_file.to_str().unwrap(),
        ],
        temp_dir.path(),
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim().len(), 64);
    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("Tree build completed"));
}

#[test]
fn test_log_flags_win_over_environment() {
    let temp_dir = fixture();
    let tree = temp_dir.path().join("tree");
    let log_file = temp_dir.path().join("logs").join("dirnode.log");

    let output = run_with_env(
        &[
            "hash",
            tree.to_str().unwrap(),
            "--log-level",
            "info",
            "--log-format",
            "json",
            "--log-output",
            "file",
            "--log-file",
            log_file.to_str().unwrap(),
        ],
        temp_dir.path(),
        &[
            ("DIRNODE_LOG", "off"),
            ("DIRNODE_LOG_FORMAT", "text"),
            ("DIRNODE_LOG_OUTPUT", "stdout"),
        ],
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim().len(), 64);

    let content = fs::read_to_string(&log_file).unwrap();
    let completed = content
        .lines()
        .find(|line| line.contains("Tree build completed"))
        .unwrap();
    let event: serde_json::Value = serde_json::from_str(completed).unwrap();
    assert_eq!(event["level"], "INFO");
}
