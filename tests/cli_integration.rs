//! Integration tests for the `todo` CLI.
//!
//! Each test writes a replay script into a temp directory, runs
//! `todo replay` as a subprocess, and checks stdout, stderr and exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `todo` binary.
fn todo_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("todo");
    path
}

/// Write `script` to `script.txt` in `dir` and return its path.
fn write_script(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("script.txt");
    fs::write(&path, script).unwrap();
    path
}

/// Run `todo` with the given args in the given directory, returning (stdout, stderr, success).
fn run_todo(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(todo_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run todo");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `todo` expecting success, return stdout.
fn run_todo_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_todo(dir, args);
    if !success {
        panic!(
            "todo {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Replay `script` and return stdout, with `extra` args placed before the subcommand.
fn replay(dir: &Path, script: &str, extra: &[&str]) -> String {
    let path = write_script(dir, script);
    let path = path.to_str().unwrap();
    let mut args: Vec<&str> = extra.to_vec();
    args.extend(["replay", path]);
    run_todo_ok(dir, &args)
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

#[test]
fn test_replay_sections() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = replay(
        tmp.path(),
        "\
# groceries
add Buy milk
add Walk dog
add Read
toggle 2
",
        &[],
    );
    assert_eq!(
        out,
        "\
Todo List App
Ongoing Tasks (2)
  [ ] 1  Buy milk
  [ ] 3  Read
Done Tasks (1)
  [x] 2  Walk dog
"
    );
}

#[test]
fn test_replay_basic_is_flat() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = replay(tmp.path(), "add A\nadd B\ntoggle 1\n", &["--variant", "basic"]);
    assert_eq!(out, "Todo List App\n  [x] 1  A\n  [ ] 2  B\n");
}

#[test]
fn test_replay_empty_submit_shows_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = replay(tmp.path(), "draft    \nsubmit\n", &[]);
    assert!(out.contains("Please add a todo item"));
    assert!(out.contains("No tasks yet. Add some tasks to get started!"));

    let out = replay(tmp.path(), "submit\n", &["--variant", "sectioned"]);
    assert!(out.contains("Please add todo item first."));
}

#[test]
fn test_replay_edit() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = replay(tmp.path(), "add A\nedit 1\ndraft B\nsubmit\n", &[]);
    assert!(out.contains("  [ ] 1  B"));
    assert!(!out.contains("Editing"));
}

#[test]
fn test_replay_undo_window() {
    let tmp = tempfile::TempDir::new().unwrap();

    let out = replay(tmp.path(), "add A\ndelete 1\nwait 1000\n", &[]);
    assert!(out.contains("Task deleted: A  [Undo] 2.0s"));

    let out = replay(tmp.path(), "add A\ndelete 1\nwait 1000\nundo\n", &[]);
    assert!(out.contains("  [ ] 1  A"));
    assert!(!out.contains("Task deleted"));

    let out = replay(tmp.path(), "add A\ndelete 1\nwait 3000\nundo\n", &[]);
    assert!(!out.contains("  [ ] 1  A"));
    assert!(!out.contains("Task deleted"));
}

#[test]
fn test_replay_undo_timeout_flag() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = replay(
        tmp.path(),
        "add A\ndelete 1\nwait 600\nundo\n",
        &["--undo-timeout-ms", "500"],
    );
    assert!(!out.contains("  [ ] 1  A"));
}

#[test]
fn test_replay_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let tmp = tempfile::TempDir::new().unwrap();
    let mut child = Command::new(todo_bin())
        .args(["replay", "-"])
        .current_dir(tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run todo");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"add From stdin\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("  [ ] 1  From stdin"));
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn test_replay_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = replay(
        tmp.path(),
        "add A\nadd B\ntoggle 1\ndelete 2\nwait 500\n",
        &["--json"],
    );
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["variant"], "styled");
    assert_eq!(json["ongoing_count"], 0);
    assert_eq!(json["done_count"], 1);
    assert_eq!(json["tasks"][0]["id"], 1);
    assert_eq!(json["tasks"][0]["done"], true);
    assert_eq!(json["pending_undo"]["task"]["text"], "B");
    assert_eq!(json["pending_undo"]["remaining_ms"], 2500);
}

#[test]
fn test_replay_json_editing_and_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = replay(tmp.path(), "add A\nedit 1\ndraft  \nsubmit\n", &["--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["editing"], 1);
    assert_eq!(json["error"], "Please add a todo item");
    assert_eq!(json["tasks"][0]["text"], "A");
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn test_config_file_in_cwd() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("todo.toml"), "variant = \"basic\"\n").unwrap();
    let out = replay(tmp.path(), "add A\nedit 1\ndraft B\nsubmit\n", &[]);
    // basic has no editing, so the draft is added as a new task
    assert_eq!(out, "Todo List App\n  [ ] 1  A\n  [ ] 2  B\n");
}

#[test]
fn test_flag_overrides_config_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("todo.toml"), "variant = \"basic\"\n").unwrap();
    let out = replay(tmp.path(), "add A\n", &["--variant", "sectioned"]);
    assert!(out.contains("Ongoing Tasks (1)"));
}

#[test]
fn test_log_file_written() {
    let tmp = tempfile::TempDir::new().unwrap();
    let log = tmp.path().join("todo.log");
    replay(tmp.path(), "add A\n", &["--log-file", log.to_str().unwrap()]);
    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("starting"));
    assert!(text.contains("replay finished"));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn test_unknown_command_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = write_script(tmp.path(), "add A\nfrobnicate\n");
    let (stdout, stderr, success) = run_todo(tmp.path(), &["replay", path.to_str().unwrap()]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 2: unknown command `frobnicate`"));
}

#[test]
fn test_bad_id_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = write_script(tmp.path(), "toggle first\n");
    let (_, stderr, success) = run_todo(tmp.path(), &["replay", path.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.contains("line 1: `toggle`"));
}

#[test]
fn test_argument_on_bare_command_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = write_script(tmp.path(), "add A\ndelete 1\nundo 3\n");
    let (stdout, stderr, success) = run_todo(tmp.path(), &["replay", path.to_str().unwrap()]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 3: `undo` expects no arguments"));
}

#[test]
fn test_missing_script_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_todo(tmp.path(), &["replay", "nope.txt"]);
    assert!(!success);
    assert!(stderr.contains("cannot read script 'nope.txt'"));
}

#[test]
fn test_malformed_config_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("todo.toml"), "variant = [").unwrap();
    let path = write_script(tmp.path(), "add A\n");
    let (_, stderr, success) = run_todo(tmp.path(), &["replay", path.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.starts_with("error:"));
}
