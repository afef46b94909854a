use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TODO: &str = "@home buy milk\n\n+proj1 task\n";

fn write_todo(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("todo.txt");
    fs::write(&path, TODO).expect("todo fixture should be writable");
    path
}

fn todocolor(term: &str) -> Command {
    let mut cmd = Command::cargo_bin("todocolor").expect("binary should be built");
    cmd.env("TERM", term)
        .env_remove("NO_COLOR")
        .env_remove("TODO_FILE");
    cmd
}

fn with_file(cmd: &mut Command, path: &Path) {
    cmd.arg("--file").arg(path);
}

#[test]
fn colors_tags_on_capable_terminal() {
    let dir = TempDir::new().unwrap();
    let path = write_todo(&dir);

    let mut cmd = todocolor("xterm-256color");
    with_file(&mut cmd, &path);
    cmd.assert().success().stdout(
        "\x1b[38;5;215m@home\x1b[0m buy milk \n\x1b[38;5;154m+proj1\x1b[0m task \n",
    );
}

#[test]
fn dumb_terminal_prints_plain_words() {
    let dir = TempDir::new().unwrap();
    let path = write_todo(&dir);

    let mut cmd = todocolor("dumb");
    with_file(&mut cmd, &path);
    cmd.assert()
        .success()
        .stdout("@home buy milk \n+proj1 task \n");
}

#[test]
fn no_color_env_prints_plain_words() {
    let dir = TempDir::new().unwrap();
    let path = write_todo(&dir);

    let mut cmd = todocolor("xterm-256color");
    with_file(&mut cmd, &path);
    cmd.env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout("@home buy milk \n+proj1 task \n");
}

#[test]
fn getline_keeps_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_todo(&dir);

    let mut cmd = todocolor("dumb");
    with_file(&mut cmd, &path);
    cmd.arg("--getline")
        .assert()
        .success()
        .stdout("@home buy milk \n\n+proj1 task \n");
}

#[test]
fn todo_file_env_is_used_without_flag() {
    let dir = TempDir::new().unwrap();
    let path = write_todo(&dir);

    todocolor("dumb")
        .env("TODO_FILE", &path)
        .assert()
        .success()
        .stdout("@home buy milk \n+proj1 task \n");
}

#[test]
fn file_flag_overrides_todo_file_env() {
    let dir = TempDir::new().unwrap();
    let path = write_todo(&dir);
    let other = dir.path().join("other.txt");
    fs::write(&other, "just this\n").unwrap();

    let mut cmd = todocolor("dumb");
    with_file(&mut cmd, &other);
    cmd.env("TODO_FILE", &path)
        .assert()
        .success()
        .stdout("just this \n");
}

#[test]
fn missing_file_fails_with_message() {
    let dir = TempDir::new().unwrap();

    let mut cmd = todocolor("dumb");
    with_file(&mut cmd, &dir.path().join("absent.txt"));
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to read todo file"))
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn invalid_verbosity_is_rejected_by_parser() {
    todocolor("dumb")
        .args(["--verbosity", "shout", "--file", "x.txt"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unsupported verbosity"));
}

#[test]
fn debug_verbosity_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let path = write_todo(&dir);

    let mut cmd = todocolor("dumb");
    with_file(&mut cmd, &path);
    cmd.args(["-v", "debug"])
        .assert()
        .success()
        .stdout("@home buy milk \n+proj1 task \n")
        .stderr(predicate::str::contains("event=todo_read"));
}

#[test]
fn quiet_silences_logs() {
    let dir = TempDir::new().unwrap();
    let path = write_todo(&dir);

    let mut cmd = todocolor("dumb");
    with_file(&mut cmd, &path);
    cmd.args(["-q", "-v", "trace"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_flag_prints_version() {
    todocolor("dumb")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn latin1_todo_file_prints_instead_of_failing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9 +menu\n").unwrap();

    let mut cmd = todocolor("dumb");
    with_file(&mut cmd, &path);
    cmd.assert().success().stdout("caf\u{fffd} +menu \n");
}
