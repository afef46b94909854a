use std::fs;
use tempfile::TempDir;
use todocolor_core::{render, Options, ReadMode, TerminalCapability};

const TODO: &str = "(A) call mom @phone\n\nplant tulips +garden @yard\nx 2024-01-02 done\n";

fn options_for(dir: &TempDir) -> Options {
    let path = dir.path().join("todo.txt");
    fs::write(&path, TODO).expect("todo fixture should be writable");
    Options::new(path)
}

#[test]
fn contents_mode_drops_blank_lines() {
    let dir = TempDir::new().unwrap();
    let options = options_for(&dir);

    let out = render(&options, TerminalCapability::dumb()).unwrap();
    assert_eq!(
        out,
        "(A) call mom @phone \nplant tulips +garden @yard \nx 2024-01-02 done "
    );
}

#[test]
fn lines_mode_keeps_blank_lines() {
    let dir = TempDir::new().unwrap();
    let mut options = options_for(&dir);
    options.read_mode = ReadMode::Lines;

    let out = render(&options, TerminalCapability::dumb()).unwrap();
    assert_eq!(
        out,
        "(A) call mom @phone \n\nplant tulips +garden @yard \nx 2024-01-02 done "
    );
}

#[test]
fn color_mode_highlights_tags() {
    let dir = TempDir::new().unwrap();
    let options = options_for(&dir);

    let out = render(&options, TerminalCapability::color()).unwrap();
    let second = out.lines().nth(1).expect("second line should exist");
    assert_eq!(
        second,
        "plant tulips \x1b[38;5;154m+garden\x1b[0m \x1b[38;5;215m@yard\x1b[0m "
    );
    assert!(!out.ends_with('\n'));
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let options = Options::new(dir.path().join("nope.txt"));

    assert!(render(&options, TerminalCapability::color()).is_err());
}

#[test]
fn non_utf8_file_still_renders_in_both_modes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todo.txt");
    fs::write(&path, b"caf\xe9 @home\n").unwrap();
    let mut options = Options::new(path);

    for mode in [ReadMode::Contents, ReadMode::Lines] {
        options.read_mode = mode;
        let out = render(&options, TerminalCapability::color()).unwrap();
        assert_eq!(out, "caf\u{fffd} \x1b[38;5;215m@home\x1b[0m ", "mode {mode:?}");
    }
}
