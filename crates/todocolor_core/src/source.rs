//! Todo file loading.
//!
//! # Responsibility
//! - Read a todo file from disk as whole contents or as lines.
//! - Split whole contents into lines with the shared tokenizer.
//!
//! # Invariants
//! - Files are read once, in full, before any formatting starts.
//! - Read failures carry the offending path and the OS error.
//! - Bytes that are not valid UTF-8 are decoded lossily, never rejected.
//! - Both read modes keep a trailing `\r` as line content.

use crate::options::ReadMode;
use crate::text::tokenize::tokenize;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

const LINE_DELIMITERS: &str = "\n";

pub type SourceResult<T> = Result<T, SourceError>;

#[derive(Debug)]
pub enum SourceError {
    /// The todo file could not be opened or read.
    Unreadable { path: PathBuf, source: io::Error },
}

impl SourceError {
    fn unreadable(path: &Path, source: io::Error) -> Self {
        Self::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Unreadable { path, .. } => path,
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "failed to read todo file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
        }
    }
}

/// Reads the whole todo file into one string.
///
/// # Side effects
/// - Emits `todo_read` logging events with duration and status.
pub fn read_contents(path: impl AsRef<Path>) -> SourceResult<String> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=todo_read module=source status=start mode=contents path={}",
        path.display()
    );

    match std::fs::read(path) {
        Ok(bytes) => {
            let contents = decode(bytes);
            info!(
                "event=todo_read module=source status=ok mode=contents duration_ms={} bytes={}",
                started_at.elapsed().as_millis(),
                contents.len()
            );
            Ok(contents)
        }
        Err(err) => {
            log_read_failure(ReadMode::Contents, path, started_at, &err);
            Err(SourceError::unreadable(path, err))
        }
    }
}

/// Reads the todo file line by line.
///
/// Only the `\n` terminator is stripped; blank lines are kept.
///
/// # Side effects
/// - Emits `todo_read` logging events with duration and status.
pub fn read_lines(path: impl AsRef<Path>) -> SourceResult<Vec<String>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=todo_read module=source status=start mode=lines path={}",
        path.display()
    );

    match collect_lines(path) {
        Ok(lines) => {
            info!(
                "event=todo_read module=source status=ok mode=lines duration_ms={} lines={}",
                started_at.elapsed().as_millis(),
                lines.len()
            );
            Ok(lines)
        }
        Err(err) => {
            log_read_failure(ReadMode::Lines, path, started_at, &err);
            Err(SourceError::unreadable(path, err))
        }
    }
}

/// Splits raw contents into non-empty lines.
pub fn split_lines(raw: &str) -> Vec<&str> {
    tokenize(raw, LINE_DELIMITERS, true)
}

fn collect_lines(path: &Path) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    while reader.read_until(b'\n', &mut buf)? > 0 {
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        lines.push(decode(std::mem::take(&mut buf)));
    }
    Ok(lines)
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

fn log_read_failure(mode: ReadMode, path: &Path, started_at: Instant, err: &io::Error) {
    error!(
        "event=todo_read module=source status=error mode={} duration_ms={} error_code=todo_unreadable path={} error={}",
        mode.as_str(),
        started_at.elapsed().as_millis(),
        path.display(),
        err
    );
}
