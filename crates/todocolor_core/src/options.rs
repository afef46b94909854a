//! Run options shared by the CLI and the todo-file source.
//!
//! # Responsibility
//! - Hold the resolved todo path, verbosity and read mode for one run.
//! - Parse verbosity names and numeric levels into `log` level filters.
//! - Resolve the default todo path from a home directory.
//!
//! # Invariants
//! - `quiet` always wins over `verbosity`.
//! - Nothing here touches process-global state; callers pass values in.

use log::LevelFilter;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default todo location relative to the user's home directory.
const DEFAULT_TODO_SEGMENTS: [&str; 3] = ["Dropbox", "todo", "todo.txt"];

/// Stderr verbosity used when nothing is requested.
pub const DEFAULT_VERBOSITY: LevelFilter = LevelFilter::Error;

pub type OptionsResult<T> = Result<T, OptionsError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// Verbosity is neither a known level name nor an integer in `-9..=9`.
    InvalidVerbosity(String),
    /// No explicit todo path and no home directory to derive one from.
    MissingHome,
}

impl Display for OptionsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVerbosity(raw) => write!(
                f,
                "unsupported verbosity `{raw}`; expected off|error|warn|info|debug|trace or -9..9"
            ),
            Self::MissingHome => write!(
                f,
                "cannot locate home directory; pass --file or set TODO_FILE"
            ),
        }
    }
}

impl Error for OptionsError {}

/// How the todo file is pulled into memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// Read the whole file, then split on `\n` dropping blank lines.
    #[default]
    Contents,
    /// Read through a buffered line reader, keeping blank lines.
    Lines,
}

impl ReadMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contents => "contents",
            Self::Lines => "lines",
        }
    }
}

/// Options for a single render run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub file: PathBuf,
    pub quiet: bool,
    pub verbosity: LevelFilter,
    pub read_mode: ReadMode,
}

impl Options {
    /// Creates options for `file` with default verbosity and read mode.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            quiet: false,
            verbosity: DEFAULT_VERBOSITY,
            read_mode: ReadMode::default(),
        }
    }

    /// Level the stderr logger should run at.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else {
            self.verbosity
        }
    }
}

/// Parses a verbosity name or a numeric level.
///
/// Numeric levels follow the classic stderr verbosity scale:
/// `-9..=-3` off, `-2` error, `-1` warn, `0` info, `1` debug, `2..=9` trace.
pub fn parse_verbosity(raw: &str) -> OptionsResult<LevelFilter> {
    let normalized = raw.trim().to_ascii_lowercase();
    let level = match normalized.as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        other => match other.parse::<i8>() {
            Ok(-9..=-3) => LevelFilter::Off,
            Ok(-2) => LevelFilter::Error,
            Ok(-1) => LevelFilter::Warn,
            Ok(0) => LevelFilter::Info,
            Ok(1) => LevelFilter::Debug,
            Ok(2..=9) => LevelFilter::Trace,
            _ => return Err(OptionsError::InvalidVerbosity(raw.to_string())),
        },
    };
    Ok(level)
}

/// Picks the explicit path when given, otherwise `<home>/Dropbox/todo/todo.txt`.
pub fn resolve_todo_path(
    explicit: Option<PathBuf>,
    home: Option<&Path>,
) -> OptionsResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let home = home.ok_or(OptionsError::MissingHome)?;
    Ok(DEFAULT_TODO_SEGMENTS
        .iter()
        .fold(home.to_path_buf(), |path, segment| path.join(segment)))
}
