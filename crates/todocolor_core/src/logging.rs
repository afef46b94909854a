//! Stderr logging bootstrap.
//!
//! # Responsibility
//! - Initialize the stderr logger exactly once per process.
//! - Pick a log line preamble that fits the terminal width.
//! - Capture panics as sanitized log events.
//!
//! # Invariants
//! - Logs never go to stdout; stdout carries only formatted todo output.
//! - Logging init is idempotent for identical settings.
//! - Re-initialization with different settings is rejected.
//! - Logging initialization must not panic.

use crate::ansi::{AnsiPolicy, Color, EscapePolicy, TerminalCapability};
use flexi_logger::{DeferredNow, FormatFunction, Logger, LoggerHandle, WriteMode};
use log::{debug, error, Level, LevelFilter, Record};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::io::Write;

const FULL_PREAMBLE_MIN_COLS: u16 = 200;
const LOCATED_PREAMBLE_MIN_COLS: u16 = 100;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    settings: LogSettings,
    _logger: LoggerHandle,
}

/// Amount of metadata printed before each log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogPreamble {
    /// Timestamp, level, module and source location.
    Full,
    /// Level, module and source location.
    Located,
    /// Level and module only.
    Minimal,
}

impl LogPreamble {
    /// Chooses a preamble for a terminal `cols` characters wide.
    pub fn for_width(cols: u16) -> Self {
        if cols >= FULL_PREAMBLE_MIN_COLS {
            Self::Full
        } else if cols >= LOCATED_PREAMBLE_MIN_COLS {
            Self::Located
        } else {
            Self::Minimal
        }
    }

    fn format_function(self, colored: bool) -> FormatFunction {
        match (self, colored) {
            (Self::Full, false) => flexi_logger::detailed_format,
            (Self::Full, true) => flexi_logger::colored_detailed_format,
            (Self::Located, false) => located_format,
            (Self::Located, true) => colored_located_format,
            (Self::Minimal, false) => flexi_logger::default_format,
            (Self::Minimal, true) => flexi_logger::colored_default_format,
        }
    }
}

/// Logger settings derived from run options and terminal capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub preamble: LogPreamble,
    pub colored: bool,
}

impl LogSettings {
    pub fn new(level: LevelFilter, cols: u16, capability: TerminalCapability) -> Self {
        Self {
            level,
            preamble: LogPreamble::for_width(cols),
            colored: !capability.dumb_terminal,
        }
    }
}

/// Initializes stderr logging.
///
/// Returns `Ok(())` when logging is active, or a human-readable error string
/// when initialization fails.
///
/// # Errors
/// - Returns an error when logging is already active with other settings.
/// - Returns an error when the logger backend cannot start.
pub fn init_logging(settings: LogSettings) -> Result<(), String> {
    if let Some(state) = LOGGING_STATE.get() {
        return ensure_same_settings(&state.settings, &settings);
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let spec = settings.level.as_str().to_ascii_lowercase();
        let logger = Logger::try_with_str(&spec)
            .map_err(|err| format!("invalid log level `{spec}`: {err}"))?
            .log_to_stderr()
            .format_for_stderr(settings.preamble.format_function(settings.colored))
            .write_mode(WriteMode::Direct)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        install_panic_hook_once();

        debug!(
            "event=app_start module=logging status=ok platform={} version={} level={} preamble={:?}",
            std::env::consts::OS,
            env!("CARGO_PKG_VERSION"),
            spec,
            settings.preamble
        );

        Ok(LoggingState {
            settings,
            _logger: logger,
        })
    })?;

    ensure_same_settings(&state.settings, &settings)
}

/// Returns the active logger settings, or `None` before initialization.
pub fn logging_status() -> Option<LogSettings> {
    LOGGING_STATE.get().map(|state| state.settings)
}

fn ensure_same_settings(active: &LogSettings, requested: &LogSettings) -> Result<(), String> {
    if active == requested {
        return Ok(());
    }
    Err(format!(
        "logging already initialized with {active:?}; refusing to switch to {requested:?}"
    ))
}

fn located_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write_located(w, record, TerminalCapability::dumb())
}

fn colored_located_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write_located(w, record, TerminalCapability::color())
}

fn write_located(
    w: &mut dyn Write,
    record: &Record,
    capability: TerminalCapability,
) -> Result<(), std::io::Error> {
    let policy = AnsiPolicy::new(capability);
    let level = record.level();
    write!(
        w,
        "{}{}{} [{}] {}:{}: {}",
        policy.set_foreground(level_color(level).index()),
        level,
        policy.reset(),
        record.module_path().unwrap_or("<unnamed>"),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::BrightRed,
        Level::Warn => Color::BrightYellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Cyan,
        Level::Trace => Color::Gray,
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.get().is_some() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = payload_summary(panic_info.payload());
        error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location, payload
        );
        previous_hook(panic_info);
    }));

    let _ = PANIC_HOOK_INSTALLED.set(());
}

fn payload_summary(payload: &(dyn Any + Send)) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload");
    sanitize_message(message, MAX_PANIC_PAYLOAD_CHARS)
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}
