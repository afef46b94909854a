//! End-to-end rendering of a todo file into display text.

use crate::ansi::TerminalCapability;
use crate::format::lines::LineFormatter;
use crate::options::{Options, ReadMode};
use crate::source::{read_contents, read_lines, split_lines, SourceResult};
use log::info;

/// Reads the todo file named by `options` and formats it.
///
/// The returned string has no trailing newline.
///
/// # Errors
/// - Returns [`crate::SourceError`] when the file cannot be read.
pub fn render(options: &Options, capability: TerminalCapability) -> SourceResult<String> {
    let formatter = LineFormatter::for_terminal(capability);
    let out = match options.read_mode {
        ReadMode::Contents => {
            let raw = read_contents(&options.file)?;
            formatter.format(&split_lines(&raw))
        }
        ReadMode::Lines => formatter.format(&read_lines(&options.file)?),
    };
    info!(
        "event=render module=render status=ok mode={} dumb_terminal={} chars={}",
        options.read_mode.as_str(),
        capability.dumb_terminal,
        out.len()
    );
    Ok(out)
}

/// Formats in-memory todo text, dropping blank lines.
pub fn render_text(raw: &str, capability: TerminalCapability) -> String {
    LineFormatter::for_terminal(capability).format(&split_lines(raw))
}
