//! Core library for `todocolor`.
//! Tokenizes todo.txt text and highlights `@context` and `+project` tags.

pub mod ansi;
pub mod format;
pub mod logging;
pub mod options;
pub mod render;
pub mod source;
pub mod text;

pub use ansi::{AnsiPolicy, Color, ColorRole, ColorSpec, EscapePolicy, TerminalCapability};
pub use format::lines::{format_lines, LineFormatter};
pub use format::word::{classify, FormatError, WordClass};
pub use logging::{init_logging, logging_status, LogPreamble, LogSettings};
pub use options::{
    parse_verbosity, resolve_todo_path, Options, OptionsError, OptionsResult, ReadMode,
    DEFAULT_VERBOSITY,
};
pub use render::{render, render_text};
pub use source::{read_contents, read_lines, split_lines, SourceError, SourceResult};
pub use text::tokenize::tokenize;

