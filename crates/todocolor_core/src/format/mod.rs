//! Todo line formatting.
//!
//! # Responsibility
//! - Classify words as context tags, project tags or plain text.
//! - Wrap tags in color escapes and join lines into one display string.
//!
//! # Invariants
//! - Every emitted word is followed by a single space, including the last
//!   word of a line.
//! - Lines are joined by `\n`; no trailing newline is appended.
//! - Formatting never fails; malformed words are skipped, not surfaced.

pub mod lines;
pub mod word;
