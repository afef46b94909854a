//! Plain-text splitting primitives.
//!
//! # Responsibility
//! - Split raw todo text into lines and lines into words.
//! - Stay free of I/O so callers can feed any in-memory text.

pub mod tokenize;
