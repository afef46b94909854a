//! Word classification by leading sigil.

use crate::ansi::Color;
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTEXT_SIGIL: char = '@';
const PROJECT_SIGIL: char = '+';

/// Highlight class of a single todo word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// `@context` tag, e.g. `@home`.
    Context,
    /// `+project` tag, e.g. `+garden`.
    Project,
    /// Everything else.
    Plain,
}

impl WordClass {
    /// Total mapping from a word's first character to its class.
    pub fn from_first_char(ch: char) -> Self {
        match ch {
            CONTEXT_SIGIL => Self::Context,
            PROJECT_SIGIL => Self::Project,
            _ => Self::Plain,
        }
    }

    /// Foreground color used for this class, `None` for plain words.
    pub fn highlight(self) -> Option<Color> {
        match self {
            Self::Context => Some(Color::LightOrange),
            Self::Project => Some(Color::Lime),
            Self::Plain => None,
        }
    }
}

/// Internal formatting failure for a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Tokenization produced a zero-length word.
    EmptyWord,
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "cannot classify an empty word"),
        }
    }
}

impl Error for FormatError {}

/// Classifies `word` by its first character.
///
/// # Errors
/// - Returns [`FormatError::EmptyWord`] when `word` is empty.
pub fn classify(word: &str) -> Result<WordClass, FormatError> {
    let first = word.chars().next().ok_or(FormatError::EmptyWord)?;
    Ok(WordClass::from_first_char(first))
}
