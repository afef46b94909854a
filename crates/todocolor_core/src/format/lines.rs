//! Line formatter turning todo lines into one colorized display string.

use super::word::{classify, FormatError};
use crate::ansi::{AnsiPolicy, EscapePolicy, TerminalCapability};
use crate::text::tokenize::tokenize;
use log::trace;

const WORD_DELIMITERS: &str = " ";
const WORD_SEPARATOR: char = ' ';
const LINE_SEPARATOR: char = '\n';

/// Formats todo lines with a pluggable escape policy.
#[derive(Debug, Clone, Default)]
pub struct LineFormatter<P = AnsiPolicy> {
    policy: P,
}

impl LineFormatter<AnsiPolicy> {
    /// Creates a formatter using ANSI escapes for `capability`.
    pub fn for_terminal(capability: TerminalCapability) -> Self {
        Self::new(AnsiPolicy::new(capability))
    }
}

impl<P: EscapePolicy> LineFormatter<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Formats `lines` in order and joins them with `\n`.
    ///
    /// Each word is followed by one space. Blank lines stay as empty
    /// segments, so line count is preserved.
    pub fn format<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let mut out = String::new();
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                out.push(LINE_SEPARATOR);
            }
            self.format_line(line.as_ref(), &mut out);
        }
        out
    }

    /// Appends one formatted line to `out`, without a line separator.
    pub fn format_line(&self, line: &str, out: &mut String) {
        for word in tokenize(line, WORD_DELIMITERS, true) {
            if let Err(err) = self.push_word(word, out) {
                trace!("event=word_skipped module=format status=recovered error={err}");
            }
        }
    }

    fn push_word(&self, word: &str, out: &mut String) -> Result<(), FormatError> {
        let class = classify(word)?;
        match class.highlight() {
            Some(color) => {
                out.push_str(&self.policy.set_foreground(color.index()));
                out.push_str(word);
                out.push_str(&self.policy.reset());
            }
            None => out.push_str(word),
        }
        out.push(WORD_SEPARATOR);
        Ok(())
    }
}

/// Formats `lines` with the default ANSI policy.
pub fn format_lines<S: AsRef<str>>(lines: &[S], capability: TerminalCapability) -> String {
    LineFormatter::for_terminal(capability).format(lines)
}
