//! Terminal capability and size probing.
//!
//! # Invariants
//! - Probing never fails; unknown sizes fall back to 80x24.

use todocolor_core::TerminalCapability;

const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// What the host terminal can do, probed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalInfo {
    pub capability: TerminalCapability,
    pub cols: u16,
    pub rows: u16,
}

impl TerminalInfo {
    /// Reads `TERM`, `NO_COLOR` and the window size of the current terminal.
    pub fn probe() -> Self {
        let term = std::env::var("TERM").ok();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let (cols, rows) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
        Self {
            capability: capability_from_env(term.as_deref(), no_color),
            cols,
            rows,
        }
    }
}

/// Treats `TERM=dumb` or a set `NO_COLOR` as a terminal without colors.
pub fn capability_from_env(term: Option<&str>, no_color: bool) -> TerminalCapability {
    TerminalCapability {
        dumb_terminal: no_color || term == Some("dumb"),
    }
}

#[cfg(test)]
mod tests {
    use super::capability_from_env;
    use todocolor_core::TerminalCapability;

    #[test]
    fn dumb_term_disables_color() {
        assert_eq!(
            capability_from_env(Some("dumb"), false),
            TerminalCapability::dumb()
        );
    }

    #[test]
    fn no_color_disables_color() {
        assert_eq!(
            capability_from_env(Some("xterm-256color"), true),
            TerminalCapability::dumb()
        );
    }

    #[test]
    fn regular_or_missing_term_keeps_color() {
        assert_eq!(
            capability_from_env(Some("xterm-256color"), false),
            TerminalCapability::color()
        );
        assert_eq!(capability_from_env(None, false), TerminalCapability::color());
    }
}
