//! ANSI 256-color escape policy.
//!
//! # Responsibility
//! - Map palette colors to terminal escape sequences.
//! - Degrade to empty strings on dumb terminals.
//!
//! # Invariants
//! - The policy never reads the environment or performs I/O. Terminal
//!   capability is handed in by the caller.
//! - Dumb terminals get `""` from every escape method, never an error.

const ESC: &str = "\x1b";
const RESET_SEQUENCE: &str = "\x1b[0m";

/// Named colors on the ANSI 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Green = 2,
    Blue = 12,
    Cyan = 37,
    Red = 124,
    Yellow = 142,
    Lime = 154,
    LightOrange = 215,
    Gray = 245,
    BrightCyan = 51,
    BrightRed = 196,
    BrightYellow = 226,
}

impl Color {
    /// Returns the palette index (0-255).
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl From<Color> for u8 {
    fn from(value: Color) -> Self {
        value.index()
    }
}

/// Whether a color applies to the glyph or to the cell behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Foreground,
    Background,
}

/// A palette index bound to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec {
    pub index: u8,
    pub role: ColorRole,
}

impl ColorSpec {
    pub fn foreground(color: impl Into<u8>) -> Self {
        Self {
            index: color.into(),
            role: ColorRole::Foreground,
        }
    }

    pub fn background(color: impl Into<u8>) -> Self {
        Self {
            index: color.into(),
            role: ColorRole::Background,
        }
    }

    /// Raw SGR sequence for this spec, regardless of terminal capability.
    fn sequence(self) -> String {
        let selector = match self.role {
            ColorRole::Foreground => 38,
            ColorRole::Background => 48,
        };
        format!("{ESC}[{selector};5;{}m", self.index)
    }
}

/// Terminal capability flags supplied by the host process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalCapability {
    /// `true` when the terminal cannot render ANSI escapes.
    pub dumb_terminal: bool,
}

impl TerminalCapability {
    pub fn color() -> Self {
        Self {
            dumb_terminal: false,
        }
    }

    pub fn dumb() -> Self {
        Self {
            dumb_terminal: true,
        }
    }
}

/// Producer of color escape strings.
///
/// The line formatter only talks to this trait, so tests can observe which
/// escapes a formatting pass asked for.
pub trait EscapePolicy {
    fn set_foreground(&self, color: u8) -> String;
    fn set_background(&self, color: u8) -> String;
    fn reset(&self) -> String;
}

/// Default escape policy backed by 256-color SGR sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnsiPolicy {
    capability: TerminalCapability,
}

impl AnsiPolicy {
    pub fn new(capability: TerminalCapability) -> Self {
        Self { capability }
    }

    /// Renders `spec`, or `""` on dumb terminals.
    pub fn escape(&self, spec: ColorSpec) -> String {
        if self.capability.dumb_terminal {
            return String::new();
        }
        spec.sequence()
    }
}

impl EscapePolicy for AnsiPolicy {
    fn set_foreground(&self, color: u8) -> String {
        self.escape(ColorSpec::foreground(color))
    }

    fn set_background(&self, color: u8) -> String {
        self.escape(ColorSpec::background(color))
    }

    fn reset(&self) -> String {
        if self.capability.dumb_terminal {
            return String::new();
        }
        RESET_SEQUENCE.to_string()
    }
}
