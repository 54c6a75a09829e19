//! ANSI SGR escapes for colored terminal output, and the inverse: stripping them back out.

use crate::level::Level;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Matches single-parameter SGR sequences such as `\x1b[1m` or `\x1b[32m`.
static ANSI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[\d+m").expect("Invalid ANSI regex"));

/// Raw SGR parameter. Not validated: an undefined code is a terminal no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sgr(pub u8);

impl Sgr {
    /// `\x1b[<n>m`
    #[must_use]
    pub fn escape(self) -> String {
        format!("\x1b[{}m", self.0)
    }
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.0)
    }
}

/// Text attributes. `Off` resets everything and is the usual closing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Off = 0,
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    Blink = 5,
    Reverse = 7,
    Concealed = 8,
}

/// The eight basic foreground colors every ANSI terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
}

impl Color {
    /// Background variant of the same color (SGR 40-47).
    #[must_use]
    pub const fn bg(self) -> Sgr {
        Sgr(self as u8 + 10)
    }
}

impl From<Style> for Sgr {
    fn from(style: Style) -> Self {
        Self(style as u8)
    }
}

impl From<Color> for Sgr {
    fn from(color: Color) -> Self {
        Self(color as u8)
    }
}

/// Surrounds `text` with a style, a color, and a closing code.
///
/// Each code is emitted as its own `ESC[<n>m` sequence so [`strip`] can remove them all.
#[must_use]
pub fn wrap(
    style: impl Into<Sgr>,
    color: impl Into<Sgr>,
    text: &str,
    reset: impl Into<Sgr>,
) -> String {
    let (style, color, reset) = (style.into(), color.into(), reset.into());
    format!("{style}{color}{text}{reset}")
}

/// Shorthand for plain colored text that resets afterwards.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    wrap(Style::Off, color, text, Style::Off)
}

/// Removes every SGR sequence. Returns the input untouched when there is nothing to strip.
///
/// Removal can splice a new sequence together (`ESC[1ESC[2mm`), so this repeats until
/// nothing matches; the result is always a fixed point.
#[must_use]
pub fn strip(text: &str) -> String {
    let mut out = ANSI_REGEX.replace_all(text, "").into_owned();
    while ANSI_REGEX.is_match(&out) {
        out = ANSI_REGEX.replace_all(&out, "").into_owned();
    }
    out
}

/// Alias kept for callers that think of this as "strip ANSI".
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    strip(text)
}

/// Style and color used for a level's name when colors are on.
#[must_use]
pub const fn level_style(level: Level) -> (Style, Color) {
    match level {
        Level::Debug => (Style::Off, Color::Cyan),
        Level::Info => (Style::Off, Color::Green),
        Level::Warning => (Style::Off, Color::Yellow),
        Level::Error => (Style::Off, Color::Red),
        Level::Critical => (Style::Bold, Color::Red),
    }
}

/// Level name wrapped in its color.
#[must_use]
pub fn colored_level(level: Level) -> String {
    let (style, color) = level_style(level);
    wrap(style, color, level.as_str(), Style::Off)
}
