#![forbid(unsafe_code)]

//! Named border glyph sets.
//!
//! | preset        | glyphs   |
//! |---------------|----------|
//! | `regular`     | `┌┐└┘─│` |
//! | `bold`        | `┏┓┗┛━┃` |
//! | `rounded`     | `╭╮╰╯─│` |
//! | `double`      | `╔╗╚╝═║` |
//! | `dotted`      | `┌┐└┘┄┆` |
//! | `dotted-bold` | `┏┓┗┛┅┇` |
//!
//! `rounded` is the default.

use std::fmt;
use std::str::FromStr;

use tipbox_render::drawing::BorderChars;

pub const REGULAR: BorderChars = BorderChars::new('┌', '┐', '└', '┘', '─', '│');
pub const BOLD: BorderChars = BorderChars::new('┏', '┓', '┗', '┛', '━', '┃');
pub const ROUNDED: BorderChars = BorderChars::new('╭', '╮', '╰', '╯', '─', '│');
pub const DOUBLE: BorderChars = BorderChars::new('╔', '╗', '╚', '╝', '═', '║');
pub const DOTTED: BorderChars = BorderChars::new('┌', '┐', '└', '┘', '┄', '┆');
pub const DOTTED_BOLD: BorderChars = BorderChars::new('┏', '┓', '┗', '┛', '┅', '┇');

/// One of the fixed border presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxStyle {
    Regular,
    Bold,
    #[default]
    Rounded,
    Double,
    Dotted,
    DottedBold,
}

impl BoxStyle {
    /// Every preset, in table order.
    pub const ALL: [BoxStyle; 6] = [
        Self::Regular,
        Self::Bold,
        Self::Rounded,
        Self::Double,
        Self::Dotted,
        Self::DottedBold,
    ];

    /// The glyphs for this preset.
    #[must_use]
    pub const fn chars(self) -> BorderChars {
        match self {
            Self::Regular => REGULAR,
            Self::Bold => BOLD,
            Self::Rounded => ROUNDED,
            Self::Double => DOUBLE,
            Self::Dotted => DOTTED,
            Self::DottedBold => DOTTED_BOLD,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Bold => "bold",
            Self::Rounded => "rounded",
            Self::Double => "double",
            Self::Dotted => "dotted",
            Self::DottedBold => "dotted-bold",
        }
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoxStyleError {
    input: String,
}

impl ParseBoxStyleError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseBoxStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown box style {:?} (expected regular, bold, rounded, double, dotted, or dotted-bold)",
            self.input
        )
    }
}

impl std::error::Error for ParseBoxStyleError {}

impl FromStr for BoxStyle {
    type Err = ParseBoxStyleError;

    /// Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| ParseBoxStyleError {
                input: s.to_string(),
            })
    }
}
