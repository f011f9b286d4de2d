//! Syntax-highlighting themes handed to the slide renderer.
//!
//! The renderer reads a `themes` object with one entry per color mode when it
//! starts. The mapping is fixed at compile time.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PickerError;

/// Theme used when the renderer is in dark mode.
pub const DARK_THEME: &str = "one-dark-pro";
/// Theme used when the renderer is in light mode.
pub const LIGHT_THEME: &str = "github-light";

/// Color mode the renderer is displaying in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Dark, ThemeMode::Light];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(PickerError::UnknownThemeMode(other.to_string())),
        }
    }
}

/// The `themes` option: one theme name per color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightThemes {
    pub dark: &'static str,
    pub light: &'static str,
}

impl HighlightThemes {
    pub fn theme_for(&self, mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Dark => self.dark,
            ThemeMode::Light => self.light,
        }
    }
}

/// Highlighter configuration consumed by the renderer at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlighterSetup {
    pub themes: HighlightThemes,
}

impl HighlighterSetup {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Build the highlighter configuration.
pub fn highlighter_setup() -> HighlighterSetup {
    HighlighterSetup {
        themes: HighlightThemes {
            dark: DARK_THEME,
            light: LIGHT_THEME,
        },
    }
}
