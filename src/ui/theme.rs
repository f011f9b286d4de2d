use crossterm::style::{Color, Stylize};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use std::fmt;

/// Design tokens for the picker UI.
pub mod colors {
    use super::Color;

    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const POINTER: &str = "❯";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
}

pub mod icons_ascii {
    pub const POINTER: &str = ">";
    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
}

// ----------------------------------------------------------------------------
// PickerTheme - dialoguer theme for the presentation list
// ----------------------------------------------------------------------------

/// Select-prompt theme with a `❯` pointer (or `>` in ASCII mode).
///
/// Prompt and selection lines come from `ColorfulTheme` when color is on and
/// from `SimpleTheme` otherwise; only list items are customized.
pub struct PickerTheme {
    unicode: bool,
    color: bool,
    colorful: ColorfulTheme,
}

impl PickerTheme {
    pub fn new(unicode: bool, color: bool) -> Self {
        Self {
            unicode,
            color,
            colorful: ColorfulTheme::default(),
        }
    }

    pub fn pointer_icon(&self) -> &'static str {
        if self.unicode {
            icons::POINTER
        } else {
            icons_ascii::POINTER
        }
    }

    fn inner(&self) -> &dyn Theme {
        if self.color {
            &self.colorful
        } else {
            &SimpleTheme
        }
    }
}

impl Theme for PickerTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner().format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner().format_error(f, err)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner().format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner().format_select_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if !active {
            return write!(f, "  {}", text);
        }

        let pointer = self.pointer_icon();
        if self.color {
            write!(f, "{} {}", pointer.with(colors::INFO), text.bold())
        } else {
            write!(f, "{} {}", pointer, text)
        }
    }
}
