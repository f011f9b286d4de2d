use std::fmt::Display;

use crossterm::style::Stylize;
use slidepick::config::ConfigWarning;
use slidepick::{PickEvent, Verbosity};

use super::theme::{colors, icons, icons_ascii};

/// Verbosity-gated diagnostics on stderr.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    pub verbosity: Verbosity,
    pub color: bool,
    pub unicode: bool,
}

impl Reporter {
    pub fn config_warnings(&self, warnings: &[ConfigWarning]) {
        for w in warnings {
            self.warning(w);
        }
    }

    /// Print a warning unless quiet.
    pub fn warning(&self, message: impl Display) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }
        eprintln!("{}", self.warning_line(message));
    }

    fn warning_line(&self, message: impl Display) -> String {
        let icon = if self.unicode {
            icons::WARNING
        } else {
            icons_ascii::WARNING
        };
        if self.color {
            format!("{} {}", icon.with(colors::WARNING), message)
        } else {
            format!("{} {}", icon, message)
        }
    }

    pub fn event(&self, event: &PickEvent) {
        if let Some(line) = self.event_line(event) {
            if self.color {
                eprintln!("{}", line.with(colors::DIM));
            } else {
                eprintln!("{}", line);
            }
        }
    }

    fn event_line(&self, event: &PickEvent) -> Option<String> {
        match event {
            PickEvent::Listed { root, names } if self.verbosity >= Verbosity::Debug => Some(
                format!("Found {} presentations in {}: {}", names.len(), root.display(), names.join(", ")),
            ),
            PickEvent::Selected { presentation, slides } if self.verbosity >= Verbosity::Verbose => {
                Some(format!("Selected {} ({})", presentation.name, slides.display()))
            }
            PickEvent::Launching(command) if self.verbosity >= Verbosity::Verbose => Some(format!(
                "Running {} in {}",
                command,
                command.cwd.display()
            )),
            _ => None,
        }
    }
}
