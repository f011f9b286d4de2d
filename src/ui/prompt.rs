//! Interactive presentation selection

use std::io::ErrorKind;

use dialoguer::Select;
use slidepick::{FolderPrompt, PickerError, PickerResult, Presentation};

use super::terminal::TerminalCapabilities;
use super::theme::PickerTheme;

/// Single-select list drawn on stderr with dialoguer.
///
/// Esc, `q` and Ctrl+C all count as cancellation.
pub struct DialoguerPrompt {
    caps: TerminalCapabilities,
    theme: PickerTheme,
}

impl DialoguerPrompt {
    pub fn new(caps: TerminalCapabilities, unicode: bool) -> Self {
        Self {
            caps,
            theme: PickerTheme::new(unicode && caps.supports_unicode, caps.supports_color),
        }
    }
}

impl FolderPrompt for DialoguerPrompt {
    fn select(&self, message: &str, presentations: &[Presentation]) -> PickerResult<Option<usize>> {
        if !self.caps.can_prompt() {
            return Err(PickerError::NotInteractive);
        }

        let labels: Vec<&str> = presentations.iter().map(|p| p.name.as_str()).collect();

        let result = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&labels)
            .default(0)
            .interact_opt();

        match result {
            Ok(choice) => Ok(choice),
            Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => {
                restore_cursor();
                Ok(None)
            }
            Err(e) => {
                restore_cursor();
                Err(PickerError::Prompt(e.to_string()))
            }
        }
    }
}

// dialoguer hides the cursor while the list is drawn and skips restoring
// it when the read is interrupted.
fn restore_cursor() {
    let _ = crossterm::execute!(std::io::stderr(), crossterm::cursor::Show);
}
