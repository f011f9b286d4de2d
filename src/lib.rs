//! slidepick - pick a slide deck and run its build tool
//!
//! A presentations workspace keeps one folder per deck under
//! `presentations/`. slidepick lists those folders, lets the user choose one
//! (or takes the first with `-y`), and runs the deck's tool inside it with
//! the remaining arguments. The `highlighting` module holds the static
//! syntax-highlighting themes the slide renderer loads at startup.

pub mod collate;
pub mod config;
pub mod delegate;
pub mod error;
pub mod highlighting;
pub mod picker;
pub mod selection;
pub mod workspace;

// Re-exports for convenience
pub use config::{Config, Verbosity};
pub use delegate::{DelegateCommand, Launcher, ProcessLauncher};
pub use error::{PickerError, PickerResult};
pub use highlighting::{highlighter_setup, HighlightThemes, HighlighterSetup, ThemeMode};
pub use picker::{run, PickContext, PickEvent, PickOutcome};
pub use selection::{FolderPrompt, PickArgs};
pub use workspace::{list_presentations, locate_workspace_root, Presentation};
