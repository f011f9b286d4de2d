//! Configuration module for slidepick
//!
//! Configuration hierarchy:
//! 1. Environment variables (SLIDEPICK_*) (highest priority)
//! 2. Workspace config (`slidepick.toml` next to `presentations/`)
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides_from, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{Config, OutputConfig, PickerConfig, ToolConfig, Verbosity};
