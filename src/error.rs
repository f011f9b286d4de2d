//! Error types for slidepick
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for slidepick operations
pub type PickerResult<T> = Result<T, PickerError>;

/// Main error type for slidepick operations
#[derive(Error, Debug)]
pub enum PickerError {
    /// The presentations root holds no directories
    #[error("No presentations found in {}", root.display())]
    NoPresentations { root: PathBuf },

    /// The presentations root could not be listed
    #[error("cannot read presentations directory {}: {source}", path.display())]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Interactive selection was requested without a terminal
    #[error("no interactive terminal - pass -y to pick the first presentation")]
    NotInteractive,

    /// The selection prompt failed (cancellation is not an error)
    #[error("selection prompt failed: {0}")]
    Prompt(String),

    /// The delegated tool could not be started
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Workspace config could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Collation data could not be loaded
    #[error("cannot load collation data: {0}")]
    Collation(String),

    /// Theme mode name other than `dark` or `light`
    #[error("unknown theme mode '{0}' (expected 'dark' or 'light')")]
    UnknownThemeMode(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
