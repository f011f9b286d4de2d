//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PickerResult;

use super::loader::{self, ConfigWarning};

/// Where presentations live and how they are offered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Directory under the workspace root holding one folder per deck
    #[serde(default = "default_presentations_dir")]
    pub presentations_dir: String,

    /// Primary slide document inside each deck folder
    #[serde(default = "default_slides_file")]
    pub slides_file: String,

    /// Message shown above the interactive list
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            presentations_dir: default_presentations_dir(),
            slides_file: default_slides_file(),
            prompt: default_prompt(),
        }
    }
}

fn default_presentations_dir() -> String {
    "presentations".to_string()
}

fn default_slides_file() -> String {
    "slides.md".to_string()
}

fn default_prompt() -> String {
    "Pick a presentation".to_string()
}

/// The per-presentation build/run tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default = "default_program")]
    pub program: String,

    /// Leading arguments placed before the forwarded ones
    #[serde(default = "default_tool_args")]
    pub args: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_tool_args(),
        }
    }
}

fn default_program() -> String {
    "pnpm".to_string()
}

fn default_tool_args() -> Vec<String> {
    vec!["run".to_string()]
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Verbosity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Unrecognized names fall back to `Normal`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Complete slidepick configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub tool: ToolConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PickerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PickerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `slidepick.toml` from the workspace root, or defaults when absent.
    /// Environment overrides are applied either way.
    pub fn load_for_workspace(root: &Path) -> PickerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_workspace(root)
    }

    /// Apply environment variable overrides (SLIDEPICK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides_from(self, |key| std::env::var(key).ok())
    }

    /// Absolute presentations root for a workspace.
    pub fn presentations_root(&self, workspace_root: &Path) -> std::path::PathBuf {
        workspace_root.join(&self.picker.presentations_dir)
    }
}
