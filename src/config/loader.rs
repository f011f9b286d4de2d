//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PickerError, PickerResult};

use super::types::{Config, Verbosity};

/// File looked up in the workspace root
pub const CONFIG_FILE_NAME: &str = "slidepick.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PickerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PickerError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the workspace config if present, then apply env overrides.
///
/// A missing file means defaults; a malformed file is an error.
pub fn load_for_workspace(root: &Path) -> PickerResult<(Config, Vec<ConfigWarning>)> {
    let path = root.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.is_file() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };

    Ok((config.with_env_overrides(), warnings))
}

/// Apply environment variable overrides (SLIDEPICK_* prefix)
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(dir) = get_env("SLIDEPICK_PRESENTATIONS_DIR") {
        if !dir.trim().is_empty() {
            config.picker.presentations_dir = dir;
        }
    }

    if let Some(program) = get_env("SLIDEPICK_TOOL") {
        if !program.trim().is_empty() {
            config.tool.program = program;
        }
    }

    // Whitespace separated; an empty value clears the leading args
    if let Some(args) = get_env("SLIDEPICK_TOOL_ARGS") {
        config.tool.args = args.split_whitespace().map(str::to_string).collect();
    }

    if let Some(verbosity) = get_env("SLIDEPICK_VERBOSITY") {
        config.output.verbosity = Verbosity::parse_lenient(&verbosity);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
