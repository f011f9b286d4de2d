//! Workspace discovery and presentation enumeration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::collate::FolderCollator;
use crate::config::CONFIG_FILE_NAME;
use crate::error::{PickerError, PickerResult};

/// Env var that pins the workspace root explicitly
pub const ROOT_ENV: &str = "SLIDEPICK_ROOT";

/// One slide deck folder under the presentations root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Folder name, used as both label and value in the picker
    pub name: String,
    /// Absolute path of the folder
    pub dir: PathBuf,
}

impl Presentation {
    /// Primary slide document. Existence is not checked.
    pub fn slides_path(&self, slides_file: &str) -> PathBuf {
        self.dir.join(slides_file)
    }
}

/// Resolve the workspace root from the running executable's location.
///
/// `SLIDEPICK_ROOT` wins when set. Otherwise the first ancestor of the
/// executable's directory holding `slidepick.toml` or a directory named
/// `presentations_dir` is used, falling back to the executable's directory.
/// The result is always absolute.
pub fn locate_workspace_root(
    exe: &Path,
    presentations_dir: &str,
    get_env: impl Fn(&str) -> Option<String>,
) -> PickerResult<PathBuf> {
    if let Some(root) = get_env(ROOT_ENV).filter(|r| !r.trim().is_empty()) {
        return Ok(std::path::absolute(root)?);
    }

    let exe = std::path::absolute(exe)?;
    let exe_dir = exe.parent().unwrap_or(exe.as_path());
    let root = exe_dir
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file() || dir.join(presentations_dir).is_dir())
        .unwrap_or(exe_dir);
    Ok(root.to_path_buf())
}

/// List presentation folders under `root`, sorted for display.
///
/// Only entries that are themselves directories count; symlinks are not
/// followed. An empty result is a fatal precondition failure.
pub fn list_presentations(root: &Path) -> PickerResult<Vec<Presentation>> {
    let read_err = |source: std::io::Error| PickerError::ReadRoot {
        path: root.to_path_buf(),
        source,
    };

    let mut presentations = Vec::new();
    for entry in fs::read_dir(root).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if !entry.file_type().map_err(read_err)?.is_dir() {
            continue;
        }
        presentations.push(Presentation {
            name: entry.file_name().to_string_lossy().into_owned(),
            dir: entry.path(),
        });
    }

    if presentations.is_empty() {
        return Err(PickerError::NoPresentations {
            root: root.to_path_buf(),
        });
    }

    let collator = FolderCollator::new()?;
    presentations.sort_by(|a, b| collator.compare(&a.name, &b.name));
    Ok(presentations)
}
