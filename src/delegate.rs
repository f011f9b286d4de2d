//! Running the per-presentation tool as a child process.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{PickerError, PickerResult};

/// A fully resolved tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory of the child
    pub cwd: PathBuf,
}

impl DelegateCommand {
    /// `program` followed by `leading` then `forwarded`, run inside `cwd`.
    pub fn new(program: &str, leading: &[String], forwarded: &[String], cwd: PathBuf) -> Self {
        Self {
            program: program.to_string(),
            args: leading.iter().chain(forwarded).cloned().collect(),
            cwd,
        }
    }
}

impl fmt::Display for DelegateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs a delegated command to completion.
pub trait Launcher {
    /// Start the command, wait for it, and return its exit code.
    fn launch(&self, command: &DelegateCommand) -> PickerResult<i32>;
}

/// Launcher that spawns a real process sharing this process's stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &DelegateCommand) -> PickerResult<i32> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| PickerError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        Ok(exit_code(status))
    }
}

/// Map a child's exit status to this process's exit code.
///
/// Signal terminations become `128 + signal` on Unix.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
