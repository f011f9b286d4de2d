//! Test environment builder for isolated slidepick runs.
//!
//! Provides `TestEnv` - a temp workspace with a `presentations/` directory,
//! plus helpers to run the slidepick binary against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Records the working directory and arguments it was invoked with.
///
/// Run through `sh` so the test never executes a freshly written file.
const RECORDING_TOOL: &str = r#"pwd > "$SLIDEPICK_ROOT/cwd.txt"
for arg in "$@"; do printf '%s\n' "$arg"; done > "$SLIDEPICK_ROOT/args.txt"
exit "${TOOL_EXIT:-0}"
"#;

/// Result of running the slidepick binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated workspace with a recording tool.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run slidepick with the recording tool as the delegated program.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let tool_args = format!("{} run", self.path("tool.sh").display());

        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(std::env::temp_dir())
            .args(args)
            .env_remove("SLIDEPICK_PRESENTATIONS_DIR")
            .env_remove("SLIDEPICK_VERBOSITY")
            .env("SLIDEPICK_ROOT", self.root.path())
            .env("SLIDEPICK_TOOL", "sh")
            .env("SLIDEPICK_TOOL_ARGS", tool_args)
            .env("NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute slidepick");
        output_to_result(output)
    }

    /// Folder the tool ran in, if it ran.
    pub fn recorded_cwd(&self) -> Option<PathBuf> {
        let raw = std::fs::read_to_string(self.path("cwd.txt")).ok()?;
        std::fs::canonicalize(raw.trim()).ok()
    }

    /// Arguments the tool received, if it ran.
    pub fn recorded_args(&self) -> Option<Vec<String>> {
        let raw = std::fs::read_to_string(self.path("args.txt")).ok()?;
        Some(raw.lines().map(str::to_string).collect())
    }

    pub fn presentation_dir(&self, name: &str) -> PathBuf {
        std::fs::canonicalize(self.path("presentations").join(name))
            .expect("presentation folder exists")
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    presentations: Vec<String>,
    files: Vec<(String, String)>,
    config: Option<String>,
    without_presentations_dir: bool,
}

impl TestEnvBuilder {
    /// Add a presentation folder with a `slides.md`
    pub fn with_presentation(mut self, name: &str) -> Self {
        self.presentations.push(name.to_string());
        self
    }

    /// Add a plain file relative to the workspace root
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    /// Write `slidepick.toml`
    pub fn with_config(mut self, content: &str) -> Self {
        self.config = Some(content.to_string());
        self
    }

    /// Leave out `presentations/` entirely
    pub fn without_presentations_dir(mut self) -> Self {
        self.without_presentations_dir = true;
        self
    }

    pub fn build(self) -> TestEnv {
        let root = tempfile::tempdir().expect("Failed to create temp workspace");
        let ws = root.path();

        std::fs::write(ws.join("tool.sh"), RECORDING_TOOL).expect("Failed to write tool");

        if !self.without_presentations_dir {
            std::fs::create_dir_all(ws.join("presentations")).expect("Failed to create root");
        }
        for name in &self.presentations {
            let dir = ws.join("presentations").join(name);
            std::fs::create_dir_all(&dir).expect("Failed to create presentation");
            std::fs::write(dir.join("slides.md"), format!("# {}\n", name))
                .expect("Failed to write slides");
        }
        for (relative, content) in &self.files {
            write_file(&ws.join(relative), content);
        }
        if let Some(config) = &self.config {
            write_file(&ws.join("slidepick.toml"), config);
        }

        TestEnv {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_slidepick")),
        }
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
