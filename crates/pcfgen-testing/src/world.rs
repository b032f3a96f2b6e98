//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Writing configs, templates and sheets into them
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use pcfgen_testing::TestWorld;
/// use pcfgen_testing::fixtures::{DUPLICATE_NAMES_CSV, PROFILE_CONFIG, PROFILE_TEMPLATE};
///
/// let world = TestWorld::new()
///     .with_config(PROFILE_CONFIG)
///     .with_template(PROFILE_TEMPLATE)
///     .with_csv(DUPLICATE_NAMES_CSV);
///
/// let result = world.run(&["generate"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        Self {
            cwd: temp_dir.path().to_path_buf(),
            temp_dir,
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Resolve a path relative to the working directory.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.cwd.join(relative)
    }

    /// Change the current working directory (relative to temp root).
    pub fn enter_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        let new_cwd = if path.as_ref().is_absolute() {
            path.as_ref().to_path_buf()
        } else {
            self.temp_dir.path().join(path)
        };

        std::fs::create_dir_all(&new_cwd).expect("Failed to create directory");
        self.cwd = new_cwd;
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a file relative to the working directory.
    pub fn with_file(self, relative: impl AsRef<Path>, content: &str) -> Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// Write `pcfgen.toml`.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file("pcfgen.toml", content)
    }

    /// Write `template.txt`.
    pub fn with_template(self, content: &str) -> Self {
        self.with_file("template.txt", content)
    }

    /// Write `rows.csv`.
    pub fn with_csv(self, content: &str) -> Self {
        self.with_file("rows.csv", content)
    }

    /// Copy one of the shared sample files into the working directory.
    pub fn with_sample(self, sample_name: &str, dest: impl AsRef<Path>) -> Self {
        let dest = self.path(dest);
        self.samples
            .copy_to(sample_name, &dest)
            .expect("Failed to copy sample");
        self
    }

    /// Read a file relative to the working directory.
    pub fn read(&self, relative: impl AsRef<Path>) -> Result<String> {
        Ok(std::fs::read_to_string(self.path(relative))?)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("pcfgen")`).
    /// The config file is picked up from the working directory, as in real use.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(&self.cwd);
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("pcfgen")
            .map_err(|e| anyhow::anyhow!("Failed to find pcfgen binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
