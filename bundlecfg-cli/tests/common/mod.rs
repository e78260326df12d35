//! Common test utilities for CLI integration tests.
//!
//! Every command runs in an isolated temporary directory with its own home
//! directory, so user and project configuration on the host never leak in.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would otherwise change how the binary is configured.
const ISOLATED_VARS: [&str; 7] = [
    "BUNDLECFG_BUNDLE_DIR",
    "BUNDLECFG_LOCALE",
    "BUNDLECFG_SOURCE",
    "BUNDLECFG_ENV_PREFIX",
    "BUNDLECFG_REGISTRY",
    "BUNDLECFG_OUTPUT_FORMAT",
    "BUNDLECFG_LOG_MODE",
];

/// Test environment with an isolated working, home and bundle directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for commands
    pub work_dir: PathBuf,
    /// Home directory for commands
    pub home_dir: PathBuf,
    /// Bundle directory passed with `--bundle-dir`
    pub bundle_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with empty directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let work_dir = root.join("work");
        let home_dir = root.join("home");
        let bundle_dir = root.join("bundles");
        for dir in [&work_dir, &home_dir, &bundle_dir] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        Self {
            temp_dir,
            work_dir,
            home_dir,
            bundle_dir,
        }
    }

    /// Get a command builder without `--bundle-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("bundlecfg").expect("Failed to find bundlecfg binary");
        cmd.current_dir(&self.work_dir).env("HOME", &self.home_dir);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with `--bundle-dir` pointing at this
    /// environment's bundle directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--bundle-dir").arg(&self.bundle_dir);
        cmd
    }

    /// Write a bundle file into the bundle directory.
    pub fn write_bundle(&self, name: &str, contents: &str) -> PathBuf {
        write_file(&self.bundle_dir, name, contents)
    }

    /// Write raw bytes into the bundle directory.
    pub fn write_bundle_bytes(&self, name: &str, contents: &[u8]) -> PathBuf {
        write_file(&self.bundle_dir, name, contents)
    }

    /// Write a file into the working directory.
    pub fn write_work_file(&self, name: &str, contents: &str) -> PathBuf {
        write_file(&self.work_dir, name, contents)
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run command");
        assert!(
            output.status.success(),
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, contents).expect("Failed to write test file");
    path
}
