//! Common test utilities for envforge integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway project directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write an executable shell script printing `json` and return its path
    #[cfg(unix)]
    pub fn write_status_script(&self, json: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path.join("status.sh");
        std::fs::write(&path, format!("#!/bin/sh\ncat <<'JSON'\n{json}\nJSON\n"))
            .expect("Failed to write status script");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat status script")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod status script");
        path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// envforge binary with a clean environment
///
/// Developer overrides are removed and the status command points at a
/// binary that does not exist, so tests never talk to a real stack.
#[allow(deprecated)]
pub fn envforge_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("envforge").expect("Failed to find envforge binary");
    cmd.env_remove("ENVFORGE_OUTPUT");
    cmd.env_remove("ENVFORGE_IGNORE");
    cmd.env("ENVFORGE_STATUS_COMMAND", "envforge-test-no-such-status-command");
    cmd
}
