//! Temporary git repository helper for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing
pub struct TempGitRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TempGitRepo {
    /// Create a new temporary git repository
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().to_path_buf();

        // Initialize git repo
        Command::new("git")
            .args(["init"])
            .current_dir(&path)
            .output()
            .expect("Failed to init git repo");

        // Configure git user
        Command::new("git")
            .args(["config", "user.name", "Test User"])
            .current_dir(&path)
            .output()
            .expect("Failed to set git user.name");

        Command::new("git")
            .args(["config", "user.email", "test@example.com"])
            .current_dir(&path)
            .output()
            .expect("Failed to set git user.email");

        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a file to the repository
    pub fn write_file(&self, name: &str, content: &str) {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(file_path, content).expect("Failed to write file");
    }

    /// Commit all current changes with the configured test user
    pub fn commit(&self, message: &str) {
        self.commit_with(message, &[]);
    }

    /// Commit all current changes under a specific author name and email
    pub fn commit_as(&self, message: &str, author: &str, email: &str) {
        self.commit_with(
            message,
            &[
                ("GIT_AUTHOR_NAME", author),
                ("GIT_AUTHOR_EMAIL", email),
                ("GIT_COMMITTER_NAME", author),
                ("GIT_COMMITTER_EMAIL", email),
            ],
        );
    }

    /// Commit all current changes with a fixed commit date (RFC 2822 or
    /// ISO 8601, e.g. "2020-01-01T12:00:00")
    pub fn commit_dated(&self, message: &str, date: &str) {
        self.commit_with(message, &[("GIT_AUTHOR_DATE", date), ("GIT_COMMITTER_DATE", date)]);
    }

    fn commit_with(&self, message: &str, envs: &[(&str, &str)]) {
        Command::new("git")
            .args(["add", "-A"])
            .current_dir(&self.path)
            .output()
            .expect("Failed to stage files");

        let mut cmd = Command::new("git");
        cmd.args(["commit", "--allow-empty", "-m", message]).current_dir(&self.path);
        for (key, value) in envs {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to commit");
    }
}

impl Default for TempGitRepo {
    fn default() -> Self {
        Self::new()
    }
}
