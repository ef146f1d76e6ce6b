//! TestRepo helper for integration tests.
//!
//! Provides a temporary jj repository with a fixed author, so change lines
//! in `jj log` carry an email.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

pub const TEST_USER: &str = "Test User";
pub const TEST_EMAIL: &str = "test.user@example.com";

/// A temporary jj repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new jj repository in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self { dir };

        repo.jj(&["git", "init"]);
        // Commands run by JjExecutor don't get the env vars below
        repo.jj(&["config", "set", "--repo", "user.name", TEST_USER]);
        repo.jj(&["config", "set", "--repo", "user.email", TEST_EMAIL]);

        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("jj");
        cmd.args(args)
            .current_dir(self.path())
            .env("JJ_USER", TEST_USER)
            .env("JJ_EMAIL", TEST_EMAIL);
        cmd
    }

    /// Execute a jj command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn jj(&self, args: &[&str]) -> String {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute jj command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "jj {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Short change ID (8 characters) of a revision.
    pub fn change_id(&self, rev: &str) -> String {
        self.jj(&["log", "-r", rev, "--no-graph", "-T", "change_id.short(8)"])
            .trim()
            .to_string()
    }

    /// Get the description of a revision.
    pub fn get_description(&self, rev: &str) -> String {
        self.jj(&["log", "-r", rev, "--no-graph", "-T", "description"])
            .trim()
            .to_string()
    }

    /// Count the number of changes matching a revset.
    pub fn count_changes(&self, revset: &str) -> usize {
        self.jj(&["log", "-r", revset, "--no-graph", "-T", "\"x\""])
            .matches('x')
            .count()
    }

    /// Names of local bookmarks.
    pub fn bookmark_names(&self) -> Vec<String> {
        self.jj(&["bookmark", "list", "-T", "name ++ \"\\n\""])
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
