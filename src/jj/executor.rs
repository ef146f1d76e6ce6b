//! jj command executor
//!
//! Handles running jj commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::{debug, warn};

use super::constants::{self, commands, errors, flags, special};
use super::parser::parse_remote_list;
use super::{JjCommand, JjError};
use crate::model::LogSettings;

/// Captured output of a mutating command
///
/// jj writes its result summary ("Working copy now at: ...") to stderr,
/// so both streams are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Last non-empty line of stderr, falling back to stdout
    pub fn summary(&self) -> Option<&str> {
        last_line(&self.stderr).or_else(|| last_line(&self.stdout))
    }
}

fn last_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).rfind(|line| !line.is_empty())
}

/// Executor for jj commands
#[derive(Debug, Clone, Default)]
pub struct JjExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl JjExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    pub fn repo_path(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }

    /// `jj [-R path] --color=never <args>` without running it
    ///
    /// An existing repo path is also the working directory, so the paths
    /// `jj status` prints and the `file:` patterns passed back share a base.
    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(constants::JJ_COMMAND);
        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
            if path.is_dir() {
                cmd.current_dir(path);
            }
        }
        // Always disable color for parsing
        cmd.arg(flags::NO_COLOR);
        cmd.args(args);
        cmd
    }

    fn output(&self, args: &[&str]) -> Result<Output, JjError> {
        debug!(?args, "running jj");
        let output = self.command(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JjError::JjNotFound
            } else {
                JjError::IoError(e)
            }
        })?;

        if output.status.success() {
            return Ok(output);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let exit_code = output.status.code().unwrap_or(-1);
        warn!(?args, exit_code, "jj command failed");

        if stderr.contains(errors::NOT_A_REPO) {
            return Err(JjError::NotARepository);
        }

        Err(JjError::CommandFailed { stderr, exit_code })
    }

    /// Run a jj command and return its stdout
    ///
    /// Automatically adds `--color=never` to ensure parseable output.
    pub fn run(&self, args: &[&str]) -> Result<String, JjError> {
        let output = self.output(args)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run an assembled command with captured output
    pub fn execute(&self, command: &JjCommand) -> Result<CommandOutput, JjError> {
        let args: Vec<&str> = command.args().iter().map(String::as_str).collect();
        let output = self.output(&args)?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Get the jj version
    pub fn version(&self) -> Result<String, JjError> {
        let output = self.run(&[flags::VERSION])?;
        // Output format: "jj 0.37.0"
        let trimmed = output.trim();
        Ok(trimmed
            .strip_prefix(special::VERSION_PREFIX)
            .unwrap_or(trimmed)
            .to_string())
    }

    /// Check if jj version is supported
    pub fn check_version(&self) -> Result<(), JjError> {
        let version = self.version()?;
        if !is_version_supported(&version, constants::MIN_JJ_VERSION) {
            return Err(JjError::UnsupportedVersion {
                version,
                minimum: constants::MIN_JJ_VERSION.to_string(),
            });
        }
        Ok(())
    }

    /// `jj log` text as configured by the log settings
    pub fn log_text(&self, settings: &LogSettings) -> Result<String, JjError> {
        let args = settings.to_args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(&args)
    }

    pub fn status_text(&self) -> Result<String, JjError> {
        self.run(&[commands::STATUS])
    }

    /// `jj show` for a change (description + diff)
    pub fn show_text(&self, change_id: &str) -> Result<String, JjError> {
        self.run(&[commands::SHOW, change_id])
    }

    /// `jj diff` of a whole change
    pub fn diff_text(&self, change_id: &str) -> Result<String, JjError> {
        self.run(&[commands::DIFF, flags::REVISION, change_id])
    }

    /// `jj diff` of one working-copy file
    ///
    /// The path is passed as a quoted `file:` pattern so characters that
    /// mean something in fileset syntax (`(`, `|`, `~`, spaces) are literal.
    pub fn diff_file_text(&self, path: &str) -> Result<String, JjError> {
        let fileset = file_pattern(path);
        self.run(&[commands::DIFF, "--", &fileset])
    }

    /// `jj op log` limited to `limit` operations
    pub fn op_log_text(&self, limit: usize) -> Result<String, JjError> {
        let limit = limit.to_string();
        self.run(&[commands::OP, commands::OP_LOG, flags::LIMIT, &limit])
    }

    pub fn op_show_text(&self, operation_id: &str) -> Result<String, JjError> {
        self.run(&[commands::OP, commands::OP_SHOW, operation_id])
    }

    /// `jj bookmark list --all-remotes`
    pub fn bookmark_list_text(&self) -> Result<String, JjError> {
        self.run(&[commands::BOOKMARK, "list", flags::ALL_REMOTES])
    }

    /// Names of configured git remotes
    pub fn git_remotes(&self) -> Result<Vec<String>, JjError> {
        let output = self.run(&[commands::GIT, commands::GIT_REMOTE, "list"])?;
        Ok(parse_remote_list(&output))
    }

    /// Full description of a change (may be multi-line, empty if unset)
    pub fn description(&self, change_id: &str) -> Result<String, JjError> {
        self.run(&[
            commands::LOG,
            flags::NO_GRAPH,
            flags::REVISION,
            change_id,
            flags::TEMPLATE,
            "description",
        ])
    }
}

/// `file:"<path>"` with the path as a jj string literal
fn file_pattern(path: &str) -> String {
    let mut pattern = String::with_capacity(path.len() + 7);
    pattern.push_str(special::FILE_PATTERN_PREFIX);
    pattern.push('"');
    for c in path.chars() {
        match c {
            '"' | '\\' => {
                pattern.push('\\');
                pattern.push(c);
            }
            '\t' => pattern.push_str("\\t"),
            '\n' => pattern.push_str("\\n"),
            _ => pattern.push(c),
        }
    }
    pattern.push('"');
    pattern
}

/// Compare version strings (simple semver comparison)
///
/// Handles prerelease suffixes like "0.37.0-rc1" by stripping the suffix.
fn is_version_supported(version: &str, minimum: &str) -> bool {
    let parse_version = |v: &str| -> Option<(u32, u32, u32)> {
        let mut parts = v.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.split('-').next()?.parse().ok()?;
        let patch = parts
            .next()
            .and_then(|p| p.split('-').next())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);
        Some((major, minor, patch))
    };

    match (parse_version(version), parse_version(minimum)) {
        (Some(v), Some(m)) => v >= m,
        _ => false,
    }
}
