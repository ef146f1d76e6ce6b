//! jj command execution layer
//!
//! This module handles executing jj commands and scraping their text output.

mod command;
pub mod constants;
mod executor;
mod interactive;
/// Parser module (public for integration testing)
pub mod parser;

pub use command::JjCommand;
pub use executor::{CommandOutput, JjExecutor};
pub use interactive::suspend_tui;
pub use parser::Parser;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing jj commands
#[derive(Error, Debug)]
pub enum JjError {
    #[error("Not a jj repository")]
    NotARepository,

    #[error("jj command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("jj is not installed or not in PATH")]
    JjNotFound,

    #[error("jj {version} is not supported (minimum: {minimum})")]
    UnsupportedVersion { version: String, minimum: String },
}

impl JjError {
    /// First meaningful line of the error, for the one-line error banner
    pub fn summary(&self) -> String {
        match self {
            JjError::CommandFailed { stderr, .. } => stderr
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(|line| line.strip_prefix("Error: ").unwrap_or(line).to_string())
                .unwrap_or_else(|| self.to_string()),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_takes_first_stderr_line() {
        let err = JjError::CommandFailed {
            stderr: "\nError: Revision `nope` doesn't exist\nHint: check the revset\n".to_string(),
            exit_code: 1,
        };
        assert_eq!(err.summary(), "Revision `nope` doesn't exist");
    }

    #[test]
    fn test_summary_falls_back_to_display() {
        let err = JjError::CommandFailed {
            stderr: String::new(),
            exit_code: 2,
        };
        assert_eq!(err.summary(), "jj command failed (exit code 2): ");
        assert_eq!(JjError::JjNotFound.summary(), "jj is not installed or not in PATH");
    }

    #[test]
    fn test_summary_of_non_command_errors() {
        let io: JjError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(io.summary(), "IO error: denied");
        assert_eq!(JjError::NotARepository.summary(), "Not a jj repository");

        let old = JjError::UnsupportedVersion {
            version: "0.30.0".to_string(),
            minimum: constants::MIN_JJ_VERSION.to_string(),
        };
        assert_eq!(
            old.summary(),
            format!("jj 0.30.0 is not supported (minimum: {})", constants::MIN_JJ_VERSION)
        );
    }
}
