//! Assembled jj invocations
//!
//! Every wizard ends in a `JjCommand`. The executor decides how to run it
//! (captured output or inherited stdio) from the `interactive` flag.

use std::fmt;

use super::constants::JJ_COMMAND;

/// A jj subcommand with its arguments (without the leading `jj`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JjCommand {
    args: Vec<String>,
    interactive: bool,
}

impl JjCommand {
    /// Build a command from arguments
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            interactive: false,
        }
    }

    /// Mark the command as needing the terminal (editor or diff editor)
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a flag and its value
    pub fn opt(self, flag: &str, value: impl Into<String>) -> Self {
        self.arg(flag).arg(value)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// The subcommand name (`new`, `rebase`, `git`, ...)
    pub fn name(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for JjCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(JJ_COMMAND)?;
        for arg in &self.args {
            f.write_str(" ")?;
            if needs_quoting(arg) {
                write!(f, "'{}'", arg.replace('\'', r"'\''"))?;
            } else {
                f.write_str(arg)?;
            }
        }
        Ok(())
    }
}

fn needs_quoting(arg: &str) -> bool {
    arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '$' | '`' | '\\' | '|' | '&' | ';'))
}
