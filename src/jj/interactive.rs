//! Interactive jj command execution
//!
//! These commands spawn jj with inherited stdio so it can open the user's
//! editor or diff editor. The terminal must be out of raw mode and off the
//! alternate screen while they run; see [`suspend_tui`].

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use super::constants::{self, flags};
use super::{JjCommand, JjExecutor};

/// Suspend TUI mode (raw mode off, leave alternate screen).
///
/// Returns a scope guard that restores TUI mode on drop.
pub fn suspend_tui() -> impl Drop {
    use crossterm::execute;
    use crossterm::terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    };
    use std::io::stdout;

    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen, Clear(ClearType::All));

    scopeguard::guard((), |_| {
        let _ = enable_raw_mode();
        let _ = execute!(stdout(), EnterAlternateScreen);
    })
}

impl JjExecutor {
    /// Build the inherited-stdio command
    ///
    /// Unlike captured runs this keeps jj's colors, since the output goes
    /// straight to the user's terminal.
    fn interactive_command(&self, command: &JjCommand) -> Command {
        let mut cmd = Command::new(constants::JJ_COMMAND);
        if let Some(repo_path) = self.repo_path() {
            cmd.arg(flags::REPO_PATH).arg(repo_path);
        }
        cmd.args(command.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Run a command with inherited stdio
    ///
    /// The caller must suspend the TUI before calling this method.
    pub fn run_interactive(&self, command: &JjCommand) -> io::Result<ExitStatus> {
        debug!(%command, "running jj interactively");
        self.interactive_command(command).status()
    }
}
