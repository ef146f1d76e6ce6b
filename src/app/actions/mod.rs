//! jj operations triggered from the panes

mod bookmark;
mod dialog;

use tracing::{info, warn};

use crate::jj::{JjCommand, suspend_tui};
use crate::model::Notification;

use super::state::{App, View};

impl App {
    // ── Notification / error helpers ──────────────────────────────────

    /// Set a success notification (green)
    pub(crate) fn notify_success(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::success(msg));
    }

    /// Set an info notification (cyan)
    pub(crate) fn notify_info(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::info(msg));
    }

    /// Set a warning notification (yellow)
    pub(crate) fn notify_warning(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::warning(msg));
    }

    /// Set an error message (displayed in error area)
    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    // ── Running commands ──────────────────────────────────────────────

    /// Run a command assembled by a wizard, then refresh
    ///
    /// Interactive commands get the terminal for the duration; captured
    /// ones report jj's last output line as a notification.
    pub(crate) fn run_command(&mut self, command: JjCommand) {
        info!(%command, "running command");

        if command.is_interactive() {
            let result = {
                let _guard = suspend_tui();
                self.session.jj.run_interactive(&command)
            };
            self.needs_clear = true;

            match result {
                Ok(status) if status.success() => {
                    self.notify_success(format!("{} finished", command.name()));
                }
                Ok(status) => {
                    warn!(%command, code = ?status.code(), "interactive command failed");
                    self.set_error(format!(
                        "{} exited with error (code: {})",
                        command.name(),
                        status.code().unwrap_or(-1)
                    ));
                    return;
                }
                Err(e) => {
                    warn!(%command, error = %e, "interactive command could not start");
                    self.set_error(format!("{} failed: {}", command.name(), e));
                    return;
                }
            }
        } else {
            match self.session.jj.execute(&command) {
                Ok(output) => {
                    let message = output
                        .summary()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("{} done", command.name()));
                    self.notify_success(message);
                }
                Err(e) => {
                    warn!(%command, error = %e, "command failed");
                    self.set_error(e.summary());
                    return;
                }
            }
        }

        // Refresh only on success: refresh clears error_message
        self.refresh_after_command();
    }

    // ── Detail pane ───────────────────────────────────────────────────

    /// Put `text` in the detail pane and switch to it
    fn open_detail(&mut self, title: String, text: &str) {
        self.detail_pane.title = title;
        self.detail_pane.reset_text(text);
        self.go_to_view(View::Detail);
    }

    /// `jj show` for the change on the current log line
    pub(crate) fn show_change(&mut self) {
        let Some(change_id) = self.log_pane.current_change_id() else {
            self.notify_warning("No change ID on the current line");
            return;
        };
        match self.session.jj.show_text(change_id.as_str()) {
            Ok(text) => self.open_detail(format!("Show {}", change_id), &text),
            Err(e) => self.set_error(e.summary()),
        }
    }

    /// `jj diff -r` for the change on the current log line
    pub(crate) fn show_change_diff(&mut self) {
        let Some(change_id) = self.log_pane.current_change_id() else {
            self.notify_warning("No change ID on the current line");
            return;
        };
        match self.session.jj.diff_text(change_id.as_str()) {
            Ok(text) => self.open_detail(format!("Diff {}", change_id), &text),
            Err(e) => self.set_error(e.summary()),
        }
    }

    /// `jj diff` of the file on the current status line
    pub(crate) fn show_file_diff(&mut self) {
        let status = self
            .status_pane
            .current_line()
            .and_then(crate::jj::Parser::parse_status_line);
        let Some(status) = status else {
            self.notify_warning("No file on the current line");
            return;
        };
        match self.session.jj.diff_file_text(&status.path) {
            Ok(text) => self.open_detail(format!("Diff {}", status.path), &text),
            Err(e) => self.set_error(e.summary()),
        }
    }

    /// `jj op show` for the operation on the current op log line
    pub(crate) fn show_operation(&mut self) {
        let Some(op_id) = self.current_operation_id() else {
            self.notify_warning("No operation ID on the current line");
            return;
        };
        match self.session.jj.op_show_text(&op_id) {
            Ok(text) => self.open_detail(format!("Operation {}", op_id), &text),
            Err(e) => self.set_error(e.summary()),
        }
    }

    pub(crate) fn current_operation_id(&self) -> Option<String> {
        self.operation_pane
            .current_line()
            .and_then(crate::jj::Parser::extract_operation_id)
    }

    // ── Log settings ──────────────────────────────────────────────────

    pub(crate) fn apply_revset(&mut self, revset: &str) {
        self.session.log_settings.set_revset(revset);
        self.refresh_log();
        match &self.session.log_settings.revset {
            Some(revset) => self.notify_info(format!("Revset: {}", revset)),
            None => self.notify_info("Default revset"),
        }
    }

    pub(crate) fn apply_limit(&mut self, limit: &str) {
        if !self.session.log_settings.set_limit(limit) {
            self.notify_warning(format!("Not a positive number: {}", limit.trim()));
            return;
        }
        self.refresh_log();
    }

    pub(crate) fn toggle_graph(&mut self) {
        self.session.log_settings.graph = !self.session.log_settings.graph;
        self.refresh_log();
    }

    pub(crate) fn toggle_reversed(&mut self) {
        self.session.log_settings.reversed = !self.session.log_settings.reversed;
        self.refresh_log();
    }
}
