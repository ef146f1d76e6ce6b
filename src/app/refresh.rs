//! Data refresh operations (reload from jj)

use tracing::warn;

use crate::jj::JjError;

use super::state::{App, View};

/// Operations shown in the op log pane
const OP_LOG_LIMIT: usize = 50;

impl App {
    /// Reload the log pane with the session's log settings
    ///
    /// The cursor stays on the same line index, clamped to the new text.
    pub fn refresh_log(&mut self) {
        self.log_pane.title = match self.session.log_settings.summary() {
            Some(summary) => format!("Log ({})", summary),
            None => "Log".to_string(),
        };
        match self.session.jj.log_text(&self.session.log_settings) {
            Ok(text) => {
                self.log_pane.set_text(&text);
                self.error_message = None;
            }
            Err(e) => self.report_refresh_error("jj log", &e),
        }
    }

    /// Refresh the status pane
    pub fn refresh_status(&mut self) {
        match self.session.jj.status_text() {
            Ok(text) => {
                self.status_pane.set_text(&text);
                self.error_message = None;
            }
            Err(e) => self.report_refresh_error("jj status", &e),
        }
    }

    /// Refresh the operation log pane
    pub fn refresh_operation_log(&mut self) {
        match self.session.jj.op_log_text(OP_LOG_LIMIT) {
            Ok(text) => {
                self.operation_pane.set_text(&text);
                self.error_message = None;
            }
            Err(e) => self.report_refresh_error("jj op log", &e),
        }
    }

    /// Refresh the bookmark pane
    pub fn refresh_bookmarks(&mut self) {
        match self.session.jj.bookmark_list_text() {
            Ok(text) => {
                self.bookmark_pane.set_text(&text);
                self.error_message = None;
            }
            Err(e) => self.report_refresh_error("jj bookmark list", &e),
        }
    }

    /// Refresh after a mutating command: the log, plus the listing pane on screen
    pub(crate) fn refresh_after_command(&mut self) {
        self.refresh_log();
        match self.current_view {
            View::Status => self.refresh_status(),
            View::Operation => self.refresh_operation_log(),
            View::Bookmark => self.refresh_bookmarks(),
            View::Log | View::Detail | View::Help => {}
        }
    }

    /// Execute refresh for current view (Ctrl+L)
    ///
    /// The detail pane is a snapshot of one command and is left alone.
    pub(crate) fn execute_refresh(&mut self) {
        match self.current_view {
            View::Log => self.refresh_log(),
            View::Status => self.refresh_status(),
            View::Operation => self.refresh_operation_log(),
            View::Bookmark => self.refresh_bookmarks(),
            View::Detail | View::Help => return,
        }
        if self.error_message.is_none() {
            self.notify_info("Refreshed");
        }
    }

    fn report_refresh_error(&mut self, what: &str, error: &JjError) {
        warn!(%error, "{} failed", what);
        self.set_error(format!("{} failed: {}", what, error.summary()));
    }
}
