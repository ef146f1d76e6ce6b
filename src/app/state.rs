//! Application state and view management

use crate::config::Config;
use crate::jj::JjExecutor;
use crate::model::{LogSettings, Notification};
use crate::ui::components::Dialog;
use crate::ui::views::{Pane, PaneKind};
use crate::wizard::Wizard;

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Log,
    Status,
    Operation,
    Bookmark,
    /// Output of jj show / jj diff / jj op show
    Detail,
    Help,
}

/// Everything an operation needs to talk to jj
///
/// Owned by [`App`]; nothing here is process-global.
#[derive(Debug)]
pub struct Session {
    pub jj: JjExecutor,
    pub log_settings: LogSettings,
    pub config: Config,
}

impl Session {
    /// Session with log settings taken from the config
    pub fn new(jj: JjExecutor, config: Config) -> Self {
        Self {
            jj,
            log_settings: config.log_settings(),
            config,
        }
    }
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    pub session: Session,
    pub log_pane: Pane,
    pub status_pane: Pane,
    pub operation_pane: Pane,
    pub bookmark_pane: Pane,
    pub detail_pane: Pane,
    /// Help panel scroll offset
    pub(crate) help_scroll: u16,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Active dialog (blocks other input when Some)
    pub active_dialog: Option<Dialog>,
    /// Wizard the active dialog belongs to
    pub(crate) wizard: Option<Wizard>,
    /// Set after an interactive command; the terminal must be fully redrawn
    pub needs_clear: bool,
}

impl App {
    /// Construct a new instance of [`App`] and load the log.
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            running: true,
            current_view: View::Log,
            previous_view: None,
            session,
            log_pane: Pane::new(PaneKind::Log, "Log"),
            status_pane: Pane::new(PaneKind::Status, "Status"),
            operation_pane: Pane::new(PaneKind::Operation, "Operation Log"),
            bookmark_pane: Pane::new(PaneKind::Bookmark, "Bookmarks"),
            detail_pane: Pane::new(PaneKind::Detail, "Detail"),
            help_scroll: 0,
            error_message: None,
            notification: None,
            active_dialog: None,
            wizard: None,
            needs_clear: false,
        };

        app.refresh_log();

        app
    }

    /// Pane behind the current view (`None` for Help)
    pub fn current_pane(&self) -> Option<&Pane> {
        match self.current_view {
            View::Log => Some(&self.log_pane),
            View::Status => Some(&self.status_pane),
            View::Operation => Some(&self.operation_pane),
            View::Bookmark => Some(&self.bookmark_pane),
            View::Detail => Some(&self.detail_pane),
            View::Help => None,
        }
    }

    pub(crate) fn current_pane_mut(&mut self) -> Option<&mut Pane> {
        match self.current_view {
            View::Log => Some(&mut self.log_pane),
            View::Status => Some(&mut self.status_pane),
            View::Operation => Some(&mut self.operation_pane),
            View::Bookmark => Some(&mut self.bookmark_pane),
            View::Detail => Some(&mut self.detail_pane),
            View::Help => None,
        }
    }

    /// Switch to next view (Tab key)
    pub(crate) fn next_view(&mut self) {
        let next = match self.current_view {
            View::Log => View::Status,
            View::Status => View::Operation,
            View::Operation => View::Bookmark,
            View::Bookmark => View::Log,
            View::Detail | View::Help => View::Log,
        };
        self.go_to_view(next);
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;

            // Refresh data when entering listing panes
            match view {
                View::Status => self.refresh_status(),
                View::Operation => self.refresh_operation_log(),
                View::Bookmark => self.refresh_bookmarks(),
                View::Help => self.help_scroll = 0,
                View::Log | View::Detail => {}
            }
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        self.current_view = self.previous_view.take().unwrap_or(View::Log);
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
