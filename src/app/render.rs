//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, View};
use crate::keys;
use crate::ui::widgets::{render_error_banner, render_help_panel, render_status_bar};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        // Reserve the bottom row for the status bar
        let area = frame.area();
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        let help_scroll = self.help_scroll;
        match self.current_view {
            View::Help => render_help_panel(frame, main_area, help_scroll),
            _ => {
                if let Some(pane) = self.current_pane_mut() {
                    pane.render(frame, main_area, notification.as_ref());
                }
            }
        }

        let dialog = self.active_dialog.as_ref().map(|d| d.hint_kind());
        let input_active = self.current_pane().is_some_and(|p| p.is_input_active());
        let hints = keys::current_hints(self.current_view, dialog, input_active);
        render_status_bar(frame, &hints);

        // Render error banner above status bar (errors are always shown prominently)
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }

        // Render dialog on top of everything
        if let Some(ref dialog) = self.active_dialog {
            dialog.render(frame, frame.area());
        }
    }
}
