//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::keys;
use crate::ui::views::{InputMode, PaneAction};
use crate::wizard::Flow;

impl App {
    /// Handle key events
    ///
    /// Priority: Ctrl+C, active dialog, pane input bar, global keys, pane
    /// navigation, then the keys of the current pane.
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        if let Some(dialog) = self.active_dialog.as_mut() {
            if let Some(result) = dialog.handle_key(key) {
                self.handle_dialog_result(result);
            }
            return;
        }

        // An open input bar receives every key
        if let Some(pane) = self.current_pane_mut()
            && pane.is_input_active()
        {
            let action = pane.handle_key(key);
            self.handle_pane_action(action);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        if self.current_view == View::Help {
            self.handle_help_key(key);
            return;
        }

        let action = match self.current_pane_mut() {
            Some(pane) => pane.handle_key(key),
            None => return,
        };
        if action == PaneAction::Unhandled {
            self.handle_view_key(key);
        } else {
            self.handle_pane_action(action);
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if keys::is_refresh_key(&key) {
            self.execute_refresh();
            return true;
        }
        if keys::is_redo_key(&key) {
            if self.current_view != View::Help {
                self.start_wizard(Flow::Redo);
            }
            return true;
        }

        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => {
                self.handle_back();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB => {
                self.next_view();
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::Log {
            self.quit();
        } else {
            self.go_back();
        }
    }

    fn handle_back(&mut self) {
        if self.current_view != View::Log {
            self.go_back();
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            k if keys::is_move_down(k) => self.help_scroll = self.help_scroll.saturating_add(1),
            k if keys::is_move_up(k) => self.help_scroll = self.help_scroll.saturating_sub(1),
            keys::GO_TOP => self.help_scroll = 0,
            _ => {}
        }
    }

    fn handle_pane_action(&mut self, action: PaneAction) {
        match action {
            PaneAction::None | PaneAction::Unhandled => {}
            PaneAction::SetRevset(revset) => self.apply_revset(&revset),
            PaneAction::SetLimit(limit) => self.apply_limit(&limit),
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Log => self.handle_log_key(key),
            View::Status => {
                if key.code == keys::FILE_DIFF {
                    self.show_file_diff();
                }
            }
            View::Operation => match key.code {
                keys::OP_SHOW => self.show_operation(),
                keys::OP_RESTORE => match self.current_operation_id() {
                    Some(op_id) => self.start_wizard(Flow::OpRestore(op_id)),
                    None => self.notify_warning("No operation ID on the current line"),
                },
                keys::UNDO => self.start_wizard(Flow::Undo),
                _ => {}
            },
            View::Bookmark => match key.code {
                keys::BOOKMARK_JUMP => self.jump_to_bookmark(),
                keys::BOOKMARK_DELETE => self.delete_selected_bookmark(),
                keys::UNDO => self.start_wizard(Flow::Undo),
                _ => {}
            },
            View::Detail | View::Help => {}
        }
    }

    fn handle_log_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::SHOW => self.show_change(),
            keys::DIFF => self.show_change_diff(),
            keys::DESCRIBE => self.start_wizard(Flow::Describe),
            keys::DESCRIBE_EDITOR => self.start_wizard(Flow::DescribeInEditor),
            keys::EDIT => self.start_wizard(Flow::Edit),
            keys::NEW_CHANGE => self.start_wizard(Flow::New),
            keys::SQUASH => self.start_wizard(Flow::Squash),
            keys::REBASE => self.start_wizard(Flow::Rebase),
            keys::ABANDON => self.start_wizard(Flow::Abandon),
            keys::SPLIT => self.start_wizard(Flow::Split),
            keys::BOOKMARK => self.start_wizard(Flow::Bookmark),
            keys::PUSH => self.start_wizard(Flow::Push),
            keys::FETCH => self.start_wizard(Flow::Fetch),
            keys::UNDO => self.start_wizard(Flow::Undo),
            keys::REVSET_INPUT => {
                let current = self.session.log_settings.revset.clone().unwrap_or_default();
                self.log_pane.start_input(InputMode::RevsetInput, &current);
            }
            keys::LIMIT_INPUT => {
                let current = self
                    .session
                    .log_settings
                    .limit
                    .map(|n| n.to_string())
                    .unwrap_or_default();
                self.log_pane.start_input(InputMode::LimitInput, &current);
            }
            keys::TOGGLE_GRAPH => self.toggle_graph(),
            keys::TOGGLE_REVERSE => self.toggle_reversed(),
            keys::NEXT_CHANGE => {
                if !self.log_pane.next_change_line() {
                    self.notify_info("No further change below");
                }
            }
            keys::PREV_CHANGE => {
                if !self.log_pane.prev_change_line() {
                    self.notify_info("No further change above");
                }
            }
            keys::STATUS_PANE => self.go_to_view(View::Status),
            keys::OPERATION_PANE => self.go_to_view(View::Operation),
            keys::BOOKMARK_PANE => self.go_to_view(View::Bookmark),
            _ => {}
        }
    }
}
