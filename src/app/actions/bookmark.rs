//! Bookmark pane operations (jump, delete)

use crate::jj::parser::parse_bookmark_list;
use crate::model::Bookmark;
use crate::wizard::Flow;

use crate::app::state::{App, View};

impl App {
    /// Bookmark on or above the cursor line
    ///
    /// Indented remote lines belong to the local bookmark above them, so the
    /// list is parsed up to the cursor and the last entry wins.
    pub(crate) fn selected_bookmark(&self) -> Option<Bookmark> {
        let lines = self.bookmark_pane.lines();
        let end = (self.bookmark_pane.cursor + 1).min(lines.len());
        parse_bookmark_list(&lines[..end].join("\n")).pop()
    }

    /// Show the selected bookmark's change in the log pane
    pub(crate) fn jump_to_bookmark(&mut self) {
        let Some(bookmark) = self.selected_bookmark() else {
            self.notify_warning("No bookmark on the current line");
            return;
        };
        let Some(change_id) = bookmark.change_id.clone() else {
            self.notify_warning(format!("{} has no single target", bookmark.full_name()));
            return;
        };

        self.go_to_view(View::Log);
        if self.log_pane.select_change(&change_id) {
            self.notify_info(format!("Jumped to {}", bookmark.full_name()));
        } else {
            self.notify_warning(format!(
                "{} ({}) is not in the current revset",
                bookmark.full_name(),
                change_id
            ));
        }
    }

    /// Delete the selected local bookmark through the bookmark wizard
    pub(crate) fn delete_selected_bookmark(&mut self) {
        match self.selected_bookmark() {
            Some(bookmark) if bookmark.is_live_local() => {
                self.start_wizard_with(Flow::Bookmark, &["delete", bookmark.name.as_str()]);
            }
            Some(bookmark) => {
                self.notify_warning(format!("{} is not a local bookmark", bookmark.full_name()));
            }
            None => self.notify_warning("No bookmark on the current line"),
        }
    }
}
