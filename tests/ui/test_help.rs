//! Rendering tests for the help panel

use jjpane::ui::widgets::render_help_panel;

use crate::screen::{contains, draw};

#[test]
fn test_help_panel_top() {
    let rows = draw(80, 30, |frame| render_help_panel(frame, frame.area(), 0));

    assert!(contains(&rows, "jjpane - Help"));
    assert!(contains(&rows, "Key bindings:"));
    assert!(contains(&rows, "Global:"));
}

#[test]
fn test_help_panel_lists_log_pane_keys() {
    let rows = draw(80, 120, |frame| render_help_panel(frame, frame.area(), 0));

    assert!(contains(&rows, "Log Pane:"));
    assert!(contains(&rows, "  R         Rebase"));
    assert!(contains(&rows, "Bookmark Pane:"));
}

#[test]
fn test_help_panel_scroll_is_clamped() {
    let rows = draw(80, 10, |frame| render_help_panel(frame, frame.area(), u16::MAX));

    // The last line is blank, but the border and title survive
    assert!(contains(&rows, "jjpane - Help"));
    assert!(!contains(&rows, "Key bindings:"));
}
