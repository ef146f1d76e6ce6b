//! Rendering tests for text panes

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jjpane::model::Notification;
use jjpane::ui::views::{InputMode, Pane, PaneKind};

use crate::screen::{contains, draw, row_of};

const LOG_TEXT: &str = "\
@  qpvuntsm test.user@example.com 2025-01-15 10:30:00 1b2c3d4e
│  Add login form
○  rlvkpnrz test.user@example.com 2025-01-15 10:00:00 main 7a3c1e02
│  Initial commit
◆  zzzzzzzz root() 00000000
";

fn log_pane() -> Pane {
    let mut pane = Pane::new(PaneKind::Log, "Log");
    pane.set_text(LOG_TEXT);
    pane
}

#[test]
fn test_empty_log_pane_shows_hint() {
    let mut pane = Pane::new(PaneKind::Log, "Log");
    let rows = draw(80, 12, |frame| pane.render(frame, frame.area(), None));

    assert!(contains(&rows, " Log "));
    assert!(contains(&rows, "(no output)"));
    assert!(contains(&rows, "press r to change the revset"));
}

#[test]
fn test_empty_status_pane_has_no_revset_hint() {
    let mut pane = Pane::new(PaneKind::Status, "Status");
    let rows = draw(60, 8, |frame| pane.render(frame, frame.area(), None));

    assert!(contains(&rows, "(no output)"));
    assert!(!contains(&rows, "revset"));
}

#[test]
fn test_log_text_is_shown_verbatim() {
    let mut pane = log_pane();
    let rows = draw(80, 12, |frame| pane.render(frame, frame.area(), None));

    assert!(contains(&rows, "@  qpvuntsm test.user@example.com"));
    assert!(contains(&rows, "│  Add login form"));
    assert!(contains(&rows, "◆  zzzzzzzz root() 00000000"));
}

#[test]
fn test_scroll_follows_cursor() {
    let mut pane = log_pane();
    pane.move_to_bottom();
    // Two inner rows: only the last two lines fit
    let rows = draw(80, 4, |frame| pane.render(frame, frame.area(), None));

    assert!(contains(&rows, "root()"));
    assert!(!contains(&rows, "qpvuntsm"));
}

#[test]
fn test_notification_in_title_bar() {
    let mut pane = log_pane();
    let notification = Notification::success("Refreshed");
    let rows = draw(80, 12, |frame| {
        pane.render(frame, frame.area(), Some(&notification));
    });

    assert_eq!(row_of(&rows, "Refreshed"), Some(0));
}

#[test]
fn test_search_query_in_title() {
    let mut pane = log_pane();
    pane.handle_key(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE));
    for c in "login".chars() {
        pane.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    pane.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(pane.cursor, 1);
    let rows = draw(80, 12, |frame| pane.render(frame, frame.area(), None));

    assert!(contains(&rows, "[Search: login]"));
}

#[test]
fn test_revset_input_bar_below_pane() {
    let mut pane = log_pane();
    pane.start_input(InputMode::RevsetInput, "trunk()..@");
    let rows = draw(80, 12, |frame| pane.render(frame, frame.area(), None));

    let bar = row_of(&rows, "Revset: trunk()..@").unwrap();
    assert!(bar >= 9, "input bar should sit at the bottom, found row {bar}");
    assert!(contains(&rows, "r Revset (empty = default)"));
}
