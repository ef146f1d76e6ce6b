//! Whole-screen rendering of App without a repository

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jjpane::app::{App, Session, View};
use jjpane::config::Config;
use jjpane::jj::JjExecutor;

use crate::screen::{contains, draw, row_of};

fn app() -> App {
    let jj = JjExecutor::with_repo_path(PathBuf::from("/nonexistent/jjpane-ui-test"));
    App::new(Session::new(jj, Config::default()))
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_failed_log_shows_error_banner() {
    let mut app = app();
    assert!(app.error_message.is_some());

    let rows = draw(100, 20, |frame| app.render(frame));

    assert_eq!(row_of(&rows, "jj log failed"), Some(17));
    assert!(contains(&rows, "(no output)"));
}

#[test]
fn test_status_bar_shows_log_hints() {
    let mut app = app();
    let rows = draw(120, 20, |frame| app.render(frame));

    let last = rows.last().unwrap();
    assert!(last.contains("[?] Help"));
    assert!(last.contains("[R] Rebase"));
}

#[test]
fn test_help_view_replaces_pane() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.current_view, View::Help);

    let rows = draw(80, 30, |frame| app.render(frame));

    assert!(contains(&rows, "jjpane - Help"));
    assert!(!contains(&rows, "(no output)"));
    assert!(rows.last().unwrap().contains("[q] Back"));
}

#[test]
fn test_input_bar_switches_hints() {
    let mut app = app();
    press(&mut app, KeyCode::Char('r'));

    let rows = draw(80, 20, |frame| app.render(frame));

    let last = rows.last().unwrap();
    assert!(last.contains("[Enter] Confirm"));
    assert!(last.contains("[Esc] Cancel"));
    assert!(contains(&rows, "Revset: "));
}
