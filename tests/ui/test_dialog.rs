//! Rendering tests for wizard dialogs

use jjpane::ui::components::{Dialog, SelectItem};

use crate::screen::{contains, draw, row_of};

fn item(label: &str, value: &str) -> SelectItem {
    SelectItem {
        label: label.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn test_confirm_dialog() {
    let dialog = Dialog::confirm(
        "Abandon",
        "Abandon change qpvuntsm?",
        Some("Descendants will be rebased onto its parent".to_string()),
    );
    let rows = draw(80, 24, |frame| dialog.render(frame, frame.area()));

    assert!(contains(&rows, "Abandon change qpvuntsm?"));
    assert!(contains(&rows, "Descendants will be rebased"));
    assert!(contains(&rows, "[Y]es"));
    assert!(contains(&rows, "[N]o"));
}

#[test]
fn test_select_dialog_marks_cursor() {
    let mut dialog = Dialog::select(
        "Rebase",
        "What to move",
        vec![
            item("-r  only this change", "-r"),
            item("-s  this change and descendants", "-s"),
            item("-b  the whole branch", "-b"),
        ],
    );
    dialog.cursor = 1;
    let rows = draw(80, 24, |frame| dialog.render(frame, frame.area()));

    assert!(contains(&rows, "What to move"));
    assert!(contains(&rows, "> -s  this change and descendants"));
    assert!(!contains(&rows, "> -r"));
    assert!(contains(&rows, "[Enter] Select"));
}

#[test]
fn test_input_dialog_shows_prefill() {
    let dialog = Dialog::input("Describe", "Description for qpvuntsm", "Add login form");
    let rows = draw(80, 24, |frame| dialog.render(frame, frame.area()));

    let prompt = row_of(&rows, "Description for qpvuntsm").unwrap();
    let field = row_of(&rows, "Add login form").unwrap();
    assert!(field > prompt);
    assert!(contains(&rows, "[Enter] Submit"));
}

#[test]
fn test_dialog_in_small_terminal_does_not_panic() {
    let dialog = Dialog::confirm("Push", "Push bookmark main to origin?", None);
    let rows = draw(20, 5, |frame| dialog.render(frame, frame.area()));
    assert_eq!(rows.len(), 5);
}
