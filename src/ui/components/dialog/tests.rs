use super::*;
use crate::wizard::Choice;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn items(values: &[&str]) -> Vec<SelectItem> {
    values
        .iter()
        .map(|v| SelectItem {
            label: format!("label {}", v),
            value: v.to_string(),
        })
        .collect()
}

fn render_to_string(dialog: &Dialog) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| dialog.render(frame, frame.area()))
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer.content().iter().map(|c| c.symbol()).collect()
}

#[test]
fn test_confirm_dialog_yes() {
    let dialog = Dialog::confirm("Abandon", "Abandon change qpvuntsm?", None);

    for code in [KeyCode::Char('y'), KeyCode::Char('Y'), KeyCode::Enter] {
        let mut d = dialog.clone();
        assert_eq!(d.handle_key(key(code)), Some(DialogResult::Confirmed(vec![])));
    }
}

#[test]
fn test_confirm_dialog_no() {
    let dialog = Dialog::confirm("Abandon", "Abandon change qpvuntsm?", None);

    for code in [KeyCode::Char('n'), KeyCode::Char('N'), KeyCode::Esc] {
        let mut d = dialog.clone();
        assert_eq!(d.handle_key(key(code)), Some(DialogResult::Cancelled));
    }
}

#[test]
fn test_confirm_dialog_ignores_other_keys() {
    let mut dialog = Dialog::confirm("Push", "Push bookmark main?", None);
    assert_eq!(dialog.handle_key(key(KeyCode::Char('x'))), None);
    assert_eq!(dialog.handle_key(key(KeyCode::Char('j'))), None);
}

#[test]
fn test_select_dialog_moves_and_confirms() {
    let mut dialog = Dialog::select("Rebase", "Rebase what?", items(&["-r", "-s", "-b"]));

    assert_eq!(dialog.handle_key(key(KeyCode::Char('j'))), None);
    assert_eq!(dialog.handle_key(key(KeyCode::Down)), None);
    assert_eq!(dialog.cursor, 2);

    // Stops at the last item
    dialog.handle_key(key(KeyCode::Char('j')));
    assert_eq!(dialog.cursor, 2);

    dialog.handle_key(key(KeyCode::Char('k')));
    assert_eq!(
        dialog.handle_key(key(KeyCode::Enter)),
        Some(DialogResult::Confirmed(vec!["-s".to_string()]))
    );
}

#[test]
fn test_select_dialog_cursor_stops_at_top() {
    let mut dialog = Dialog::select("Rebase", "Rebase what?", items(&["-r", "-s"]));
    dialog.handle_key(key(KeyCode::Up));
    assert_eq!(dialog.cursor, 0);
}

#[test]
fn test_select_dialog_empty_confirm_is_cancelled() {
    let mut dialog = Dialog::select("Push", "Which bookmark?", vec![]);
    assert_eq!(
        dialog.handle_key(key(KeyCode::Enter)),
        Some(DialogResult::Cancelled)
    );
}

#[test]
fn test_select_dialog_cancel() {
    let dialog = Dialog::select("Push", "Which bookmark?", items(&["main"]));

    for code in [KeyCode::Esc, KeyCode::Char('q')] {
        let mut d = dialog.clone();
        assert_eq!(d.handle_key(key(code)), Some(DialogResult::Cancelled));
    }
}

#[test]
fn test_input_dialog_prefilled_submit() {
    let mut dialog = Dialog::input("Describe", "Description:", "fix parser");
    dialog.handle_key(key(KeyCode::Char('s')));
    assert_eq!(
        dialog.handle_key(key(KeyCode::Enter)),
        Some(DialogResult::Confirmed(vec!["fix parsers".to_string()]))
    );
}

#[test]
fn test_input_dialog_backspace_and_cancel() {
    let mut dialog = Dialog::input("Bookmark", "Name:", "mainx");
    assert_eq!(dialog.handle_key(key(KeyCode::Backspace)), None);

    let mut submitted = dialog.clone();
    assert_eq!(
        submitted.handle_key(key(KeyCode::Enter)),
        Some(DialogResult::Confirmed(vec!["main".to_string()]))
    );

    assert_eq!(
        dialog.handle_key(key(KeyCode::Esc)),
        Some(DialogResult::Cancelled)
    );
}

#[test]
fn test_input_dialog_q_is_text() {
    let mut dialog = Dialog::input("Bookmark", "Name:", "");
    assert_eq!(dialog.handle_key(key(KeyCode::Char('q'))), None);
    assert_eq!(
        dialog.handle_key(key(KeyCode::Enter)),
        Some(DialogResult::Confirmed(vec!["q".to_string()]))
    );
}

#[test]
fn test_from_step_select() {
    let dialog = Dialog::from_step(Step::Select {
        title: "Push".to_string(),
        prompt: "What to push?".to_string(),
        choices: vec![Choice {
            label: "All bookmarks".to_string(),
            value: "all".to_string(),
        }],
    });
    assert_eq!(dialog.hint_kind(), DialogHintKind::Select);
    match &dialog.kind {
        DialogKind::Select { items, .. } => {
            assert_eq!(items[0].label, "All bookmarks");
            assert_eq!(items[0].value, "all");
        }
        other => panic!("expected select dialog, got {:?}", other),
    }
}

#[test]
fn test_from_step_input_and_confirm() {
    let input = Dialog::from_step(Step::Input {
        title: "Describe".to_string(),
        prompt: "Description:".to_string(),
        initial: "wip".to_string(),
    });
    assert_eq!(input.hint_kind(), DialogHintKind::Input);

    let confirm = Dialog::from_step(Step::Confirm {
        title: "Abandon".to_string(),
        message: "Abandon change?".to_string(),
        detail: Some("This can be undone with u".to_string()),
    });
    assert_eq!(confirm.hint_kind(), DialogHintKind::Confirm);
}

#[test]
fn test_render_confirm_shows_message_and_detail() {
    let dialog = Dialog::confirm(
        "Push",
        "Run this command?\njj git push --bookmark main",
        Some("Pushes to the remote".to_string()),
    );
    let text = render_to_string(&dialog);
    assert!(text.contains("Run this command?"));
    assert!(text.contains("jj git push --bookmark main"));
    assert!(text.contains("Pushes to the remote"));
    assert!(text.contains("[Y]"));
}

#[test]
fn test_render_select_marks_cursor() {
    let mut dialog = Dialog::select("Rebase", "Rebase what?", items(&["-r", "-s"]));
    dialog.handle_key(key(KeyCode::Char('j')));
    let text = render_to_string(&dialog);
    assert!(text.contains("Rebase what?"));
    assert!(text.contains("> label -s"));
    assert!(text.contains("  label -r"));
}

#[test]
fn test_render_select_keeps_hint_line() {
    let dialog = Dialog::select("Rebase", "Rebase what?", items(&["-r", "-s", "-b"]));
    let text = render_to_string(&dialog);
    assert!(text.contains("label -b"));
    assert!(text.contains("[j/k] Move [Enter] Select [Esc] Cancel"));
}

#[test]
fn test_render_long_select_scrolls_above_hint_line() {
    let values: Vec<String> = (0..30).map(|i| format!("item{i:02}")).collect();
    let refs: Vec<&str> = values.iter().map(String::as_str).collect();
    let mut dialog = Dialog::select("Bookmark", "Which bookmark?", items(&refs));
    for _ in 0..29 {
        dialog.handle_key(key(KeyCode::Char('j')));
    }
    let text = render_to_string(&dialog);
    assert!(text.contains("> label item29"));
    assert!(!text.contains("label item00"));
    assert!(text.contains("[Esc] Cancel"));
}

#[test]
fn test_render_input_shows_prompt_and_value() {
    let dialog = Dialog::input("Bookmark", "Bookmark name:", "feature-x");
    let text = render_to_string(&dialog);
    assert!(text.contains("Bookmark name:"));
    assert!(text.contains("feature-x"));
    assert!(text.contains("[Enter]"));
}
