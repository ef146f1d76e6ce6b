//! Help panel widget
//!
//! Lists every key binding from [`crate::keys`], grouped by pane.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Navigation", keys::NAV_KEYS);
    push_section(&mut lines, "Log Pane", keys::LOG_KEYS);
    push_section(&mut lines, "Status Pane", keys::STATUS_KEYS);
    push_section(&mut lines, "Operation Pane", keys::OPERATION_KEYS);
    push_section(&mut lines, "Bookmark Pane", keys::BOOKMARK_KEYS);
    push_section(&mut lines, "Input and Dialogs", keys::INPUT_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:10}", entry.key), Style::default().fg(Color::Yellow)),
            Span::raw(entry.description),
        ]));
    }

    lines.push(Line::from(""));
}

/// Render the help panel
///
/// `scroll` is clamped to the last line so over-scrolling never shows a
/// blank panel.
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" jjpane - Help ").bold().white().centered();

    let lines = build_help_lines();
    let max_scroll = lines.len().saturating_sub(1) as u16;

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll.min(max_scroll), 0)),
        area,
    );
}
