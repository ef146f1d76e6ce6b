//! Block components for UI rendering
//!
//! Common block patterns used across panes.

use ratatui::{
    style::Stylize,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Bordered block with the notification right-aligned in the top border
pub fn bordered_block_with_notification<'a>(
    title: Line<'a>,
    notification: Option<Line<'a>>,
) -> Block<'a> {
    let block = bordered_block(title);
    match notification {
        Some(line) => block.title(line.right_aligned()),
        None => block,
    }
}

/// Centered placeholder for a pane with nothing to show
///
/// The hint, if any, is displayed in gray below the title.
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    Paragraph::new(lines)
}
