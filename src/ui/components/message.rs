//! Error and notification message components

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build the error banner line
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

fn notification_style(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Success => ("OK", Color::Green),
        NotificationKind::Info => ("Info", Color::Cyan),
        NotificationKind::Warning => ("Warning", Color::Yellow),
    }
}

/// Build a notification line for the pane's top border
///
/// Only the first line of the message is shown. With `max_width`, long
/// messages are cut and end in "…"; an empty line is returned when not
/// even the label fits.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, color) = notification_style(notification.kind);
    let label = format!(" {} ", label);
    let message = notification.message.lines().next().unwrap_or_default();

    // label + " " + message + " "
    let fixed_width = label.chars().count() + 2;
    let message_width = message.chars().count();

    let shown = match max_width {
        Some(max) if fixed_width + message_width > max => {
            let available = max.saturating_sub(fixed_width + 1);
            if available == 0 {
                return Line::default();
            }
            let truncated: String = message.chars().take(available).collect();
            format!("{}…", truncated)
        }
        _ => message.to_string(),
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Black).bg(color)),
        Span::styled(format!(" {} ", shown), Style::default().fg(color)),
    ])
}
