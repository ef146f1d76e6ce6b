//! Error banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::ui::components;

/// Render an error message just above the status bar
pub fn render_error_banner(frame: &mut Frame, error: &str) {
    let area = frame.area();
    if area.height < 4 {
        return;
    }
    let error_area = Rect {
        x: area.x + 2,
        y: area.y + area.height - 3,
        width: area.width.saturating_sub(4),
        height: 1,
    };

    // Only the first line fits; jj errors often carry hints below it
    let first_line = error.lines().next().unwrap_or_default();
    let error_line = components::build_error_line(first_line);
    frame.render_widget(Paragraph::new(error_line), error_area);
}
