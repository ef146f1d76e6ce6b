//! Input dialog input handling and rendering

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tui_textarea::TextArea;

use super::{Dialog, DialogKind, DialogResult, centered_rect};

impl Dialog {
    pub(super) fn handle_input_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        let DialogKind::Input { textarea, .. } = &mut self.kind else {
            return None;
        };

        match key.code {
            KeyCode::Esc => Some(DialogResult::Cancelled),
            // Single line: Enter submits instead of inserting a newline
            KeyCode::Enter => Some(DialogResult::Confirmed(vec![textarea.lines().join("")])),
            _ => {
                textarea.input(key);
                None
            }
        }
    }

    pub(super) fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        prompt: &str,
        textarea: &TextArea<'static>,
    ) {
        let width = (prompt.chars().count() as u16 + 6)
            .clamp(50, 72)
            .min(area.width.saturating_sub(4));
        let height = 8u16.min(area.height.saturating_sub(2));

        let dialog_area = centered_rect(width, height, area);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let [_, prompt_area, field_area, _, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(format!(" {}", prompt)), prompt_area);

        let [_, field_area] =
            Layout::horizontal([Constraint::Length(1), Constraint::Min(1)]).areas(field_area);
        frame.render_widget(textarea, field_area);

        let hint = Line::from(vec![
            Span::raw(" "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Submit "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]);
        frame.render_widget(Paragraph::new(hint), hint_area);
    }
}
