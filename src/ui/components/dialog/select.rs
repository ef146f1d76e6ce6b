//! Select dialog input handling and rendering

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{Dialog, DialogKind, DialogResult, SelectItem, centered_rect, keys};
use crate::ui::navigation;

/// Rows besides the items: borders, blank + message + blank, blank + hint
const CHROME_ROWS: u16 = 7;

impl Dialog {
    pub(super) fn handle_select_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        let DialogKind::Select { items, .. } = &self.kind else {
            return None;
        };

        match key.code {
            k if keys::is_move_down(k) => {
                self.cursor = navigation::select_next(self.cursor, items.len().saturating_sub(1));
                None
            }
            k if keys::is_move_up(k) => {
                self.cursor = navigation::select_prev(self.cursor);
                None
            }
            KeyCode::Enter => match items.get(self.cursor) {
                Some(item) => Some(DialogResult::Confirmed(vec![item.value.clone()])),
                None => Some(DialogResult::Cancelled),
            },
            KeyCode::Esc | KeyCode::Char('q') => Some(DialogResult::Cancelled),
            _ => None,
        }
    }

    pub(super) fn render_select(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        message: &str,
        items: &[SelectItem],
    ) {
        let longest = items
            .iter()
            .map(|i| i.label.chars().count())
            .chain(std::iter::once(message.chars().count()))
            .max()
            .unwrap_or(0) as u16;
        let width = (longest + 8).clamp(40, 72).min(area.width.saturating_sub(4));
        let height = (items.len() as u16 + CHROME_ROWS).min(area.height.saturating_sub(2));

        let dialog_area = centered_rect(width, height, area);
        frame.render_widget(Clear, dialog_area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default())),
            Line::from(""),
        ];

        // Keep the cursor row inside the visible item rows
        let visible_items = height.saturating_sub(CHROME_ROWS) as usize;
        let offset = navigation::adjust_scroll(self.cursor, 0, visible_items);

        for (i, item) in items.iter().enumerate().skip(offset).take(visible_items.max(1)) {
            let (marker, style) = if i == self.cursor {
                (
                    "> ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default())
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, item.label),
                style,
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[j/k]", Style::default().fg(Color::Cyan)),
            Span::raw(" Move "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Select "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, dialog_area);
    }
}
