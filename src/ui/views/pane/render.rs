//! Rendering for Pane

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::jj::Parser;
use crate::model::{FileState, Notification};
use crate::ui::{components, navigation, theme};

use super::{Pane, PaneKind};

const EMPTY_TEXT: &str = "(no output)";

impl Pane {
    /// Render the pane with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let (pane_area, input_area) = if self.input_mode.input_bar_meta().is_some() {
            let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        self.render_lines(frame, pane_area, notification);

        if let Some(input_area) = input_area {
            self.render_input_bar(frame, input_area);
        }
    }

    fn render_lines(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = self.build_title();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        if self.lines.is_empty() {
            let paragraph = components::empty_state(EMPTY_TEXT, self.empty_hint()).block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        self.page_height = inner_height;
        if inner_height == 0 {
            return;
        }
        self.scroll_offset = navigation::adjust_scroll(self.cursor, self.scroll_offset, inner_height);

        let lines: Vec<Line> = self
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner_height)
            .map(|(idx, text)| {
                let line = style_line(self.kind, text);
                if idx == self.cursor {
                    line.style(
                        Style::default()
                            .fg(theme::selection::FG)
                            .bg(theme::selection::BG)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if self.line_matches(idx) {
                    line.patch_style(Style::default().add_modifier(Modifier::UNDERLINED))
                } else {
                    line
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn empty_hint(&self) -> Option<&'static str> {
        (self.kind == PaneKind::Log).then_some("Hint: press r to change the revset")
    }

    fn build_title(&self) -> Line<'static> {
        let title_text = match &self.last_search_query {
            Some(query) => format!(" {} [Search: {}] ", self.title, query),
            None => format!(" {} ", self.title),
        };
        Line::from(title_text).bold().cyan().centered()
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        let Some((prompt, title)) = self.input_mode.input_bar_meta() else {
            return;
        };

        let input_text = format!("{}{}", prompt, self.input_buffer);

        let available_width = area.width.saturating_sub(2) as usize;
        if available_width == 0 {
            return;
        }

        // Show the end of long input (UTF-8 safe)
        let char_count = input_text.chars().count();
        let display_text = if char_count > available_width {
            let skip = char_count.saturating_sub(available_width.saturating_sub(1));
            format!("…{}", input_text.chars().skip(skip).collect::<String>())
        } else {
            input_text
        };

        let paragraph =
            Paragraph::new(display_text).block(components::bordered_block(Line::from(title)));
        frame.render_widget(paragraph, area);

        let cursor_pos = char_count.min(available_width);
        frame.set_cursor_position((area.x + cursor_pos as u16 + 1, area.y + 1));
    }
}

/// Style one line of jj output according to the pane kind
pub fn style_line(kind: PaneKind, text: &str) -> Line<'static> {
    match kind {
        PaneKind::Log => log_line(text),
        PaneKind::Status => status_line(text),
        PaneKind::Operation => operation_line(text),
        PaneKind::Bookmark => bookmark_line(text),
        PaneKind::Detail => detail_line(text),
    }
}

/// Graph prefix in gray with `@` highlighted
fn graph_spans(prefix: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, part) in prefix.split('@').enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                "@",
                Style::default()
                    .fg(theme::log_pane::WORKING_COPY_MARKER)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if !part.is_empty() {
            spans.push(Span::styled(part.to_string(), Style::default().fg(theme::log_pane::GRAPH)));
        }
    }
    spans
}

fn log_line(text: &str) -> Line<'static> {
    if let Some(span) = Parser::change_id_span(text) {
        let mut spans = graph_spans(&text[..span.start]);
        spans.push(Span::styled(
            text[span.clone()].to_string(),
            Style::default()
                .fg(theme::log_pane::CHANGE_ID)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(text[span.end..].to_string()));
        return Line::from(spans);
    }

    // Continuation lines: graph columns, then the description
    let split = text
        .find(|c: char| c.is_alphanumeric() || c == '(')
        .unwrap_or(text.len());
    let mut spans = graph_spans(&text[..split]);
    if split < text.len() {
        spans.push(Span::styled(
            text[split..].to_string(),
            Style::default().fg(theme::log_pane::DETAIL),
        ));
    }
    Line::from(spans)
}

fn status_line(text: &str) -> Line<'static> {
    if let Some(file) = Parser::parse_status_line(text) {
        let color = match file.state {
            FileState::Added | FileState::Copied { .. } => theme::status::ADDED,
            FileState::Modified => theme::status::MODIFIED,
            FileState::Deleted => theme::status::DELETED,
            FileState::Renamed { .. } => theme::status::RENAMED,
        };
        return Line::from(Span::styled(text.to_string(), Style::default().fg(color)));
    }
    if text.trim_end().ends_with(':') {
        return Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(theme::status::HEADING),
        ));
    }
    Line::from(text.to_string())
}

fn operation_line(text: &str) -> Line<'static> {
    let Some(op_id) = Parser::extract_operation_id(text) else {
        return Line::from(text.to_string());
    };
    let Some(start) = text.find(&op_id) else {
        return Line::from(text.to_string());
    };
    let end = start + op_id.len();
    let mut spans = graph_spans(&text[..start]);
    spans.push(Span::styled(
        op_id,
        Style::default()
            .fg(theme::listing::OPERATION_ID)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(text[end..].to_string()));
    Line::from(spans)
}

fn bookmark_line(text: &str) -> Line<'static> {
    if text.starts_with(char::is_whitespace) {
        return Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(theme::listing::REMOTE),
        ));
    }
    let (name, rest) = match text.find(':') {
        Some(idx) => text.split_at(idx),
        None => (text, ""),
    };
    Line::from(vec![
        Span::styled(
            name.to_string(),
            Style::default().fg(theme::listing::BOOKMARK),
        ),
        Span::raw(rest.to_string()),
    ])
}

const FILE_HEADER_PREFIXES: &[&str] = &[
    "Added ",
    "Modified ",
    "Removed ",
    "Deleted ",
    "Renamed ",
    "Copied ",
];

fn detail_line(text: &str) -> Line<'static> {
    let style = if text.starts_with("diff --git")
        || text.starts_with("+++")
        || text.starts_with("---")
        || (text.ends_with(':') && FILE_HEADER_PREFIXES.iter().any(|p| text.starts_with(p)))
    {
        Style::default()
            .fg(theme::diff::FILE_HEADER)
            .add_modifier(Modifier::BOLD)
    } else if text.starts_with("@@") {
        Style::default().fg(theme::diff::HUNK_HEADER)
    } else if text.starts_with('+') {
        Style::default().fg(theme::diff::ADDED)
    } else if text.starts_with('-') {
        Style::default().fg(theme::diff::REMOVED)
    } else {
        Style::default()
    };
    Line::from(Span::styled(text.to_string(), style))
}
