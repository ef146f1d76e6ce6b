//! Dialog components for wizard steps
//!
//! Every wizard [`Step`] is shown as one of these dialogs:
//! - Confirm dialog: Yes/No confirmation
//! - Select dialog: pick one item from a list
//! - Input dialog: one line of text, prefilled

mod confirm;
mod input;
mod select;
#[cfg(test)]
mod tests;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use tui_textarea::{CursorMove, TextArea};

use crate::keys::{self, DialogHintKind};
use crate::wizard::Step;

/// Selection item for Select dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    /// Display label
    pub label: String,
    /// Internal value (returned on confirm)
    pub value: String,
}

/// Dialog kind and content
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// Simple Yes/No confirmation
    Confirm {
        title: String,
        message: String,
        /// Optional detail text (warning, etc.)
        detail: Option<String>,
    },
    /// Single selection list
    Select {
        title: String,
        message: String,
        items: Vec<SelectItem>,
    },
    /// One-line text input
    Input {
        title: String,
        prompt: String,
        textarea: TextArea<'static>,
    },
}

/// Dialog result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// Confirmed with the answer (empty for Confirm dialog)
    Confirmed(Vec<String>),
    /// Cancelled
    Cancelled,
}

/// Dialog state
#[derive(Debug, Clone)]
pub struct Dialog {
    /// Dialog kind and content
    pub kind: DialogKind,
    /// Cursor position (for Select dialog)
    pub cursor: usize,
}

impl Dialog {
    /// Create a new Confirm dialog
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: Option<String>,
    ) -> Self {
        Self {
            kind: DialogKind::Confirm {
                title: title.into(),
                message: message.into(),
                detail,
            },
            cursor: 0,
        }
    }

    /// Create a new Select dialog
    pub fn select(
        title: impl Into<String>,
        message: impl Into<String>,
        items: Vec<SelectItem>,
    ) -> Self {
        Self {
            kind: DialogKind::Select {
                title: title.into(),
                message: message.into(),
                items,
            },
            cursor: 0,
        }
    }

    /// Create a new Input dialog with the cursor at the end of `initial`
    pub fn input(title: impl Into<String>, prompt: impl Into<String>, initial: &str) -> Self {
        let mut textarea = TextArea::new(vec![initial.to_string()]);
        textarea.move_cursor(CursorMove::End);
        Self {
            kind: DialogKind::Input {
                title: title.into(),
                prompt: prompt.into(),
                textarea,
            },
            cursor: 0,
        }
    }

    /// Dialog for a wizard step
    pub fn from_step(step: Step) -> Self {
        match step {
            Step::Select {
                title,
                prompt,
                choices,
            } => {
                let items = choices
                    .into_iter()
                    .map(|c| SelectItem {
                        label: c.label,
                        value: c.value,
                    })
                    .collect();
                Self::select(title, prompt, items)
            }
            Step::Input {
                title,
                prompt,
                initial,
            } => Self::input(title, prompt, &initial),
            Step::Confirm {
                title,
                message,
                detail,
            } => Self::confirm(title, message, detail),
        }
    }

    pub fn hint_kind(&self) -> DialogHintKind {
        match self.kind {
            DialogKind::Confirm { .. } => DialogHintKind::Confirm,
            DialogKind::Select { .. } => DialogHintKind::Select,
            DialogKind::Input { .. } => DialogHintKind::Input,
        }
    }

    /// Handle key input, returns Some(result) when dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        match self.kind {
            DialogKind::Confirm { .. } => self.handle_confirm_key(key),
            DialogKind::Select { .. } => self.handle_select_key(key),
            DialogKind::Input { .. } => self.handle_input_key(key),
        }
    }

    /// Render the dialog centered on screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.kind {
            DialogKind::Confirm {
                title,
                message,
                detail,
            } => self.render_confirm(frame, area, title, message, detail.as_deref()),
            DialogKind::Select {
                title,
                message,
                items,
            } => self.render_select(frame, area, title, message, items),
            DialogKind::Input {
                title,
                prompt,
                textarea,
            } => self.render_input(frame, area, title, prompt, textarea),
        }
    }
}

/// Calculate a centered rectangle within the given area
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let vertical_layout = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .split(vertical_layout[1]);

    horizontal_layout[1]
}
