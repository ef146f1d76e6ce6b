//! Pane - a scrollable buffer of jj output lines
//!
//! Every screen except help is a pane over the raw text jj printed. The
//! pane owns the cursor, scroll offset, `/` search and the input bar; what
//! a line *means* is decided by the caller, typically by running one of the
//! line parsers on [`Pane::current_line`].

mod input;
mod render;

pub use render::style_line;

use crate::jj::Parser;
use crate::model::ChangeId;
use crate::ui::navigation;

/// What kind of text a pane holds; selects line styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneKind {
    Log,
    Status,
    Operation,
    Bookmark,
    /// `jj show`, `jj diff` and `jj op show` output
    Detail,
}

/// Input mode for a pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text search input (for n/N navigation)
    SearchInput,
    /// Revset input (log pane)
    RevsetInput,
    /// Limit input (log pane)
    LimitInput,
}

impl InputMode {
    /// Prompt and block title of the input bar
    pub fn input_bar_meta(self) -> Option<(&'static str, &'static str)> {
        match self {
            InputMode::SearchInput => Some(("Search: ", " / Search ")),
            InputMode::RevsetInput => Some(("Revset: ", " r Revset (empty = default) ")),
            InputMode::LimitInput => Some(("Limit: ", " L Limit (empty = none) ")),
            InputMode::Normal => None,
        }
    }
}

/// Actions a pane can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneAction {
    /// Key consumed by the pane
    None,
    /// Not a pane key; App decides what it means
    Unhandled,
    /// Revset input submitted
    SetRevset(String),
    /// Limit input submitted
    SetLimit(String),
}

/// Pane state
#[derive(Debug)]
pub struct Pane {
    pub kind: PaneKind,
    pub title: String,
    lines: Vec<String>,
    /// Index of the current line
    pub cursor: usize,
    pub scroll_offset: usize,
    pub input_mode: InputMode,
    pub input_buffer: String,
    /// Last search query for n/N navigation
    pub(crate) last_search_query: Option<String>,
    /// Inner height at the last render, for half-page moves
    pub(crate) page_height: usize,
}

impl Pane {
    pub fn new(kind: PaneKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            lines: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            last_search_query: None,
            page_height: 0,
        }
    }

    /// Replace the text, keeping the cursor where it was (clamped)
    ///
    /// Used on refresh so the user stays near the line they were on.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_string).collect();
        self.cursor = self.cursor.min(self.max_index());
    }

    /// Replace the text and move to the top
    pub fn reset_text(&mut self, text: &str) {
        self.set_text(text);
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn current_line(&self) -> Option<&str> {
        self.lines.get(self.cursor).map(String::as_str)
    }

    /// Change ID on the current line
    pub fn current_change_id(&self) -> Option<ChangeId> {
        Parser::extract_change_id(self.current_line())
    }

    pub fn is_input_active(&self) -> bool {
        self.input_mode != InputMode::Normal
    }

    fn max_index(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    pub fn move_down(&mut self) {
        self.cursor = navigation::select_next(self.cursor, self.max_index());
    }

    pub fn move_up(&mut self) {
        self.cursor = navigation::select_prev(self.cursor);
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.cursor = self.max_index();
    }

    pub fn half_page_down(&mut self) {
        self.cursor = navigation::page_down(self.cursor, self.page_height / 2, self.max_index());
    }

    pub fn half_page_up(&mut self) {
        self.cursor = navigation::page_up(self.cursor, self.page_height / 2);
    }

    /// Move to the next line that carries a change ID
    ///
    /// Returns false (cursor unchanged) if there is none below.
    pub fn next_change_line(&mut self) -> bool {
        let found = self
            .lines
            .iter()
            .enumerate()
            .skip(self.cursor + 1)
            .find(|(_, line)| Parser::change_id_span(line).is_some())
            .map(|(idx, _)| idx);
        self.jump_to(found)
    }

    /// Move to the previous line that carries a change ID
    pub fn prev_change_line(&mut self) -> bool {
        let found = self.lines[..self.cursor.min(self.lines.len())]
            .iter()
            .rposition(|line| Parser::change_id_span(line).is_some());
        self.jump_to(found)
    }

    /// Move to the line carrying `change_id`
    pub fn select_change(&mut self, change_id: &ChangeId) -> bool {
        let found = self
            .lines
            .iter()
            .position(|line| Parser::extract_change_id(Some(line)).as_ref() == Some(change_id));
        self.jump_to(found)
    }

    fn jump_to(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(idx) => {
                self.cursor = idx;
                true
            }
            None => false,
        }
    }

    /// Start text search input mode
    pub fn start_search_input(&mut self) {
        self.input_mode = InputMode::SearchInput;
        self.input_buffer.clear();
    }

    /// Start an input mode prefilled with `initial`
    pub fn start_input(&mut self, mode: InputMode, initial: &str) {
        self.input_mode = mode;
        self.input_buffer = initial.to_string();
    }

    /// Cancel input mode
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }
}
