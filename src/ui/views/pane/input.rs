//! Input handling and search for Pane

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keys;

use super::{InputMode, Pane, PaneAction};

/// Search direction/mode
#[derive(Clone, Copy)]
enum SearchKind {
    First,
    Next,
    Prev,
}

impl Pane {
    // ─────────────────────────────────────────────────────────────────────────
    // Input handling
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle key event and return action
    ///
    /// Navigation and search keys are handled here; everything else comes
    /// back as [`PaneAction::Unhandled`].
    pub fn handle_key(&mut self, key: KeyEvent) -> PaneAction {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::SearchInput => self.handle_text_input(key, |pane, query| {
                if query.is_empty() {
                    pane.last_search_query = None;
                } else {
                    pane.last_search_query = Some(query);
                    pane.search_first();
                }
                PaneAction::None
            }),
            InputMode::RevsetInput => self.handle_text_input(key, |_, revset| PaneAction::SetRevset(revset)),
            InputMode::LimitInput => self.handle_text_input(key, |_, limit| PaneAction::SetLimit(limit)),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> PaneAction {
        if keys::is_half_page_down(&key) {
            self.half_page_down();
            return PaneAction::None;
        }
        if keys::is_half_page_up(&key) {
            self.half_page_up();
            return PaneAction::None;
        }
        // Ctrl/Alt chords belong to the app
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return PaneAction::Unhandled;
        }

        match key.code {
            k if keys::is_move_down(k) => self.move_down(),
            k if keys::is_move_up(k) => self.move_up(),
            k if k == keys::GO_TOP => self.move_to_top(),
            k if k == keys::GO_BOTTOM => self.move_to_bottom(),
            KeyCode::PageDown => self.half_page_down(),
            KeyCode::PageUp => self.half_page_up(),
            k if k == keys::SEARCH_INPUT => self.start_search_input(),
            k if k == keys::SEARCH_NEXT => {
                self.search_next();
            }
            k if k == keys::SEARCH_PREV => {
                self.search_prev();
            }
            _ => return PaneAction::Unhandled,
        }
        PaneAction::None
    }

    fn handle_text_input<F>(&mut self, key: KeyEvent, on_submit: F) -> PaneAction
    where
        F: FnOnce(&mut Self, String) -> PaneAction,
    {
        match key.code {
            k if k == keys::ESC => {
                self.cancel_input();
                PaneAction::None
            }
            k if k == keys::SUBMIT => {
                let input = std::mem::take(&mut self.input_buffer);
                self.input_mode = InputMode::Normal;
                on_submit(self, input.trim().to_string())
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                PaneAction::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                PaneAction::None
            }
            _ => PaneAction::None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether line `index` matches the active search (case-insensitive)
    pub(crate) fn line_matches(&self, index: usize) -> bool {
        match (&self.last_search_query, self.lines.get(index)) {
            (Some(query), Some(line)) => line.to_lowercase().contains(&query.to_lowercase()),
            _ => false,
        }
    }

    /// Search for first match from the top (used when search is confirmed)
    pub fn search_first(&mut self) -> bool {
        self.search(SearchKind::First)
    }

    /// Search for next match (n key), wrapping around
    pub fn search_next(&mut self) -> bool {
        self.search(SearchKind::Next)
    }

    /// Search for previous match (N key), wrapping around
    pub fn search_prev(&mut self) -> bool {
        self.search(SearchKind::Prev)
    }

    fn search(&mut self, kind: SearchKind) -> bool {
        if self.last_search_query.is_none() || self.lines.is_empty() {
            return false;
        }

        let len = self.lines.len();
        let found = match kind {
            SearchKind::First => self.find_match_in(0..len),
            SearchKind::Next => {
                let forward = self.cursor + 1..len;
                let wrap = 0..self.cursor;
                self.find_match_in(forward).or_else(|| self.find_match_in(wrap))
            }
            SearchKind::Prev => {
                let backward = (0..self.cursor).rev();
                let wrap = (self.cursor + 1..len).rev();
                self.find_match_in(backward).or_else(|| self.find_match_in(wrap))
            }
        };

        if let Some(index) = found {
            self.cursor = index;
            return true;
        }

        false
    }

    fn find_match_in<I>(&self, indices: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        indices.into_iter().find(|&i| self.line_matches(i))
    }
}
