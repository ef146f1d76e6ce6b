//! Shared navigation helpers for line-based panes
//!
//! Pure functions that compute new cursor/scroll state without side effects.
//! Panes call these with their own state and apply the results.

/// Move selection down by one, clamped to max_index.
///
/// Returns the new selected index.
pub fn select_next(selected: usize, max_index: usize) -> usize {
    selected.saturating_add(1).min(max_index)
}

/// Move selection up by one.
///
/// Returns the new selected index.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Move selection down by `page` lines, clamped to max_index.
pub fn page_down(selected: usize, page: usize, max_index: usize) -> usize {
    selected.saturating_add(page.max(1)).min(max_index)
}

/// Move selection up by `page` lines.
pub fn page_up(selected: usize, page: usize) -> usize {
    selected.saturating_sub(page.max(1))
}

/// Calculate scroll offset to keep `selected` visible within `visible_count` rows.
///
/// If `visible_count` is 0, returns `scroll_offset` unchanged (no-op).
/// Usable at both input time and render time.
pub fn adjust_scroll(selected: usize, scroll_offset: usize, visible_count: usize) -> usize {
    if visible_count == 0 {
        return scroll_offset;
    }
    if selected < scroll_offset {
        selected
    } else if selected >= scroll_offset + visible_count {
        selected - visible_count + 1
    } else {
        scroll_offset
    }
}
