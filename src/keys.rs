//! Keybinding definitions for jjpane
//!
//! All keybindings are defined here; the help pane and the status bar are
//! generated from the tables at the bottom of this file.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
}

/// Ctrl+C (quit from anywhere)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'c')
}

/// Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'l')
}

/// Ctrl+R (redo)
pub fn is_redo_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'r')
}

/// Ctrl+D (half page down)
pub fn is_half_page_down(key: &KeyEvent) -> bool {
    is_ctrl(key, 'd')
}

/// Ctrl+U (half page up)
pub fn is_half_page_up(key: &KeyEvent) -> bool {
    is_ctrl(key, 'u')
}

// =============================================================================
// Global keys (available in all panes)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Cycle panes
pub const TAB: KeyCode = KeyCode::Tab;

/// Back to previous pane
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;
pub const GO_TOP: KeyCode = KeyCode::Char('g');
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

/// Open text search input (for n/N navigation)
pub const SEARCH_INPUT: KeyCode = KeyCode::Char('/');

/// Next search result
pub const SEARCH_NEXT: KeyCode = KeyCode::Char('n');

/// Previous search result
pub const SEARCH_PREV: KeyCode = KeyCode::Char('N');

// =============================================================================
// Input keys (used in the input bar)
// =============================================================================

/// Submit input (Enter in input mode)
pub const SUBMIT: KeyCode = KeyCode::Enter;

// =============================================================================
// Log pane keys
// =============================================================================

/// Show the change on the current line (jj show)
pub const SHOW: KeyCode = KeyCode::Enter;

/// Diff of the change on the current line (jj diff -r)
pub const DIFF: KeyCode = KeyCode::Char('D');

/// One-line describe
pub const DESCRIBE: KeyCode = KeyCode::Char('d');

/// Describe in the external editor
pub const DESCRIBE_EDITOR: KeyCode = KeyCode::Char('E');

/// Edit (set working-copy to the change)
pub const EDIT: KeyCode = KeyCode::Char('e');

/// Create new change
pub const NEW_CHANGE: KeyCode = KeyCode::Char('c');

pub const SQUASH: KeyCode = KeyCode::Char('S');
pub const REBASE: KeyCode = KeyCode::Char('R');
pub const ABANDON: KeyCode = KeyCode::Char('A');

/// Split change (opens the diff editor)
pub const SPLIT: KeyCode = KeyCode::Char('x');

pub const BOOKMARK: KeyCode = KeyCode::Char('b');

/// Push to remote (uppercase for remote ops)
pub const PUSH: KeyCode = KeyCode::Char('P');

/// Fetch from remote (uppercase for remote ops)
pub const FETCH: KeyCode = KeyCode::Char('F');

pub const UNDO: KeyCode = KeyCode::Char('u');

// Note: Redo is Ctrl+R, see is_redo_key

/// Revset filter input
pub const REVSET_INPUT: KeyCode = KeyCode::Char('r');

/// Log limit input
pub const LIMIT_INPUT: KeyCode = KeyCode::Char('L');

pub const TOGGLE_GRAPH: KeyCode = KeyCode::Char('v');
pub const TOGGLE_REVERSE: KeyCode = KeyCode::Char('V');

/// Jump to the next line carrying a change ID
pub const NEXT_CHANGE: KeyCode = KeyCode::Char(']');

/// Jump to the previous line carrying a change ID
pub const PREV_CHANGE: KeyCode = KeyCode::Char('[');

// =============================================================================
// Pane switching keys (Log pane)
// =============================================================================

pub const STATUS_PANE: KeyCode = KeyCode::Char('s');
pub const OPERATION_PANE: KeyCode = KeyCode::Char('o');
pub const BOOKMARK_PANE: KeyCode = KeyCode::Char('M');

// =============================================================================
// Other pane keys
// =============================================================================

/// Status pane: diff of the file on the current line
pub const FILE_DIFF: KeyCode = KeyCode::Enter;

/// Op log pane: jj op show
pub const OP_SHOW: KeyCode = KeyCode::Enter;

/// Op log pane: restore to the operation on the current line
pub const OP_RESTORE: KeyCode = KeyCode::Char('R');

/// Bookmark pane: jump to the bookmark's change in the log
pub const BOOKMARK_JUMP: KeyCode = KeyCode::Enter;

/// Bookmark pane: delete local bookmark
pub const BOOKMARK_DELETE: KeyCode = KeyCode::Char('D');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

const fn entry(key: &'static str, description: &'static str) -> KeyBindEntry {
    KeyBindEntry { key, description }
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    entry("q", "Quit / Back"),
    entry("Esc", "Back to previous pane"),
    entry("?", "Help"),
    entry("Tab", "Cycle panes"),
    entry("Ctrl+c", "Quit"),
    entry("Ctrl+l", "Refresh"),
];

/// Navigation key bindings for help display
pub const NAV_KEYS: &[KeyBindEntry] = &[
    entry("j/k", "Move down/up"),
    entry("g/G", "Go to top/bottom"),
    entry("Ctrl+d/u", "Half page down/up"),
    entry("/", "Search"),
    entry("n/N", "Next/prev match"),
];

/// Log pane key bindings for help display
pub const LOG_KEYS: &[KeyBindEntry] = &[
    entry("Enter", "Show change"),
    entry("D", "Diff of change"),
    entry("d", "Describe (opens editor for multi-line)"),
    entry("E", "Describe in editor"),
    entry("e", "Edit change"),
    entry("c", "New change"),
    entry("S", "Squash"),
    entry("R", "Rebase"),
    entry("A", "Abandon"),
    entry("x", "Split"),
    entry("b", "Bookmark"),
    entry("P", "Git push"),
    entry("F", "Git fetch"),
    entry("u", "Undo"),
    entry("Ctrl+r", "Redo"),
    entry("r", "Revset filter"),
    entry("L", "Limit"),
    entry("v", "Toggle graph"),
    entry("V", "Toggle reversed order"),
    entry("]/[", "Next/prev change line"),
    entry("s", "Status pane"),
    entry("o", "Operation log pane"),
    entry("M", "Bookmark pane"),
];

/// Status pane key bindings for help display
pub const STATUS_KEYS: &[KeyBindEntry] = &[entry("Enter", "Show file diff")];

/// Operation log pane key bindings for help display
pub const OPERATION_KEYS: &[KeyBindEntry] = &[
    entry("Enter", "Show operation"),
    entry("R", "Restore to operation"),
];

/// Bookmark pane key bindings for help display
pub const BOOKMARK_KEYS: &[KeyBindEntry] = &[
    entry("Enter", "Jump to bookmark in log"),
    entry("D", "Delete bookmark"),
];

/// Input bar and dialog key bindings
pub const INPUT_KEYS: &[KeyBindEntry] = &[
    entry("Enter", "Submit / Select"),
    entry("Esc", "Cancel"),
    entry("y/n", "Answer confirmation"),
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

const fn hint(key: &'static str, label: &'static str, color: Color) -> KeyHint {
    KeyHint { key, label, color }
}

pub const HINT_HELP: KeyHint = hint("?", "Help", Color::Cyan);
pub const HINT_SHOW: KeyHint = hint("Enter", "Show", Color::Green);
pub const HINT_DESC: KeyHint = hint("d", "Desc", Color::Green);
pub const HINT_EDIT: KeyHint = hint("e", "Edit", Color::Yellow);
pub const HINT_NEW: KeyHint = hint("c", "New", Color::Magenta);
pub const HINT_SQUASH: KeyHint = hint("S", "Squash", Color::Red);
pub const HINT_REBASE: KeyHint = hint("R", "Rebase", Color::Yellow);
pub const HINT_ABANDON: KeyHint = hint("A", "Abandon", Color::Red);
pub const HINT_BOOKMARK: KeyHint = hint("b", "Bookmark", Color::Cyan);
pub const HINT_PUSH: KeyHint = hint("P", "Push", Color::Blue);
pub const HINT_FETCH: KeyHint = hint("F", "Fetch", Color::Blue);
pub const HINT_UNDO: KeyHint = hint("u", "Undo", Color::Green);
pub const HINT_REVSET: KeyHint = hint("r", "Revset", Color::Magenta);
pub const HINT_SEARCH: KeyHint = hint("/", "Search", Color::Magenta);
pub const HINT_REFRESH: KeyHint = hint("^L", "Refresh", Color::Blue);
pub const HINT_SWITCH: KeyHint = hint("Tab", "Switch", Color::Blue);
pub const HINT_QUIT: KeyHint = hint("q", "Quit", Color::Red);
pub const HINT_BACK: KeyHint = hint("q", "Back", Color::Red);
pub const HINT_DIFF: KeyHint = hint("Enter", "Diff", Color::Green);
pub const HINT_OP_SHOW: KeyHint = hint("Enter", "Show", Color::Green);
pub const HINT_RESTORE: KeyHint = hint("R", "Restore", Color::Yellow);
pub const HINT_JUMP: KeyHint = hint("Enter", "Jump", Color::Green);
pub const HINT_DEL_BKM: KeyHint = hint("D", "Delete", Color::Red);
pub const HINT_SCROLL: KeyHint = hint("j/k", "Scroll", Color::Cyan);
// Input bar and dialog hints
pub const HINT_NAV: KeyHint = hint("j/k", "Navigate", Color::Blue);
pub const HINT_SUBMIT: KeyHint = hint("Enter", "Confirm", Color::Green);
pub const HINT_SELECT: KeyHint = hint("Enter", "Select", Color::Green);
pub const HINT_CANCEL: KeyHint = hint("Esc", "Cancel", Color::Red);
pub const HINT_YES: KeyHint = hint("y/Enter", "Yes", Color::Green);
pub const HINT_NO: KeyHint = hint("n/Esc", "No", Color::Red);

/// Dialog kind for hint selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogHintKind {
    /// y/n confirmation
    Confirm,
    /// Single-select list
    Select,
    /// Text input
    Input,
}

/// Get the hints for the bottom bar.
///
/// Priority: dialog > input bar > pane.
pub fn current_hints(view: View, dialog: Option<DialogHintKind>, input_active: bool) -> Vec<KeyHint> {
    if let Some(kind) = dialog {
        return match kind {
            DialogHintKind::Confirm => vec![HINT_YES, HINT_NO],
            DialogHintKind::Select => vec![HINT_NAV, HINT_SELECT, HINT_CANCEL],
            DialogHintKind::Input => vec![HINT_SUBMIT, HINT_CANCEL],
        };
    }
    if input_active {
        return vec![HINT_SUBMIT, HINT_CANCEL];
    }
    match view {
        View::Log => vec![
            HINT_HELP,
            HINT_SHOW,
            HINT_DESC,
            HINT_EDIT,
            HINT_NEW,
            HINT_SQUASH,
            HINT_REBASE,
            HINT_ABANDON,
            HINT_BOOKMARK,
            HINT_PUSH,
            HINT_FETCH,
            HINT_UNDO,
            HINT_REVSET,
            HINT_SEARCH,
            HINT_REFRESH,
            HINT_SWITCH,
            HINT_QUIT,
        ],
        View::Status => vec![HINT_HELP, HINT_DIFF, HINT_SEARCH, HINT_REFRESH, HINT_SWITCH, HINT_BACK],
        View::Operation => vec![
            HINT_HELP,
            HINT_OP_SHOW,
            HINT_RESTORE,
            HINT_UNDO,
            HINT_REFRESH,
            HINT_SWITCH,
            HINT_BACK,
        ],
        View::Bookmark => vec![
            HINT_HELP,
            HINT_JUMP,
            HINT_DEL_BKM,
            HINT_UNDO,
            HINT_REFRESH,
            HINT_SWITCH,
            HINT_BACK,
        ],
        View::Detail => vec![HINT_SCROLL, HINT_SEARCH, HINT_REFRESH, HINT_BACK],
        View::Help => vec![HINT_SCROLL, HINT_BACK],
    }
}
