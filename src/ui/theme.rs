//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the log pane
pub mod log_pane {
    use super::*;

    /// Working copy marker (`@`) color
    pub const WORKING_COPY_MARKER: Color = Color::Green;
    /// Graph characters color
    pub const GRAPH: Color = Color::DarkGray;
    /// Change ID color
    pub const CHANGE_ID: Color = Color::Magenta;
    /// Description / continuation line color
    pub const DETAIL: Color = Color::Reset;
}

/// Colors for diff and show output
pub mod diff {
    use super::*;

    pub const ADDED: Color = Color::Green;
    pub const REMOVED: Color = Color::Red;
    pub const HUNK_HEADER: Color = Color::Cyan;
    /// `Modified regular file ...:` and `diff --git` lines
    pub const FILE_HEADER: Color = Color::Yellow;
}

/// Colors for the status pane
pub mod status {
    use super::*;

    pub const ADDED: Color = Color::Green;
    pub const MODIFIED: Color = Color::Yellow;
    pub const DELETED: Color = Color::Red;
    pub const RENAMED: Color = Color::Cyan;
    /// Section headings ("Working copy changes:")
    pub const HEADING: Color = Color::Blue;
}

/// Colors for the operation log and bookmark panes
pub mod listing {
    use super::*;

    pub const OPERATION_ID: Color = Color::Blue;
    pub const BOOKMARK: Color = Color::Cyan;
    pub const REMOTE: Color = Color::DarkGray;
}

/// Selected line
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}
