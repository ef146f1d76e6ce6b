//! File status model for `jj status`

/// State of a file in the working copy, by the letter jj prints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileState {
    Added,
    Modified,
    Deleted,
    Renamed { from: String },
    Copied { from: String },
}

impl FileState {
    pub fn letter(&self) -> char {
        match self {
            FileState::Added => 'A',
            FileState::Modified => 'M',
            FileState::Deleted => 'D',
            FileState::Renamed { .. } => 'R',
            FileState::Copied { .. } => 'C',
        }
    }
}

/// A changed file listed by `jj status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    /// Path relative to the repository root (destination path for renames and copies)
    pub path: String,
    pub state: FileState,
}
