//! jj-specific constants
//!
//! Centralized definitions for jj command names, flags, and special values.

/// jj command binary name
pub const JJ_COMMAND: &str = "jj";

/// Minimum supported jj version (first release with `jj redo`)
pub const MIN_JJ_VERSION: &str = "0.33.0";

/// jj subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const STATUS: &str = "status";
    pub const DIFF: &str = "diff";
    pub const SHOW: &str = "show";
    pub const DESCRIBE: &str = "describe";
    pub const NEW: &str = "new";
    pub const EDIT: &str = "edit";
    pub const SQUASH: &str = "squash";
    pub const SPLIT: &str = "split";
    pub const REBASE: &str = "rebase";
    pub const ABANDON: &str = "abandon";
    pub const UNDO: &str = "undo";
    pub const REDO: &str = "redo";
    pub const OP: &str = "op";
    pub const OP_LOG: &str = "log";
    pub const OP_SHOW: &str = "show";
    pub const OP_RESTORE: &str = "restore";
    pub const BOOKMARK: &str = "bookmark";
    pub const GIT: &str = "git";
    pub const GIT_PUSH: &str = "push";
    pub const GIT_FETCH: &str = "fetch";
    pub const GIT_REMOTE: &str = "remote";
}

/// jj command flags
pub mod flags {
    /// Disable color output for parsing (global flag, safe for all commands)
    pub const NO_COLOR: &str = "--color=never";
    /// Disable graph output (jj log only, NOT a global flag)
    pub const NO_GRAPH: &str = "--no-graph";
    /// Reverse log order (jj log only)
    pub const REVERSED: &str = "--reversed";
    /// Specify template
    pub const TEMPLATE: &str = "-T";
    /// Specify revision/revset
    pub const REVISION: &str = "-r";
    /// Limit number of entries
    pub const LIMIT: &str = "-n";
    /// Specify repository path
    pub const REPO_PATH: &str = "-R";
    /// Show version
    pub const VERSION: &str = "--version";
    /// Message flag
    pub const MESSAGE: &str = "-m";
    /// Open editor (describe)
    pub const EDIT: &str = "--edit";
    /// Include untracked remote bookmarks in `bookmark list`
    pub const ALL_REMOTES: &str = "--all-remotes";
}

/// Templates pinned for output that is scraped line by line
pub mod templates {
    /// Built-in one-line-per-change log layout
    ///
    /// Change lines look like `@  qpvuntsm user@example.com 2024-01-01 12:00:00 abc1234`,
    /// which is the shape the change-reference extractor expects.
    pub const LOG: &str = "builtin_log_compact";
}

/// Special jj values
pub mod special {
    /// Working-copy revision symbol
    pub const WORKING_COPY: &str = "@";

    /// Version output prefix (e.g., "jj 0.37.0")
    pub const VERSION_PREFIX: &str = "jj ";

    /// Pseudo remote that mirrors the colocated git repo
    pub const GIT_REMOTE: &str = "git";

    /// Fileset pattern kind for a literal cwd-relative path
    pub const FILE_PATTERN_PREFIX: &str = "file:";
}

/// Error detection patterns in jj output
pub mod errors {
    /// Pattern indicating not a jj repository
    pub const NOT_A_REPO: &str = "There is no jj repo";
}
