//! Bookmark model scraped from `jj bookmark list --all-remotes`

use super::ChangeId;
use crate::jj::constants::special;

/// Bookmark state annotation printed after the name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookmarkState {
    #[default]
    Normal,
    /// `name (deleted)`: local bookmark deleted, remote still present
    Deleted,
    /// `name (conflicted):` local target is conflicted
    Conflicted,
}

/// One entry of the bookmark list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// Bookmark name (e.g., "main", "feature-x")
    pub name: String,
    /// Remote name if this is a remote bookmark (e.g., "origin")
    pub remote: Option<String>,
    /// Whether the remote bookmark is tracked by a local one (always true for local)
    pub is_tracked: bool,
    pub state: BookmarkState,
    /// Change the bookmark points to, when the line shows one
    pub change_id: Option<ChangeId>,
}

impl Bookmark {
    /// Local bookmark pointing at `change_id`
    pub fn local(name: impl Into<String>, change_id: Option<ChangeId>) -> Self {
        Self {
            name: name.into(),
            remote: None,
            is_tracked: true,
            state: BookmarkState::Normal,
            change_id,
        }
    }

    /// Full name including remote (e.g., "feature-x@origin")
    pub fn full_name(&self) -> String {
        match &self.remote {
            Some(remote) => format!("{}@{}", self.name, remote),
            None => self.name.clone(),
        }
    }

    pub fn is_local(&self) -> bool {
        self.remote.is_none()
    }

    /// Local bookmark that still exists (not `(deleted)`)
    pub fn is_live_local(&self) -> bool {
        self.is_local() && self.state != BookmarkState::Deleted
    }

    /// Remote bookmark that can be tracked (`name@remote` without local counterpart)
    pub fn is_untracked_remote(&self) -> bool {
        self.is_real_remote() && !self.is_tracked
    }

    /// Remote bookmark that can be untracked
    pub fn is_tracked_remote(&self) -> bool {
        self.is_real_remote() && self.is_tracked
    }

    fn is_real_remote(&self) -> bool {
        self.remote
            .as_deref()
            .is_some_and(|remote| remote != special::GIT_REMOTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(name: &str, remote: &str, is_tracked: bool) -> Bookmark {
        Bookmark {
            name: name.into(),
            remote: Some(remote.into()),
            is_tracked,
            state: BookmarkState::Normal,
            change_id: None,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Bookmark::local("main", None).full_name(), "main");
        assert_eq!(remote("feature-x", "origin", false).full_name(), "feature-x@origin");
    }

    #[test]
    fn test_remote_classification() {
        let local = Bookmark::local("main", None);
        assert!(!local.is_untracked_remote());
        assert!(!local.is_tracked_remote());

        assert!(remote("main", "origin", true).is_tracked_remote());
        assert!(remote("feature", "origin", false).is_untracked_remote());

        // the git pseudo remote is never offered for track/untrack
        let git = remote("main", "git", true);
        assert!(!git.is_tracked_remote());
        assert!(!git.is_untracked_remote());
    }

    #[test]
    fn test_deleted_local_is_not_live() {
        let mut bookmark = Bookmark::local("gone", None);
        bookmark.state = BookmarkState::Deleted;
        assert!(bookmark.is_local());
        assert!(!bookmark.is_live_local());
    }
}
