//! Parser for default `jj bookmark list --all-remotes` output
//!
//! ```text
//! feature (deleted)
//!   @origin: rlvkpnrz 7a3c1e02 Add login form
//! main: qpvuntsm 1b2c3d4e Initial commit
//!   @git: qpvuntsm 1b2c3d4e Initial commit
//!   @origin (behind by 1 commits): qpvuntsm 1b2c3d4e Initial commit
//! wip@origin: kmkuslsw 55aa66bb Experiments
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::model::{Bookmark, BookmarkState, ChangeId};

/// Unindented bookmark line: `name[@remote][ (state)][: target]`
static TOP_LEVEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>\S+?)(?: \((?P<state>[^)]*)\))?(?::(?:\s+(?P<target>.*))?)?$")
        .expect("Invalid bookmark regex")
});

/// Indented tracked-remote line: `  @remote[ (state)]: target`
static REMOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s+@(?P<remote>\S+?)(?: \((?P<state>[^)]*)\))?:(?:\s+(?P<target>.*))?$")
        .expect("Invalid remote bookmark regex")
});

/// Parse the bookmark list into local and remote entries
///
/// Lines that match neither shape (conflict sides such as `  - abc...`,
/// blank lines) are skipped.
pub fn parse_bookmark_list(output: &str) -> Vec<Bookmark> {
    let mut bookmarks = Vec::new();
    let mut current_local: Option<String> = None;

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            let (Some(local), Some(caps)) = (&current_local, REMOTE_REGEX.captures(line)) else {
                continue;
            };
            bookmarks.push(Bookmark {
                name: local.clone(),
                remote: Some(caps["remote"].to_string()),
                is_tracked: true,
                state: state_of(&caps),
                change_id: target_change_id(&caps),
            });
            continue;
        }

        let Some(caps) = TOP_LEVEL_REGEX.captures(line) else {
            current_local = None;
            continue;
        };
        let full_name = &caps["name"];
        match full_name.rsplit_once('@') {
            Some((name, remote)) if !name.is_empty() && !remote.is_empty() => {
                // name@remote at top level: remote bookmark with no local counterpart
                current_local = None;
                bookmarks.push(Bookmark {
                    name: name.to_string(),
                    remote: Some(remote.to_string()),
                    is_tracked: false,
                    state: state_of(&caps),
                    change_id: target_change_id(&caps),
                });
            }
            _ => {
                current_local = Some(full_name.to_string());
                bookmarks.push(Bookmark {
                    name: full_name.to_string(),
                    remote: None,
                    is_tracked: true,
                    state: state_of(&caps),
                    change_id: target_change_id(&caps),
                });
            }
        }
    }

    bookmarks
}

fn state_of(caps: &Captures<'_>) -> BookmarkState {
    match caps.name("state").map(|m| m.as_str()) {
        Some("deleted") => BookmarkState::Deleted,
        Some(s) if s.contains("conflicted") => BookmarkState::Conflicted,
        _ => BookmarkState::Normal,
    }
}

fn target_change_id(caps: &Captures<'_>) -> Option<ChangeId> {
    caps.name("target")
        .and_then(|m| m.as_str().split_whitespace().next())
        .and_then(ChangeId::parse)
}
