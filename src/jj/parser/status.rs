//! File lines of `jj status` output

use super::Parser;
use crate::model::{FileState, FileStatus};

impl Parser {
    /// Parse a single status line into a FileStatus
    ///
    /// Formats:
    /// - "A path" (added)
    /// - "M path" (modified)
    /// - "D path" (deleted)
    /// - "R prefix{old => new}suffix" (renamed)
    /// - "C prefix{old => new}suffix" (copied)
    ///
    /// Headers such as "Working copy changes:" and "Parent commit (@-): ..."
    /// return None.
    pub fn parse_status_line(line: &str) -> Option<FileStatus> {
        let line = line.trim();
        let (letter, rest) = line.split_at_checked(1)?;
        let rest = rest.strip_prefix(' ')?.trim();
        if rest.is_empty() {
            return None;
        }

        let state = match letter {
            "A" => FileState::Added,
            "M" => FileState::Modified,
            "D" => FileState::Deleted,
            "R" | "C" => {
                let (from, to) = split_rename(rest)?;
                let state = if letter == "R" {
                    FileState::Renamed { from }
                } else {
                    FileState::Copied { from }
                };
                return Some(FileStatus { path: to, state });
            }
            _ => return None,
        };

        Some(FileStatus {
            path: rest.to_string(),
            state,
        })
    }
}

/// Expand jj's `prefix{old => new}suffix` notation into (old, new) paths
fn split_rename(rest: &str) -> Option<(String, String)> {
    let brace_start = rest.find('{')?;
    let brace_end = brace_start + rest[brace_start..].find('}')?;
    let prefix = &rest[..brace_start];
    let suffix = &rest[brace_end + 1..];
    let (old, new) = rest[brace_start + 1..brace_end].split_once(" => ")?;
    Some((
        join_rename_parts(prefix, old, suffix),
        join_rename_parts(prefix, new, suffix),
    ))
}

/// `src/{ => util}/mod.rs` has an empty side, which must not leave a double slash
fn join_rename_parts(prefix: &str, middle: &str, suffix: &str) -> String {
    if middle.is_empty() {
        format!("{}{}", prefix, suffix.strip_prefix('/').unwrap_or(suffix))
    } else {
        format!("{}{}{}", prefix, middle, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_states() {
        let file = Parser::parse_status_line("A new_file.rs").unwrap();
        assert_eq!(file.path, "new_file.rs");
        assert_eq!(file.state, FileState::Added);

        let file = Parser::parse_status_line("M src/main.rs").unwrap();
        assert_eq!(file.state, FileState::Modified);

        let file = Parser::parse_status_line("D old_file.txt").unwrap();
        assert_eq!(file.state, FileState::Deleted);
    }

    #[test]
    fn test_rename() {
        let file = Parser::parse_status_line("R src/{old.rs => new.rs}").unwrap();
        assert_eq!(file.path, "src/new.rs");
        assert_eq!(
            file.state,
            FileState::Renamed {
                from: "src/old.rs".to_string()
            }
        );
    }

    #[test]
    fn test_rename_with_empty_side() {
        let file = Parser::parse_status_line("R src/{ => util}/mod.rs").unwrap();
        assert_eq!(file.path, "src/util/mod.rs");
        assert_eq!(
            file.state,
            FileState::Renamed {
                from: "src/mod.rs".to_string()
            }
        );
    }

    #[test]
    fn test_copy() {
        let file = Parser::parse_status_line("C {a.txt => b.txt}").unwrap();
        assert_eq!(file.path, "b.txt");
        assert!(matches!(file.state, FileState::Copied { .. }));
    }

    #[test]
    fn test_headers_are_not_files() {
        assert!(Parser::parse_status_line("Working copy changes:").is_none());
        assert!(Parser::parse_status_line("Parent commit (@-): xyz uvw desc").is_none());
        assert!(Parser::parse_status_line("M").is_none());
        assert!(Parser::parse_status_line("").is_none());
        assert!(Parser::parse_status_line("R broken rename").is_none());
    }
}
