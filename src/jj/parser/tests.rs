use super::*;
use crate::model::FileState;

const LOG_OUTPUT: &str = "\
@  kxryzmql test@example.com 2025-01-15 10:30:00 a1b2c3d4
│  (empty) (no description set)
○  oqwroxvu test@example.com 2025-01-15 09:12:44 main e5f6a7b8
│  Add user authentication
│ ○  zsuskuln other.dev@example.org 2025-01-14 18:02:10 f9a0b1c2
├─╯  Experiment with caching
◆  rlvkpnrz test@example.com 2025-01-10 08:00:00 trunk 0c1d2e3f
│  Initial commit
~
";

#[test]
fn test_log_output_change_lines() {
    let ids: Vec<String> = LOG_OUTPUT
        .lines()
        .filter_map(|line| Parser::extract_change_id(Some(line)))
        .map(String::from)
        .collect();
    assert_eq!(ids, vec!["kxryzmql", "oqwroxvu", "zsuskuln", "rlvkpnrz"]);
}

#[test]
fn test_log_output_description_lines_have_no_id() {
    let without_id = LOG_OUTPUT
        .lines()
        .filter(|line| Parser::extract_change_id(Some(line)).is_none())
        .count();
    assert_eq!(without_id, 5);
}

#[test]
fn test_status_output_files() {
    let output = "\
Working copy changes:
A new_file.rs
M src/main.rs
R src/{lib.rs => core.rs}
Working copy  (@) : kxryzmql a1b2c3d4 (no description set)
Parent commit (@-): oqwroxvu e5f6a7b8 main | Add user authentication
";
    let files: Vec<_> = output.lines().filter_map(Parser::parse_status_line).collect();
    assert_eq!(files.len(), 3);
    assert_eq!(files[2].path, "src/core.rs");
    assert!(matches!(files[2].state, FileState::Renamed { .. }));
}

#[test]
fn test_status_header_lines_carry_change_ids_without_email() {
    // status headers show ids but no author, so the log heuristic rejects them
    let line = "Working copy  (@) : kxryzmql a1b2c3d4 (no description set)";
    assert!(Parser::extract_change_id(Some(line)).is_none());
}

#[test]
fn test_op_log_output() {
    let output = "\
@  e4f5c1a8b5e2 user@host 2 minutes ago, lasted 2ms
│  describe commit a1b2c3d4e5f6a7b8c9d0
│  args: jj describe -m 'Add user authentication'
○  75ea3c2331bf user@host 10 minutes ago, lasted 1ms
│  snapshot working copy
";
    let ids: Vec<String> = output
        .lines()
        .filter_map(Parser::extract_operation_id)
        .collect();
    assert_eq!(ids, vec!["e4f5c1a8b5e2", "75ea3c2331bf"]);
}
