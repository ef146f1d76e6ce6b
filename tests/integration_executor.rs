//! Executor and scraper tests against a real jj repository.
//!
//! Skipped when jj is not installed.

#[macro_use]
#[path = "common/mod.rs"]
mod common;

use common::TestRepo;
use common::test_repo::TEST_EMAIL;
use jjpane::jj::parser::{Parser, parse_bookmark_list};
use jjpane::jj::{JjError, JjExecutor};
use jjpane::model::{FileState, LogSettings};

#[test]
fn test_log_text_lines_yield_change_ids() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.jj(&["describe", "-m", "first"]);
    repo.jj(&["new", "-m", "second"]);

    let executor = JjExecutor::with_repo_path(repo.path());
    let text = executor
        .log_text(&LogSettings::default())
        .expect("log should succeed");

    let ids: Vec<String> = text
        .lines()
        .filter_map(|line| Parser::extract_change_id(Some(line)))
        .map(String::from)
        .collect();

    assert_eq!(ids.first(), Some(&repo.change_id("@")));
    assert!(ids.contains(&repo.change_id("@-")));
    assert!(text.contains(TEST_EMAIL));
}

#[test]
fn test_log_text_without_graph_still_extracts() {
    skip_if_no_jj!();
    let repo = TestRepo::new();

    let executor = JjExecutor::with_repo_path(repo.path());
    let settings = LogSettings {
        graph: false,
        ..LogSettings::default()
    };
    let text = executor.log_text(&settings).expect("log should succeed");
    let first = text.lines().next();
    assert_eq!(
        Parser::extract_change_id(first).map(String::from),
        Some(repo.change_id("@"))
    );
}

#[test]
fn test_log_limit_and_revset() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.jj(&["new", "-m", "a"]);
    repo.jj(&["new", "-m", "b"]);

    let executor = JjExecutor::with_repo_path(repo.path());
    let settings = LogSettings {
        revset: Some("all()".to_string()),
        limit: Some(1),
        ..LogSettings::default()
    };
    let text = executor.log_text(&settings).expect("log should succeed");
    let ids: Vec<_> = text
        .lines()
        .filter_map(|line| Parser::extract_change_id(Some(line)))
        .collect();
    assert_eq!(ids.len(), 1);
}

#[test]
fn test_status_lines_parse_added_file() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.write_file("hello.txt", "hello\n");

    let executor = JjExecutor::with_repo_path(repo.path());
    let text = executor.status_text().expect("status should succeed");
    let files: Vec<_> = text.lines().filter_map(Parser::parse_status_line).collect();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "hello.txt");
    assert_eq!(files[0].state, FileState::Added);

    let diff = executor
        .diff_file_text("hello.txt")
        .expect("diff should succeed");
    assert!(diff.contains("hello"));
}

#[test]
fn test_file_diff_with_fileset_characters_in_name() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.write_file("notes (1).txt", "first draft\n");
    repo.write_file("other.txt", "unrelated\n");

    let executor = JjExecutor::with_repo_path(repo.path());
    let text = executor.status_text().expect("status should succeed");
    let file = text
        .lines()
        .filter_map(Parser::parse_status_line)
        .find(|f| f.path.starts_with("notes"))
        .expect("status should list the file");
    assert_eq!(file.path, "notes (1).txt");

    let diff = executor
        .diff_file_text(&file.path)
        .expect("diff should accept the path literally");
    assert!(diff.contains("first draft"));
    assert!(!diff.contains("unrelated"));
}

#[test]
fn test_show_and_diff_of_change() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.write_file("notes.md", "remember the milk\n");
    repo.jj(&["describe", "-m", "add notes"]);

    let executor = JjExecutor::with_repo_path(repo.path());
    let id = repo.change_id("@");
    let show = executor.show_text(&id).expect("show should succeed");
    assert!(show.contains("add notes"));
    assert!(show.contains("remember the milk"));

    let diff = executor.diff_text(&id).expect("diff should succeed");
    assert!(diff.contains("notes.md"));
}

#[test]
fn test_bookmark_list_round_trip_through_parser() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.jj(&["bookmark", "create", "feature", "-r", "@"]);

    let executor = JjExecutor::with_repo_path(repo.path());
    let text = executor
        .bookmark_list_text()
        .expect("bookmark list should succeed");
    let bookmarks = parse_bookmark_list(&text);

    let feature = bookmarks
        .iter()
        .find(|b| b.name == "feature")
        .expect("feature bookmark listed");
    assert!(feature.is_live_local());
    assert_eq!(
        feature.change_id.as_ref().map(|id| id.to_string()),
        Some(repo.change_id("@"))
    );
}

#[test]
fn test_op_log_lines_yield_operation_ids() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.jj(&["new", "-m", "something"]);

    let executor = JjExecutor::with_repo_path(repo.path());
    let text = executor.op_log_text(10).expect("op log should succeed");
    let op_id = text
        .lines()
        .find_map(Parser::extract_operation_id)
        .expect("an operation id");

    let shown = executor.op_show_text(&op_id).expect("op show should succeed");
    assert!(!shown.is_empty());
}

#[test]
fn test_description_is_full_text() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    repo.jj(&["describe", "-m", "title\n\nbody line"]);

    let executor = JjExecutor::with_repo_path(repo.path());
    let description = executor
        .description(&repo.change_id("@"))
        .expect("description should succeed");
    assert!(description.starts_with("title\n"));
    assert!(description.contains("body line"));
}

#[test]
fn test_git_remotes_empty_for_fresh_repo() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    let executor = JjExecutor::with_repo_path(repo.path());
    assert!(executor.git_remotes().expect("remote list").is_empty());
}

#[test]
fn test_unknown_revision_is_command_failed() {
    skip_if_no_jj!();
    let repo = TestRepo::new();
    let executor = JjExecutor::with_repo_path(repo.path());

    let err = executor.show_text("nosuchrevision").unwrap_err();
    assert!(matches!(err, JjError::CommandFailed { .. }));
    assert!(!err.summary().is_empty());
    assert!(!err.summary().starts_with("Error: "));
}

#[test]
fn test_plain_directory_is_not_a_repository() {
    skip_if_no_jj!();
    let dir = tempfile::TempDir::new().unwrap();
    let executor = JjExecutor::with_repo_path(dir.path().to_path_buf());

    let err = executor.status_text().unwrap_err();
    assert!(matches!(err, JjError::NotARepository), "got {:?}", err);
}

#[test]
fn test_version_check_names_the_minimum() {
    skip_if_no_jj!();
    let executor = JjExecutor::new();
    let version = executor.version().expect("jj --version should succeed");
    assert!(!version.starts_with("jj "));

    match executor.check_version() {
        Ok(()) => {}
        Err(JjError::UnsupportedVersion { version: found, minimum }) => {
            assert_eq!(found, version);
            assert_eq!(minimum, jjpane::jj::constants::MIN_JJ_VERSION);
        }
        Err(other) => panic!("unexpected error: {other:?}"),
    }
}
