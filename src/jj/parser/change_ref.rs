//! Change-reference extraction from rendered `jj log` lines

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::Parser;
use crate::model::{CHANGE_ID_LEN, ChangeId};

/// A lowercase run, whitespace, then an email-shaped author token
///
/// Group 1 is the candidate change id. The author column is what tells a
/// change line apart from description lines and other text.
static CHANGE_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z]+)\s+[A-Za-z0-9_.+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)+")
        .expect("Invalid change reference regex")
});

impl Parser {
    /// Extract the change id a log line refers to
    ///
    /// Only the first `<letters> <email>` occurrence is considered, and its
    /// letter run must be exactly [`CHANGE_ID_LEN`] long. A longer or shorter
    /// run is rejected rather than truncated or padded.
    ///
    /// ```
    /// use jjpane::jj::Parser;
    ///
    /// let line = "@  qpvuntsm test.user@example.com 2024-01-01 12:00:00 abc1234";
    /// assert_eq!(Parser::extract_change_id(Some(line)).unwrap().as_str(), "qpvuntsm");
    /// assert!(Parser::extract_change_id(Some("Working copy changes:")).is_none());
    /// assert!(Parser::extract_change_id(None).is_none());
    /// ```
    pub fn extract_change_id(line: Option<&str>) -> Option<ChangeId> {
        let line = line?;
        let span = Self::change_id_span(line)?;
        ChangeId::parse(&line[span])
    }

    /// Byte range of the accepted change id within `line`
    pub fn change_id_span(line: &str) -> Option<Range<usize>> {
        let run = CHANGE_REF_REGEX.captures(line)?.get(1)?;
        (run.len() == CHANGE_ID_LEN).then(|| run.range())
    }
}
