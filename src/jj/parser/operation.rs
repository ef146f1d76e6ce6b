//! Operation id extraction from default `jj op log` lines

use std::sync::LazyLock;

use regex::Regex;

use super::Parser;

/// Graph glyphs, then a hex id of at least 12 digits as the first token
///
/// Description lines (`│  args: jj new ...`) start with a word instead, so
/// commit hashes mentioned there are never picked up.
static OPERATION_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\p{L}\p{N}]*([0-9a-f]{12,})(?:\s|$)").expect("Invalid operation line regex")
});

impl Parser {
    /// Extract the operation id from an op log header line
    pub fn extract_operation_id(line: &str) -> Option<String> {
        OPERATION_LINE_REGEX
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}
