//! Change identifier scraped from rendered log text

use std::fmt;

/// Length of the short change id printed by `builtin_log_compact`
pub const CHANGE_ID_LEN: usize = 8;

/// Short change identifier: exactly eight lowercase ASCII letters
///
/// Only constructed through [`ChangeId::parse`], so holding one means the
/// shape has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangeId(String);

impl ChangeId {
    /// Accept `s` only if it is exactly eight lowercase ASCII letters
    pub fn parse(s: &str) -> Option<Self> {
        (s.len() == CHANGE_ID_LEN && s.bytes().all(|b| b.is_ascii_lowercase()))
            .then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChangeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ChangeId> for String {
    fn from(id: ChangeId) -> Self {
        id.0
    }
}
