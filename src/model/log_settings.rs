//! Log display settings

use crate::jj::constants::{commands, flags, templates};

/// How the log pane asks jj for its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Revset filter (None = jj's default revset)
    pub revset: Option<String>,
    /// Maximum number of changes (None = unlimited)
    pub limit: Option<usize>,
    /// Draw the commit graph
    pub graph: bool,
    /// Oldest change first
    pub reversed: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            revset: None,
            limit: None,
            graph: true,
            reversed: false,
        }
    }
}

impl LogSettings {
    /// Arguments for `jj log`
    ///
    /// The template is pinned so change lines keep the `<id> <email> ...` shape.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            commands::LOG.to_string(),
            flags::TEMPLATE.to_string(),
            templates::LOG.to_string(),
        ];
        if let Some(revset) = &self.revset {
            args.push(flags::REVISION.to_string());
            args.push(revset.clone());
        }
        if let Some(limit) = self.limit {
            args.push(flags::LIMIT.to_string());
            args.push(limit.to_string());
        }
        if !self.graph {
            args.push(flags::NO_GRAPH.to_string());
        }
        if self.reversed {
            args.push(flags::REVERSED.to_string());
        }
        args
    }

    /// Short summary for the log pane title (e.g. "revset: main.. | limit 50")
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(revset) = &self.revset {
            parts.push(format!("revset: {}", revset));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit {}", limit));
        }
        if !self.graph {
            parts.push("no graph".to_string());
        }
        if self.reversed {
            parts.push("reversed".to_string());
        }
        (!parts.is_empty()).then(|| parts.join(" | "))
    }

    /// Set the revset from user input; blank input clears it
    pub fn set_revset(&mut self, input: &str) {
        let trimmed = input.trim();
        self.revset = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    /// Set the limit from user input; blank input clears it
    ///
    /// Returns false (leaving the limit unchanged) if the input is not a positive number.
    pub fn set_limit(&mut self, input: &str) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.limit = None;
            return true;
        }
        match trimmed.parse::<usize>() {
            Ok(n) if n > 0 => {
                self.limit = Some(n);
                true
            }
            _ => false,
        }
    }
}
