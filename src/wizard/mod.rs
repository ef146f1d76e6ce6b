//! Multi-step pickers that assemble jj commands
//!
//! A wizard is a pure state machine. Given a [`Flow`], the [`WizardContext`]
//! captured when it started, and the answers given so far, it decides the
//! next [`Step`] to show, the [`JjCommand`] to run, or why it gave up.
//! The app only renders steps as dialogs and feeds answers back; it never
//! needs to know which flow it is driving.

mod flows;

use crate::jj::JjCommand;
use crate::model::{Bookmark, ChangeId};

/// Answer recorded for a confirmed Confirm step
pub const CONFIRMED: &str = "yes";

/// One option of a Select step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    /// Recorded as the answer when picked
    pub value: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A prompt the user must answer before the wizard can continue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Select {
        title: String,
        prompt: String,
        choices: Vec<Choice>,
    },
    Input {
        title: String,
        prompt: String,
        initial: String,
    },
    Confirm {
        title: String,
        message: String,
        detail: Option<String>,
    },
}

/// What the wizard wants next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Prompt(Step),
    Run(JjCommand),
    /// Stop without running anything; the message is shown as a warning
    Abort(String),
}

/// The jj operations reachable from a wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    New,
    Edit,
    Describe,
    DescribeInEditor,
    Squash,
    Rebase,
    Abandon,
    Split,
    Bookmark,
    Push,
    Fetch,
    OpRestore(String),
    Undo,
    Redo,
}

impl Flow {
    /// Whether the flow acts on the change of the current log line
    pub fn needs_change(&self) -> bool {
        matches!(
            self,
            Flow::Edit
                | Flow::Describe
                | Flow::DescribeInEditor
                | Flow::Squash
                | Flow::Rebase
                | Flow::Abandon
                | Flow::Split
        )
    }

    /// Whether the context must carry the bookmark list
    pub fn needs_bookmarks(&self) -> bool {
        matches!(self, Flow::Bookmark | Flow::Push)
    }

    /// Whether the context must carry the git remotes
    pub fn needs_remotes(&self) -> bool {
        matches!(self, Flow::Push | Flow::Fetch)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Flow::New => "new",
            Flow::Edit => "edit",
            Flow::Describe => "describe",
            Flow::DescribeInEditor => "describe (editor)",
            Flow::Squash => "squash",
            Flow::Rebase => "rebase",
            Flow::Abandon => "abandon",
            Flow::Split => "split",
            Flow::Bookmark => "bookmark",
            Flow::Push => "push",
            Flow::Fetch => "fetch",
            Flow::OpRestore(_) => "op restore",
            Flow::Undo => "undo",
            Flow::Redo => "redo",
        }
    }
}

/// Repository facts captured when a wizard starts
#[derive(Debug, Clone, Default)]
pub struct WizardContext {
    /// Change on the current log line
    pub change_id: Option<ChangeId>,
    /// Current description of that change (Describe only)
    pub description: String,
    pub bookmarks: Vec<Bookmark>,
    pub remotes: Vec<String>,
    /// Remote from config; skips remote selection when set
    pub default_remote: Option<String>,
    /// Ask before abandon, op restore, bookmark delete and push
    pub confirm: bool,
}

/// A running wizard
#[derive(Debug, Clone)]
pub struct Wizard {
    flow: Flow,
    ctx: WizardContext,
    answers: Vec<String>,
}

impl Wizard {
    pub fn new(flow: Flow, ctx: WizardContext) -> Self {
        Self {
            flow,
            ctx,
            answers: Vec::new(),
        }
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Next step for the answers given so far
    pub fn advance(&self) -> Advance {
        if self.flow.needs_change() && self.ctx.change_id.is_none() {
            return Advance::Abort("No change ID on the current line".to_string());
        }
        flows::advance(&self.flow, &self.ctx, &self.answers)
    }

    /// Record an answer to the current step and move on
    pub fn answer(&mut self, value: impl Into<String>) -> Advance {
        self.answers.push(value.into());
        self.advance()
    }
}
