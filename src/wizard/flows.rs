//! Step sequences for each flow
//!
//! Every function is a pure mapping from answers-so-far to the next
//! [`Advance`]. Answers are consumed front to back, so a flow that skips a
//! prompt (for example remote selection when only one remote exists) simply
//! does not consume an answer for it.

use super::{Advance, CONFIRMED, Choice, Flow, Step, WizardContext};
use crate::jj::JjCommand;
use crate::jj::constants::{commands, flags, special};
use crate::model::ChangeId;

pub(super) fn advance(flow: &Flow, ctx: &WizardContext, answers: &[String]) -> Advance {
    match flow {
        Flow::New => new_change(ctx, answers),
        Flow::Edit => with_change(ctx, |id| {
            Advance::Run(JjCommand::new([commands::EDIT, id.as_str()]))
        }),
        Flow::Describe => describe(ctx, answers),
        Flow::DescribeInEditor => with_change(ctx, describe_in_editor),
        Flow::Squash => squash(ctx, answers),
        Flow::Rebase => rebase(ctx, answers),
        Flow::Abandon => with_change(ctx, |id| {
            confirmed_or_prompt(
                ctx,
                answers,
                "Abandon",
                format!("Abandon change {}?", id),
                Some("Can be undone with 'u'.".to_string()),
                JjCommand::new([commands::ABANDON, id.as_str()]),
            )
        }),
        Flow::Split => with_change(ctx, |id| {
            Advance::Run(JjCommand::new([commands::SPLIT, flags::REVISION, id.as_str()]).interactive())
        }),
        Flow::Bookmark => bookmark(ctx, answers),
        Flow::Push => push(ctx, answers),
        Flow::Fetch => fetch(ctx, answers),
        Flow::OpRestore(op_id) => confirmed_or_prompt(
            ctx,
            answers,
            "Restore Operation",
            format!("Restore repository to operation {}?", op_id),
            Some("Can be undone with 'u'.".to_string()),
            JjCommand::new([commands::OP, commands::OP_RESTORE, op_id.as_str()]),
        ),
        Flow::Undo => Advance::Run(JjCommand::new([commands::UNDO])),
        Flow::Redo => Advance::Run(JjCommand::new([commands::REDO])),
    }
}

fn with_change(ctx: &WizardContext, f: impl FnOnce(&ChangeId) -> Advance) -> Advance {
    match &ctx.change_id {
        Some(id) => f(id),
        None => Advance::Abort("No change ID on the current line".to_string()),
    }
}

fn select(title: impl Into<String>, prompt: impl Into<String>, choices: Vec<Choice>) -> Advance {
    Advance::Prompt(Step::Select {
        title: title.into(),
        prompt: prompt.into(),
        choices,
    })
}

fn input(title: impl Into<String>, prompt: impl Into<String>, initial: impl Into<String>) -> Advance {
    Advance::Prompt(Step::Input {
        title: title.into(),
        prompt: prompt.into(),
        initial: initial.into(),
    })
}

fn unknown_choice(choice: &str) -> Advance {
    Advance::Abort(format!("Unknown choice: {}", choice))
}

/// Run `command` right away, or after a Confirm step when confirmation is on
fn confirmed_or_prompt(
    ctx: &WizardContext,
    answers: &[String],
    title: &str,
    message: String,
    detail: Option<String>,
    command: JjCommand,
) -> Advance {
    if !ctx.confirm {
        return Advance::Run(command);
    }
    match answers.first().map(String::as_str) {
        None => Advance::Prompt(Step::Confirm {
            title: title.to_string(),
            message,
            detail,
        }),
        Some(CONFIRMED) => Advance::Run(command),
        Some(_) => Advance::Abort("Cancelled".to_string()),
    }
}

// ── new ─────────────────────────────────────────────────────────────

fn new_change(ctx: &WizardContext, answers: &[String]) -> Advance {
    let Some(id) = &ctx.change_id else {
        return Advance::Run(JjCommand::new([commands::NEW]));
    };

    let Some((placement, rest)) = answers.split_first() else {
        return select(
            "New Change",
            "Create the new change:",
            vec![
                Choice::new("wc", "On the working copy (@)"),
                Choice::new("on", format!("On {}", id)),
                Choice::new("on-msg", format!("On {} with a message", id)),
                Choice::new("after", format!("Inserted after {}", id)),
                Choice::new("before", format!("Inserted before {}", id)),
            ],
        );
    };

    let base = JjCommand::new([commands::NEW]);
    match placement.as_str() {
        "wc" => Advance::Run(base),
        "on" => Advance::Run(base.arg(id.as_str())),
        "on-msg" => match rest.first() {
            None => input("New Change", format!("Message for the child of {}:", id), ""),
            Some(msg) if msg.trim().is_empty() => Advance::Run(base.arg(id.as_str())),
            Some(msg) => Advance::Run(base.arg(id.as_str()).opt(flags::MESSAGE, msg.trim())),
        },
        "after" => Advance::Run(base.opt("-A", id.as_str())),
        "before" => Advance::Run(base.opt("-B", id.as_str())),
        other => unknown_choice(other),
    }
}

// ── describe ────────────────────────────────────────────────────────

fn describe(ctx: &WizardContext, answers: &[String]) -> Advance {
    with_change(ctx, |id| {
        let current = ctx.description.trim_end_matches('\n');
        // a one-line input would drop every line but the first
        if current.contains('\n') {
            return describe_in_editor(id);
        }
        match answers.first() {
            None => input("Describe", format!("Description for {}:", id), current),
            Some(msg) => Advance::Run(
                JjCommand::new([commands::DESCRIBE, flags::REVISION, id.as_str()])
                    .opt(flags::MESSAGE, msg.trim()),
            ),
        }
    })
}

fn describe_in_editor(id: &ChangeId) -> Advance {
    Advance::Run(
        JjCommand::new([commands::DESCRIBE, flags::REVISION, id.as_str(), flags::EDIT]).interactive(),
    )
}

// ── squash ──────────────────────────────────────────────────────────

fn squash(ctx: &WizardContext, answers: &[String]) -> Advance {
    with_change(ctx, |id| {
        let Some((mode, rest)) = answers.split_first() else {
            return select(
                "Squash",
                format!("Squash {}:", id),
                vec![
                    Choice::new("parent", "Into its parent"),
                    Choice::new("into", "Into another revision..."),
                    Choice::new("interactive", "Into its parent, choosing hunks"),
                ],
            );
        };

        // squash may open an editor to combine descriptions
        let base = JjCommand::new([commands::SQUASH]);
        match mode.as_str() {
            "parent" => Advance::Run(base.opt(flags::REVISION, id.as_str()).interactive()),
            "interactive" => Advance::Run(
                base.opt(flags::REVISION, id.as_str())
                    .arg("--interactive")
                    .interactive(),
            ),
            "into" => match rest.first() {
                None => input("Squash", format!("Squash {} into revision:", id), special::WORKING_COPY),
                Some(target) if target.trim().is_empty() => {
                    Advance::Abort("Target revision cannot be empty".to_string())
                }
                Some(target) => Advance::Run(
                    base.opt("--from", id.as_str())
                        .opt("--into", target.trim())
                        .interactive(),
                ),
            },
            other => unknown_choice(other),
        }
    })
}

// ── rebase ──────────────────────────────────────────────────────────

fn rebase(ctx: &WizardContext, answers: &[String]) -> Advance {
    with_change(ctx, |id| match answers {
        [] => select(
            "Rebase",
            format!("What to rebase from {}:", id),
            vec![
                Choice::new("-r", "This change only (-r)"),
                Choice::new("-s", "This change and its descendants (-s)"),
                Choice::new("-b", "The whole branch (-b)"),
            ],
        ),
        [mode] => {
            if !matches!(mode.as_str(), "-r" | "-s" | "-b") {
                return unknown_choice(mode);
            }
            let mut choices = vec![Choice::new("-d", "Onto a destination (-d)")];
            // jj only accepts --insert-after/--insert-before with -r and -s
            if mode != "-b" {
                choices.push(Choice::new("-A", "After a revision (-A)"));
                choices.push(Choice::new("-B", "Before a revision (-B)"));
            }
            select("Rebase", "Place it:", choices)
        }
        [_, placement] => {
            if !matches!(placement.as_str(), "-d" | "-A" | "-B") {
                return unknown_choice(placement);
            }
            input("Rebase", "Destination revision:", special::WORKING_COPY)
        }
        [mode, placement, dest, ..] => {
            let dest = dest.trim();
            if dest.is_empty() {
                return Advance::Abort("Destination cannot be empty".to_string());
            }
            Advance::Run(
                JjCommand::new([commands::REBASE])
                    .opt(mode, id.as_str())
                    .opt(placement, dest),
            )
        }
    })
}

// ── bookmark ────────────────────────────────────────────────────────

fn bookmark(ctx: &WizardContext, answers: &[String]) -> Advance {
    let locals: Vec<Choice> = ctx
        .bookmarks
        .iter()
        .filter(|b| b.is_live_local())
        .map(|b| {
            let label = match &b.change_id {
                Some(target) => format!("{} ({})", b.name, target),
                None => b.name.clone(),
            };
            Choice::new(b.name.clone(), label)
        })
        .collect();
    let untracked: Vec<Choice> = ctx
        .bookmarks
        .iter()
        .filter(|b| b.is_untracked_remote())
        .map(|b| Choice::new(b.full_name(), b.full_name()))
        .collect();
    let tracked: Vec<Choice> = ctx
        .bookmarks
        .iter()
        .filter(|b| b.is_tracked_remote())
        .map(|b| Choice::new(b.full_name(), b.full_name()))
        .collect();

    let Some((action, rest)) = answers.split_first() else {
        let mut actions = Vec::new();
        if let Some(id) = &ctx.change_id {
            actions.push(Choice::new("create", format!("Create on {}", id)));
            if !locals.is_empty() {
                actions.push(Choice::new("move", format!("Move to {}", id)));
            }
        }
        if !locals.is_empty() {
            actions.push(Choice::new("delete", "Delete"));
            actions.push(Choice::new("rename", "Rename"));
        }
        if !untracked.is_empty() {
            actions.push(Choice::new("track", "Track remote bookmark"));
        }
        if !tracked.is_empty() {
            actions.push(Choice::new("untrack", "Untrack remote bookmark"));
        }
        if actions.is_empty() {
            return Advance::Abort("No bookmarks here and no change on this line".to_string());
        }
        return select("Bookmark", "Bookmark action:", actions);
    };

    let base = JjCommand::new([commands::BOOKMARK]);
    match action.as_str() {
        "create" => with_change(ctx, |id| match rest.first() {
            None => input("Create Bookmark", format!("New bookmark on {}:", id), ""),
            Some(name) if name.trim().is_empty() => {
                Advance::Abort("Bookmark name cannot be empty".to_string())
            }
            Some(name) => Advance::Run(
                base.arg("create")
                    .arg(name.trim())
                    .opt(flags::REVISION, id.as_str()),
            ),
        }),
        "move" => with_change(ctx, |id| match rest.first() {
            None => select("Move Bookmark", format!("Bookmark to move to {}:", id), locals),
            Some(name) => Advance::Run(
                base.arg("set")
                    .arg(name.as_str())
                    .opt(flags::REVISION, id.as_str())
                    .arg("--allow-backwards"),
            ),
        }),
        "delete" => match rest {
            [] => select("Delete Bookmark", "Bookmark to delete:", locals),
            [name, confirmation @ ..] => confirmed_or_prompt(
                ctx,
                confirmation,
                "Delete Bookmark",
                format!("Delete bookmark '{}'?", name),
                Some("Deletions will propagate to remotes on push.".to_string()),
                base.arg("delete").arg(name.as_str()),
            ),
        },
        "rename" => match rest {
            [] => select("Rename Bookmark", "Bookmark to rename:", locals),
            [old] => input("Rename Bookmark", format!("New name for '{}':", old), old.as_str()),
            [old, new, ..] => {
                let new = new.trim();
                if new.is_empty() {
                    Advance::Abort("Bookmark name cannot be empty".to_string())
                } else if new == old.as_str() {
                    Advance::Abort("Name unchanged".to_string())
                } else {
                    Advance::Run(base.arg("rename").arg(old.as_str()).arg(new))
                }
            }
        },
        "track" => match rest.first() {
            None => select("Track", "Remote bookmark to track:", untracked),
            Some(full) => Advance::Run(base.arg("track").arg(full.as_str())),
        },
        "untrack" => match rest.first() {
            None => select("Untrack", "Remote bookmark to untrack:", tracked),
            Some(full) => Advance::Run(base.arg("untrack").arg(full.as_str())),
        },
        other => unknown_choice(other),
    }
}

// ── push / fetch ────────────────────────────────────────────────────

/// Which remote a git command should use
enum RemoteChoice {
    /// `--remote <name>` or, with None, jj's default
    Fixed(Option<String>),
    /// More than one remote and nothing configured
    Ask(Vec<String>),
}

fn remote_choice(ctx: &WizardContext) -> RemoteChoice {
    if let Some(remote) = &ctx.default_remote {
        return RemoteChoice::Fixed(Some(remote.clone()));
    }
    if ctx.remotes.len() <= 1 {
        RemoteChoice::Fixed(None)
    } else {
        RemoteChoice::Ask(ctx.remotes.clone())
    }
}

fn push(ctx: &WizardContext, answers: &[String]) -> Advance {
    let Some((scope, mut rest)) = answers.split_first() else {
        let mut scopes = vec![Choice::new("default", "Tracked bookmarks (default)")];
        if ctx.bookmarks.iter().any(|b| b.is_live_local()) {
            scopes.push(Choice::new("bookmark", "A bookmark..."));
        }
        if let Some(id) = &ctx.change_id {
            scopes.push(Choice::new("change", format!("Change {} (new bookmark)", id)));
        }
        scopes.push(Choice::new("all", "All bookmarks (--all)"));
        scopes.push(Choice::new("deleted", "Deleted bookmarks (--deleted)"));
        return select("Git Push", "What to push:", scopes);
    };

    let mut cmd = JjCommand::new([commands::GIT, commands::GIT_PUSH]);
    match scope.as_str() {
        "default" => {}
        "bookmark" => {
            let Some((name, remaining)) = rest.split_first() else {
                let choices = ctx
                    .bookmarks
                    .iter()
                    .filter(|b| b.is_live_local())
                    .map(|b| Choice::new(b.name.clone(), b.name.clone()))
                    .collect();
                return select("Git Push", "Bookmark to push:", choices);
            };
            cmd = cmd.opt("-b", name.as_str());
            rest = remaining;
        }
        "change" => match &ctx.change_id {
            Some(id) => cmd = cmd.opt("-c", id.as_str()),
            None => return Advance::Abort("No change ID on the current line".to_string()),
        },
        "all" => cmd = cmd.arg("--all"),
        "deleted" => cmd = cmd.arg("--deleted"),
        other => return unknown_choice(other),
    }

    match remote_choice(ctx) {
        RemoteChoice::Fixed(Some(remote)) => cmd = cmd.opt("--remote", remote),
        RemoteChoice::Fixed(None) => {}
        RemoteChoice::Ask(remotes) => {
            let Some((remote, remaining)) = rest.split_first() else {
                let choices = remotes.into_iter().map(|r| Choice::new(r.clone(), r)).collect();
                return select("Git Push", "Push to remote:", choices);
            };
            cmd = cmd.opt("--remote", remote.as_str());
            rest = remaining;
        }
    }

    let message = format!("Push to remote?\n{}", cmd);
    confirmed_or_prompt(ctx, rest, "Git Push", message, None, cmd)
}

fn fetch(ctx: &WizardContext, answers: &[String]) -> Advance {
    let cmd = JjCommand::new([commands::GIT, commands::GIT_FETCH]);
    match remote_choice(ctx) {
        RemoteChoice::Fixed(Some(remote)) => Advance::Run(cmd.opt("--remote", remote)),
        RemoteChoice::Fixed(None) => Advance::Run(cmd),
        RemoteChoice::Ask(remotes) => match answers.first() {
            None => {
                let mut choices = vec![Choice::new("--all-remotes", "All remotes")];
                choices.extend(remotes.into_iter().map(|r| Choice::new(r.clone(), r)));
                select("Git Fetch", "Fetch from:", choices)
            }
            Some(all) if all == "--all-remotes" => Advance::Run(cmd.arg("--all-remotes")),
            Some(remote) => Advance::Run(cmd.opt("--remote", remote.as_str())),
        },
    }
}
