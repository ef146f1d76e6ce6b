//! Wizard driving: context capture, dialog results, and the final command

use tracing::{debug, info, warn};

use crate::ui::components::{Dialog, DialogResult};
use crate::wizard::{Advance, CONFIRMED, Flow, Wizard, WizardContext};

use crate::app::state::App;

impl App {
    /// Start a wizard for the change on the current log line
    pub(crate) fn start_wizard(&mut self, flow: Flow) {
        let change_id = self.log_pane.current_change_id();
        if flow.needs_change() && change_id.is_none() {
            self.notify_warning("No change ID on the current line");
            return;
        }

        let Some(ctx) = self.wizard_context(&flow, change_id) else {
            return;
        };

        info!(flow = flow.name(), "wizard started");
        let wizard = Wizard::new(flow, ctx);
        let advance = wizard.advance();
        self.wizard = Some(wizard);
        self.apply_advance(advance);
    }

    /// Start a wizard with answers already given (e.g. the bookmark picked
    /// in the bookmark pane)
    pub(crate) fn start_wizard_with(&mut self, flow: Flow, answers: &[&str]) {
        let change_id = self.log_pane.current_change_id();
        let Some(ctx) = self.wizard_context(&flow, change_id) else {
            return;
        };

        info!(flow = flow.name(), "wizard started");
        let mut wizard = Wizard::new(flow, ctx);
        let mut advance = wizard.advance();
        for answer in answers {
            if !matches!(advance, Advance::Prompt(_)) {
                break;
            }
            advance = wizard.answer(*answer);
        }
        self.wizard = Some(wizard);
        self.apply_advance(advance);
    }

    /// Capture what the flow needs from jj; `None` (with the error shown)
    /// when jj could not be queried
    fn wizard_context(
        &mut self,
        flow: &Flow,
        change_id: Option<crate::model::ChangeId>,
    ) -> Option<WizardContext> {
        let mut ctx = WizardContext {
            default_remote: self.session.config.git.remote.clone(),
            confirm: self.session.config.ui.confirm_destructive,
            ..WizardContext::default()
        };

        if *flow == Flow::Describe
            && let Some(id) = &change_id
        {
            match self.session.jj.description(id.as_str()) {
                Ok(description) => ctx.description = description,
                Err(e) => {
                    self.set_error(format!("Failed to get description: {}", e.summary()));
                    return None;
                }
            }
        }

        if flow.needs_bookmarks() {
            match self.session.jj.bookmark_list_text() {
                Ok(text) => ctx.bookmarks = crate::jj::parser::parse_bookmark_list(&text),
                Err(e) => {
                    self.set_error(format!("Failed to list bookmarks: {}", e.summary()));
                    return None;
                }
            }
        }

        if flow.needs_remotes() {
            match self.session.jj.git_remotes() {
                Ok(remotes) => ctx.remotes = remotes,
                Err(e) => {
                    self.set_error(format!("Failed to list remotes: {}", e.summary()));
                    return None;
                }
            }
        }

        ctx.change_id = change_id;
        Some(ctx)
    }

    /// Act on the wizard's next step
    pub(crate) fn apply_advance(&mut self, advance: Advance) {
        match advance {
            Advance::Prompt(step) => {
                debug!(?step, "wizard prompt");
                self.active_dialog = Some(Dialog::from_step(step));
            }
            Advance::Run(command) => {
                self.active_dialog = None;
                if let Some(wizard) = self.wizard.take() {
                    info!(flow = wizard.flow().name(), %command, "wizard finished");
                }
                self.run_command(command);
            }
            Advance::Abort(message) => {
                self.active_dialog = None;
                if let Some(wizard) = self.wizard.take() {
                    warn!(flow = wizard.flow().name(), %message, "wizard aborted");
                }
                self.notify_warning(message);
            }
        }
    }

    /// Handle dialog result
    ///
    /// A confirmed Confirm dialog answers [`CONFIRMED`]; other dialogs
    /// answer with the value they return. Cancelling ends the wizard.
    pub(crate) fn handle_dialog_result(&mut self, result: DialogResult) {
        let was_confirm = self
            .active_dialog
            .take()
            .is_some_and(|d| d.hint_kind() == crate::keys::DialogHintKind::Confirm);

        let Some(wizard) = self.wizard.as_mut() else {
            return;
        };

        match result {
            DialogResult::Cancelled => {
                info!(flow = wizard.flow().name(), "wizard cancelled");
                self.wizard = None;
                self.notify_info("Cancelled");
            }
            DialogResult::Confirmed(values) => {
                let answer = if was_confirm {
                    CONFIRMED.to_string()
                } else {
                    values.into_iter().next().unwrap_or_default()
                };
                let advance = wizard.answer(answer);
                self.apply_advance(advance);
            }
        }
    }
}
