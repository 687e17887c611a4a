//! Turns a finished `Selection` into the external call(s) it stands for and
//! folds the result into an `Outcome`.


use crate::core::models::SiteInventory;
use crate::core::types::ManageAction;
use crate::errors::Error;
use crate::logging::{LogTarget, Logger};
use crate::reconcile::reconcile;
use crate::reconcile::sequencer::{self, Applied};
use crate::sites::SiteManager;
use crate::workflow::selection::{AddSiteSpec, Selection, Workflow};

/// What the operator is told at the end of a session.
#[derive(Debug)]
pub struct Outcome {
    pub message: Option<String>,
    pub error: Option<Error>,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
        }
    }

    /// No workflow ran.
    pub fn neutral(message: Option<String>) -> Self {
        Self {
            message,
            error: None,
        }
    }

    pub fn failed(message: Option<String>, error: Error) -> Self {
        Self {
            message,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_error() { 1 } else { 0 }
    }
}

impl From<Error> for Outcome {
    fn from(err: Error) -> Self {
        Outcome::failed(None, err)
    }
}

/// `Sites enabled:` / `Sites disabled:` blocks, each only when non-empty.
pub fn format_applied(applied: &Applied) -> Option<String> {
    let mut blocks = Vec::new();
    if !applied.enabled.is_empty() {
        blocks.push(format!("Sites enabled: \n\t{}", applied.enabled.join("\n\t")));
    }
    if !applied.disabled.is_empty() {
        blocks.push(format!("Sites disabled: \n\t{}", applied.disabled.join("\n\t")));
    }
    (!blocks.is_empty()).then(|| blocks.join("\n"))
}

pub struct Dispatcher<'a, M: SiteManager + ?Sized> {
    manager: &'a mut M,
    logger: &'a Logger,
}

impl<'a, M: SiteManager + ?Sized> Dispatcher<'a, M> {
    pub fn new(manager: &'a mut M, logger: &'a Logger) -> Self {
        Self { manager, logger }
    }

    /// At most one mutating call, except toggle which runs its phased plan.
    pub fn dispatch(&mut self, selection: Selection, inventory: &SiteInventory) -> Outcome {
        match selection {
            Selection::Exit => Outcome::neutral(None),
            Selection::Declined { site } => {
                self.logger
                    .info(format!("Removal of '{site}' declined"), LogTarget::FileOnly);
                Outcome::neutral(Some(format!("{site} was not removed")))
            }
            Selection::Run(Workflow::Toggle { desired }) => self.toggle(&desired, inventory),
            Selection::Run(Workflow::Add(spec)) => self.add(spec),
            Selection::Run(Workflow::Remove { site }) => self.remove(site),
            Selection::Run(Workflow::Manage(action)) => self.manage(action),
        }
    }

    fn toggle(&mut self, desired: &[String], inventory: &SiteInventory) -> Outcome {
        let delta = reconcile(inventory.enabled(), desired);
        let requested = if delta.is_empty() {
            "Toggle requested with no site changes".to_string()
        } else {
            format!(
                "Toggle requested: enable [{}], disable [{}]",
                delta.to_enable.join(", "),
                delta.to_disable.join(", ")
            )
        };
        self.logger.info(requested, LogTarget::FileOnly);

        match sequencer::apply(&mut *self.manager, &delta.to_enable, &delta.to_disable) {
            Ok(applied) => {
                self.log_applied(&applied);
                Outcome::success(
                    format_applied(&applied)
                        .unwrap_or_else(|| "No site changes; configuration reloaded".to_string()),
                )
            }
            Err(err) => {
                let message = match &err {
                    Error::Sequence { completed, .. } => {
                        self.log_applied(completed);
                        format_applied(completed)
                            .map(|done| format!("Completed before the failure:\n{done}"))
                    }
                    _ => None,
                };
                self.log_failure("Toggle", &err);
                Outcome::failed(message, err)
            }
        }
    }

    fn add(&mut self, spec: AddSiteSpec) -> Outcome {
        let result = match &spec {
            AddSiteSpec::FromFile { config_path } => self
                .manager
                .add_site_from_file(config_path)
                .map(|()| format!("Added site from {}", config_path.display())),
            AddSiteSpec::StaticTemplate(site) => self.manager.add_static_site(site),
            AddSiteSpec::ProxyTemplate(site) => self.manager.add_proxy_site(site),
        };
        match result {
            Ok(message) => {
                self.logger.info(&message, LogTarget::FileOnly);
                Outcome::success(message)
            }
            Err(err) => {
                self.log_failure("Add site", &err);
                Outcome::failed(None, err)
            }
        }
    }

    fn remove(&mut self, site: String) -> Outcome {
        match self.manager.remove_site(&site) {
            Ok(()) => {
                self.logger
                    .info(format!("Removed site '{site}'"), LogTarget::FileOnly);
                Outcome::success(format!("{site} removed"))
            }
            Err(err) => {
                self.log_failure(&format!("Remove '{site}'"), &err);
                Outcome::failed(None, err)
            }
        }
    }

    fn manage(&mut self, action: ManageAction) -> Outcome {
        match self.manager.manage_server(action) {
            Ok(()) => {
                self.logger
                    .info(format!("Server action '{action}' succeeded"), LogTarget::FileOnly);
                Outcome::success(action.success_message())
            }
            Err(err) => {
                self.log_failure(&format!("Server action '{action}'"), &err);
                Outcome::failed(Some(format!("failed to {action} nginx")), err)
            }
        }
    }

    fn log_applied(&self, applied: &Applied) {
        for name in &applied.enabled {
            self.logger
                .info(format!("Enabled site '{name}'"), LogTarget::FileOnly);
        }
        for name in &applied.disabled {
            self.logger
                .info(format!("Disabled site '{name}'"), LogTarget::FileOnly);
        }
        if applied.reloaded {
            self.logger.info("Reloaded nginx", LogTarget::FileOnly);
        }
    }

    fn log_failure(&self, what: &str, err: &Error) {
        self.logger
            .error(format!("{what} failed: {err}"), LogTarget::FileOnly);
    }
}
