use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString, IntoStaticStr};

/// Human-facing text for an enum offered as a list choice.
pub trait ChoiceLabel {
    fn label(&self) -> &'static str;
}

/// Top-level operator intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum ActionChoice {
    #[strum(serialize = "toggle")]
    Toggle,
    #[strum(serialize = "add")]
    Add,
    #[strum(serialize = "remove")]
    Remove,
    #[strum(serialize = "manage")]
    Manage,
    #[strum(serialize = "exit")]
    Exit,
}

impl ChoiceLabel for ActionChoice {
    fn label(&self) -> &'static str {
        match self {
            ActionChoice::Toggle => "enable/disable a site",
            ActionChoice::Add => "add a site",
            ActionChoice::Remove => "remove a site",
            ActionChoice::Manage => "start/stop/restart nginx",
            ActionChoice::Exit => "exit",
        }
    }
}

/// How a new site gets its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum AddMode {
    #[strum(serialize = "from-file")]
    FromFile,
    #[strum(serialize = "static-template")]
    StaticTemplate,
    #[strum(serialize = "proxy-template")]
    ProxyTemplate,
}

impl AddMode {
    pub fn is_template(&self) -> bool {
        matches!(self, AddMode::StaticTemplate | AddMode::ProxyTemplate)
    }
}

impl ChoiceLabel for AddMode {
    fn label(&self) -> &'static str {
        match self {
            AddMode::FromFile => "enter path to config file",
            AddMode::StaticTemplate => "use static template",
            AddMode::ProxyTemplate => "use proxy template",
        }
    }
}

/// Server lifecycle verbs understood by the control command.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, IntoStaticStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive)]
pub enum ManageAction {
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "stop")]
    Stop,
    #[strum(serialize = "restart")]
    Restart,
    #[strum(serialize = "reload")]
    Reload,
    #[strum(serialize = "force-reload")]
    ForceReload,
    #[strum(serialize = "status")]
    Status,
    #[strum(serialize = "configtest")]
    ConfigTest,
    #[strum(serialize = "rotate")]
    Rotate,
    #[strum(serialize = "upgrade")]
    Upgrade,
}

impl ManageAction {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::prompt(format!(
                "Unsupported server action: '{}'. Valid actions: {}",
                s.trim(),
                valid_csv::<ManageAction>()
            ))
        })
    }

    /// What to tell the operator after the verb succeeded.
    pub fn success_message(&self) -> String {
        let done = match self {
            ManageAction::Start => "started",
            ManageAction::Stop => "stopped",
            ManageAction::Restart => "restarted",
            ManageAction::Reload => "reloaded",
            ManageAction::ForceReload => "force-reloaded",
            ManageAction::Status => "status checked",
            ManageAction::ConfigTest => "configuration test passed",
            ManageAction::Rotate => "logs rotated",
            ManageAction::Upgrade => "upgraded",
        };
        format!("nginx {done}")
    }
}

impl ChoiceLabel for ManageAction {
    fn label(&self) -> &'static str {
        (*self).into()
    }
}
