use crate::core::models::SiteInventory;
use crate::core::types::{ActionChoice, AddMode, ManageAction};
use crate::errors::Result;
use crate::extensions::string::{LOOPBACK_ADDR, ToLoopbackHost};
use crate::workflow::answers::{Answers, QuestionKey as K};
use crate::workflow::graph::{Choice, Message, Question, WorkflowGraph};

pub const DEFAULT_PORT: &str = "80";
pub const DEFAULT_PROXY_HOST: &str = LOOPBACK_ADDR;
pub const DEFAULT_PROXY_PORT: &str = "8080";

/// The full session graph. Site lists come from the inventory snapshot.
pub fn build(inventory: &SiteInventory) -> Result<WorkflowGraph> {
    let toggle_choices = inventory
        .sites()
        .into_iter()
        .map(|site| Choice::new(site.name.as_str(), site.name.as_str()).checked(site.enabled))
        .collect();
    let remove_choices = inventory
        .available()
        .iter()
        .map(|name| Choice::new(name.as_str(), name.as_str()))
        .collect();

    WorkflowGraph::new(vec![
        Question::list(
            K::Action,
            "What would you like to do?",
            Choice::from_enum::<ActionChoice>(),
        ),
        // toggle
        Question::checkbox(
            K::ToggleSites,
            "Select sites to enable (numbers or names, blank keeps current, 'none' clears):",
            toggle_choices,
        )
        .after(&[K::Action])
        .when(|a| a.is(K::Action, ActionChoice::Toggle)),
        // add
        Question::list(
            K::AddMode,
            "How would you like to add a site?",
            Choice::from_enum::<AddMode>(),
        )
        .after(&[K::Action])
        .when(|a| a.is(K::Action, ActionChoice::Add)),
        Question::input(K::ConfigPath, "Enter path to config file:")
            .after(&[K::AddMode])
            .when(|a| a.is(K::AddMode, AddMode::FromFile)),
        Question::input(K::Port, "What port is Nginx listening on?")
            .with_default(DEFAULT_PORT)
            .with_validator(validate_port)
            .after(&[K::AddMode])
            .when(|a| add_mode(a).is_some_and(|m| m.is_template())),
        Question::input(K::ServerName, "Enter the site name:")
            .with_validator(validate_site_name)
            .after(&[K::Port])
            .when(|a| a.has_value(K::Port)),
        Question::input(K::SiteRoot, "Enter the path to the site root:")
            .after(&[K::AddMode, K::ServerName])
            .when(|a| a.is(K::AddMode, AddMode::StaticTemplate) && a.has_value(K::ServerName)),
        Question::input(K::ProxyHost, "Enter the proxy server IP address:")
            .with_default(DEFAULT_PROXY_HOST)
            .with_filter(|host| host.to_loopback_host())
            .after(&[K::AddMode, K::ServerName])
            .when(|a| a.is(K::AddMode, AddMode::ProxyTemplate) && a.has_value(K::ServerName)),
        // scoped to the proxy template so a stray host answer never leaks in
        Question::input(K::ProxyPort, "Enter the proxy server port:")
            .with_default(DEFAULT_PROXY_PORT)
            .with_validator(validate_port)
            .after(&[K::AddMode, K::ProxyHost])
            .when(|a| a.is(K::AddMode, AddMode::ProxyTemplate) && a.has_value(K::ProxyHost)),
        // remove
        Question::list(K::RemoveTarget, "Select a site to remove", remove_choices)
            .after(&[K::Action])
            .when(|a| a.is(K::Action, ActionChoice::Remove)),
        Question::confirm(K::ConfirmRemove, Message::Dynamic(confirm_remove_message), false)
            .after(&[K::Action, K::RemoveTarget])
            .when(|a| a.is(K::Action, ActionChoice::Remove) && a.has_value(K::RemoveTarget)),
        // manage
        Question::list(
            K::ManageVerb,
            "Choose action:",
            Choice::from_enum::<ManageAction>(),
        )
        .after(&[K::Action])
        .when(|a| a.is(K::Action, ActionChoice::Manage)),
    ])
}

fn add_mode(answers: &Answers) -> Option<AddMode> {
    answers.text(K::AddMode)?.parse().ok()
}

fn confirm_remove_message(answers: &Answers) -> String {
    let site = answers.text(K::RemoveTarget).unwrap_or_default();
    format!("Are you sure you want to remove {site}?")
}

pub fn validate_port(raw: &str) -> std::result::Result<(), String> {
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(()),
        _ => Err(format!("'{raw}' is not a port number between 1 and 65535.")),
    }
}

/// Site names become file names.
pub fn validate_site_name(raw: &str) -> std::result::Result<(), String> {
    if raw.contains(['/', '\\']) || raw == "." || raw == ".." {
        return Err(format!("'{raw}' cannot be used as a site name."));
    }
    Ok(())
}
