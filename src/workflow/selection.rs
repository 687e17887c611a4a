use std::path::PathBuf;

use crate::core::models::{ProxySite, StaticSite};
use crate::core::types::ManageAction;
use crate::errors::{Error, Result, require_answer};
use crate::workflow::answers::{Answers, QuestionKey as K};

/// How a new site is provisioned. Built only once every field is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddSiteSpec {
    FromFile { config_path: PathBuf },
    StaticTemplate(StaticSite),
    ProxyTemplate(ProxySite),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workflow {
    /// `desired` is the complete set of sites that should end up enabled.
    Toggle { desired: Vec<String> },
    Add(AddSiteSpec),
    Remove { site: String },
    Manage(ManageAction),
}

/// Where a finished question session leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Run(Workflow),
    /// The operator declined to remove `site`.
    Declined { site: String },
    Exit,
}

/// Answers that end a workflow branch.
const TERMINAL_KEYS: [K; 6] = [
    K::ToggleSites,
    K::ConfigPath,
    K::SiteRoot,
    K::ProxyPort,
    K::ConfirmRemove,
    K::ManageVerb,
];

impl Selection {
    /// Chooses the workflow from whichever terminal answer is populated. The
    /// top-level action answer is never consulted: the activation predicates
    /// already decided which branch could be reached.
    pub fn from_answers(answers: &Answers) -> Result<Self> {
        let populated: Vec<K> = TERMINAL_KEYS
            .into_iter()
            .filter(|k| answers.contains(*k))
            .collect();

        let key = match populated.as_slice() {
            [] => return Ok(Selection::Exit),
            [key] => *key,
            many => {
                let names: Vec<String> = many.iter().map(|k| k.to_string()).collect();
                return Err(Error::Graph(format!(
                    "answers select more than one workflow: {}",
                    names.join(", ")
                )));
            }
        };

        let workflow = match key {
            K::ToggleSites => Workflow::Toggle {
                desired: require_answer(answers.selection(K::ToggleSites), key)?.to_vec(),
            },
            K::ConfigPath => Workflow::Add(AddSiteSpec::FromFile {
                config_path: PathBuf::from(text(answers, K::ConfigPath)?),
            }),
            K::SiteRoot => Workflow::Add(AddSiteSpec::StaticTemplate(StaticSite {
                port: text(answers, K::Port)?,
                server_name: text(answers, K::ServerName)?,
                site_root: text(answers, K::SiteRoot)?,
            })),
            K::ProxyPort => Workflow::Add(AddSiteSpec::ProxyTemplate(ProxySite {
                port: text(answers, K::Port)?,
                server_name: text(answers, K::ServerName)?,
                proxy_host: text(answers, K::ProxyHost)?,
                proxy_port: text(answers, K::ProxyPort)?,
            })),
            K::ConfirmRemove => {
                let site = text(answers, K::RemoveTarget)?;
                if !require_answer(answers.flag(K::ConfirmRemove), key)? {
                    return Ok(Selection::Declined { site });
                }
                Workflow::Remove { site }
            }
            K::ManageVerb => Workflow::Manage(ManageAction::try_from(&text(answers, K::ManageVerb)?)?),
            other => return Err(Error::MissingAnswer { key: other }),
        };
        Ok(Selection::Run(workflow))
    }
}

fn text(answers: &Answers, key: K) -> Result<String> {
    require_answer(answers.text(key), key).map(str::to_string)
}
