use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

use crate::reconcile::sequencer::{Applied, Step};
use crate::workflow::answers::QuestionKey;

/// Every failure a session can run into.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Inventory ----------------------------------------------------------
    /// Listing available/enabled sites failed. Fatal before any prompting.
    #[error("Inventory error: {0}")]
    Inventory(String),

    // ---- External actions ---------------------------------------------------
    /// A collaborator call (enable, disable, add, remove, manage) failed.
    #[error("{0}")]
    Action(String),

    /// A phased toggle run stopped at `step`; `completed` is what ran before it.
    #[error("{step} failed: {source}")]
    Sequence {
        step: Step,
        completed: Applied,
        source: Box<Error>,
    },

    // ---- Config -------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    // ---- Prompting / workflow -----------------------------------------------
    /// Operator input that does not fit the current question.
    #[error("{0}")]
    Prompt(String),

    /// The question graph references an unknown question or contains a cycle.
    #[error("Question graph error: {0}")]
    Graph(String),

    /// A terminal workflow was reached without one of its required answers.
    #[error("Missing answer for '{key}'")]
    MissingAnswer { key: QuestionKey },

    // ---- Plumbing / Wrappers ------------------------------------------------
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn inventory<S: Into<String>>(msg: S) -> Self {
        Error::Inventory(msg.into())
    }
    pub fn action<S: Into<String>>(msg: S) -> Self {
        Error::Action(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn prompt<S: Into<String>>(msg: S) -> Self {
        Error::Prompt(msg.into())
    }
}

/// Map an `Option<T>` into `Result<T, Error::MissingAnswer>` for `key`.
pub fn require_answer<T>(opt: Option<T>, key: QuestionKey) -> Result<T> {
    opt.ok_or(Error::MissingAnswer { key })
}
