use std::collections::BTreeMap;

use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive};

use crate::errors::{Error, Result};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, AsRefStr, EnumIterDerive,
)]
#[strum(serialize_all = "snake_case")]
pub enum QuestionKey {
    Action,
    ToggleSites,
    AddMode,
    ConfigPath,
    Port,
    ServerName,
    SiteRoot,
    ProxyHost,
    ProxyPort,
    RemoveTarget,
    ConfirmRemove,
    ManageVerb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    Selection(Vec<String>),
    Flag(bool),
}

impl AnswerValue {
    /// Non-empty text, any recorded selection, or a `true` flag.
    pub fn is_truthy(&self) -> bool {
        match self {
            AnswerValue::Text(s) => !s.is_empty(),
            AnswerValue::Selection(_) => true,
            AnswerValue::Flag(b) => *b,
        }
    }
}

/// Answers gathered so far in one session, keyed by question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: BTreeMap<QuestionKey, AnswerValue>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each question is answered at most once.
    pub fn record(&mut self, key: QuestionKey, value: AnswerValue) -> Result<()> {
        if self.values.contains_key(&key) {
            return Err(Error::Graph(format!("'{key}' was already answered")));
        }
        self.values.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: QuestionKey) -> Option<&AnswerValue> {
        self.values.get(&key)
    }

    pub fn contains(&self, key: QuestionKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn text(&self, key: QuestionKey) -> Option<&str> {
        match self.get(key)? {
            AnswerValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn selection(&self, key: QuestionKey) -> Option<&[String]> {
        match self.get(key)? {
            AnswerValue::Selection(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn flag(&self, key: QuestionKey) -> Option<bool> {
        match self.get(key)? {
            AnswerValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn has_value(&self, key: QuestionKey) -> bool {
        self.get(key).is_some_and(AnswerValue::is_truthy)
    }

    /// True when `key` holds the text of `choice`.
    pub fn is<C: AsRef<str>>(&self, key: QuestionKey, choice: C) -> bool {
        self.text(key) == Some(choice.as_ref())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
