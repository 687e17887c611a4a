use std::collections::BTreeSet;

use strum::IntoEnumIterator;

use crate::core::types::ChoiceLabel;
use crate::errors::{Error, Result};
use crate::workflow::answers::{AnswerValue, Answers, QuestionKey};

/// Decides from earlier answers whether a question is asked.
pub type Predicate = fn(&Answers) -> bool;
/// Rewrites accepted input before it is recorded.
pub type Filter = fn(&str) -> String;
/// Rejects input with a reason shown to the operator.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            checked: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// One choice per enum variant, valued by its string form.
    pub fn from_enum<T>() -> Vec<Choice>
    where
        T: IntoEnumIterator + AsRef<str> + ChoiceLabel,
    {
        T::iter()
            .map(|v| Choice::new(v.as_ref(), v.label()))
            .collect()
    }

    fn matches(&self, token: &str) -> bool {
        self.value == token
            || self.value.eq_ignore_ascii_case(token)
            || self.label.eq_ignore_ascii_case(token)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Fixed(String),
    /// Built from earlier answers when the question is shown.
    Dynamic(fn(&Answers) -> String),
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message::Fixed(s.to_string())
    }
}

#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Exactly one choice.
    List { choices: Vec<Choice> },
    /// Any subset of the choices; `checked` marks the pre-selected ones.
    Checkbox { choices: Vec<Choice> },
    Input {
        default: Option<String>,
        filter: Option<Filter>,
        validate: Option<Validator>,
    },
    Confirm { default: bool },
}

#[derive(Debug, Clone)]
pub struct Question {
    pub key: QuestionKey,
    pub message: Message,
    pub kind: QuestionKind,
    depends_on: Vec<QuestionKey>,
    when: Predicate,
}

fn always(_: &Answers) -> bool {
    true
}

impl Question {
    fn with_kind(key: QuestionKey, message: impl Into<Message>, kind: QuestionKind) -> Self {
        Self {
            key,
            message: message.into(),
            kind,
            depends_on: Vec::new(),
            when: always,
        }
    }

    pub fn list(key: QuestionKey, message: impl Into<Message>, choices: Vec<Choice>) -> Self {
        Self::with_kind(key, message, QuestionKind::List { choices })
    }

    pub fn checkbox(key: QuestionKey, message: impl Into<Message>, choices: Vec<Choice>) -> Self {
        Self::with_kind(key, message, QuestionKind::Checkbox { choices })
    }

    pub fn input(key: QuestionKey, message: impl Into<Message>) -> Self {
        Self::with_kind(
            key,
            message,
            QuestionKind::Input {
                default: None,
                filter: None,
                validate: None,
            },
        )
    }

    pub fn confirm(key: QuestionKey, message: impl Into<Message>, default: bool) -> Self {
        Self::with_kind(key, message, QuestionKind::Confirm { default })
    }

    /// Only meaningful for input questions.
    pub fn with_default(mut self, value: &str) -> Self {
        if let QuestionKind::Input { default, .. } = &mut self.kind {
            *default = Some(value.to_string());
        }
        self
    }

    pub fn with_filter(mut self, f: Filter) -> Self {
        if let QuestionKind::Input { filter, .. } = &mut self.kind {
            *filter = Some(f);
        }
        self
    }

    pub fn with_validator(mut self, v: Validator) -> Self {
        if let QuestionKind::Input { validate, .. } = &mut self.kind {
            *validate = Some(v);
        }
        self
    }

    pub fn after(mut self, deps: &[QuestionKey]) -> Self {
        self.depends_on.extend_from_slice(deps);
        self
    }

    pub fn when(mut self, predicate: Predicate) -> Self {
        self.when = predicate;
        self
    }

    pub fn depends_on(&self) -> &[QuestionKey] {
        &self.depends_on
    }

    pub fn is_active(&self, answers: &Answers) -> bool {
        (self.when)(answers)
    }

    pub fn message(&self, answers: &Answers) -> String {
        match &self.message {
            Message::Fixed(s) => s.clone(),
            Message::Dynamic(f) => f(answers),
        }
    }

    pub fn choices(&self) -> &[Choice] {
        match &self.kind {
            QuestionKind::List { choices } | QuestionKind::Checkbox { choices } => choices,
            _ => &[],
        }
    }

    /// True when `raw` is exactly the value of one of the choices.
    pub fn has_choice(&self, raw: &str) -> bool {
        self.choices().iter().any(|c| c.value == raw)
    }

    /// Text shown in parentheses after the message, if any.
    pub fn default_hint(&self) -> Option<String> {
        match &self.kind {
            QuestionKind::Input { default, .. } => default.clone(),
            QuestionKind::Confirm { default } => {
                Some(if *default { "Y/n" } else { "y/N" }.to_string())
            }
            _ => None,
        }
    }

    /// Turns one line of operator input into an answer, applying defaults,
    /// validation and filters. Rejections are `Error::Prompt`.
    pub fn accept(&self, raw: &str) -> Result<AnswerValue> {
        let raw = raw.trim();
        match &self.kind {
            QuestionKind::List { choices } => accept_list(choices, raw),
            QuestionKind::Checkbox { choices } => accept_checkbox(choices, raw),
            QuestionKind::Input {
                default,
                filter,
                validate,
            } => {
                let value = match (raw.is_empty(), default) {
                    (false, _) => raw.to_string(),
                    (true, Some(d)) => d.clone(),
                    (true, None) => return Err(Error::prompt("A value is required.")),
                };
                if let Some(validate) = validate {
                    validate(&value).map_err(Error::prompt)?;
                }
                let value = match filter {
                    Some(f) => f(&value),
                    None => value,
                };
                Ok(AnswerValue::Text(value))
            }
            QuestionKind::Confirm { default } => match raw.to_ascii_lowercase().as_str() {
                "" => Ok(AnswerValue::Flag(*default)),
                "y" | "yes" => Ok(AnswerValue::Flag(true)),
                "n" | "no" => Ok(AnswerValue::Flag(false)),
                _ => Err(Error::prompt("Please answer y or n.")),
            },
        }
    }
}

/// Exact values win over positions, so a site named `2` is never mistaken
/// for the second entry.
fn pick(choices: &[Choice], token: &str) -> Option<usize> {
    if let Some(idx) = choices.iter().position(|c| c.value == token) {
        return Some(idx);
    }
    if let Ok(n) = token.parse::<usize>()
        && (1..=choices.len()).contains(&n)
    {
        return Some(n - 1);
    }
    choices.iter().position(|c| c.matches(token))
}

fn accept_list(choices: &[Choice], raw: &str) -> Result<AnswerValue> {
    if choices.is_empty() {
        return Err(Error::prompt("No choices available; type 'exit' to leave."));
    }
    pick(choices, raw)
        .filter(|_| !raw.is_empty())
        .map(|i| AnswerValue::Text(choices[i].value.clone()))
        .ok_or_else(|| Error::prompt(format!("Please choose one of 1..{}.", choices.len())))
}

fn accept_checkbox(choices: &[Choice], raw: &str) -> Result<AnswerValue> {
    if raw.is_empty() {
        let kept = choices
            .iter()
            .filter(|c| c.checked)
            .map(|c| c.value.clone())
            .collect();
        return Ok(AnswerValue::Selection(kept));
    }
    // a site actually named `none` shadows the keyword
    if raw.eq_ignore_ascii_case("none") && !choices.iter().any(|c| c.matches(raw)) {
        return Ok(AnswerValue::Selection(Vec::new()));
    }

    let mut picked = BTreeSet::new();
    for token in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let idx = pick(choices, token)
            .ok_or_else(|| Error::prompt(format!("Unknown choice '{token}'.")))?;
        picked.insert(idx);
    }
    // report in choice order, not typing order
    Ok(AnswerValue::Selection(
        picked.into_iter().map(|i| choices[i].value.clone()).collect(),
    ))
}

/// Questions in dependency order.
#[derive(Debug, Clone)]
pub struct WorkflowGraph {
    nodes: Vec<Question>,
}

impl WorkflowGraph {
    /// Orders `questions` so that every node follows the nodes it depends on,
    /// keeping declaration order among independent nodes. Unknown
    /// dependencies, duplicate keys and cycles are rejected.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut keys = BTreeSet::new();
        for q in &questions {
            if !keys.insert(q.key) {
                return Err(Error::Graph(format!("duplicate question '{}'", q.key)));
            }
        }
        for q in &questions {
            if let Some(missing) = q.depends_on.iter().find(|d| !keys.contains(*d)) {
                return Err(Error::Graph(format!(
                    "'{}' depends on unknown question '{missing}'",
                    q.key
                )));
            }
        }

        let mut pending = questions;
        let mut placed: BTreeSet<QuestionKey> = BTreeSet::new();
        let mut nodes = Vec::with_capacity(pending.len());
        while !pending.is_empty() {
            let ready = pending
                .iter()
                .position(|q| q.depends_on.iter().all(|d| placed.contains(d)))
                .ok_or_else(|| {
                    let stuck: Vec<String> = pending.iter().map(|q| q.key.to_string()).collect();
                    Error::Graph(format!("dependency cycle among: {}", stuck.join(", ")))
                })?;
            let node = pending.remove(ready);
            placed.insert(node.key);
            nodes.push(node);
        }
        Ok(Self { nodes })
    }

    pub fn questions(&self) -> &[Question] {
        &self.nodes
    }

    pub fn get(&self, idx: usize) -> Option<&Question> {
        self.nodes.get(idx)
    }

    pub fn position(&self, key: QuestionKey) -> Option<usize> {
        self.nodes.iter().position(|q| q.key == key)
    }

    /// First node at or after `from` whose predicate holds for `answers`.
    pub fn next_active(&self, from: usize, answers: &Answers) -> Option<usize> {
        (from..self.nodes.len()).find(|&i| self.nodes[i].is_active(answers))
    }

    /// Walks the graph once without a terminal. `respond` supplies the raw
    /// line for each asked question, or `None` to stop early. Rejected input
    /// is returned as an error instead of being re-asked.
    pub fn resolve<F>(&self, mut respond: F) -> Result<Answers>
    where
        F: FnMut(&Question, &Answers) -> Option<String>,
    {
        let mut answers = Answers::new();
        let mut cursor = 0;
        while let Some(idx) = self.next_active(cursor, &answers) {
            let question = &self.nodes[idx];
            let Some(raw) = respond(question, &answers) else {
                break;
            };
            let value = question.accept(&raw)?;
            answers.record(question.key, value)?;
            cursor = idx + 1;
        }
        Ok(answers)
    }
}
