//! Question graph for an interactive session and the typed workflow it
//! resolves to.
//!
//! Questions are nodes of a DAG. Each node names the questions it depends on
//! and carries an activation predicate over the answers recorded so far. The
//! graph orders nodes topologically once, at construction; a session walks
//! that order exactly once, asking only the nodes whose predicate holds at
//! the moment they are reached. Recorded answers are never revisited.

pub mod answers;
pub mod graph;
pub mod questions;
pub mod selection;

pub use answers::{AnswerValue, Answers, QuestionKey};
pub use graph::{Choice, Message, Question, QuestionKind, WorkflowGraph};
pub use selection::{AddSiteSpec, Selection, Workflow};
