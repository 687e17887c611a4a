use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::chrome::UiChrome;
use crate::workflow::answers::Answers;
use crate::workflow::graph::{Question, QuestionKind, WorkflowGraph};

/// Asks the active questions of a `WorkflowGraph` in order, one per input
/// line, and accumulates the answers.
pub struct QuestionFlow<'g> {
    graph: &'g WorkflowGraph,
    answers: Answers,
    current: Option<usize>,
    notice: Option<String>,
    chrome: UiChrome,
}

impl<'g> QuestionFlow<'g> {
    pub fn new(graph: &'g WorkflowGraph) -> Self {
        let answers = Answers::new();
        let current = graph.next_active(0, &answers);
        Self {
            graph,
            answers,
            current,
            notice: None,
            chrome: UiChrome::new(),
        }
    }

    pub fn current_question(&self) -> Option<&'g Question> {
        self.current.and_then(|idx| self.graph.get(idx))
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn into_answers(self) -> Answers {
        self.answers
    }

    #[cfg(test)]
    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn render_question(&self, question: &Question) {
        let message = question.message(&self.answers);
        let hint = question.default_hint();
        println!("{}", self.chrome.format_question(&message, hint.as_deref()));

        match &question.kind {
            QuestionKind::List { choices } => {
                for (i, choice) in choices.iter().enumerate() {
                    println!("{}", self.chrome.format_choice_line(i + 1, &choice.label, None));
                }
            }
            QuestionKind::Checkbox { choices } => {
                for (i, choice) in choices.iter().enumerate() {
                    println!(
                        "{}",
                        self.chrome
                            .format_choice_line(i + 1, &choice.label, Some(choice.checked))
                    );
                }
            }
            QuestionKind::Input { .. } | QuestionKind::Confirm { .. } => {}
        }
        self.chrome.print_prompt("> ");
    }
}

impl<'g> Flow for QuestionFlow<'g> {
    fn render(&mut self) -> Result<()> {
        if let Some(notice) = self.notice.take() {
            self.chrome.print_notice(&notice);
        }
        if let Some(question) = self.current_question() {
            self.render_question(question);
        }
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        let Some(idx) = self.current else {
            return Ok(FlowCtrl::Finish);
        };
        let question = self
            .graph
            .get(idx)
            .ok_or_else(|| Error::Graph(format!("no question at position {idx}")))?;

        let value = match question.accept(input) {
            Ok(value) => value,
            Err(Error::Prompt(reason)) => {
                // same question again
                self.notice = Some(reason);
                return Ok(FlowCtrl::Continue);
            }
            Err(other) => return Err(other),
        };
        self.answers.record(question.key, value)?;

        self.current = self.graph.next_active(idx + 1, &self.answers);
        Ok(match self.current {
            Some(_) => FlowCtrl::Continue,
            None => FlowCtrl::Finish,
        })
    }

    fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    fn claims(&self, input: &str) -> bool {
        self.current_question().is_some_and(|q| q.has_choice(input))
    }
}
