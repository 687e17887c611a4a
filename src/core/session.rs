use crate::core::models::SiteInventory;
use crate::dispatch::{Dispatcher, Outcome};
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::prompter::flows::question_flow::QuestionFlow;
use crate::prompter::prompter::Prompter;
use crate::sites::SiteManager;
use crate::ui::chrome::UiChrome;
use crate::workflow::questions;
use crate::workflow::selection::Selection;
use std::io::BufRead;

/// One interactive session: snapshot the sites, ask the questions, run the
/// chosen workflow.
pub struct Session<'a, M: SiteManager + ?Sized> {
    manager: &'a mut M,
    logger: &'a Logger,
    chrome: UiChrome,
}

impl<'a, M: SiteManager + ?Sized> Session<'a, M> {
    pub fn new(manager: &'a mut M, logger: &'a Logger) -> Self {
        Self {
            manager,
            logger,
            chrome: UiChrome::new(),
        }
    }

    pub fn run<R: BufRead>(&mut self, reader: R) -> Outcome {
        let (inventory, selection) = match self.collect(reader) {
            Ok(parts) => parts,
            Err(err) => {
                self.logger
                    .error(format!("Session aborted: {err}"), LogTarget::FileOnly);
                return err.into();
            }
        };
        Dispatcher::new(&mut *self.manager, self.logger).dispatch(selection, &inventory)
    }

    fn collect<R: BufRead>(&mut self, reader: R) -> Result<(SiteInventory, Selection)> {
        let inventory = SiteInventory::capture(&*self.manager)?;
        self.logger.info(
            format!(
                "Session started with {} available and {} enabled site(s)",
                inventory.available().len(),
                inventory.enabled().len()
            ),
            LogTarget::FileOnly,
        );

        self.chrome.print_banner();
        println!();
        self.chrome.print_site_listing(&inventory.sites());

        let graph = questions::build(&inventory)?;
        let mut flow = QuestionFlow::new(&graph);
        Prompter::new().run_with_reader(&mut flow, reader)?;
        let selection = Selection::from_answers(flow.answers())?;
        Ok((inventory, selection))
    }
}
