use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::{HIDE_CURSOR, SHOW_CURSOR};
use std::io::{self, BufRead, Write};

#[derive(Debug, Default, Clone)]
pub struct Prompter;

impl Prompter {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn hide_cursor() {
        print!("{HIDE_CURSOR}");
        let _ = io::stdout().flush();
    }

    #[inline]
    fn show_cursor() {
        print!("{SHOW_CURSOR}");
        let _ = io::stdout().flush();
    }

    /// Drives `flow` one line at a time until it finishes, the input ends, or
    /// the operator types `exit`.
    pub fn run_with_reader<F: Flow, R: BufRead>(&self, flow: &mut F, mut reader: R) -> Result<()> {
        while !flow.is_finished() {
            // Redraw
            Self::hide_cursor();
            flow.render()?;
            Self::show_cursor();

            // Read input
            let mut line = String::new();
            let n = reader.read_line(&mut line).map_err(Error::Io)?;
            if n == 0 {
                println!();
                return Ok(());
            }
            let line = line.trim();

            // Global escape hatch, unless `exit` is a choice here.
            if line.eq_ignore_ascii_case("exit") && !flow.claims(line) {
                return Ok(());
            }

            match flow.handle_input(line)? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish => return Ok(()),
            }
        }
        Ok(())
    }
}
