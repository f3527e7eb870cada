//! Blocking stdin/stderr prompt implementation.
//!
//! Prompts go to stderr so stdout stays clean for `--json` output. A
//! closed stdin yields `PromptClosed`, which callers surface through the
//! normal error path.

use std::io::{self, BufRead, Write};

use gradekit_roster::{PromptClosed, PromptProvider};

#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> Result<String, PromptClosed> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => Err(PromptClosed),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }
}

impl PromptProvider for TerminalPrompt {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, PromptClosed> {
        eprint!("{prompt} (y/N): ");
        let _ = io::stderr().flush();
        Ok(matches!(self.read_line()?.to_lowercase().as_str(), "y" | "yes"))
    }

    fn select_from_list(
        &mut self,
        prompt: &str,
        options: &[String],
    ) -> Result<usize, PromptClosed> {
        loop {
            eprintln!("{prompt}");
            for (i, option) in options.iter().enumerate() {
                eprintln!("  ({i}) {option}");
            }
            eprint!("choice: ");
            let _ = io::stderr().flush();
            match self.read_line()?.parse::<usize>() {
                Ok(ix) if ix < options.len() => return Ok(ix),
                _ => eprintln!("invalid selection, pick 0-{}", options.len() - 1),
            }
        }
    }

    fn ask_line(&mut self, prompt: &str) -> Result<String, PromptClosed> {
        eprint!("{prompt}: ");
        let _ = io::stderr().flush();
        self.read_line()
    }
}
