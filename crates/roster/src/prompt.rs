//! Interactive prompt seam.
//!
//! The engine never touches a terminal: anything that needs an operator
//! decision goes through [`PromptProvider`]. The CLI supplies a blocking
//! stdin implementation; tests supply [`ScriptedPrompt`]. Every method is
//! fallible so a closed input stream surfaces as an ordinary error
//! instead of ending the process mid-flow.

use std::fmt;

/// The interactive input stream is gone (closed stdin). Nothing further
/// can be asked; callers abort the current flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptClosed;

impl fmt::Display for PromptClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interactive prompt closed")
    }
}

impl std::error::Error for PromptClosed {}

/// Operator decisions the engine can ask for.
pub trait PromptProvider {
    /// Yes/no question. Implementations decide the default.
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, PromptClosed>;

    /// Pick one index out of `options`. Implementations must return a
    /// valid index (re-prompting on malformed input is their concern).
    fn select_from_list(&mut self, prompt: &str, options: &[String])
        -> Result<usize, PromptClosed>;

    /// Free-form line of input, trimmed.
    fn ask_line(&mut self, prompt: &str) -> Result<String, PromptClosed>;
}

/// Scripted provider for headless tests: answers are consumed in order.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    yes_no: std::collections::VecDeque<bool>,
    selections: std::collections::VecDeque<usize>,
    lines: std::collections::VecDeque<String>,
    closed: bool,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_yes_no(&mut self, answer: bool) -> &mut Self {
        self.yes_no.push_back(answer);
        self
    }

    pub fn push_selection(&mut self, index: usize) -> &mut Self {
        self.selections.push_back(index);
        self
    }

    pub fn push_line(&mut self, line: &str) -> &mut Self {
        self.lines.push_back(line.to_string());
        self
    }

    /// Simulate a closed input stream: every later ask fails.
    pub fn close(&mut self) -> &mut Self {
        self.closed = true;
        self
    }
}

impl PromptProvider for ScriptedPrompt {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, PromptClosed> {
        if self.closed {
            return Err(PromptClosed);
        }
        Ok(self
            .yes_no
            .pop_front()
            .unwrap_or_else(|| panic!("scripted prompt exhausted at yes/no: {prompt}")))
    }

    fn select_from_list(
        &mut self,
        prompt: &str,
        options: &[String],
    ) -> Result<usize, PromptClosed> {
        if self.closed {
            return Err(PromptClosed);
        }
        let ix = self
            .selections
            .pop_front()
            .unwrap_or_else(|| panic!("scripted prompt exhausted at selection: {prompt}"));
        assert!(
            ix < options.len(),
            "scripted selection {ix} out of range for {} options",
            options.len()
        );
        Ok(ix)
    }

    fn ask_line(&mut self, prompt: &str) -> Result<String, PromptClosed> {
        if self.closed {
            return Err(PromptClosed);
        }
        Ok(self
            .lines
            .pop_front()
            .unwrap_or_else(|| panic!("scripted prompt exhausted at line: {prompt}")))
    }
}
