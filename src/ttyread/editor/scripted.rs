use super::{LineEditor, ReadOutcome};
use crate::error::Result;
use std::collections::VecDeque;

/// Editor that replays queued outcomes instead of talking to a terminal.
///
/// Records every prompt and recall list it was handed. Once the queue is
/// empty it reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    outcomes: VecDeque<ReadOutcome>,
    prompts: Vec<String>,
    recalled: Vec<Vec<String>>,
}

impl ScriptedEditor {
    pub fn new<I: IntoIterator<Item = ReadOutcome>>(outcomes: I) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Shorthand for an editor whose user types `line` and presses Enter.
    pub fn accepting(line: &str) -> Self {
        Self::new([ReadOutcome::Accepted(line.to_string())])
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// The recall list seen by each call, in call order.
    pub fn recalled(&self) -> &[Vec<String>] {
        &self.recalled
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str, history: &[String]) -> Result<ReadOutcome> {
        self.prompts.push(prompt.to_string());
        self.recalled.push(history.to_vec());
        Ok(self.outcomes.pop_front().unwrap_or(ReadOutcome::EndOfInput))
    }
}
