use super::{LineEditor, ReadOutcome};
use crate::error::Result;
use crate::terminal::TerminalChannel;
use log::debug;
use rustyline::config::{Behavior, Configurer};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

/// Recall capacity when the loaded history is shorter than this.
const MIN_RECALL: usize = 100;

/// Interactive editor on the controlling terminal.
///
/// Built with [`Behavior::PreferTerm`], so rustyline draws on and reads
/// from `/dev/tty` even when stdin or stdout is redirected. Rustyline's own
/// history file handling is not used; the recall list comes from the caller.
pub struct RustylineEditor {
    editor: DefaultEditor,
}

impl RustylineEditor {
    /// Builds an editor for `channel`, which must be a terminal.
    pub fn for_terminal(channel: &TerminalChannel) -> Result<Self> {
        channel.ensure_terminal()?;

        let config = Config::builder()
            .behavior(Behavior::PreferTerm)
            .auto_add_history(false)
            .build();
        let mut editor = DefaultEditor::with_config(config)?;
        editor.set_history_ignore_dups(false)?;
        debug!("Line editor bound to {}", channel.path().display());

        Ok(Self { editor })
    }

    fn seed_history(&mut self, history: &[String]) -> Result<()> {
        self.editor.clear_history()?;
        self.editor.set_max_history_size(history.len().max(MIN_RECALL))?;
        for entry in history {
            self.editor.add_history_entry(entry.as_str())?;
        }
        Ok(())
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str, history: &[String]) -> Result<ReadOutcome> {
        self.seed_history(history)?;

        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Accepted(line)),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::EndOfInput),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(e) => Err(e.into()),
        }
    }
}
