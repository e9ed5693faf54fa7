//! # Line Editor
//!
//! The rest of the program only needs one thing from an editor: show a
//! prompt, let the user edit a single line with the recall list at hand, and
//! report how the session ended. That contract is [`LineEditor`].
//!
//! ## Implementations
//!
//! - [`readline::RustylineEditor`]: the interactive editor, backed by
//!   `rustyline`. Cursor movement, kill/yank, Up/Down recall and rendering
//!   are all rustyline's; this crate only seeds the recall list and maps the
//!   result.
//! - [`scripted::ScriptedEditor`]: replays canned outcomes, for tests and for
//!   embedding the session without a terminal.

use crate::error::Result;

pub mod readline;
pub mod scripted;

pub use readline::RustylineEditor;
pub use scripted::ScriptedEditor;

/// How an editing session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The user confirmed the line (which may be empty).
    Accepted(String),
    /// The user signalled end of input instead of confirming a line.
    EndOfInput,
    /// The user interrupted the session.
    Interrupted,
}

pub trait LineEditor {
    /// Shows `prompt` and blocks until the user accepts a line, ends input or
    /// interrupts. `history` is the recall list, oldest first.
    fn read_line(&mut self, prompt: &str, history: &[String]) -> Result<ReadOutcome>;
}
