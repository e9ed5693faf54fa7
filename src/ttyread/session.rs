//! One read: load history, edit, record, emit.
//!
//! Everything here takes plain Rust values (an editor, an optional store, a
//! writer) and never touches the process's streams or exit status, so the
//! whole flow runs in tests with a [`ScriptedEditor`](crate::editor::ScriptedEditor).

use crate::config::Config;
use crate::editor::{LineEditor, ReadOutcome};
use crate::emit::emit_line;
use crate::error::Result;
use crate::history::{FileHistory, HistoryLog, HistoryStore};
use log::{debug, warn};
use std::io::Write;

/// Exit status for a session the user interrupted (128 + SIGINT).
pub const EXIT_INTERRUPTED: i32 = 130;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A non-empty line was accepted and written out.
    Emitted(String),
    /// The user confirmed an empty line; nothing was written.
    EmptyLine,
    EndOfInput,
    Interrupted,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Interrupted => EXIT_INTERRUPTED,
            _ => 0,
        }
    }

    /// The line written to the output, if any.
    pub fn line(&self) -> Option<&str> {
        match self {
            Outcome::Emitted(line) => Some(line),
            _ => None,
        }
    }
}

/// Result of a session: the outcome and whether the history was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    pub history_saved: bool,
}

/// Runs a session for `config`, using a [`FileHistory`] when a history path is set.
pub fn run<E, W>(config: &Config, editor: &mut E, out: &mut W) -> Result<Report>
where
    E: LineEditor + ?Sized,
    W: Write + ?Sized,
{
    match config.history_path() {
        Some(path) => {
            let store = FileHistory::new(path);
            read_once(&config.prompt, editor, Some(&store), out)
        }
        None => read_once::<E, FileHistory, W>(&config.prompt, editor, None, out),
    }
}

/// Runs a session against an explicit store.
///
/// With `store == None` no history is read or written and the editor gets an
/// empty recall list.
pub fn read_once<E, S, W>(
    prompt: &str,
    editor: &mut E,
    store: Option<&S>,
    out: &mut W,
) -> Result<Report>
where
    E: LineEditor + ?Sized,
    S: HistoryStore + ?Sized,
    W: Write + ?Sized,
{
    let mut log = store.map(HistoryLog::load).unwrap_or_default();

    let recall = log.recall();
    let line = match editor.read_line(prompt, &recall)? {
        ReadOutcome::Accepted(line) => line,
        ReadOutcome::EndOfInput => {
            debug!("End of input, nothing to emit");
            return Ok(Report {
                outcome: Outcome::EndOfInput,
                history_saved: false,
            });
        }
        ReadOutcome::Interrupted => {
            debug!("Interrupted, nothing to emit");
            return Ok(Report {
                outcome: Outcome::Interrupted,
                history_saved: false,
            });
        }
    };

    if line.is_empty() {
        return Ok(Report {
            outcome: Outcome::EmptyLine,
            history_saved: false,
        });
    }

    let mut history_saved = false;
    if let Some(store) = store {
        log.push(&line);
        // A failed save must not keep the line from being emitted.
        match log.persist(store) {
            Ok(()) => history_saved = true,
            Err(e) => warn!("Could not save history: {}", e),
        }
    }

    emit_line(out, &line)?;
    Ok(Report {
        outcome: Outcome::Emitted(line),
        history_saved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ScriptedEditor;
    use crate::history::MemHistory;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_accepted_line_is_recorded_and_emitted() {
        let store = MemHistory::with_entries(entries(&["alpha", "beta"]));
        let mut editor = ScriptedEditor::accepting("gamma");
        let mut out = Vec::new();

        let report = read_once(">> ", &mut editor, Some(&store), &mut out).unwrap();

        assert_eq!(report.outcome, Outcome::Emitted("gamma".to_string()));
        assert!(report.history_saved);
        assert_eq!(out, b"gamma\n");
        assert_eq!(store.entries(), entries(&["alpha", "beta", "gamma"]));
        assert_eq!(editor.recalled(), &[entries(&["alpha", "beta"])]);
        assert_eq!(editor.prompts(), &[">> ".to_string()]);
    }

    #[test]
    fn test_without_store_recall_list_is_empty() {
        let mut editor = ScriptedEditor::accepting("x");
        let mut out = Vec::new();

        let report = read_once::<_, MemHistory, _>("? ", &mut editor, None, &mut out).unwrap();

        assert_eq!(report.outcome.line(), Some("x"));
        assert!(!report.history_saved);
        assert_eq!(out, b"x\n");
        assert_eq!(editor.recalled(), &[Vec::<String>::new()]);
    }

    #[test]
    fn test_empty_line_emits_nothing_and_keeps_history() {
        let store = MemHistory::with_entries(entries(&["alpha"]));
        let mut editor = ScriptedEditor::accepting("");
        let mut out = Vec::new();

        let report = read_once(">> ", &mut editor, Some(&store), &mut out).unwrap();

        assert_eq!(report.outcome, Outcome::EmptyLine);
        assert_eq!(report.outcome.exit_code(), 0);
        assert!(out.is_empty());
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.entries(), entries(&["alpha"]));
    }

    #[test]
    fn test_blank_and_undecodable_lines_survive_a_save() {
        let store = MemHistory::with_lines([
            b"caf\xe9".as_slice(),
            b"".as_slice(),
            b"beta".as_slice(),
        ]);
        let mut editor = ScriptedEditor::accepting("gamma");
        let mut out = Vec::new();

        read_once(">> ", &mut editor, Some(&store), &mut out).unwrap();

        assert_eq!(editor.recalled()[0].len(), 2);
        assert_eq!(
            store.lines(),
            vec![
                b"caf\xe9".to_vec(),
                Vec::new(),
                b"beta".to_vec(),
                b"gamma".to_vec()
            ]
        );
    }

    #[test]
    fn test_whitespace_line_is_recorded() {
        let store = MemHistory::new();
        let mut editor = ScriptedEditor::accepting("   ");
        let mut out = Vec::new();

        read_once(">> ", &mut editor, Some(&store), &mut out).unwrap();

        assert_eq!(out, b"   \n");
        assert_eq!(store.entries(), entries(&["   "]));
    }

    #[test]
    fn test_end_of_input_writes_nothing() {
        let store = MemHistory::with_entries(entries(&["alpha"]));
        let mut editor = ScriptedEditor::new([ReadOutcome::EndOfInput]);
        let mut out = Vec::new();

        let report = read_once(">> ", &mut editor, Some(&store), &mut out).unwrap();

        assert_eq!(report.outcome, Outcome::EndOfInput);
        assert_eq!(report.outcome.exit_code(), 0);
        assert!(out.is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_interrupt_writes_nothing() {
        let store = MemHistory::new();
        let mut editor = ScriptedEditor::new([ReadOutcome::Interrupted]);
        let mut out = Vec::new();

        let report = read_once(">> ", &mut editor, Some(&store), &mut out).unwrap();

        assert_eq!(report.outcome, Outcome::Interrupted);
        assert_eq!(report.outcome.exit_code(), EXIT_INTERRUPTED);
        assert!(out.is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_unreadable_history_still_reads_and_records() {
        let store = MemHistory::with_entries(entries(&["lost"]));
        store.set_simulate_read_error(true);
        let mut editor = ScriptedEditor::accepting("fresh");
        let mut out = Vec::new();

        let report = read_once(">> ", &mut editor, Some(&store), &mut out).unwrap();

        assert_eq!(editor.recalled(), &[Vec::<String>::new()]);
        assert!(report.history_saved);
        assert_eq!(out, b"fresh\n");
        assert_eq!(store.entries(), entries(&["fresh"]));
    }

    #[test]
    fn test_history_write_failure_still_emits() {
        let store = MemHistory::new();
        store.set_simulate_write_error(true);
        let mut editor = ScriptedEditor::accepting("keep me");
        let mut out = Vec::new();

        let report = read_once(">> ", &mut editor, Some(&store), &mut out).unwrap();

        assert_eq!(report.outcome, Outcome::Emitted("keep me".to_string()));
        assert!(!report.history_saved);
        assert_eq!(out, b"keep me\n");
    }

    #[test]
    fn test_run_uses_configured_prompt() {
        let config = Config {
            prompt: "name: ".to_string(),
            history_path: None,
        };
        let mut editor = ScriptedEditor::accepting("ada");
        let mut out = Vec::new();

        run(&config, &mut editor, &mut out).unwrap();

        assert_eq!(editor.prompts(), &["name: ".to_string()]);
        assert_eq!(out, b"ada\n");
    }
}
