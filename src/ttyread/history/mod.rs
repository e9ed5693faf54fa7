//! # History
//!
//! Previously accepted lines, recalled with Up/Down while editing and
//! optionally persisted between runs.
//!
//! Storage is split the same way throughout: a [`HistoryStore`] knows *where*
//! lines live (a file on disk, or memory in tests), while [`HistoryLog`]
//! owns the rules:
//!
//! - Loading is best effort. A missing file is an empty history; an unreadable
//!   one is reported at debug level and also treated as empty.
//! - Only a non-empty line is appended. Whitespace counts as content.
//! - After an append the whole log is written back. There is no deduplication,
//!   no size cap, and no timestamps.
//!
//! ## File Format
//!
//! ```text
//! first accepted line\n
//! second accepted line\n
//! ```
//!
//! Plain newline-delimited text with no header. Lines are kept as raw bytes:
//! blank lines and invalid UTF-8 are written back exactly as they were read.
//! They are only left out of (or lossily decoded for) the recall list.

use crate::error::Result;
use log::debug;

pub mod file;
pub mod memory;

pub use file::FileHistory;
pub use memory::MemHistory;

/// Raw persistence for history lines.
pub trait HistoryStore {
    /// Reads all lines, oldest first, without their `\n`. A store that does
    /// not exist yet is empty.
    fn load(&self) -> Result<Vec<Vec<u8>>>;

    /// Replaces the stored lines with `lines`.
    fn save(&self, lines: &[Vec<u8>]) -> Result<()>;

    /// Human readable location, used in log messages.
    fn location(&self) -> String;
}

/// History for one run, as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    lines: Vec<Vec<u8>>,
}

impl HistoryLog {
    #[cfg(test)]
    pub(crate) fn new(lines: Vec<Vec<u8>>) -> Self {
        Self { lines }
    }

    /// Loads the log from `store`, falling back to an empty log on any error.
    pub fn load<S: HistoryStore + ?Sized>(store: &S) -> Self {
        match store.load() {
            Ok(lines) => {
                debug!(
                    "Loaded {} history lines from {}",
                    lines.len(),
                    store.location()
                );
                Self { lines }
            }
            Err(e) => {
                debug!("Ignoring unreadable history {}: {}", store.location(), e);
                Self::default()
            }
        }
    }

    /// Appends `line` as the newest entry. Returns false (and leaves the log
    /// alone) when the line is empty.
    pub fn push(&mut self, line: &str) -> bool {
        if line.is_empty() {
            return false;
        }
        self.lines.push(line.as_bytes().to_vec());
        true
    }

    /// Writes the full log to `store`.
    pub fn persist<S: HistoryStore + ?Sized>(&self, store: &S) -> Result<()> {
        store.save(&self.lines)?;
        debug!(
            "Saved {} history lines to {}",
            self.lines.len(),
            store.location()
        );
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    /// Entries offered for recall, oldest first: blank lines are left out
    /// and invalid UTF-8 is replaced.
    pub fn recall(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect()
    }
}
