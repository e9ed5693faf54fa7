use super::HistoryStore;
use crate::error::{Result, TtyReadError};
use std::cell::{Cell, RefCell};

/// In-memory history store for testing and embedding.
///
/// Uses `RefCell`/`Cell` since a run is single-threaded; this keeps the
/// `HistoryStore` methods on `&self`.
#[derive(Debug, Default)]
pub struct MemHistory {
    lines: RefCell<Vec<Vec<u8>>>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
    saves: Cell<usize>,
}

impl MemHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<String>) -> Self {
        Self::with_lines(entries)
    }

    pub fn with_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            lines: RefCell::new(lines.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Make the next loads fail, as an unreadable file would.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Make the next saves fail, as a full disk would.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn lines(&self) -> Vec<Vec<u8>> {
        self.lines.borrow().clone()
    }

    /// Stored lines decoded as text.
    pub fn entries(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl HistoryStore for MemHistory {
    fn load(&self) -> Result<Vec<Vec<u8>>> {
        if self.simulate_read_error.get() {
            return Err(TtyReadError::Store("Simulated read error".to_string()));
        }
        Ok(self.lines.borrow().clone())
    }

    fn save(&self, lines: &[Vec<u8>]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(TtyReadError::Store("Simulated write error".to_string()));
        }
        *self.lines.borrow_mut() = lines.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
