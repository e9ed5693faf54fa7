//! The controlling terminal, opened independently of the standard streams.
//!
//! Holding a [`TerminalChannel`] proves the process has a terminal to talk
//! to. The prompt, echo and keystrokes all go through that device, so the
//! standard output stays free for the accepted line.

use crate::error::{Result, TtyReadError};
use log::debug;
use rustix::termios;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Device node of the controlling terminal.
pub const TTY_PATH: &str = "/dev/tty";

/// Exclusively owned read+write handle to a terminal device.
///
/// The handle is closed when the channel is dropped.
#[derive(Debug)]
pub struct TerminalChannel {
    file: File,
    path: PathBuf,
}

impl TerminalChannel {
    /// Opens the controlling terminal of the current process.
    pub fn open() -> Result<Self> {
        Self::open_path(TTY_PATH)
    }

    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| TtyReadError::TerminalOpen {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Opened terminal channel {}", path.display());
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fails with [`TtyReadError::TerminalMode`] unless the device is a terminal.
    pub fn ensure_terminal(&self) -> Result<()> {
        if termios::isatty(&self.file) {
            return Ok(());
        }
        Err(TtyReadError::TerminalMode(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("{} is not a terminal", self.path.display()),
        )))
    }
}
