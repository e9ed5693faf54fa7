use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtyReadError {
    #[error("Cannot open terminal {}: {source}", .path.display())]
    TerminalOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot configure terminal: {0}")]
    TerminalMode(#[source] io::Error),

    #[error("History file {}: {source}", .path.display())]
    History {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("History store error: {0}")]
    Store(String),

    #[error("Line editor error: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TtyReadError>;
