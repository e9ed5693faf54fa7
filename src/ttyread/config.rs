use std::path::{Path, PathBuf};

/// Prompt shown when no bare argument overrides it.
pub const DEFAULT_PROMPT: &str = ">> ";

/// Flags whose following argument names the history file.
pub const HISTORY_FLAGS: [&str; 2] = ["-e", "--history"];

/// Run configuration, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub history_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history_path: None,
        }
    }
}

impl Config {
    pub fn history_path(&self) -> Option<&Path> {
        self.history_path.as_deref()
    }
}
