//! Command line resolution.
//!
//! The grammar is positional and forgiving: `-e <path>` / `--history <path>`
//! consume two arguments, everything else (unknown flags included) replaces
//! the prompt. There is no usage error path: every argument list resolves.

use crate::config::{Config, HISTORY_FLAGS};
use std::ffi::OsString;
use std::path::PathBuf;

fn is_history_flag(arg: &OsString) -> bool {
    HISTORY_FLAGS.iter().any(|flag| arg == *flag)
}

/// Builds a [`Config`] from the arguments that follow the program name.
pub fn resolve<I, S>(args: I) -> Config
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut config = Config::default();
    let mut args = args.into_iter().map(S::into);

    while let Some(arg) = args.next() {
        if is_history_flag(&arg) {
            if let Some(path) = args.next() {
                config.history_path = Some(PathBuf::from(path));
                continue;
            }
        }
        config.prompt = arg.to_string_lossy().into_owned();
    }

    config
}
