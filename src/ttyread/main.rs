use log::{debug, LevelFilter};
use std::io;
use std::process;
use ttyread::args;
use ttyread::config::Config;
use ttyread::editor::RustylineEditor;
use ttyread::error::Result;
use ttyread::session;
use ttyread::terminal::TerminalChannel;

/// Filter for diagnostics on stderr, in env_logger syntax (e.g. `TTYREAD_LOG=debug`).
const LOG_ENV: &str = "TTYREAD_LOG";

fn main() {
    init_logging();

    let config = args::resolve(std::env::args_os().skip(1));
    debug!("Resolved {:?}", config);

    // `process::exit` skips destructors; `run` has already dropped the editor
    // and the terminal channel.
    match run(&config) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_env(LOG_ENV)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(config: &Config) -> Result<i32> {
    let channel = TerminalChannel::open()?;
    let mut editor = RustylineEditor::for_terminal(&channel)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = session::run(config, &mut editor, &mut out)?;
    debug!("Session ended: {:?}", report);

    Ok(report.outcome.exit_code())
}
