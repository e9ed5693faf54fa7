//! # ttyread Architecture
//!
//! ttyread prompts on the terminal, lets the user edit one line, and prints
//! that line, and nothing else, to standard output:
//!
//! ```sh
//! name=$(ttyread "Name: " --history ~/.name_history)
//! ```
//!
//! The prompt, the echo and all cursor movement go to the controlling
//! terminal (`/dev/tty`), so stdout can be a pipe or a file.
//!
//! ## Flow
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌─────────────┐   ┌────────────┐   ┌─────────────┐
//! │ args       │──▶│ terminal     │──▶│ history     │──▶│ editor     │──▶│ history     │──▶ emit
//! │ argv→Config│   │ open /dev/tty│   │ load (best  │   │ read_line  │   │ append +    │    (stdout)
//! └────────────┘   └──────────────┘   │ effort)     │   └────────────┘   │ persist     │
//!                                     └─────────────┘                    └─────────────┘
//! ```
//!
//! `main.rs` owns the process concerns (argv, stdout, stderr, exit status).
//! From [`session`] inward, code takes regular Rust values and returns
//! regular Rust types, so the whole flow is testable with a
//! [`ScriptedEditor`](editor::ScriptedEditor) and an in-memory history.
//!
//! ## Failure Policy
//!
//! - No controlling terminal, or a `/dev/tty` that is not a terminal:
//!   fatal, exit status 1, before any prompt.
//! - History file missing or unreadable: empty history, carry on.
//! - History file not writable: warning on stderr, the line is still printed.
//! - End of input (Ctrl-D on an empty line): success, nothing printed.
//!
//! ## Module Overview
//!
//! - [`args`]: argv → [`config::Config`]
//! - [`config`]: run configuration and defaults
//! - [`terminal`]: the `/dev/tty` channel
//! - [`history`]: history stores and the recall log
//! - [`editor`]: the line editor contract, backed by rustyline
//! - [`emit`]: writing the result
//! - [`session`]: the pipeline tying it together
//! - [`error`]: error types

pub mod args;
pub mod config;
pub mod editor;
pub mod emit;
pub mod error;
pub mod history;
pub mod session;
pub mod terminal;
