// crates/tasks-cli/src/commands/mod.rs - Command Handler Modules
//
// Every handler has the same shape: it receives the context, the raw
// positional arguments and the output sink, and returns a CommandResult.
// The dispatcher checks arity first, but handlers still read their
// arguments through `required_arg` so a direct call cannot panic.
//
// MODULE ORGANIZATION:
// - list: listing, optionally filtered by status
// - add: note creation
// - remove: note deletion
// - update: content replacement
// - mark: status transitions

use std::io;
use tasks_core::StoreError;
use thiserror::Error;

use crate::dispatch::CommandKind;

pub mod add;
pub mod list;
pub mod mark;
pub mod remove;
pub mod update;

/// Exit code for a completed invocation, including recoverable errors
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for errors in how the program was invoked
pub const EXIT_USAGE: i32 = 2;
/// Exit code for everything else that stops an invocation
pub const EXIT_FAILURE: i32 = 1;

/// Errors a command invocation can end with
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("No command error")]
    MissingCommand,

    #[error("unknown command '{0}' (expected one of: {1})")]
    UnknownCommand(String, String),

    #[error("missing argument for '{command}', usage: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    #[error("invalid id '{0}': expected a non-negative integer")]
    MalformedArgument(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CommandError {
    /// Errors that are reported on stdout without failing the invocation
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingCommand
                | Self::Store(StoreError::NotFound(_))
                | Self::Store(StoreError::InvalidStatus(_))
        )
    }

    /// Process exit code for an error that reached the top level
    pub fn exit_code(&self) -> i32 {
        if self.is_recoverable() {
            return EXIT_SUCCESS;
        }
        match self {
            Self::MissingCommand
            | Self::UnknownCommand(..)
            | Self::MissingArgument { .. }
            | Self::MalformedArgument(_) => EXIT_USAGE,
            Self::Store(_) | Self::Output(_) => EXIT_FAILURE,
        }
    }
}

/// Result type for command handlers
pub type CommandResult = Result<(), CommandError>;

/// The positional argument at `index`, or `MissingArgument` for `kind`
pub fn required_arg(args: &[String], index: usize, kind: CommandKind) -> Result<&str, CommandError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument {
            command: kind.name(),
            usage: kind.usage(),
        })
}

/// Parse a note id argument
pub fn parse_id(raw: &str) -> Result<u64, CommandError> {
    raw.trim()
        .parse()
        .map_err(|_| CommandError::MalformedArgument(raw.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveTime;
    use std::cell::Cell;
    use tasks_core::{JsonStorage, NoteStore};
    use tempfile::TempDir;

    use crate::cli::OutputFormat;
    use crate::context::Context;
    use crate::dispatch::Handler;

    /// Clock advancing one second per call from 08:00:00
    fn ticking_clock() -> impl Fn() -> NaiveTime {
        let tick = Cell::new(0u32);
        move || {
            let seconds = tick.get();
            tick.set(seconds + 1);
            NaiveTime::from_num_seconds_from_midnight_opt(8 * 3600 + seconds, 0).unwrap()
        }
    }

    /// A context over a fresh store in its own temporary directory
    pub fn context(format: OutputFormat) -> (TempDir, Context) {
        let temp = TempDir::new().unwrap();
        let store = NoteStore::load(JsonStorage::new(temp.path().join("data.json")))
            .unwrap()
            .with_clock(ticking_clock());
        (temp, Context::with_store(store, format))
    }

    pub fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    /// Run a handler and capture what it printed
    pub fn run(handler: Handler, ctx: &mut Context, values: &[&str]) -> (super::CommandResult, String) {
        let mut out: Vec<u8> = Vec::new();
        let result = handler(ctx, &args(values), &mut out);
        (result, String::from_utf8(out).unwrap())
    }
}
