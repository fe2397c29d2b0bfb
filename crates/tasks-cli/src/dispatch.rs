// crates/tasks-cli/src/dispatch.rs - Command name resolution
//
// The set of commands is closed: CommandKind enumerates them and the
// Dispatcher registers every variant by name when it is built. Anything
// not in the table is an UnknownCommand, never a panic.

use std::io::Write;
use tracing::debug;

use crate::commands::{self, CommandError, CommandResult};
use crate::context::Context;

/// Uniform handler signature shared by every command
pub type Handler = fn(&mut Context, &[String], &mut dyn Write) -> CommandResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    List,
    Add,
    Delete,
    Update,
    MarkInProgress,
    MarkDone,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        CommandKind::List,
        CommandKind::Add,
        CommandKind::Delete,
        CommandKind::Update,
        CommandKind::MarkInProgress,
        CommandKind::MarkDone,
    ];

    /// Name typed on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add => "add",
            Self::Delete => "del",
            Self::Update => "update",
            Self::MarkInProgress => "mark-in-progress",
            Self::MarkDone => "mark-done",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::List => "list [todo|in-progress|done]",
            Self::Add => "add <content>",
            Self::Delete => "del <id>",
            Self::Update => "update <id> <content>",
            Self::MarkInProgress => "mark-in-progress <id>",
            Self::MarkDone => "mark-done <id>",
        }
    }

    /// Minimum number of positional arguments; extra ones are ignored
    pub fn required_args(self) -> usize {
        match self {
            Self::List => 0,
            Self::Add | Self::Delete | Self::MarkInProgress | Self::MarkDone => 1,
            Self::Update => 2,
        }
    }

    pub fn handler(self) -> Handler {
        match self {
            Self::List => commands::list::handle,
            Self::Add => commands::add::handle,
            Self::Delete => commands::remove::handle,
            Self::Update => commands::update::handle,
            Self::MarkInProgress => commands::mark::handle_in_progress,
            Self::MarkDone => commands::mark::handle_done,
        }
    }

    /// Fail with `MissingArgument` when too few arguments were given
    pub fn check_arity(self, args: &[String]) -> CommandResult {
        if args.len() < self.required_args() {
            return Err(CommandError::MissingArgument {
                command: self.name(),
                usage: self.usage(),
            });
        }
        Ok(())
    }
}

/// Maps command names to command kinds
pub struct Dispatcher {
    table: Vec<(&'static str, CommandKind)>,
}

impl Dispatcher {
    /// Register every known command
    pub fn new() -> Self {
        let table = CommandKind::ALL
            .iter()
            .map(|kind| (kind.name(), *kind))
            .collect();
        Self { table }
    }

    /// Look up a command by name
    pub fn resolve(&self, name: Option<&str>) -> Result<CommandKind, CommandError> {
        let name = name.ok_or(CommandError::MissingCommand)?;
        self.table
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string(), self.known_names()))
    }

    /// Resolve, validate and run one command
    ///
    /// Recoverable errors (no command given, unknown note id, invalid
    /// status filter) are printed to `out` here and the invocation still
    /// succeeds.
    pub fn dispatch(
        &self,
        ctx: &mut Context,
        name: Option<&str>,
        args: &[String],
        out: &mut dyn Write,
    ) -> CommandResult {
        match self.run(ctx, name, args, &mut *out) {
            Err(err) if err.is_recoverable() => {
                writeln!(out, "{}", err)?;
                Ok(())
            }
            result => result,
        }
    }

    fn run(
        &self,
        ctx: &mut Context,
        name: Option<&str>,
        args: &[String],
        out: &mut dyn Write,
    ) -> CommandResult {
        let kind = self.resolve(name)?;
        kind.check_arity(args)?;

        debug!(command = kind.name(), args = args.len(), "dispatching");
        (kind.handler())(ctx, args, out)
    }

    fn known_names(&self) -> String {
        self.table
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
