use std::io::Write;
use tasks_core::Status;

use super::{CommandResult, parse_id, required_arg};
use crate::context::Context;
use crate::dispatch::CommandKind;

/// `mark-in-progress <id>`
pub fn handle_in_progress(ctx: &mut Context, args: &[String], out: &mut dyn Write) -> CommandResult {
    mark(ctx, args, out, CommandKind::MarkInProgress, Status::InProgress)
}

/// `mark-done <id>`
pub fn handle_done(ctx: &mut Context, args: &[String], out: &mut dyn Write) -> CommandResult {
    mark(ctx, args, out, CommandKind::MarkDone, Status::Done)
}

// `todo` is only ever the initial status; no command moves a note back to it.
fn mark(
    ctx: &mut Context,
    args: &[String],
    out: &mut dyn Write,
    kind: CommandKind,
    status: Status,
) -> CommandResult {
    let id = parse_id(required_arg(args, 0, kind)?)?;
    ctx.store.set_status(id, status)?;
    writeln!(out, "Task marked as {} (ID: {})", status, id)?;
    Ok(())
}
