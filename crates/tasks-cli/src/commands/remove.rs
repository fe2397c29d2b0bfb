use std::io::Write;

use super::{CommandResult, parse_id, required_arg};
use crate::context::Context;
use crate::dispatch::CommandKind;

/// Delete the note whose id is the first argument
pub fn handle(ctx: &mut Context, args: &[String], out: &mut dyn Write) -> CommandResult {
    let id = parse_id(required_arg(args, 0, CommandKind::Delete)?)?;
    ctx.store.remove(id)?;
    writeln!(out, "Task deleted successfully (ID: {})", id)?;
    Ok(())
}
