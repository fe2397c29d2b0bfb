use std::io::Write;

use super::{CommandResult, required_arg};
use crate::context::Context;
use crate::dispatch::CommandKind;

/// Create a `todo` note from the first argument
pub fn handle(ctx: &mut Context, args: &[String], out: &mut dyn Write) -> CommandResult {
    let content = required_arg(args, 0, CommandKind::Add)?;
    let id = ctx.store.add(content)?;
    writeln!(out, "Task added successfully (ID: {})", id)?;
    Ok(())
}
