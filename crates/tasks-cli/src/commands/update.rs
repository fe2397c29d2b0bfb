use std::io::Write;

use super::{CommandResult, parse_id, required_arg};
use crate::context::Context;
use crate::dispatch::CommandKind;

/// Replace the content of note `args[0]` with `args[1]`
pub fn handle(ctx: &mut Context, args: &[String], out: &mut dyn Write) -> CommandResult {
    let id = parse_id(required_arg(args, 0, CommandKind::Update)?)?;
    let content = required_arg(args, 1, CommandKind::Update)?;
    ctx.store.update_content(id, content)?;
    writeln!(out, "Task updated successfully (ID: {})", id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::commands::CommandError;
    use crate::commands::test_support::{context, run};
    use tasks_core::{Status, StoreError};

    #[test]
    fn test_update_changes_content_and_updated_at() {
        let (_temp, mut ctx) = context(OutputFormat::Human);
        ctx.store.add("buy milk").unwrap();
        let before = ctx.store.get(0).unwrap().clone();

        let (result, out) = run(handle, &mut ctx, &["0", "buy bread"]);

        assert!(result.is_ok());
        assert_eq!(out, "Task updated successfully (ID: 0)\n");
        let after = ctx.store.get(0).unwrap();
        assert_eq!(after.content, "buy bread");
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.status, Status::Todo);
        assert!(after.updated_at > before.updated_at);
    }

    #[test]
    fn test_update_unknown_note() {
        let (_temp, mut ctx) = context(OutputFormat::Human);
        let (result, _) = run(handle, &mut ctx, &["4", "anything"]);
        assert!(matches!(
            result,
            Err(CommandError::Store(StoreError::NotFound(4)))
        ));
    }

    #[test]
    fn test_update_without_content() {
        let (_temp, mut ctx) = context(OutputFormat::Human);
        ctx.store.add("buy milk").unwrap();

        let (result, out) = run(handle, &mut ctx, &["0"]);

        assert!(matches!(
            result,
            Err(CommandError::MissingArgument { command: "update", .. })
        ));
        assert!(out.is_empty());
        assert_eq!(ctx.store.get(0).unwrap().content, "buy milk");
    }
}
