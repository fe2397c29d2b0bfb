use std::io::Write;
use tasks_core::Note;

use super::CommandResult;
use crate::cli::OutputFormat;
use crate::context::Context;

/// List notes, optionally filtered by status
///
/// Output is always sorted by id, regardless of storage order:
/// - Human-readable: one `[id] status "content" created at .. updated at ..` line per note
/// - Machine-readable: a JSON array in the storage schema
///
/// An invalid status filter fails before anything is printed.
pub fn handle(ctx: &mut Context, args: &[String], out: &mut dyn Write) -> CommandResult {
    let mut notes: Vec<&Note> = match args.first() {
        Some(status) => ctx.store.list_by_status(status)?,
        None => ctx.store.list_all().iter().collect(),
    };

    notes.sort_by_key(|note| note.id);

    match ctx.format() {
        OutputFormat::Human => {
            for note in notes {
                writeln!(out, "{}", note)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&notes).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, run};
    use crate::commands::CommandError;
    use tasks_core::{JsonStorage, NoteStore, Status, StoreError};
    use tempfile::TempDir;

    #[test]
    fn test_empty_store_prints_nothing() {
        let (_temp, mut ctx) = context(OutputFormat::Human);
        let (result, out) = run(handle, &mut ctx, &[]);
        assert!(result.is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_note_line() {
        let (_temp, mut ctx) = context(OutputFormat::Human);
        ctx.store.add("buy milk").unwrap();

        let (_, out) = run(handle, &mut ctx, &[]);

        assert_eq!(
            out,
            "[0] todo \"buy milk\" created at 08:00:00 updated at 08:00:00\n"
        );
    }

    #[test]
    fn test_sorted_by_id() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 2, "status": "done", "content": "c", "createdAt": "10:00:02", "updatedAt": "10:00:02"},
                {"id": 0, "status": "todo", "content": "a", "createdAt": "10:00:00", "updatedAt": "10:00:00"},
                {"id": 1, "status": "done", "content": "b", "createdAt": "10:00:01", "updatedAt": "10:00:01"}
            ]"#,
        )
        .unwrap();
        let store = NoteStore::load(JsonStorage::new(&path)).unwrap();
        let mut ctx = Context::with_store(store, OutputFormat::Human);

        let (_, all) = run(handle, &mut ctx, &[]);
        let (_, done) = run(handle, &mut ctx, &["done"]);

        let ids = |out: &str| -> Vec<String> {
            out.lines()
                .map(|line| line.split(' ').next().unwrap().to_string())
                .collect()
        };
        assert_eq!(ids(&all), vec!["[0]", "[1]", "[2]"]);
        assert_eq!(ids(&done), vec!["[1]", "[2]"]);
    }

    #[test]
    fn test_filter_by_status() {
        let (_temp, mut ctx) = context(OutputFormat::Human);
        for content in ["a", "b", "c"] {
            ctx.store.add(content).unwrap();
        }
        ctx.store.set_status(2, Status::Done).unwrap();
        ctx.store.set_status(0, Status::Done).unwrap();

        let (_, out) = run(handle, &mut ctx, &["done"]);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[0] done \"a\""));
        assert!(lines[1].starts_with("[2] done \"c\""));
    }

    #[test]
    fn test_invalid_status_prints_nothing() {
        let (_temp, mut ctx) = context(OutputFormat::Human);
        ctx.store.add("a").unwrap();

        let (result, out) = run(handle, &mut ctx, &["bogus-status"]);

        assert!(matches!(
            result,
            Err(CommandError::Store(StoreError::InvalidStatus(_)))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_listing_is_idempotent() {
        let (_temp, mut ctx) = context(OutputFormat::Human);
        ctx.store.add("a").unwrap();
        ctx.store.add("b").unwrap();

        let (_, first) = run(handle, &mut ctx, &[]);
        let (_, second) = run(handle, &mut ctx, &[]);

        assert_eq!(first, second);
    }

    #[test]
    fn test_json_output() {
        let (_temp, mut ctx) = context(OutputFormat::Json);
        ctx.store.add("a").unwrap();
        ctx.store.add("b").unwrap();
        ctx.store.set_status(1, Status::InProgress).unwrap();

        let (_, out) = run(handle, &mut ctx, &["in-progress"]);

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[0]["status"], "in-progress");
        assert_eq!(items[0]["createdAt"], "08:00:01");
    }
}
