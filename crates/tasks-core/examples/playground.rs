// crates/tasks-core/examples/playground.rs
// Run with: cargo run --example playground

use tasks_core::{JsonStorage, NoteStore, Status, StoreError};

fn main() -> Result<(), StoreError> {
    println!("Tasks Store Playground\n");

    let dir = tempfile::tempdir().map_err(|source| {
        StoreError::Storage(tasks_core::StorageError::Io {
            path: std::env::temp_dir(),
            source,
        })
    })?;
    let storage = JsonStorage::new(dir.path().join("data.json")).pretty(true);
    let mut store = NoteStore::load(storage)?;

    println!("=== Adding ===");
    for content in ["buy milk", "write report", "call mum"] {
        let id = store.add(content)?;
        println!("Task added successfully (ID: {})", id);
    }

    println!("\n=== Status Changes ===");
    store.set_status(1, Status::InProgress)?;
    store.set_status(2, Status::Done)?;
    store.update_content(0, "buy oat milk")?;
    for note in store.list_all() {
        println!("{}", note);
    }

    println!("\n=== Filtering ===");
    for status in Status::ALL {
        let matching = store.list_by_status(status.as_str())?;
        println!("{:<12} {}", status, matching.len());
    }
    match store.list_by_status("someday") {
        Err(err) => println!("someday      {}", err),
        Ok(_) => unreachable!("someday is not a status"),
    }

    println!("\n=== Deleting ===");
    store.remove(0)?;
    match store.remove(0) {
        Err(err) => println!("second delete: {}", err),
        Ok(_) => unreachable!("note 0 was already removed"),
    }
    println!("next id after deletion: {}", store.add("water plants")?);

    println!("\n=== Storage File ===");
    println!("{}", std::fs::read_to_string(store.path()).unwrap_or_default());

    Ok(())
}
