// crates/tasks-core/src/store.rs - The note store
//
// NoteStore is the single owner of every note for the duration of one
// invocation. It loads the storage file once, applies mutations in memory
// and rewrites the whole file after each one. A mutation whose write fails
// is undone, so memory never holds a state the file does not.
//
// Notes are always resolved by scanning for a matching `id` field. Storage
// position and id diverge as soon as anything is deleted, so positions are
// never treated as ids.

use chrono::NaiveTime;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::note::{self, Note, Status, StatusError};
use crate::storage::{JsonStorage, StorageError};

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("note is not found")]
    NotFound(u64),

    #[error(transparent)]
    InvalidStatus(#[from] StatusError),

    #[error("no note ids left: the highest id is already {}", u64::MAX)]
    IdSpaceExhausted,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

type Clock = Box<dyn Fn() -> NaiveTime>;

/// In-memory note collection backed by a storage file
pub struct NoteStore {
    storage: JsonStorage,
    notes: Vec<Note>,
    clock: Clock,
}

impl NoteStore {
    /// Ensure the storage file exists, then read every note from it
    ///
    /// A file that exists but cannot be parsed is a fatal
    /// [`StorageError::Malformed`].
    pub fn load(storage: JsonStorage) -> StoreResult<Self> {
        storage.ensure_exists()?;
        let notes = storage.read_notes()?;

        let mut seen = HashSet::with_capacity(notes.len());
        for note in &notes {
            if !seen.insert(note.id) {
                warn!(id = note.id, path = %storage.path().display(), "duplicate note id in storage file");
            }
        }

        debug!(path = %storage.path().display(), notes = notes.len(), "loaded note store");

        Ok(Self {
            storage,
            notes,
            clock: Box::new(note::now),
        })
    }

    /// Replace the time source used for `createdAt` / `updatedAt`
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveTime + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    /// Append a new `todo` note and return its id
    ///
    /// The id is the current number of notes, bumped past the highest
    /// existing id if earlier deletions left a gap.
    pub fn add<S: Into<String>>(&mut self, content: S) -> StoreResult<u64> {
        let id = self.next_id()?;
        let note = Note::new(id, content, (self.clock)());
        self.notes.push(note);
        self.persist_or_undo(|notes| {
            notes.pop();
        })?;

        info!(id, "note added");
        Ok(id)
    }

    pub fn find_index_by_id(&self, id: u64) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&Note> {
        self.find_index_by_id(id).map(|index| &self.notes[index])
    }

    /// Remove the note with the given id
    ///
    /// Nothing is mutated or written when the id is unknown.
    pub fn remove(&mut self, id: u64) -> StoreResult<Note> {
        let index = self.find_index_by_id(id).ok_or(StoreError::NotFound(id))?;
        let removed = self.notes.remove(index);
        let restore = removed.clone();
        self.persist_or_undo(move |notes| notes.insert(index, restore))?;

        info!(id, "note removed");
        Ok(removed)
    }

    pub fn update_content<S: Into<String>>(&mut self, id: u64, content: S) -> StoreResult<()> {
        self.modify(id, |note, now| note.set_content(content, now))?;

        info!(id, "note content updated");
        Ok(())
    }

    pub fn set_status(&mut self, id: u64, status: Status) -> StoreResult<()> {
        self.modify(id, |note, now| note.set_status(status, now))?;

        info!(id, %status, "note status changed");
        Ok(())
    }

    /// All notes in storage order; callers sort for display
    pub fn list_all(&self) -> &[Note] {
        &self.notes
    }

    /// Notes whose status matches `status`
    ///
    /// Fails with [`StoreError::InvalidStatus`] if `status` is not one of
    /// `todo`, `in-progress` or `done`.
    pub fn list_by_status(&self, status: &str) -> StoreResult<Vec<&Note>> {
        let status: Status = status.parse()?;
        Ok(self.with_status(status).collect())
    }

    pub fn with_status(&self, status: Status) -> impl Iterator<Item = &Note> {
        self.notes.iter().filter(move |note| note.status == status)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Location of the backing storage file
    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    fn next_id(&self) -> StoreResult<u64> {
        let count = self.notes.len() as u64;
        match self.notes.iter().map(|note| note.id).max() {
            Some(max) if max >= count => max.checked_add(1).ok_or(StoreError::IdSpaceExhausted),
            _ => Ok(count),
        }
    }

    /// Apply `change` to one note with a fresh timestamp, then persist
    fn modify<F>(&mut self, id: u64, change: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Note, NaiveTime),
    {
        let index = self.find_index_by_id(id).ok_or(StoreError::NotFound(id))?;
        let before = self.notes[index].clone();
        let now = (self.clock)();
        change(&mut self.notes[index], now);
        self.persist_or_undo(move |notes| notes[index] = before)
    }

    /// Write every note; if the write fails, run `undo` on the notes first
    fn persist_or_undo<F>(&mut self, undo: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Vec<Note>),
    {
        if let Err(err) = self.storage.write_notes(&self.notes) {
            undo(&mut self.notes);
            return Err(err.into());
        }
        Ok(())
    }
}

impl std::fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteStore")
            .field("storage", &self.storage)
            .field("notes", &self.notes)
            .finish_non_exhaustive()
    }
}
