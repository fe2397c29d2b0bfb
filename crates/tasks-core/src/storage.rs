// crates/tasks-core/src/storage.rs - Storage file access
//
// Knows HOW the note collection is laid out on disk (a single JSON array)
// but nothing about what the notes mean. The store decides when to read
// and write; this module only performs whole-file reads and rewrites.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::note::Note;

/// Contents written when the storage file is missing or empty
const EMPTY_COLLECTION: &str = "[]";

/// Errors that can occur while reading or writing the storage file
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Storage file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Handle on the JSON storage file
///
/// Construction does not touch the file system; call [`JsonStorage::ensure_exists`]
/// before the first read.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
    pretty: bool,
}

impl JsonStorage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    /// Pretty-print the array on every rewrite
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Initialise the file to an empty collection if it is missing or blank
    ///
    /// Parent directories are created as needed. An existing file with
    /// content is left untouched, even if that content is not valid JSON;
    /// reporting that is the job of [`JsonStorage::read_notes`].
    pub fn ensure_exists(&self) -> StorageResult<()> {
        let needs_init = match fs::read_to_string(&self.path) {
            Ok(content) => content.trim().is_empty(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => true,
            Err(err) => return Err(self.io_error(err)),
        };

        if !needs_init {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!(path = %self.path.display(), "initialising empty storage file");
        fs::write(&self.path, EMPTY_COLLECTION).map_err(|e| self.io_error(e))
    }

    /// Read and parse the whole collection
    pub fn read_notes(&self) -> StorageResult<Vec<Note>> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Rewrite the whole file with the given collection
    pub fn write_notes(&self, notes: &[Note]) -> StorageResult<()> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(notes)?
        } else {
            serde_json::to_string(notes)?
        };

        debug!(path = %self.path.display(), notes = notes.len(), "rewriting storage file");
        fs::write(&self.path, encoded).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
