// crates/tasks-core/src/lib.rs - Core library for the tasks CLI
//
// Layering, leaves first:
//   note    -> the Note entity and its Status
//   storage -> whole-file JSON reads and rewrites
//   store   -> the in-memory collection, flushed on every mutation
//   config  -> layered configuration (defaults, file, environment)

pub mod config;
pub mod note;
pub mod storage;
pub mod store;

pub use config::{ConfigError, ConfigManager, TasksConfig};
pub use note::{Note, Status, StatusError};
pub use storage::{JsonStorage, StorageError};
pub use store::{NoteStore, StoreError, StoreResult};
