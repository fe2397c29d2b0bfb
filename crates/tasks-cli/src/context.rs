use anyhow::{Context as AnyhowContext, Result};
use std::io::{self, IsTerminal};
use tasks_core::{JsonStorage, NoteStore, TasksConfig};

use crate::cli::{Cli, OutputFormat};

/// Application context that gets passed to command handlers
///
/// Owns the loaded note store for the whole invocation. Built once, after
/// configuration is resolved and before any command is dispatched.
pub struct Context {
    pub store: NoteStore,
    format: OutputFormat,
    colored: bool,
}

impl Context {
    /// Resolve the storage path from flags and configuration, then load the store
    pub fn new(cli: &Cli, config: &TasksConfig) -> Result<Self> {
        let path = cli
            .file
            .clone()
            .unwrap_or_else(|| config.storage.path.clone());

        let storage = JsonStorage::new(&path).pretty(config.storage.pretty);
        let store = NoteStore::load(storage)
            .with_context(|| format!("Failed to load notes from {}", path.display()))?;

        let format = cli
            .format
            .unwrap_or_else(|| OutputFormat::from_config(&config.output.default_format));

        Ok(Self::with_store(store, format))
    }

    /// Build a context around an already loaded store
    pub fn with_store(store: NoteStore, format: OutputFormat) -> Self {
        Self {
            store,
            format,
            colored: io::stderr().is_terminal(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Report an error on stderr
    pub fn error(&self, msg: &str) {
        report_error(msg, self.colored);
    }
}

/// Report an error on stderr before a context exists
pub fn report_error(msg: &str, colored: bool) {
    if colored {
        eprintln!("\x1b[31merror:\x1b[0m {}", msg);
    } else {
        eprintln!("error: {}", msg);
    }
}
