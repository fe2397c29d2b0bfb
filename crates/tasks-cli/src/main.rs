// crates/tasks-cli/src/main.rs - CLI Application Entry Point
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   Dispatcher     │───▶│  Command Handlers   │
// │ (clap + argv)   │    │ (name -> kind)   │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                                          │
//                                                          ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │───▶│     NoteStore       │
//                        │ (config + store) │    │ (tasks-core)        │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// tasks add "buy milk"          # Task added successfully (ID: 0)
// tasks mark-in-progress 0
// tasks list in-progress
// tasks --format json list | jq '.[].content'
// tasks --file ~/todo.json del 0
// tasks --default-config > tasks.toml
// ```
//
// Exit codes: 0 on success (including "No command error", "note is not
// found" and an invalid status filter, which are reported on stdout), 2 for
// usage errors, 1 for everything else.

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tasks_core::ConfigManager;

mod cli;
mod commands;
mod context;
mod dispatch;
mod logging;

use cli::Cli;
use commands::EXIT_FAILURE;
use context::Context;
use dispatch::Dispatcher;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            context::report_error(&format!("{:#}", err), io::stderr().is_terminal());
            EXIT_FAILURE
        }
    };

    ExitCode::from(code as u8)
}

/// Load configuration and the store, then dispatch one command
///
/// Returns the process exit code. Only failures that happen before a
/// command can run (configuration, storage load) come back as `Err`.
fn run(cli: &Cli) -> Result<i32> {
    if cli.default_config {
        let mut out = io::stdout().lock();
        out.write_all(ConfigManager::generate_default_config().as_bytes())?;
        out.flush()?;
        return Ok(0);
    }

    let config = ConfigManager::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;

    logging::init(&config.logging.level, cli.verbose);

    let mut ctx = Context::new(cli, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result =
        Dispatcher::new().dispatch(&mut ctx, cli.command_name(), cli.command_args(), &mut out);
    out.flush()?;

    match result {
        Ok(()) => Ok(0),
        Err(err) => {
            ctx.error(&err.to_string());
            Ok(err.exit_code())
        }
    }
}
