use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Main CLI structure
///
/// Only the global flags are declared to clap. The command name and its
/// arguments are collected verbatim into one trailing list and resolved by
/// the dispatcher, so that a missing or unknown command is reported in our
/// own terms. Once the command name has been seen, every later token is a
/// value, even one that looks like a global flag (`tasks add --help`).
#[derive(Parser, Debug)]
#[command(name = "tasks")]
#[command(about = "Track short tasks from the command line")]
#[command(
    long_about = "
Track short tasks from the command line. Notes live in a JSON file
(data.json in the working directory unless configured otherwise).

Commands:
  list [status]              List all notes, or those with status todo|in-progress|done
  add <content>              Add a note
  del <id>                   Delete a note
  update <id> <content>      Replace a note's content
  mark-in-progress <id>      Mark a note as in progress
  mark-done <id>             Mark a note as done

Environment Variables:
  TASKS_FILE      Storage file path
  TASKS_CONFIG    Configuration file path
  TASKS_LOG       Log level (error, warn, info, debug, trace)
"
)]
#[command(version)]
pub struct Cli {
    /// Storage file (overrides TASKS_FILE and the config file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Configuration file (overrides TASKS_CONFIG)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for listings
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a commented sample configuration file and exit
    #[arg(long)]
    pub default_config: bool,

    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub raw: Vec<String>,
}

impl Cli {
    /// The command name, if one was given
    pub fn command_name(&self) -> Option<&str> {
        self.raw.first().map(String::as_str)
    }

    /// Everything after the command name
    pub fn command_args(&self) -> &[String] {
        self.raw.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    /// Interpret a validated `output.default_format` config value
    pub fn from_config(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            _ => Self::Human,
        }
    }
}
