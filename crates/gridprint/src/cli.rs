//! Command-line configuration.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Print database tables as box-drawn text grids.
///
/// With a trailing command (e.g. `gridprint --data db.json print users`) the
/// command runs once. Without one, commands are read line by line from stdin
/// until `exit` or end of input.
#[derive(Debug, Parser)]
#[command(name = "gridprint", version)]
pub struct Cli {
    /// JSON document holding the tables
    #[arg(short, long, env = "GRIDPRINT_DATA")]
    pub data: Option<PathBuf>,

    /// Log verbosity (RUST_LOG takes precedence when set)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Command to run once instead of starting the interactive loop
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if one was given.
    ///
    /// Words are joined with single spaces, the same shape an interactive
    /// line would have.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

/// Log verbosity levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The level as a `tracing_subscriber` filter directive.
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
