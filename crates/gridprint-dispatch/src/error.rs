//! Error types for command processing and data loading.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned when a command cannot be processed.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command was given the wrong number of arguments.
    #[error("incorrect number of parameters: expected {expected}, but is {actual}")]
    InvalidArgument { expected: usize, actual: usize },

    /// No registered command recognises the input.
    #[error("unsupported command: {0}")]
    UnknownCommand(String),

    /// The session was asked to end.
    #[error("exit requested")]
    Exit,

    /// The output sink failed to accept the text.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CommandError {
    /// Creates an argument-count error.
    pub fn invalid_argument(expected: usize, actual: usize) -> Self {
        CommandError::InvalidArgument { expected, actual }
    }

    /// Returns true if this is the exit signal rather than a failure.
    pub fn is_exit(&self) -> bool {
        matches!(self, CommandError::Exit)
    }
}

/// Error returned when table data cannot be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid table document: {0}")]
    Json(#[from] serde_json::Error),

    /// A row does not have one value per declared column.
    #[error("table '{table}' row {row} has {actual} values, expected {expected}")]
    RowShape {
        table: String,
        row: usize,
        expected: usize,
        actual: usize,
    },
}
