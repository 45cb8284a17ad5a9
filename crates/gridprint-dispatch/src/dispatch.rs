//! Routing input lines to commands.

use crate::command::Command;
use crate::error::CommandError;

/// Routes each input line to the first registered command that accepts it.
///
/// Commands are tried in registration order.
///
/// # Example
///
/// ```rust
/// use gridprint_dispatch::{BufferView, Dispatcher, Exit, MemoryDatabase, Print};
///
/// let view = BufferView::new();
/// let dispatcher = Dispatcher::new()
///     .command(Print::new(&view, MemoryDatabase::new()))
///     .command(Exit);
///
/// dispatcher.dispatch("print users\n").unwrap();
/// assert!(view.contents().contains("Table 'users' is empty or does not exist"));
/// assert!(dispatcher.dispatch("exit").unwrap_err().is_exit());
/// ```
#[derive(Default)]
pub struct Dispatcher<'a> {
    commands: Vec<Box<dyn Command + 'a>>,
}

impl<'a> Dispatcher<'a> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command.
    pub fn command(mut self, command: impl Command + 'a) -> Self {
        self.commands.push(Box::new(command));
        self
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Process one input line.
    ///
    /// One trailing `\n`, `\r\n` or lone `\r` is stripped; any other
    /// whitespace is passed through to the command untouched.
    pub fn dispatch(&self, input: &str) -> Result<(), CommandError> {
        let line = strip_line_ending(input);

        let Some(command) = self.commands.iter().find(|c| c.can_process(line)) else {
            tracing::warn!(input = line, "no command accepts input");
            return Err(CommandError::UnknownCommand(line.to_string()));
        };

        tracing::debug!(command = command.name(), "dispatching");
        command.process(line)
    }
}

fn strip_line_ending(input: &str) -> &str {
    let line = input.strip_suffix('\n').unwrap_or(input);
    line.strip_suffix('\r').unwrap_or(line)
}
