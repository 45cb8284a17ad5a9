//! Commands recognised by the interactive shell.
//!
//! A [`Command`] decides from the raw input line whether it handles it, then
//! processes it. Commands write their output to a [`View`] in one call.

use crate::database::DatabaseManager;
use crate::error::CommandError;
use crate::view::View;
use gridprint_render::TableRenderer;

/// A single shell command.
pub trait Command {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns true if this command handles `input`.
    fn can_process(&self, input: &str) -> bool;

    /// Runs the command for `input`.
    fn process(&self, input: &str) -> Result<(), CommandError>;
}

/// Splits a command line on single spaces.
///
/// Trailing empty tokens are dropped, so `"print users "` yields two tokens
/// while `"print  users"` yields three.
pub fn split_command(input: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = input.split(' ').collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// `print <table>`: renders a table as a box-drawn grid.
pub struct Print<V, M> {
    view: V,
    manager: M,
    renderer: TableRenderer,
}

impl<V: View, M: DatabaseManager> Print<V, M> {
    const PREFIX: &'static str = "print ";

    pub fn new(view: V, manager: M) -> Self {
        Self {
            view,
            manager,
            renderer: TableRenderer::new(),
        }
    }

    fn table_name<'a>(&self, input: &'a str) -> Result<&'a str, CommandError> {
        let tokens = split_command(input);
        match tokens.as_slice() {
            [_, table] => Ok(*table),
            _ => Err(CommandError::invalid_argument(
                1,
                tokens.len().saturating_sub(1),
            )),
        }
    }
}

impl<V: View, M: DatabaseManager> Command for Print<V, M> {
    fn name(&self) -> &str {
        "print"
    }

    fn can_process(&self, input: &str) -> bool {
        input.starts_with(Self::PREFIX)
    }

    fn process(&self, input: &str) -> Result<(), CommandError> {
        let table = self.table_name(input)?;
        let rows = self.manager.table_data(table);
        tracing::debug!(table, rows = rows.len(), "rendering table");

        let output = self.renderer.render(table, &rows);
        self.view.write(&output)?;
        Ok(())
    }
}

/// `tables`: lists the known table names as `[a, b, c]`.
pub struct Tables<V, M> {
    view: V,
    manager: M,
}

impl<V: View, M: DatabaseManager> Tables<V, M> {
    pub fn new(view: V, manager: M) -> Self {
        Self { view, manager }
    }
}

impl<V: View, M: DatabaseManager> Command for Tables<V, M> {
    fn name(&self) -> &str {
        "tables"
    }

    fn can_process(&self, input: &str) -> bool {
        input == "tables"
    }

    fn process(&self, _input: &str) -> Result<(), CommandError> {
        let names = self.manager.table_names();
        self.view.write(&format!("[{}]\n", names.join(", ")))?;
        Ok(())
    }
}

/// `exit`: ends the session by returning [`CommandError::Exit`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Exit;

impl Command for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn can_process(&self, input: &str) -> bool {
        input == "exit"
    }

    fn process(&self, _input: &str) -> Result<(), CommandError> {
        Err(CommandError::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryDatabase;
    use crate::view::BufferView;
    use gridprint_render::DataSet;

    fn database() -> MemoryDatabase {
        MemoryDatabase::new().with_table(
            "users",
            vec![
                DataSet::new(["id", "name"], ["1", "Bob"]),
                DataSet::new(["id", "name"], ["2", "Alice"]),
            ],
        )
    }

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("print users"), vec!["print", "users"]);
        assert_eq!(split_command("print users "), vec!["print", "users"]);
        assert_eq!(split_command("print  users"), vec!["print", "", "users"]);
        assert_eq!(split_command("print"), vec!["print"]);
    }

    #[test]
    fn test_print_can_process_requires_trailing_space() {
        let view = BufferView::new();
        let print = Print::new(&view, database());
        assert!(print.can_process("print users"));
        assert!(print.can_process("print "));
        assert!(!print.can_process("print"));
        assert!(!print.can_process("printer users"));
        assert!(!print.can_process(" print users"));
    }

    #[test]
    fn test_print_writes_rendered_table_once() {
        let view = BufferView::new();
        let print = Print::new(&view, database());
        print.process("print users").unwrap();

        let writes = view.writes();
        assert_eq!(writes.len(), 1);
        assert!(writes[0].starts_with("╔════════╦════════╗\n║   id   ║  name  ║\n"));
    }

    #[test]
    fn test_print_unknown_table_writes_empty_box() {
        let view = BufferView::new();
        let print = Print::new(&view, database());
        print.process("print ghosts").unwrap();
        assert!(view
            .contents()
            .contains("║ Table 'ghosts' is empty or does not exist ║"));
    }

    #[test]
    fn test_print_without_table_name() {
        let view = BufferView::new();
        let print = Print::new(&view, database());
        let err = print.process("print").unwrap_err();
        assert!(matches!(
            err,
            CommandError::InvalidArgument {
                expected: 1,
                actual: 0
            }
        ));
        assert!(err.to_string().contains("expected 1, but is 0"));
        assert!(view.writes().is_empty());
    }

    #[test]
    fn test_print_with_extra_argument() {
        let view = BufferView::new();
        let print = Print::new(&view, database());
        let err = print.process("print users extra").unwrap_err();
        assert!(err.to_string().contains("expected 1, but is 2"));
        assert!(view.writes().is_empty());
    }

    #[test]
    fn test_print_double_space_is_two_arguments() {
        let view = BufferView::new();
        let print = Print::new(&view, database());
        let err = print.process("print  users").unwrap_err();
        assert!(err.to_string().contains("expected 1, but is 2"));
    }

    struct BrokenPipe;

    impl View for BrokenPipe {
        fn write(&self, _text: &str) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_print_sink_failure_is_output_error() {
        let print = Print::new(BrokenPipe, database());
        let err = print.process("print users").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Output(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe
        ));
        assert!(err.to_string().starts_with("failed to write output"));
    }

    #[test]
    fn test_tables_lists_names() {
        let view = BufferView::new();
        let db = database().with_table("empty", vec![]);
        let tables = Tables::new(&view, db);
        assert!(tables.can_process("tables"));
        tables.process("tables").unwrap();
        assert_eq!(view.contents(), "[empty, users]\n");
    }

    #[test]
    fn test_exit_signals_exit() {
        assert!(Exit.can_process("exit"));
        assert!(!Exit.can_process("exit now"));
        assert!(Exit.process("exit").unwrap_err().is_exit());
    }
}
