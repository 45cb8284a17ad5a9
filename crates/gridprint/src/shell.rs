//! One-shot and interactive command execution.

use anyhow::Context;
use gridprint_dispatch::{
    CommandError, DatabaseManager, Dispatcher, Exit, MemoryDatabase, Print, Tables, View,
};
use std::io::{BufRead, Write};
use std::path::Path;
use std::rc::Rc;

/// Load the table document, or start with no tables when no path is given.
pub fn load_database(path: Option<&Path>) -> anyhow::Result<MemoryDatabase> {
    match path {
        Some(path) => MemoryDatabase::from_json_file(path)
            .with_context(|| format!("failed to load tables from {}", path.display())),
        None => {
            tracing::info!("no data file given, starting with an empty database");
            Ok(MemoryDatabase::new())
        }
    }
}

/// The standard command set: `print`, `tables` and `exit`.
pub fn build_dispatcher<'a, V, M>(view: V, manager: M) -> Dispatcher<'a>
where
    V: View + Clone + 'a,
    M: DatabaseManager + 'a,
{
    let manager = Rc::new(manager);
    Dispatcher::new()
        .command(Print::new(view.clone(), Rc::clone(&manager)))
        .command(Tables::new(view, manager))
        .command(Exit)
}

/// Run a single command line. An `exit` command is a no-op here.
pub fn run_once(dispatcher: &Dispatcher<'_>, line: &str) -> anyhow::Result<()> {
    match dispatcher.dispatch(line) {
        Ok(()) | Err(CommandError::Exit) => Ok(()),
        Err(err) => Err(err).with_context(|| format!("command failed: {}", line)),
    }
}

/// Read commands from `input` until `exit` or end of input.
///
/// Command failures are reported to `errors` and the loop continues. Only a
/// failure to read input or to write the report ends the loop with an error.
pub fn run_interactive<R, E>(
    dispatcher: &Dispatcher<'_>,
    input: R,
    mut errors: E,
) -> anyhow::Result<()>
where
    R: BufRead,
    E: Write,
{
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.is_empty() {
            continue;
        }

        match dispatcher.dispatch(&line) {
            Ok(()) => {}
            Err(CommandError::Exit) => {
                tracing::debug!("exit requested");
                return Ok(());
            }
            Err(err) => {
                writeln!(errors, "error: {}", err).context("failed to report error")?;
            }
        }
    }

    tracing::debug!("end of input");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridprint_dispatch::BufferView;
    use gridprint_render::DataSet;
    use std::io::Cursor;

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
    fn test_run_once_bare_print_is_unknown_command() {
        let view = BufferView::new();
        let dispatcher = build_dispatcher(&view, database());
        let err = run_once(&dispatcher, "print").unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("unsupported command: print"), "{}", chain);
    }

    #[test]
    fn test_run_once_exit_is_ok() {
        let view = BufferView::new();
        let dispatcher = build_dispatcher(&view, database());
        run_once(&dispatcher, "exit").unwrap();
        assert!(view.writes().is_empty());
    }

    #[test]
    fn test_interactive_continues_after_errors_and_stops_at_exit() {
        let view = BufferView::new();
        let dispatcher = build_dispatcher(&view, database());
        let input = Cursor::new("print users extra\n\nprint users\nexit\nprint users\n");
        let mut errors = Vec::new();

        run_interactive(&dispatcher, input, &mut errors).unwrap();

        let errors = String::from_utf8(errors).unwrap();
        assert_eq!(
            errors,
            "error: incorrect number of parameters: expected 1, but is 2\n"
        );
        assert_eq!(view.writes().len(), 1);
        assert!(view.contents().contains("║ Alice  ║"));
    }

    struct ClosedPipe;

    impl View for ClosedPipe {
        fn write(&self, _text: &str) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_run_once_reports_output_failure() {
        let dispatcher = build_dispatcher(&ClosedPipe, database());
        let err = run_once(&dispatcher, "print users").unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("failed to write output: closed"), "{}", chain);
    }

    #[test]
    fn test_interactive_continues_after_output_failure() {
        let dispatcher = build_dispatcher(&ClosedPipe, database());
        let input = Cursor::new("print users\nprint users\n");
        let mut errors = Vec::new();

        run_interactive(&dispatcher, input, &mut errors).unwrap();

        let errors = String::from_utf8(errors).unwrap();
        assert_eq!(
            errors,
            "error: failed to write output: closed\nerror: failed to write output: closed\n"
        );
    }

    #[test]
    fn test_load_database_without_path() {
        let db = load_database(None).unwrap();
        assert!(db.table_names().is_empty());
    }
}
