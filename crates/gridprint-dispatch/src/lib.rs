//! Command recognition and routing for the gridprint shell.
//!
//! `gridprint-dispatch` sits between an input loop and the table renderer. It
//! owns the boundary contracts:
//!
//! - **Commands**: [`Command`] implementations decide whether they accept an
//!   input line and then process it ([`Print`], [`Tables`], [`Exit`])
//! - **Data source**: [`DatabaseManager`] maps a table name to its rows
//! - **Output sink**: [`View`] receives each command's finished text once
//! - **Routing**: [`Dispatcher`] hands a line to the first accepting command
//!
//! # Errors
//!
//! A malformed command fails with [`CommandError::InvalidArgument`]. Printing
//! an unknown or empty table is not an error; it renders the empty-table box.
//!
//! # Example
//!
//! ```rust
//! use gridprint_dispatch::{BufferView, Command, MemoryDatabase, Print};
//! use gridprint_render::DataSet;
//!
//! let db = MemoryDatabase::new().with_table(
//!     "users",
//!     vec![DataSet::builder().put("id", 1).put("name", "Bob").build()],
//! );
//! let view = BufferView::new();
//! let print = Print::new(&view, db);
//!
//! print.process("print users").unwrap();
//! assert!(view.contents().contains("║ Bob  ║"));
//!
//! let err = print.process("print users extra").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "incorrect number of parameters: expected 1, but is 2"
//! );
//! ```

mod command;
mod database;
mod dispatch;
mod error;
mod view;

pub use command::{split_command, Command, Exit, Print, Tables};
pub use database::{DatabaseManager, MemoryDatabase};
pub use dispatch::Dispatcher;
pub use error::{CommandError, LoadError};
pub use view::{BufferView, View, WriterView};
