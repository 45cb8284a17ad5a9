//! # gridprint - Database Tables as Box-Drawn Grids
//!
//! `gridprint` is a small command shell for looking at table data. The
//! `print <table>` command renders a table as a fixed-width grid drawn with
//! double-line box characters:
//!
//! ```text
//! ╔════════╦════════╗
//! ║   id   ║  name  ║
//! ╠════════╬════════╣
//! ║   1    ║  Bob   ║
//! ╠════════╬════════╣
//! ║   2    ║ Alice  ║
//! ╚════════╩════════╝
//! ```
//!
//! This crate bundles the pieces:
//!
//! - [`render`]: the pure table renderer (`gridprint-render`)
//! - [`dispatch`]: commands, data sources and output sinks (`gridprint-dispatch`)
//! - [`cli`], [`logging`], [`shell`]: the `gridprint` binary's configuration,
//!   log setup and command loop
//!
//! ## Embedding
//!
//! ```rust
//! use gridprint::dispatch::{BufferView, MemoryDatabase};
//! use gridprint::render::DataSet;
//! use gridprint::shell::{build_dispatcher, run_once};
//!
//! let db = MemoryDatabase::new().with_table(
//!     "users",
//!     vec![DataSet::new(["id", "name"], ["1", "Bob"])],
//! );
//! let view = BufferView::new();
//! let dispatcher = build_dispatcher(&view, db);
//!
//! run_once(&dispatcher, "print users").unwrap();
//! assert!(view.contents().starts_with("╔══════╦══════╗\n"));
//! ```

pub mod cli;
pub mod logging;
pub mod shell;

pub use gridprint_dispatch as dispatch;
pub use gridprint_render as render;
