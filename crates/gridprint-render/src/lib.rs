//! # gridprint-render - Box-Drawn Tables for Query Results
//!
//! `gridprint-render` turns the rows of a database table into a fixed-width
//! text grid drawn with double-line Unicode box characters. It is the pure
//! core of the `gridprint` tool: no I/O, no shared state, and the same input
//! always produces byte-identical output.
//!
//! ## Core Concepts
//!
//! - [`Value`]: an opaque cell value, rendered through its display text
//! - [`DataSet`]: one row, carrying ordered column names and aligned values
//! - [`render_table`]: the full layout (borders, header, body, footer)
//! - [`tabular`]: the individual layout helpers (width, centering, borders)
//!
//! ## Quick Start
//!
//! ```rust
//! use gridprint_render::{render_table, DataSet};
//!
//! let rows = vec![
//!     DataSet::builder().put("id", 1).put("name", "Bob").build(),
//!     DataSet::builder().put("id", 2).put("name", "Alice").build(),
//! ];
//!
//! let output = render_table("users", &rows);
//! assert!(output.starts_with("╔════════╦════════╗\n"));
//! assert!(output.ends_with("╚════════╩════════╝\n"));
//! ```
//!
//! ## Layout Rules
//!
//! - Every column gets the same width: the widest header or cell in the table.
//! - The field width is that width plus 2 when even, plus 3 when odd.
//! - Cells are centered; an odd leftover space goes to the right.
//! - A table with no rows renders as a single "is empty or does not exist" box.

pub mod tabular;
mod value;

pub use tabular::{render_table, TableRenderer};
pub use value::{DataSet, DataSetBuilder, Value};
