//! Fixed-width, double-line box tables.
//!
//! All columns share one width: the widest header name or cell text anywhere
//! in the table, bumped to an even field width by [`field_width`]. Cells are
//! centered with any odd leftover space placed on the right.
//!
//! ```rust
//! use gridprint_render::{DataSet, tabular::render_table};
//!
//! let rows = vec![
//!     DataSet::new(["id", "name"], ["1", "Bob"]),
//!     DataSet::new(["id", "name"], ["2", "Alice"]),
//! ];
//!
//! let expected = "\
//! ╔════════╦════════╗
//! ║   id   ║  name  ║
//! ╠════════╬════════╣
//! ║   1    ║  Bob   ║
//! ╠════════╬════════╣
//! ║   2    ║ Alice  ║
//! ╚════════╩════════╝
//! ";
//! assert_eq!(render_table("users", &rows), expected);
//! ```
//!
//! A table without rows renders a single box naming the table:
//!
//! ```text
//! ╔══════════════════════════════════════════╗
//! ║ Table 'empty' is empty or does not exist ║
//! ╚══════════════════════════════════════════╝
//! ```

mod decorator;
mod util;

pub use decorator::{
    border_line, empty_box, row_line, BorderGlyphs, BorderLevel, HORIZONTAL, VERTICAL,
};
pub use util::{column_width, display_width, field_width, pad_center, value_width};

use crate::value::DataSet;

/// Renders a table as a box-drawn grid, one `\n`-terminated line per row.
///
/// The header is taken from the first row's column names. When the computed
/// column width is zero (no rows, or nothing but empty text) the output is the
/// [`empty_box`] for `table_name` instead.
pub fn render_table(table_name: &str, rows: &[DataSet]) -> String {
    let header: &[String] = rows.first().map(DataSet::column_names).unwrap_or(&[]);

    let width = column_width(header, rows);
    if width == 0 {
        return empty_box(table_name);
    }

    let field = field_width(width);
    let columns = header.len();
    let separator = border_line(BorderLevel::Middle, columns, field);

    let mut out = String::new();
    push_line(&mut out, &border_line(BorderLevel::Top, columns, field));
    push_line(&mut out, &row_line(header, field));
    push_line(&mut out, &separator);

    for (i, row) in rows.iter().enumerate() {
        push_line(&mut out, &row_line(row.values(), field));
        if i + 1 < rows.len() {
            push_line(&mut out, &separator);
        }
    }

    push_line(&mut out, &border_line(BorderLevel::Bottom, columns, field));
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Stateless handle around [`render_table`].
///
/// Useful where a renderer is injected as a value; every call is independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableRenderer;

impl TableRenderer {
    pub fn new() -> Self {
        TableRenderer
    }

    /// See [`render_table`].
    pub fn render(&self, table_name: &str, rows: &[DataSet]) -> String {
        render_table(table_name, rows)
    }
}
