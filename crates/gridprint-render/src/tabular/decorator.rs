//! Double-line box decoration: border lines, cell rows and the empty-table box.
//!
//! Every column of a table shares one field width, so a border line is the
//! left glyph followed by one `═` run per column, each run closed by either a
//! junction glyph or, for the last column, the right glyph:
//!
//! ```text
//! ╔════════╦════════╗
//! ║   id   ║  name  ║
//! ╠════════╬════════╣
//! ```

use super::util::{display_width, pad_center};

/// Horizontal line glyph used for every border segment.
pub const HORIZONTAL: char = '═';

/// Vertical line glyph framing every cell.
pub const VERTICAL: char = '║';

/// Position of a horizontal border line within the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderLevel {
    /// Above the header row.
    Top,
    /// Between the header and body, and between body rows.
    Middle,
    /// Below the last row.
    Bottom,
}

/// The three glyphs that open, join and close a border line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub left: char,
    pub junction: char,
    pub right: char,
}

impl BorderLevel {
    /// Glyph lookup for this level.
    pub const fn glyphs(self) -> BorderGlyphs {
        match self {
            BorderLevel::Top => BorderGlyphs {
                left: '╔',
                junction: '╦',
                right: '╗',
            },
            BorderLevel::Middle => BorderGlyphs {
                left: '╠',
                junction: '╬',
                right: '╣',
            },
            BorderLevel::Bottom => BorderGlyphs {
                left: '╚',
                junction: '╩',
                right: '╝',
            },
        }
    }
}

/// Builds a horizontal border line, without a trailing newline.
///
/// The result is `1 + column_count * (field_width + 1)` characters long.
///
/// # Example
///
/// ```rust
/// use gridprint_render::tabular::{border_line, BorderLevel};
///
/// assert_eq!(border_line(BorderLevel::Top, 2, 3), "╔═══╦═══╗");
/// assert_eq!(border_line(BorderLevel::Bottom, 1, 2), "╚══╝");
/// ```
pub fn border_line(level: BorderLevel, column_count: usize, field_width: usize) -> String {
    let glyphs = level.glyphs();
    let mut line = String::new();
    line.push(glyphs.left);

    for column in 0..column_count {
        line.extend(std::iter::repeat_n(HORIZONTAL, field_width));
        if column + 1 < column_count {
            line.push(glyphs.junction);
        } else {
            line.push(glyphs.right);
        }
    }

    line
}

/// Builds one row of cells, without a trailing newline.
///
/// Each value is centered in its field and followed by a `║`; the line opens
/// with a `║` as well. Used for both the header and the data rows.
pub fn row_line<T: ToString>(values: &[T], field_width: usize) -> String {
    let mut line = String::new();
    line.push(VERTICAL);

    for value in values {
        line.push_str(&pad_center(&value.to_string(), field_width));
        line.push(VERTICAL);
    }

    line
}

/// Builds the three-line box shown when a table has no data.
///
/// Each line ends with a newline. The borders are sized to the message line.
///
/// # Example
///
/// ```rust
/// use gridprint_render::tabular::empty_box;
///
/// let out = empty_box("t");
/// let lines: Vec<&str> = out.lines().collect();
/// assert_eq!(lines[1], "║ Table 't' is empty or does not exist ║");
/// assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
/// assert!(lines[2].starts_with('╚') && lines[2].ends_with('╝'));
/// ```
pub fn empty_box(table_name: &str) -> String {
    let message = format!(
        "{v} Table '{}' is empty or does not exist {v}",
        table_name,
        v = VERTICAL
    );
    let inner = display_width(&message).saturating_sub(2);
    let top = BorderLevel::Top.glyphs();
    let bottom = BorderLevel::Bottom.glyphs();

    let mut out = String::new();
    out.push(top.left);
    out.extend(std::iter::repeat_n(HORIZONTAL, inner));
    out.push(top.right);
    out.push('\n');
    out.push_str(&message);
    out.push('\n');
    out.push(bottom.left);
    out.extend(std::iter::repeat_n(HORIZONTAL, inner));
    out.push(bottom.right);
    out.push('\n');
    out
}
