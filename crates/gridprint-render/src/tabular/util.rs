//! Measuring and padding helpers for cell text.

use crate::value::{DataSet, Value};

/// Returns the display width of a string.
///
/// Every `char` counts as exactly one column. Wide (CJK) characters and
/// combining marks are not treated specially.
///
/// # Example
///
/// ```rust
/// use gridprint_render::tabular::display_width;
///
/// assert_eq!(display_width("Alice"), 5);
/// assert_eq!(display_width("═══"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Display width of a cell value's text form.
pub fn value_width(value: &Value) -> usize {
    display_width(&value.to_string())
}

/// Computes the single column width shared by every column of the table.
///
/// This is the widest header name or cell text anywhere in the table. Returns
/// 0 when there are no rows.
///
/// # Example
///
/// ```rust
/// use gridprint_render::{DataSet, tabular::column_width};
///
/// let rows = vec![
///     DataSet::new(["id", "name"], ["1", "Bob"]),
///     DataSet::new(["id", "name"], ["2", "Alice"]),
/// ];
/// assert_eq!(column_width(rows[0].column_names(), &rows), 5);
/// ```
pub fn column_width<S: AsRef<str>>(header: &[S], rows: &[DataSet]) -> usize {
    if rows.is_empty() {
        return 0;
    }

    let widest_name = header
        .iter()
        .map(|name| display_width(name.as_ref()))
        .max()
        .unwrap_or(0);

    let widest_value = rows
        .iter()
        .flat_map(|row| row.values())
        .map(value_width)
        .max()
        .unwrap_or(0);

    widest_name.max(widest_value)
}

/// Width of a cell field, padding included, for a given column width.
///
/// Even widths get two extra columns, odd widths get three, so the result is
/// always even.
pub fn field_width(column_width: usize) -> usize {
    if column_width % 2 == 0 {
        column_width + 2
    } else {
        column_width + 3
    }
}

/// Centers text in a field of `width` columns.
///
/// When the leftover space is odd the extra space goes on the right. Text
/// wider than the field is returned unchanged.
///
/// # Example
///
/// ```rust
/// use gridprint_render::tabular::pad_center;
///
/// assert_eq!(pad_center("id", 8), "   id   ");
/// assert_eq!(pad_center("Bob", 8), "  Bob   ");
/// ```
pub fn pad_center(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    let left = padding / 2;
    let right = padding - left;

    let mut out = String::with_capacity(text.len() + padding);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', right));
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn field_width_is_always_even(column_width in 0usize..10_000) {
            let width = field_width(column_width);
            prop_assert_eq!(width % 2, 0);
            prop_assert!(width >= column_width + 2);
            prop_assert!(width <= column_width + 3);
        }

        #[test]
        fn pad_center_right_bias_law(
            text in "[a-zA-Z0-9]{0,20}",
            extra in 0usize..20,
        ) {
            let len = display_width(&text);
            let width = len + extra;
            let padded = pad_center(&text, width);

            prop_assert_eq!(display_width(&padded), width);

            let left = padded.chars().take_while(|c| *c == ' ').count();
            let right = width - len - left;
            prop_assert_eq!(left, (width - len) / 2);
            prop_assert!(right >= left);
            prop_assert!(right - left <= 1);
            prop_assert_eq!(padded.trim(), text.as_str());
        }
    }
}
