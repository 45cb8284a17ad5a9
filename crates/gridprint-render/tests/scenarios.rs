//! End-to-end rendering of representative tables.

use gridprint_render::{render_table, DataSet, Value};

#[test]
fn users_table_matches_expected_grid() {
    let rows = vec![
        DataSet::new(["id", "name"], ["1", "Bob"]),
        DataSet::new(["id", "name"], ["2", "Alice"]),
    ];

    let out = render_table("users", &rows);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "╔════════╦════════╗");
    assert_eq!(lines[1], "║   id   ║  name  ║");
    assert_eq!(lines[2], "╠════════╬════════╣");
    assert_eq!(lines[3], "║   1    ║  Bob   ║");
    assert_eq!(lines[4], "╠════════╬════════╣");
    assert_eq!(lines[5], "║   2    ║ Alice  ║");
    assert_eq!(lines[6], "╚════════╩════════╝");
    assert_eq!(lines.len(), 7);
}

#[test]
fn empty_table_renders_message_box() {
    let expected = "\
╔══════════════════════════════════════════╗
║ Table 'empty' is empty or does not exist ║
╚══════════════════════════════════════════╝
";
    assert_eq!(render_table("empty", &[]), expected);
}

#[test]
fn mixed_value_kinds_use_display_text() {
    let rows = vec![
        DataSet::builder()
            .put("id", 1)
            .put("active", true)
            .put("score", 9.5)
            .put("note", Value::Null)
            .build(),
    ];

    // widest is "active" (6) -> field 8
    let out = render_table("mixed", &rows);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "║   id   ║ active ║ score  ║  note  ║");
    assert_eq!(lines[3], "║   1    ║  true  ║  9.5   ║  null  ║");
}

#[test]
fn header_wider_than_values_sets_width() {
    let rows = vec![DataSet::new(["description"], ["x"])];

    // "description" is 11 wide -> field 14
    let out = render_table("notes", &rows);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], format!("╔{}╗", "═".repeat(14)));
    assert_eq!(lines[1], "║ description  ║");
    assert_eq!(lines[3], "║      x       ║");
}
