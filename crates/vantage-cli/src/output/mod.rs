use serde::Serialize;
use serde_json::Value;
use vantage_dashboard::view::{Cell, TableRow};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Render a serializable response to a string in the requested format.
/// Tables of arbitrary values use a key/value layout.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a list: JSON formats serialize `value`, the table format renders
/// `rows` with their badge colours.
pub fn output_rows<T: Serialize, R: TableRow>(
    value: &T,
    rows: &[R],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Table => render_rows(rows),
        other => render(value, other)?,
    };
    println!("{rendered}");
    Ok(())
}

#[must_use]
pub fn render_rows<R: TableRow>(rows: &[R]) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    let cells = rows.iter().map(TableRow::cells).collect::<Vec<_>>();
    table::render_table(R::headers(), &cells, table_options())
}

fn render_value_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    let rows = match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| vec![Cell::plain(key), Cell::plain(value_to_cell(&value))])
            .collect::<Vec<_>>(),
        Value::Array(items) if items.is_empty() => return Ok(String::from("(no rows)")),
        scalar => vec![vec![Cell::plain("value"), Cell::plain(value_to_cell(&scalar))]],
    };
    Ok(table::render_table(&["KEY", "VALUE"], &rows, table_options()))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        tags: Vec<&'static str>,
        value: u32,
    }

    fn example() -> Example {
        Example {
            id: "x",
            tags: vec!["a", "b"],
            value: 7,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&example(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("KEY")));
        assert!(out.contains("a, b"));
        assert!(out.contains("value"));
    }
}
