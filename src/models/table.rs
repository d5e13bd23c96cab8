//! In-memory result table and output rendering.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum display width of a table cell before truncation.
const MAX_CELL_WIDTH: usize = 40;

/// A result column, as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

/// A fully materialized query result: columns in select-list order plus
/// one positional row per matched record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    /// Column names in select-list order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Format a single cell for text output.
fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render the result as an aligned text table.
pub fn render_table(result: &QueryResult) -> String {
    if result.rows.is_empty() {
        return "No rows returned.\n".to_string();
    }

    let headers = result.column_names();

    // Format all cells up front, truncating overlong values.
    let formatted: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| {
                    let cell = format_cell(v);
                    if cell.chars().count() > MAX_CELL_WIDTH - 2 {
                        format!(
                            "{}...",
                            cell.chars().take(MAX_CELL_WIDTH - 5).collect::<String>()
                        )
                    } else {
                        cell
                    }
                })
                .collect()
        })
        .collect();

    // Column widths: widest of header and cells.
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &formatted {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w))
        .collect();
    out.push_str(&format!(" {}\n", header_line.join(" | ")));

    let total_width: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1) + 2;
    out.push_str(&format!("{}\n", "-".repeat(total_width)));

    for row in &formatted {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect();
        out.push_str(&format!(" {}\n", line.join(" | ")));
    }

    out
}

/// Render the result as pretty-printed JSON, preserving column order.
pub fn render_json(result: &QueryResult) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Quote a CSV field if it contains a delimiter, quote, or newline.
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render the result as CSV with a header row.
pub fn render_csv(result: &QueryResult) -> String {
    let mut out = String::new();

    let header: Vec<String> = result
        .columns
        .iter()
        .map(|c| csv_escape(&c.name))
        .collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for row in &result.rows {
        let line: Vec<String> = row.iter().map(|v| csv_escape(&format_cell(v))).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}
