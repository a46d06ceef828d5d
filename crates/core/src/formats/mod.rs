// ABOUTME: Output format converters for extracted records.
// ABOUTME: Handles pretty JSON rendering, CSV field escaping, and the CSV artifact name.

//! Output format conversion module.
//!
//! JSON is rendered with two-space indentation. CSV uses `\n` line endings,
//! quotes only the fields that need it, and starts with a byte-order mark so
//! spreadsheet tools pick UTF-8.

use chrono::NaiveDate;

use crate::error::{ExportError, Result};
use crate::record::Record;

/// U+FEFF, prepended to CSV text.
pub const BOM: char = '\u{FEFF}';

/// Pretty-printed JSON array of records.
pub fn render_json(records: &[Record]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| {
        ExportError::persist("json", "cannot serialize records").with_source(e.into())
    })
}

fn needs_quotes(field: &str) -> bool {
    field.contains([',', '"', '\n', '\r'])
}

/// Escape one CSV field. `None` becomes an empty, unquoted field.
pub fn escape_csv_field(field: Option<&str>) -> String {
    match field {
        None => String::new(),
        Some(s) if needs_quotes(s) => format!("\"{}\"", s.replace('"', "\"\"")),
        Some(s) => s.to_string(),
    }
}

/// Header line plus one line per record, BOM-prefixed, joined with `\n`.
pub fn render_csv(columns: &[String], records: &[Record]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|c| escape_csv_field(Some(c)))
            .collect::<Vec<_>>()
            .join(","),
    );
    for record in records {
        let line = columns
            .iter()
            .map(|c| escape_csv_field(record.get(c).flatten()))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    let mut out = String::new();
    out.push(BOM);
    out.push_str(&lines.join("\n"));
    out
}

/// `ExportedData_<YYYY-MM-DD>.csv`
pub fn csv_file_name(date: NaiveDate) -> String {
    format!("ExportedData_{}.csv", date.format("%Y-%m-%d"))
}
