// ABOUTME: Row extraction: reads the selected cells of every row in the chosen container.
// ABOUTME: Missing cells become null values so every row yields one field per selected column.

use tracing::debug;

use crate::dom::Dom;
use crate::error::Result;
use crate::extractors::columns::ColumnSelection;
use crate::record::Record;

/// One `Record` per `tr` under `container`, in document order.
pub fn extract_rows<D: Dom>(
    dom: &D,
    container: D::Node,
    selection: &ColumnSelection,
) -> Result<Vec<Record>> {
    let rows = dom.find_all(Some(container), "tr")?;
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let cells = dom.find_all(Some(row), "td, th")?;
        let fields: Vec<(String, Option<String>)> = selection
            .columns()
            .iter()
            .map(|col| {
                let value = cells.get(col.index).map(|cell| dom.text(*cell));
                (col.name.clone(), value)
            })
            .collect();

        if fields.len() == selection.len() {
            records.push(Record::new(fields));
        } else {
            debug!(?row, "row skipped: field count mismatch");
        }
    }
    Ok(records)
}
