// ABOUTME: Header indexing: reads header cell text and builds the name→index map.
// ABOUTME: Falls back to the first body row when the table has no head section.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::dom::Dom;
use crate::error::{ExportError, Result};

/// Header names in cell order, plus a name→index lookup.
///
/// Names need not be unique. The lookup keeps the last position of a
/// repeated name while `names()` keeps every entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Header {
    pub fn new(names: Vec<String>) -> Self {
        let mut positions = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            positions.insert(name.clone(), i);
        }
        Self { names, positions }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Index of `name` (last occurrence).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Names that appear more than once, in first-seen order.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for (i, name) in self.names.iter().enumerate() {
            if self.positions.get(name) != Some(&i) && !out.contains(&name.as_str()) {
                out.push(name);
            }
        }
        out
    }
}

/// Reads the header row of `table`.
pub fn index_header<D: Dom>(dom: &D, table: D::Node) -> Result<Header> {
    let row = match dom.find_one(Some(table), "thead tr")? {
        Some(row) => row,
        None => dom.find_one(Some(table), "tbody tr")?.ok_or_else(|| {
            ExportError::not_found("index header", "table has no header row or body row")
        })?,
    };

    let names: Vec<String> = dom
        .find_all(Some(row), "th, td")?
        .into_iter()
        .map(|cell| dom.text(cell))
        .collect();
    if names.is_empty() {
        return Err(ExportError::not_found(
            "index header",
            "header row has no cells",
        ));
    }

    let header = Header::new(names);
    info!("available headers:");
    for (i, name) in header.names().iter().enumerate() {
        info!("[{}] {}", i, name);
    }
    let dupes = header.duplicates();
    if !dupes.is_empty() {
        warn!(
            "duplicate header names resolve to their last column: {}",
            dupes.join(", ")
        );
    }
    Ok(header)
}
