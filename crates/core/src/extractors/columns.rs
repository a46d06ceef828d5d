// ABOUTME: Column selection strategies: by header name or by zero-based index.
// ABOUTME: Produces an ordered, validated list of (name, index) pairs in the user's order.

use tracing::warn;

use crate::error::{ExportError, Result};
use crate::extractors::header::Header;
use crate::options::ColumnMode;

/// One selected column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub index: usize,
}

/// The validated column list, in the order the user asked for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSelection {
    columns: Vec<Column>,
    unmatched: Vec<String>,
}

impl ColumnSelection {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Requested names that were not in the header (name mode only).
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    // A name already selected keeps its first position.
    fn push(&mut self, column: Column, repeated: &mut Vec<String>) {
        if self.columns.iter().any(|c| c.name == column.name) {
            repeated.push(column.name);
        } else {
            self.columns.push(column);
        }
    }
}

fn split_list(input: &str) -> impl Iterator<Item = &str> {
    input.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn finish(selection: ColumnSelection, repeated: Vec<String>) -> Result<ColumnSelection> {
    if selection.is_empty() {
        return Err(ExportError::invalid_choice(
            "select columns",
            "no requested column matches the table header",
        ));
    }
    if !repeated.is_empty() {
        warn!("columns requested more than once, kept once: {}", repeated.join(", "));
    }
    Ok(selection)
}

/// Comma-separated header names. Unknown names are skipped with a warning.
pub fn select_by_name(header: &Header, input: &str) -> Result<ColumnSelection> {
    let mut selection = ColumnSelection::default();
    let mut repeated = Vec::new();
    for name in split_list(input) {
        match header.position(name) {
            Some(index) => selection.push(
                Column {
                    name: name.to_string(),
                    index,
                },
                &mut repeated,
            ),
            None => selection.unmatched.push(name.to_string()),
        }
    }
    if !selection.is_empty() && !selection.unmatched.is_empty() {
        warn!(
            "column names not found, skipped: {}",
            selection.unmatched.join(", ")
        );
    }
    finish(selection, repeated)
}

/// Comma-separated zero-based indices. Non-numeric and out-of-range entries
/// are dropped silently.
pub fn select_by_index(header: &Header, input: &str) -> Result<ColumnSelection> {
    let mut selection = ColumnSelection::default();
    let mut repeated = Vec::new();
    for entry in split_list(input) {
        let Some(index) = entry.parse::<usize>().ok() else {
            continue;
        };
        if let Some(name) = header.name(index) {
            selection.push(
                Column {
                    name: name.to_string(),
                    index,
                },
                &mut repeated,
            );
        }
    }
    finish(selection, repeated)
}

/// Dispatches to the strategy for `mode`.
pub fn select_columns(mode: ColumnMode, header: &Header, input: &str) -> Result<ColumnSelection> {
    match mode {
        ColumnMode::Names => select_by_name(header, input),
        ColumnMode::Indices => select_by_index(header, input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header() -> Header {
        Header::new(vec!["Name".into(), "Age".into(), "City".into()])
    }

    fn pairs(sel: &ColumnSelection) -> Vec<(&str, usize)> {
        sel.columns()
            .iter()
            .map(|c| (c.name.as_str(), c.index))
            .collect()
    }

    #[test]
    fn by_name_keeps_user_order() {
        let sel = select_by_name(&header(), " City , Name ,,").unwrap();
        assert_eq!(pairs(&sel), vec![("City", 2), ("Name", 0)]);
        assert!(sel.unmatched().is_empty());
    }

    #[test]
    fn by_name_skips_unknown() {
        let sel = select_by_name(&header(), "Name,Country").unwrap();
        assert_eq!(pairs(&sel), vec![("Name", 0)]);
        assert_eq!(sel.unmatched(), &["Country".to_string()]);
    }

    #[test]
    fn by_name_nothing_matches() {
        let err = select_by_name(&header(), "Country, Zip").unwrap_err();
        assert!(err.is_invalid_choice());
        let err = select_by_name(&header(), " , ").unwrap_err();
        assert!(err.is_invalid_choice());
    }

    #[test]
    fn by_name_is_case_sensitive() {
        assert!(select_by_name(&header(), "name").is_err());
    }

    #[test]
    fn by_name_uses_last_duplicate_header() {
        let h = Header::new(vec!["A".into(), "B".into(), "A".into()]);
        let sel = select_by_name(&h, "A").unwrap();
        assert_eq!(pairs(&sel), vec![("A", 2)]);
    }

    #[test]
    fn repeated_request_kept_once() {
        let sel = select_by_name(&header(), "Age,Name,Age").unwrap();
        assert_eq!(pairs(&sel), vec![("Age", 1), ("Name", 0)]);
    }

    #[test]
    fn by_index_drops_invalid_entries() {
        let sel = select_by_index(&header(), "2, x, 0, 7, -1").unwrap();
        assert_eq!(pairs(&sel), vec![("City", 2), ("Name", 0)]);
        assert!(sel.unmatched().is_empty());
    }

    #[test]
    fn by_index_nothing_valid() {
        let err = select_by_index(&header(), "5,abc").unwrap_err();
        assert!(err.is_invalid_choice());
    }

    #[test]
    fn by_index_same_name_twice_kept_once() {
        let h = Header::new(vec!["A".into(), "B".into(), "A".into()]);
        let sel = select_by_index(&h, "0,2,1").unwrap();
        assert_eq!(pairs(&sel), vec![("A", 0), ("B", 1)]);
    }

    #[test]
    fn dispatch_follows_mode() {
        let h = header();
        assert_eq!(
            select_columns(ColumnMode::Indices, &h, "1").unwrap().names(),
            vec!["Age".to_string()]
        );
        assert_eq!(
            select_columns(ColumnMode::Names, &h, "Age").unwrap().names(),
            vec!["Age".to_string()]
        );
    }
}
