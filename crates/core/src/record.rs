// ABOUTME: Record type holding one exported row, keyed by selected column name.
// ABOUTME: Serializes as a JSON object whose keys follow the column selection order.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One exported row. Values are `None` when the row had no cell at the
/// selected index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new(fields: Vec<(String, Option<String>)>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Value for `name`; `Some(None)` means the column exists but the cell was absent.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_deref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn fields(&self) -> &[(String, Option<String>)] {
        &self.fields
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_selection_order_with_nulls() {
        let record = Record::new(vec![
            ("Zeta".to_string(), Some("z".to_string())),
            ("Alpha".to_string(), None),
        ]);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"Zeta":"z","Alpha":null}"#
        );
        assert_eq!(record.get("Alpha"), Some(None));
        assert_eq!(record.get("Zeta"), Some(Some("z")));
        assert_eq!(record.get("Missing"), None);
        assert_eq!(record.names().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
    }
}
