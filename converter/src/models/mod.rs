//! Domain models for converted rows.
//!
//! A [`Record`] keeps its fields in header order, so serializing it yields
//! a JSON object whose keys appear exactly as the CSV columns did.

use serde::ser::{Serialize, SerializeMap, Serializer};

// ============================================================================
// FieldValue
// ============================================================================

/// Value of a single field: the raw CSV string, or a list for the
/// partner-id column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

// ============================================================================
// Record
// ============================================================================

/// One converted row: field name to value, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

/// Every record from one run, in input row order.
pub type Dataset = Vec<Record>;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record by pairing header names with row values positionally.
    ///
    /// `row` is expected to have the header's length; the parser enforces
    /// that before records are built.
    pub fn from_row(headers: &[String], row: Vec<String>) -> Self {
        let fields = headers
            .iter()
            .cloned()
            .zip(row.into_iter().map(FieldValue::Text))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Replace the value of `name` in place, or append it if absent.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_row_keeps_header_order() {
        let record = Record::from_row(
            &headers(&["id", "name", "fid"]),
            vec!["I1".into(), "Alice".into(), "I9".into()],
        );

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "name", "fid"]);
        assert_eq!(record.get("name").and_then(FieldValue::as_str), Some("Alice"));
        assert!(record.get("mid").is_none());
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut record = Record::from_row(
            &headers(&["id", "pids", "name"]),
            vec!["I1".into(), "I2".into(), "Alice".into()],
        );
        record.set("pids", vec!["I2".to_string()]);

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "pids", "name"]);
        assert_eq!(
            record.get("pids").and_then(FieldValue::as_list),
            Some(&["I2".to_string()][..])
        );
    }

    #[test]
    fn test_set_appends_missing_field() {
        let mut record = Record::new();
        record.set("id", "I1");
        record.set("pids", Vec::<String>::new());

        assert_eq!(record.len(), 2);
        assert_eq!(record.keys().last(), Some("pids"));
    }

    #[test]
    fn test_serialize_object_in_field_order() {
        let mut record = Record::new();
        record.set("name", "Zoë");
        record.set("id", "I1");
        record.set("pids", vec!["I2".to_string(), "I3".to_string()]);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Zoë","id":"I1","pids":["I2","I3"]}"#);
    }
}
