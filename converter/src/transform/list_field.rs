//! Turn the partner-id column into a JSON list.
//!
//! ```text
//! CSV cell                JSON value
//! "I2, I3 ,  I4"    →     ["I2", "I3", "I4"]
//! "I2,,  ,"         →     ["I2"]
//! ""  / no column   →     []
//! ```

use crate::models::{Dataset, FieldValue, Record};
use crate::parser::ParseResult;

/// Split a comma-separated cell into trimmed, non-empty tokens.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace `field` in `record` with its list form.
///
/// A missing field is appended as an empty list so every record carries it.
pub fn apply_list_field(record: &mut Record, field: &str) {
    let items = match record.get(field) {
        Some(FieldValue::Text(raw)) if !raw.is_empty() => split_list(raw),
        Some(FieldValue::List(items)) => items.clone(),
        _ => Vec::new(),
    };
    record.set(field, items);
}

/// Build the dataset from parsed rows, one record per row in input order.
pub fn build_dataset(parsed: ParseResult, field: &str) -> Dataset {
    let ParseResult { headers, rows, .. } = parsed;

    rows.into_iter()
        .map(|row| {
            let mut record = Record::from_row(&headers, row);
            apply_list_field(&mut record, field);
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RaggedRows;
    use crate::parser::parse_csv;

    #[test]
    fn test_split_trims_tokens() {
        assert_eq!(split_list("I1, I2 ,  I3"), vec!["I1", "I2", "I3"]);
    }

    #[test]
    fn test_split_drops_empty_tokens() {
        assert_eq!(split_list("I1,, ,I2,"), vec!["I1", "I2"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_split_single_token() {
        assert_eq!(split_list("I7"), vec!["I7"]);
    }

    #[test]
    fn test_split_keeps_inner_whitespace() {
        assert_eq!(split_list(" Jane Doe ,X"), vec!["Jane Doe", "X"]);
    }

    #[test]
    fn test_apply_empty_value() {
        let mut record = Record::new();
        record.set("id", "I1");
        record.set("pids", "");
        apply_list_field(&mut record, "pids");

        assert_eq!(record.get("pids"), Some(&FieldValue::List(vec![])));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "pids"]);
    }

    #[test]
    fn test_apply_missing_field_appends() {
        let mut record = Record::new();
        record.set("id", "I1");
        apply_list_field(&mut record, "pids");

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "pids"]);
        assert_eq!(record.get("pids"), Some(&FieldValue::List(vec![])));
    }

    #[test]
    fn test_apply_is_stable_on_lists() {
        let mut record = Record::new();
        record.set("pids", "I2,I3");
        apply_list_field(&mut record, "pids");
        apply_list_field(&mut record, "pids");

        assert_eq!(
            record.get("pids").and_then(FieldValue::as_list),
            Some(&["I2".to_string(), "I3".to_string()][..])
        );
    }

    #[test]
    fn test_build_dataset_scenario() {
        let parsed = parse_csv(
            "id,pids,name\nI1,\"I2,I3\",Alice\nI2,,Bob\n",
            RaggedRows::Reject,
        )
        .unwrap();
        let dataset = build_dataset(parsed, "pids");

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0].keys().collect::<Vec<_>>(), vec!["id", "pids", "name"]);
        assert_eq!(
            dataset[0].get("pids").and_then(FieldValue::as_list),
            Some(&["I2".to_string(), "I3".to_string()][..])
        );
        assert_eq!(dataset[1].get("pids"), Some(&FieldValue::List(vec![])));
        assert_eq!(dataset[1].get("name").and_then(FieldValue::as_str), Some("Bob"));
    }

    #[test]
    fn test_build_dataset_other_field() {
        let parsed = parse_csv("id,children\nI1,\"I4, I5\"", RaggedRows::Reject).unwrap();
        let dataset = build_dataset(parsed, "children");

        assert_eq!(
            dataset[0].get("children").and_then(FieldValue::as_list).map(|l| l.len()),
            Some(2)
        );
        assert!(dataset[0].get("pids").is_none());
    }
}
