// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Structural validation of definition documents.
//!
//! The document is walked against a fixed schema before anything else
//! looks at it:
//!
//! ```text
//! {
//!   "datasetName": string (letters, digits, `_`),
//!   "models": [
//!     {
//!       "name": string,
//!       "typeName": string?,
//!       "tableName": string?,
//!       "fields": [ { "name": string, "type": string, "maxLength": integer? } ],
//!       "queries": { <key>: [ { "name": string, "query": string } ] }?
//!     }
//!   ]
//! }
//! ```
//!
//! Keys are checked in the order listed, array items in document order, and
//! the first violation is reported with its path. Unknown keys are allowed.
//! Type names, query group keys and `maxLength` values are only checked for
//! shape here; their meaning is checked by the parser.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::raw::RawDataset;
use crate::error::SchemaError;

const ROOT: &str = "$";

/// Validate `document` and return its typed view.
///
/// # Errors
///
/// [`SchemaError`] describing the first violation.
pub fn validate(document: &Value) -> Result<RawDataset, SchemaError> {
    check_dataset(document)?;
    RawDataset::deserialize(document).map_err(|err| SchemaError::new(ROOT, err.to_string()))
}

/// Check if `name` can be embedded in file names and macro names.
#[must_use]
pub fn is_identifier_fragment(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_dataset(value: &Value) -> Result<(), SchemaError> {
    let root = object(value, ROOT)?;

    let name = string(required(root, "datasetName", ROOT)?, "datasetName")?;
    if !is_identifier_fragment(name) {
        return Err(SchemaError::new(
            "datasetName",
            format!("`{name}` is not an identifier (letters, digits and `_` only)")
        ));
    }

    let models = array(required(root, "models", ROOT)?, "models")?;
    for (index, model) in models.iter().enumerate() {
        check_model(model, &format!("models[{index}]"))?;
    }

    Ok(())
}

fn check_model(value: &Value, path: &str) -> Result<(), SchemaError> {
    let model = object(value, path)?;

    string(required(model, "name", path)?, &child(path, "name"))?;
    for key in ["typeName", "tableName"] {
        if let Some(value) = model.get(key) {
            string(value, &child(path, key))?;
        }
    }

    let fields = array(required(model, "fields", path)?, &child(path, "fields"))?;
    for (index, field) in fields.iter().enumerate() {
        check_field(field, &format!("{path}.fields[{index}]"))?;
    }

    if let Some(queries) = model.get("queries") {
        check_queries(queries, &child(path, "queries"))?;
    }

    Ok(())
}

fn check_field(value: &Value, path: &str) -> Result<(), SchemaError> {
    let field = object(value, path)?;

    string(required(field, "name", path)?, &child(path, "name"))?;
    string(required(field, "type", path)?, &child(path, "type"))?;

    if let Some(max_length) = field.get("maxLength")
        && max_length.as_i64().is_none()
    {
        return Err(SchemaError::new(
            child(path, "maxLength"),
            format!("expected an integer, found {}", describe(max_length))
        ));
    }

    Ok(())
}

fn check_queries(value: &Value, path: &str) -> Result<(), SchemaError> {
    let groups = object(value, path)?;

    for (key, entries) in groups {
        let group_path = child(path, key);
        for (index, entry) in array(entries, &group_path)?.iter().enumerate() {
            let entry_path = format!("{group_path}[{index}]");
            let query = object(entry, &entry_path)?;
            string(required(query, "name", &entry_path)?, &child(&entry_path, "name"))?;
            string(required(query, "query", &entry_path)?, &child(&entry_path, "query"))?;
        }
    }

    Ok(())
}

fn child(path: &str, key: &str) -> String {
    if path == ROOT {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

fn required<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str
) -> Result<&'a Value, SchemaError> {
    object
        .get(key)
        .ok_or_else(|| SchemaError::new(path, format!("missing required key `{key}`")))
}

fn object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaError> {
    value.as_object().ok_or_else(|| mismatch(path, "an object", value))
}

fn array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, SchemaError> {
    value.as_array().ok_or_else(|| mismatch(path, "an array", value))
}

fn string<'a>(value: &'a Value, path: &str) -> Result<&'a str, SchemaError> {
    value.as_str().ok_or_else(|| mismatch(path, "a string", value))
}

fn mismatch(path: &str, expected: &str, found: &Value) -> SchemaError {
    SchemaError::new(path, format!("expected {expected}, found {}", describe(found)))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn minimal() -> Value {
        json!({
            "datasetName": "shop",
            "models": [{
                "name": "Item",
                "fields": [
                    { "name": "id", "type": "PrimaryKey" },
                    { "name": "label", "type": "Text", "maxLength": 32 }
                ],
                "queries": {
                    "find": [{ "name": "item_by_label", "query": "WHERE label = {l:Text}" }]
                }
            }]
        })
    }

    fn error_for(document: &Value) -> SchemaError {
        validate(document).unwrap_err()
    }

    #[test]
    fn accepts_minimal_document() {
        let raw = validate(&minimal()).unwrap();
        assert_eq!(raw.dataset_name, "shop");
        assert_eq!(raw.models[0].fields[1].max_length, Some(32));
        assert_eq!(raw.models[0].queries["find"][0].name, "item_by_label");
    }

    #[test]
    fn root_must_be_object() {
        let err = error_for(&json!([]));
        assert_eq!(err.path, "$");
        assert_eq!(err.message, "expected an object, found an array");
    }

    #[test]
    fn missing_dataset_name() {
        let err = error_for(&json!({ "models": [] }));
        assert_eq!(err.path, "$");
        assert_eq!(err.message, "missing required key `datasetName`");
    }

    #[test]
    fn dataset_name_must_be_identifier() {
        let err = error_for(&json!({ "datasetName": "my shop", "models": [] }));
        assert_eq!(err.path, "datasetName");
    }

    #[test]
    fn missing_field_type() {
        let mut document = minimal();
        document["models"][0]["fields"][1]
            .as_object_mut()
            .unwrap()
            .remove("type");
        let err = error_for(&document);
        assert_eq!(err.path, "models[0].fields[1]");
        assert_eq!(err.message, "missing required key `type`");
    }

    #[test]
    fn max_length_must_be_integer() {
        let mut document = minimal();
        document["models"][0]["fields"][1]["maxLength"] = json!("32");
        let err = error_for(&document);
        assert_eq!(err.path, "models[0].fields[1].maxLength");
        assert_eq!(err.message, "expected an integer, found a string");
    }

    #[test]
    fn non_positive_max_length_passes_the_schema() {
        let mut document = minimal();
        document["models"][0]["fields"][1]["maxLength"] = json!(-3);
        assert!(validate(&document).is_ok());
    }

    #[test]
    fn null_type_name_is_rejected() {
        let mut document = minimal();
        document["models"][0]["typeName"] = Value::Null;
        let err = error_for(&document);
        assert_eq!(err.path, "models[0].typeName");
        assert_eq!(err.message, "expected a string, found null");
    }

    #[test]
    fn query_entry_shape() {
        let mut document = minimal();
        document["models"][0]["queries"]["find"][0]["query"] = json!(7);
        let err = error_for(&document);
        assert_eq!(err.path, "models[0].queries.find[0].query");
    }

    #[test]
    fn unknown_query_group_passes_the_schema() {
        let mut document = minimal();
        document["models"][0]["queries"]["upsert"] = json!([]);
        assert!(validate(&document).is_ok());
    }

    #[test]
    fn first_violation_wins() {
        let document = json!({
            "datasetName": "shop",
            "models": [
                { "name": "A" },
                { "fields": [] }
            ]
        });
        let err = error_for(&document);
        assert_eq!(err.path, "models[0]");
        assert_eq!(err.message, "missing required key `fields`");
    }

    #[test]
    fn query_groups_are_checked_in_document_order() {
        let document: Value = serde_json::from_str(
            r#"{
                "datasetName": "shop",
                "models": [{
                    "name": "Item",
                    "fields": [],
                    "queries": {
                        "select": [{ "name": "all_items" }],
                        "count": [{ "name": "item_count" }]
                    }
                }]
            }"#
        )
        .unwrap();
        let err = error_for(&document);
        assert_eq!(err.path, "models[0].queries.select[0]");
        assert_eq!(err.message, "missing required key `query`");
    }

    #[test]
    fn extra_keys_are_allowed() {
        let mut document = minimal();
        document["version"] = json!(2);
        document["models"][0]["comment"] = json!("items for sale");
        assert!(validate(&document).is_ok());
    }

    #[test]
    fn identifier_fragments() {
        assert!(is_identifier_fragment("shop_2"));
        assert!(!is_identifier_fragment(""));
        assert!(!is_identifier_fragment("shop-db"));
    }
}
