// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rejected definitions.

use cdal::{
    CompileOptions, Error, FieldType, PrimaryKeyCheck, compile_str,
    error::{DefinitionErrorKind, Entry}
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn single_field(field: &str) -> String {
    format!(
        r#"{{
            "datasetName": "app",
            "models": [{{
                "name": "Thing",
                "fields": [{{ "name": "id", "type": "PrimaryKey" }}, {field}]
            }}]
        }}"#
    )
}

fn definition_kind(err: Error) -> DefinitionErrorKind {
    match err {
        Error::Definition(err) => err.kind().clone(),
        other => panic!("expected a definition error, got {other:?}")
    }
}

#[rstest]
#[case("PrimaryKey", FieldType::PrimaryKey)]
#[case("ForeignKey", FieldType::ForeignKey)]
#[case("Integer", FieldType::Integer)]
#[case("Real", FieldType::Real)]
fn max_length_on_primitive_types(
    #[case] type_name: &str,
    #[case] field_type: FieldType,
    #[values(1, 16, 4096)] max_length: i64
) {
    let text = single_field(&format!(
        r#"{{ "name": "value", "type": "{type_name}", "maxLength": {max_length} }}"#
    ));
    let err = compile_str(&text, &CompileOptions::default()).unwrap_err();
    assert_eq!(
        definition_kind(err),
        DefinitionErrorKind::MaxLengthNotAllowed(field_type)
    );
}

#[rstest]
#[case(0)]
#[case(-8)]
fn non_positive_max_length(#[case] max_length: i64) {
    let text = single_field(&format!(
        r#"{{ "name": "body", "type": "Text", "maxLength": {max_length} }}"#
    ));
    let err = compile_str(&text, &CompileOptions::default()).unwrap_err();
    assert_eq!(
        definition_kind(err),
        DefinitionErrorKind::InvalidMaxLength(max_length)
    );
}

#[rstest]
#[case("Enum")]
#[case("text")]
#[case("String")]
fn unknown_field_type_builds_nothing(#[case] type_name: &str) {
    let text = single_field(&format!(r#"{{ "name": "kind", "type": "{type_name}" }}"#));
    let err = match compile_str(&text, &CompileOptions::default()) {
        Err(Error::Definition(err)) => err,
        other => panic!("expected a definition error, got {other:?}")
    };
    assert_eq!(
        err.kind(),
        &DefinitionErrorKind::UnknownFieldType(type_name.to_owned())
    );
    assert_eq!(err.location().model.as_deref(), Some("Thing"));
    assert_eq!(err.location().entry, Some(Entry::Field("kind".into())));
}

#[test]
fn unknown_placeholder_type_names_the_query() {
    let text = r#"{
        "datasetName": "app",
        "models": [{
            "name": "Thing",
            "fields": [{ "name": "id", "type": "PrimaryKey" }],
            "queries": { "find": [{ "name": "by_flag", "query": "WHERE flag = {flag:Bool}" }] }
        }]
    }"#;
    let err = compile_str(text, &CompileOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "model `Thing`, query `by_flag`: unknown field type `Bool`"
    );
}

#[test]
fn unknown_query_group() {
    let text = r#"{
        "datasetName": "app",
        "models": [{
            "name": "Thing",
            "fields": [{ "name": "id", "type": "PrimaryKey" }],
            "queries": { "insert": [] }
        }]
    }"#;
    let err = compile_str(text, &CompileOptions::default()).unwrap_err();
    assert_eq!(
        definition_kind(err),
        DefinitionErrorKind::UnknownQueryType("insert".into())
    );
}

const NO_PRIMARY_KEY: &str = r#"{
    "datasetName": "app",
    "models": [{
        "name": "Tag",
        "fields": [{ "name": "label", "type": "Text" }]
    }]
}"#;

#[test]
fn eager_check_rejects_missing_primary_key() {
    let err = compile_str(NO_PRIMARY_KEY, &CompileOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "model `Tag` must have exactly one PrimaryKey field, found 0"
    );
}

#[test]
fn lazy_check_defers_to_lookup() {
    let options = CompileOptions::default().with_primary_key_check(PrimaryKeyCheck::Lazy);
    let dataset = compile_str(NO_PRIMARY_KEY, &options).unwrap();

    let err = dataset.models()[0].primary_key().unwrap_err();
    assert_eq!(err.model, "Tag");
    assert_eq!(err.found, 0);
}

#[test]
fn eager_check_rejects_two_primary_keys() {
    let text = single_field(r#"{ "name": "other_id", "type": "PrimaryKey" }"#);
    let err = compile_str(&text, &CompileOptions::default()).unwrap_err();
    assert!(matches!(err, Error::PrimaryKey(violation) if violation.found == 2));
}

#[rstest]
#[case(r#"{ "models": [] }"#, "$")]
#[case(r#"{ "datasetName": "app", "models": {} }"#, "models")]
#[case(
    r#"{ "datasetName": "app", "models": [{ "name": "T", "fields": [{ "name": "a" }] }] }"#,
    "models[0].fields[0]"
)]
fn schema_errors_name_the_path(#[case] text: &str, #[case] path: &str) {
    let err = match compile_str(text, &CompileOptions::default()) {
        Err(Error::Schema(err)) => err,
        other => panic!("expected a schema error, got {other:?}")
    };
    assert_eq!(err.path, path);
}

#[test]
fn malformed_json() {
    let err = compile_str("{ \"datasetName\": ", &CompileOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
