// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model definition.
//!
//! A [`Model`] is one data model mapped to one SQLite table and one C
//! struct. The struct name defaults to the model name and can be replaced
//! with `typeName`; the table name likewise with `tableName`.

use super::{
    field::Field,
    query::{Query, QueryType}
};
use crate::error::PrimaryKeyConstraintViolation;

/// One data model of a dataset.
///
/// # Construction
///
/// ```rust
/// use cdal::{Field, FieldType, Model};
///
/// let model = Model::new(
///     "User",
///     vec![
///         Field::new("id", FieldType::PrimaryKey),
///         Field::new("email", FieldType::Text),
///     ]
/// )
/// .with_table_name("users");
///
/// assert_eq!(model.type_name(), "User");
/// assert_eq!(model.table_name(), "users");
/// assert_eq!(model.primary_key().unwrap().name(), "id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    name:       String,
    fields:     Vec<Field>,
    queries:    Vec<Query>,
    type_name:  Option<String>,
    table_name: Option<String>
}

impl Model {
    /// Create a model without queries or name overrides.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            queries: Vec::new(),
            type_name: None,
            table_name: None
        }
    }

    /// Replace the custom queries.
    #[must_use]
    pub fn with_queries(mut self, queries: Vec<Query>) -> Self {
        self.queries = queries;
        self
    }

    /// Override the C struct name.
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Override the table name.
    #[must_use]
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration (column) order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// Queries of one type, in declaration order.
    pub fn queries_of(&self, query_type: QueryType) -> impl Iterator<Item = &Query> + '_ {
        self.queries
            .iter()
            .filter(move |query| query.query_type() == query_type)
    }

    /// C struct name: the `typeName` override, else the model name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.type_name.as_deref().unwrap_or(&self.name)
    }

    /// Table name: the `tableName` override, else the model name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        self.table_name.as_deref().unwrap_or(&self.name)
    }

    /// Number of `PrimaryKey` fields.
    #[must_use]
    pub fn primary_key_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_primary_key()).count()
    }

    /// The single primary key field.
    ///
    /// # Errors
    ///
    /// [`PrimaryKeyConstraintViolation`] if the model has zero or more than
    /// one `PrimaryKey` field.
    pub fn primary_key(&self) -> Result<&Field, PrimaryKeyConstraintViolation> {
        let mut keys = self.fields.iter().filter(|f| f.is_primary_key());
        match (keys.next(), keys.next()) {
            (Some(key), None) => Ok(key),
            _ => Err(PrimaryKeyConstraintViolation {
                model: self.name.clone(),
                found: self.primary_key_count()
            })
        }
    }

    /// Check if any field owns heap memory.
    #[must_use]
    pub fn has_dynamic_fields(&self) -> bool {
        self.fields.iter().any(Field::is_dynamically_allocated)
    }

    /// 0-based column index of the field named `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FieldType;

    fn user() -> Model {
        Model::new(
            "User",
            vec![
                Field::new("id", FieldType::PrimaryKey),
                Field::new("email", FieldType::Text),
                Field::with_max_length("bio", FieldType::Text, 256).unwrap(),
            ]
        )
    }

    #[test]
    fn names_default_to_model_name() {
        let model = user();
        assert_eq!(model.type_name(), "User");
        assert_eq!(model.table_name(), "User");
    }

    #[test]
    fn overrides_replace_names() {
        let model = user().with_type_name("user_t").with_table_name("users");
        assert_eq!(model.name(), "User");
        assert_eq!(model.type_name(), "user_t");
        assert_eq!(model.table_name(), "users");
    }

    #[test]
    fn single_primary_key_found() {
        assert_eq!(user().primary_key().unwrap().name(), "id");
    }

    #[test]
    fn missing_primary_key() {
        let model = Model::new("Tag", vec![Field::new("label", FieldType::Text)]);
        let err = model.primary_key().unwrap_err();
        assert_eq!(err.found, 0);
        assert_eq!(err.model, "Tag");
    }

    #[test]
    fn duplicate_primary_key() {
        let model = Model::new(
            "Pair",
            vec![
                Field::new("a", FieldType::PrimaryKey),
                Field::new("b", FieldType::PrimaryKey),
            ]
        );
        assert_eq!(model.primary_key().unwrap_err().found, 2);
    }

    #[test]
    fn dynamic_fields_detected() {
        assert!(user().has_dynamic_fields());
        let fixed_only = Model::new(
            "Code",
            vec![
                Field::new("id", FieldType::PrimaryKey),
                Field::with_max_length("value", FieldType::Text, 8).unwrap(),
            ]
        );
        assert!(!fixed_only.has_dynamic_fields());
    }

    #[test]
    fn queries_of_keeps_declaration_order_per_type() {
        let query = |query_type, name: &str| Query::new(query_type, name, "", Vec::new());
        let model = user().with_queries(vec![
            query(QueryType::Find, "by_email"),
            query(QueryType::Count, "total"),
            query(QueryType::Find, "by_bio"),
            query(QueryType::Delete, "stale"),
            query(QueryType::Count, "with_bio"),
        ]);

        let names = |query_type| {
            model
                .queries_of(query_type)
                .map(Query::name)
                .collect::<Vec<_>>()
        };
        assert_eq!(names(QueryType::Find), ["by_email", "by_bio"]);
        assert_eq!(names(QueryType::Count), ["total", "with_bio"]);
        assert_eq!(names(QueryType::Delete), ["stale"]);
        assert!(names(QueryType::Select).is_empty());
    }

    #[test]
    fn column_index_follows_declaration_order() {
        let model = user();
        assert_eq!(model.column_index("id"), Some(0));
        assert_eq!(model.column_index("bio"), Some(2));
        assert_eq!(model.column_index("missing"), None);
    }
}
