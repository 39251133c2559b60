// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-template filter registry.
//!
//! A renderer looks up derived names and fragments by filter name. Each
//! [`Template`] gets its own [`Filters`] value built by
//! [`Filters::for_template`]; nothing is registered globally.
//!
//! # Registry
//!
//! ```text
//! every template     model_c_type, model_pointer_type, field_type_declaration, ...
//! TypesHeader        + header_guard_macro, header_name
//! TypesSource        + source_name
//! AccessorHeader     + header_guard_macro, header_name, CRUD function names
//! AccessorSource     + source_name, CRUD function names, binds, reads, SQL
//! ```
//!
//! Filters producing SQL return it as a quoted C string literal.

use std::{collections::BTreeMap, fmt};

use super::{
    access, ctypes,
    fragment::{Call, Read},
    names, sql
};
use crate::{
    dataset::{Dataset, Field, Model, Query, QueryParam},
    error::PrimaryKeyConstraintViolation,
    generate::Template
};

/// A registered filter.
///
/// Each variant holds a plain function pointer; the variant tells the
/// renderer which arguments to pass.
#[derive(Clone, Copy)]
pub enum Filter {
    Dataset(fn(&Dataset) -> String),
    Model(fn(&Model) -> String),

    /// Model filter that needs the model's primary key.
    CheckedModel(fn(&Model) -> Result<String, PrimaryKeyConstraintViolation>),
    Field(fn(&Field) -> String),

    /// `(field, model)`
    Column(fn(&Field, &Model) -> String),

    /// `(field, model, query_var, model_var)`
    FieldBind(fn(&Field, &Model, &str, &str) -> Call),

    /// `(field, model, query_var, model_var, success_var)`
    FieldRead(fn(&Field, &Model, &str, &str, &str) -> Read),

    /// `(query, model)`
    Query(fn(&Query, &Model) -> String),
    Param(fn(&QueryParam) -> String),

    /// `(param, query_var)`
    ParamBind(fn(&QueryParam, &str) -> Call)
}

impl Filter {
    /// Variant name, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Dataset(_) => "Dataset",
            Self::Model(_) => "Model",
            Self::CheckedModel(_) => "CheckedModel",
            Self::Field(_) => "Field",
            Self::Column(_) => "Column",
            Self::FieldBind(_) => "FieldBind",
            Self::FieldRead(_) => "FieldRead",
            Self::Query(_) => "Query",
            Self::Param(_) => "Param",
            Self::ParamBind(_) => "ParamBind"
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Filter::{}", self.kind())
    }
}

/// Immutable filter set for one template.
#[derive(Debug, Clone)]
pub struct Filters {
    entries: BTreeMap<&'static str, Filter>
}

impl Filters {
    /// Build the filter set used by `template`.
    #[must_use]
    pub fn for_template(template: Template) -> Self {
        let mut entries = common();
        let specific = match template {
            Template::TypesHeader => types_header(),
            Template::TypesSource => types_source(),
            Template::AccessorHeader => accessor_header(),
            Template::AccessorSource => accessor_source()
        };
        entries.extend(specific);

        Self { entries }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Filter> {
        self.entries.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Filter names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Filter)> + '_ {
        self.entries.iter().map(|(name, filter)| (*name, *filter))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type Entries = Vec<(&'static str, Filter)>;

fn common() -> BTreeMap<&'static str, Filter> {
    BTreeMap::from([
        ("model_c_type", Filter::Model(ctypes::type_name)),
        ("model_pointer_type", Filter::Model(ctypes::pointer_type)),
        ("model_const_pointer_type", Filter::Model(ctypes::const_pointer_type)),
        ("model_list_c_type", Filter::Model(ctypes::list_type)),
        ("model_list_pointer_type", Filter::Model(ctypes::list_pointer_type)),
        (
            "model_list_const_pointer_type",
            Filter::Model(ctypes::list_const_pointer_type)
        ),
        ("model_free_function_name", Filter::Model(names::free_fn)),
        ("model_init_function_name", Filter::Model(names::init_fn)),
        ("model_list_free_function_name", Filter::Model(names::list_free_fn)),
        ("model_list_init_function_name", Filter::Model(names::list_init_fn)),
        (
            "field_type_declaration",
            Filter::Field(ctypes::field_type_declaration)
        ),
        (
            "field_name_declaration",
            Filter::Field(ctypes::field_name_declaration)
        ),
        (
            "field_column_type",
            Filter::Field(|field| field.field_type().column_type().to_owned())
        ),
        ("query_param_c_type", Filter::Param(ctypes::param_declaration))
    ])
}

fn types_header() -> Entries {
    vec![
        ("header_guard_macro", Filter::Dataset(names::types_header_guard)),
        ("header_name", Filter::Dataset(names::types_header_name)),
    ]
}

fn types_source() -> Entries {
    vec![("source_name", Filter::Dataset(names::types_source_name))]
}

fn crud_function_names() -> Entries {
    vec![
        (
            "database_delete_all_data_function_name",
            Filter::Dataset(names::database_delete_all_data_fn)
        ),
        (
            "database_initialize_function_name",
            Filter::Dataset(names::database_initialize_fn)
        ),
        ("model_delete_by_id_function_name", Filter::Model(names::delete_by_id_fn)),
        ("model_find_by_id_function_name", Filter::Model(names::find_by_id_fn)),
        ("model_insert_new_function_name", Filter::Model(names::insert_new_fn)),
        (
            "model_save_existing_function_name",
            Filter::Model(names::save_existing_fn)
        ),
        ("models_count_all_function_name", Filter::Model(names::count_all_fn)),
        ("models_delete_all_function_name", Filter::Model(names::delete_all_fn)),
        ("models_get_all_function_name", Filter::Model(names::get_all_fn)),
        (
            "models_insert_all_new_function_name",
            Filter::Model(names::insert_all_new_fn)
        ),
        (
            "models_save_all_existing_function_name",
            Filter::Model(names::save_all_existing_fn)
        ),
    ]
}

fn accessor_header() -> Entries {
    let mut entries = crud_function_names();
    entries.push(("header_guard_macro", Filter::Dataset(names::accessor_header_guard)));
    entries.push(("header_name", Filter::Dataset(names::accessor_header_name)));
    entries
}

fn accessor_source() -> Entries {
    let mut entries = crud_function_names();
    entries.extend([
        ("source_name", Filter::Dataset(names::accessor_source_name)),
        ("field_bind_function_call", Filter::FieldBind(access::field_bind)),
        ("field_column_enum", Filter::Column(names::column_enum)),
        (
            "field_read_result_function_call",
            Filter::FieldRead(access::field_read)
        ),
        (
            "model_add_to_result_list_function_name",
            Filter::Model(names::add_to_result_list_fn)
        ),
        (
            "model_from_row_result_function_name",
            Filter::Model(names::from_row_result_fn)
        ),
        ("table_create_query_var", Filter::Model(names::table_create_var)),
        ("query_param_bind_call", Filter::ParamBind(access::param_bind)),
        (
            "model_insert_query_string",
            Filter::Model(|model| sql::c_string_literal(&sql::insert_statement(model)))
        ),
        (
            "model_create_table_query_string",
            Filter::Model(|model| sql::c_string_literal(&sql::create_table_statement(model)))
        ),
        (
            "models_get_all_query_string",
            Filter::Model(|model| sql::c_string_literal(&sql::get_all_statement(model)))
        ),
        (
            "models_count_all_query_string",
            Filter::Model(|model| sql::c_string_literal(&sql::count_all_statement(model)))
        ),
        (
            "models_delete_all_query_string",
            Filter::Model(|model| sql::c_string_literal(&sql::delete_all_statement(model)))
        ),
        (
            "model_find_by_id_query_string",
            Filter::CheckedModel(|model| {
                sql::find_by_id_statement(model).map(|text| sql::c_string_literal(&text))
            })
        ),
        (
            "model_delete_by_id_query_string",
            Filter::CheckedModel(|model| {
                sql::delete_by_id_statement(model).map(|text| sql::c_string_literal(&text))
            })
        ),
        (
            "query_get_full_string",
            Filter::Query(|query, model| {
                sql::c_string_literal(&sql::query_statement(query, model))
            })
        ),
        (
            "select_query_get_count_query_string",
            Filter::Query(|query, model| {
                sql::c_string_literal(&sql::select_count_statement(query, model))
            })
        ),
    ]);
    entries
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
            ]
        )
    }

    #[test]
    fn header_templates_have_guards() {
        for template in [Template::TypesHeader, Template::AccessorHeader] {
            let filters = Filters::for_template(template);
            assert!(filters.contains("header_guard_macro"));
            assert!(filters.contains("header_name"));
            assert!(!filters.contains("source_name"));
        }
    }

    #[test]
    fn source_templates_have_source_name() {
        for template in [Template::TypesSource, Template::AccessorSource] {
            let filters = Filters::for_template(template);
            assert!(filters.contains("source_name"));
            assert!(!filters.contains("header_guard_macro"));
        }
    }

    #[test]
    fn binds_only_in_accessor_source() {
        for template in Template::ALL {
            let filters = Filters::for_template(template);
            assert_eq!(
                filters.contains("field_bind_function_call"),
                template == Template::AccessorSource
            );
        }
    }

    #[test]
    fn header_guard_differs_per_template() {
        let dataset = Dataset::new("shop", Vec::new());
        let guard = |template| match Filters::for_template(template).get("header_guard_macro") {
            Some(Filter::Dataset(filter)) => filter(&dataset),
            other => panic!("unexpected {other:?}")
        };
        assert_eq!(guard(Template::TypesHeader), "SHOP_CDAL_H");
        assert_eq!(guard(Template::AccessorHeader), "SHOP_CDAL_ACCESSOR_H");
    }

    #[test]
    fn sql_filters_quote_statements() {
        let filters = Filters::for_template(Template::AccessorSource);
        let Some(Filter::Model(insert)) = filters.get("model_insert_query_string") else {
            panic!("missing insert filter");
        };
        assert_eq!(
            insert(&user()),
            "\"INSERT OR REPLACE INTO User VALUES (?, ?);\""
        );

        let Some(Filter::CheckedModel(find)) = filters.get("model_find_by_id_query_string")
        else {
            panic!("missing find filter");
        };
        assert_eq!(
            find(&user()).unwrap(),
            "\"SELECT * FROM User WHERE id = ?;\""
        );
        assert!(find(&Model::new("Tag", Vec::new())).is_err());
    }

    #[test]
    fn bind_filter_matches_access() {
        let model = user();
        let filters = Filters::for_template(Template::AccessorSource);
        let Some(Filter::FieldBind(bind)) = filters.get("field_bind_function_call") else {
            panic!("missing bind filter");
        };
        assert_eq!(
            bind(&model.fields()[0], &model, "insert_query", "model"),
            access::field_bind(&model.fields()[0], &model, "insert_query", "model")
        );
    }

    #[test]
    fn names_are_sorted() {
        let filters = Filters::for_template(Template::TypesSource);
        let names: Vec<_> = filters.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(filters.len(), names.len());
        assert!(!filters.is_empty());
    }

    #[test]
    fn debug_shows_kind() {
        let filters = Filters::for_template(Template::TypesHeader);
        let filter = filters.get("model_c_type").unwrap();
        assert_eq!(format!("{filter:?}"), "Filter::Model");
    }
}
