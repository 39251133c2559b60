// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Derived identifiers.
//!
//! Every generated file name, guard macro, function name and column enum
//! comes from one of the fixed templates below. CRUD accessor names use the
//! model's table name; struct helpers and row readers use the model name.
//!
//! | Function | Template |
//! |----------|----------|
//! | [`types_header_guard`] | `<NAME>_CDAL_H` |
//! | [`types_header_name`] | `<name>.cdal.h` |
//! | [`types_source_name`] | `<name>.cdal.c` |
//! | [`accessor_header_guard`] | `<NAME>_CDAL_ACCESSOR_H` |
//! | [`accessor_header_name`] | `<name>.cdal.accessor.h` |
//! | [`accessor_source_name`] | `<name>.cdal.accessor.c` |
//! | [`database_initialize_fn`] | `<name>_database_initialize` |
//! | [`database_delete_all_data_fn`] | `<name>_database_delete_all_data` |
//! | [`insert_new_fn`] | `<table>_insert_new` |
//! | [`find_by_id_fn`] | `<table>_find_by_id` |
//! | [`delete_by_id_fn`] | `<table>_delete_by_id` |
//! | [`save_existing_fn`] | `<table>_save_existing` |
//! | [`get_all_fn`] | `<table>_get_all` |
//! | [`count_all_fn`] | `<table>_count_all` |
//! | [`delete_all_fn`] | `<table>_delete_all` |
//! | [`insert_all_new_fn`] | `<table>_insert_all_new` |
//! | [`save_all_existing_fn`] | `<table>_save_all_existing` |
//! | [`add_to_result_list_fn`] | `<model>_add_to_result_list` |
//! | [`from_row_result_fn`] | `<model>_from_row_result` |
//! | [`free_fn`] / [`init_fn`] | `<model>_free` / `<model>_init` |
//! | [`list_free_fn`] / [`list_init_fn`] | `<model>_list_free` / `<model>_list_init` |
//! | [`table_create_var`] | `<TABLE>_TABLE_CREATE` |
//! | [`column_enum`] | `<TABLE>_<FIELD>_COL` |

use crate::dataset::{Dataset, Field, Model};

/// Include guard of the types header.
#[must_use]
pub fn types_header_guard(dataset: &Dataset) -> String {
    format!("{}_CDAL_H", dataset.name().to_uppercase())
}

/// File name of the types header.
#[must_use]
pub fn types_header_name(dataset: &Dataset) -> String {
    format!("{}.cdal.h", dataset.name())
}

/// File name of the types source.
#[must_use]
pub fn types_source_name(dataset: &Dataset) -> String {
    format!("{}.cdal.c", dataset.name())
}

/// Include guard of the accessor header.
#[must_use]
pub fn accessor_header_guard(dataset: &Dataset) -> String {
    format!("{}_CDAL_ACCESSOR_H", dataset.name().to_uppercase())
}

/// File name of the accessor header.
#[must_use]
pub fn accessor_header_name(dataset: &Dataset) -> String {
    format!("{}.cdal.accessor.h", dataset.name())
}

/// File name of the accessor source.
#[must_use]
pub fn accessor_source_name(dataset: &Dataset) -> String {
    format!("{}.cdal.accessor.c", dataset.name())
}

/// Quoted include target for a generated header: `"shop.cdal.h"`.
#[must_use]
pub fn header_include(header_name: &str) -> String {
    format!("\"{header_name}\"")
}

/// Function creating every table of the dataset.
#[must_use]
pub fn database_initialize_fn(dataset: &Dataset) -> String {
    format!("{}_database_initialize", dataset.name())
}

/// Function emptying every table of the dataset.
#[must_use]
pub fn database_delete_all_data_fn(dataset: &Dataset) -> String {
    format!("{}_database_delete_all_data", dataset.name())
}

/// Insert of one new row.
#[must_use]
pub fn insert_new_fn(model: &Model) -> String {
    format!("{}_insert_new", model.table_name())
}

/// Lookup of one row by primary key.
#[must_use]
pub fn find_by_id_fn(model: &Model) -> String {
    format!("{}_find_by_id", model.table_name())
}

/// Delete of one row by primary key.
#[must_use]
pub fn delete_by_id_fn(model: &Model) -> String {
    format!("{}_delete_by_id", model.table_name())
}

/// Update of one existing row.
#[must_use]
pub fn save_existing_fn(model: &Model) -> String {
    format!("{}_save_existing", model.table_name())
}

/// Read of every row into a list.
#[must_use]
pub fn get_all_fn(model: &Model) -> String {
    format!("{}_get_all", model.table_name())
}

/// Row count of the table.
#[must_use]
pub fn count_all_fn(model: &Model) -> String {
    format!("{}_count_all", model.table_name())
}

/// Delete of every row.
#[must_use]
pub fn delete_all_fn(model: &Model) -> String {
    format!("{}_delete_all", model.table_name())
}

/// Insert of every list element as a new row.
#[must_use]
pub fn insert_all_new_fn(model: &Model) -> String {
    format!("{}_insert_all_new", model.table_name())
}

/// Update of every list element.
#[must_use]
pub fn save_all_existing_fn(model: &Model) -> String {
    format!("{}_save_all_existing", model.table_name())
}

/// Row callback appending a model to a result list.
#[must_use]
pub fn add_to_result_list_fn(model: &Model) -> String {
    format!("{}_add_to_result_list", model.name())
}

/// Row callback reading a single model.
#[must_use]
pub fn from_row_result_fn(model: &Model) -> String {
    format!("{}_from_row_result", model.name())
}

/// Releases the heap fields of one struct.
#[must_use]
pub fn free_fn(model: &Model) -> String {
    format!("{}_free", model.name())
}

/// Zeroes one struct.
#[must_use]
pub fn init_fn(model: &Model) -> String {
    format!("{}_init", model.name())
}

/// Releases a list and its elements.
#[must_use]
pub fn list_free_fn(model: &Model) -> String {
    format!("{}_list_free", model.name())
}

/// Zeroes a list.
#[must_use]
pub fn list_init_fn(model: &Model) -> String {
    format!("{}_list_init", model.name())
}

/// Constant holding the `CREATE TABLE` statement.
#[must_use]
pub fn table_create_var(model: &Model) -> String {
    format!("{}_TABLE_CREATE", model.table_name().to_uppercase())
}

/// Column enum constant. Its value is the 0-based column index.
#[must_use]
pub fn column_enum(field: &Field, model: &Model) -> String {
    format!(
        "{}_{}_COL",
        model.table_name().to_uppercase(),
        field.name().to_uppercase()
    )
}
