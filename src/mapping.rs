// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming and mapping engine.
//!
//! Pure functions from IR values to the identifiers, C declarations, code
//! fragments and SQL text that generated files are assembled from.
//!
//! # Module Structure
//!
//! | Module | Produces |
//! |--------|----------|
//! | [`names`] | file names, guard macros, function names, column enums |
//! | [`ctypes`] | struct, pointer, list and member declarations |
//! | [`fragment`] | [`Call`]/[`Read`] values rendered as C text |
//! | [`access`] | bind and read fragments for fields and query params |
//! | [`sql`] | statement text and C string literals |
//! | [`filters`] | per-template lookup of all of the above by name |
//!
//! # Example
//!
//! ```rust
//! use cdal::{Field, FieldType, Model, mapping};
//!
//! let model = Model::new(
//!     "User",
//!     vec![
//!         Field::new("id", FieldType::PrimaryKey),
//!         Field::new("email", FieldType::Text),
//!     ]
//! );
//!
//! let bind = mapping::access::field_bind(&model.fields()[0], &model, "insert_query", "model");
//! assert_eq!(
//!     bind.to_string(),
//!     "sqlite3_bind_int64( insert_query, (USER_ID_COL + 1), model->id )"
//! );
//! assert_eq!(
//!     mapping::sql::insert_statement(&model),
//!     "INSERT OR REPLACE INTO User VALUES (?, ?);"
//! );
//! ```

pub mod access;
pub mod ctypes;
pub mod filters;
pub mod fragment;
pub mod names;
pub mod sql;

pub use self::{
    filters::{Filter, Filters},
    fragment::{Arg, Call, Read}
};
