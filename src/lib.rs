// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # cdal
//!
//! Dataset definition compiler for SQLite-backed C data access layers.
//!
//! A JSON document describes a dataset: named models, their typed fields
//! and optional custom queries. The crate validates it, builds an immutable
//! IR, and provides the naming and mapping functions from which C types
//! and accessor functions are rendered.
//!
//! ## Quick Start
//!
//! ```rust
//! use cdal::{CompileOptions, FieldType, QueryType, compile_str};
//!
//! let dataset = compile_str(
//!     r#"{
//!         "datasetName": "shop",
//!         "models": [{
//!             "name": "Item",
//!             "tableName": "items",
//!             "fields": [
//!                 { "name": "id", "type": "PrimaryKey" },
//!                 { "name": "label", "type": "Text", "maxLength": 64 },
//!                 { "name": "price", "type": "Real" }
//!             ],
//!             "queries": {
//!                 "select": [
//!                     { "name": "items_cheaper_than", "query": "WHERE price < {limit:Real}" }
//!                 ]
//!             }
//!         }]
//!     }"#,
//!     &CompileOptions::default()
//! )
//! .unwrap();
//!
//! let item = dataset.model("Item").unwrap();
//! assert_eq!(item.fields()[0].field_type(), FieldType::PrimaryKey);
//!
//! let query = &item.queries()[0];
//! assert_eq!(query.query_type(), QueryType::Select);
//! assert_eq!(query.query_string(), "WHERE price < ?");
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! JSON ──► definition::validate ──► definition::parse ──► Dataset
//!                                         │
//!                                         └─► dsl::compile_query (per query)
//!
//! Dataset ──► mapping::* (names, C types, binds, reads, SQL)
//!         ──► generate::generate ──► Renderer ──► GeneratedFile × 4
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`dataset`] | IR and field type catalog |
//! | [`definition`] | loading, schema validation, parsing |
//! | [`dsl`] | placeholder query compiler |
//! | [`mapping`] | naming and mapping engine, filter registry |
//! | [`generate`] | artifact list and rendering driver |
//! | [`config`] | compile options |
//! | [`error`] | error taxonomy |

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]

pub mod config;
pub mod dataset;
pub mod definition;
pub mod dsl;
pub mod error;
pub mod generate;
pub mod mapping;
mod utils;

pub use self::{
    config::{CompileOptions, PrimaryKeyCheck},
    dataset::{Allocation, Dataset, Field, FieldType, Model, Query, QueryParam, QueryType},
    definition::compile_str,
    error::{Error, Result}
};
