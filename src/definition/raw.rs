// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed view of a validated definition document.
//!
//! These structs mirror the JSON document one to one. Strings are not yet
//! resolved to field or query types; that is the parser's job.

use indexmap::IndexMap;
use serde::Deserialize;

/// Root of a dataset definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    pub dataset_name: String,
    pub models:       Vec<RawModel>
}

/// Model entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModel {
    pub name:       String,
    #[serde(default)]
    pub type_name:  Option<String>,
    #[serde(default)]
    pub table_name: Option<String>,
    pub fields:     Vec<RawField>,

    /// Query groups keyed by query type, in document order.
    #[serde(default)]
    pub queries: IndexMap<String, Vec<RawQuery>>
}

/// Field entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    pub name:       String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub max_length: Option<i64>
}

/// Query entry inside a query group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawQuery {
    pub name:  String,
    pub query: String
}
