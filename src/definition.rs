// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dataset definition loading.
//!
//! A definition goes through three stages:
//!
//! 1. JSON text → [`serde_json::Value`]
//! 2. [`validate`] → [`RawDataset`] (shape only)
//! 3. [`parse`] → [`Dataset`] (types resolved, queries compiled)
//!
//! No IR is built from a document that fails stage 2.
//!
//! # Module Structure
//!
//! - [`raw`] - typed mirror of the JSON document
//! - [`validate`](mod@validate) - structural schema check
//! - [`parse`](mod@parse) - IR construction

pub mod parse;
pub mod raw;
pub mod validate;

use std::io::Read;

use serde_json::Value;

pub use self::{
    parse::parse,
    raw::{RawDataset, RawField, RawModel, RawQuery},
    validate::validate
};
use crate::{config::CompileOptions, dataset::Dataset, error::Result};

/// Load and validate a definition from JSON text.
///
/// # Errors
///
/// [`crate::Error::Json`] for malformed JSON, [`crate::Error::Schema`] for
/// a document that does not match the schema.
pub fn from_str(text: &str) -> Result<RawDataset> {
    let document: Value = serde_json::from_str(text)?;
    Ok(validate(&document)?)
}

/// Load and validate a definition from a reader.
///
/// # Errors
///
/// Same as [`from_str`]; I/O failures surface as [`crate::Error::Json`].
pub fn from_reader(reader: impl Read) -> Result<RawDataset> {
    let document: Value = serde_json::from_reader(reader)?;
    Ok(validate(&document)?)
}

/// Validate and parse an already decoded document.
///
/// # Errors
///
/// Any validation or parsing error.
pub fn compile(document: &Value, options: &CompileOptions) -> Result<Dataset> {
    parse(validate(document)?, options)
}

/// Run the whole pipeline on JSON text.
///
/// # Errors
///
/// Any loading, validation or parsing error.
///
/// # Examples
///
/// ```rust
/// use cdal::{CompileOptions, definition};
///
/// let dataset = definition::compile_str(
///     r#"{
///         "datasetName": "blog",
///         "models": [{
///             "name": "Post",
///             "fields": [
///                 { "name": "id", "type": "PrimaryKey" },
///                 { "name": "title", "type": "Text", "maxLength": 120 }
///             ]
///         }]
///     }"#,
///     &CompileOptions::default()
/// )
/// .unwrap();
///
/// assert_eq!(dataset.name(), "blog");
/// assert!(dataset.models()[0].fields()[1].is_fixed_size());
/// ```
pub fn compile_str(text: &str, options: &CompileOptions) -> Result<Dataset> {
    parse(from_str(text)?, options)
}
