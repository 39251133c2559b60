// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error taxonomy for dataset compilation.
//!
//! Every failure aborts compilation of the whole dataset. Errors carry
//! enough context (model, field or query, offending value) to locate the
//! faulty entry in the definition document.
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | [`Error::Json`] | loading definition text |
//! | [`SchemaError`] | structural validation |
//! | [`DefinitionError`] | field/query parsing, placeholder compilation |
//! | [`PrimaryKeyConstraintViolation`] | primary key lookup or eager check |

use std::fmt;

use thiserror::Error;

use crate::dataset::FieldType;

/// Result alias defaulting to the crate [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any error produced while compiling a dataset definition.
#[derive(Debug, Error)]
pub enum Error {
    /// Definition text is not JSON.
    #[error("dataset definition is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Document does not match the definition schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A field or query entry is invalid.
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// A model does not have exactly one primary key field.
    #[error(transparent)]
    PrimaryKey(#[from] PrimaryKeyConstraintViolation)
}

/// Structural validation failure.
///
/// `path` locates the first violation, e.g. `models[0].fields[2].type`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid dataset definition at `{path}`: {message}")]
pub struct SchemaError {
    /// Location of the offending value.
    pub path: String,

    /// Human-readable description of the violation.
    pub message: String
}

impl SchemaError {
    /// Create a schema error at `path`.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path:    path.into(),
            message: message.into()
        }
    }
}

/// What is wrong with a definition entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionErrorKind {
    /// Type string does not name a [`FieldType`].
    #[error("unknown field type `{0}`")]
    UnknownFieldType(String),

    /// `maxLength` given for a type other than `Text`/`Blob`.
    #[error("fields of type {0} cannot have a max length")]
    MaxLengthNotAllowed(FieldType),

    /// `maxLength` is zero or negative.
    #[error("invalid max length value: {0}")]
    InvalidMaxLength(i64),

    /// Query group key outside `select|find|count|delete|update`.
    #[error("unknown query type `{0}`")]
    UnknownQueryType(String)
}

/// Invalid field or query entry, with its location in the definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}{kind}")]
pub struct DefinitionError {
    kind:     DefinitionErrorKind,
    location: Location
}

impl DefinitionError {
    /// Create an error without location.
    #[must_use]
    pub fn new(kind: DefinitionErrorKind) -> Self {
        Self {
            kind,
            location: Location::default()
        }
    }

    /// Error kind.
    #[must_use]
    pub fn kind(&self) -> &DefinitionErrorKind {
        &self.kind
    }

    /// Where the error occurred.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Attach the owning model. An existing model is kept.
    #[must_use]
    pub fn in_model(mut self, model: &str) -> Self {
        self.location
            .model
            .get_or_insert_with(|| model.to_owned());
        self
    }

    /// Attach the entry within the model. An existing entry is kept.
    #[must_use]
    pub fn at(mut self, entry: Entry) -> Self {
        self.location.entry.get_or_insert(entry);
        self
    }
}

impl From<DefinitionErrorKind> for DefinitionError {
    fn from(kind: DefinitionErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Position of an entry in the definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Name of the model containing the entry.
    pub model: Option<String>,

    /// The entry itself.
    pub entry: Option<Entry>
}

/// A named entry inside a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Field, by name.
    Field(String),

    /// Query, by name.
    Query(String),

    /// Query group, by key.
    QueryGroup(String)
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "field `{name}`"),
            Self::Query(name) => write!(f, "query `{name}`"),
            Self::QueryGroup(key) => write!(f, "query group `{key}`")
        }
    }
}

/// Renders as a prefix: `model `User`, field `bio`: ` or nothing.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.model, &self.entry) {
            (Some(model), Some(entry)) => write!(f, "model `{model}`, {entry}: "),
            (Some(model), None) => write!(f, "model `{model}`: "),
            (None, Some(entry)) => write!(f, "{entry}: "),
            (None, None) => Ok(())
        }
    }
}

/// A model has zero or several `PrimaryKey` fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("model `{model}` must have exactly one PrimaryKey field, found {found}")]
pub struct PrimaryKeyConstraintViolation {
    /// Model name.
    pub model: String,

    /// Number of `PrimaryKey` fields found.
    pub found: usize
}
