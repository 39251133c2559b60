// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Custom model queries.
//!
//! A [`Query`] is a user-authored data-access operation beyond the default
//! CRUD set. Its `query_string` is an SQL fragment (usually a `WHERE`
//! clause) with every placeholder already replaced by `?`; the statement
//! around it is chosen by [`QueryType`].

use std::fmt;

use super::field_type::FieldType;
use crate::error::{DefinitionError, DefinitionErrorKind};

/// Kind of custom query, selecting the statement wrapper.
///
/// | Type | Key | Statement |
/// |------|-----|-----------|
/// | `Select` | `select` | `SELECT * FROM <table> <fragment>` |
/// | `Find` | `find` | `SELECT * FROM <table> <fragment> LIMIT 1` |
/// | `Count` | `count` | `SELECT COUNT(*) FROM <table> <fragment>` |
/// | `Delete` | `delete` | `DELETE FROM <table> <fragment>` |
/// | `Update` | `update` | `UPDATE <table> <fragment>` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    Select,
    Find,
    Count,
    Delete,
    Update
}

impl QueryType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Select,
        Self::Find,
        Self::Count,
        Self::Delete,
        Self::Update
    ];

    /// Key of the query group in the definition document.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Find => "find",
            Self::Count => "count",
            Self::Delete => "delete",
            Self::Update => "update"
        }
    }

    /// Resolve a query group key.
    ///
    /// # Errors
    ///
    /// [`DefinitionErrorKind::UnknownQueryType`] for any other key.
    pub fn from_key(key: &str) -> Result<Self, DefinitionError> {
        Self::ALL
            .into_iter()
            .find(|query_type| query_type.key() == key)
            .ok_or_else(|| DefinitionErrorKind::UnknownQueryType(key.to_owned()).into())
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Positional parameter of a compiled query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    position:   usize,
    name:       String,
    param_type: FieldType
}

impl QueryParam {
    #[must_use]
    pub fn new(position: usize, name: impl Into<String>, param_type: FieldType) -> Self {
        Self {
            position,
            name: name.into(),
            param_type
        }
    }

    /// 1-based slot, in order of first appearance in the query.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Placeholder identifier. Only used to name the generated argument.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn param_type(&self) -> FieldType {
        self.param_type
    }
}

/// A compiled custom query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    query_type:   QueryType,
    name:         String,
    query_string: String,
    params:       Vec<QueryParam>
}

impl Query {
    #[must_use]
    pub fn new(
        query_type: QueryType,
        name: impl Into<String>,
        query_string: impl Into<String>,
        params: Vec<QueryParam>
    ) -> Self {
        Self {
            query_type,
            name: name.into(),
            query_string: query_string.into(),
            params
        }
    }

    #[must_use]
    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    /// Query name, also the name of the generated accessor function.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// SQL fragment with `?` markers.
    #[must_use]
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Parameters ordered by position.
    #[must_use]
    pub fn params(&self) -> &[QueryParam] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_resolve() {
        for query_type in QueryType::ALL {
            assert_eq!(QueryType::from_key(query_type.key()).unwrap(), query_type);
        }
    }

    #[test]
    fn unknown_key() {
        let err = QueryType::from_key("upsert").unwrap_err();
        assert_eq!(
            err.kind(),
            &DefinitionErrorKind::UnknownQueryType("upsert".to_owned())
        );
    }

    #[test]
    fn keys_are_lowercase_only() {
        assert!(QueryType::from_key("Select").is_err());
    }
}
