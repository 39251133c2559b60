// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query micro-language compiler.
//!
//! Custom queries embed typed placeholders in SQL fragments:
//!
//! ```text
//! WHERE id = {model_id:PrimaryKey} AND name = {name:Text}
//! ```
//!
//! Compilation turns each placeholder into a positional `?` marker and
//! records a [`QueryParam`] for it:
//!
//! ```text
//! WHERE id = ? AND name = ?
//! params: [1: model_id PrimaryKey, 2: name Text]
//! ```
//!
//! Tokenizing, numbering and substitution are separate steps; see
//! [`tokenize`], [`number_params`] and [`substitute`].

mod token;

use tracing::trace;

pub use self::token::{Token, tokenize};
use crate::{
    dataset::{Query, QueryParam, QueryType},
    error::DefinitionError
};

/// Marker replacing every placeholder.
pub const POSITIONAL_MARKER: &str = "?";

/// Compile a raw query string into a [`Query`].
///
/// # Errors
///
/// [`crate::error::DefinitionErrorKind::UnknownFieldType`] if a placeholder
/// type does not name a field type.
///
/// # Examples
///
/// ```rust
/// use cdal::{FieldType, QueryType, dsl::compile_query};
///
/// let query = compile_query(
///     QueryType::Find,
///     "user_find_by_email",
///     "WHERE email = {email:Text}"
/// )
/// .unwrap();
///
/// assert_eq!(query.query_string(), "WHERE email = ?");
/// assert_eq!(query.params()[0].position(), 1);
/// assert_eq!(query.params()[0].param_type(), FieldType::Text);
/// ```
pub fn compile_query(
    query_type: QueryType,
    name: &str,
    raw_query: &str
) -> Result<Query, DefinitionError> {
    let tokens = tokenize(raw_query);
    let params = number_params(&tokens)?;
    let query_string = substitute(&tokens);

    trace!(query = name, %query_type, params = params.len(), "compiled query");

    Ok(Query::new(query_type, name, query_string, params))
}

/// Number placeholders by order of occurrence, starting at 1.
///
/// # Errors
///
/// Fails on the first placeholder whose type name is unknown.
pub fn number_params(tokens: &[Token<'_>]) -> Result<Vec<QueryParam>, DefinitionError> {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Placeholder { name, type_name } => Some((*name, *type_name)),
            Token::Literal(_) => None
        })
        .enumerate()
        .map(|(index, (name, type_name))| {
            type_name
                .parse()
                .map(|param_type| QueryParam::new(index + 1, name, param_type))
        })
        .collect()
}

/// Rebuild the query text with every placeholder replaced by `?`.
#[must_use]
pub fn substitute(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| match token {
            Token::Literal(text) => *text,
            Token::Placeholder { .. } => POSITIONAL_MARKER
        })
        .collect()
}
