// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Definition parsing.
//!
//! Turns a validated [`RawDataset`] into the [`Dataset`] IR. For each model,
//! fields are parsed first (declaration order kept), then the primary key
//! rule is checked when [`PrimaryKeyCheck::Eager`] is selected, then query
//! groups are compiled in document order.
//!
//! # Errors
//!
//! | Entry | Error |
//! |-------|-------|
//! | field `type` not a [`FieldType`] name | `UnknownFieldType` |
//! | `maxLength` on a primitive type | `MaxLengthNotAllowed` |
//! | `maxLength <= 0` | `InvalidMaxLength` |
//! | query group key | `UnknownQueryType` |
//! | placeholder type | `UnknownFieldType` |
//! | primary key count != 1 (eager) | `PrimaryKeyConstraintViolation` |
//!
//! The first error aborts the whole dataset.

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::raw::{RawDataset, RawField, RawModel, RawQuery};
use crate::{
    config::{CompileOptions, PrimaryKeyCheck},
    dataset::{Dataset, Field, FieldType, Model, Query, QueryType},
    dsl,
    error::{DefinitionError, Entry, PrimaryKeyConstraintViolation, Result}
};

/// Parse a validated definition into a [`Dataset`].
///
/// # Errors
///
/// See the module documentation.
pub fn parse(raw: RawDataset, options: &CompileOptions) -> Result<Dataset> {
    let models = raw
        .models
        .into_iter()
        .map(|model| parse_model(model, options))
        .collect::<Result<Vec<_>>>()?;

    debug!(dataset = %raw.dataset_name, models = models.len(), "parsed dataset definition");

    Ok(Dataset::new(raw.dataset_name, models))
}

fn parse_model(raw: RawModel, options: &CompileOptions) -> Result<Model> {
    let RawModel {
        name,
        type_name,
        table_name,
        fields,
        queries
    } = raw;

    let fields = fields
        .into_iter()
        .map(parse_field)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| err.in_model(&name))?;

    if options.primary_key_check == PrimaryKeyCheck::Eager {
        let found = fields.iter().filter(|f| f.is_primary_key()).count();
        if found != 1 {
            return Err(PrimaryKeyConstraintViolation { model: name, found }.into());
        }
    }

    let queries = parse_queries(queries).map_err(|err| err.in_model(&name))?;

    debug!(
        model = %name,
        fields = fields.len(),
        queries = queries.len(),
        "parsed model"
    );

    let mut model = Model::new(name, fields).with_queries(queries);
    if let Some(type_name) = type_name {
        model = model.with_type_name(type_name);
    }
    if let Some(table_name) = table_name {
        model = model.with_table_name(table_name);
    }

    Ok(model)
}

fn parse_field(raw: RawField) -> Result<Field, DefinitionError> {
    let RawField {
        name,
        field_type,
        max_length
    } = raw;

    let field_type = field_type
        .parse::<FieldType>()
        .map_err(|err| err.at(Entry::Field(name.clone())))?;

    trace!(field = %name, %field_type, ?max_length, "parsed field");

    match max_length {
        None => Ok(Field::new(name, field_type)),
        Some(max_length) => Field::with_max_length(name.as_str(), field_type, max_length)
            .map_err(|err| err.at(Entry::Field(name)))
    }
}

fn parse_queries(groups: IndexMap<String, Vec<RawQuery>>) -> Result<Vec<Query>, DefinitionError> {
    let mut queries = Vec::new();

    for (key, entries) in groups {
        let query_type =
            QueryType::from_key(&key).map_err(|err| err.at(Entry::QueryGroup(key.clone())))?;

        for entry in entries {
            let query = dsl::compile_query(query_type, &entry.name, &entry.query)
                .map_err(|err| err.at(Entry::Query(entry.name.clone())))?;
            queries.push(query);
        }
    }

    Ok(queries)
}
