// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bind and read fragments.
//!
//! # Parameter Indexing
//!
//! Column enums are 0-based, SQLite bind slots are 1-based. Model field
//! binds therefore use `(COLUMN + 1)`, while query parameter binds use the
//! parameter position as is, since positions are already 1-based.
//!
//! ```text
//! sqlite3_bind_int64( insert_query, (USER_ID_COL + 1), model->id )
//! sqlite3_bind_int64( find_query, 3, owner )
//! ```

use super::{
    fragment::{Arg, Call, Read},
    names
};
use crate::dataset::{Allocation, Field, FieldType, Model, QueryParam};

/// Offset from a 0-based column enum to a 1-based bind slot.
const BIND_SLOT_OFFSET: usize = 1;

/// Bind a model field into its column slot.
///
/// Primitive values are passed by value; `Text`/`Blob` values are passed
/// with a `-1` length and `SQLITE_TRANSIENT`.
#[must_use]
pub fn field_bind(field: &Field, model: &Model, query_var: &str, model_var: &str) -> Call {
    let mut args = vec![
        Arg::Var(query_var.to_owned()),
        Arg::Column {
            ident:  names::column_enum(field, model),
            offset: BIND_SLOT_OFFSET
        },
        Arg::member(model_var, field.name()),
    ];
    push_length_args(&mut args, field.field_type());

    Call::new(field.field_type().bind_operation(), args)
}

/// Bind a query argument into its parameter slot.
#[must_use]
pub fn param_bind(param: &QueryParam, query_var: &str) -> Call {
    let mut args = vec![
        Arg::Var(query_var.to_owned()),
        Arg::Position(param.position()),
        Arg::Var(param.name().to_owned()),
    ];
    push_length_args(&mut args, param.param_type());

    Call::new(param.param_type().bind_operation(), args)
}

/// Read a model field from the current result row.
///
/// | Allocation | Fragment |
/// |------------|----------|
/// | primitive | `model->f = read( query, COL );` |
/// | dynamic | `success &= ( CQLITE_SUCCESS == read( query, COL, &model->f ) );` |
/// | fixed | `success &= ( CQLITE_SUCCESS == read( query, COL, model->f, sizeof( model->f ) ) );` |
#[must_use]
pub fn field_read(
    field: &Field,
    model: &Model,
    query_var: &str,
    model_var: &str,
    success_var: &str
) -> Read {
    let allocation = field.allocation();
    let operation = field.field_type().read_operation(allocation);
    let mut args = vec![
        Arg::Var(query_var.to_owned()),
        Arg::Column {
            ident:  names::column_enum(field, model),
            offset: 0
        },
    ];

    match allocation {
        Allocation::Primitive => Read::Assign {
            target: Arg::member(model_var, field.name()),
            call:   Call::new(operation, args)
        },
        Allocation::Dynamic => {
            args.push(Arg::MemberAddress {
                var:   model_var.to_owned(),
                field: field.name().to_owned()
            });
            Read::Accumulate {
                success_var: success_var.to_owned(),
                call:        Call::new(operation, args)
            }
        }
        Allocation::Fixed => {
            args.push(Arg::member(model_var, field.name()));
            args.push(Arg::SizeOf {
                var:   model_var.to_owned(),
                field: field.name().to_owned()
            });
            Read::Accumulate {
                success_var: success_var.to_owned(),
                call:        Call::new(operation, args)
            }
        }
    }
}

fn push_length_args(args: &mut Vec<Arg>, field_type: FieldType) {
    if !field_type.is_primitive() {
        args.push(Arg::LengthSentinel);
        args.push(Arg::Transient);
    }
}
