// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! C declarations for models, fields and query parameters.
//!
//! | Function | Example |
//! |----------|---------|
//! | [`type_name`] | `User` |
//! | [`pointer_type`] | `User*` |
//! | [`const_pointer_type`] | `User const *` |
//! | [`list_type`] | `User_list_t` |
//! | [`list_pointer_type`] | `User_list_t*` |
//! | [`list_const_pointer_type`] | `User_list_t const *` |
//! | [`field_type_declaration`] | `sqlite3_int64`, `char*`, `char` |
//! | [`field_name_declaration`] | `id`, `bio[ 256 ]` |
//! | [`param_declaration`] | `int`, `char const *` |
//!
//! The struct type follows `typeName`; the list type always follows the
//! model name.

use crate::dataset::{Allocation, Field, Model, QueryParam};

/// Struct name of the model.
#[must_use]
pub fn type_name(model: &Model) -> String {
    model.type_name().to_owned()
}

#[must_use]
pub fn pointer_type(model: &Model) -> String {
    format!("{}*", model.type_name())
}

#[must_use]
pub fn const_pointer_type(model: &Model) -> String {
    format!("{} const *", model.type_name())
}

/// Struct holding a list of models.
#[must_use]
pub fn list_type(model: &Model) -> String {
    format!("{}_list_t", model.name())
}

#[must_use]
pub fn list_pointer_type(model: &Model) -> String {
    format!("{}*", list_type(model))
}

#[must_use]
pub fn list_const_pointer_type(model: &Model) -> String {
    format!("{} const *", list_type(model))
}

/// Type part of a struct member declaration.
///
/// Dynamic fields are owned heap pointers (`char*`); fixed-size fields use
/// the element type and carry their length in the name declaration.
#[must_use]
pub fn field_type_declaration(field: &Field) -> String {
    let physical = field.field_type().physical_type();
    match field.allocation() {
        Allocation::Dynamic => format!("{physical}*"),
        Allocation::Primitive | Allocation::Fixed => physical.to_owned()
    }
}

/// Name part of a struct member declaration, `name[ N ]` for fixed-size
/// fields.
#[must_use]
pub fn field_name_declaration(field: &Field) -> String {
    if field.is_fixed_size() {
        format!("{}[ {} ]", field.name(), field.max_length())
    } else {
        field.name().to_owned()
    }
}

/// C type of a query function argument.
#[must_use]
pub fn param_declaration(param: &QueryParam) -> String {
    let param_type = param.param_type();
    if param_type.is_primitive() {
        param_type.physical_type().to_owned()
    } else {
        format!("{} const *", param_type.physical_type())
    }
}
