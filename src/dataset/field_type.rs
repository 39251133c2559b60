// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field type catalog.
//!
//! This module defines [`FieldType`], the closed set of column types a model
//! field can have, together with every static mapping the generators need:
//! the C representation, the SQLite column type, and the SQLite bind/read
//! operations.
//!
//! # Mappings
//!
//! | Type | C type | Column | Bind | Read |
//! |------|--------|--------|------|------|
//! | `PrimaryKey` | `sqlite3_int64` | `INTEGER PRIMARY KEY` | `sqlite3_bind_int64` | `sqlite3_column_int64` |
//! | `ForeignKey` | `sqlite3_int64` | `INTEGER` | `sqlite3_bind_int64` | `sqlite3_column_int64` |
//! | `Integer` | `int` | `INTEGER` | `sqlite3_bind_int` | `sqlite3_column_int` |
//! | `Real` | `double` | `REAL` | `sqlite3_bind_double` | `sqlite3_column_double` |
//! | `Text` | `char` | `TEXT` | `sqlite3_bind_text` | dynamic / fixed-length string read |
//! | `Blob` | `char` | `BLOB` | `sqlite3_bind_blob` | dynamic / fixed-length blob read |
//!
//! Every mapping is an exhaustive `match`; adding a variant does not compile
//! until each table above is extended.

use std::{fmt, str::FromStr};

use crate::error::{DefinitionError, DefinitionErrorKind};

/// Column type of a model field.
///
/// The string value of each variant (used in dataset definitions and in
/// query placeholders) is the variant name itself, e.g. `"PrimaryKey"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Row identifier, stored as `INTEGER PRIMARY KEY`.
    PrimaryKey,

    /// Reference to another table's primary key.
    ForeignKey,

    /// 32-bit signed integer.
    Integer,

    /// Double precision float.
    Real,

    /// Character data, unbounded or with a fixed maximum length.
    Text,

    /// Binary data, unbounded or with a fixed maximum length.
    Blob
}

/// How the memory for a field value is managed in the generated struct.
///
/// Every field falls into exactly one class:
///
/// - [`Allocation::Primitive`] - primitive types, stored by value
/// - [`Allocation::Dynamic`] - `Text`/`Blob` without a max length, heap
///   allocated and owned by the struct
/// - [`Allocation::Fixed`] - `Text`/`Blob` with a max length, stored in an
///   inline array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Allocation {
    /// Value stored directly in the struct.
    Primitive,

    /// Pointer to heap memory owned by the struct.
    Dynamic,

    /// Inline array of `max_length` bytes.
    Fixed
}

impl FieldType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::PrimaryKey,
        Self::ForeignKey,
        Self::Integer,
        Self::Real,
        Self::Text,
        Self::Blob
    ];

    /// String value used in dataset definitions and placeholders.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrimaryKey => "PrimaryKey",
            Self::ForeignKey => "ForeignKey",
            Self::Integer => "Integer",
            Self::Real => "Real",
            Self::Text => "Text",
            Self::Blob => "Blob"
        }
    }

    /// C type used to hold a value of this type.
    ///
    /// For `Text` and `Blob` this is the element type; dynamic fields
    /// become `char*` and fixed-size fields `char name[ N ]`.
    #[must_use]
    pub const fn physical_type(self) -> &'static str {
        match self {
            Self::PrimaryKey | Self::ForeignKey => "sqlite3_int64",
            Self::Integer => "int",
            Self::Real => "double",
            Self::Text | Self::Blob => "char"
        }
    }

    /// SQLite column type used in `CREATE TABLE`.
    #[must_use]
    pub const fn column_type(self) -> &'static str {
        match self {
            Self::PrimaryKey => "INTEGER PRIMARY KEY",
            Self::ForeignKey | Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
            Self::Blob => "BLOB"
        }
    }

    /// SQLite function binding a value of this type to a statement slot.
    #[must_use]
    pub const fn bind_operation(self) -> &'static str {
        match self {
            Self::PrimaryKey | Self::ForeignKey => "sqlite3_bind_int64",
            Self::Integer => "sqlite3_bind_int",
            Self::Real => "sqlite3_bind_double",
            Self::Text => "sqlite3_bind_text",
            Self::Blob => "sqlite3_bind_blob"
        }
    }

    /// Function reading a value of this type out of a result row.
    ///
    /// Primitive types ignore `allocation`. `Text` and `Blob` are never
    /// primitive, so any allocation other than [`Allocation::Fixed`] selects
    /// the dynamic reader.
    #[must_use]
    pub const fn read_operation(self, allocation: Allocation) -> &'static str {
        match (self, allocation) {
            (Self::PrimaryKey | Self::ForeignKey, _) => "sqlite3_column_int64",
            (Self::Integer, _) => "sqlite3_column_int",
            (Self::Real, _) => "sqlite3_column_double",
            (Self::Text, Allocation::Fixed) => "cqlite_fixed_length_string_read",
            (Self::Text, Allocation::Primitive | Allocation::Dynamic) => {
                "cqlite_dynamic_string_read"
            }
            (Self::Blob, Allocation::Fixed) => "cqlite_fixed_length_blob_read",
            (Self::Blob, Allocation::Primitive | Allocation::Dynamic) => {
                "cqlite_dynamic_blob_read"
            }
        }
    }

    /// Check if values of this type are stored by value.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        match self {
            Self::PrimaryKey | Self::ForeignKey | Self::Integer | Self::Real => true,
            Self::Text | Self::Blob => false
        }
    }

    /// Check if a field of this type may declare `maxLength`.
    #[must_use]
    pub const fn can_have_max_length(self) -> bool {
        !self.is_primitive()
    }

    /// Classify a field of this type with the given max length.
    ///
    /// A `max_length` of 0 means unbounded.
    #[must_use]
    pub const fn allocation(self, max_length: u64) -> Allocation {
        if self.is_primitive() {
            Allocation::Primitive
        } else if max_length == 0 {
            Allocation::Dynamic
        } else {
            Allocation::Fixed
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = DefinitionError;

    /// Resolve a type name by exact, case-sensitive match.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field_type| field_type.as_str() == value)
            .ok_or_else(|| {
                DefinitionError::new(DefinitionErrorKind::UnknownFieldType(value.to_owned()))
            })
    }
}
