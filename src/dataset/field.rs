// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model fields.

use super::field_type::{Allocation, FieldType};
use crate::error::{DefinitionError, DefinitionErrorKind};

/// One attribute of a model, mapped to one table column.
///
/// Fields keep declaration order inside their model; that order is also the
/// column order and the struct layout order.
///
/// # Allocation
///
/// | Type | `max_length` | Class |
/// |------|--------------|-------|
/// | primitive | ignored | [`Allocation::Primitive`] |
/// | `Text`/`Blob` | 0 | [`Allocation::Dynamic`] |
/// | `Text`/`Blob` | > 0 | [`Allocation::Fixed`] |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name:       String,
    field_type: FieldType,
    max_length: u64
}

impl Field {
    /// Create an unbounded field.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            max_length: 0
        }
    }

    /// Create a field with an explicit maximum length.
    ///
    /// # Errors
    ///
    /// - [`DefinitionErrorKind::MaxLengthNotAllowed`] if `field_type` is not
    ///   `Text` or `Blob` (checked first, whatever the value)
    /// - [`DefinitionErrorKind::InvalidMaxLength`] if `max_length <= 0`
    pub fn with_max_length(
        name: impl Into<String>,
        field_type: FieldType,
        max_length: i64
    ) -> Result<Self, DefinitionError> {
        if !field_type.can_have_max_length() {
            return Err(DefinitionErrorKind::MaxLengthNotAllowed(field_type).into());
        }

        let max_length = u64::try_from(max_length)
            .ok()
            .filter(|length| *length > 0)
            .ok_or(DefinitionErrorKind::InvalidMaxLength(max_length))?;

        Ok(Self {
            name: name.into(),
            field_type,
            max_length
        })
    }

    /// Field (and column) name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Declared maximum length, 0 when unbounded.
    #[must_use]
    pub fn max_length(&self) -> u64 {
        self.max_length
    }

    #[must_use]
    pub fn has_max_length(&self) -> bool {
        self.max_length > 0
    }

    /// Allocation class of the field.
    #[must_use]
    pub fn allocation(&self) -> Allocation {
        self.field_type.allocation(self.max_length)
    }

    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.allocation() == Allocation::Primitive
    }

    /// Unbounded `Text` or `Blob`.
    #[must_use]
    pub fn is_dynamically_allocated(&self) -> bool {
        self.allocation() == Allocation::Dynamic
    }

    /// `Text` or `Blob` with a positive max length.
    #[must_use]
    pub fn is_fixed_size(&self) -> bool {
        self.allocation() == Allocation::Fixed
    }

    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.field_type == FieldType::PrimaryKey
    }
}
