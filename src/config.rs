// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Compilation options.
//!
//! Options can be built in code or loaded from JSON:
//!
//! ```json
//! { "primaryKeyCheck": "lazy", "customIncludes": ["\"app_types.h\""] }
//! ```
//!
//! Missing keys take their defaults; unknown keys are rejected.

use serde::Deserialize;

/// When the one-primary-key-per-model rule is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryKeyCheck {
    /// While parsing, right after a model's fields.
    #[default]
    Eager,

    /// Only when a consumer asks for [`crate::Model::primary_key`].
    Lazy
}

/// Options for compiling and generating a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CompileOptions {
    /// Primary key checking mode.
    pub primary_key_check: PrimaryKeyCheck,

    /// Extra `#include` targets for the types header, written with their
    /// delimiters (`<stdint.h>`, `"app.h"`).
    pub custom_includes: Vec<String>
}

impl CompileOptions {
    /// Parse options from JSON text.
    ///
    /// # Errors
    ///
    /// Invalid JSON, unknown keys or wrongly typed values.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Set the primary key checking mode.
    #[must_use]
    pub fn with_primary_key_check(mut self, check: PrimaryKeyCheck) -> Self {
        self.primary_key_check = check;
        self
    }

    /// Append a custom include for the types header.
    #[must_use]
    pub fn with_custom_include(mut self, include: impl Into<String>) -> Self {
        self.custom_includes.push(include.into());
        self
    }
}
