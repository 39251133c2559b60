// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Intermediate representation of a compiled dataset.
//!
//! The IR is built in one pass by [`crate::definition::parse`] and never
//! mutated afterwards. All values are plain owned data, so a [`Dataset`] is
//! `Send + Sync` and can be shared by several generators.
//!
//! # Data Structures
//!
//! ```text
//! Dataset
//! ├── name: String
//! └── models: Vec<Model>
//!     └── Model
//!         ├── name: String
//!         ├── type_name: Option<String>   (C struct name override)
//!         ├── table_name: Option<String>  (table name override)
//!         ├── fields: Vec<Field>
//!         │   └── Field { name, field_type, max_length }
//!         └── queries: Vec<Query>
//!             └── Query { query_type, name, query_string, params }
//!                 └── QueryParam { position, name, param_type }
//! ```

mod field;
mod field_type;
mod model;
mod query;

pub use field::Field;
pub use field_type::{Allocation, FieldType};
pub use model::Model;
pub use query::{Query, QueryParam, QueryType};

/// Named collection of models stored in one database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name:   String,
    models: Vec<Model>
}

impl Dataset {
    #[must_use]
    pub fn new(name: impl Into<String>, models: Vec<Model>) -> Self {
        Self {
            name: name.into(),
            models
        }
    }

    /// Dataset name, the stem of every generated file and guard macro.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Models in declaration order.
    #[must_use]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// First model named `name`.
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name() == name)
    }
}
