// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Artifact generation driver.
//!
//! A compiled [`Dataset`] yields four artifacts. The crate decides what to
//! render and with which context; turning a context into file contents is
//! left to a [`Renderer`] implementation.
//!
//! # Artifacts
//!
//! | Template | File | Includes |
//! |----------|------|----------|
//! | [`Template::TypesHeader`] | `<name>.cdal.h` | `<sqlite3.h>`, custom includes |
//! | [`Template::TypesSource`] | `<name>.cdal.c` | `<stdlib.h>`, `<string.h>`, types header |
//! | [`Template::AccessorHeader`] | `<name>.cdal.accessor.h` | `<sqlite3.h>`, types header |
//! | [`Template::AccessorSource`] | `<name>.cdal.accessor.c` | `<stddef.h>`, `"cqlite.h"`, accessor header |
//!
//! # Example
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use cdal::{
//!     CompileOptions, Dataset,
//!     generate::{RenderContext, Renderer, Template, generate}
//! };
//!
//! struct IncludeList;
//!
//! impl Renderer for IncludeList {
//!     type Error = Infallible;
//!
//!     fn render(&self, _: Template, context: &RenderContext<'_>) -> Result<String, Infallible> {
//!         Ok(context
//!             .includes
//!             .iter()
//!             .map(|include| format!("#include {include}\n"))
//!             .collect())
//!     }
//! }
//!
//! let dataset = Dataset::new("shop", Vec::new());
//! let files = generate(&dataset, &IncludeList, &CompileOptions::default()).unwrap();
//!
//! assert_eq!(files[1].file_name, "shop.cdal.c");
//! assert_eq!(
//!     files[1].contents,
//!     "#include <stdlib.h>\n#include <string.h>\n#include \"shop.cdal.h\"\n"
//! );
//! ```

use thiserror::Error;
use tracing::debug;

use crate::{
    config::CompileOptions,
    dataset::Dataset,
    mapping::{Filters, names}
};

/// Template kind of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Template {
    /// Struct and list declarations.
    TypesHeader,

    /// Init/free helpers for the types.
    TypesSource,

    /// CRUD and custom query prototypes.
    AccessorHeader,

    /// CRUD and custom query implementations.
    AccessorSource
}

impl Template {
    /// Every template, in generation order.
    pub const ALL: [Self; 4] = [
        Self::TypesHeader,
        Self::TypesSource,
        Self::AccessorHeader,
        Self::AccessorSource
    ];

    /// Template file a renderer loads for this kind.
    #[must_use]
    pub const fn file(self) -> &'static str {
        match self {
            Self::TypesHeader => "ctypes.h",
            Self::TypesSource => "ctypes.c",
            Self::AccessorHeader => "accessor.h",
            Self::AccessorSource => "accessor.c"
        }
    }

    /// Output file name for `dataset`.
    #[must_use]
    pub fn output_name(self, dataset: &Dataset) -> String {
        match self {
            Self::TypesHeader => names::types_header_name(dataset),
            Self::TypesSource => names::types_source_name(dataset),
            Self::AccessorHeader => names::accessor_header_name(dataset),
            Self::AccessorSource => names::accessor_source_name(dataset)
        }
    }
}

/// One file to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub template:  Template,
    pub file_name: String
}

/// The four artifacts of `dataset`, in generation order.
#[must_use]
pub fn artifacts(dataset: &Dataset) -> Vec<Artifact> {
    Template::ALL
        .into_iter()
        .map(|template| Artifact {
            template,
            file_name: template.output_name(dataset)
        })
        .collect()
}

/// `#include` targets for `template`, with their delimiters.
///
/// Custom includes go to the types header only, after `<sqlite3.h>`;
/// repeated targets are emitted once.
#[must_use]
pub fn includes(template: Template, dataset: &Dataset, options: &CompileOptions) -> Vec<String> {
    let types_header = || names::header_include(&names::types_header_name(dataset));

    match template {
        Template::TypesHeader => {
            let mut targets = vec!["<sqlite3.h>".to_owned()];
            for include in &options.custom_includes {
                if !targets.contains(include) {
                    targets.push(include.clone());
                }
            }
            targets
        }
        Template::TypesSource => vec![
            "<stdlib.h>".to_owned(),
            "<string.h>".to_owned(),
            types_header(),
        ],
        Template::AccessorHeader => vec!["<sqlite3.h>".to_owned(), types_header()],
        Template::AccessorSource => vec![
            "<stddef.h>".to_owned(),
            names::header_include("cqlite.h"),
            names::header_include(&names::accessor_header_name(dataset)),
        ]
    }
}

/// Everything a renderer receives for one artifact.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub dataset:  &'a Dataset,
    pub includes: Vec<String>,
    pub filters:  Filters
}

/// Turns a template and its context into file contents.
pub trait Renderer {
    type Error: std::error::Error + 'static;

    /// Render one artifact.
    ///
    /// # Errors
    ///
    /// Implementation defined.
    fn render(&self, template: Template, context: &RenderContext<'_>) -> Result<String, Self::Error>;
}

/// Rendered artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub contents:  String
}

/// Renderer failure, tagged with the artifact being rendered.
#[derive(Debug, Error)]
#[error("failed to render `{file_name}`: {source}")]
pub struct GenerateError<E: std::error::Error + 'static> {
    pub file_name: String,
    #[source]
    pub source:    E
}

/// Render every artifact of `dataset` in order.
///
/// Nothing is written to disk; the caller decides where the files go.
///
/// # Errors
///
/// The first renderer error, wrapped with the artifact's file name. Later
/// artifacts are not rendered.
pub fn generate<R: Renderer>(
    dataset: &Dataset,
    renderer: &R,
    options: &CompileOptions
) -> Result<Vec<GeneratedFile>, GenerateError<R::Error>> {
    artifacts(dataset)
        .into_iter()
        .map(|Artifact { template, file_name }| {
            debug!(dataset = dataset.name(), file = %file_name, "rendering artifact");

            let context = RenderContext {
                dataset,
                includes: includes(template, dataset, options),
                filters: Filters::for_template(template)
            };
            match renderer.render(template, &context) {
                Ok(contents) => Ok(GeneratedFile { file_name, contents }),
                Err(source) => Err(GenerateError { file_name, source })
            }
        })
        .collect()
}
