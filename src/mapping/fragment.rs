// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code fragment values.
//!
//! Bind and read operations are described as data (an operation name and
//! an ordered argument list) before being turned into text, so a renderer
//! can inspect them or print them differently. The [`fmt::Display`] impls
//! produce the C text used by the stock templates:
//!
//! ```text
//! sqlite3_bind_text( insert_query, (USER_EMAIL_COL + 1), model->email, -1, SQLITE_TRANSIENT )
//! model->id = sqlite3_column_int64( query, USER_ID_COL );
//! success &= ( CQLITE_SUCCESS == cqlite_dynamic_string_read( query, USER_EMAIL_COL, &model->email ) );
//! ```

use std::fmt;

/// Argument of a fragment call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Plain variable: a statement handle or a query parameter.
    Var(String),

    /// Column enum constant plus `offset`. Renders as `(IDENT + offset)`
    /// when the offset is non-zero.
    Column { ident: String, offset: usize },

    /// Literal 1-based parameter position.
    Position(usize),

    /// `var->field`
    Member { var: String, field: String },

    /// `&var->field`
    MemberAddress { var: String, field: String },

    /// `sizeof( var->field )`
    SizeOf { var: String, field: String },

    /// `-1`, length taken from the NUL terminator.
    LengthSentinel,

    /// `SQLITE_TRANSIENT`, SQLite copies the value.
    Transient
}

impl Arg {
    pub(crate) fn member(var: &str, field: &str) -> Self {
        Self::Member {
            var:   var.to_owned(),
            field: field.to_owned()
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(name) => f.write_str(name),
            Self::Column { ident, offset: 0 } => f.write_str(ident),
            Self::Column { ident, offset } => write!(f, "({ident} + {offset})"),
            Self::Position(position) => write!(f, "{position}"),
            Self::Member { var, field } => write!(f, "{var}->{field}"),
            Self::MemberAddress { var, field } => write!(f, "&{var}->{field}"),
            Self::SizeOf { var, field } => write!(f, "sizeof( {var}->{field} )"),
            Self::LengthSentinel => f.write_str("-1"),
            Self::Transient => f.write_str("SQLITE_TRANSIENT")
        }
    }
}

/// Function call: operation name and ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub operation: &'static str,
    pub args:      Vec<Arg>
}

impl Call {
    #[must_use]
    pub fn new(operation: &'static str, args: Vec<Arg>) -> Self {
        Self { operation, args }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            return write!(f, "{}()", self.operation);
        }

        write!(f, "{}( ", self.operation)?;
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(" )")
    }
}

/// Statement reading one field out of a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Read {
    /// `target = call;` for primitive fields.
    Assign { target: Arg, call: Call },

    /// `success_var &= ( CQLITE_SUCCESS == call );` for dynamic and
    /// fixed-size fields. A failed read clears the row flag but later
    /// fields are still read.
    Accumulate { success_var: String, call: Call }
}

impl Read {
    /// The underlying call.
    #[must_use]
    pub fn call(&self) -> &Call {
        match self {
            Self::Assign { call, .. } | Self::Accumulate { call, .. } => call
        }
    }
}

impl fmt::Display for Read {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign { target, call } => write!(f, "{target} = {call};"),
            Self::Accumulate { success_var, call } => {
                write!(f, "{success_var} &= ( CQLITE_SUCCESS == {call} );")
            }
        }
    }
}
