// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL text building utilities.

use crate::dataset::Field;

/// Join column definitions: `id INTEGER PRIMARY KEY,email TEXT`.
///
/// No space after the comma; the generated C source splits the statement
/// into one string literal per column.
pub fn column_definitions(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f: &Field| format!("{} {}", f.name(), f.field_type().column_type()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build SQLite placeholders: `?, ?, ?`
pub fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// Build `WHERE column = ?`.
pub fn where_equals(column: &str) -> String {
    format!("WHERE {column} = ?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FieldType;

    #[test]
    fn sqlite_placeholders() {
        assert_eq!(placeholders(3), "?, ?, ?");
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(0), "");
    }

    #[test]
    fn columns() {
        let fields = [
            Field::new("id", FieldType::PrimaryKey),
            Field::new("score", FieldType::Real)
        ];
        assert_eq!(column_definitions(&fields), "id INTEGER PRIMARY KEY,score REAL");
    }

    #[test]
    fn where_clause() {
        assert_eq!(where_equals("id"), "WHERE id = ?");
    }
}
