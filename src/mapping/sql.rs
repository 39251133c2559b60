// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL statement text.
//!
//! Statements are returned as plain SQL. Use [`c_string_literal`] to embed
//! one in C source.
//!
//! | Statement | Text |
//! |-----------|------|
//! | insert | `INSERT OR REPLACE INTO <t> VALUES (?, ?, ?);` |
//! | create table | `CREATE TABLE IF NOT EXISTS <t>(id INTEGER PRIMARY KEY,...);` |
//! | find by id | `SELECT * FROM <t> WHERE <pk> = ?;` |
//! | delete by id | `DELETE FROM <t> WHERE <pk> = ?;` |
//! | get all | `SELECT * FROM <t>;` |
//! | count all | `SELECT COUNT(*) FROM <t>;` |
//! | delete all | `DELETE FROM <t>;` |

use crate::{
    dataset::{Model, Query, QueryType},
    error::PrimaryKeyConstraintViolation,
    utils::sql::{column_definitions, placeholders, where_equals}
};

/// Insert-or-replace of every column, in declaration order.
#[must_use]
pub fn insert_statement(model: &Model) -> String {
    format!(
        "INSERT OR REPLACE INTO {} VALUES ({});",
        model.table_name(),
        placeholders(model.fields().len())
    )
}

/// Full statement for a custom query.
///
/// | Type | Statement |
/// |------|-----------|
/// | `Find` | `SELECT * FROM <t> <fragment> LIMIT 1` |
/// | `Count` | `SELECT COUNT(*) FROM <t> <fragment>` |
/// | `Delete` | `DELETE FROM <t> <fragment>` |
/// | `Update` | `UPDATE <t> <fragment>` |
/// | `Select` | `SELECT * FROM <t> <fragment>` |
#[must_use]
pub fn query_statement(query: &Query, model: &Model) -> String {
    let table = model.table_name();
    let fragment = query.query_string();

    match query.query_type() {
        QueryType::Find => format!("SELECT * FROM {table} {fragment} LIMIT 1"),
        QueryType::Count => format!("SELECT COUNT(*) FROM {table} {fragment}"),
        QueryType::Delete => format!("DELETE FROM {table} {fragment}"),
        QueryType::Update => format!("UPDATE {table} {fragment}"),
        QueryType::Select => format!("SELECT * FROM {table} {fragment}")
    }
}

/// Count of the rows a select query returns, used to size the result
/// list before reading rows.
#[must_use]
pub fn select_count_statement(query: &Query, model: &Model) -> String {
    format!(
        "SELECT COUNT(*) FROM {} {}",
        model.table_name(),
        query.query_string()
    )
}

#[must_use]
pub fn create_table_statement(model: &Model) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {}({});",
        model.table_name(),
        column_definitions(model.fields())
    )
}

#[must_use]
pub fn get_all_statement(model: &Model) -> String {
    format!("SELECT * FROM {};", model.table_name())
}

#[must_use]
pub fn count_all_statement(model: &Model) -> String {
    format!("SELECT COUNT(*) FROM {};", model.table_name())
}

#[must_use]
pub fn delete_all_statement(model: &Model) -> String {
    format!("DELETE FROM {};", model.table_name())
}

/// Select by primary key.
///
/// # Errors
///
/// The model does not have exactly one primary key.
pub fn find_by_id_statement(model: &Model) -> Result<String, PrimaryKeyConstraintViolation> {
    let key = model.primary_key()?;
    Ok(format!(
        "SELECT * FROM {} {};",
        model.table_name(),
        where_equals(key.name())
    ))
}

/// Delete by primary key.
///
/// # Errors
///
/// The model does not have exactly one primary key.
pub fn delete_by_id_statement(model: &Model) -> Result<String, PrimaryKeyConstraintViolation> {
    let key = model.primary_key()?;
    Ok(format!(
        "DELETE FROM {} {};",
        model.table_name(),
        where_equals(key.name())
    ))
}

/// Quote `text` as a C string literal, escaping `\` and `"`.
#[must_use]
pub fn c_string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                literal.push('\\');
                literal.push(c);
            }
            '\n' => literal.push_str("\\n"),
            _ => literal.push(c)
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Field, FieldType};

    fn user() -> Model {
        Model::new(
            "User",
            vec![
                Field::new("id", FieldType::PrimaryKey),
                Field::new("email", FieldType::Text),
                Field::with_max_length("bio", FieldType::Text, 256).unwrap(),
            ]
        )
    }

    fn query(query_type: QueryType) -> Query {
        Query::new(query_type, "q", "WHERE id = ?", Vec::new())
    }

    #[test]
    fn insert() {
        assert_eq!(
            insert_statement(&user()),
            "INSERT OR REPLACE INTO User VALUES (?, ?, ?);"
        );
    }

    #[test]
    fn query_wrappers() {
        let model = user().with_table_name("users");
        let cases = [
            (QueryType::Find, "SELECT * FROM users WHERE id = ? LIMIT 1"),
            (QueryType::Count, "SELECT COUNT(*) FROM users WHERE id = ?"),
            (QueryType::Delete, "DELETE FROM users WHERE id = ?"),
            (QueryType::Update, "UPDATE users WHERE id = ?"),
            (QueryType::Select, "SELECT * FROM users WHERE id = ?")
        ];
        for (query_type, expected) in cases {
            assert_eq!(query_statement(&query(query_type), &model), expected);
        }
    }

    #[test]
    fn select_count() {
        assert_eq!(
            select_count_statement(&query(QueryType::Select), &user()),
            "SELECT COUNT(*) FROM User WHERE id = ?"
        );
    }

    #[test]
    fn create_table() {
        assert_eq!(
            create_table_statement(&user()),
            "CREATE TABLE IF NOT EXISTS User(id INTEGER PRIMARY KEY,email TEXT,bio TEXT);"
        );
    }

    #[test]
    fn whole_table_statements() {
        let model = user();
        assert_eq!(get_all_statement(&model), "SELECT * FROM User;");
        assert_eq!(count_all_statement(&model), "SELECT COUNT(*) FROM User;");
        assert_eq!(delete_all_statement(&model), "DELETE FROM User;");
    }

    #[test]
    fn by_id_statements() {
        let model = user();
        assert_eq!(
            find_by_id_statement(&model).unwrap(),
            "SELECT * FROM User WHERE id = ?;"
        );
        assert_eq!(
            delete_by_id_statement(&model).unwrap(),
            "DELETE FROM User WHERE id = ?;"
        );
    }

    #[test]
    fn by_id_requires_primary_key() {
        let model = Model::new("Tag", vec![Field::new("label", FieldType::Text)]);
        assert!(find_by_id_statement(&model).is_err());
        assert!(delete_by_id_statement(&model).is_err());
    }

    #[test]
    fn string_literal_escaping() {
        assert_eq!(c_string_literal("SELECT 1;"), "\"SELECT 1;\"");
        assert_eq!(
            c_string_literal(r#"WHERE name = "a\b""#),
            r#""WHERE name = \"a\\b\"""#
        );
    }
}
