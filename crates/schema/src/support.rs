#![forbid(unsafe_code)]

//! Introspection helpers shared by the store and by schema assertions in
//! integration tests.

use crate::SchemaError;
use rusqlite::Connection;

pub fn table_exists(conn: &Connection, table: &str) -> Result<bool, SchemaError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool, SchemaError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
        [table, column],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn row_count(conn: &Connection, table: &str) -> Result<i64, SchemaError> {
    // Table names come from the fixed history modules, never from input.
    let sql = format!("SELECT COUNT(*) FROM {table}");
    let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(count)
}
