//! SQLite schema definitions.

use rusqlite::Connection;

use crate::error::StoreResult;

use super::backend::internal_error;

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Initializes the database schema.
pub fn initialize_schema(conn: &Connection) -> StoreResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        create_schema_v1(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    }

    Ok(())
}

/// Gets the current schema version (0 for a fresh database).
fn get_schema_version(conn: &Connection) -> StoreResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| internal_error(format!("Failed to create schema_version table: {}", e)))?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();

    Ok(version.unwrap_or(0))
}

/// Sets the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> StoreResult<()> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| internal_error(format!("Failed to clear schema_version: {}", e)))?;

    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )
    .map_err(|e| internal_error(format!("Failed to set schema_version: {}", e)))?;

    Ok(())
}

/// Creates the initial schema.
///
/// Each record is a JSON document in `data`; the extracted columns exist for
/// ordering (`recipes.title`), uniqueness (`users.username`, `users.email`),
/// and token lookup, and are kept in sync with the document on every write.
fn create_schema_v1(conn: &Connection) -> StoreResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS recipes (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            data TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| internal_error(format!("Failed to create recipes table: {}", e)))?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_recipes_title
         ON recipes (title COLLATE NOCASE)",
        [],
    )
    .map_err(|e| internal_error(format!("Failed to create recipes title index: {}", e)))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            token TEXT,
            data TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| internal_error(format!("Failed to create users table: {}", e)))?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_users_token ON users (token)",
        [],
    )
    .map_err(|e| internal_error(format!("Failed to create users token index: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        initialize_schema(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }
}
