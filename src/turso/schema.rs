// Database schema definitions
//
// This module defines the SQLite schema for the dictionary store. Only one
// schema version exists; files written by a newer version are refused.

use super::client::{TursoClient, TursoError};
use crate::config::SCHEMA_VERSION;

/// SQL statements to create all tables (each as a separate string)
const CREATE_TABLES: &[&str] = &[
    // One record per dictionary; word pairs are embedded as a JSON array
    r#"CREATE TABLE IF NOT EXISTS dictionaries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        words_json TEXT NOT NULL DEFAULT '[]',
        created_at TEXT NOT NULL
    )"#,
    // Secondary unique index on name
    r#"CREATE UNIQUE INDEX IF NOT EXISTS idx_dictionaries_name ON dictionaries(name)"#,
];

/// Initialize the database schema.
///
/// Creates the dictionary table and its name index on a fresh file and records
/// the schema version. Calling it again on an initialized file is a no-op.
pub async fn initialize_schema(client: &TursoClient) -> Result<(), TursoError> {
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await?;

    let current_version = get_schema_version(client).await?;

    if current_version == 0 {
        crate::info!("Initializing dictionary database schema (version {})", SCHEMA_VERSION);

        for statement in CREATE_TABLES {
            client.execute(statement, ()).await?;
        }

        set_schema_version(client, SCHEMA_VERSION).await?;

        crate::info!("Dictionary database schema initialized successfully");
    } else if current_version > SCHEMA_VERSION {
        crate::error!(
            "Database schema version {} is newer than supported version {}",
            current_version,
            SCHEMA_VERSION
        );
        return Err(TursoError::Schema(format!(
            "unsupported schema version {} (expected {})",
            current_version, SCHEMA_VERSION
        )));
    } else {
        crate::debug!("Dictionary database schema is up to date (version {})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database.
/// Returns 0 if no version has been recorded yet.
pub(crate) async fn get_schema_version(client: &TursoClient) -> Result<i32, TursoError> {
    let tables = client
        .query_map(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='schema_version'",
            (),
            |_| Ok::<_, TursoError>(()),
        )
        .await?;

    if tables.is_empty() {
        return Ok(0);
    }

    let versions = client
        .query_map(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            (),
            |row| {
                row.get::<i32>(0)
                    .map_err(|e| TursoError::Query(e.to_string()))
            },
        )
        .await?;

    Ok(versions.into_iter().next().unwrap_or(0))
}

/// Set the schema version in the database.
async fn set_schema_version(client: &TursoClient, version: i32) -> Result<(), TursoError> {
    client
        .execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            libsql::params![version],
        )
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
