// Turso/libsql embedded database client
//
// Owns the local database file and a single connection. Statements and row
// iteration run while holding the connection lock, so concurrent tasks never
// interleave on it. Table specific operations live in sibling modules as
// `impl TursoClient` blocks.

use std::path::{Path, PathBuf};

use libsql::{params::IntoParams, Builder, Connection, Database, Row};
use tokio::sync::Mutex;

use crate::config::DATABASE_NAME;

/// Error types for Turso client operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TursoError {
    /// Failed to open the database file or create a connection
    #[error("Database connection failed: {0}")]
    Connection(String),
    /// A statement failed to execute
    #[error("Query failed: {0}")]
    Query(String),
    /// A statement violated a table constraint (e.g. UNIQUE)
    #[error("Constraint violation: {0}")]
    Constraint(String),
    /// The on-disk schema is missing or unsupported
    #[error("Schema error: {0}")]
    Schema(String),
}

impl TursoError {
    /// Classify a libsql error, separating constraint violations from other failures
    pub(crate) fn from_libsql(error: libsql::Error) -> Self {
        let message = error.to_string();
        if message.contains("constraint failed") {
            TursoError::Constraint(message)
        } else {
            TursoError::Query(message)
        }
    }
}

/// Client for the embedded dictionary database, shared behind an `Arc`
pub struct TursoClient {
    _db: Database,
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl std::fmt::Debug for TursoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TursoClient")
            .field("db_path", &self.db_path)
            .finish()
    }
}

impl TursoClient {
    /// Open (creating on first use) the default database inside `data_dir`.
    pub async fn new(data_dir: PathBuf) -> Result<Self, TursoError> {
        Self::open_file(data_dir.join(format!("{}.db", DATABASE_NAME))).await
    }

    /// Open (creating on first use) the database file at `db_path`, creating
    /// its parent directory if needed.
    pub async fn open_file(db_path: PathBuf) -> Result<Self, TursoError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TursoError::Connection(format!("Failed to create data dir {:?}: {}", parent, e))
            })?;
        }

        crate::debug!("Opening Turso database at {:?}", db_path);

        let db = Builder::new_local(&db_path)
            .build()
            .await
            .map_err(|e| TursoError::Connection(e.to_string()))?;
        let conn = db
            .connect()
            .map_err(|e| TursoError::Connection(e.to_string()))?;

        Ok(Self {
            _db: db,
            conn: Mutex::new(conn),
            db_path,
        })
    }

    /// Blocking variant of [`TursoClient::new`] for synchronous startup code.
    pub fn new_blocking(data_dir: PathBuf) -> Result<Self, TursoError> {
        crate::util::run_async(Self::new(data_dir))
            .map_err(|e| TursoError::Connection(format!("Failed to start runtime: {}", e)))?
    }

    /// Path of the database file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Execute a statement, returning the number of affected rows.
    pub async fn execute(&self, sql: &str, params: impl IntoParams) -> Result<u64, TursoError> {
        let conn = self.conn.lock().await;
        conn.execute(sql, params)
            .await
            .map_err(TursoError::from_libsql)
    }

    /// Run a query and convert every row with `map`.
    ///
    /// Rows are read to the end before the connection is released. A failing
    /// `map` stops the read and returns its error.
    pub async fn query_map<T, E, F>(
        &self,
        sql: &str,
        params: impl IntoParams,
        mut map: F,
    ) -> Result<Vec<T>, E>
    where
        F: FnMut(&Row) -> Result<T, E>,
        E: From<TursoError>,
    {
        let conn = self.conn.lock().await;
        let mut rows = conn
            .query(sql, params)
            .await
            .map_err(|e| E::from(TursoError::from_libsql(e)))?;

        let mut mapped = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| E::from(TursoError::from_libsql(e)))?
        {
            mapped.push(map(&row)?);
        }
        Ok(mapped)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
