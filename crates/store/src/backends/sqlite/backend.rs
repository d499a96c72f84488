//! SQLite backend construction and connection pooling.

use std::fmt::Debug;
use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

use crate::error::{BackendError, StorageError, StoreResult};

use super::schema;

/// SQLite-backed document store for recipes and users.
pub struct SqliteBackend {
    pool: Pool<SqliteConnectionManager>,
    is_memory: bool,
}

impl Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend")
            .field("is_memory", &self.is_memory)
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite backend.
#[derive(Debug, Clone)]
pub struct SqliteBackendConfig {
    /// Maximum number of connections in the pool.
    pub max_connections: u32,

    /// Connection acquisition timeout in milliseconds.
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    pub busy_timeout_ms: u32,
}

impl Default for SqliteBackendConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            connection_timeout_ms: 30000,
            busy_timeout_ms: 5000,
        }
    }
}

impl SqliteBackend {
    /// Creates a new in-memory backend.
    pub fn in_memory() -> StoreResult<Self> {
        Self::with_config(":memory:", SqliteBackendConfig::default())
    }

    /// Opens or creates a file-based database.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::with_config(path, SqliteBackendConfig::default())
    }

    /// Creates a backend with custom configuration.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        config: SqliteBackendConfig,
    ) -> StoreResult<Self> {
        let is_memory = path.as_ref().to_string_lossy() == ":memory:";

        let manager = SqliteConnectionManager::file(path.as_ref());

        // A :memory: database lives and dies with its connection, so the
        // pool is pinned to a single connection that never expires.
        let builder = if is_memory {
            Pool::builder()
                .max_size(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            Pool::builder().max_size(config.max_connections)
        };

        let pool = builder
            .connection_timeout(std::time::Duration::from_millis(
                config.connection_timeout_ms,
            ))
            .build(manager)
            .map_err(|e| {
                StorageError::Backend(BackendError::ConnectionFailed {
                    message: e.to_string(),
                })
            })?;

        let backend = Self { pool, is_memory };
        backend.configure_connection(config.busy_timeout_ms)?;

        Ok(backend)
    }

    /// Initializes the database schema.
    pub fn init_schema(&self) -> StoreResult<()> {
        let conn = self.get_connection()?;
        schema::initialize_schema(&conn)
    }

    /// Gets a connection from the pool.
    pub(crate) fn get_connection(
        &self,
    ) -> StoreResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                message: e.to_string(),
            })
        })
    }

    /// Applies per-connection settings.
    fn configure_connection(&self, busy_timeout_ms: u32) -> StoreResult<()> {
        let conn = self.get_connection()?;
        conn.busy_timeout(std::time::Duration::from_millis(busy_timeout_ms as u64))
            .map_err(|e| {
                StorageError::Backend(BackendError::Internal {
                    message: format!("Failed to set busy timeout: {}", e),
                })
            })
    }

    /// Returns whether this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }
}

/// Wraps an arbitrary backend failure.
pub(crate) fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal { message })
}

/// Wraps a document (de)serialization failure.
pub(crate) fn serialization_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Serialization { message })
}
