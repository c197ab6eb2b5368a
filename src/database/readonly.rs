//! Read-only SQLite session for imported files.
//!
//! Provides the [`ReadOnlyDatabase`] struct that wraps a
//! `rusqlite::Connection` opened with mutation trapped at two levels: the
//! engine flags (`SQLITE_OPEN_READ_ONLY` + `PRAGMA query_only`) and a
//! software guard that refuses to run any statement that could write.

use rusqlite::{Connection, OpenFlags, Params};
use std::path::{Path, PathBuf};

use crate::types::errors::ImportError;

/// Read-only session over one imported database file.
///
/// Created per access session when a file is opened for browsing and dropped
/// when the session ends. Opening performs no schema migration and creates
/// no write-ahead log; the file on disk stays byte-for-byte unchanged for
/// the lifetime of the session.
pub struct ReadOnlyDatabase {
    conn: Connection,
    path: PathBuf,
}

impl ReadOnlyDatabase {
    /// Opens an existing database file strictly read-only.
    ///
    /// Fails with [`ImportError::Open`] when the path does not exist, is not
    /// a regular file, or is not a SQLite database. SQLite defers reading
    /// the file header until the first query, so a probe query against
    /// `sqlite_master` runs here to surface non-database files immediately.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ImportError::Open(format!(
                "no such file: {}",
                path.display()
            )));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| ImportError::Open(e.to_string()))?;

        // Second trap at the connection level, independent of the open flags.
        conn.pragma_update(None, "query_only", true)
            .map_err(|e| ImportError::Open(e.to_string()))?;

        // Forces the header read; a non-SQLite file fails here.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| ImportError::Open(e.to_string()))?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Always true for imported files; sessions cannot be reopened writable.
    pub fn is_readonly(&self) -> bool {
        true
    }

    /// Returns a reference to the underlying connection for read queries.
    ///
    /// The connection itself rejects writes (`query_only` + read-only open
    /// flags), so handing it out does not weaken the guarantee.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Software-level write trap.
    ///
    /// Prepares the statement and checks `sqlite3_stmt_readonly` before
    /// anything runs: a statement that could mutate the database fails with
    /// [`ImportError::ReadOnlyViolation`] without ever reaching the engine.
    /// Read-only statements are executed normally.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize, ImportError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| ImportError::Database(e.to_string()))?;

        if !stmt.readonly() {
            return Err(ImportError::ReadOnlyViolation(format!(
                "statement would mutate {}: {}",
                self.path.display(),
                sql
            )));
        }

        stmt.execute(params)
            .map_err(|e| ImportError::Database(e.to_string()))
    }
}
