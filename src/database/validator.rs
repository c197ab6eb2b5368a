//! Upload-time schema validation for candidate imported files.

use rusqlite::Connection;
use std::collections::HashSet;
use std::path::Path;

use super::readonly::ReadOnlyDatabase;
use crate::types::errors::ImportError;

/// Table holding the imported bookmark tree (Firefox export schema).
pub const BOOKMARKS_TABLE: &str = "moz_bookmarks";

/// Columns the navigator relies on. Extra columns are tolerated.
pub const REQUIRED_COLUMNS: [&str; 3] = ["id", "title", "parent"];

/// Validates that a candidate file is a bookmark database before it is
/// accepted into the upload store.
///
/// The verdict is all this type owns: on rejection the caller deletes the
/// file and reports to the operator.
pub struct DatabaseValidator;

impl DatabaseValidator {
    /// Checks that `path` opens read-only and carries the expected schema.
    ///
    /// A file that is not SQLite at all fails with [`ImportError::Open`];
    /// a well-formed SQLite database of the wrong schema fails with
    /// [`ImportError::InvalidFormat`] — it is never accepted as an empty
    /// bookmark tree.
    pub fn validate<P: AsRef<Path>>(path: P) -> Result<(), ImportError> {
        let db = ReadOnlyDatabase::open(path)?;
        Self::check_schema(db.connection())
    }

    fn check_schema(conn: &Connection) -> Result<(), ImportError> {
        let table_exists: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
                [BOOKMARKS_TABLE],
                |row| row.get(0),
            )
            .map_err(|e| ImportError::Database(e.to_string()))?;

        if !table_exists {
            return Err(ImportError::InvalidFormat(format!(
                "missing table '{}'",
                BOOKMARKS_TABLE
            )));
        }

        let mut stmt = conn
            .prepare("SELECT name FROM pragma_table_info(?1)")
            .map_err(|e| ImportError::Database(e.to_string()))?;
        let rows = stmt
            .query_map([BOOKMARKS_TABLE], |row| row.get::<_, String>(0))
            .map_err(|e| ImportError::Database(e.to_string()))?;

        let mut columns = HashSet::new();
        for row in rows {
            columns.insert(row.map_err(|e| ImportError::Database(e.to_string()))?);
        }

        for required in REQUIRED_COLUMNS {
            if !columns.contains(required) {
                return Err(ImportError::InvalidFormat(format!(
                    "table '{}' is missing column '{}'",
                    BOOKMARKS_TABLE, required
                )));
            }
        }

        Ok(())
    }
}
