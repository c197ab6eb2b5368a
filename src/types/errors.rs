use std::fmt;

// === ImportError ===

/// Errors produced by the imported-database access layer.
///
/// Every variant carries a machine-readable [`kind`](ImportError::kind) and an
/// HTTP-equivalent [`status`](ImportError::status) class so the boundary
/// adapter can serialize failures without inspecting variant internals.
#[derive(Debug)]
pub enum ImportError {
    /// The file is missing, unreadable, or not a SQLite database at all.
    Open(String),
    /// The file opens as SQLite but lacks the expected bookmark schema.
    InvalidFormat(String),
    /// A mutating statement was issued against a read-only session.
    /// A contract violation inside this layer, never routine.
    ReadOnlyViolation(String),
    /// No imported file with the given name exists in the upload store.
    FileNotFound(String),
    /// No bookmark node with the given id exists in the addressed file.
    ItemNotFound(i64),
    /// The addressed attribute is not one the navigator serves.
    UnsupportedAttribute(String),
    /// The address itself is malformed (wrong prefix, non-integer item id).
    BadAddress(String),
    /// A parent chain revisited a node id during traversal.
    CycleDetected(i64),
    /// An internal query failed. The message is for logs, not for callers.
    Database(String),
}

impl ImportError {
    /// Stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ImportError::Open(_) => "open_error",
            ImportError::InvalidFormat(_) => "invalid_format",
            ImportError::ReadOnlyViolation(_) => "read_only_violation",
            ImportError::FileNotFound(_) => "file_not_found",
            ImportError::ItemNotFound(_) => "item_not_found",
            ImportError::UnsupportedAttribute(_) => "unsupported_attribute",
            ImportError::BadAddress(_) => "bad_address",
            ImportError::CycleDetected(_) => "cycle_detected",
            ImportError::Database(_) => "database_error",
        }
    }

    /// HTTP-equivalent status class for the boundary adapter.
    pub fn status(&self) -> u16 {
        match self {
            ImportError::Open(_) => 404,
            ImportError::InvalidFormat(_) => 400,
            ImportError::ReadOnlyViolation(_) => 500,
            ImportError::FileNotFound(_) => 404,
            ImportError::ItemNotFound(_) => 404,
            ImportError::UnsupportedAttribute(_) => 400,
            ImportError::BadAddress(_) => 400,
            ImportError::CycleDetected(_) => 400,
            ImportError::Database(_) => 500,
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Open(msg) => write!(f, "Cannot open database: {}", msg),
            ImportError::InvalidFormat(msg) => write!(f, "Invalid database format: {}", msg),
            ImportError::ReadOnlyViolation(msg) => {
                write!(f, "Write attempted on read-only session: {}", msg)
            }
            ImportError::FileNotFound(name) => write!(f, "Imported file not found: {}", name),
            ImportError::ItemNotFound(id) => write!(f, "Item not found: {}", id),
            ImportError::UnsupportedAttribute(attr) => {
                write!(f, "Unsupported attribute: {}", attr)
            }
            ImportError::BadAddress(msg) => write!(f, "Bad address: {}", msg),
            ImportError::CycleDetected(id) => {
                write!(f, "Parent cycle detected at item: {}", id)
            }
            ImportError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ImportError {}
