//! Boundary adapter mapping addresses onto the navigator.
//!
//! The only component exposed outward. Callers are assumed to have been
//! authenticated upstream; nothing here re-checks credentials.

use serde_json::{json, Value};

use super::navigator::TreeNavigator;
use crate::types::errors::ImportError;

/// Address prefix of the protocol.
pub const ADDRESS_PREFIX: &str = "imported";

/// A parsed four-part address: `(file, item, attr)`, each optional,
/// progressively specified left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub file: Option<String>,
    pub item: Option<i64>,
    pub attr: Option<String>,
}

impl Address {
    /// Parses a path-style address:
    /// `/imported[/{file}[/{item}[/{attr}]]]`.
    ///
    /// A trailing slash is tolerated. A non-integer item segment or any
    /// extra segment fails with [`ImportError::BadAddress`].
    pub fn parse(path: &str) -> Result<Self, ImportError> {
        let mut segments = path.trim().split('/').filter(|s| !s.is_empty());

        match segments.next() {
            Some(ADDRESS_PREFIX) => {}
            _ => {
                return Err(ImportError::BadAddress(format!(
                    "address must start with /{}",
                    ADDRESS_PREFIX
                )))
            }
        }

        let file = segments.next().map(str::to_string);
        let item = match segments.next() {
            Some(seg) => Some(seg.parse::<i64>().map_err(|_| {
                ImportError::BadAddress(format!("item id must be an integer, got '{}'", seg))
            })?),
            None => None,
        };
        let attr = segments.next().map(str::to_string);

        if segments.next().is_some() {
            return Err(ImportError::BadAddress(
                "too many address segments".to_string(),
            ));
        }

        Ok(Self { file, item, attr })
    }
}

/// Serves the uniform addressing protocol over imported files.
pub struct ImportedResource {
    navigator: TreeNavigator,
}

impl ImportedResource {
    /// Creates the resource over a navigator.
    pub fn new(navigator: TreeNavigator) -> Self {
        Self { navigator }
    }

    /// Parses and resolves a path-style address in one step.
    pub fn get_path(&self, path: &str) -> Result<Value, ImportError> {
        self.get(&Address::parse(path)?)
    }

    /// Resolves an address top-down and serializes the result.
    ///
    /// The match arms mirror the protocol's lookup table from least to
    /// most specific; each deeper arm can only be reached once the
    /// shallower components resolved, which keeps the precedence rule
    /// (file errors before item errors before attribute errors) in one
    /// place.
    pub fn get(&self, address: &Address) -> Result<Value, ImportError> {
        match (&address.file, address.item, &address.attr) {
            (None, _, _) => {
                let files = self.navigator.list_files()?;
                serde_json::to_value(files).map_err(|e| ImportError::Database(e.to_string()))
            }
            (Some(file), None, _) => {
                let roots = self.navigator.roots(file)?;
                serde_json::to_value(roots).map_err(|e| ImportError::Database(e.to_string()))
            }
            (Some(file), Some(item), None) => {
                let node = self.navigator.item(file, item)?;
                serde_json::to_value(node).map_err(|e| ImportError::Database(e.to_string()))
            }
            (Some(file), Some(item), Some(attr)) => {
                let nodes = self.navigator.attribute(file, item, attr)?;
                serde_json::to_value(nodes).map_err(|e| ImportError::Database(e.to_string()))
            }
        }
    }

    /// Serializes a failure as a structured record.
    ///
    /// Internal storage errors never leak their text outward; only the
    /// machine-readable kind, the status class, and a safe message cross
    /// the boundary.
    pub fn error_body(err: &ImportError) -> Value {
        json!({
            "kind": err.kind(),
            "status": err.status(),
            "message": Self::safe_message(err),
        })
    }

    fn safe_message(err: &ImportError) -> String {
        match err {
            // These wrap storage-engine text; replace it with static copy.
            ImportError::Open(_) => "file could not be opened as a database".to_string(),
            ImportError::InvalidFormat(_) => "file is not a bookmark database".to_string(),
            ImportError::Database(_) => "internal database error".to_string(),
            ImportError::ReadOnlyViolation(_) => {
                "write rejected on read-only session".to_string()
            }
            // The rest only echo caller-supplied identifiers.
            other => other.to_string(),
        }
    }
}
