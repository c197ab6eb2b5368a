//! Tree navigation queries over one imported file.
//!
//! Implements the navigation half of the uniform addressing protocol:
//! list files, list roots, fetch one item, fetch an item's children.
//! Resolution is strictly top-down — file before item before attribute —
//! so a missing file is never misreported as a missing item.

use rusqlite::{Connection, OptionalExtension};

use super::store::ImportedFileStore;
use super::tree;
use crate::database::ReadOnlyDatabase;
use crate::types::errors::ImportError;
use crate::types::node::{BookmarkNode, ImportedFile};

/// Defensive cap on root/children listings. Imported exports can be
/// arbitrarily large; a listing is a browsing page, not a dump.
pub const MAX_LISTED_NODES: i64 = 10_000;

/// The attribute name served by [`TreeNavigator::attribute`].
pub const CHILDREN_ATTR: &str = "children";

/// Answers the navigation queries of the addressing protocol.
///
/// Each query opens one scoped [`ReadOnlyDatabase`] for the addressed file
/// and drops it on every exit path; no connection survives a request and
/// no query loads the tree beyond the rows it returns.
pub struct TreeNavigator {
    store: ImportedFileStore,
}

impl TreeNavigator {
    /// Creates a navigator over the given upload store.
    pub fn new(store: ImportedFileStore) -> Self {
        Self { store }
    }

    /// The store this navigator resolves file names against.
    pub fn store(&self) -> &ImportedFileStore {
        &self.store
    }

    /// Lists the importable file identifiers.
    pub fn list_files(&self) -> Result<Vec<ImportedFile>, ImportError> {
        self.store.list_files()
    }

    /// Root items of the file: nodes with no parent, ascending id order.
    pub fn roots(&self, file_name: &str) -> Result<Vec<BookmarkNode>, ImportError> {
        let db = self.open(file_name)?;
        Self::query_nodes(
            db.connection(),
            "SELECT id, title, parent FROM moz_bookmarks \
             WHERE parent IS NULL ORDER BY id LIMIT ?1",
            [MAX_LISTED_NODES],
        )
    }

    /// Fetches the single node with the given id from the file.
    pub fn item(&self, file_name: &str, item_id: i64) -> Result<BookmarkNode, ImportError> {
        let db = self.open(file_name)?;
        Self::fetch_item(db.connection(), item_id)
    }

    /// Children of the given node, ascending id order.
    ///
    /// A leaf yields an empty vec; a missing item yields
    /// [`ImportError::ItemNotFound`], never an empty listing.
    pub fn children(&self, file_name: &str, item_id: i64) -> Result<Vec<BookmarkNode>, ImportError> {
        let db = self.open(file_name)?;
        let conn = db.connection();
        Self::fetch_item(conn, item_id)?;
        Self::children_of(conn, item_id)
    }

    /// Resolves an attribute address for the given node.
    ///
    /// The item is confirmed to exist before the attribute name is even
    /// looked at, keeping the error precedence file → item → attr. Only
    /// [`CHILDREN_ATTR`] is defined.
    pub fn attribute(
        &self,
        file_name: &str,
        item_id: i64,
        attr: &str,
    ) -> Result<Vec<BookmarkNode>, ImportError> {
        let db = self.open(file_name)?;
        let conn = db.connection();
        Self::fetch_item(conn, item_id)?;
        match attr {
            CHILDREN_ATTR => Self::children_of(conn, item_id),
            other => Err(ImportError::UnsupportedAttribute(other.to_string())),
        }
    }

    /// The node plus all transitive descendants — the set a cascading
    /// delete would remove together. Guarded against parent cycles.
    pub fn subtree_ids(&self, file_name: &str, item_id: i64) -> Result<Vec<i64>, ImportError> {
        let db = self.open(file_name)?;
        let conn = db.connection();
        Self::fetch_item(conn, item_id)?;
        tree::subtree_ids(conn, item_id)
    }

    /// Resolves the file name in the store and opens a read-only session.
    /// Store resolution runs first so a missing file surfaces as
    /// `FileNotFound` rather than as an open error.
    fn open(&self, file_name: &str) -> Result<ReadOnlyDatabase, ImportError> {
        let path = self.store.resolve(file_name)?;
        ReadOnlyDatabase::open(path)
    }

    fn fetch_item(conn: &Connection, item_id: i64) -> Result<BookmarkNode, ImportError> {
        conn.query_row(
            "SELECT id, title, parent FROM moz_bookmarks WHERE id = ?1",
            [item_id],
            Self::row_to_node,
        )
        .optional()
        .map_err(|e| ImportError::Database(e.to_string()))?
        .ok_or(ImportError::ItemNotFound(item_id))
    }

    fn children_of(conn: &Connection, item_id: i64) -> Result<Vec<BookmarkNode>, ImportError> {
        Self::query_nodes(
            conn,
            "SELECT id, title, parent FROM moz_bookmarks \
             WHERE parent = ?1 ORDER BY id LIMIT ?2",
            [item_id, MAX_LISTED_NODES],
        )
    }

    fn query_nodes<P: rusqlite::Params>(
        conn: &Connection,
        sql: &str,
        params: P,
    ) -> Result<Vec<BookmarkNode>, ImportError> {
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| ImportError::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params, Self::row_to_node)
            .map_err(|e| ImportError::Database(e.to_string()))?;

        let mut nodes = Vec::new();
        for row in rows {
            nodes.push(row.map_err(|e| ImportError::Database(e.to_string()))?);
        }
        Ok(nodes)
    }

    /// Reads a single `moz_bookmarks` row into a node.
    /// Firefox exports may carry NULL titles; those become empty strings.
    fn row_to_node(row: &rusqlite::Row) -> rusqlite::Result<BookmarkNode> {
        Ok(BookmarkNode {
            id: row.get(0)?,
            title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            parent: row.get(2)?,
        })
    }
}
