use serde::{Deserialize, Serialize};

/// One row of an imported bookmark tree.
///
/// `parent` is an id reference into the same table; `None` marks a root item.
/// Children are derived (rows whose `parent` equals this node's `id`), never
/// stored on the node itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkNode {
    pub id: i64,
    pub title: String,
    pub parent: Option<i64>,
}

/// A file accepted into the upload store and available for browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedFile {
    pub name: String,
    pub size: u64,
}
