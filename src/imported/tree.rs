//! Parent-chain traversal over the flat bookmark row store.
//!
//! Nothing in the imported schema prevents a `parent` cycle, so every
//! transitive walk tracks visited ids and refuses to revisit one.

use rusqlite::Connection;
use std::collections::{HashSet, VecDeque};

use crate::types::errors::ImportError;

/// Collects `start` and all of its transitive descendants, breadth-first.
///
/// This is the cascade contract of the model: the returned set is exactly
/// what a cascading delete would remove together. The walk queries one
/// children page per dequeued node and never loads the whole tree.
///
/// Fails with [`ImportError::CycleDetected`] as soon as a parent chain
/// leads back to an id already seen in this traversal, which guarantees
/// termination on malformed input.
pub fn subtree_ids(conn: &Connection, start: i64) -> Result<Vec<i64>, ImportError> {
    let mut stmt = conn
        .prepare("SELECT id FROM moz_bookmarks WHERE parent = ?1 ORDER BY id")
        .map_err(|e| ImportError::Database(e.to_string()))?;

    let mut visited = HashSet::new();
    visited.insert(start);
    let mut queue = VecDeque::new();
    queue.push_back(start);
    let mut order = Vec::new();

    while let Some(id) = queue.pop_front() {
        order.push(id);

        let children = stmt
            .query_map([id], |row| row.get::<_, i64>(0))
            .map_err(|e| ImportError::Database(e.to_string()))?;
        for child in children {
            let child = child.map_err(|e| ImportError::Database(e.to_string()))?;
            if !visited.insert(child) {
                return Err(ImportError::CycleDetected(child));
            }
            queue.push_back(child);
        }
    }

    Ok(order)
}
