//! App core for Bookmark Tools.
//!
//! Central struct wiring the upload store, the tree navigator, and the
//! imported-resource boundary for the binaries.

use std::path::PathBuf;

use crate::imported::navigator::TreeNavigator;
use crate::imported::resource::ImportedResource;
use crate::imported::store::{ImportedFileStore, Selection};

/// Central application struct over one upload directory.
pub struct App {
    pub store: ImportedFileStore,
    pub resource: ImportedResource,
    pub selection: Selection,
}

impl App {
    /// Creates the app over the given upload directory.
    ///
    /// The navigator gets its own handle to the store; the store is a
    /// cheap path wrapper, all state lives on disk.
    pub fn new<P: Into<PathBuf>>(upload_dir: P) -> Self {
        let store = ImportedFileStore::new(upload_dir);
        let navigator = TreeNavigator::new(store.clone());
        Self {
            store,
            resource: ImportedResource::new(navigator),
            selection: Selection::default(),
        }
    }

    /// Deletes a stored file and drops it from the selection if needed.
    pub fn delete_file(&mut self, name: &str) -> Result<(), crate::types::errors::ImportError> {
        self.store.delete(name)?;
        if self.selection.is_selected(name) {
            self.selection.clear();
        }
        Ok(())
    }
}
