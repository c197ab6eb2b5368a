//! Upload-folder management for imported files.
//!
//! The store owns placement, naming, and deletion of uploaded database
//! files on disk. It accepts a file only after [`DatabaseValidator`]
//! approves it; a rejected upload is deleted before the error is returned.

use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::database::DatabaseValidator;
use crate::types::errors::ImportError;
use crate::types::node::ImportedFile;

/// File extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["sqlite", "db"];

/// Exact file names accepted regardless of extension rules.
pub const ALLOWED_FILES: [&str; 1] = ["places.sqlite"];

/// Manages the on-disk upload folder of imported files.
#[derive(Debug, Clone)]
pub struct ImportedFileStore {
    root: PathBuf,
}

impl ImportedFileStore {
    /// Creates a store rooted at the given upload directory.
    /// The directory is created lazily on the first accepted upload.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// The upload directory this store manages.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reduces an untrusted file name to a safe flat name.
    ///
    /// Every character outside `[A-Za-z0-9._-]` becomes `_`, which removes
    /// path separators, and leading dots are stripped so the result can
    /// neither traverse upward nor hide itself. May return an empty string.
    pub fn sanitize_filename(name: &str) -> String {
        let cleaned: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        cleaned.trim_start_matches('.').to_string()
    }

    /// Checks whether a file name is acceptable for upload.
    pub fn is_allowed(name: &str) -> bool {
        if ALLOWED_FILES.contains(&name) {
            return true;
        }
        match name.rsplit_once('.') {
            Some((stem, ext)) => !stem.is_empty() && ALLOWED_EXTENSIONS.contains(&ext),
            None => false,
        }
    }

    /// Lists the importable files currently in the store, sorted by name.
    ///
    /// A store whose directory does not exist yet simply has no files.
    pub fn list_files(&self) -> Result<Vec<ImportedFile>, ImportError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ImportError::Database(e.to_string())),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ImportError::Database(e.to_string()))?;
            let meta = entry
                .metadata()
                .map_err(|e| ImportError::Database(e.to_string()))?;
            if !meta.is_file() {
                continue;
            }
            files.push(ImportedFile {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: meta.len(),
            });
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    /// Resolves an imported file name to its on-disk path.
    ///
    /// The name is sanitized before joining, so a hostile name can only
    /// ever address files directly inside the upload folder. Fails with
    /// [`ImportError::FileNotFound`] when no such regular file exists.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ImportError> {
        let clean = Self::sanitize_filename(name);
        if clean.is_empty() {
            return Err(ImportError::FileNotFound(name.to_string()));
        }
        let path = self.root.join(&clean);
        if path.is_file() {
            Ok(path)
        } else {
            Err(ImportError::FileNotFound(clean))
        }
    }

    /// Accepts an uploaded file into the store.
    ///
    /// The name is sanitized and checked against the allow-lists, the
    /// contents are written under a collision-free name, and the result is
    /// validated as a bookmark database. A file that fails validation is
    /// deleted before the error is returned, so the store never retains a
    /// rejected upload. Returns the final stored name.
    pub fn accept_upload(&self, original_name: &str, contents: &[u8]) -> Result<String, ImportError> {
        let clean = Self::sanitize_filename(original_name);
        if clean.is_empty() || !Self::is_allowed(&clean) {
            return Err(ImportError::InvalidFormat(format!(
                "file name not allowed: {}",
                original_name
            )));
        }

        fs::create_dir_all(&self.root).map_err(|e| ImportError::Database(e.to_string()))?;

        let final_name = if self.root.join(&clean).exists() {
            Self::uniquify(&clean)
        } else {
            clean
        };
        let path = self.root.join(&final_name);

        fs::write(&path, contents).map_err(|e| ImportError::Database(e.to_string()))?;

        if let Err(err) = DatabaseValidator::validate(&path) {
            // Caller contract: a rejected upload does not stay on disk.
            let _ = fs::remove_file(&path);
            return Err(err);
        }

        Ok(final_name)
    }

    /// Deletes a stored file by name.
    pub fn delete(&self, name: &str) -> Result<(), ImportError> {
        let path = self.resolve(name)?;
        fs::remove_file(path).map_err(|e| ImportError::Database(e.to_string()))
    }

    /// Inserts a random tag before the extension to resolve a name collision.
    fn uniquify(name: &str) -> String {
        let tag = Uuid::new_v4().simple().to_string();
        match name.rsplit_once('.') {
            Some((stem, ext)) => format!("{}_-_{}.{}", stem, &tag[..8], ext),
            None => format!("{}_-_{}", name, &tag[..8]),
        }
    }
}

/// Selected-file state for a browsing session.
///
/// Owned by the caller, not by the navigator; selecting an already selected
/// file deselects it, mirroring the toggle behavior of the file manager UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    /// The currently selected file name, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether the given file is the current selection.
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.as_deref() == Some(name)
    }

    /// Selects the file, or deselects it if it was already selected.
    pub fn toggle(&mut self, name: &str) {
        if self.is_selected(name) {
            self.selected = None;
        } else {
            self.selected = Some(name.to_string());
        }
    }

    /// Clears the selection, e.g. after the selected file is deleted.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
