//! Property-based tests for filename sanitizing and resolution.
//!
//! For arbitrary untrusted names, the sanitized form must stay inside the
//! safe character set and resolution must never address anything outside
//! the upload folder.

use bookmark_tools::imported::store::ImportedFileStore;
use bookmark_tools::types::errors::ImportError;

use proptest::prelude::*;
use tempfile::TempDir;

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sanitized_names_stay_in_the_safe_set(name in any::<String>()) {
        let clean = ImportedFileStore::sanitize_filename(&name);
        prop_assert!(clean.chars().all(is_safe_char), "unsafe char in {:?}", clean);
        prop_assert!(!clean.starts_with('.'), "hidden/traversal name: {:?}", clean);
        prop_assert!(!clean.contains('/') && !clean.contains('\\'));
    }

    #[test]
    fn sanitizing_is_idempotent(name in any::<String>()) {
        let once = ImportedFileStore::sanitize_filename(&name);
        let twice = ImportedFileStore::sanitize_filename(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn resolution_never_escapes_the_upload_folder(name in any::<String>()) {
        let dir = TempDir::new().expect("tempdir");
        let store = ImportedFileStore::new(dir.path());

        match store.resolve(&name) {
            // The store is empty, so nothing may resolve.
            Err(ImportError::FileNotFound(_)) => {}
            Ok(path) => {
                prop_assert!(path.starts_with(dir.path()),
                    "resolved outside the store: {:?}", path);
                prop_assert!(false, "empty store resolved {:?}", path);
            }
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }
}
