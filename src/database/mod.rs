//! Database layer for imported bookmark files.
//!
//! Imported files are third-party SQLite databases that must never be
//! mutated. [`ReadOnlyDatabase`] opens them with mutation trapped, and
//! [`DatabaseValidator`] decides at upload time whether a candidate file
//! carries the expected bookmark schema.

pub mod readonly;
pub mod validator;

pub use readonly::ReadOnlyDatabase;
pub use validator::DatabaseValidator;
