//! Bookmark Tools — read-only browsing of imported Firefox-style bookmark databases.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod imported;
pub mod types;
