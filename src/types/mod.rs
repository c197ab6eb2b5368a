// Shared type definitions for the imported-database access layer.

pub mod errors;
pub mod node;
