//! Navigation over imported bookmark trees.
//!
//! The uniform addressing protocol `/imported[/{file}[/{item}[/{attr}]]]`
//! is resolved top-down: [`store::ImportedFileStore`] resolves the file,
//! [`navigator::TreeNavigator`] answers the tree queries, and
//! [`resource::ImportedResource`] is the only component exposed outward.

pub mod navigator;
pub mod resource;
pub mod store;
pub mod tree;

pub use navigator::TreeNavigator;
pub use resource::{Address, ImportedResource};
pub use store::{ImportedFileStore, Selection};
