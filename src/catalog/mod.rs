//! Item catalog: grades, items, validation, and loading.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
