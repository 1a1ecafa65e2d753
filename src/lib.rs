//! Gacha - weighted draw simulator library
//!
//! The draw engine and aggregator are pure functions over an injected
//! random source; sessions, sinks and the CLI layer sit on top of them.

pub mod aggregate;
pub mod app;
pub mod build_info;
pub mod catalog;
pub mod cli;
pub mod constants;
pub mod draw;
pub mod error;
pub mod report;
pub mod session;

pub use aggregate::{high_value, tally, GradeTally, Highlight};
pub use catalog::{load_catalog, Catalog, Grade, Item};
pub use draw::{draw, draw_many, RollSource, ScriptedRolls};
pub use error::{CatalogError, InputError, SessionError};
