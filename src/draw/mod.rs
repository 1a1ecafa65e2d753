//! Draw engine: weighted selection and injected randomness.

pub mod engine;
pub mod source;

pub use engine::*;
pub use source::*;
