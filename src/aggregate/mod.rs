//! Aggregation of draw results: grade tallies and the high-value view.

pub mod highlight;
pub mod tally;

pub use highlight::*;
pub use tally::*;
