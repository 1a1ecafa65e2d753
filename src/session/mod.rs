//! Gacha sessions: configuration, batch reporting, and pacing.

mod config;
pub mod pacing;
mod runner;

pub use config::SessionConfig;
pub use pacing::{NoPause, Pace, Pacer, StopAfter, TerminalPacer};
pub use runner::{replay_session, run_session, SessionSummary};
