//! Session configuration.

use crate::catalog::Grade;
use crate::constants::{
    BATCH_DELAY_MS, DEFAULT_BANNER_TITLE, DRAWS_PER_GACHA, MAX_SESSION_DRAWS,
};
use crate::error::InputError;
use std::time::Duration;

/// Configuration for one gacha session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of gachas (batches) to draw
    pub gachas: usize,

    /// Draws per gacha
    pub batch_size: usize,

    /// Pause between batch reports
    pub delay: Duration,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Grades listed in the high-value table
    pub highlight: Vec<Grade>,

    /// Banner shown above each batch
    pub title: String,

    pub color: bool,
    pub clear_screen: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            gachas: 1,
            batch_size: DRAWS_PER_GACHA,
            delay: Duration::from_millis(BATCH_DELAY_MS),
            seed: None,
            highlight: Grade::high_value(),
            title: DEFAULT_BANNER_TITLE.to_string(),
            color: true,
            clear_screen: true,
        }
    }
}

impl SessionConfig {
    /// No pacing and no screen clearing; for piping output or tests.
    pub fn instant(gachas: usize) -> Self {
        Self {
            gachas,
            delay: Duration::ZERO,
            clear_screen: false,
            ..Default::default()
        }
    }

    /// Reproducible session with a fixed seed.
    pub fn seeded(gachas: usize, seed: u64) -> Self {
        Self {
            gachas,
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Saturates instead of overflowing; `validate` rejects such configs.
    pub fn total_draws(&self) -> usize {
        self.gachas.saturating_mul(self.batch_size)
    }

    /// Number of draws the session needs, if it fits within
    /// `MAX_SESSION_DRAWS`.
    pub fn checked_total_draws(&self) -> Result<usize, InputError> {
        self.gachas
            .checked_mul(self.batch_size)
            .filter(|&total| total <= MAX_SESSION_DRAWS)
            .ok_or_else(|| InputError::TooManyDraws {
                gachas: self.gachas,
                batch_size: self.batch_size,
                max: MAX_SESSION_DRAWS,
            })
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.batch_size == 0 {
            return Err(InputError::InvalidBatchSize);
        }
        if self.gachas == 0 {
            return Err(InputError::InvalidCount {
                raw: self.gachas.to_string(),
            });
        }
        self.checked_total_draws()?;
        Ok(())
    }
}
