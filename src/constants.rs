// Draw batching
pub const DRAWS_PER_GACHA: usize = 11;
// Sessions are drawn up front, so this bounds their memory.
pub const MAX_SESSION_DRAWS: usize = 10_000_000;

// Pacing
pub const BATCH_DELAY_MS: u64 = 2000;
pub const PACER_POLL_MS: u64 = 50;

// Catalog input
pub const DEFAULT_CATALOG_PATH: &str = "data.json";
pub const CHANCE_PERCENT_MAX: f64 = 100.0;

// Presentation
pub const DEFAULT_BANNER_TITLE: &str = "Sunset's Mount Summon";
pub const GRADE_COLUMN_WIDTH: usize = 9;
pub const NAME_COLUMN_WIDTH: usize = 24;
pub const GACHA_COLUMN_WIDTH: usize = 9;
