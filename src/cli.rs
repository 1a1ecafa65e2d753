//! Command-line options and the gacha count prompt.

use crate::build_info;
use crate::catalog::Grade;
use crate::constants::{
    BATCH_DELAY_MS, DEFAULT_BANNER_TITLE, DEFAULT_CATALOG_PATH, DRAWS_PER_GACHA,
};
use crate::error::InputError;
use crate::session::SessionConfig;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "gacha",
    version = build_info::LONG_VERSION,
    about = "Weighted gacha draw simulator"
)]
pub struct Cli {
    /// Catalog file (JSON records with Grade, Item name, Individual chance)
    #[arg(long, env = "GACHA_CATALOG", default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Number of gachas to draw; prompts when omitted
    #[arg(short = 'n', long)]
    pub gachas: Option<String>,

    /// Draws per gacha
    #[arg(long, default_value_t = DRAWS_PER_GACHA)]
    pub batch_size: usize,

    /// Pause between gachas, in milliseconds
    #[arg(long, default_value_t = BATCH_DELAY_MS)]
    pub delay_ms: u64,

    /// Random seed for reproducible draws
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Grade to list in the high-value table (repeatable; default Epic and Legendary)
    #[arg(long = "highlight", value_name = "GRADE")]
    pub highlight: Vec<String>,

    /// Banner shown above each gacha
    #[arg(long, default_value = DEFAULT_BANNER_TITLE)]
    pub title: String,

    #[arg(long)]
    pub no_color: bool,

    #[arg(long)]
    pub no_clear: bool,

    /// Emit one JSON object per gacha instead of tables
    #[arg(long)]
    pub json: bool,

    /// Print each item's drop rate before drawing
    #[arg(long)]
    pub odds: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Color is never written into a JSON stream.
    pub fn color(&self) -> bool {
        !self.no_color && !self.json
    }

    /// Session settings for a known gacha count.
    pub fn session_config(&self, gachas: usize) -> SessionConfig {
        let highlight = if self.highlight.is_empty() {
            Grade::high_value()
        } else {
            self.highlight.iter().map(|g| Grade::from(g.as_str())).collect()
        };

        SessionConfig {
            gachas,
            batch_size: self.batch_size,
            delay: Duration::from_millis(self.delay_ms),
            seed: self.seed,
            highlight,
            title: self.title.clone(),
            color: self.color(),
            clear_screen: !self.no_clear && !self.json,
        }
    }
}

/// Parses a user-supplied gacha count; must be a positive integer.
pub fn parse_count(raw: &str) -> Result<usize, InputError> {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(InputError::InvalidCount {
            raw: raw.trim().to_string(),
        }),
    }
}

/// Asks how many gachas to draw.
pub fn prompt_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    batch_size: usize,
) -> Result<usize, InputError> {
    write!(
        output,
        "How many times do you want to gacha (each gacha yields {batch_size} items)? "
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_count(&line)
}
