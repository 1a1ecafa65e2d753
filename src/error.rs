//! Error types for catalog construction and user-facing input.

use std::io;
use std::path::PathBuf;

/// The catalog cannot produce a defined draw.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no items")]
    Empty,

    #[error("item at position {position} has an empty name")]
    EmptyName { position: usize },

    #[error("item '{name}' has invalid weight {weight} (must be finite and non-negative)")]
    InvalidWeight { name: String, weight: f64 },

    #[error("catalog total weight must be positive, got {total}")]
    NonPositiveTotal { total: f64 },
}

/// Malformed input from the catalog file or the user.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("malformed chance '{raw}' for item '{item}'")]
    MalformedChance { item: String, raw: String },

    #[error("Please enter a valid number. ('{raw}' is not a positive gacha count)")]
    InvalidCount { raw: String },

    #[error("failed to read gacha count: {0}")]
    Prompt(#[from] io::Error),

    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    #[error("{gachas} gachas of {batch_size} draws exceeds the limit of {max} draws per session")]
    TooManyDraws {
        gachas: usize,
        batch_size: usize,
        max: usize,
    },

    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// A session could not be configured or its reports could not be written.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}
