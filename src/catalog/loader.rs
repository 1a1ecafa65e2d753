//! Reads a catalog from the JSON record format used by `data.json`.
//!
//! Each record carries its weight as a percentage string (`"12.5%"`), which
//! is normalized to a fraction before the catalog is validated.

use super::types::{Catalog, Grade, Item};
use crate::constants::CHANCE_PERCENT_MAX;
use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One row of the catalog file, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(rename = "Grade")]
    pub grade: String,
    #[serde(rename = "Item name")]
    pub name: String,
    #[serde(rename = "Individual chance")]
    pub chance: String,
}

/// Converts a percentage string into a fraction in `[0, 1]`.
///
/// Accepts surrounding whitespace and an optional trailing `%`.
pub fn parse_chance(item: &str, raw: &str) -> Result<f64, InputError> {
    let malformed = || InputError::MalformedChance {
        item: item.to_string(),
        raw: raw.to_string(),
    };

    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let percent: f64 = number.parse().map_err(|_| malformed())?;

    if !percent.is_finite() || !(0.0..=CHANCE_PERCENT_MAX).contains(&percent) {
        return Err(malformed());
    }

    Ok(percent / CHANCE_PERCENT_MAX)
}

/// Normalizes raw records and validates the resulting catalog.
pub fn catalog_from_records(records: Vec<CatalogRecord>) -> Result<Catalog, InputError> {
    let items = records
        .into_iter()
        .map(|record| {
            let weight = parse_chance(&record.name, &record.chance)?;
            Ok(Item {
                grade: Grade::from(record.grade),
                name: record.name,
                weight,
            })
        })
        .collect::<Result<Vec<_>, InputError>>()?;

    Ok(Catalog::new(items)?)
}

pub fn parse_catalog(json: &str, path: &Path) -> Result<Catalog, InputError> {
    let records: Vec<CatalogRecord> =
        serde_json::from_str(json).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    catalog_from_records(records)
}

/// Loads and validates a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, InputError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&json, path)?;
    tracing::debug!(
        path = %path.display(),
        items = catalog.len(),
        total_weight = catalog.total_weight(),
        "loaded catalog"
    );
    Ok(catalog)
}
