use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rarity tier of an item.
///
/// The five canonical tiers get their own variants; any other grade string
/// found in a catalog is kept verbatim in `Other`.
///
/// Build grades with `Grade::from`. A hand-written `Other("Epic")` is not
/// equal to `Epic`; catalogs, tallies and the high-value filter compare
/// grades through `normalized`, so such a value still counts as `Epic`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grade {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Other(String),
}

impl Grade {
    pub const CANONICAL: [Grade; 5] = [
        Grade::Common,
        Grade::Uncommon,
        Grade::Rare,
        Grade::Epic,
        Grade::Legendary,
    ];

    /// Returns the display name for this grade.
    pub fn name(&self) -> &str {
        match self {
            Grade::Common => "Common",
            Grade::Uncommon => "Uncommon",
            Grade::Rare => "Rare",
            Grade::Epic => "Epic",
            Grade::Legendary => "Legendary",
            Grade::Other(name) => name,
        }
    }

    /// Maps an `Other` that spells a canonical tier to that tier.
    pub fn normalized(&self) -> Grade {
        match self {
            Grade::Other(name) => Grade::from(name.as_str()),
            known => known.clone(),
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Grade::Other(_))
    }

    /// The grades shown in the "Epic or higher" table.
    pub fn high_value() -> Vec<Grade> {
        vec![Grade::Epic, Grade::Legendary]
    }
}

impl From<&str> for Grade {
    fn from(name: &str) -> Self {
        match name {
            "Common" => Grade::Common,
            "Uncommon" => Grade::Uncommon,
            "Rare" => Grade::Rare,
            "Epic" => Grade::Epic,
            "Legendary" => Grade::Legendary,
            other => Grade::Other(other.to_string()),
        }
    }
}

impl From<String> for Grade {
    fn from(name: String) -> Self {
        match Grade::from(name.as_str()) {
            Grade::Other(_) => Grade::Other(name),
            known => known,
        }
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        match grade {
            Grade::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl FromStr for Grade {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Grade::from(s))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub grade: Grade,
    pub name: String,
    /// Relative draw weight, already normalized from the percentage form.
    pub weight: f64,
}

impl Item {
    pub fn new(grade: impl Into<Grade>, name: impl Into<String>, weight: f64) -> Self {
        Self {
            grade: grade.into(),
            name: name.into(),
            weight,
        }
    }
}

/// An ordered, validated set of drawable items.
///
/// Construction fails unless there is at least one item, every weight is
/// finite and non-negative, and the weights sum to more than zero. A
/// `Catalog` value can therefore always produce a draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
    total_weight: f64,
}

impl Catalog {
    pub fn new(mut items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (position, item) in items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { position });
            }
            if !item.weight.is_finite() || item.weight < 0.0 {
                return Err(CatalogError::InvalidWeight {
                    name: item.name.clone(),
                    weight: item.weight,
                });
            }
        }

        for item in &mut items {
            item.grade = item.grade.normalized();
        }

        let total_weight: f64 = items.iter().map(|i| i.weight).sum();
        if total_weight <= 0.0 || !total_weight.is_finite() {
            return Err(CatalogError::NonPositiveTotal {
                total: total_weight,
            });
        }

        Ok(Self {
            items,
            total_weight,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// The item that absorbs rolls landing past the last band.
    pub fn last(&self) -> &Item {
        // Non-empty by construction.
        &self.items[self.items.len() - 1]
    }

    /// Whether any item carries `grade`.
    pub fn has_grade(&self, grade: &Grade) -> bool {
        let grade = grade.normalized();
        self.items.iter().any(|item| item.grade == grade)
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.iter().any(|i| std::ptr::eq(i, item))
    }

    /// Each item's share of the total weight, in catalog order.
    pub fn odds(&self) -> Vec<(&Item, f64)> {
        self.items
            .iter()
            .map(|item| (item, item.weight / self.total_weight))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
