use crate::catalog::{Grade, Item};
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// Draw counts grouped by grade.
///
/// Grades that never appeared are absent rather than zero, so an empty
/// input gives an empty tally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GradeTally {
    counts: BTreeMap<Grade, u32>,
}

impl GradeTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, grade: &Grade) {
        *self.counts.entry(grade.normalized()).or_insert(0) += 1;
    }

    pub fn get(&self, grade: &Grade) -> u32 {
        self.counts.get(&grade.normalized()).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Iterates in canonical grade order, unknown grades last.
    pub fn iter(&self) -> impl Iterator<Item = (&Grade, u32)> {
        self.counts.iter().map(|(grade, count)| (grade, *count))
    }
}

impl AddAssign<&GradeTally> for GradeTally {
    fn add_assign(&mut self, other: &GradeTally) {
        for (grade, count) in &other.counts {
            *self.counts.entry(grade.clone()).or_insert(0) += count;
        }
    }
}

impl<'a> FromIterator<&'a Item> for GradeTally {
    fn from_iter<I: IntoIterator<Item = &'a Item>>(iter: I) -> Self {
        let mut tally = GradeTally::new();
        for item in iter {
            tally.record(&item.grade);
        }
        tally
    }
}

/// Counts `results` per grade.
pub fn tally(results: &[&Item]) -> GradeTally {
    results.iter().copied().collect()
}

/// Splits `results` into contiguous batches of `batch_size`; the last batch
/// may be shorter.
///
/// # Panics
///
/// Panics if `batch_size` is zero.
pub fn batches<'r, 'a>(
    results: &'r [&'a Item],
    batch_size: usize,
) -> impl Iterator<Item = &'r [&'a Item]> {
    results.chunks(batch_size)
}
