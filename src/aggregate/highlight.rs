use crate::catalog::{Grade, Item};
use serde::Serialize;

/// A high-value draw, tagged with where it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight<'a> {
    /// 1-based gacha (batch) number.
    pub batch: usize,
    /// 0-based position in the full draw sequence.
    pub position: usize,
    pub item: &'a Item,
}

/// 1-based batch number for a 0-based draw position.
pub fn batch_of(position: usize, batch_size: usize) -> usize {
    position / batch_size + 1
}

/// All results whose grade is in `grades`, in original draw order.
pub fn high_value<'a>(
    results: &[&'a Item],
    grades: &[Grade],
    batch_size: usize,
) -> Vec<Highlight<'a>> {
    let grades: Vec<Grade> = grades.iter().map(Grade::normalized).collect();
    results
        .iter()
        .enumerate()
        .filter(|(_, item)| grades.contains(&item.grade.normalized()))
        .map(|(position, &item)| Highlight {
            batch: batch_of(position, batch_size),
            position,
            item,
        })
        .collect()
}
