//! Weighted selection over a catalog ("roulette wheel" sampling).

use super::source::RollSource;
use crate::catalog::{Catalog, Item};

/// Draws one item with probability proportional to its weight.
///
/// Consumes exactly one roll. The catalog is never mutated, so every draw
/// sees the full item list with its original weights.
pub fn draw<'a, S: RollSource + ?Sized>(catalog: &'a Catalog, rng: &mut S) -> &'a Item {
    let roll = rng.next_unit() * catalog.total_weight();
    select(catalog, roll)
}

/// Performs `count` independent draws, in the order they were produced.
pub fn draw_many<'a, S: RollSource + ?Sized>(
    catalog: &'a Catalog,
    count: usize,
    rng: &mut S,
) -> Vec<&'a Item> {
    (0..count).map(|_| draw(catalog, rng)).collect()
}

/// Walks the catalog bands with a running remainder.
///
/// A roll at or past the total weight (upper boundary, or rounding drift
/// while subtracting) falls back to the last item in catalog order.
pub fn select(catalog: &Catalog, roll: f64) -> &Item {
    let mut remainder = roll;
    for item in catalog {
        if remainder < item.weight {
            return item;
        }
        remainder -= item.weight;
    }

    tracing::trace!(roll, "roll past last band, falling back to last item");
    catalog.last()
}
