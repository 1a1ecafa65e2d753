use rand::Rng;
use std::collections::VecDeque;

/// Uniform randomness consumed by the draw engine, one value per draw.
pub trait RollSource {
    /// Returns a value in `[0, 1)`.
    ///
    /// The engine scales it by the catalog's total weight. Scripted sources
    /// may return exactly `1.0` to exercise the upper boundary.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RollSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of unit rolls, for deterministic draws in tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<f64>,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RollSource for ScriptedRolls {
    /// # Panics
    ///
    /// Panics when the script runs out, since a silent default would hide a
    /// miscounted test.
    fn next_unit(&mut self) -> f64 {
        self.rolls
            .pop_front()
            .unwrap_or_else(|| panic!("scripted roll source exhausted"))
    }
}
