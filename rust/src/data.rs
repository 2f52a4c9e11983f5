//! Synthetic input generation for experiments.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default value range for generated data.
pub const DEFAULT_VALUE_RANGE: RangeInclusive<i64> = 1..=1000;

/// Produces random integer vectors for experiment trials.
///
/// Seeded generators give the same sequence of vectors on every run, which
/// keeps tests and repeated classroom demonstrations comparable.
#[derive(Debug, Clone)]
pub struct DataGenerator {
    rng: StdRng,
    range: RangeInclusive<i64>,
}

impl DataGenerator {
    /// Generator seeded from the operating system.
    pub fn new(range: RangeInclusive<i64>) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            range,
        }
    }

    /// Deterministic generator.
    pub fn seeded(seed: u64, range: RangeInclusive<i64>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range,
        }
    }

    /// Generator seeded from `seed` when given, from the OS otherwise.
    pub fn from_seed(seed: Option<u64>, range: RangeInclusive<i64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed, range),
            None => Self::new(range),
        }
    }

    pub fn range(&self) -> &RangeInclusive<i64> {
        &self.range
    }

    /// `size` values drawn uniformly from the configured range.
    pub fn random(&mut self, size: usize) -> Vec<i64> {
        let range = self.range.clone();
        (0..size).map(|_| self.rng.gen_range(range.clone())).collect()
    }

    /// `size` random values in ascending order.
    pub fn sorted(&mut self, size: usize) -> Vec<i64> {
        let mut data = self.random(size);
        data.sort_unstable();
        data
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE_RANGE)
    }
}
