//! Weighted categorical draws shared by every generator.
//!
//! Weights do not need to sum to one; a draw picks outcome `i` with
//! probability `w_i / Σw` using a cumulative-distribution lookup.

use error_common::{SynthError, SynthResult};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// One of N labeled outcomes, drawn by weight
#[derive(Debug, Clone)]
pub struct Categorical<T> {
    outcomes: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Copy> Categorical<T> {
    pub fn new(weighted: &[(T, f64)]) -> SynthResult<Self> {
        let index = WeightedIndex::new(weighted.iter().map(|(_, weight)| *weight))
            .map_err(|e| SynthError::configuration(format!("invalid weight table: {}", e)))?;
        Ok(Self {
            outcomes: weighted.iter().map(|(outcome, _)| *outcome).collect(),
            index,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        // WeightedIndex only yields indices below the weight count
        self.outcomes[self.index.sample(rng)]
    }
}
