//! Exact sum distribution by exhaustive enumeration.
//!
//! Every key in `[lowest, highest]` is seeded with zero occurrences before the
//! walk, then each outcome of the Cartesian product increments the bucket of
//! its sum. Probabilities are derived at the end as `count / total`.
//!
//! The walk is O(total outcomes); large specs are slow by construction.

use std::time::Instant;

use crate::dice_mechanics::{expand_dice, Outcomes};
use crate::sorting::{sort_buckets, SortMethod};
use crate::types::{DiceSpec, SortOrder, SumBucket};

/// PMF of the dice sum: one bucket per key in `[lowest, highest]`,
/// stored in ascending key order.
#[derive(Clone, Debug)]
pub struct Distribution {
    lowest: u64,
    highest: u64,
    total_outcomes: u64,
    buckets: Vec<SumBucket>,
}

impl Distribution {
    /// Enumerate every outcome of `spec` and tally the sums.
    pub fn compute(spec: &DiceSpec) -> Self {
        let t0 = Instant::now();
        let lowest = spec.lowest();
        let highest = spec.highest();
        let dice = expand_dice(spec);

        tracing::debug!(
            dice = %spec,
            outcomes = spec.total_outcomes(),
            lowest,
            highest,
            "enumerating outcome space"
        );

        let mut counts = vec![0u64; (highest - lowest + 1) as usize];
        let mut visited = 0u64;
        for outcome in Outcomes::new(&dice) {
            let sum: u64 = outcome.iter().map(|&face| face as u64).sum();
            counts[(sum - lowest) as usize] += 1;
            visited += 1;
        }
        debug_assert_eq!(visited, spec.total_outcomes());

        let total = visited as f64;
        let buckets = counts
            .into_iter()
            .enumerate()
            .map(|(offset, count)| SumBucket {
                sum: lowest + offset as u64,
                count,
                probability: count as f64 / total,
            })
            .collect();

        tracing::debug!(
            elapsed_ms = t0.elapsed().as_secs_f64() * 1e3,
            "enumeration done"
        );

        Self {
            lowest,
            highest,
            total_outcomes: visited,
            buckets,
        }
    }

    pub fn lowest(&self) -> u64 {
        self.lowest
    }

    pub fn highest(&self) -> u64 {
        self.highest
    }

    pub fn total_outcomes(&self) -> u64 {
        self.total_outcomes
    }

    /// Buckets in ascending sum order.
    pub fn buckets(&self) -> &[SumBucket] {
        &self.buckets
    }

    pub fn get(&self, sum: u64) -> Option<&SumBucket> {
        if sum < self.lowest || sum > self.highest {
            return None;
        }
        self.buckets.get((sum - self.lowest) as usize)
    }

    /// Bucket with the highest probability. Ties go to the lowest sum.
    pub fn most_likely(&self) -> &SumBucket {
        let mut best = &self.buckets[0];
        for bucket in &self.buckets[1..] {
            if bucket.count > best.count {
                best = bucket;
            }
        }
        best
    }

    /// Exact expected sum.
    pub fn mean(&self) -> f64 {
        self.buckets
            .iter()
            .map(|b| b.sum as f64 * b.probability)
            .sum()
    }

    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.buckets
            .iter()
            .map(|b| {
                let d = b.sum as f64 - mean;
                d * d * b.probability
            })
            .sum()
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Copy of the buckets ordered by `method` in `order`.
    pub fn sorted(&self, method: &SortMethod, order: SortOrder) -> Vec<SumBucket> {
        let mut buckets = self.buckets.clone();
        sort_buckets(&mut buckets, method, order);
        buckets
    }
}
