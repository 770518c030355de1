//! # dice-stats — Exact Dice-Sum Distributions
//!
//! Computes the exact probability mass function (PMF) of the sum of a fixed
//! multiset of dice by **exhaustive enumeration** of every outcome. No
//! sampling: every face combination is visited exactly once.
//!
//! ## Pipeline
//!
//! | Step | Rust module | Description |
//! |------|-------------|-------------|
//! | 0 | [`dice_mechanics`] | Expand die groups into per-die face sequences, bounds, outcome count, notation |
//! | 1 | [`distribution`] | Walk the Cartesian product, tally each sum, derive probabilities |
//! | 2 | [`sorting`] | Resolve the sort selector once, order the buckets |
//! | 3 | [`report`] | Render the uniform or mixed text report, or JSON |
//!
//! ## Example
//!
//! 3d6 has 6^3 = 216 outcomes over sums 3..=18. Sums 10 and 11 share the
//! mode at 27/216 = 12.50%; the lower one (10) is reported as most likely.
//!
//! Configuration is an immutable [`config::ReportConfig`] built once by the
//! binaries from literal defaults in [`constants`], optionally overridden by
//! command-line flags and [`env_config`].

pub mod config;
pub mod constants;
pub mod dice_mechanics;
pub mod distribution;
pub mod env_config;
pub mod error;
pub mod report;
pub mod sorting;
pub mod types;
