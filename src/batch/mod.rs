//! Running many bounded samples in parallel on isolated, reproducible streams.

use rayon::prelude::*;
use tracing::info;
use crate::{
    bounded::{BoundedDirichlet, BoundedSample},
    error::Result,
    gamma::RngGammaSource,
};


/// Draws `trials` independent samples in parallel, trial `i` uses its own generator
/// seeded with `seed` on stream `i`, so results only depend on `seed` and not on
/// how trials are scheduled across threads
pub fn sample_batch(params: &BoundedDirichlet, seed: u64, trials: usize) -> Result<Vec<BoundedSample>> {
    params.validate()?;

    (0..trials)
        .into_par_iter()
        .map(|trial| {
            let mut source = RngGammaSource::with_stream(seed, trial as u64);
            params.sample(&mut source)
        })
        .collect()
}

/// Aggregate statistics over a set of bounded samples
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    /// Number of samples
    pub trials: usize,
    /// Number of samples with at least one value above the upper bound
    pub infeasible: usize,
    /// Largest absolute difference between a sample total and the requested sum
    pub max_sum_error: f64,
    /// Smallest value across all samples
    pub min_value: f64,
    /// Largest value across all samples
    pub max_value: f64,
}

impl BatchSummary {
    /// Summarizes `samples` drawn with `params`
    pub fn from_samples(params: &BoundedDirichlet, samples: &[BoundedSample]) -> Self {
        let mut summary = BatchSummary {
            trials: samples.len(),
            infeasible: 0,
            max_sum_error: 0.,
            min_value: f64::INFINITY,
            max_value: f64::NEG_INFINITY,
        };

        for sample in samples {
            if !sample.feasible {
                summary.infeasible += 1;
            }
            summary.max_sum_error = summary.max_sum_error.max((sample.total() - params.sum).abs());
            if let Some(min) = sample.min() {
                summary.min_value = summary.min_value.min(min);
            }
            if let Some(max) = sample.max() {
                summary.max_value = summary.max_value.max(max);
            }
        }

        summary
    }

    /// Fraction of samples that respect the upper bound, `0.` when there are no samples
    pub fn feasible_fraction(&self) -> f64 {
        if self.trials == 0 {
            return 0.;
        }

        (self.trials - self.infeasible) as f64 / self.trials as f64
    }
}

/// Runs [`sample_batch`] and summarizes the result
pub fn sample_batch_summary(params: &BoundedDirichlet, seed: u64, trials: usize) -> Result<BatchSummary> {
    let samples = sample_batch(params, seed, trials)?;
    let summary = BatchSummary::from_samples(params, &samples);

    info!(
        trials = summary.trials,
        infeasible = summary.infeasible,
        feasible_fraction = summary.feasible_fraction(),
        max_sum_error = summary.max_sum_error,
        "bounded dirichlet batch finished"
    );

    Ok(summary)
}
