//! Remapping Dirichlet samples onto a bounded interval with a fixed total.
//!
//! A Dirichlet sample `d` is mapped to `r_k = lo + (mean - lo) * n * d_k` where
//! `mean = sum / n`. The values always sum to `sum` and never fall below `lo`,
//! but the map does not enforce `hi`. Instead every call reports whether the whole
//! vector respects the upper bound and leaves the decision (resample, clip or accept)
//! to the caller.

use tracing::debug;
use crate::{
    dirichlet::{check_alpha, check_target, sample_dirichlet_into},
    error::{BoundedDirichletError, Result},
    gamma::GammaSource,
};


fn check_bounds(lo: f64, hi: f64) -> Result<()> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(BoundedDirichletError::InvalidArgument(
            format!("bounds [{}...{}] are not finite", lo, hi)
        ));
    }
    if !(lo < hi) {
        return Err(BoundedDirichletError::InvalidArgument(
            format!("low {} is not smaller than high {}", lo, hi)
        ));
    }

    Ok(())
}

fn check_mean(sum: f64, lo: f64, hi: f64, n: usize) -> Result<f64> {
    if !sum.is_finite() {
        return Err(BoundedDirichletError::InvalidArgument(
            format!("sum {} is not finite", sum)
        ));
    }
    let mean = sum / n as f64;
    if !(lo <= mean && mean <= hi) {
        return Err(BoundedDirichletError::InvalidArgument(
            format!("mean value {} is not within [{}...{}] range", mean, lo, hi)
        ));
    }
    // largest possible value is lo + (mean - lo) * n, reached when one share takes everything
    if !(lo + (mean - lo) * n as f64).is_finite() {
        return Err(BoundedDirichletError::InvalidArgument(
            format!("sum {} over {} values overflows from low {}", sum, n, lo)
        ));
    }

    Ok(mean)
}

/// Fills `target` with `target.len()` values that sum to `sum`, are each at least `lo`,
/// and follow the proportions of a Dirichlet(`alpha`, ..., `alpha`) sample,
/// returns whether every value is at most `hi`
///
/// - `source` : Gamma variate source, advanced by exactly `target.len()` draws
///
/// - `alpha` : concentration parameter, larger values keep the output closer to `sum / n`
///
/// - `sum` : target total of the output values
///
/// - `lo` : inclusive lower bound, always respected
///
/// - `hi` : inclusive upper bound, only respected when `true` is returned
///
/// - `target` : output buffer of size `n`
///
/// Preconditions are checked in order (non-empty `target`, positive `alpha`, finite `lo < hi`,
/// finite `sum` with `lo <= sum / n <= hi` and a finite largest value `lo + (sum / n - lo) * n`)
/// and fail with [`BoundedDirichletError::InvalidArgument`] before `target` is modified. A [`BoundedDirichletError::ComputationError`] means the
/// Gamma source broke its contract, the contents of `target` are then meaningless.
pub fn sample_bounded_dirichlet_into<S: GammaSource + ?Sized>(
    source: &mut S,
    alpha: f64,
    sum: f64,
    lo: f64,
    hi: f64,
    target: &mut [f64],
) -> Result<bool> {
    check_target(target)?;
    check_alpha(alpha)?;
    check_bounds(lo, hi)?;
    let n = target.len();
    let mean = check_mean(sum, lo, hi, n)?;

    sample_dirichlet_into(source, alpha, target)?;

    let scale = (mean - lo) * n as f64;
    let mut feasible = true;
    let mut exceeding = 0;
    for val in target.iter_mut() {
        let v = lo + scale * *val;
        // every component is checked so the buffer is always fully populated
        if v > hi {
            feasible = false;
            exceeding += 1;
        }
        // also rejects NaN
        if !(v >= lo) {
            return Err(BoundedDirichletError::ComputationError(
                format!("value {} is below {}", v, lo)
            ));
        }
        *val = v;
    }

    if !feasible {
        debug!(alpha, sum, lo, hi, len = n, exceeding, "bounded sample exceeds upper bound");
    }

    Ok(feasible)
}

/// A remapped sample and whether it respects the upper bound it was drawn for
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedSample {
    /// `true` if every value is at most the requested upper bound
    pub feasible: bool,
    pub values: Vec<f64>,
}

impl BoundedSample {
    /// Sum of the values
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Indices of values above `hi`
    pub fn exceeding(&self, hi: f64) -> Vec<usize> {
        self.values.iter()
            .enumerate()
            .filter(|(_, v)| **v > hi)
            .map(|(i, _)| i)
            .collect()
    }

    /// Smallest value, `None` if the sample is empty
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Largest value, `None` if the sample is empty
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// Returns a freshly allocated bounded sample of size `n`, see [`sample_bounded_dirichlet_into`]
pub fn sample_bounded_dirichlet<S: GammaSource + ?Sized>(
    source: &mut S,
    alpha: f64,
    sum: f64,
    lo: f64,
    hi: f64,
    n: usize,
) -> Result<BoundedSample> {
    let mut values = vec![0.0; n];
    let feasible = sample_bounded_dirichlet_into(source, alpha, sum, lo, hi, &mut values)?;

    Ok(BoundedSample { feasible, values })
}

/// Validated parameters of a bounded Dirichlet sampler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedDirichlet {
    /// Concentration parameter
    pub alpha: f64,
    /// Target total
    pub sum: f64,
    /// Inclusive lower bound
    pub lo: f64,
    /// Inclusive upper bound
    pub hi: f64,
    /// Number of components
    pub len: usize,
}

impl Default for BoundedDirichlet {
    fn default() -> Self {
        BoundedDirichlet {
            alpha: 16.,
            sum: 300.,
            lo: -50.,
            hi: 50.,
            len: 30,
        }
    }
}

impl BoundedDirichlet {
    /// Creates a sampler, checking the same preconditions as [`sample_bounded_dirichlet_into`]
    pub fn new(alpha: f64, sum: f64, lo: f64, hi: f64, len: usize) -> Result<Self> {
        let params = BoundedDirichlet { alpha, sum, lo, hi, len };
        params.validate()?;

        Ok(params)
    }

    /// Checks the parameters, useful after fields have been modified directly
    pub fn validate(&self) -> Result<()> {
        if self.len == 0 {
            return Err(BoundedDirichletError::InvalidArgument(
                String::from("results placeholder is of zero size")
            ));
        }
        check_alpha(self.alpha)?;
        check_bounds(self.lo, self.hi)?;
        check_mean(self.sum, self.lo, self.hi, self.len)?;

        Ok(())
    }

    /// Mean value per component
    pub fn mean(&self) -> f64 {
        self.sum / self.len as f64
    }

    /// Draws one sample
    pub fn sample<S: GammaSource + ?Sized>(&self, source: &mut S) -> Result<BoundedSample> {
        sample_bounded_dirichlet(source, self.alpha, self.sum, self.lo, self.hi, self.len)
    }

    /// Draws one sample into `target`, which must have exactly `len` elements,
    /// returns the feasibility flag
    pub fn sample_into<S: GammaSource + ?Sized>(&self, source: &mut S, target: &mut [f64]) -> Result<bool> {
        if target.len() != self.len {
            return Err(BoundedDirichletError::InvalidArgument(
                format!("results placeholder has size {} but {} was expected", target.len(), self.len)
            ));
        }

        sample_bounded_dirichlet_into(source, self.alpha, self.sum, self.lo, self.hi, target)
    }

    /// Resamples until a feasible sample is drawn, returns `None` if none was found
    /// within `max_attempts` draws
    pub fn sample_until_feasible<S: GammaSource + ?Sized>(
        &self,
        source: &mut S,
        max_attempts: usize,
    ) -> Result<Option<BoundedSample>> {
        let mut values = vec![0.0; self.len];
        for attempt in 0..max_attempts {
            if self.sample_into(source, &mut values)? {
                debug!(attempts = attempt + 1, "found feasible bounded sample");
                return Ok(Some(BoundedSample { feasible: true, values }));
            }
        }

        debug!(max_attempts, "no feasible bounded sample found");

        Ok(None)
    }
}
