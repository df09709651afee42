//! Symmetric Dirichlet sampling from normalized Gamma draws.

use tracing::trace;
use crate::{
    error::{BoundedDirichletError, Result},
    gamma::GammaSource,
};


pub(crate) fn check_alpha(alpha: f64) -> Result<()> {
    if !(alpha > 0.0) {
        return Err(BoundedDirichletError::InvalidArgument(
            format!("alpha {} is non-positive", alpha)
        ));
    }

    Ok(())
}

pub(crate) fn check_target(target: &[f64]) -> Result<()> {
    if target.is_empty() {
        return Err(BoundedDirichletError::InvalidArgument(
            String::from("results placeholder is of zero size")
        ));
    }

    Ok(())
}

/// Fills `target` with a sample of Dirichlet(`alpha`, ..., `alpha`) of size `target.len()`,
/// each value is non-negative and the values sum to `1.` within floating point tolerance
///
/// - `source` : Gamma variate source, advanced by exactly `target.len()` draws
///
/// - `alpha` : concentration parameter, must be positive
///
/// - `target` : output buffer, must not be empty
///
/// Fails with [`BoundedDirichletError::InvalidArgument`] before drawing anything if `target`
/// is empty or `alpha` is not positive, and with [`BoundedDirichletError::ComputationError`]
/// if the draws do not have a positive and finite sum
pub fn sample_dirichlet_into<S: GammaSource + ?Sized>(
    source: &mut S,
    alpha: f64,
    target: &mut [f64],
) -> Result<()> {
    check_target(target)?;
    check_alpha(alpha)?;

    let mut sum = 0.0;
    for val in target.iter_mut() {
        let v = source.draw(alpha, 1.0)?;
        *val = v;
        sum += v;
    }

    // also rejects a NaN sum, an overflowed sum would normalize every share to zero
    if !(sum > 0.0) || !sum.is_finite() {
        return Err(BoundedDirichletError::ComputationError(
            format!("sum {} is not positive and finite", sum)
        ));
    }

    for val in target.iter_mut() {
        *val /= sum;
    }

    trace!(alpha, len = target.len(), gamma_sum = sum, "sampled dirichlet");

    Ok(())
}

/// Returns a freshly allocated sample of Dirichlet(`alpha`, ..., `alpha`) of size `n`,
/// see [`sample_dirichlet_into`]
pub fn sample_dirichlet<S: GammaSource + ?Sized>(
    source: &mut S,
    alpha: f64,
    n: usize,
) -> Result<Vec<f64>> {
    let mut values = vec![0.0; n];
    sample_dirichlet_into(source, alpha, &mut values)?;

    Ok(values)
}
