//! Sources of Gamma distributed variates consumed by the Dirichlet sampler.
//!
//! The generator state is always owned by the caller through a [`GammaSource`]
//! handle, so seeding is explicit and independent streams never share state.

use rand::{rngs::ThreadRng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Gamma};
use crate::error::{BoundedDirichletError, Result};


/// Produces independent Gamma distributed variates on demand
pub trait GammaSource {
    /// Draws one value from Gamma(`shape`, `scale`), the value must be non-negative,
    /// invalid parameters (non-positive or non-finite) return
    /// [`BoundedDirichletError::InvalidArgument`]
    fn draw(&mut self, shape: f64, scale: f64) -> Result<f64>;
}

fn check_gamma_parameters(shape: f64, scale: f64) -> Result<()> {
    if !(shape > 0.0) || !shape.is_finite() {
        return Err(BoundedDirichletError::InvalidArgument(
            format!("gamma shape {} is not positive and finite", shape)
        ));
    }
    if !(scale > 0.0) || !scale.is_finite() {
        return Err(BoundedDirichletError::InvalidArgument(
            format!("gamma scale {} is not positive and finite", scale)
        ));
    }

    Ok(())
}

/// A [`GammaSource`] backed by [`rand_distr::Gamma`] and a caller owned generator
#[derive(Debug, Clone)]
pub struct RngGammaSource<R: Rng> {
    rng: R,
    // last constructed distribution, one Dirichlet sample reuses the same parameters n times
    cached: Option<(f64, f64, Gamma<f64>)>,
}

impl<R: Rng> RngGammaSource<R> {
    /// Wraps an existing generator
    pub fn new(rng: R) -> Self {
        RngGammaSource { rng, cached: None }
    }

    /// Mutable access to the underlying generator
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Returns the underlying generator
    pub fn into_inner(self) -> R {
        self.rng
    }

    fn distribution(&mut self, shape: f64, scale: f64) -> Result<Gamma<f64>> {
        if let Some((cached_shape, cached_scale, gamma)) = self.cached {
            if cached_shape == shape && cached_scale == scale {
                return Ok(gamma);
            }
        }

        check_gamma_parameters(shape, scale)?;
        let gamma = Gamma::new(shape, scale)
            .map_err(|e| BoundedDirichletError::InvalidArgument(
                format!("gamma shape {} and scale {} rejected: {}", shape, scale, e)
            ))?;
        self.cached = Some((shape, scale, gamma));

        Ok(gamma)
    }
}

impl RngGammaSource<ChaCha8Rng> {
    /// Reproducible source seeded from `seed`
    pub fn seed_from_u64(seed: u64) -> Self {
        RngGammaSource::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Reproducible source seeded from `seed` on an independent `stream`,
    /// sources sharing a seed but not a stream do not overlap
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);

        RngGammaSource::new(rng)
    }
}

impl RngGammaSource<ThreadRng> {
    /// Source backed by the lazily seeded thread local generator
    pub fn thread_local() -> Self {
        RngGammaSource::new(rand::thread_rng())
    }
}

impl<R: Rng> GammaSource for RngGammaSource<R> {
    fn draw(&mut self, shape: f64, scale: f64) -> Result<f64> {
        let gamma = self.distribution(shape, scale)?;

        Ok(gamma.sample(&mut self.rng))
    }
}

/// A [`GammaSource`] that always returns the same value regardless of parameters,
/// useful for checking the symmetric case and the behavior of degenerate sources
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantGammaSource {
    /// Value returned by every draw
    pub value: f64,
    /// Number of draws taken so far
    pub draws: usize,
}

impl ConstantGammaSource {
    /// Source returning `value` with no draws taken yet
    pub fn new(value: f64) -> Self {
        ConstantGammaSource { value, draws: 0 }
    }
}

impl GammaSource for ConstantGammaSource {
    fn draw(&mut self, shape: f64, scale: f64) -> Result<f64> {
        check_gamma_parameters(shape, scale)?;
        self.draws += 1;

        Ok(self.value)
    }
}

/// Mean of Gamma(`shape`, `scale`)
pub fn gamma_mean(shape: f64, scale: f64) -> f64 {
    shape * scale
}

/// Variance of Gamma(`shape`, `scale`)
pub fn gamma_variance(shape: f64, scale: f64) -> f64 {
    shape * scale * scale
}
