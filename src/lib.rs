//! # Bounded Dirichlet
//!
//! `bounded_dirichlet` draws random shares that add up to a target sum while
//! each share is confined to an interval `[lo, hi]`, a common primitive in
//! simulations that need to split a fixed total into random parts.
//!
//! A sample is produced in three steps:
//!
//! 1. `n` independent Gamma(`alpha`, 1) variates are drawn from a [`gamma::GammaSource`]
//! 2. the draws are normalized into a symmetric Dirichlet sample ([`dirichlet`])
//! 3. the Dirichlet sample is affinely remapped so that it sums to `sum` and no value
//!    falls below `lo` ([`bounded`])
//!
//! The remap does not enforce `hi`, every sample carries a feasibility flag telling
//! whether all of its values respect the upper bound. What to do with an infeasible
//! sample (resample, clip or accept) is left to the caller,
//! [`bounded::BoundedDirichlet::sample_until_feasible`] implements the resampling policy.
//!
//! Random state is never global, callers own the generator through a
//! [`gamma::RngGammaSource`] which makes seeding explicit and allows independent
//! parallel streams ([`batch`]).
//!
//! ## Example Code
//!
//! ```rust
//! use bounded_dirichlet::{
//!     bounded::sample_bounded_dirichlet,
//!     error::BoundedDirichletError,
//!     gamma::RngGammaSource,
//! };
//!
//! fn main() -> Result<(), BoundedDirichletError> {
//!     let mut source = RngGammaSource::seed_from_u64(2024);
//!
//!     // 30 shares of 300 where each share stays within [-50, 50]
//!     let sample = sample_bounded_dirichlet(&mut source, 16., 300., -50., 50., 30)?;
//!
//!     assert!((sample.total() - 300.).abs() < 1e-9);
//!     assert!(sample.values.iter().all(|v| *v >= -50.));
//!     assert_eq!(sample.feasible, sample.values.iter().all(|v| *v <= 50.));
//!
//!     // the mean per share must lie within the bounds
//!     let err = sample_bounded_dirichlet(&mut source, 16., 1000., 0., 1., 10).unwrap_err();
//!     assert!(err.is_invalid_argument());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod gamma;
pub mod dirichlet;
pub mod bounded;
pub mod batch;
