//! Error set for bounded Dirichlet sampling.

use thiserror::Error;


/// A set of errors that may occur when sampling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundedDirichletError {
    /// A caller supplied parameter violates a precondition, detected before any sampling
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An internal invariant was broken by unexpected numerical behavior,
    /// usually a [`GammaSource`](crate::gamma::GammaSource) violating its contract
    #[error("computation error: {0}")]
    ComputationError(String),
}

impl BoundedDirichletError {
    /// Returns `true` if the error was caused by caller input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BoundedDirichletError::InvalidArgument(_))
    }

    /// Returns `true` if the error was caused by a broken internal invariant
    pub fn is_computation_error(&self) -> bool {
        matches!(self, BoundedDirichletError::ComputationError(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BoundedDirichletError>;
