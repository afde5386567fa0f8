use crate::model::ModelError;
use crate::parameters::bounds::BoundError;
use crate::parameters::builder::BuildError;
use crate::parameters::dependencies::DependencyError;
use crate::parameters::distributions::DistributionError;
use thiserror::Error;

/// Error type for the infopt-rs library.
///
/// Aggregates the per-module error enums; every variant keeps the underlying
/// error intact so callers can branch on the precise kind. All kinds are
/// synchronous model-definition errors, not transient faults.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InfOptError {
    /// Misuse of the parameter specification builder.
    #[error("Parameter specification error: {0}")]
    Build(#[from] BuildError),

    /// Parameter store failure (stale reference, ambiguous name, bad support).
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Bound query or mutation unsupported by the underlying set.
    #[error("Bound error: {0}")]
    Bound(#[from] BoundError),

    /// Malformed dependency tuple.
    #[error("Dependency error: {0}")]
    Dependency(#[from] DependencyError),

    /// Invalid construction of a built-in distribution.
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),
}

/// Result type alias for infopt-rs operations.
///
/// The error type defaults to [`InfOptError`] but can be overridden, which
/// lets modules with a narrower error (e.g. serialization) reuse the alias.
pub type Result<T, E = InfOptError> = std::result::Result<T, E>;
