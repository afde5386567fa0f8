//! Probability distributions backing random infinite parameters
//!
//! A random infinite parameter ranges over the support of a probability
//! distribution. This module defines the capability every distribution
//! provider must offer, together with built-in implementations backed by
//! `rand_distr`.
//!
//! Third-party distribution types participate by implementing
//! [`ProbabilityDistribution`]; the rest of the crate only ever talks to the
//! trait object.

use ndarray::Array2;
use rand::RngCore;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when constructing a built-in distribution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    #[error("Invalid {distribution} distribution: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        reason: String,
    },
}

/// Classification of a distribution by the shape of its variates.
///
/// Scalar infinite parameters require univariate distributions for scalar
/// bound queries; multivariate distributions are admissible as a parameter
/// domain but expose no scalar structure; matrix-variate distributions are
/// rejected outright at specification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionKind {
    /// Scalar variates
    Univariate,

    /// Vector variates
    Multivariate,

    /// Matrix variates
    Matrixvariate,
}

impl DistributionKind {
    /// Lowercase label used in messages and records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Univariate => "univariate",
            Self::Multivariate => "multivariate",
            Self::Matrixvariate => "matrix-variate",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability required from any distribution used as a parameter domain.
///
/// Implementations must keep [`kind`](Self::kind) and
/// [`support_bounds`](Self::support_bounds) consistent: a univariate
/// distribution returns `Some((minimum, maximum))` of its support (either end
/// may be infinite), everything else returns `None`.
///
/// [`sample`](Self::sample) draws `count` variates as a `count x dimension`
/// array; it is the seam used to generate support points for discretization.
pub trait ProbabilityDistribution: fmt::Debug {
    /// Classify the distribution's variates.
    fn kind(&self) -> DistributionKind;

    /// Number of scalar components per variate (1 for univariate).
    fn dimension(&self) -> usize;

    /// Smallest and largest value of the support of a univariate
    /// distribution, or `None` when the distribution is not univariate.
    fn support_bounds(&self) -> Option<(f64, f64)>;

    /// Draw `count` variates, one per row.
    fn sample(&self, rng: &mut dyn RngCore, count: usize) -> Array2<f64>;
}

/// Normal distribution with the whole real line as support.
///
/// # Examples
///
/// ```
/// use infopt_rs::parameters::distributions::{Normal, ProbabilityDistribution};
///
/// let dist = Normal::new(0.0, 1.0).unwrap();
/// assert_eq!(dist.support_bounds(), Some((f64::NEG_INFINITY, f64::INFINITY)));
/// assert!(Normal::new(0.0, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normal {
    inner: rand_distr::Normal<f64>,
}

impl Normal {
    /// Create a normal distribution from its mean and standard deviation.
    ///
    /// # Arguments
    ///
    /// * `mean` - Center of the distribution
    /// * `std_dev` - Standard deviation; must be finite and non-negative
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        let inner = rand_distr::Normal::new(mean, std_dev).map_err(|e| {
            DistributionError::InvalidParameter {
                distribution: "normal",
                reason: e.to_string(),
            }
        })?;
        Ok(Self { inner })
    }

    /// Get the mean of the distribution.
    pub fn mean(&self) -> f64 {
        self.inner.mean()
    }

    /// Get the standard deviation of the distribution.
    pub fn std_dev(&self) -> f64 {
        self.inner.std_dev()
    }
}

impl ProbabilityDistribution for Normal {
    fn kind(&self) -> DistributionKind {
        DistributionKind::Univariate
    }

    fn dimension(&self) -> usize {
        1
    }

    fn support_bounds(&self) -> Option<(f64, f64)> {
        Some((f64::NEG_INFINITY, f64::INFINITY))
    }

    fn sample(&self, rng: &mut dyn RngCore, count: usize) -> Array2<f64> {
        let mut out = Array2::zeros((count, 1));
        for i in 0..count {
            out[[i, 0]] = self.inner.sample(rng);
        }
        out
    }
}

/// Continuous uniform distribution on the closed interval `[lower, upper]`.
#[derive(Debug, Clone, Copy)]
pub struct Uniform {
    lower: f64,
    upper: f64,
    inner: rand::distributions::Uniform<f64>,
}

impl Uniform {
    /// Create a uniform distribution on `[lower, upper]`.
    ///
    /// # Arguments
    ///
    /// * `lower` - Smallest admissible value; must be finite
    /// * `upper` - Largest admissible value; must be finite and `>= lower`
    pub fn new(lower: f64, upper: f64) -> Result<Self, DistributionError> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(DistributionError::InvalidParameter {
                distribution: "uniform",
                reason: format!("expected finite bounds with lower <= upper, got [{lower}, {upper}]"),
            });
        }
        Ok(Self {
            lower,
            upper,
            inner: rand::distributions::Uniform::new_inclusive(lower, upper),
        })
    }

    /// Get the lower end of the support.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Get the upper end of the support.
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl ProbabilityDistribution for Uniform {
    fn kind(&self) -> DistributionKind {
        DistributionKind::Univariate
    }

    fn dimension(&self) -> usize {
        1
    }

    fn support_bounds(&self) -> Option<(f64, f64)> {
        Some((self.lower, self.upper))
    }

    fn sample(&self, rng: &mut dyn RngCore, count: usize) -> Array2<f64> {
        let mut out = Array2::zeros((count, 1));
        for i in 0..count {
            out[[i, 0]] = self.inner.sample(rng);
        }
        out
    }
}

/// Beta distribution with support `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Beta {
    inner: rand_distr::Beta<f64>,
}

impl Beta {
    /// Create a beta distribution from its two shape parameters.
    pub fn new(alpha: f64, beta: f64) -> Result<Self, DistributionError> {
        let inner =
            rand_distr::Beta::new(alpha, beta).map_err(|e| DistributionError::InvalidParameter {
                distribution: "beta",
                reason: e.to_string(),
            })?;
        Ok(Self { inner })
    }
}

impl ProbabilityDistribution for Beta {
    fn kind(&self) -> DistributionKind {
        DistributionKind::Univariate
    }

    fn dimension(&self) -> usize {
        1
    }

    fn support_bounds(&self) -> Option<(f64, f64)> {
        Some((0.0, 1.0))
    }

    fn sample(&self, rng: &mut dyn RngCore, count: usize) -> Array2<f64> {
        let mut out = Array2::zeros((count, 1));
        for i in 0..count {
            out[[i, 0]] = self.inner.sample(rng);
        }
        out
    }
}

/// Dirichlet distribution over probability vectors.
///
/// The standard example of a multivariate parameter domain: admissible as an
/// infinite set, but without scalar bounds.
///
/// # Examples
///
/// ```
/// use infopt_rs::parameters::distributions::{Dirichlet, DistributionKind, ProbabilityDistribution};
///
/// let dist = Dirichlet::new(&[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(dist.kind(), DistributionKind::Multivariate);
/// assert_eq!(dist.dimension(), 3);
/// assert!(dist.support_bounds().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Dirichlet {
    inner: rand_distr::Dirichlet<f64>,
    dimension: usize,
}

impl Dirichlet {
    /// Create a Dirichlet distribution from its concentration parameters.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Concentration parameters; at least two, all positive
    pub fn new(alpha: &[f64]) -> Result<Self, DistributionError> {
        let inner = rand_distr::Dirichlet::new(alpha).map_err(|e| {
            DistributionError::InvalidParameter {
                distribution: "dirichlet",
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            inner,
            dimension: alpha.len(),
        })
    }
}

impl ProbabilityDistribution for Dirichlet {
    fn kind(&self) -> DistributionKind {
        DistributionKind::Multivariate
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn support_bounds(&self) -> Option<(f64, f64)> {
        None
    }

    fn sample(&self, rng: &mut dyn RngCore, count: usize) -> Array2<f64> {
        let mut out = Array2::zeros((count, self.dimension));
        for i in 0..count {
            let draw: Vec<f64> = self.inner.sample(rng);
            for (j, value) in draw.into_iter().enumerate() {
                out[[i, j]] = value;
            }
        }
        out
    }
}
