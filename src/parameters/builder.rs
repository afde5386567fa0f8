//! Parameter specification builder
//!
//! This module provides functionality for accumulating a parameter
//! declaration from keyword-style inputs before it is added to a model. A
//! declaration arrives through one of four channels (lower bound, upper
//! bound, distribution, or set), and the builder enforces that the channels
//! are used consistently: bounds come in pairs, and neither a distribution
//! nor a set may be combined with anything else.
//!
//! Building is pure: the builder never touches a model. The result of
//! [`resolve`](ParameterBuilder::resolve) is the
//! [`InfiniteSet`](crate::parameters::sets::InfiniteSet) the parameter will
//! range over, ready to be stored.

use crate::parameters::distributions::{DistributionKind, ProbabilityDistribution};
use crate::parameters::sets::{CustomDomain, InfiniteSet, IntervalSet};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The four input channels of a parameter specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecChannel {
    /// Scalar lower bound
    LowerBound,

    /// Scalar upper bound
    UpperBound,

    /// Probability distribution
    Distribution,

    /// Explicit infinite set
    CustomSet,
}

impl SpecChannel {
    /// Keyword-style label used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LowerBound => "lower_bound",
            Self::UpperBound => "upper_bound",
            Self::Distribution => "distribution",
            Self::CustomSet => "set",
        }
    }
}

impl fmt::Display for SpecChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while specifying a parameter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("Cannot specify {channel} more than once")]
    DuplicateSpecification { channel: SpecChannel },

    #[error("Cannot specify {channel} alongside {existing}")]
    ConflictingSpecification {
        channel: SpecChannel,
        existing: SpecChannel,
    },

    #[error("Incomplete parameter specification: {reason}")]
    IncompleteSpecification { reason: &'static str },

    #[error("Invalid parameter specification: {reason}")]
    InvalidSpecification { reason: String },
}

/// Accumulates a parameter specification and resolves it into an
/// [`InfiniteSet`].
///
/// The channels are mutually exclusive except for the lower/upper bound pair,
/// which is the one *required* pair: a bound alone cannot be resolved. Each
/// setter consumes the builder and reports misuse immediately, so a malformed
/// declaration fails at the offending keyword rather than at resolution.
///
/// # Examples
///
/// Bounds resolve to an interval:
///
/// ```
/// use infopt_rs::parameters::builder::ParameterBuilder;
/// use infopt_rs::parameters::sets::InfiniteSet;
///
/// let set = ParameterBuilder::new()
///     .lower_bound(0.0)
///     .unwrap()
///     .upper_bound(10.0)
///     .unwrap()
///     .resolve()
///     .unwrap();
/// assert_eq!(set, InfiniteSet::interval(0.0, 10.0));
/// ```
///
/// Mixing channels fails at the second keyword:
///
/// ```
/// use infopt_rs::parameters::builder::{BuildError, ParameterBuilder, SpecChannel};
/// use infopt_rs::parameters::distributions::Normal;
///
/// let err = ParameterBuilder::new()
///     .lower_bound(0.0)
///     .unwrap()
///     .distribution(Normal::new(0.0, 1.0).unwrap())
///     .unwrap_err();
/// assert_eq!(
///     err,
///     BuildError::ConflictingSpecification {
///         channel: SpecChannel::Distribution,
///         existing: SpecChannel::LowerBound,
///     }
/// );
/// ```
#[derive(Debug, Default)]
pub struct ParameterBuilder {
    lower_bound: Option<f64>,
    upper_bound: Option<f64>,
    distribution: Option<Arc<dyn ProbabilityDistribution>>,
    custom: Option<Arc<dyn CustomDomain>>,
}

impl ParameterBuilder {
    /// Create an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the lower bound of an interval domain.
    ///
    /// # Arguments
    ///
    /// * `value` - Smallest admissible value of the parameter
    ///
    /// # Returns
    ///
    /// The builder with the bound recorded, or
    /// [`BuildError::DuplicateSpecification`] /
    /// [`BuildError::ConflictingSpecification`] on misuse
    pub fn lower_bound(mut self, value: f64) -> Result<Self, BuildError> {
        self.check_channel(SpecChannel::LowerBound)?;
        self.lower_bound = Some(value);
        Ok(self)
    }

    /// Specify the upper bound of an interval domain.
    ///
    /// Same rules as [`lower_bound`](Self::lower_bound).
    pub fn upper_bound(mut self, value: f64) -> Result<Self, BuildError> {
        self.check_channel(SpecChannel::UpperBound)?;
        self.upper_bound = Some(value);
        Ok(self)
    }

    /// Specify a probability distribution as the domain.
    ///
    /// Exclusive with every other channel.
    pub fn distribution(
        mut self,
        dist: impl ProbabilityDistribution + 'static,
    ) -> Result<Self, BuildError> {
        self.check_channel(SpecChannel::Distribution)?;
        self.distribution = Some(Arc::new(dist));
        Ok(self)
    }

    /// Specify a custom domain as the set.
    ///
    /// Exclusive with every other channel.
    pub fn custom_set(mut self, domain: impl CustomDomain + 'static) -> Result<Self, BuildError> {
        self.check_channel(SpecChannel::CustomSet)?;
        self.custom = Some(Arc::new(domain));
        Ok(self)
    }

    /// Resolve the accumulated specification into an [`InfiniteSet`].
    ///
    /// Checked in order:
    ///
    /// 1. exactly one bound set → [`BuildError::IncompleteSpecification`];
    /// 2. both bounds set → reject NaN, produce an interval;
    /// 3. a distribution set → reject matrix-variate kinds, produce a
    ///    distribution domain;
    /// 4. a custom set provided → produce a custom domain;
    /// 5. nothing set → [`BuildError::IncompleteSpecification`].
    pub fn resolve(self) -> Result<InfiniteSet, BuildError> {
        if self.lower_bound.is_some() != self.upper_bound.is_some() {
            return Err(BuildError::IncompleteSpecification {
                reason: "must specify both a lower and an upper bound",
            });
        }

        if let (Some(lower), Some(upper)) = (self.lower_bound, self.upper_bound) {
            if lower.is_nan() || upper.is_nan() {
                return Err(BuildError::InvalidSpecification {
                    reason: format!("bounds must be numeric, got [{lower}, {upper}]"),
                });
            }
            return Ok(InfiniteSet::Interval(IntervalSet::new(lower, upper)));
        }

        if let Some(dist) = self.distribution {
            if dist.kind() == DistributionKind::Matrixvariate {
                return Err(BuildError::InvalidSpecification {
                    reason: "matrix-variate distributions are not a valid parameter domain"
                        .to_string(),
                });
            }
            return Ok(InfiniteSet::Distribution(dist));
        }

        if let Some(domain) = self.custom {
            return Ok(InfiniteSet::Custom(domain));
        }

        Err(BuildError::IncompleteSpecification {
            reason: "must specify bounds, a distribution, or a set",
        })
    }

    /// Reject `channel` if it was already set or an exclusive channel is
    /// occupied. Duplicates are reported before conflicts.
    fn check_channel(&self, channel: SpecChannel) -> Result<(), BuildError> {
        let occupied = |c: SpecChannel| -> bool {
            match c {
                SpecChannel::LowerBound => self.lower_bound.is_some(),
                SpecChannel::UpperBound => self.upper_bound.is_some(),
                SpecChannel::Distribution => self.distribution.is_some(),
                SpecChannel::CustomSet => self.custom.is_some(),
            }
        };

        if occupied(channel) {
            return Err(BuildError::DuplicateSpecification { channel });
        }

        let exclusive: &[SpecChannel] = match channel {
            // Bounds tolerate each other, nothing else.
            SpecChannel::LowerBound | SpecChannel::UpperBound => {
                &[SpecChannel::Distribution, SpecChannel::CustomSet]
            }
            SpecChannel::Distribution => &[
                SpecChannel::LowerBound,
                SpecChannel::UpperBound,
                SpecChannel::CustomSet,
            ],
            SpecChannel::CustomSet => &[
                SpecChannel::LowerBound,
                SpecChannel::UpperBound,
                SpecChannel::Distribution,
            ],
        };

        if let Some(&existing) = exclusive.iter().find(|&&c| occupied(c)) {
            return Err(BuildError::ConflictingSpecification { channel, existing });
        }

        Ok(())
    }
}
