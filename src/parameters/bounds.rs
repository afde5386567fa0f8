//! Scalar bound access over infinite sets
//!
//! This module implements the has/get/set bound queries polymorphically over
//! the [`InfiniteSet`](crate::parameters::sets::InfiniteSet) variants. The
//! variants differ in what a "bound" means, so the accessors never guess:
//! intervals answer directly, univariate distributions answer from their
//! support, and everything else fails with an error naming the reason.
//!
//! | Set variant | has / get bound | set bound |
//! |---|---|---|
//! | interval | stored endpoints | new interval, other endpoint kept |
//! | univariate distribution | support minimum/maximum | `UnsupportedMutation` |
//! | multivariate distribution | `IllDefinedBound` | `UnsupportedMutation` |
//! | custom | `UndefinedBoundSemantics` | `UnsupportedMutation` |
//!
//! Sets are immutable values, so the setters are `with_lower_bound` /
//! `with_upper_bound`: they return a replacement set for the caller (usually
//! [`InfiniteModel`](crate::model::InfiniteModel)) to write back.

use crate::parameters::sets::{InfiniteSet, IntervalSet, SetVariant};
use thiserror::Error;

/// Errors raised by the bound accessors, tied to the set variant's semantics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundError {
    #[error("Cannot {operation} on a {set} set; replace the set instead (e.g. truncate the distribution)")]
    UnsupportedMutation {
        set: SetVariant,
        operation: &'static str,
    },

    #[error("Scalar bounds are not defined for a {reason}")]
    IllDefinedBound { set: SetVariant, reason: String },

    #[error("Bound semantics are undefined for a custom set; query the domain directly")]
    UndefinedBoundSemantics { set: SetVariant },
}

impl InfiniteSet {
    /// Check whether the set carries a well-defined lower bound.
    ///
    /// Intervals and univariate distributions always do (the bound itself may
    /// be infinite). Multivariate distributions fail with
    /// [`BoundError::IllDefinedBound`] and custom sets with
    /// [`BoundError::UndefinedBoundSemantics`].
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::parameters::sets::InfiniteSet;
    ///
    /// let set = InfiniteSet::interval(0.0, 10.0);
    /// assert!(set.has_lower_bound().unwrap());
    /// ```
    pub fn has_lower_bound(&self) -> Result<bool, BoundError> {
        self.scalar_support().map(|_| true)
    }

    /// Check whether the set carries a well-defined upper bound.
    ///
    /// Same variant rules as [`has_lower_bound`](Self::has_lower_bound).
    pub fn has_upper_bound(&self) -> Result<bool, BoundError> {
        self.scalar_support().map(|_| true)
    }

    /// Get the lower bound of the set.
    ///
    /// For an interval this is the stored endpoint; for a univariate
    /// distribution it is the minimum of the support (possibly `-inf`).
    pub fn lower_bound(&self) -> Result<f64, BoundError> {
        self.scalar_support().map(|(lower, _)| lower)
    }

    /// Get the upper bound of the set.
    pub fn upper_bound(&self) -> Result<f64, BoundError> {
        self.scalar_support().map(|(_, upper)| upper)
    }

    /// Build the set that results from replacing the lower bound.
    ///
    /// Only intervals support this; the upper endpoint is kept. Distribution
    /// and custom sets fail with [`BoundError::UnsupportedMutation`]: their
    /// bounds are a consequence of the payload, so the payload itself must be
    /// replaced (e.g. by a truncated distribution).
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::parameters::sets::InfiniteSet;
    ///
    /// let set = InfiniteSet::interval(0.0, 10.0);
    /// let moved = set.with_lower_bound(2.0).unwrap();
    /// assert_eq!(moved.lower_bound().unwrap(), 2.0);
    /// assert_eq!(moved.upper_bound().unwrap(), 10.0);
    /// ```
    pub fn with_lower_bound(&self, value: f64) -> Result<InfiniteSet, BoundError> {
        match self {
            Self::Interval(interval) => Ok(Self::Interval(IntervalSet::new(
                value,
                interval.upper_bound,
            ))),
            _ => Err(BoundError::UnsupportedMutation {
                set: self.variant(),
                operation: "set a lower bound",
            }),
        }
    }

    /// Build the set that results from replacing the upper bound.
    ///
    /// Same variant rules as [`with_lower_bound`](Self::with_lower_bound).
    pub fn with_upper_bound(&self, value: f64) -> Result<InfiniteSet, BoundError> {
        match self {
            Self::Interval(interval) => Ok(Self::Interval(IntervalSet::new(
                interval.lower_bound,
                value,
            ))),
            _ => Err(BoundError::UnsupportedMutation {
                set: self.variant(),
                operation: "set an upper bound",
            }),
        }
    }

    /// Check whether the set admits a scalar `value`.
    ///
    /// Subject to the same variant rules as the bound getters: multivariate
    /// distributions have no scalar membership.
    pub fn contains(&self, value: f64) -> Result<bool, BoundError> {
        match self {
            Self::Custom(domain) => Ok(domain.contains(value)),
            _ => {
                let (lower, upper) = self.scalar_support()?;
                Ok(value >= lower && value <= upper)
            }
        }
    }

    /// Resolve the scalar support `(lower, upper)` of the set, or the error
    /// describing why it has none.
    fn scalar_support(&self) -> Result<(f64, f64), BoundError> {
        match self {
            Self::Interval(interval) => Ok((interval.lower_bound, interval.upper_bound)),
            Self::Distribution(dist) => {
                dist.support_bounds()
                    .ok_or_else(|| BoundError::IllDefinedBound {
                        set: self.variant(),
                        reason: format!("{} distribution", dist.kind()),
                    })
            }
            Self::Custom(_) => Err(BoundError::UndefinedBoundSemantics {
                set: self.variant(),
            }),
        }
    }
}
