//! Infinite sets: the domains infinite parameters range over
//!
//! An infinite parameter is declared over an [`InfiniteSet`]: a closed real
//! interval, a probability distribution, or a user-supplied custom domain.
//! The variants share no common bound structure, so the scalar bound
//! accessors in [`bounds`](crate::parameters::bounds) dispatch on the variant
//! and reject queries that do not apply.
//!
//! # Examples
//!
//! ```
//! use infopt_rs::parameters::sets::{InfiniteSet, IntervalSet, SetVariant};
//!
//! let time = InfiniteSet::interval(0.0, 10.0);
//! assert_eq!(time.variant(), SetVariant::Interval);
//!
//! let unbounded = InfiniteSet::Interval(IntervalSet::new(f64::NEG_INFINITY, f64::INFINITY));
//! assert_eq!(unbounded.variant(), SetVariant::Interval);
//! ```

use crate::parameters::distributions::ProbabilityDistribution;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Discriminant of an [`InfiniteSet`], used in error messages and records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetVariant {
    /// Closed real interval
    Interval,

    /// Probability distribution
    Distribution,

    /// User-defined domain
    Custom,
}

impl SetVariant {
    /// Lowercase label used in messages and records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interval => "interval",
            Self::Distribution => "distribution",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for SetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed real interval `[lower_bound, upper_bound]`.
///
/// Either endpoint may be infinite. Construction does not validate the
/// endpoints; admissibility (finite-or-infinite but never NaN, lower below
/// upper) is checked where an interval enters a parameter specification, so
/// intermediate values can be staged freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalSet {
    /// Smallest admissible value
    pub lower_bound: f64,

    /// Largest admissible value
    pub upper_bound: f64,
}

impl Serialize for IntervalSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("IntervalSet", 2)?;

        // Handle infinity values specially
        if self.lower_bound.is_infinite() && self.lower_bound.is_sign_negative() {
            state.serialize_field("lower_bound", &serde_json::Value::Null)?;
        } else {
            state.serialize_field("lower_bound", &self.lower_bound)?;
        }

        if self.upper_bound.is_infinite() && self.upper_bound.is_sign_positive() {
            state.serialize_field("upper_bound", &serde_json::Value::Null)?;
        } else {
            state.serialize_field("upper_bound", &self.upper_bound)?;
        }

        state.end()
    }
}

impl<'de> Deserialize<'de> for IntervalSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct IntervalSetHelper {
            #[serde(default)]
            lower_bound: Option<f64>,

            #[serde(default)]
            upper_bound: Option<f64>,
        }

        let helper = IntervalSetHelper::deserialize(deserializer)?;

        Ok(IntervalSet {
            lower_bound: helper.lower_bound.unwrap_or(f64::NEG_INFINITY),
            upper_bound: helper.upper_bound.unwrap_or(f64::INFINITY),
        })
    }
}

impl IntervalSet {
    /// Create an interval from its endpoints.
    pub fn new(lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    /// Check whether the interval admits `value`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_bound && value <= self.upper_bound
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower_bound, self.upper_bound)
    }
}

/// A user-defined infinite domain.
///
/// Implement this to use a domain the built-in variants cannot express, such
/// as a union of intervals or a lattice. The model never introspects the
/// domain beyond membership tests and support generation, so implementations
/// are free to represent it however they like.
pub trait CustomDomain: fmt::Debug {
    /// Check whether the domain admits `value`.
    fn contains(&self, value: f64) -> bool;

    /// Produce `count` support points inside the domain.
    fn generate_supports(&self, count: usize) -> Array1<f64>;
}

/// The domain of an infinite parameter.
///
/// Distribution and custom domains are held behind [`Arc`] so a set can be
/// cloned into the model cheaply and shared between parameters.
#[derive(Debug, Clone)]
pub enum InfiniteSet {
    /// A closed real interval
    Interval(IntervalSet),

    /// The support of a probability distribution
    Distribution(Arc<dyn ProbabilityDistribution>),

    /// A user-defined domain
    Custom(Arc<dyn CustomDomain>),
}

impl InfiniteSet {
    /// Create an interval set from its endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::parameters::sets::InfiniteSet;
    ///
    /// let set = InfiniteSet::interval(0.0, 1.0);
    /// assert_eq!(set.lower_bound().unwrap(), 0.0);
    /// ```
    pub fn interval(lower_bound: f64, upper_bound: f64) -> Self {
        Self::Interval(IntervalSet::new(lower_bound, upper_bound))
    }

    /// Create a distribution set from any distribution provider.
    pub fn distribution(dist: impl ProbabilityDistribution + 'static) -> Self {
        Self::Distribution(Arc::new(dist))
    }

    /// Create a custom set from any domain implementation.
    pub fn custom(domain: impl CustomDomain + 'static) -> Self {
        Self::Custom(Arc::new(domain))
    }

    /// Get the variant discriminant.
    pub fn variant(&self) -> SetVariant {
        match self {
            Self::Interval(_) => SetVariant::Interval,
            Self::Distribution(_) => SetVariant::Distribution,
            Self::Custom(_) => SetVariant::Custom,
        }
    }
}

/// Intervals compare by endpoints; distribution and custom sets compare by
/// provider identity, since domain equality is undecidable in general.
impl PartialEq for InfiniteSet {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Interval(a), Self::Interval(b)) => a == b,
            (Self::Distribution(a), Self::Distribution(b)) => Arc::ptr_eq(a, b),
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
