//! Integration tests for the bound accessor layer
//!
//! These tests verify that scalar bound queries and replacements answer
//! according to the set variant: plain endpoints for intervals, support
//! endpoints for univariate distributions, and explicit errors everywhere
//! a scalar bound has no meaning.

use crate::test_helpers::{MatrixNormal, UnitSegment};
use infopt_rs::parameters::distributions::{Beta, Dirichlet, Normal, Uniform};
use infopt_rs::parameters::{BoundError, InfiniteSet, SetVariant};

#[test]
fn test_interval_bounds_are_endpoints() {
    let set = InfiniteSet::interval(-2.0, 7.0);
    assert!(set.has_lower_bound().unwrap());
    assert!(set.has_upper_bound().unwrap());
    assert_eq!(set.lower_bound().unwrap(), -2.0);
    assert_eq!(set.upper_bound().unwrap(), 7.0);

    // An unbounded interval still has (infinite) bounds
    let set = InfiniteSet::interval(f64::NEG_INFINITY, f64::INFINITY);
    assert!(set.has_lower_bound().unwrap());
    assert_eq!(set.upper_bound().unwrap(), f64::INFINITY);
}

#[test]
fn test_interval_bound_replacement() {
    let set = InfiniteSet::interval(0.0, 10.0);

    let narrowed = set.with_lower_bound(2.0).unwrap();
    assert_eq!(narrowed, InfiniteSet::interval(2.0, 10.0));

    let narrowed = narrowed.with_upper_bound(8.0).unwrap();
    assert_eq!(narrowed, InfiniteSet::interval(2.0, 8.0));

    // The source set is untouched
    assert_eq!(set.upper_bound().unwrap(), 10.0);
}

#[test]
fn test_univariate_distribution_bounds_follow_support() {
    let normal = InfiniteSet::distribution(Normal::new(0.0, 1.0).unwrap());
    assert_eq!(normal.lower_bound().unwrap(), f64::NEG_INFINITY);
    assert_eq!(normal.upper_bound().unwrap(), f64::INFINITY);

    let beta = InfiniteSet::distribution(Beta::new(2.0, 2.0).unwrap());
    assert_eq!(beta.lower_bound().unwrap(), 0.0);
    assert_eq!(beta.upper_bound().unwrap(), 1.0);

    let uniform = InfiniteSet::distribution(Uniform::new(3.0, 4.0).unwrap());
    assert_eq!(uniform.lower_bound().unwrap(), 3.0);
    assert_eq!(uniform.upper_bound().unwrap(), 4.0);
}

#[test]
fn test_multivariate_bounds_are_ill_defined() {
    let set = InfiniteSet::distribution(Dirichlet::new(&[1.0, 1.0, 1.0]).unwrap());

    let err = set.has_lower_bound().unwrap_err();
    assert_eq!(
        err,
        BoundError::IllDefinedBound {
            set: SetVariant::Distribution,
            reason: "multivariate distribution".to_string(),
        }
    );
    assert!(set.lower_bound().is_err());
    assert!(set.upper_bound().is_err());
    assert!(set.has_upper_bound().is_err());

    // Same answer for a matrix-variate payload built outside the builder
    let set = InfiniteSet::distribution(MatrixNormal { rows: 2, cols: 3 });
    let err = set.upper_bound().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Scalar bounds are not defined for a matrix-variate distribution"
    );
}

#[test]
fn test_custom_bounds_are_undefined() {
    let set = InfiniteSet::custom(UnitSegment);

    let err = set.lower_bound().unwrap_err();
    assert_eq!(
        err,
        BoundError::UndefinedBoundSemantics {
            set: SetVariant::Custom,
        }
    );
    assert!(set.has_lower_bound().is_err());

    // Membership is the supported query for custom sets
    assert!(set.contains(0.0).unwrap());
    assert!(!set.contains(-0.1).unwrap());
}

#[test]
fn test_bound_mutation_only_for_intervals() {
    let dist = InfiniteSet::distribution(Uniform::new(0.0, 1.0).unwrap());
    let err = dist.with_lower_bound(0.5).unwrap_err();
    assert_eq!(
        err,
        BoundError::UnsupportedMutation {
            set: SetVariant::Distribution,
            operation: "set a lower bound",
        }
    );
    assert!(err.to_string().contains("replace the set instead"));

    let custom = InfiniteSet::custom(UnitSegment);
    let err = custom.with_upper_bound(0.5).unwrap_err();
    assert_eq!(
        err,
        BoundError::UnsupportedMutation {
            set: SetVariant::Custom,
            operation: "set an upper bound",
        }
    );
}

#[test]
fn test_scalar_containment() {
    let interval = InfiniteSet::interval(0.0, 1.0);
    assert!(interval.contains(0.0).unwrap());
    assert!(interval.contains(1.0).unwrap());
    assert!(!interval.contains(1.0 + 1e-12).unwrap());

    let uniform = InfiniteSet::distribution(Uniform::new(0.0, 1.0).unwrap());
    assert!(uniform.contains(0.5).unwrap());
    assert!(!uniform.contains(2.0).unwrap());

    // Membership against a multivariate support is as ill-defined as bounds
    let dirichlet = InfiniteSet::distribution(Dirichlet::new(&[1.0, 1.0]).unwrap());
    assert!(dirichlet.contains(0.5).is_err());
}
