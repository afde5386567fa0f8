//! Integration tests for the parameter declaration builder
//!
//! These tests verify the channel rules: each declaration channel may be used
//! at most once, and the channels are mutually exclusive apart from the bound
//! pair, which must arrive complete.

use crate::test_helpers::{MatrixNormal, UnitSegment};
use infopt_rs::parameters::distributions::{Normal, Uniform};
use infopt_rs::parameters::{BuildError, InfiniteSet, ParameterBuilder, SetVariant, SpecChannel};

#[test]
fn test_bounds_resolve_to_interval() {
    // Order of the two bound calls does not matter
    let set = ParameterBuilder::new()
        .lower_bound(-1.0)
        .unwrap()
        .upper_bound(1.0)
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(set, InfiniteSet::interval(-1.0, 1.0));

    let set = ParameterBuilder::new()
        .upper_bound(1.0)
        .unwrap()
        .lower_bound(-1.0)
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(set, InfiniteSet::interval(-1.0, 1.0));

    // Infinite endpoints are valid interval bounds
    let set = ParameterBuilder::new()
        .lower_bound(f64::NEG_INFINITY)
        .unwrap()
        .upper_bound(f64::INFINITY)
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(set.variant(), SetVariant::Interval);
    assert!(set.has_lower_bound().unwrap());
    assert!(set.has_upper_bound().unwrap());
}

#[test]
fn test_nan_bound_rejected_at_resolve() {
    let err = ParameterBuilder::new()
        .lower_bound(f64::NAN)
        .unwrap()
        .upper_bound(1.0)
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, BuildError::InvalidSpecification { .. }));
}

#[test]
fn test_distribution_resolves_to_distribution_set() {
    let set = ParameterBuilder::new()
        .distribution(Uniform::new(2.0, 5.0).unwrap())
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(set.variant(), SetVariant::Distribution);
    assert_eq!(set.lower_bound().unwrap(), 2.0);
    assert_eq!(set.upper_bound().unwrap(), 5.0);
}

#[test]
fn test_matrixvariate_distribution_rejected_at_resolve() {
    let err = ParameterBuilder::new()
        .distribution(MatrixNormal { rows: 2, cols: 2 })
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, BuildError::InvalidSpecification { .. }));
    assert!(err.to_string().contains("matrix-variate"));
}

#[test]
fn test_custom_set_resolves_to_custom_set() {
    let set = ParameterBuilder::new()
        .custom_set(UnitSegment)
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(set.variant(), SetVariant::Custom);
    assert!(set.contains(0.5).unwrap());
    assert!(!set.contains(1.5).unwrap());
}

#[test]
fn test_each_channel_rejects_repeats() {
    let err = ParameterBuilder::new()
        .lower_bound(0.0)
        .unwrap()
        .lower_bound(0.0)
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::DuplicateSpecification {
            channel: SpecChannel::LowerBound,
        }
    );

    let err = ParameterBuilder::new()
        .upper_bound(1.0)
        .unwrap()
        .upper_bound(2.0)
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::DuplicateSpecification {
            channel: SpecChannel::UpperBound,
        }
    );

    let err = ParameterBuilder::new()
        .distribution(Normal::new(0.0, 1.0).unwrap())
        .unwrap()
        .distribution(Normal::new(0.0, 2.0).unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::DuplicateSpecification {
            channel: SpecChannel::Distribution,
        }
    );

    let err = ParameterBuilder::new()
        .custom_set(UnitSegment)
        .unwrap()
        .custom_set(UnitSegment)
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::DuplicateSpecification {
            channel: SpecChannel::CustomSet,
        }
    );
}

#[test]
fn test_channels_conflict_pairwise() {
    // A bound followed by a distribution
    let err = ParameterBuilder::new()
        .lower_bound(0.0)
        .unwrap()
        .distribution(Normal::new(0.0, 1.0).unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::ConflictingSpecification {
            channel: SpecChannel::Distribution,
            existing: SpecChannel::LowerBound,
        }
    );
    assert_eq!(
        err.to_string(),
        "Cannot specify distribution alongside lower_bound"
    );

    // A distribution followed by a bound
    let err = ParameterBuilder::new()
        .distribution(Normal::new(0.0, 1.0).unwrap())
        .unwrap()
        .upper_bound(1.0)
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::ConflictingSpecification {
            channel: SpecChannel::UpperBound,
            existing: SpecChannel::Distribution,
        }
    );

    // A distribution followed by a custom set
    let err = ParameterBuilder::new()
        .distribution(Normal::new(0.0, 1.0).unwrap())
        .unwrap()
        .custom_set(UnitSegment)
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::ConflictingSpecification {
            channel: SpecChannel::CustomSet,
            existing: SpecChannel::Distribution,
        }
    );

    // A custom set followed by a bound
    let err = ParameterBuilder::new()
        .custom_set(UnitSegment)
        .unwrap()
        .lower_bound(0.0)
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::ConflictingSpecification {
            channel: SpecChannel::LowerBound,
            existing: SpecChannel::CustomSet,
        }
    );
}

#[test]
fn test_incomplete_declarations_rejected() {
    // Only a lower bound
    let err = ParameterBuilder::new()
        .lower_bound(0.0)
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, BuildError::IncompleteSpecification { .. }));

    // Only an upper bound
    let err = ParameterBuilder::new()
        .upper_bound(1.0)
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, BuildError::IncompleteSpecification { .. }));

    // Nothing at all
    let err = ParameterBuilder::new().resolve().unwrap_err();
    assert!(matches!(err, BuildError::IncompleteSpecification { .. }));
}
