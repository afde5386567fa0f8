//! Integration tests for support-point handling
//!
//! These tests verify manual support management, domain enforcement, and
//! automatic generation per set variant.

use approx::assert_relative_eq;

use crate::test_helpers::{seeded_rng, MatrixNormal, UnitSegment};
use infopt_rs::error::InfOptError;
use infopt_rs::model::{InfiniteModel, ModelError};
use infopt_rs::parameters::distributions::{Beta, Normal};
use infopt_rs::parameters::{BoundError, InfiniteSet};

#[test]
fn test_manual_supports_sorted_and_unique() {
    let mut model = InfiniteModel::new();
    let t = model.add_interval_parameter("t", 0.0, 10.0).unwrap();
    assert!(!model.has_supports(t).unwrap());
    assert!(model.supports(t).unwrap().is_empty());

    model.set_supports(t, &[5.0, 1.0, 5.0, 9.0]).unwrap();
    assert_eq!(model.supports(t).unwrap(), &[1.0, 5.0, 9.0]);

    model.add_supports(t, &[0.0, 5.0, 10.0]).unwrap();
    assert_eq!(model.supports(t).unwrap(), &[0.0, 1.0, 5.0, 9.0, 10.0]);

    model.delete_supports(t).unwrap();
    assert!(!model.has_supports(t).unwrap());
}

#[test]
fn test_supports_must_lie_in_domain() {
    let mut model = InfiniteModel::new();
    let t = model.add_interval_parameter("t", 0.0, 1.0).unwrap();

    let err = model.set_supports(t, &[0.5, -0.5]).unwrap_err();
    assert_eq!(
        err,
        InfOptError::Model(ModelError::SupportOutOfDomain { value: -0.5 })
    );
    assert!(model.set_supports(t, &[f64::INFINITY]).is_err());
    assert!(model.set_supports(t, &[f64::NAN]).is_err());

    // A failed replacement leaves the stored supports alone
    model.set_supports(t, &[0.25]).unwrap();
    assert!(model.add_supports(t, &[0.75, 2.0]).is_err());
    assert_eq!(model.supports(t).unwrap(), &[0.25]);

    // Custom domains enforce their own membership
    let g = model.add_named_parameter(InfiniteSet::custom(UnitSegment), "g");
    assert!(model.set_supports(g, &[0.0, 1.0]).is_ok());
    assert!(model.set_supports(g, &[1.25]).is_err());
}

#[test]
fn test_grid_generation_on_intervals() {
    let mut model = InfiniteModel::new();
    let t = model.add_interval_parameter("t", -1.0, 1.0).unwrap();
    let mut rng = seeded_rng(3);

    model.fill_in_supports(t, 5, &mut rng).unwrap();
    assert_eq!(model.supports(t).unwrap(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);

    // A single requested point sits at the lower endpoint
    let u = model.add_interval_parameter("u", 4.0, 8.0).unwrap();
    model.fill_in_supports(u, 1, &mut rng).unwrap();
    assert_eq!(model.supports(u).unwrap(), &[4.0]);
}

#[test]
fn test_generation_is_a_noop_when_pointless() {
    let mut model = InfiniteModel::new();
    let t = model.add_interval_parameter("t", 0.0, 1.0).unwrap();
    let mut rng = seeded_rng(4);

    // Zero points requested
    model.fill_in_supports(t, 0, &mut rng).unwrap();
    assert!(!model.has_supports(t).unwrap());

    // Existing supports win over generation
    model.set_supports(t, &[0.5]).unwrap();
    model.fill_in_supports(t, 100, &mut rng).unwrap();
    assert_eq!(model.supports(t).unwrap(), &[0.5]);
}

#[test]
fn test_grid_needs_finite_interval() {
    let mut model = InfiniteModel::new();
    let h = model.add_named_parameter(InfiniteSet::interval(0.0, f64::INFINITY), "h");
    let mut rng = seeded_rng(5);

    let err = model.fill_in_supports(h, 10, &mut rng).unwrap_err();
    assert_eq!(
        err,
        InfOptError::Model(ModelError::SupportOutOfDomain {
            value: f64::INFINITY,
        })
    );
    assert!(!model.has_supports(h).unwrap());
}

#[test]
fn test_sampling_generation_on_distributions() {
    let mut model = InfiniteModel::new();
    let xi = model
        .add_random_parameter("ξ", Beta::new(2.0, 5.0).unwrap())
        .unwrap();

    let mut rng = seeded_rng(6);
    model.fill_in_supports(xi, 40, &mut rng).unwrap();
    let points = model.supports(xi).unwrap().to_vec();
    assert!(!points.is_empty());
    assert!(points.iter().all(|&p| (0.0..=1.0).contains(&p)));
    assert!(points.windows(2).all(|w| w[0] < w[1]));

    // 40 draws track the Beta(2, 5) mean of 2/7
    let mean = points.iter().sum::<f64>() / points.len() as f64;
    assert_relative_eq!(mean, 2.0 / 7.0, epsilon = 0.1);

    // Same seed, same draws
    let mut twin = InfiniteModel::new();
    let eta = twin
        .add_random_parameter("η", Beta::new(2.0, 5.0).unwrap())
        .unwrap();
    let mut rng = seeded_rng(6);
    twin.fill_in_supports(eta, 40, &mut rng).unwrap();
    assert_eq!(twin.supports(eta).unwrap(), points.as_slice());

    // Unbounded support still samples fine
    let nu = model
        .add_random_parameter("ν", Normal::new(0.0, 1.0).unwrap())
        .unwrap();
    let mut rng = seeded_rng(7);
    model.fill_in_supports(nu, 25, &mut rng).unwrap();
    assert!(model.supports(nu).unwrap().iter().all(|p| p.is_finite()));
}

#[test]
fn test_sampling_rejected_without_scalar_support() {
    let mut model = InfiniteModel::new();
    let m = model.add_named_parameter(
        InfiniteSet::distribution(MatrixNormal { rows: 2, cols: 2 }),
        "M",
    );
    let mut rng = seeded_rng(8);

    let err = model.fill_in_supports(m, 10, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        InfOptError::Bound(BoundError::IllDefinedBound { .. })
    ));
}

#[test]
fn test_custom_domain_generation() {
    let mut model = InfiniteModel::new();
    let g = model.add_named_parameter(InfiniteSet::custom(UnitSegment), "g");
    let mut rng = seeded_rng(9);

    model.fill_in_supports(g, 3, &mut rng).unwrap();
    assert_eq!(model.supports(g).unwrap(), &[0.0, 0.5, 1.0]);
}
