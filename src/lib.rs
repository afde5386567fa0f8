//! # infopt-rs
//!
//! `infopt-rs` is a Rust implementation of the parameter layer of an
//! infinite-dimensional optimization modeling system: the part of a model
//! that declares *infinite parameters* (time, space, random quantities),
//! tracks their identities and names, and prepares them for transcription.
//!
//! The library provides:
//! - Declarative infinite sets: intervals, probability distributions, and
//!   user-defined custom domains behind one builder
//! - A parameter store with stable copyable references, stale-handle
//!   detection, and cached name lookup with ambiguity reporting
//! - Dependency-tuple validation for variables that depend on parameter
//!   groups
//! - Variant-aware scalar bound queries and support-point generation
//! - JSON export of the parameter table
//!
//! ## Basic Usage
//!
//! ```
//! use infopt_rs::model::InfiniteModel;
//! use infopt_rs::parameters::distributions::Normal;
//!
//! let mut model = InfiniteModel::new();
//! let t = model.add_interval_parameter("t", 0.0, 10.0).unwrap();
//! let xi = model
//!     .add_random_parameter("ξ", Normal::new(0.0, 1.0).unwrap())
//!     .unwrap();
//!
//! // Interval parameters can be gridded; distribution supports are sampled.
//! model.fill_in_supports(t, 11, &mut rand::thread_rng()).unwrap();
//! assert_eq!(model.supports(t).unwrap().len(), 11);
//!
//! // Bound queries answer per set variant.
//! assert_eq!(model.upper_bound(t).unwrap(), 10.0);
//! assert_eq!(model.upper_bound(xi).unwrap(), f64::INFINITY);
//! ```

// Public modules
pub mod error;

// Parameter system
pub mod parameters;

// Model (parameter store)
pub mod model;

// Re-exports for convenience
pub use error::{InfOptError, Result};

pub use model::InfiniteModel;

pub use parameters::{InfiniteSet, ParameterBuilder, ParameterRef};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
