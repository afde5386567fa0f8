//! # Infinite Parameter System
//!
//! This module provides the infinite parameter machinery for
//! infinite-dimensional optimization models: domain declaration, identity and
//! naming, dependency validation, and support-point handling.
//!
//! ## Key Features
//!
//! - **Declarative Domains**: Describe a parameter by bounds, by a probability
//!   distribution, or by a custom set through one builder with
//!   mutually exclusive channels
//! - **Stable Identities**: Lightweight copyable references that detect stale
//!   and cross-model use instead of aliasing
//! - **Name Resolution**: Display-name lookup with ambiguity detection, plus
//!   `name[index]` root extraction for array groups
//! - **Dependency Validation**: Tuples of parameter groups checked so that an
//!   array group never mixes parameters from different families
//! - **Bound Semantics**: Scalar bound queries that answer per set variant
//!   rather than pretending every domain has endpoints
//!
//! ## Core Components
//!
//! - [`ParameterBuilder`]: Single entry point for declaring a parameter's domain
//! - [`InfiniteSet`] and [`CustomDomain`]: The domain representation itself
//! - [`ProbabilityDistribution`]: Capability trait behind random domains
//! - [`ParameterRef`]: Copyable handle tying a parameter to its model
//! - [`DependencyTuple`]: Validated parameter dependencies of a variable
//!
//! ## Example Usage
//!
//! ```rust
//! use infopt_rs::model::InfiniteModel;
//! use infopt_rs::parameters::{DependencyGroup, DependencyTuple, ParameterBuilder};
//! use infopt_rs::parameters::distributions::Normal;
//!
//! // Declare a domain through the builder...
//! let set = ParameterBuilder::new()
//!     .lower_bound(0.0)
//!     .unwrap()
//!     .upper_bound(10.0)
//!     .unwrap()
//!     .resolve()
//!     .unwrap();
//!
//! // ...and register parameters with a model.
//! let mut model = InfiniteModel::new();
//! let t = model.add_named_parameter(set, "t");
//! let xi1 = model
//!     .add_random_parameter("ξ[1]", Normal::new(0.0, 1.0).unwrap())
//!     .unwrap();
//! let xi2 = model
//!     .add_random_parameter("ξ[2]", Normal::new(0.0, 1.0).unwrap())
//!     .unwrap();
//!
//! // Variables depend on parameter groups; an array group must stay
//! // within one parameter family.
//! let tuple = DependencyTuple::validated(
//!     &model,
//!     vec![
//!         DependencyGroup::from(t),
//!         DependencyGroup::from(vec![xi1, xi2]),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(tuple.root_names(&model).unwrap(), vec!["t", "ξ"]);
//! ```

pub mod bounds;
pub mod builder;
pub mod dependencies;
pub mod distributions;
pub mod naming;
pub mod reference;
pub mod sets;


// Re-export key types
pub use bounds::BoundError;
pub use builder::{BuildError, ParameterBuilder, SpecChannel};
pub use dependencies::{DependencyError, DependencyGroup, DependencyTuple};
pub use distributions::{DistributionError, DistributionKind, ProbabilityDistribution};
pub use naming::{parse_display_name, root_name, DisplayName};
pub use reference::{ModelId, ParameterIndex, ParameterRef};
pub use sets::{CustomDomain, InfiniteSet, IntervalSet, SetVariant};
