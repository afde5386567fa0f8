//! Infinite model implementation
//!
//! This module provides the [`InfiniteModel`] struct: the per-model store for
//! infinite parameters. It owns each parameter's domain, display name, and
//! support points, hands out lightweight [`ParameterRef`] handles, resolves
//! names through a lazily rebuilt index, and exposes the bound accessors
//! against the set currently held for each parameter.

use crate::error::Result;
use crate::parameters::bounds::BoundError;
use crate::parameters::builder::ParameterBuilder;
use crate::parameters::distributions::{DistributionKind, ProbabilityDistribution};
use crate::parameters::reference::{ModelId, ParameterIndex, ParameterRef};
use crate::parameters::sets::{InfiniteSet, IntervalSet, SetVariant};
use ndarray::Array1;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when operating on a model's parameter store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid parameter reference: index {index} in model {model}")]
    InvalidReference {
        model: ModelId,
        index: ParameterIndex,
    },

    #[error("Name '{name}' matches more than one parameter; rename one before looking it up")]
    AmbiguousName { name: String },

    #[error("Support point {value} is outside the parameter's domain")]
    SupportOutOfDomain { value: f64 },
}

/// Resolution of one display name in the rebuilt name index.
#[derive(Debug, Clone, Copy, PartialEq)]
enum NameMatch {
    /// Exactly one live parameter carries the name
    Unique(ParameterIndex),

    /// Two or more live parameters share the name
    Ambiguous,
}

/// Storage for one infinite parameter: its domain and its support points.
///
/// `supports` is kept sorted ascending and deduplicated; empty until points
/// are supplied or generated.
#[derive(Debug)]
struct InfiniteParameter {
    set: InfiniteSet,
    supports: Vec<f64>,
}

/// A model of an infinite-dimensional optimization problem, reduced here to
/// its parameter store.
///
/// Parameters are addressed by [`ParameterRef`] handles. Identities are
/// allocated from a monotonic per-model counter and never reused, so a handle
/// kept across a deletion turns stale and is *detected* (operations fail with
/// [`ModelError::InvalidReference`]) rather than silently aliasing a newer
/// parameter. Every model draws a globally unique id at creation, which makes
/// handles from different models mutually invalid.
///
/// All operations are synchronous and single-threaded; share a model across
/// threads only with external synchronization.
///
/// # Examples
///
/// ```
/// use infopt_rs::model::InfiniteModel;
/// use infopt_rs::parameters::sets::InfiniteSet;
///
/// let mut model = InfiniteModel::new();
/// let t = model.add_named_parameter(InfiniteSet::interval(0.0, 24.0), "t");
///
/// assert!(model.is_valid(t));
/// assert_eq!(model.lower_bound(t).unwrap(), 0.0);
/// assert_eq!(model.parameter_by_name("t").unwrap(), Some(t));
/// ```
#[derive(Debug)]
pub struct InfiniteModel {
    /// Globally unique identity of this model
    id: ModelId,

    /// Map of parameter identities to their storage
    parameters: HashMap<ParameterIndex, InfiniteParameter>,

    /// Map of parameter identities to display names
    parameter_names: HashMap<ParameterIndex, String>,

    /// Lazily rebuilt name index; `None` marks it stale
    name_index: Option<HashMap<String, NameMatch>>,

    /// Next identity to hand out; never decremented
    next_parameter_index: u64,
}

/// Build the error for a reference that is stale or foreign to the store.
fn invalid_reference(pref: ParameterRef) -> crate::error::InfOptError {
    ModelError::InvalidReference {
        model: pref.model(),
        index: pref.index(),
    }
    .into()
}

/// Reject points that are non-finite or outside the set's domain.
fn validate_points(set: &InfiniteSet, points: &[f64]) -> Result<()> {
    for &value in points {
        if !value.is_finite() || !set.contains(value)? {
            return Err(ModelError::SupportOutOfDomain { value }.into());
        }
    }
    Ok(())
}

/// Sort ascending and drop duplicates.
fn normalized(mut points: Vec<f64>) -> Vec<f64> {
    points.sort_by(f64::total_cmp);
    points.dedup();
    points
}

impl InfiniteModel {
    /// Create a new empty model.
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    ///
    /// let model = InfiniteModel::new();
    /// assert_eq!(model.num_parameters(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            id: ModelId::next(),
            parameters: HashMap::new(),
            parameter_names: HashMap::new(),
            name_index: None,
            next_parameter_index: 0,
        }
    }

    /// Get the globally unique identity of this model.
    pub fn id(&self) -> ModelId {
        self.id
    }

    /// Add an unnamed parameter over `set`.
    ///
    /// Equivalent to [`add_named_parameter`](Self::add_named_parameter) with
    /// an empty display name.
    pub fn add_parameter(&mut self, set: InfiniteSet) -> ParameterRef {
        self.add_named_parameter(set, "")
    }

    /// Add a parameter over `set` with the given display name.
    ///
    /// Allocates the next identity, stores the set with no supports, and
    /// invalidates the name index. Names are not required to be unique;
    /// lookup of a duplicated name fails with [`ModelError::AmbiguousName`]
    /// until a rename resolves it.
    ///
    /// # Arguments
    ///
    /// * `set` - The domain the parameter ranges over
    /// * `name` - Display name, e.g. `"t"` or `"ξ[1]"`
    ///
    /// # Returns
    ///
    /// A reference to the new parameter
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    /// use infopt_rs::parameters::sets::InfiniteSet;
    ///
    /// let mut model = InfiniteModel::new();
    /// let t = model.add_named_parameter(InfiniteSet::interval(0.0, 1.0), "t");
    /// assert_eq!(model.parameter_name(t).unwrap(), "t");
    /// ```
    pub fn add_named_parameter(
        &mut self,
        set: InfiniteSet,
        name: impl Into<String>,
    ) -> ParameterRef {
        let index = ParameterIndex::new(self.next_parameter_index);
        self.next_parameter_index += 1;

        self.parameters.insert(
            index,
            InfiniteParameter {
                set,
                supports: Vec::new(),
            },
        );
        self.parameter_names.insert(index, name.into());
        self.name_index = None;

        ParameterRef::new(self.id, index)
    }

    /// Add a parameter ranging over the interval `[lower, upper]`.
    ///
    /// Routes through [`ParameterBuilder`], so the bounds are validated the
    /// same way keyword-style declarations are (NaN is rejected).
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    ///
    /// let mut model = InfiniteModel::new();
    /// let t = model.add_interval_parameter("t", 0.0, 10.0).unwrap();
    /// assert_eq!(model.upper_bound(t).unwrap(), 10.0);
    /// ```
    pub fn add_interval_parameter(
        &mut self,
        name: impl Into<String>,
        lower: f64,
        upper: f64,
    ) -> Result<ParameterRef> {
        let set = ParameterBuilder::new()
            .lower_bound(lower)?
            .upper_bound(upper)?
            .resolve()?;
        Ok(self.add_named_parameter(set, name))
    }

    /// Add a parameter ranging over the support of `dist`.
    ///
    /// Routes through [`ParameterBuilder`], so matrix-variate distributions
    /// are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    /// use infopt_rs::parameters::distributions::Normal;
    ///
    /// let mut model = InfiniteModel::new();
    /// let xi = model
    ///     .add_random_parameter("ξ", Normal::new(0.0, 1.0).unwrap())
    ///     .unwrap();
    /// assert!(model.has_lower_bound(xi).unwrap());
    /// ```
    pub fn add_random_parameter(
        &mut self,
        name: impl Into<String>,
        dist: impl ProbabilityDistribution + 'static,
    ) -> Result<ParameterRef> {
        let set = ParameterBuilder::new().distribution(dist)?.resolve()?;
        Ok(self.add_named_parameter(set, name))
    }

    /// Check whether `pref` refers to a live parameter of this model.
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    /// use infopt_rs::parameters::sets::InfiniteSet;
    ///
    /// let mut model = InfiniteModel::new();
    /// let t = model.add_parameter(InfiniteSet::interval(0.0, 1.0));
    /// assert!(model.is_valid(t));
    ///
    /// model.delete_parameter(t).unwrap();
    /// assert!(!model.is_valid(t));
    /// ```
    pub fn is_valid(&self, pref: ParameterRef) -> bool {
        pref.model() == self.id && self.parameters.contains_key(&pref.index())
    }

    /// Delete the parameter behind `pref`.
    ///
    /// Outstanding references to it become stale and are rejected by every
    /// subsequent operation. The identity is never reused. Detaching the
    /// parameter from variables or measures that referenced it is the
    /// caller's responsibility.
    ///
    /// # Returns
    ///
    /// `Ok(())`, or [`ModelError::InvalidReference`] when `pref` is already
    /// stale or belongs to another model
    pub fn delete_parameter(&mut self, pref: ParameterRef) -> Result<()> {
        if !self.is_valid(pref) {
            return Err(invalid_reference(pref));
        }
        self.parameters.remove(&pref.index());
        self.parameter_names.remove(&pref.index());
        self.name_index = None;
        Ok(())
    }

    /// Get the display name of a parameter.
    pub fn parameter_name(&self, pref: ParameterRef) -> Result<&str> {
        if pref.model() != self.id {
            return Err(invalid_reference(pref));
        }
        self.parameter_names
            .get(&pref.index())
            .map(String::as_str)
            .ok_or_else(|| invalid_reference(pref))
    }

    /// Rename a parameter.
    ///
    /// O(1): the name index is only marked stale, not rebuilt.
    pub fn set_parameter_name(
        &mut self,
        pref: ParameterRef,
        name: impl Into<String>,
    ) -> Result<()> {
        if !self.is_valid(pref) {
            return Err(invalid_reference(pref));
        }
        self.parameter_names.insert(pref.index(), name.into());
        self.name_index = None;
        Ok(())
    }

    /// Look up a parameter by display name.
    ///
    /// Rebuilds the name index if it is stale (hence `&mut self`); the
    /// rebuild is a single pass over all live parameters.
    ///
    /// # Returns
    ///
    /// `Ok(Some(ref))` for a unique match, `Ok(None)` when no parameter
    /// carries the name, or [`ModelError::AmbiguousName`] when several do
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    /// use infopt_rs::parameters::sets::InfiniteSet;
    ///
    /// let mut model = InfiniteModel::new();
    /// let t = model.add_named_parameter(InfiniteSet::interval(0.0, 1.0), "t");
    ///
    /// assert_eq!(model.parameter_by_name("t").unwrap(), Some(t));
    /// assert_eq!(model.parameter_by_name("x").unwrap(), None);
    /// ```
    pub fn parameter_by_name(&mut self, name: &str) -> Result<Option<ParameterRef>> {
        if self.name_index.is_none() {
            self.rebuild_name_index();
        }
        match self.name_index.as_ref().and_then(|index| index.get(name)) {
            None => Ok(None),
            Some(NameMatch::Unique(index)) => Ok(Some(ParameterRef::new(self.id, *index))),
            Some(NameMatch::Ambiguous) => Err(ModelError::AmbiguousName {
                name: name.to_string(),
            }
            .into()),
        }
    }

    /// Get references to all live parameters in ascending identity order.
    ///
    /// The order is independent of insertion or deletion history, so
    /// downstream iteration (e.g. transcription) is deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    /// use infopt_rs::parameters::sets::InfiniteSet;
    ///
    /// let mut model = InfiniteModel::new();
    /// let a = model.add_parameter(InfiniteSet::interval(0.0, 1.0));
    /// let b = model.add_parameter(InfiniteSet::interval(0.0, 1.0));
    /// assert_eq!(model.all_parameters(), vec![a, b]);
    /// ```
    pub fn all_parameters(&self) -> Vec<ParameterRef> {
        let mut indices: Vec<ParameterIndex> = self.parameters.keys().copied().collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|index| ParameterRef::new(self.id, index))
            .collect()
    }

    /// Get the number of live parameters.
    pub fn num_parameters(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the model has no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Get the infinite set a parameter ranges over.
    pub fn infinite_set(&self, pref: ParameterRef) -> Result<&InfiniteSet> {
        Ok(&self.live(pref)?.set)
    }

    /// Replace a parameter's infinite set wholesale.
    ///
    /// Identity and name are untouched. Supports are cleared: points stored
    /// for the old set may lie outside the new one.
    pub fn update_infinite_set(&mut self, pref: ParameterRef, set: InfiniteSet) -> Result<()> {
        let parameter = self.live_mut(pref)?;
        parameter.set = set;
        parameter.supports.clear();
        Ok(())
    }

    /// Check whether a parameter's set carries a well-defined lower bound.
    pub fn has_lower_bound(&self, pref: ParameterRef) -> Result<bool> {
        Ok(self.infinite_set(pref)?.has_lower_bound()?)
    }

    /// Check whether a parameter's set carries a well-defined upper bound.
    pub fn has_upper_bound(&self, pref: ParameterRef) -> Result<bool> {
        Ok(self.infinite_set(pref)?.has_upper_bound()?)
    }

    /// Get the lower bound of a parameter's set.
    pub fn lower_bound(&self, pref: ParameterRef) -> Result<f64> {
        Ok(self.infinite_set(pref)?.lower_bound()?)
    }

    /// Get the upper bound of a parameter's set.
    pub fn upper_bound(&self, pref: ParameterRef) -> Result<f64> {
        Ok(self.infinite_set(pref)?.upper_bound()?)
    }

    /// Replace the lower bound of a parameter's interval set.
    ///
    /// The stored set is replaced by a new interval with the upper endpoint
    /// kept, and supports are cleared. Distribution and custom sets fail with
    /// [`BoundError::UnsupportedMutation`].
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    /// use infopt_rs::parameters::sets::InfiniteSet;
    ///
    /// let mut model = InfiniteModel::new();
    /// let t = model.add_interval_parameter("t", 0.0, 10.0).unwrap();
    ///
    /// model.set_lower_bound(t, 2.0).unwrap();
    /// assert_eq!(model.infinite_set(t).unwrap(), &InfiniteSet::interval(2.0, 10.0));
    /// ```
    pub fn set_lower_bound(&mut self, pref: ParameterRef, value: f64) -> Result<()> {
        let replaced = self.infinite_set(pref)?.with_lower_bound(value)?;
        self.update_infinite_set(pref, replaced)
    }

    /// Replace the upper bound of a parameter's interval set.
    ///
    /// Same rules as [`set_lower_bound`](Self::set_lower_bound).
    pub fn set_upper_bound(&mut self, pref: ParameterRef, value: f64) -> Result<()> {
        let replaced = self.infinite_set(pref)?.with_upper_bound(value)?;
        self.update_infinite_set(pref, replaced)
    }

    /// Get a parameter's support points (sorted ascending, deduplicated).
    pub fn supports(&self, pref: ParameterRef) -> Result<&[f64]> {
        Ok(self.live(pref)?.supports.as_slice())
    }

    /// Check whether a parameter has any support points.
    pub fn has_supports(&self, pref: ParameterRef) -> Result<bool> {
        Ok(!self.live(pref)?.supports.is_empty())
    }

    /// Replace a parameter's support points.
    ///
    /// Points must be finite and inside the parameter's domain; the stored
    /// list is sorted and deduplicated. Parameters over multivariate
    /// distributions have no scalar supports, so the membership check fails
    /// with [`BoundError::IllDefinedBound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    ///
    /// let mut model = InfiniteModel::new();
    /// let t = model.add_interval_parameter("t", 0.0, 1.0).unwrap();
    ///
    /// model.set_supports(t, &[0.5, 0.0, 1.0, 0.5]).unwrap();
    /// assert_eq!(model.supports(t).unwrap(), &[0.0, 0.5, 1.0]);
    /// ```
    pub fn set_supports(&mut self, pref: ParameterRef, points: &[f64]) -> Result<()> {
        let parameter = self.live_mut(pref)?;
        validate_points(&parameter.set, points)?;
        parameter.supports = normalized(points.to_vec());
        Ok(())
    }

    /// Add support points to a parameter, keeping the list sorted and
    /// deduplicated.
    ///
    /// Same domain rules as [`set_supports`](Self::set_supports).
    pub fn add_supports(&mut self, pref: ParameterRef, points: &[f64]) -> Result<()> {
        let parameter = self.live_mut(pref)?;
        validate_points(&parameter.set, points)?;

        let mut merged = parameter.supports.clone();
        merged.extend_from_slice(points);
        parameter.supports = normalized(merged);
        Ok(())
    }

    /// Remove all support points of a parameter.
    pub fn delete_supports(&mut self, pref: ParameterRef) -> Result<()> {
        self.live_mut(pref)?.supports.clear();
        Ok(())
    }

    /// Generate `count` support points from the parameter's set.
    ///
    /// A no-op when the parameter already has supports or `count` is zero.
    /// Generation depends on the set variant:
    ///
    /// - interval: an inclusive evenly spaced grid (both endpoints must be
    ///   finite, otherwise [`ModelError::SupportOutOfDomain`]);
    /// - univariate distribution: `count` draws from `rng`;
    /// - multivariate distribution: fails with [`BoundError::IllDefinedBound`];
    /// - custom: whatever [`CustomDomain::generate_supports`] produces,
    ///   subject to the usual membership check.
    ///
    /// [`CustomDomain::generate_supports`]: crate::parameters::sets::CustomDomain::generate_supports
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    /// use rand::thread_rng;
    ///
    /// let mut model = InfiniteModel::new();
    /// let t = model.add_interval_parameter("t", 0.0, 10.0).unwrap();
    ///
    /// model.fill_in_supports(t, 11, &mut thread_rng()).unwrap();
    /// assert_eq!(model.supports(t).unwrap().len(), 11);
    /// assert_eq!(model.supports(t).unwrap()[0], 0.0);
    /// assert_eq!(model.supports(t).unwrap()[10], 10.0);
    /// ```
    pub fn fill_in_supports(
        &mut self,
        pref: ParameterRef,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        let parameter = self.live(pref)?;
        if !parameter.supports.is_empty() || count == 0 {
            return Ok(());
        }

        let points: Vec<f64> = match &parameter.set {
            InfiniteSet::Interval(interval) => {
                for endpoint in [interval.lower_bound, interval.upper_bound] {
                    if !endpoint.is_finite() {
                        return Err(ModelError::SupportOutOfDomain { value: endpoint }.into());
                    }
                }
                Array1::linspace(interval.lower_bound, interval.upper_bound, count).to_vec()
            }
            InfiniteSet::Distribution(dist) => {
                if dist.support_bounds().is_none() {
                    return Err(BoundError::IllDefinedBound {
                        set: SetVariant::Distribution,
                        reason: format!("{} distribution", dist.kind()),
                    }
                    .into());
                }
                dist.sample(rng, count).column(0).to_vec()
            }
            InfiniteSet::Custom(domain) => domain.generate_supports(count).to_vec(),
        };

        self.set_supports(pref, &points)
    }

    /// Get the live parameter behind `pref`, or the stale-reference error.
    fn live(&self, pref: ParameterRef) -> Result<&InfiniteParameter> {
        if pref.model() != self.id {
            return Err(invalid_reference(pref));
        }
        self.parameters
            .get(&pref.index())
            .ok_or_else(|| invalid_reference(pref))
    }

    fn live_mut(&mut self, pref: ParameterRef) -> Result<&mut InfiniteParameter> {
        if pref.model() != self.id {
            return Err(invalid_reference(pref));
        }
        self.parameters
            .get_mut(&pref.index())
            .ok_or_else(|| invalid_reference(pref))
    }

    /// Rebuild the name index from the live names in one pass.
    fn rebuild_name_index(&mut self) {
        let mut index = HashMap::with_capacity(self.parameter_names.len());
        for (&parameter, name) in &self.parameter_names {
            index
                .entry(name.clone())
                .and_modify(|entry| *entry = NameMatch::Ambiguous)
                .or_insert(NameMatch::Unique(parameter));
        }
        self.name_index = Some(index);
    }
}

impl Default for InfiniteModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable summary of a parameter's domain.
///
/// Dynamic payloads (distribution and custom objects) cannot be reconstructed
/// from JSON, so they are summarized rather than round-tripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainRecord {
    /// A closed interval with its endpoints
    Interval(IntervalSet),

    /// A distribution, reduced to its kind and dimension
    Distribution {
        kind: DistributionKind,
        dimension: usize,
    },

    /// A custom domain, fully opaque
    Custom,
}

/// Serializable snapshot of one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    /// Identity within the owning model
    pub index: u64,

    /// Display name
    pub name: String,

    /// Domain summary
    pub domain: DomainRecord,

    /// Support points, sorted ascending
    pub supports: Vec<f64>,
}

fn domain_record(set: &InfiniteSet) -> DomainRecord {
    match set {
        InfiniteSet::Interval(interval) => DomainRecord::Interval(*interval),
        InfiniteSet::Distribution(dist) => DomainRecord::Distribution {
            kind: dist.kind(),
            dimension: dist.dimension(),
        },
        InfiniteSet::Custom(_) => DomainRecord::Custom,
    }
}

/// Error that can occur during serialization/deserialization
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl InfiniteModel {
    /// Snapshot all parameters as records, in ascending identity order.
    pub fn parameter_records(&self) -> Vec<ParameterRecord> {
        let mut records: Vec<ParameterRecord> = self
            .parameters
            .iter()
            .map(|(&index, parameter)| ParameterRecord {
                index: index.value(),
                name: self
                    .parameter_names
                    .get(&index)
                    .cloned()
                    .unwrap_or_default(),
                domain: domain_record(&parameter.set),
                supports: parameter.supports.clone(),
            })
            .collect();
        records.sort_by_key(|record| record.index);
        records
    }

    /// Serialize the parameter records to a JSON string
    ///
    /// # Returns
    ///
    /// A string containing the JSON representation of the parameter table,
    /// or an error if the serialization failed
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    ///
    /// let mut model = InfiniteModel::new();
    /// model.add_interval_parameter("t", 0.0, 1.0).unwrap();
    ///
    /// let json = model.to_json().unwrap();
    /// assert!(json.contains("\"t\""));
    /// ```
    pub fn to_json(&self) -> Result<String, SerializationError> {
        let json = serde_json::to_string_pretty(&self.parameter_records())?;
        Ok(json)
    }

    /// Save the parameter records to a JSON file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file to save the records to
    ///
    /// # Returns
    ///
    /// `Ok(())` if the records were saved successfully, or an error if the
    /// save failed
    ///
    /// # Examples
    ///
    /// ```
    /// use infopt_rs::model::InfiniteModel;
    ///
    /// let mut model = InfiniteModel::new();
    /// model.add_interval_parameter("t", 0.0, 1.0).unwrap();
    ///
    /// let path = std::env::temp_dir().join("infopt_parameters.json");
    /// model.save_json(&path).unwrap();
    /// ```
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), SerializationError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &self.parameter_records())?;
        Ok(())
    }
}
