//! Dependency tuples: the parameter groups a variable is declared over
//!
//! Variables, constraints, and measures in an infinite-dimensional model are
//! functions of one or more infinite parameters. Their declarations carry a
//! *dependency tuple*: an ordered sequence of groups, each group either a
//! single parameter or an array of parameters that together form one semantic
//! dimension (e.g. `ξ[1], ξ[2], ξ[3]` as one random vector `ξ`).
//!
//! Downstream code generation derives one display name per group, so a group
//! whose members disagree on their root name would silently corrupt that
//! output. [`DependencyTuple::validated`] is the checkpoint: it accepts a
//! tuple only when every group is well-formed and reduces to exactly one root
//! name, and it reports the first offending group otherwise.

use crate::error::Result;
use crate::model::InfiniteModel;
use crate::parameters::naming::root_name;
use crate::parameters::reference::ParameterRef;
use thiserror::Error;

/// Errors raised while validating a dependency tuple
///
/// `group` fields are zero-based positions within the tuple.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DependencyError {
    #[error("Group {group} of a dependency tuple must be a parameter reference or a non-empty array of parameter references")]
    InvalidParameterType { group: usize },

    #[error("Group {group} of a dependency tuple mixes parameters named '{root}' and '{conflicting}'; an array group must share one root name")]
    MixedParameterNames {
        group: usize,
        root: String,
        conflicting: String,
    },
}

/// One entry of a dependency tuple: a single parameter or an array of
/// parameters sharing a root name.
#[derive(Debug, Clone, PartialEq)]
pub enum DependencyGroup {
    /// One parameter standing alone
    Single(ParameterRef),

    /// An indexed family of parameters forming one semantic dimension
    Array(Vec<ParameterRef>),
}

impl DependencyGroup {
    /// View the group's members as a slice.
    pub fn refs(&self) -> &[ParameterRef] {
        match self {
            Self::Single(pref) => std::slice::from_ref(pref),
            Self::Array(prefs) => prefs.as_slice(),
        }
    }
}

impl From<ParameterRef> for DependencyGroup {
    fn from(pref: ParameterRef) -> Self {
        Self::Single(pref)
    }
}

impl From<Vec<ParameterRef>> for DependencyGroup {
    fn from(prefs: Vec<ParameterRef>) -> Self {
        Self::Array(prefs)
    }
}

impl From<&[ParameterRef]> for DependencyGroup {
    fn from(prefs: &[ParameterRef]) -> Self {
        Self::Array(prefs.to_vec())
    }
}

/// A validated sequence of parameter groups.
///
/// Only constructible through [`validated`](Self::validated), so holding a
/// `DependencyTuple` certifies that every group was well-formed against the
/// model at validation time. Validation is all-or-nothing: the first failing
/// group aborts with an error naming it, and no partial tuple is produced.
///
/// # Examples
///
/// ```
/// use infopt_rs::model::InfiniteModel;
/// use infopt_rs::parameters::dependencies::DependencyTuple;
/// use infopt_rs::parameters::sets::InfiniteSet;
///
/// let mut model = InfiniteModel::new();
/// let t = model.add_named_parameter(InfiniteSet::interval(0.0, 10.0), "t");
/// let xi1 = model.add_named_parameter(InfiniteSet::interval(0.0, 1.0), "ξ[1]");
/// let xi2 = model.add_named_parameter(InfiniteSet::interval(0.0, 1.0), "ξ[2]");
///
/// let tuple =
///     DependencyTuple::validated(&model, vec![t.into(), vec![xi1, xi2].into()]).unwrap();
/// assert_eq!(tuple.root_names(&model).unwrap(), vec!["t", "ξ"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyTuple {
    groups: Vec<DependencyGroup>,
}

impl DependencyTuple {
    /// Validate `groups` against `model` and wrap them as a tuple.
    ///
    /// # Arguments
    ///
    /// * `model` - The model the referenced parameters live in
    /// * `groups` - The ordered parameter groups of the declaration
    ///
    /// # Returns
    ///
    /// The tuple passed through unchanged, or the error describing the first
    /// offending group: [`DependencyError::InvalidParameterType`] for an
    /// empty array group, [`DependencyError::MixedParameterNames`] when an
    /// array group spans more than one root name, and
    /// [`ModelError::InvalidReference`](crate::model::ModelError) when a
    /// member is stale or foreign to `model`.
    pub fn validated(model: &InfiniteModel, groups: Vec<DependencyGroup>) -> Result<Self> {
        for (position, group) in groups.iter().enumerate() {
            group_root(model, position, group)?;
        }
        Ok(Self { groups })
    }

    /// View the validated groups in declaration order.
    pub fn groups(&self) -> &[DependencyGroup] {
        &self.groups
    }

    /// Number of groups in the tuple.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check whether the tuple has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Derive the root name of every group against the model's current
    /// names.
    ///
    /// Re-derives rather than caching, so renames made after validation are
    /// observed. A rename that breaks a group's consistency surfaces here as
    /// [`DependencyError::MixedParameterNames`].
    pub fn root_names(&self, model: &InfiniteModel) -> Result<Vec<String>> {
        self.groups
            .iter()
            .enumerate()
            .map(|(position, group)| group_root(model, position, group))
            .collect()
    }
}

/// Resolve the root name of one group, or the error naming it.
///
/// A single parameter's root is its own display name; an array group strips
/// each member's bracketed index suffix and requires agreement.
fn group_root(model: &InfiniteModel, position: usize, group: &DependencyGroup) -> Result<String> {
    match group {
        DependencyGroup::Single(pref) => Ok(model.parameter_name(*pref)?.to_string()),
        DependencyGroup::Array(prefs) => {
            let first = prefs
                .first()
                .ok_or(DependencyError::InvalidParameterType { group: position })?;
            let root = root_name(model.parameter_name(*first)?).to_string();

            for pref in &prefs[1..] {
                let other = root_name(model.parameter_name(*pref)?);
                if other != root {
                    return Err(DependencyError::MixedParameterNames {
                        group: position,
                        root,
                        conflicting: other.to_string(),
                    }
                    .into());
                }
            }
            Ok(root)
        }
    }
}
