//! Parameter and model identity handles
//!
//! This module provides the lightweight reference types used everywhere else
//! in the crate to talk about an infinite parameter without copying its
//! domain: a model identity, a parameter identity, and the `ParameterRef`
//! handle combining the two.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global source of model identities.
///
/// Each `InfiniteModel` draws a fresh id at construction, so references
/// created against one model can never be mistaken for references into
/// another, even across threads.
static NEXT_MODEL_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of an owning model.
///
/// Two models never share an id within one process, which makes
/// `ParameterRef` equality meaningful across models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(u64);

impl ModelId {
    /// Allocate the next unused model id.
    pub(crate) fn next() -> Self {
        ModelId(NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw numeric value of the id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a parameter within its owning model.
///
/// Indices are handed out by a per-model monotonic counter and are never
/// reused, even after the parameter is deleted. A retained index therefore
/// either still names the same parameter or names nothing at all; it can
/// never silently alias a newer parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterIndex(u64);

impl ParameterIndex {
    pub(crate) fn new(value: u64) -> Self {
        ParameterIndex(value)
    }

    /// Get the raw numeric value of the index.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ParameterIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference to an infinite parameter owned by some model.
///
/// The reference is a plain `Copy` handle: it does not own the parameter's
/// domain and does not keep the parameter alive. Two references are equal
/// iff both the owning model id and the parameter index match.
///
/// A reference is *valid* while its index is live in the owning model.
/// Deleting the parameter invalidates outstanding references; the model
/// rejects operations on stale references rather than returning stale data.
/// Use [`InfiniteModel::is_valid`](crate::model::InfiniteModel::is_valid) to
/// test a reference before dereferencing it.
///
/// # Examples
///
/// ```
/// use infopt_rs::model::InfiniteModel;
/// use infopt_rs::parameters::sets::InfiniteSet;
///
/// let mut model = InfiniteModel::new();
/// let t = model.add_named_parameter(InfiniteSet::interval(0.0, 10.0), "t");
///
/// assert!(model.is_valid(t));
/// assert_eq!(model.parameter_name(t).unwrap(), "t");
///
/// model.delete_parameter(t).unwrap();
/// assert!(!model.is_valid(t));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterRef {
    model: ModelId,
    index: ParameterIndex,
}

impl ParameterRef {
    pub(crate) fn new(model: ModelId, index: ParameterIndex) -> Self {
        Self { model, index }
    }

    /// Get the id of the owning model.
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// Get the parameter index within the owning model.
    pub fn index(&self) -> ParameterIndex {
        self.index
    }
}
