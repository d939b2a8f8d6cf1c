mod filters;
mod matches;
mod path;
mod rules;

use thiserror::Error;

use crate::model::ParentRef;

pub use path::FieldPath;
pub use rules::{validate_route, validate_route_spec};

/// Which consistency rule a violation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Two filter kinds that cannot coexist in one filter list.
    MutuallyExclusiveFilterKinds,
    /// One header name targeted by more than one modification action.
    ConflictingHeaderAction,
    /// A match key repeated within one match block.
    DuplicateMatchKey,
    /// Reported by the parent-ref collaborator, surfaced verbatim.
    ParentRefConflict,
}

/// A single admission violation. Validation never aborts on the first
/// finding; callers always receive the complete list, and an empty list is
/// the only signal that a document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: Invalid value: {value:?}: {message}")]
pub struct ValidationError {
    pub kind: ViolationKind,
    pub path: FieldPath,
    pub value: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        kind: ViolationKind,
        path: FieldPath,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path,
            value: value.into(),
            message: message.into(),
        }
    }
}

/// Uniqueness checking across a spec's parent references lives outside this
/// crate. The orchestrator calls the collaborator exactly once per
/// validation and appends whatever it reports, unmodified.
pub trait ParentRefValidator {
    fn validate_parent_refs(
        &self,
        parent_refs: &[ParentRef],
        path: &FieldPath,
    ) -> Vec<ValidationError>;
}

/// Collaborator stand-in for callers that have no parent-ref checker wired
/// up, e.g. the offline validator binary.
pub struct NoParentRefValidation;

impl ParentRefValidator for NoParentRefValidation {
    fn validate_parent_refs(
        &self,
        _parent_refs: &[ParentRef],
        _path: &FieldPath,
    ) -> Vec<ValidationError> {
        Vec::new()
    }
}
