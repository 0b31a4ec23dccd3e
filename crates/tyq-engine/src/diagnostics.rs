//! Error reporting for fail-fast query entry points.
//!
//! Only the scan and member entry points produce these; the matcher predicate
//! is total and never errors (see the crate docs for the two-tier policy).

use std::fmt;
use tyq_model::TypeId;

/// A caller error detected at a query entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The subject type is not present in the descriptor source.
    UnknownType(TypeId),
    /// A member index points past the end of the owner's member list.
    UnknownMember { owner: TypeId, index: usize },
    /// The member-category selector was empty; the caller must pick at least
    /// one of fields, properties, methods.
    EmptyCategorySelection,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnknownType(id) => {
                write!(f, "type {id} is not known to the descriptor source")
            }
            QueryError::UnknownMember { owner, index } => {
                write!(f, "type {owner} has no member at index {index}")
            }
            QueryError::EmptyCategorySelection => {
                write!(f, "member query requires at least one member category")
            }
        }
    }
}

impl std::error::Error for QueryError {}
