//! Attribute-decoration enumeration.
//!
//! Types and members both carry decorations; a decoration query names its
//! target and optionally filters by the decoration's own type. The filter
//! admits a decoration when its type equals the filter type or is ordinarily
//! assignable to it, so filtering by a decoration base class finds derived
//! decorations too.

use crate::diagnostics::QueryError;
use tyq_model::{AttributeInfo, TypeId, TypeSource};

/// A metadata-bearing entity that can carry decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeTarget {
    Type(TypeId),
    /// A member, addressed by its owner and declaration index.
    Member(TypeId, usize),
}

/// Decorations attached to `target`, optionally narrowed to those whose
/// type is assignable to `attribute_filter`.
pub fn decorations_of(
    source: &dyn TypeSource,
    target: AttributeTarget,
    attribute_filter: Option<TypeId>,
) -> Result<Vec<AttributeInfo>, QueryError> {
    let attributes = match target {
        AttributeTarget::Type(id) => {
            source
                .descriptor(id)
                .ok_or(QueryError::UnknownType(id))?
                .attributes
        }
        AttributeTarget::Member(owner, index) => {
            let descriptor = source
                .descriptor(owner)
                .ok_or(QueryError::UnknownType(owner))?;
            descriptor
                .members
                .get(index)
                .ok_or(QueryError::UnknownMember { owner, index })?
                .attributes
                .clone()
        }
    };

    let result = match attribute_filter {
        None => attributes,
        Some(filter) => attributes
            .into_iter()
            .filter(|attribute| source.is_assignable_to(attribute.attribute_type, filter))
            .collect(),
    };
    Ok(result)
}

#[cfg(test)]
#[path = "../tests/attributes_tests.rs"]
mod tests;
