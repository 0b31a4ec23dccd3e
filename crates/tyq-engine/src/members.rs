//! Member enumeration by category.
//!
//! A mechanical filter over a type's declared members: the caller selects
//! categories (fields, properties, methods) and a binding scope, optionally
//! adds a predicate, and gets the matching members back in fixed category
//! order. Unlike the matcher, an empty category selector here is explicit
//! caller configuration and is reported as an error.

use crate::diagnostics::QueryError;
use bitflags::bitflags;
use tyq_model::{MemberInfo, MemberKind, TypeId, TypeSource};

bitflags! {
    /// Member categories to include in a query.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MemberCategories: u8 {
        const FIELDS = 1 << 0;
        const PROPERTIES = 1 << 1;
        const METHODS = 1 << 2;
    }
}

impl MemberCategories {
    fn admits(self, kind: MemberKind) -> bool {
        match kind {
            MemberKind::Field => self.contains(Self::FIELDS),
            MemberKind::Property => self.contains(Self::PROPERTIES),
            MemberKind::Method => self.contains(Self::METHODS),
        }
    }
}

bitflags! {
    /// Visibility and staticness scope for a member query.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BindingScope: u8 {
        const PUBLIC = 1 << 0;
        const NON_PUBLIC = 1 << 1;
        const INSTANCE = 1 << 2;
        const STATIC = 1 << 3;
    }
}

impl BindingScope {
    fn admits(self, member: &MemberInfo) -> bool {
        let visibility = if member.is_public {
            Self::PUBLIC
        } else {
            Self::NON_PUBLIC
        };
        let binding = if member.is_static {
            Self::STATIC
        } else {
            Self::INSTANCE
        };
        self.contains(visibility) && self.contains(binding)
    }
}

/// Declared members of `type_id` matching `scope` and `categories`,
/// optionally narrowed by `filter`.
///
/// Result order is fixed: fields, then properties, then methods; declaration
/// order within each category.
pub fn members_of(
    source: &dyn TypeSource,
    type_id: TypeId,
    scope: BindingScope,
    categories: MemberCategories,
    filter: Option<&dyn Fn(&MemberInfo) -> bool>,
) -> Result<Vec<MemberInfo>, QueryError> {
    if categories.is_empty() {
        return Err(QueryError::EmptyCategorySelection);
    }
    let descriptor = source
        .descriptor(type_id)
        .ok_or(QueryError::UnknownType(type_id))?;

    let mut result = Vec::new();
    for kind in [MemberKind::Field, MemberKind::Property, MemberKind::Method] {
        if !categories.admits(kind) {
            continue;
        }
        for member in &descriptor.members {
            if member.kind != kind || !scope.admits(member) {
                continue;
            }
            if let Some(filter) = filter
                && !filter(member)
            {
                continue;
            }
            result.push(member.clone());
        }
    }
    Ok(result)
}

#[cfg(test)]
#[path = "../tests/members_tests.rs"]
mod tests;
