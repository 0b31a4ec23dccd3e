//! Query engine over runtime type metadata.
//!
//! Given a descriptor source and a set of containers, this crate answers:
//!
//! - **Generic-definition assignability**: is a type compatible with *some*
//!   instantiation of an open generic definition? (`matcher`)
//! - **Container scans**: which types across a container set are assignable
//!   to a target, ordinarily or generically? (`scanner`)
//! - **Hierarchy walks**: a type and its ancestors as a lazy, restartable
//!   sequence. (`hierarchy`)
//! - **Member and decoration enumeration**: filtered views of a type's
//!   declared members and attached attributes. (`members`, `attributes`)
//!
//! Two error tiers, deliberately distinct: the single-pair matcher is a
//! total predicate (malformed inputs yield `false`, never an error) so it
//! composes inside tight scan loops; the scan and member entry points are
//! fail-fast (`Result` with [`QueryError`]) so a caller bug is never
//! silently read as "query ran and found nothing".

pub mod attributes;
pub mod diagnostics;
pub mod hierarchy;
pub mod matcher;
pub mod members;
pub mod scanner;

pub use attributes::{AttributeTarget, decorations_of};
pub use diagnostics::QueryError;
pub use hierarchy::{Hierarchy, hierarchy_of};
pub use matcher::matches_generic_definition;
pub use members::{BindingScope, MemberCategories, members_of};
pub use scanner::{ContainerScanner, TypeSet};

// Test modules: most are loaded by their source files via #[path = "tests/..."]
// declarations. Only include modules here that aren't loaded elsewhere.
#[cfg(test)]
#[path = "../tests/integration_tests.rs"]
mod integration_tests;
