//! Type descriptor model for the tyq query engine.
//!
//! This crate provides the read-only view of a runtime's type metadata that
//! the query engine operates on:
//! - Type identity and classification (`TypeId`, `TypeFlags`)
//! - Per-type descriptors (`TypeDescriptor`, `MemberInfo`, `AttributeInfo`)
//! - Deployable-unit grouping (`Container`)
//! - The descriptor-source contract (`TypeSource`)
//! - A concurrent in-memory descriptor source (`TypeRegistry`)
//!
//! The engine never mutates a descriptor source. Descriptors are snapshots:
//! a source hands out cloned values, so a query holds no locks and observes
//! a consistent view for its whole duration.

pub mod container;
pub mod limits;
pub mod registry;
pub mod source;
pub mod types;

pub use container::Container;
pub use registry::TypeRegistry;
pub use source::TypeSource;
pub use types::{AttributeInfo, MemberInfo, MemberKind, TypeDescriptor, TypeFlags, TypeId};
