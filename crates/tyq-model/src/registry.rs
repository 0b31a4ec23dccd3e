//! Concurrent in-memory descriptor source.
//!
//! `TypeRegistry` is the reference `TypeSource` implementation: hosts without
//! a native metadata facility register descriptors here, and tests build
//! fixtures against it. Storage is a `DashMap` keyed by `TypeId` with atomic
//! id allocation, so registration and lookup are safe from any thread.

use crate::source::TypeSource;
use crate::types::{TypeDescriptor, TypeId};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

/// In-memory store of type descriptors.
pub struct TypeRegistry {
    types: DashMap<TypeId, TypeDescriptor>,
    /// Next available `TypeId`.
    next_id: AtomicU32,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            types: DashMap::new(),
            next_id: AtomicU32::new(0),
        }
    }

    /// Allocate a fresh `TypeId`.
    fn allocate(&self) -> TypeId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        TypeId(id)
    }

    /// Register a descriptor and return its `TypeId`.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor claims to be both an open generic definition
    /// and a closed instantiation of one; that pair of facts is contradictory
    /// and always a caller bug.
    pub fn register(&self, descriptor: TypeDescriptor) -> TypeId {
        assert!(
            !(descriptor.is_generic_definition() && descriptor.is_closed_generic()),
            "type `{}` cannot be both an open generic definition and a closed instantiation",
            descriptor.name
        );
        let id = self.allocate();
        trace!(
            type_id = id.0,
            name = %descriptor.name,
            flags = ?descriptor.flags,
            "TypeRegistry::register"
        );
        self.types.insert(id, descriptor);
        id
    }

    /// Get a descriptor snapshot by `TypeId`.
    pub fn get(&self, id: TypeId) -> Option<TypeDescriptor> {
        self.types.get(&id).map(|r| r.clone())
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.types.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeSource for TypeRegistry {
    fn descriptor(&self, id: TypeId) -> Option<TypeDescriptor> {
        self.get(id)
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
