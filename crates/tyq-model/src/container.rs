//! Containers group declared types into deployable units.
//!
//! A container is the analogue of a compiled module: a bounded set of
//! `TypeId`s in declaration order. The engine never enumerates an ambient
//! "current universe"; callers build the container set once and pass it into
//! every scan entry point.

use crate::types::TypeId;
use serde::{Deserialize, Serialize};

/// A bounded, ordered set of declared types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    name: String,
    types: Vec<TypeId>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a declared type. Declaration order is the order of `declare`
    /// calls and is observable in scan results.
    pub fn declare(&mut self, id: TypeId) {
        self.types.push(id);
    }

    /// Builder-style `declare`.
    pub fn with_type(mut self, id: TypeId) -> Self {
        self.declare(id);
        self
    }

    /// Declared types in declaration order.
    pub fn types(&self) -> &[TypeId] {
        &self.types
    }

    pub fn declares(&self, id: TypeId) -> bool {
        self.types.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
