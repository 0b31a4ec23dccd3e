//! The descriptor-source contract.
//!
//! `TypeSource` is the boundary between the query engine and the host
//! runtime's metadata facility. The engine only ever reads through this
//! trait; it never creates, mutates, or destroys type nodes.

use crate::limits::MAX_HIERARCHY_DEPTH;
use crate::types::{TypeDescriptor, TypeId};
use tracing::trace;

/// Read access to a runtime's type metadata.
///
/// Implementations must be safe for concurrent reads; the engine runs any
/// number of queries in parallel against one source and takes no locks of
/// its own. `descriptor` should be O(1) or O(declared-members) — no hidden
/// per-query recomputation.
pub trait TypeSource: Sync {
    /// Snapshot of the descriptor for `id`, or `None` if the source has no
    /// such type.
    fn descriptor(&self, id: TypeId) -> Option<TypeDescriptor>;

    fn contains(&self, id: TypeId) -> bool {
        self.descriptor(id).is_some()
    }

    /// Ordinary (non-generic-aware) assignability: identity, subclassing,
    /// or interface implementation.
    ///
    /// The default implementation derives the relation from descriptors:
    /// walk `source`'s base chain and test identity and directly declared
    /// interfaces at each level. Hosts backed by a native runtime check may
    /// override this with that check; the two must agree on well-formed
    /// metadata.
    fn is_assignable_to(&self, source: TypeId, target: TypeId) -> bool {
        if source == target {
            return true;
        }
        let mut current = Some(source);
        let mut depth = 0usize;
        while let Some(id) = current {
            if id == target {
                return true;
            }
            let Some(descriptor) = self.descriptor(id) else {
                return false;
            };
            if descriptor.direct_interfaces.contains(&target) {
                return true;
            }
            depth += 1;
            if depth >= MAX_HIERARCHY_DEPTH {
                trace!(
                    source = source.0,
                    "base chain exceeded MAX_HIERARCHY_DEPTH, treating as unrelated"
                );
                return false;
            }
            current = descriptor.base_type;
        }
        false
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
