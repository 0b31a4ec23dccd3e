//! Lazy type-hierarchy traversal.
//!
//! `hierarchy_of` yields a type and then each ancestor along the `base_type`
//! chain. The walk is an explicit cursor rather than recursion, so stack
//! depth is independent of hierarchy depth, and each walker owns its cursor:
//! two walks over the same type never share state.

use tyq_model::limits::MAX_HIERARCHY_DEPTH;
use tyq_model::{TypeId, TypeSource};
use tracing::trace;

/// Start a fresh hierarchy walk at `start`.
pub fn hierarchy_of(source: &dyn TypeSource, start: TypeId) -> Hierarchy<'_> {
    Hierarchy {
        source,
        start,
        cursor: Some(start),
        depth: 0,
    }
}

/// Iterator over a type and its ancestors, starting type first.
///
/// Yields `start` itself even when the source has no descriptor for it; the
/// walk simply ends there. Equality compares starting types only: two
/// walkers over the same start are the same walker regardless of how far
/// either has been driven.
#[derive(Clone)]
pub struct Hierarchy<'a> {
    source: &'a dyn TypeSource,
    start: TypeId,
    cursor: Option<TypeId>,
    depth: usize,
}

impl Hierarchy<'_> {
    pub fn start(&self) -> TypeId {
        self.start
    }
}

impl PartialEq for Hierarchy<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
    }
}

impl Eq for Hierarchy<'_> {}

impl std::fmt::Debug for Hierarchy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hierarchy")
            .field("start", &self.start)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl Iterator for Hierarchy<'_> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        let id = self.cursor?;
        self.depth += 1;
        if self.depth >= MAX_HIERARCHY_DEPTH {
            // Base-chain cycle in a malformed source; stop instead of
            // looping forever.
            trace!(
                start = self.start.0,
                "hierarchy walk exceeded MAX_HIERARCHY_DEPTH, terminating"
            );
            self.cursor = None;
        } else {
            self.cursor = self
                .source
                .descriptor(id)
                .and_then(|descriptor| descriptor.base_type);
        }
        Some(id)
    }
}

#[cfg(test)]
#[path = "../tests/hierarchy_tests.rs"]
mod tests;
