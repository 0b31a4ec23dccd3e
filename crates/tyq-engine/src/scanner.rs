//! Container scans.
//!
//! The scanner composes the single-pair predicates over one or many
//! containers. Entry points are fail-fast: an unknown subject type is a
//! caller error, reported as [`QueryError`] rather than an empty result.
//! An empty container set is not an error; there is simply nothing to scan.

use crate::diagnostics::QueryError;
use crate::matcher::matches_generic_definition;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use tracing::{Level, span, trace};
use tyq_model::{Container, TypeId, TypeSource};

/// Insertion-ordered set of scan results: containers in the order supplied,
/// declaration order within a container.
pub type TypeSet = IndexSet<TypeId, FxBuildHasher>;

/// Scans container sets against one descriptor source.
pub struct ContainerScanner<'a> {
    source: &'a dyn TypeSource,
}

impl<'a> ContainerScanner<'a> {
    pub fn new(source: &'a dyn TypeSource) -> Self {
        Self { source }
    }

    /// Every type across `containers` assignable to `target` under ordinary
    /// (non-generic-aware) assignability.
    ///
    /// Sealed and value types admit no assignable type besides themselves,
    /// so the scan is skipped entirely for them: the result is `{target}`
    /// when some container declares it, otherwise empty. The short-circuit
    /// agrees with the full scan on every input; only the work differs.
    pub fn collect_assignable(
        &self,
        target: TypeId,
        containers: &[Container],
    ) -> Result<TypeSet, QueryError> {
        let descriptor = self
            .source
            .descriptor(target)
            .ok_or(QueryError::UnknownType(target))?;
        let _span = span!(Level::TRACE, "collect_assignable", target = target.0).entered();

        let mut result = TypeSet::default();
        if descriptor.is_sealed() || descriptor.is_value_type() {
            trace!("sealed or value type, skipping container scan");
            if containers.iter().any(|container| container.declares(target)) {
                result.insert(target);
            }
            return Ok(result);
        }

        for container in containers {
            for &candidate in container.types() {
                if self.source.is_assignable_to(candidate, target) {
                    result.insert(candidate);
                }
            }
        }
        trace!(matches = result.len(), "scan complete");
        Ok(result)
    }

    /// Every type across `containers` compatible with some instantiation of
    /// the open generic definition `definition`.
    ///
    /// A `definition` the source knows but which is not an open generic
    /// definition is a malformed query, not a caller bug: the scan is
    /// admitted and returns empty, consistent with the matcher's
    /// total-predicate policy.
    pub fn collect_assignable_to_generic_definition(
        &self,
        definition: TypeId,
        containers: &[Container],
    ) -> Result<TypeSet, QueryError> {
        let descriptor = self
            .source
            .descriptor(definition)
            .ok_or(QueryError::UnknownType(definition))?;
        let _span = span!(
            Level::TRACE,
            "collect_assignable_to_generic_definition",
            definition = definition.0
        )
        .entered();

        let mut result = TypeSet::default();
        if !descriptor.is_generic_definition() {
            trace!("definition is not an open generic definition, returning empty");
            return Ok(result);
        }

        for container in containers {
            for &candidate in container.types() {
                if matches_generic_definition(self.source, candidate, definition) {
                    result.insert(candidate);
                }
            }
        }
        trace!(matches = result.len(), "scan complete");
        Ok(result)
    }
}

#[cfg(test)]
#[path = "../tests/scanner_tests.rs"]
mod tests;
