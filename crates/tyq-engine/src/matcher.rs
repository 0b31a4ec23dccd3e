//! Generic-definition compatibility.
//!
//! Decides whether a candidate type is compatible with *any* instantiation
//! of an open generic definition. The predicate is total: malformed inputs
//! (unknown ids, a `definition` that is not an open generic definition)
//! yield `false` rather than an error, so container scans can invoke it per
//! candidate without per-candidate error handling.

use crate::hierarchy::hierarchy_of;
use tyq_model::{TypeId, TypeSource};
use tracing::trace;

/// Is `candidate` compatible with some instantiation of `definition`?
///
/// Both shapes of `definition` walk `candidate`'s hierarchy chain and test
/// each level: a level matches when it is the definition itself or a closed
/// instantiation of it (`generic_definition_of`). An interface definition
/// additionally tests the interfaces directly declared at each level. Only
/// directly declared interfaces are inspected; the chain walk recovers
/// implementations inherited from base classes, and the source's per-level
/// re-listing of inherited interfaces recovers interface-extends-interface
/// chains. A non-generic candidate can therefore only match through the
/// identity fast path.
pub fn matches_generic_definition(
    source: &dyn TypeSource,
    candidate: TypeId,
    definition: TypeId,
) -> bool {
    let Some(definition_descriptor) = source.descriptor(definition) else {
        return false;
    };
    if !definition_descriptor.is_generic_definition() {
        trace!(
            definition = definition.0,
            "not an open generic definition, no match possible"
        );
        return false;
    }
    // A definition trivially matches itself.
    if candidate == definition {
        return true;
    }

    let match_interfaces = definition_descriptor.is_interface();
    for level in hierarchy_of(source, candidate) {
        if level == definition {
            return true;
        }
        let Some(descriptor) = source.descriptor(level) else {
            break;
        };
        if descriptor.generic_definition_of == Some(definition) {
            return true;
        }
        if match_interfaces {
            for &declared in &descriptor.direct_interfaces {
                if declared == definition {
                    return true;
                }
                if let Some(declared_descriptor) = source.descriptor(declared)
                    && declared_descriptor.generic_definition_of == Some(definition)
                {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
#[path = "../tests/matcher_tests.rs"]
mod tests;
