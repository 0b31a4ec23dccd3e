//! Centralized limits for metadata traversals.
//!
//! A well-formed descriptor source presents acyclic, finite base-type chains,
//! so traversals terminate without any limit. These caps exist as a backstop
//! against a misbehaving source: a base-chain cycle would otherwise turn a
//! lazy hierarchy walk into an infinite loop.

/// Maximum number of levels a hierarchy walk will visit before bailing out.
///
/// Real type hierarchies are shallow (tens of levels at the extreme); a walk
/// that reaches this depth is following a base-chain cycle in a malformed
/// source. The walker stops and logs rather than looping forever.
pub const MAX_HIERARCHY_DEPTH: usize = 512;
