//! Core metadata types.
//!
//! These are plain-data snapshots of what a runtime's metadata facility knows
//! about one declared type. The engine treats them as immutable for the
//! duration of a query; mutation and lifetime are the descriptor source's
//! concern.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Identity of one declared type within a descriptor source.
///
/// Opaque and unique per type. Equality of two `TypeId`s is the engine's only
/// notion of type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Sentinel for "no such type". A well-formed source never allocates it.
    pub const INVALID: TypeId = TypeId(u32::MAX);
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    /// Classification flags of a type node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u8 {
        /// No type other than itself can be assignable to this type.
        const SEALED = 1 << 0;
        /// Value types are implicitly closed for inheritance as well.
        const VALUE_TYPE = 1 << 1;
        const INTERFACE = 1 << 2;
        /// Open generic type definition (unbound type parameters).
        const GENERIC_DEFINITION = 1 << 3;
    }
}

impl Serialize for TypeFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for TypeFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Category of a declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    Field,
    Property,
    Method,
}

/// One attribute decoration attached to a type or member.
///
/// `attribute_type` is the decoration's own type; filtered decoration queries
/// compare against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeInfo {
    pub attribute_type: TypeId,
}

impl AttributeInfo {
    pub fn new(attribute_type: TypeId) -> Self {
        Self { attribute_type }
    }
}

/// One declared member of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub name: String,
    pub kind: MemberKind,
    pub is_static: bool,
    pub is_public: bool,
    /// Decorations attached directly to this member.
    pub attributes: Vec<AttributeInfo>,
}

impl MemberInfo {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_static: false,
            is_public: true,
            attributes: Vec::new(),
        }
    }

    pub fn non_public(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeInfo) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Read-only view of one declared type.
///
/// Invariants a well-formed source upholds:
/// - The `base_type` chain is acyclic and finite, terminating at a root with
///   `base_type == None`.
/// - Interfaces never carry a class `base_type`; interface inheritance is
///   expressed through `direct_interfaces`.
/// - `generic_definition_of` is `Some` iff this node is a closed
///   instantiation of an open generic definition. It is `None` both for
///   non-generic types and for open definitions themselves, so it is
///   mutually exclusive with the `GENERIC_DEFINITION` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Diagnostic name; identity is carried by `TypeId`, never by name.
    pub name: String,
    pub base_type: Option<TypeId>,
    /// Interfaces declared directly on this type, not inherited ones.
    ///
    /// Sources are expected to re-list inherited interface implementations
    /// at each level of the class hierarchy, matching how runtime metadata
    /// surfaces "directly implemented" interfaces per type.
    pub direct_interfaces: SmallVec<[TypeId; 4]>,
    /// The open definition this node was instantiated from, for closed
    /// generic types only.
    pub generic_definition_of: Option<TypeId>,
    pub flags: TypeFlags,
    pub members: Vec<MemberInfo>,
    /// Decorations attached directly to the type itself.
    pub attributes: Vec<AttributeInfo>,
}

impl TypeDescriptor {
    /// Descriptor for a class with no base (the host supplies the root's
    /// `base_type` linkage when it registers derived types).
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: None,
            direct_interfaces: SmallVec::new(),
            generic_definition_of: None,
            flags: TypeFlags::empty(),
            members: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Descriptor for an interface.
    pub fn interface(name: impl Into<String>) -> Self {
        let mut descriptor = Self::class(name);
        descriptor.flags |= TypeFlags::INTERFACE;
        descriptor
    }

    /// Descriptor for a value type (implicitly sealed at query time).
    pub fn value_type(name: impl Into<String>) -> Self {
        let mut descriptor = Self::class(name);
        descriptor.flags |= TypeFlags::VALUE_TYPE;
        descriptor
    }

    pub fn with_base(mut self, base: TypeId) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn with_interface(mut self, interface: TypeId) -> Self {
        self.direct_interfaces.push(interface);
        self
    }

    /// Mark this node as an open generic type definition.
    pub fn generic_definition(mut self) -> Self {
        self.flags |= TypeFlags::GENERIC_DEFINITION;
        self
    }

    /// Mark this node as a closed instantiation of `definition`.
    pub fn closed_over(mut self, definition: TypeId) -> Self {
        self.generic_definition_of = Some(definition);
        self
    }

    pub fn sealed(mut self) -> Self {
        self.flags |= TypeFlags::SEALED;
        self
    }

    pub fn with_member(mut self, member: MemberInfo) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeInfo) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn is_sealed(&self) -> bool {
        self.flags.contains(TypeFlags::SEALED)
    }

    pub fn is_value_type(&self) -> bool {
        self.flags.contains(TypeFlags::VALUE_TYPE)
    }

    pub fn is_interface(&self) -> bool {
        self.flags.contains(TypeFlags::INTERFACE)
    }

    pub fn is_generic_definition(&self) -> bool {
        self.flags.contains(TypeFlags::GENERIC_DEFINITION)
    }

    pub fn is_closed_generic(&self) -> bool {
        self.generic_definition_of.is_some()
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
