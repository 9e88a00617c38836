//! Auxiliary type descriptions.
//!
//! An [`AuxiliaryTypeSpec`] is what one generation call produces: a name, a
//! target version, type modifiers, extra fields, and the accessors requested
//! while describing the type. It is created at the start of the call, grows
//! only through the [`AccessorFactory`], and is frozen once handed out.
//!
//! Specs compare structurally. Two generations with the same name, version,
//! modifiers and the same ordered members are the same auxiliary type, and
//! callers use that to avoid emitting it twice.

use relay_ir::{ClassFileVersion, FieldDescriptor, MethodDescriptor, Modifiers, TypeName};

use crate::{AccessorFactory, AuxError, ForwardingBody, ResolutionPolicy};

/// Cache key for accessor deduplication: the requested target plus the
/// policy it was requested under.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessorRequest {
    pub target: MethodDescriptor,
    pub policy: ResolutionPolicy,
}

/// A generated forwarding method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessorMethod {
    /// The accessor as callers see it (declared on the auxiliary type).
    pub descriptor: MethodDescriptor,
    /// The request that created this accessor.
    pub request: AccessorRequest,
    /// The method the body invokes.
    pub resolved: MethodDescriptor,
    pub body: ForwardingBody,
}

/// A finished (or in-progress) auxiliary type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AuxiliaryTypeSpec {
    pub(crate) name: TypeName,
    pub(crate) version: ClassFileVersion,
    pub(crate) modifiers: Modifiers,
    pub(crate) fields: Vec<FieldDescriptor>,
    pub(crate) accessors: Vec<AccessorMethod>,
}

impl AuxiliaryTypeSpec {
    pub(crate) fn new(name: TypeName, version: ClassFileVersion, modifiers: Modifiers) -> Self {
        Self {
            name,
            version,
            modifiers,
            fields: Vec::new(),
            accessors: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    #[inline]
    pub fn version(&self) -> ClassFileVersion {
        self.version
    }

    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Accessors in the order they were first requested.
    #[inline]
    pub fn accessors(&self) -> &[AccessorMethod] {
        &self.accessors
    }

    /// Structural equivalence over name, version, modifiers and the ordered
    /// member lists. Same relation as `==`.
    ///
    /// Accessors compare whole: descriptor, originating request and body.
    /// Two specs whose accessor descriptors agree but whose requests used
    /// different policies or resolved to different methods are not
    /// equivalent, so they never share an emitted type.
    pub fn is_equivalent(&self, other: &AuxiliaryTypeSpec) -> bool {
        self.name == other.name
            && self.version == other.version
            && self.modifiers == other.modifiers
            && self.fields == other.fields
            && self.accessors == other.accessors
    }
}

/// A description of an auxiliary type.
///
/// `describe` is called once per generation with a fresh factory bound to
/// the spec under construction. Implementations are `Eq + Hash` so that two
/// equal descriptions can share one generated type.
pub trait AuxiliaryType: Eq + std::hash::Hash {
    /// Request accessors and declare members on the type being built.
    ///
    /// # Errors
    ///
    /// Any error from the factory; it aborts the generation.
    fn describe(&self, factory: &mut AccessorFactory<'_>) -> Result<(), AuxError>;
}

/// An auxiliary type that only bridges a fixed list of methods.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AccessorBundle {
    requests: Vec<AccessorRequest>,
}

impl AccessorBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target to bridge.
    #[must_use]
    pub fn with(mut self, target: MethodDescriptor, policy: ResolutionPolicy) -> Self {
        self.requests.push(AccessorRequest { target, policy });
        self
    }

    pub fn requests(&self) -> &[AccessorRequest] {
        &self.requests
    }
}

impl AuxiliaryType for AccessorBundle {
    fn describe(&self, factory: &mut AccessorFactory<'_>) -> Result<(), AuxError> {
        for request in &self.requests {
            factory.require_accessor(&request.target, request.policy)?;
        }
        Ok(())
    }
}
