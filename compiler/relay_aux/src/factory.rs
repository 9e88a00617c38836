//! Accessor factory.
//!
//! The factory is the only way a description mutates the spec it is bound
//! to. For each distinct [`AccessorRequest`] it creates one forwarding
//! method; repeated requests return the accessor created the first time.
//! Requests are keyed on the exact `(target, policy)` pair, so the same
//! target under two policies yields two accessors.
//!
//! The deduplication map lives in the factory and dies with it: one map per
//! generation call, nothing shared between calls.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use relay_ir::{FieldDescriptor, LookupCatalog, MethodDescriptor, TypeDesc, TypeName};

use crate::{
    AccessorMethod, AccessorRequest, AuxConfig, AuxError, AuxiliaryTypeSpec, ForwardingBody,
    ResolutionPolicy, ValueKind,
};

/// Creates accessors on one auxiliary type under construction.
pub struct AccessorFactory<'c> {
    catalog: &'c LookupCatalog,
    config: &'c AuxConfig,
    spec: AuxiliaryTypeSpec,
    index: FxHashMap<AccessorRequest, usize>,
}

impl<'c> AccessorFactory<'c> {
    pub(crate) fn new(
        spec: AuxiliaryTypeSpec,
        catalog: &'c LookupCatalog,
        config: &'c AuxConfig,
    ) -> Self {
        Self {
            catalog,
            config,
            spec,
            index: FxHashMap::default(),
        }
    }

    /// Return the accessor to call instead of `target`, creating it on
    /// first request.
    ///
    /// # Errors
    ///
    /// [`AuxError::MethodNotReachable`] if `policy` cannot resolve `target`
    /// against the lookup catalog, or resolves it to a method that differs
    /// in static-ness or return kind. The spec is left untouched.
    pub fn require_accessor(
        &mut self,
        target: &MethodDescriptor,
        policy: ResolutionPolicy,
    ) -> Result<MethodDescriptor, AuxError> {
        let request = AccessorRequest {
            target: target.clone(),
            policy,
        };
        if let Some(&existing) = self.index.get(&request) {
            let accessor = &self.spec.accessors[existing];
            tracing::trace!(
                accessor = accessor.descriptor.name(),
                policy = policy.label(),
                "reusing accessor"
            );
            return Ok(accessor.descriptor.clone());
        }

        let resolved = policy.resolve(target, self.catalog)?;
        // The accessor keeps the target's shape, so the resolved method must
        // be invokable the same way and return the same kind of value.
        if resolved.is_static() != target.is_static()
            || ValueKind::of(resolved.return_type()) != ValueKind::of(target.return_type())
        {
            return Err(AuxError::not_reachable(target, self.catalog.context()));
        }
        let resolved = resolved.clone();

        // Instance targets take their receiver as the leading parameter.
        let mut params: SmallVec<[TypeDesc; 4]> = SmallVec::new();
        if !target.is_static() {
            params.push(TypeDesc::class(target.declaring_type().clone()));
        }
        params.extend(target.params().iter().cloned());

        let ordinal = self.spec.accessors.len();
        let accessor_name = format!(
            "{}${}${ordinal}",
            target.name(),
            self.config.accessor_infix
        );
        let body = ForwardingBody::forward(&params, &resolved, target.return_type());
        let descriptor = MethodDescriptor::new(
            self.spec.name.clone(),
            accessor_name,
            params,
            target.return_type().clone(),
        )
        .with_modifiers(self.config.effective_accessor_modifiers());

        tracing::debug!(
            aux = %self.spec.name,
            accessor = descriptor.name(),
            target = %resolved,
            policy = policy.label(),
            "created accessor"
        );

        self.spec.accessors.push(AccessorMethod {
            descriptor: descriptor.clone(),
            request: request.clone(),
            resolved,
            body,
        });
        self.index.insert(request, ordinal);
        Ok(descriptor)
    }

    /// Declare an additional field on the auxiliary type.
    ///
    /// # Errors
    ///
    /// [`AuxError::DuplicateField`] if a field with that name exists.
    pub fn declare_field(&mut self, field: FieldDescriptor) -> Result<(), AuxError> {
        if self.spec.fields.iter().any(|f| f.name == field.name) {
            return Err(AuxError::DuplicateField {
                type_name: self.spec.name.clone(),
                field: field.name.into(),
            });
        }
        self.spec.fields.push(field);
        Ok(())
    }

    /// Name of the type the accessors are declared on.
    #[inline]
    pub fn type_name(&self) -> &TypeName {
        &self.spec.name
    }

    /// The catalog `BySignature` requests are checked against.
    #[inline]
    pub fn catalog(&self) -> &LookupCatalog {
        self.catalog
    }

    /// Number of accessors created so far.
    #[inline]
    pub fn accessor_count(&self) -> usize {
        self.spec.accessors.len()
    }

    /// The spec as built so far.
    #[inline]
    pub fn spec(&self) -> &AuxiliaryTypeSpec {
        &self.spec
    }

    pub(crate) fn finish(self) -> AuxiliaryTypeSpec {
        self.spec
    }
}
