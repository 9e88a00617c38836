//! Auxiliary type generation.
//!
//! [`AuxiliaryTypeGenerator::make`] runs one generation call end to end:
//!
//! ```text
//! validate name → fresh spec → describe (accessor requests) → emit once
//! ```
//!
//! Any failure aborts the call before the emitter sees anything. Each call
//! owns its spec and accessor factory; the only state shared between calls
//! is the read-only lookup catalog.

use relay_ir::{ClassFileVersion, LookupCatalog, TypeName};

use crate::{
    AccessorFactory, AuxConfig, AuxError, AuxiliaryType, AuxiliaryTypeSpec, InvalidNameReason,
    TypeEmitter,
};

/// Generates auxiliary types serving one instrumented type.
#[derive(Clone, Debug)]
pub struct AuxiliaryTypeGenerator<'c> {
    instrumented: TypeName,
    catalog: &'c LookupCatalog,
    config: AuxConfig,
}

impl<'c> AuxiliaryTypeGenerator<'c> {
    /// A generator for auxiliary types next to `instrumented`, resolving
    /// signature requests against `catalog`.
    pub fn new(instrumented: TypeName, catalog: &'c LookupCatalog) -> Self {
        Self {
            instrumented,
            catalog,
            config: AuxConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: AuxConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &AuxConfig {
        &self.config
    }

    #[inline]
    pub fn instrumented_type(&self) -> &TypeName {
        &self.instrumented
    }

    /// Check that `raw` is a valid dotted name in the instrumented type's
    /// package, so package-private accessors stay reachable.
    ///
    /// # Errors
    ///
    /// [`AuxError::InvalidTypeName`] for malformed names, internal-form
    /// names, and names in another package.
    pub fn validate_name(&self, raw: &str) -> Result<TypeName, AuxError> {
        let invalid = |reason| AuxError::InvalidTypeName {
            name: raw.to_owned(),
            reason,
        };
        let name = TypeName::parse(raw).map_err(|e| invalid(InvalidNameReason::Malformed(e)))?;
        if !name.same_package(&self.instrumented) {
            return Err(invalid(InvalidNameReason::ForeignPackage {
                expected: self.instrumented.package().to_owned(),
                found: name.package().to_owned(),
            }));
        }
        Ok(name)
    }

    /// Build the spec for `aux` without emitting it.
    ///
    /// # Errors
    ///
    /// Name validation failures and any error raised by the description.
    pub fn describe<A: AuxiliaryType>(
        &self,
        aux: &A,
        name: &str,
        version: ClassFileVersion,
    ) -> Result<AuxiliaryTypeSpec, AuxError> {
        let name = self.validate_name(name)?;
        let spec = AuxiliaryTypeSpec::new(name, version, self.config.type_modifiers);
        let mut factory = AccessorFactory::new(spec, self.catalog, &self.config);
        aux.describe(&mut factory)?;
        Ok(factory.finish())
    }

    /// Describe `aux` and hand the finished spec to `emitter`.
    ///
    /// The emitter is called exactly once, and only if the description
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Everything [`describe`](Self::describe) returns, plus whatever the
    /// emitter rejects the spec with.
    pub fn make<A, E>(
        &self,
        aux: &A,
        name: &str,
        version: ClassFileVersion,
        emitter: &mut E,
    ) -> Result<E::Artifact, AuxError>
    where
        A: AuxiliaryType,
        E: TypeEmitter,
    {
        let spec = self.describe(aux, name, version)?;
        tracing::debug!(
            aux = %spec.name(),
            version = %spec.version(),
            accessors = spec.accessors().len(),
            "emitting auxiliary type"
        );
        emitter.emit(&spec)
    }
}
