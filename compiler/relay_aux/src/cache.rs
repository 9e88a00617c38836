//! Reuse of structurally equal auxiliary types.
//!
//! Instrumenting many equivalent shapes tends to describe the same
//! auxiliary type over and over. [`AuxiliaryTypeCache`] keys emitted
//! artifacts by the finished [`AuxiliaryTypeSpec`], so a second description
//! that produces an equal spec gets the first artifact back instead of a
//! second emission. The cache takes `&self` and can be shared between
//! threads that generate unrelated types.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use relay_ir::ClassFileVersion;

use crate::{AuxError, AuxiliaryType, AuxiliaryTypeGenerator, AuxiliaryTypeSpec, TypeEmitter};

/// Emitted artifacts keyed by spec.
pub struct AuxiliaryTypeCache<A> {
    entries: RwLock<FxHashMap<AuxiliaryTypeSpec, A>>,
}

impl<A: Clone> AuxiliaryTypeCache<A> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Describe `aux` with `generator`; emit only if no equal spec was
    /// emitted through this cache before.
    ///
    /// # Errors
    ///
    /// Description and emission errors. A failed emission caches nothing.
    pub fn make<T, E>(
        &self,
        generator: &AuxiliaryTypeGenerator<'_>,
        aux: &T,
        name: &str,
        version: ClassFileVersion,
        emitter: &mut E,
    ) -> Result<A, AuxError>
    where
        T: AuxiliaryType,
        E: TypeEmitter<Artifact = A>,
    {
        let spec = generator.describe(aux, name, version)?;
        if let Some(artifact) = self.entries.read().get(&spec) {
            tracing::trace!(aux = %spec.name(), "auxiliary type cache hit");
            return Ok(artifact.clone());
        }

        let mut entries = self.entries.write();
        // Another thread may have emitted between the two locks.
        if let Some(artifact) = entries.get(&spec) {
            return Ok(artifact.clone());
        }
        let artifact = emitter.emit(&spec)?;
        entries.insert(spec, artifact.clone());
        Ok(artifact)
    }

    /// Look up the artifact emitted for an equal spec.
    pub fn get(&self, spec: &AuxiliaryTypeSpec) -> Option<A> {
        self.entries.read().get(spec).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<A: Clone> Default for AuxiliaryTypeCache<A> {
    fn default() -> Self {
        Self::new()
    }
}
