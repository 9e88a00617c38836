//! Lookup catalog construction.
//!
//! Signature-based resolution needs to know which methods a lookup context
//! can actually invoke. That depends on the shape of the hierarchy: a
//! subclass declaration shadows the inherited one, private supertype
//! members are invisible, and package-private members are only visible
//! from the same package. [`TypeHierarchy`] applies those rules to a set of
//! declared types.

use rustc_hash::FxHashMap;

use relay_ir::{LookupCatalog, MethodDescriptor, TypeName, Visibility};

use crate::AuxError;

/// Produces the catalog of methods reachable from a lookup context.
pub trait CatalogProvider {
    /// # Errors
    ///
    /// [`AuxError::UnknownType`] if `context` is not known to the provider.
    fn catalog_for(&self, context: &TypeName) -> Result<LookupCatalog, AuxError>;
}

/// A declared class: its superclass and the methods it declares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: TypeName,
    pub superclass: Option<TypeName>,
    pub methods: Vec<MethodDescriptor>,
}

impl TypeDecl {
    pub fn new(name: TypeName) -> Self {
        Self {
            name,
            superclass: None,
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn extends(mut self, superclass: TypeName) -> Self {
        self.superclass = Some(superclass);
        self
    }

    #[must_use]
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }
}

/// Single-inheritance class registry.
#[derive(Clone, Debug, Default)]
pub struct TypeHierarchy {
    types: FxHashMap<TypeName, TypeDecl>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type, replacing any earlier declaration with its name.
    pub fn declare(&mut self, decl: TypeDecl) {
        self.types.insert(decl.name.clone(), decl);
    }

    pub fn get(&self, name: &TypeName) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    /// The context type followed by its known superclasses. The walk stops
    /// at the first superclass that is not registered, and on a cycle.
    fn chain<'h>(&'h self, context: &'h TypeDecl) -> impl Iterator<Item = &'h TypeDecl> + 'h {
        let mut seen = 0usize;
        let limit = self.types.len();
        std::iter::successors(Some(context), move |decl| {
            seen += 1;
            if seen >= limit {
                return None;
            }
            decl.superclass.as_ref().and_then(|s| self.types.get(s))
        })
    }
}

fn reachable_from(context: &TypeName, decl: &TypeDecl, method: &MethodDescriptor) -> bool {
    if method.is_initializer() {
        return false;
    }
    if decl.name == *context {
        return true;
    }
    match method.modifiers().visibility() {
        Visibility::Public | Visibility::Protected => true,
        Visibility::PackagePrivate => decl.name.same_package(context),
        Visibility::Private => false,
    }
}

impl CatalogProvider for TypeHierarchy {
    fn catalog_for(&self, context: &TypeName) -> Result<LookupCatalog, AuxError> {
        let Some(start) = self.types.get(context) else {
            return Err(AuxError::UnknownType {
                name: context.clone(),
            });
        };

        let candidates = self.chain(start).flat_map(|decl| {
            decl.methods
                .iter()
                .filter(move |m| reachable_from(context, decl, m))
                .cloned()
        });
        let catalog = LookupCatalog::new(context.clone(), candidates);
        tracing::debug!(
            context = %context,
            methods = catalog.len(),
            "built lookup catalog"
        );
        Ok(catalog)
    }
}
