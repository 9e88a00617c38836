//! Type emission.
//!
//! The generator never writes class files itself. It hands each finished
//! [`AuxiliaryTypeSpec`] to a [`TypeEmitter`], exactly once per generation
//! call. [`ListingEmitter`] is the in-tree emitter: it renders a
//! deterministic, javap-style listing, which is what tests and debugging
//! output use.

use std::fmt;

use rustc_hash::FxHashSet;

use relay_ir::TypeName;

use crate::{AuxError, AuxiliaryTypeSpec};

/// Turns a finished spec into a concrete artifact.
pub trait TypeEmitter {
    type Artifact;

    /// Emit `spec`.
    ///
    /// # Errors
    ///
    /// [`AuxError::DuplicateEmission`] if the emitter already produced a
    /// type with this name; implementations may add their own failures.
    fn emit(&mut self, spec: &AuxiliaryTypeSpec) -> Result<Self::Artifact, AuxError>;
}

/// A rendered auxiliary type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeListing {
    pub name: TypeName,
    pub text: String,
}

/// Renders specs as text and refuses to emit a name twice.
#[derive(Debug, Default)]
pub struct ListingEmitter {
    emitted: FxHashSet<TypeName>,
}

impl ListingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct types emitted so far.
    pub fn emitted_count(&self) -> usize {
        self.emitted.len()
    }

    pub fn has_emitted(&self, name: &TypeName) -> bool {
        self.emitted.contains(name)
    }
}

impl TypeEmitter for ListingEmitter {
    type Artifact = TypeListing;

    fn emit(&mut self, spec: &AuxiliaryTypeSpec) -> Result<TypeListing, AuxError> {
        if self.emitted.contains(spec.name()) {
            return Err(AuxError::DuplicateEmission {
                name: spec.name().clone(),
            });
        }
        let text = render(spec);
        self.emitted.insert(spec.name().clone());
        Ok(TypeListing {
            name: spec.name().clone(),
            text,
        })
    }
}

/// Render a spec as a listing. Output depends only on the spec.
pub fn render(spec: &AuxiliaryTypeSpec) -> String {
    SpecListing(spec).to_string()
}

/// Displays a spec in listing form; [`render`] collects it into a `String`.
#[derive(Clone, Copy, Debug)]
pub struct SpecListing<'a>(pub &'a AuxiliaryTypeSpec);

impl fmt::Display for SpecListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.0;
        let mut header = spec.modifiers().keywords();
        header.push("class");
        writeln!(f, "{} {} {{", header.join(" "), spec.name())?;
        writeln!(f, "  // class file version {}", spec.version())?;

        for field in spec.fields() {
            let ty = field.ty.to_string();
            let mut words: Vec<&str> = field.modifiers.keywords();
            words.push(&ty);
            words.push(&*field.name);
            writeln!(f, "  {};", words.join(" "))?;
        }

        for accessor in spec.accessors() {
            let method = &accessor.descriptor;
            let params: Vec<String> = method.params().iter().map(ToString::to_string).collect();
            let ret = method.return_type().to_string();
            let mut words: Vec<&str> = method.modifiers().keywords();
            words.push(&ret);
            writeln!(
                f,
                "\n  {} {}({});",
                words.join(" "),
                method.name(),
                params.join(", ")
            )?;
            writeln!(
                f,
                "    // {} -> {}",
                accessor.request.policy.label(),
                accessor.resolved
            )?;
            writeln!(f, "    locals: {}", accessor.body.max_locals())?;
            for instr in accessor.body.instructions() {
                writeln!(f, "      {instr}")?;
            }
        }

        f.write_str("}\n")
    }
}
