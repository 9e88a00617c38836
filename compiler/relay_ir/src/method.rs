//! Method and field descriptors.
//!
//! A [`MethodDescriptor`] is an immutable value: two descriptors are equal
//! only if declaring type, name, parameters, return type and modifiers all
//! match. The looser identity used for reachability checks is the
//! [`SignatureKey`], which drops the declaring type and return type and
//! compares parameters by erasure.

use std::fmt;

use smallvec::SmallVec;

use crate::{Modifiers, TypeDesc, TypeName};

/// Parameter list storage. Most methods take at most four parameters.
pub type Params = SmallVec<[TypeDesc; 4]>;

/// Name plus erased parameter descriptors, e.g. `foo(ILjava/lang/String;)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureKey(Box<str>);

impl SignatureKey {
    /// Compute the key for a method name and parameter list.
    pub fn of(name: &str, params: &[TypeDesc]) -> Self {
        let mut key = String::with_capacity(name.len() + 2 + params.len() * 2);
        key.push_str(name);
        key.push('(');
        for param in params {
            param.erasure().write_descriptor(&mut key);
        }
        key.push(')');
        Self(key.into_boxed_str())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A method as seen from a class file: owner, name, shape and flags.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDescriptor {
    declaring_type: TypeName,
    name: Box<str>,
    params: Params,
    return_type: TypeDesc,
    modifiers: Modifiers,
}

impl MethodDescriptor {
    /// Name reserved for instance initializers.
    pub const CONSTRUCTOR: &'static str = "<init>";
    /// Name reserved for the static initializer.
    pub const TYPE_INITIALIZER: &'static str = "<clinit>";

    /// A public instance method.
    pub fn new(
        declaring_type: TypeName,
        name: impl Into<Box<str>>,
        params: impl IntoIterator<Item = TypeDesc>,
        return_type: TypeDesc,
    ) -> Self {
        Self {
            declaring_type,
            name: name.into(),
            params: params.into_iter().collect(),
            return_type,
            modifiers: Modifiers::PUBLIC,
        }
    }

    /// Replace the modifier set.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The same method declared on another type (an inherited or bridged
    /// view of it).
    #[must_use]
    pub fn with_declaring_type(mut self, declaring_type: TypeName) -> Self {
        self.declaring_type = declaring_type;
        self
    }

    #[inline]
    pub fn declaring_type(&self) -> &TypeName {
        &self.declaring_type
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn params(&self) -> &[TypeDesc] {
        &self.params
    }

    #[inline]
    pub fn return_type(&self) -> &TypeDesc {
        &self.return_type
    }

    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// The key used for signature-based matching.
    pub fn signature_key(&self) -> SignatureKey {
        SignatureKey::of(&self.name, &self.params)
    }

    /// The erased method descriptor, e.g. `(IJ)Ljava/lang/String;`.
    pub fn descriptor(&self) -> String {
        let mut out = String::from("(");
        for param in &self.params {
            param.erasure().write_descriptor(&mut out);
        }
        out.push(')');
        self.return_type.erasure().write_descriptor(&mut out);
        out
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }

    pub fn is_private(&self) -> bool {
        self.modifiers.contains(Modifiers::PRIVATE)
    }

    pub fn is_bridge(&self) -> bool {
        self.modifiers.contains(Modifiers::BRIDGE)
    }

    /// Returns `true` for `<init>` and `<clinit>`.
    pub fn is_initializer(&self) -> bool {
        &*self.name == Self::CONSTRUCTOR || &*self.name == Self::TYPE_INITIALIZER
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{}(",
            self.return_type, self.declaring_type, self.name
        )?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}

/// A field declared on a generated type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDescriptor {
    pub name: Box<str>,
    pub ty: TypeDesc,
    pub modifiers: Modifiers,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<Box<str>>, ty: TypeDesc, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers,
        }
    }
}
