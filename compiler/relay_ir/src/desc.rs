//! Type descriptors for method parameters, return values and fields.
//!
//! [`TypeDesc`] keeps generic information (parameterized types and type
//! variables) because callers describe methods the way they were declared.
//! Everything that identifies a method at the class-file level works on the
//! [`erasure`](TypeDesc::erasure) instead.

use std::fmt;

use crate::TypeName;

/// Primitive JVM types, including `void` for return positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    Void,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    /// The single-character descriptor (`I`, `J`, `V`, ...).
    pub fn descriptor(self) -> char {
        match self {
            Primitive::Void => 'V',
            Primitive::Boolean => 'Z',
            Primitive::Byte => 'B',
            Primitive::Char => 'C',
            Primitive::Short => 'S',
            Primitive::Int => 'I',
            Primitive::Long => 'J',
            Primitive::Float => 'F',
            Primitive::Double => 'D',
        }
    }

    /// The source-level keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Void => "void",
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }
}

/// A (possibly generic) type as it appears in a method or field signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeDesc {
    /// A primitive or `void`.
    Primitive(Primitive),
    /// A non-generic class or interface reference.
    Class(TypeName),
    /// An array of the component type.
    Array(Box<TypeDesc>),
    /// A parameterized type such as `List<String>`.
    Parameterized { raw: TypeName, args: Vec<TypeDesc> },
    /// A type variable; erases to its leftmost bound.
    Variable { name: Box<str>, bound: TypeName },
}

impl TypeDesc {
    pub const VOID: TypeDesc = TypeDesc::Primitive(Primitive::Void);
    pub const BOOLEAN: TypeDesc = TypeDesc::Primitive(Primitive::Boolean);
    pub const INT: TypeDesc = TypeDesc::Primitive(Primitive::Int);
    pub const LONG: TypeDesc = TypeDesc::Primitive(Primitive::Long);
    pub const DOUBLE: TypeDesc = TypeDesc::Primitive(Primitive::Double);

    /// A class reference.
    pub fn class(name: TypeName) -> Self {
        TypeDesc::Class(name)
    }

    /// An array of `component`.
    pub fn array_of(component: TypeDesc) -> Self {
        TypeDesc::Array(Box::new(component))
    }

    /// The erased form: parameterized types become their raw class and
    /// type variables become their bound. Arrays erase their component.
    pub fn erasure(&self) -> TypeDesc {
        match self {
            TypeDesc::Primitive(_) | TypeDesc::Class(_) => self.clone(),
            TypeDesc::Array(component) => TypeDesc::array_of(component.erasure()),
            TypeDesc::Parameterized { raw, .. } => TypeDesc::Class(raw.clone()),
            TypeDesc::Variable { bound, .. } => TypeDesc::Class(bound.clone()),
        }
    }

    /// The field descriptor of the erasure (`I`, `[J`, `Ljava/lang/String;`).
    pub fn descriptor(&self) -> String {
        let mut out = String::new();
        self.write_descriptor(&mut out);
        out
    }

    pub(crate) fn write_descriptor(&self, out: &mut String) {
        match self {
            TypeDesc::Primitive(p) => out.push(p.descriptor()),
            TypeDesc::Array(component) => {
                out.push('[');
                component.write_descriptor(out);
            }
            TypeDesc::Class(name)
            | TypeDesc::Parameterized { raw: name, .. }
            | TypeDesc::Variable { bound: name, .. } => {
                out.push('L');
                out.push_str(&name.internal_name());
                out.push(';');
            }
        }
    }

    /// The class-constant form used by `checkcast`: the internal name for
    /// class types, the full descriptor for arrays and primitives.
    pub fn internal_form(&self) -> String {
        match self {
            TypeDesc::Class(name)
            | TypeDesc::Parameterized { raw: name, .. }
            | TypeDesc::Variable { bound: name, .. } => name.internal_name(),
            TypeDesc::Primitive(_) | TypeDesc::Array(_) => self.descriptor(),
        }
    }

    /// Number of local variable slots a value of this type occupies.
    pub fn slot_size(&self) -> u16 {
        match self {
            TypeDesc::Primitive(Primitive::Void) => 0,
            TypeDesc::Primitive(Primitive::Long | Primitive::Double) => 2,
            _ => 1,
        }
    }

    /// Returns `true` for `void`.
    pub fn is_void(&self) -> bool {
        matches!(self, TypeDesc::Primitive(Primitive::Void))
    }

    /// Returns `true` for reference types (classes, arrays, generics).
    pub fn is_reference(&self) -> bool {
        !matches!(self, TypeDesc::Primitive(_))
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDesc::Primitive(p) => f.write_str(p.keyword()),
            TypeDesc::Class(name) => write!(f, "{name}"),
            TypeDesc::Array(component) => write!(f, "{component}[]"),
            TypeDesc::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TypeDesc::Variable { name, .. } => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests;
