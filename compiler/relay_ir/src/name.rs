//! Fully-qualified type names.
//!
//! A [`TypeName`] is always held in its dotted binary form
//! (`com.example.Outer$Inner`). The internal slash-separated form used inside
//! class files is derived on demand with [`TypeName::internal_name`] and is
//! rejected on input, so every name that reaches the generator has been
//! validated exactly once.

use std::fmt;
use std::str::FromStr;

/// Reserved words that can never appear as a name segment.
const RESERVED: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Why a string was rejected as a type name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeNameError {
    /// The input was empty.
    Empty,
    /// The input used the internal `a/b/C` form.
    InternalForm,
    /// Two dots in a row, or a leading/trailing dot.
    EmptySegment { position: usize },
    /// A segment that is not a valid identifier.
    InvalidSegment { segment: String },
    /// A segment that is a reserved word.
    ReservedWord { segment: String },
}

impl fmt::Display for TypeNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNameError::Empty => write!(f, "type name is empty"),
            TypeNameError::InternalForm => {
                write!(f, "type name uses the internal `/` form")
            }
            TypeNameError::EmptySegment { position } => {
                write!(f, "empty name segment at byte {position}")
            }
            TypeNameError::InvalidSegment { segment } => {
                write!(f, "`{segment}` is not a valid identifier")
            }
            TypeNameError::ReservedWord { segment } => {
                write!(f, "`{segment}` is a reserved word")
            }
        }
    }
}

impl std::error::Error for TypeNameError {}

/// A validated, fully-qualified, dotted type name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeName(Box<str>);

impl TypeName {
    /// Validate and wrap a dotted type name.
    pub fn parse(raw: &str) -> Result<Self, TypeNameError> {
        if raw.is_empty() {
            return Err(TypeNameError::Empty);
        }
        if raw.contains('/') {
            return Err(TypeNameError::InternalForm);
        }

        let mut position = 0;
        for segment in raw.split('.') {
            if segment.is_empty() {
                return Err(TypeNameError::EmptySegment { position });
            }
            if !is_identifier(segment) {
                return Err(TypeNameError::InvalidSegment {
                    segment: segment.to_owned(),
                });
            }
            if RESERVED.contains(&segment) {
                return Err(TypeNameError::ReservedWord {
                    segment: segment.to_owned(),
                });
            }
            position += segment.len() + 1;
        }

        Ok(Self(raw.into()))
    }

    /// The dotted name as written.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The package part, empty for the default package.
    pub fn package(&self) -> &str {
        match self.0.rfind('.') {
            Some(dot) => &self.0[..dot],
            None => "",
        }
    }

    /// The last segment (`Outer$Inner` for `com.example.Outer$Inner`).
    pub fn simple_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(dot) => &self.0[dot + 1..],
            None => &self.0,
        }
    }

    /// The slash-separated form used inside class files.
    pub fn internal_name(&self) -> String {
        self.0.replace('.', "/")
    }

    /// Returns `true` if both names live in the same package.
    pub fn same_package(&self, other: &TypeName) -> bool {
        self.package() == other.package()
    }
}

impl FromStr for TypeName {
    type Err = TypeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests;
