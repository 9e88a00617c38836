//! Access and property flags for types, methods and fields.
//!
//! Bit values match the class-file `access_flags` encoding so an emitter can
//! write [`Modifiers::bits`] directly.

use bitflags::bitflags;

bitflags! {
    /// Class-file access flags.
    ///
    /// Package-private is the absence of `PUBLIC`, `PRIVATE` and `PROTECTED`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        /// Compiler-generated bridge method.
        const BRIDGE = 0x0040;
        const VARARGS = 0x0080;
        const ABSTRACT = 0x0400;
        /// Not present in source.
        const SYNTHETIC = 0x1000;

        const VISIBILITY = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
    }
}

/// The four access levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Private,
    PackagePrivate,
    Protected,
    Public,
}

impl Modifiers {
    /// Derive the access level. Malformed combinations resolve to the most
    /// restrictive flag present.
    pub fn visibility(self) -> Visibility {
        if self.contains(Modifiers::PRIVATE) {
            Visibility::Private
        } else if self.contains(Modifiers::PROTECTED) {
            Visibility::Protected
        } else if self.contains(Modifiers::PUBLIC) {
            Visibility::Public
        } else {
            Visibility::PackagePrivate
        }
    }

    /// Replace the visibility bits, keeping everything else.
    #[must_use]
    pub fn with_visibility(self, visibility: Visibility) -> Self {
        let rest = self.difference(Modifiers::VISIBILITY);
        match visibility {
            Visibility::Private => rest | Modifiers::PRIVATE,
            Visibility::PackagePrivate => rest,
            Visibility::Protected => rest | Modifiers::PROTECTED,
            Visibility::Public => rest | Modifiers::PUBLIC,
        }
    }

    /// Source-style keywords, in declaration order.
    pub fn keywords(self) -> Vec<&'static str> {
        let mut out = Vec::new();
        match self.visibility() {
            Visibility::Private => out.push("private"),
            Visibility::Protected => out.push("protected"),
            Visibility::Public => out.push("public"),
            Visibility::PackagePrivate => {}
        }
        if self.contains(Modifiers::ABSTRACT) {
            out.push("abstract");
        }
        if self.contains(Modifiers::STATIC) {
            out.push("static");
        }
        if self.contains(Modifiers::FINAL) {
            out.push("final");
        }
        if self.contains(Modifiers::SYNTHETIC) {
            out.push("synthetic");
        }
        if self.contains(Modifiers::BRIDGE) {
            out.push("bridge");
        }
        out
    }
}
