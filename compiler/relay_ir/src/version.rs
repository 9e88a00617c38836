//! Class-file format versions.

use std::fmt;

/// Target class-file version as `(major, minor)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassFileVersion {
    major: u16,
    minor: u16,
}

impl ClassFileVersion {
    pub const JAVA_V5: Self = Self::new(49, 0);
    pub const JAVA_V6: Self = Self::new(50, 0);
    pub const JAVA_V7: Self = Self::new(51, 0);
    pub const JAVA_V8: Self = Self::new(52, 0);
    pub const JAVA_V11: Self = Self::new(55, 0);
    pub const JAVA_V17: Self = Self::new(61, 0);
    pub const JAVA_V21: Self = Self::new(65, 0);

    /// Create a version from raw major/minor numbers.
    #[inline]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// The version written by a Java `release` compiler (5 and later).
    ///
    /// Returns `None` for releases before Java 5, which predate the
    /// versioning scheme this maps onto, and for releases whose major
    /// number does not fit in a `u16`.
    pub fn java(release: u16) -> Option<Self> {
        if release < 5 {
            return None;
        }
        release.checked_add(44).map(|major| Self::new(major, 0))
    }

    #[inline]
    pub fn major(self) -> u16 {
        self.major
    }

    #[inline]
    pub fn minor(self) -> u16 {
        self.minor
    }
}

impl Default for ClassFileVersion {
    fn default() -> Self {
        Self::JAVA_V8
    }
}

impl fmt::Display for ClassFileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
