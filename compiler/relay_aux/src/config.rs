//! Generator configuration.

use relay_ir::{Modifiers, Visibility};

/// Modifier and naming policy for generated auxiliary types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AuxConfig {
    /// Flags on the generated type. Defaults to package-private + synthetic.
    pub type_modifiers: Modifiers,
    /// Flags on each accessor. `STATIC` is always added.
    pub accessor_modifiers: Modifiers,
    /// Middle part of accessor names: `<target>$<infix>$<ordinal>`.
    pub accessor_infix: Box<str>,
}

impl AuxConfig {
    /// Package-private + synthetic.
    pub const DEFAULT_TYPE_MODIFIERS: Modifiers = Modifiers::SYNTHETIC;

    #[must_use]
    pub fn with_type_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.type_modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_type_visibility(mut self, visibility: Visibility) -> Self {
        self.type_modifiers = self.type_modifiers.with_visibility(visibility);
        self
    }

    #[must_use]
    pub fn with_accessor_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.accessor_modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_accessor_infix(mut self, infix: impl Into<Box<str>>) -> Self {
        self.accessor_infix = infix.into();
        self
    }

    /// The flags actually written on an accessor.
    pub(crate) fn effective_accessor_modifiers(&self) -> Modifiers {
        self.accessor_modifiers | Modifiers::STATIC
    }
}

impl Default for AuxConfig {
    fn default() -> Self {
        Self {
            type_modifiers: Self::DEFAULT_TYPE_MODIFIERS,
            accessor_modifiers: Modifiers::STATIC | Modifiers::SYNTHETIC,
            accessor_infix: "accessor".into(),
        }
    }
}
