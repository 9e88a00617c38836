//! The set of methods invokable from one lookup context.
//!
//! A [`LookupCatalog`] is built once, from the most specific declarations to
//! the least specific, and is read-only afterwards. It can be shared behind
//! an `Arc` by any number of concurrent resolutions.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::{MethodDescriptor, SignatureKey, TypeName};

/// Methods reachable from `context`, indexed by [`SignatureKey`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct LookupCatalog {
    context: TypeName,
    methods: FxHashMap<SignatureKey, MethodDescriptor>,
}

impl LookupCatalog {
    /// Build a catalog from candidates ordered most specific first.
    ///
    /// The first candidate for a key wins, except that a non-bridge method
    /// replaces a bridge method already recorded under the same key.
    pub fn new(context: TypeName, methods: impl IntoIterator<Item = MethodDescriptor>) -> Self {
        let mut map: FxHashMap<SignatureKey, MethodDescriptor> = FxHashMap::default();
        for method in methods {
            match map.entry(method.signature_key()) {
                Entry::Vacant(slot) => {
                    slot.insert(method);
                }
                Entry::Occupied(mut slot) => {
                    if slot.get().is_bridge() && !method.is_bridge() {
                        slot.insert(method);
                    }
                }
            }
        }
        Self {
            context,
            methods: map,
        }
    }

    /// A catalog with no reachable methods.
    pub fn empty(context: TypeName) -> Self {
        Self {
            context,
            methods: FxHashMap::default(),
        }
    }

    /// The type from which reachability was evaluated.
    #[inline]
    pub fn context(&self) -> &TypeName {
        &self.context
    }

    /// Look up the reachable method for a signature key.
    #[inline]
    pub fn get(&self, key: &SignatureKey) -> Option<&MethodDescriptor> {
        self.methods.get(key)
    }

    pub fn contains(&self, key: &SignatureKey) -> bool {
        self.methods.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&SignatureKey, &MethodDescriptor)> {
        self.methods.iter()
    }
}

#[cfg(test)]
mod tests;
