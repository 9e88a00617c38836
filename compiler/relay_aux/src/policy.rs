//! Resolution of accessor targets.
//!
//! An accessor request names the method the instrumentation wants to call.
//! Before anything is generated, a [`ResolutionPolicy`] turns that request
//! into the descriptor that is actually invokable from the lookup context:
//!
//! - [`ByIdentity`](ResolutionPolicy::ByIdentity) trusts the caller and
//!   returns the target unchanged, without touching the catalog.
//! - [`BySignature`](ResolutionPolicy::BySignature) looks the target's
//!   [`SignatureKey`](relay_ir::SignatureKey) up in the catalog and returns
//!   the catalog's entry, which may be declared on a different type or carry
//!   different bridge details than the request.

use relay_ir::{LookupCatalog, MethodDescriptor};

use crate::AuxError;

/// How a requested method is mapped to an invokable one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionPolicy {
    /// The target is known by construction to be invokable.
    ByIdentity,
    /// The target must be present, by signature key, in the catalog.
    BySignature,
}

impl ResolutionPolicy {
    /// Resolve `target` against `catalog`.
    ///
    /// # Errors
    ///
    /// [`AuxError::MethodNotReachable`] if the policy is `BySignature` and
    /// no catalog entry shares the target's signature key.
    pub fn resolve<'a>(
        self,
        target: &'a MethodDescriptor,
        catalog: &'a LookupCatalog,
    ) -> Result<&'a MethodDescriptor, AuxError> {
        match self {
            ResolutionPolicy::ByIdentity => Ok(target),
            ResolutionPolicy::BySignature => {
                let key = target.signature_key();
                let Some(resolved) = catalog.get(&key) else {
                    tracing::debug!(
                        %key,
                        context = %catalog.context(),
                        "signature lookup missed"
                    );
                    return Err(AuxError::not_reachable(target, catalog.context()));
                };
                tracing::debug!(
                    %key,
                    declaring = %resolved.declaring_type(),
                    "resolved by signature"
                );
                Ok(resolved)
            }
        }
    }

    /// Short lowercase label, used in listings.
    pub fn label(self) -> &'static str {
        match self {
            ResolutionPolicy::ByIdentity => "identity",
            ResolutionPolicy::BySignature => "signature",
        }
    }
}

#[cfg(test)]
mod tests;
