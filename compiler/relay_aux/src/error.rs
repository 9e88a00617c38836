//! Errors raised while generating auxiliary types.
//!
//! Every failure is reported to the immediate caller and aborts the
//! generation call it happened in. Nothing here is retried: a different
//! catalog, target or policy is needed for a second attempt to succeed.

use relay_ir::{MethodDescriptor, TypeName, TypeNameError};

/// Why an auxiliary type name was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNameReason {
    #[error(transparent)]
    Malformed(#[from] TypeNameError),
    #[error("expected package `{expected}`, found `{found}`")]
    ForeignPackage { expected: String, found: String },
}

/// Auxiliary type generation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuxError {
    /// Signature-based resolution found no reachable method.
    #[error("method {method} is not reachable from {context}")]
    MethodNotReachable {
        method: Box<MethodDescriptor>,
        context: TypeName,
    },

    /// The requested auxiliary type name is malformed or in the wrong
    /// package.
    #[error("invalid auxiliary type name `{name}`: {reason}")]
    InvalidTypeName {
        name: String,
        reason: InvalidNameReason,
    },

    /// The emitter already produced a type with this name.
    #[error("type {name} has already been emitted")]
    DuplicateEmission { name: TypeName },

    /// A description declared the same field twice.
    #[error("field `{field}` is already declared on {type_name}")]
    DuplicateField { type_name: TypeName, field: String },

    /// A catalog was requested for a type the provider does not know.
    #[error("unknown type {name}")]
    UnknownType { name: TypeName },
}

impl AuxError {
    pub(crate) fn not_reachable(method: &MethodDescriptor, context: &TypeName) -> Self {
        AuxError::MethodNotReachable {
            method: Box::new(method.clone()),
            context: context.clone(),
        }
    }
}
