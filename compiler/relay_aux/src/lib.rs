//! Auxiliary type generation for relay.
//!
//! Instrumentation sometimes has to call methods the instrumented type
//! cannot reach itself. This crate generates helper ("auxiliary") types in
//! the instrumented type's package whose static accessor methods forward to
//! those methods.
//!
//! - **Resolution** ([`ResolutionPolicy`]) — maps a requested method to the
//!   descriptor that is actually invokable from the lookup context.
//! - **Accessors** ([`AccessorFactory`], [`AccessorMethod`],
//!   [`ForwardingBody`]) — one forwarding method per distinct
//!   `(target, policy)` request.
//! - **Generation** ([`AuxiliaryTypeGenerator`], [`AuxiliaryType`],
//!   [`AuxiliaryTypeSpec`]) — one spec per call, handed to a
//!   [`TypeEmitter`] exactly once.
//! - **Reuse** ([`AuxiliaryTypeCache`]) — structurally equal specs share
//!   one emitted artifact.
//! - **Catalogs** ([`CatalogProvider`], [`TypeHierarchy`]) — what a lookup
//!   context can invoke.
//!
//! # Crate Dependencies
//!
//! `relay_aux` depends on `relay_ir` for names, descriptors and the
//! [`LookupCatalog`](relay_ir::LookupCatalog). Class-file serialization is
//! left to [`TypeEmitter`] implementations.

mod aux_type;
mod body;
mod cache;
mod config;
mod emit;
mod error;
mod factory;
mod generator;
mod lookup;
mod policy;

use std::sync::Once;

pub use aux_type::{
    AccessorBundle, AccessorMethod, AccessorRequest, AuxiliaryType, AuxiliaryTypeSpec,
};
pub use body::{ForwardInstr, ForwardingBody, InvokeKind, ValueKind};
pub use cache::AuxiliaryTypeCache;
pub use config::AuxConfig;
pub use emit::{render, ListingEmitter, SpecListing, TypeEmitter, TypeListing};
pub use error::{AuxError, InvalidNameReason};
pub use factory::AccessorFactory;
pub use generator::AuxiliaryTypeGenerator;
pub use lookup::{CatalogProvider, TypeDecl, TypeHierarchy};
pub use policy::ResolutionPolicy;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debugging.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=relay_aux=debug` or `RUST_LOG=relay_aux=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
