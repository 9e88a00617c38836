//! Descriptor model for relay.
//!
//! This crate holds the immutable values that auxiliary type generation
//! passes around:
//!
//! - **Names** ([`TypeName`]) — validated, dotted, fully-qualified type names.
//! - **Types** ([`TypeDesc`], [`Primitive`]) — signature types with generic
//!   information and their erasure.
//! - **Members** ([`MethodDescriptor`], [`FieldDescriptor`], [`SignatureKey`]).
//! - **Flags** ([`Modifiers`], [`Visibility`]) and target
//!   [`ClassFileVersion`]s.
//! - **Reachability** ([`LookupCatalog`]) — what a lookup context can invoke.
//!
//! Nothing here knows about accessors; see `relay_aux` for that.

mod catalog;
mod desc;
mod method;
mod modifiers;
mod name;
mod version;

pub use catalog::LookupCatalog;
pub use desc::{Primitive, TypeDesc};
pub use method::{FieldDescriptor, MethodDescriptor, Params, SignatureKey};
pub use modifiers::{Modifiers, Visibility};
pub use name::{TypeName, TypeNameError};
pub use version::ClassFileVersion;
