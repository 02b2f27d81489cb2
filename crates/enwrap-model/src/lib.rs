//! # enwrap-model
//!
//! The **type-model contract** for envelope synthesis.
//!
//! Envelope synthesis needs a handful of facts about types: shape,
//! namespace, enclosing scopes, declared type parameters, locally
//! declared operations, and direct supertypes. This crate defines those
//! facts as plain serializable values and the [`TypeModel`] trait that
//! supplies them, so the synthesis core depends on no particular
//! compiler API and can be tested against hand-built fixtures.
//!
//! [`InMemoryModel`] is the reference implementation: a map of
//! [`TypeDecl`] records, usable both as a test fixture and as the
//! deserialization target for model documents.

#![deny(unsafe_code)]

pub mod decl;
pub mod error;
pub mod model;
pub mod signature;
pub mod types;

// Re-exports
pub use decl::{TypeDecl, TypeShape};
pub use error::{ModelError, ModelResult};
pub use model::{InMemoryModel, TypeModel};
pub use signature::{OperationSignature, SignatureKey};
pub use types::{Parameter, TypeParameter, TypeRef};
