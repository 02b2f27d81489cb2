//! # enwrap-synth
//!
//! **Envelope synthesis core**: turns an interface described by a
//! [`TypeModel`](enwrap_model::TypeModel) into a
//! [`GeneratedEnvelopeSpec`]: a delegating type that implements the
//! interface by forwarding every operation to a wrapped instance.
//!
//! ## Pipeline
//!
//! ```text
//! TypeModel
//!     │
//!     ▼
//! resolve_interface ── ordered, deduplicated operation set
//!     │                (local first, then supertypes, first-seen wins)
//!     ▼
//! EnvelopeSynthesizer
//!     │─── envelope_name (enclosing-scope chain + suffix)
//!     │─── NameAllocator (collision-free self-type parameter)
//!     │─── forwarding_operation (one per resolved signature)
//!     ▼
//! GeneratedEnvelopeSpec (for an emitter)
//! ```
//!
//! Synthesis is synchronous and call-scoped: no shared state, no I/O,
//! no logging. Each call owns its allocator and either produces a
//! complete spec or fails with a [`SynthError`].

#![deny(unsafe_code)]

pub mod allocator;
pub mod delegate;
pub mod error;
pub mod naming;
pub mod resolve;
pub mod spec;
pub mod synthesize;

// Re-exports
pub use allocator::NameAllocator;
pub use delegate::forwarding_operation;
pub use error::{SynthError, SynthResult};
pub use naming::{envelope_name, DEFAULT_SUFFIX};
pub use resolve::{resolve_interface, InterfaceDescriptor};
pub use spec::{ForwardingCall, ForwardingOperation, GeneratedEnvelopeSpec, WrappedField};
pub use synthesize::{EnvelopeSynthesizer, SynthConfig};
