//! # enwrap-driver
//!
//! The **driver boundary** for envelope generation. Takes a batch of
//! generation requests and one [`TypeModel`](enwrap_model::TypeModel),
//! runs synthesis and rendering per element, and isolates every
//! per-element failure as a [`Diagnostic`] so siblings keep processing.
//! Rendered units go to a [`SourceSink`]; nothing partial is ever
//! emitted for a failed element.

#![deny(unsafe_code)]

pub mod diagnostics;
pub mod document;
pub mod driver;
pub mod sink;

// Re-exports
pub use diagnostics::{Diagnostic, Severity};
pub use document::BatchDocument;
pub use driver::{Driver, DriverReport, GenerationRequest};
pub use sink::{MemorySink, SinkError, SourceSink};
