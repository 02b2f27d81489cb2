//! Where rendered source units go.

use thiserror::Error;

use enwrap_emit::SourceUnit;

/// Failure to persist a rendered unit.
#[derive(Debug, Error)]
#[error("sink failure: {0}")]
pub struct SinkError(pub String);

/// Destination for rendered source units.
///
/// The driver hands each successfully rendered unit to the sink; a sink
/// failure is reported as a diagnostic against the originating element,
/// like any other per-element failure.
pub trait SourceSink {
    /// Accept one rendered unit.
    fn accept(&mut self, unit: SourceUnit) -> Result<(), SinkError>;
}

/// A sink that keeps units in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    units: Vec<SourceUnit>,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Units accepted so far, in order.
    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }
}

impl SourceSink for MemorySink {
    fn accept(&mut self, unit: SourceUnit) -> Result<(), SinkError> {
        self.units.push(unit);
        Ok(())
    }
}
