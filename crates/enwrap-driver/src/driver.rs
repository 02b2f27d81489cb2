//! The driver boundary: batch processing with failure isolation.
//!
//! One failing element never stops its siblings, and no partial output
//! is ever emitted for a failed element. The driver is also the only
//! layer that logs; the synthesis core stays silent.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use enwrap_emit::render;
use enwrap_model::TypeModel;
use enwrap_synth::{EnvelopeSynthesizer, SynthConfig, SynthError};

use crate::diagnostics::Diagnostic;
use crate::sink::SourceSink;

// ── Request ────────────────────────────────────────────────────────────

/// One envelope to generate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Qualified name of the source interface.
    pub element: String,
    /// Synthesis options for this element.
    #[serde(default)]
    pub config: SynthConfig,
}

impl GenerationRequest {
    /// A request with default options.
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            config: SynthConfig::default(),
        }
    }

    /// Replace the options.
    pub fn with_config(mut self, config: SynthConfig) -> Self {
        self.config = config;
        self
    }
}

// ── Report ─────────────────────────────────────────────────────────────

/// Outcome of one batch run.
#[derive(Clone, Debug, Default)]
pub struct DriverReport {
    /// Number of units handed to the sink.
    pub generated: usize,
    /// Diagnostics collected across the batch.
    pub diagnostics: Vec<Diagnostic>,
}

impl DriverReport {
    /// Whether any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == crate::diagnostics::Severity::Error)
    }
}

// ── Driver ─────────────────────────────────────────────────────────────

/// Processes generation requests against one type model.
pub struct Driver<'m> {
    model: &'m dyn TypeModel,
}

impl<'m> Driver<'m> {
    /// A driver over the given model.
    pub fn new(model: &'m dyn TypeModel) -> Self {
        Self { model }
    }

    /// Process every request, collecting diagnostics instead of
    /// aborting. Units reach the sink in request order.
    pub fn process(
        &self,
        requests: &[GenerationRequest],
        sink: &mut dyn SourceSink,
    ) -> DriverReport {
        let mut report = DriverReport::default();
        for request in requests {
            debug!(element = %request.element, "synthesizing envelope");
            let synthesizer =
                EnvelopeSynthesizer::new(self.model).with_config(request.config.clone());
            match synthesizer.synthesize(&request.element) {
                Ok(spec) => {
                    let unit = render(&spec);
                    match sink.accept(unit) {
                        Ok(()) => report.generated += 1,
                        Err(error) => {
                            warn!(element = %request.element, %error, "failed to persist unit");
                            report
                                .diagnostics
                                .push(Diagnostic::error(&request.element, error.to_string()));
                        }
                    }
                }
                Err(error) => {
                    warn!(element = %request.element, %error, "envelope synthesis failed");
                    report
                        .diagnostics
                        .push(Diagnostic::error(&request.element, describe(&error)));
                }
            }
        }
        info!(
            generated = report.generated,
            diagnostics = report.diagnostics.len(),
            "envelope generation finished"
        );
        report
    }
}

/// Message for one synthesis failure.
fn describe(error: &SynthError) -> String {
    match error {
        SynthError::NotAnInterface(_) => {
            "envelopes can only be generated for interfaces".to_string()
        }
        other => format!("envelope synthesis failed: {}", other),
    }
}
