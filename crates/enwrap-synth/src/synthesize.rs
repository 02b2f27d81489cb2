//! Envelope assembly.
//!
//! Single-pass, stateless synthesis: the only mutable value is the
//! name allocator, owned by the call. Either a complete spec comes out
//! or a typed error does; nothing partial.

use serde::{Deserialize, Serialize};

use enwrap_model::{TypeModel, TypeParameter, TypeRef};

use crate::allocator::NameAllocator;
use crate::delegate::forwarding_operation;
use crate::error::SynthResult;
use crate::naming::{envelope_name, DEFAULT_SUFFIX};
use crate::resolve::resolve_interface;
use crate::spec::{GeneratedEnvelopeSpec, WrappedField};

/// Name of the wrapped field and of the sole constructor parameter.
const WRAPPED: &str = "wrapped";

// ── Configuration ──────────────────────────────────────────────────────

/// Options recognized by the synthesizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Parameterize the envelope over the exact wrapped subtype.
    #[serde(default)]
    pub generic: bool,
    /// Suffix appended to the computed envelope name.
    #[serde(default = "SynthConfig::default_suffix")]
    pub suffix: String,
}

impl SynthConfig {
    fn default_suffix() -> String {
        DEFAULT_SUFFIX.to_string()
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            generic: false,
            suffix: Self::default_suffix(),
        }
    }
}

// ── Synthesizer ────────────────────────────────────────────────────────

/// Assembles generated envelope specs from a type model.
pub struct EnvelopeSynthesizer<'m> {
    model: &'m dyn TypeModel,
    config: SynthConfig,
}

impl<'m> EnvelopeSynthesizer<'m> {
    /// A synthesizer with default configuration.
    pub fn new(model: &'m dyn TypeModel) -> Self {
        Self {
            model,
            config: SynthConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: SynthConfig) -> Self {
        self.config = config;
        self
    }

    /// Synthesize the envelope spec for one interface.
    pub fn synthesize(&self, name: &str) -> SynthResult<GeneratedEnvelopeSpec> {
        let descriptor = resolve_interface(self.model, name)?;
        let mut allocator = NameAllocator::seeded_for(&descriptor);

        let self_type = descriptor.self_type();
        let mut type_parameters = descriptor.type_parameters.clone();
        let (wrapped_type, self_type_parameter) = if self.config.generic {
            let parameter = allocator.allocate();
            type_parameters.push(TypeParameter::bounded(&parameter, self_type.clone()));
            (TypeRef::variable(&parameter), Some(parameter))
        } else {
            (self_type.clone(), None)
        };

        let operations = descriptor
            .operations
            .iter()
            .map(|signature| forwarding_operation(signature, WRAPPED))
            .collect();

        Ok(GeneratedEnvelopeSpec {
            namespace: descriptor.namespace.clone(),
            name: envelope_name(&descriptor, &self.config.suffix),
            type_parameters,
            self_type_parameter,
            supertype: self_type,
            wrapped_field: WrappedField {
                name: WRAPPED.to_string(),
                ty: wrapped_type,
            },
            operations,
        })
    }
}
