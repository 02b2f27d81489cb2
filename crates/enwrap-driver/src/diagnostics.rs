//! Diagnostics reported against originating elements.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The element produced no envelope.
    Error,
    /// The element was processed; something is worth knowing.
    Warning,
}

/// One diagnostic, tied to the element it originated from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Qualified name of the originating element.
    pub element: String,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// An error diagnostic.
    pub fn error(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            element: element.into(),
            message: message.into(),
        }
    }

    /// A warning diagnostic.
    pub fn warning(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            element: element.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}: {}", severity, self.element, self.message)
    }
}
