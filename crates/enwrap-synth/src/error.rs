//! Error types for envelope synthesis.

use thiserror::Error;

/// Errors that can occur while resolving an interface or assembling an
/// envelope.
///
/// Synthesis is all-or-nothing: when any of these is raised, no spec is
/// produced for the element. The driver decides how to report.
#[derive(Debug, Error)]
pub enum SynthError {
    /// The source element is not interface-shaped.
    #[error("`{0}` is not an interface")]
    NotAnInterface(String),

    /// The source element is missing from the type model.
    #[error("type `{0}` is not known to the model")]
    UnknownType(String),

    /// The model data for an element is inconsistent: a dangling or
    /// non-interface supertype reference, a type-argument arity
    /// mismatch, or a cyclic inheritance chain.
    #[error("malformed model data for `{name}`: {reason}")]
    MalformedModel {
        /// The element whose data is inconsistent.
        name: String,
        /// What was wrong.
        reason: String,
    },
}

/// Convenience result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_not_an_interface() {
        let err = SynthError::NotAnInterface("a.pkg.AClass".into());
        assert_eq!(err.to_string(), "`a.pkg.AClass` is not an interface");
    }

    #[test]
    fn error_display_malformed() {
        let err = SynthError::MalformedModel {
            name: "a.pkg.Foo".into(),
            reason: "supertype `a.pkg.Gone` is not in the model".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed model data for `a.pkg.Foo`: supertype `a.pkg.Gone` is not in the model"
        );
    }
}
