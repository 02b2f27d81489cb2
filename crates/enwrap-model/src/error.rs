//! Error type for model construction.

use thiserror::Error;

/// Errors raised while assembling a type model from declarations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Two declarations share one qualified name.
    #[error("duplicate type declaration `{0}`")]
    DuplicateType(String),
}

/// Convenience result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ModelError::DuplicateType("a.pkg.Foo".into());
        assert_eq!(err.to_string(), "duplicate type declaration `a.pkg.Foo`");
    }
}
