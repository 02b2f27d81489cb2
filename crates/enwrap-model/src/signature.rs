//! Operation signatures and their deduplication identity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Parameter, TypeParameter, TypeRef};

// ── Operation Signature ────────────────────────────────────────────────

/// One operation declared by an interface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSignature {
    /// Operation name.
    pub name: String,
    /// The operation's own generic parameters, empty for most operations.
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    /// Ordered formal parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Return type; `TypeRef::Void` when the operation returns nothing.
    #[serde(default = "TypeRef::void_marker")]
    pub return_type: TypeRef,
    /// Declared checked-exception types.
    #[serde(default)]
    pub throws: Vec<TypeRef>,
    /// Qualified name of the declaring type. Stamped by the model.
    #[serde(default)]
    pub declared_by: String,
}

impl OperationSignature {
    /// A void operation with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: TypeRef::Void,
            throws: Vec::new(),
            declared_by: String::new(),
        }
    }

    /// Set the return type.
    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = return_type;
        self
    }

    /// Append a formal parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    /// Append a declared exception type.
    pub fn throwing(mut self, exception: TypeRef) -> Self {
        self.throws.push(exception);
        self
    }

    /// Set the operation's own generic parameters.
    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeParameter>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    /// Identity for deduplication: name plus ordered parameter types.
    ///
    /// Return type, exceptions and own generic parameters are not part
    /// of identity, so a re-declaration that narrows the exception list
    /// collides with the inherited declaration and replaces it.
    pub fn key(&self) -> SignatureKey {
        SignatureKey {
            name: self.name.clone(),
            parameter_types: self.parameters.iter().map(|p| p.ty.clone()).collect(),
        }
    }

    /// Whether the operation produces a value.
    pub fn returns_value(&self) -> bool {
        !self.return_type.is_void()
    }

    /// Apply type-argument bindings to every type in the signature.
    ///
    /// Names declared by the operation itself shadow interface-level
    /// parameters and are excluded from substitution.
    pub fn substitute(&self, bindings: &HashMap<String, TypeRef>) -> OperationSignature {
        let shadowed: Vec<&str> = self
            .type_parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        let visible: HashMap<String, TypeRef> = bindings
            .iter()
            .filter(|(name, _)| !shadowed.contains(&name.as_str()))
            .map(|(name, ty)| (name.clone(), ty.clone()))
            .collect();
        OperationSignature {
            name: self.name.clone(),
            type_parameters: self
                .type_parameters
                .iter()
                .map(|p| TypeParameter {
                    name: p.name.clone(),
                    bounds: p.bounds.iter().map(|b| b.substitute(&visible)).collect(),
                })
                .collect(),
            parameters: self
                .parameters
                .iter()
                .map(|p| Parameter::new(p.name.clone(), p.ty.substitute(&visible)))
                .collect(),
            return_type: self.return_type.substitute(&visible),
            throws: self.throws.iter().map(|t| t.substitute(&visible)).collect(),
            declared_by: self.declared_by.clone(),
        }
    }
}

// ── Signature Identity ─────────────────────────────────────────────────

/// Deduplication identity of an operation: (name, ordered parameter types).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignatureKey {
    /// Operation name.
    pub name: String,
    /// Ordered parameter types.
    pub parameter_types: Vec<TypeRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string() -> TypeRef {
        TypeRef::named("java.lang.String")
    }

    #[test]
    fn key_ignores_return_type_and_throws() {
        let narrow = OperationSignature::new("test")
            .with_parameter("a", string())
            .with_parameter("b", TypeRef::primitive("int"));
        let wide = OperationSignature::new("test")
            .with_parameter("x", string())
            .with_parameter("y", TypeRef::primitive("int"))
            .returning(TypeRef::primitive("int"))
            .throwing(TypeRef::named("java.lang.Exception"));
        assert_eq!(narrow.key(), wide.key());
    }

    #[test]
    fn key_distinguishes_parameter_types() {
        let a = OperationSignature::new("test").with_parameter("a", string());
        let b = OperationSignature::new("test").with_parameter("a", TypeRef::primitive("int"));
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn key_distinguishes_names() {
        let a = OperationSignature::new("test");
        let b = OperationSignature::new("test2");
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn substitute_rewrites_parameters_and_return() {
        let mut bindings = HashMap::new();
        bindings.insert("A".to_string(), string());
        let op = OperationSignature::new("get")
            .with_parameter("a", TypeRef::variable("A"))
            .returning(TypeRef::variable("A"));
        let substituted = op.substitute(&bindings);
        assert_eq!(substituted.parameters[0].ty, string());
        assert_eq!(substituted.return_type, string());
    }

    #[test]
    fn substitute_respects_operation_level_shadowing() {
        let mut bindings = HashMap::new();
        bindings.insert("T".to_string(), string());
        let op = OperationSignature::new("apply")
            .with_type_parameters(vec![TypeParameter::new("T")])
            .with_parameter("t", TypeRef::variable("T"));
        let substituted = op.substitute(&bindings);
        assert_eq!(substituted.parameters[0].ty, TypeRef::variable("T"));
    }

    #[test]
    fn returns_value() {
        assert!(!OperationSignature::new("test").returns_value());
        assert!(OperationSignature::new("test")
            .returning(string())
            .returns_value());
    }
}
