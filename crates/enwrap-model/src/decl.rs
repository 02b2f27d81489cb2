//! Type declarations as the model records them.

use serde::{Deserialize, Serialize};

use crate::signature::OperationSignature;
use crate::types::{TypeParameter, TypeRef};

// ── Shape ──────────────────────────────────────────────────────────────

/// The shape of a declared type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeShape {
    /// An interface contract; the only shape envelopes are generated for.
    Interface,
    /// A concrete or abstract class.
    Class,
    /// An enumeration.
    Enum,
}

// ── Declaration ────────────────────────────────────────────────────────

/// Everything the model knows about one declared type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Namespace (package) the type lives in; empty for the root namespace.
    #[serde(default)]
    pub namespace: String,
    /// Simple names of enclosing types, outermost first; empty for
    /// top-level declarations.
    #[serde(default)]
    pub enclosing: Vec<String>,
    /// The type's own simple name.
    pub simple_name: String,
    /// Declaration shape.
    pub shape: TypeShape,
    /// Declared type parameters, in order.
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    /// Locally declared operations, in declaration order.
    #[serde(default)]
    pub operations: Vec<OperationSignature>,
    /// Direct supertypes as (possibly parameterized) references, in
    /// declaration order.
    #[serde(default)]
    pub supertypes: Vec<TypeRef>,
}

impl TypeDecl {
    /// A top-level interface declaration.
    pub fn interface(namespace: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self::with_shape(namespace, simple_name, TypeShape::Interface)
    }

    /// A top-level class declaration.
    pub fn class(namespace: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self::with_shape(namespace, simple_name, TypeShape::Class)
    }

    fn with_shape(
        namespace: impl Into<String>,
        simple_name: impl Into<String>,
        shape: TypeShape,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            enclosing: Vec::new(),
            simple_name: simple_name.into(),
            shape,
            type_parameters: Vec::new(),
            operations: Vec::new(),
            supertypes: Vec::new(),
        }
    }

    /// Nest the declaration inside enclosing types, outermost first.
    pub fn nested_in(mut self, enclosing: &[&str]) -> Self {
        self.enclosing = enclosing.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the declared type parameters.
    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeParameter>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    /// Set the locally declared operations. Stamps each operation's
    /// declaring type.
    pub fn with_operations(mut self, operations: Vec<OperationSignature>) -> Self {
        let declared_by = self.qualified_name();
        self.operations = operations
            .into_iter()
            .map(|mut op| {
                op.declared_by = declared_by.clone();
                op
            })
            .collect();
        self
    }

    /// Set the direct supertypes, in declaration order.
    pub fn with_supertypes(mut self, supertypes: Vec<TypeRef>) -> Self {
        self.supertypes = supertypes;
        self
    }

    /// The qualified name: namespace, enclosing scopes, simple name.
    pub fn qualified_name(&self) -> String {
        let mut segments = Vec::new();
        if !self.namespace.is_empty() {
            segments.push(self.namespace.clone());
        }
        segments.extend(self.enclosing.iter().cloned());
        segments.push(self.simple_name.clone());
        segments.join(".")
    }
}
