//! Type references and type parameters.
//!
//! A `TypeRef` is how the model talks about types: the void marker,
//! primitives, named (possibly parameterized) types, and references to
//! type parameters in scope. Substitution of type-parameter references
//! is what makes resolution through parameterized supertypes work.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ── Type Reference ─────────────────────────────────────────────────────

/// A reference to a type in the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    /// The void marker for operations that return nothing.
    Void,
    /// A primitive type (`int`, `boolean`, ...).
    Primitive(String),
    /// A named type, identified by its qualified name, with type arguments.
    Named {
        /// Qualified name, e.g. `java.lang.String` or `a.pkg.Outer.Inner`.
        name: String,
        /// Type arguments, empty for a raw reference.
        arguments: Vec<TypeRef>,
    },
    /// A reference to a type parameter in scope, by name.
    Variable(String),
}

impl TypeRef {
    /// A named type with no arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// A named type with type arguments.
    pub fn parameterized(name: impl Into<String>, arguments: Vec<TypeRef>) -> Self {
        Self::Named {
            name: name.into(),
            arguments,
        }
    }

    /// A reference to a type parameter in scope.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// A primitive type.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive(name.into())
    }

    /// Whether this is the void marker.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Serde default for omitted return types.
    pub(crate) fn void_marker() -> TypeRef {
        TypeRef::Void
    }

    /// Replace type-parameter references per `bindings`, recursively.
    ///
    /// Unbound variables are left untouched.
    pub fn substitute(&self, bindings: &HashMap<String, TypeRef>) -> TypeRef {
        match self {
            Self::Void | Self::Primitive(_) => self.clone(),
            Self::Variable(name) => bindings.get(name).cloned().unwrap_or_else(|| self.clone()),
            Self::Named { name, arguments } => Self::Named {
                name: name.clone(),
                arguments: arguments.iter().map(|a| a.substitute(bindings)).collect(),
            },
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Primitive(name) | Self::Variable(name) => write!(f, "{}", name),
            Self::Named { name, arguments } => {
                write!(f, "{}", name)?;
                if !arguments.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in arguments.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
        }
    }
}

// ── Type Parameter ─────────────────────────────────────────────────────

/// A declared generic type parameter: a name plus its bounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeParameter {
    /// Parameter name, e.g. `A`.
    pub name: String,
    /// Upper bounds, empty for an unbounded parameter.
    #[serde(default)]
    pub bounds: Vec<TypeRef>,
}

impl TypeParameter {
    /// An unbounded type parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    /// A type parameter with one upper bound.
    pub fn bounded(name: impl Into<String>, bound: TypeRef) -> Self {
        Self {
            name: name.into(),
            bounds: vec![bound],
        }
    }
}

// ── Formal Parameter ───────────────────────────────────────────────────

/// A formal parameter of an operation: a name plus its type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, preserved into the generated forwarding operation.
    pub name: String,
    /// Parameter type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl Parameter {
    /// A formal parameter.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
