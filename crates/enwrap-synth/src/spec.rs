//! The generated envelope as a structured document.
//!
//! A `GeneratedEnvelopeSpec` is the complete output of one synthesis
//! call: everything an emitter needs to render the delegating type in a
//! concrete source syntax. The core itself performs no rendering and no
//! I/O.

use serde::{Deserialize, Serialize};

use enwrap_model::{Parameter, TypeParameter, TypeRef};

// ── Forwarding Operation ───────────────────────────────────────────────

/// One generated operation that forwards to the wrapped instance.
///
/// Forwarding operations are rendered non-overridable (`final`) by
/// policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForwardingOperation {
    /// Operation name, identical to the source signature.
    pub name: String,
    /// The operation's own generic parameters, preserved verbatim.
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    /// Ordered formal parameters, names and types preserved.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Return type; the void marker for operations returning nothing.
    pub return_type: TypeRef,
    /// Declared exception types, preserved verbatim.
    #[serde(default)]
    pub throws: Vec<TypeRef>,
    /// The single statement making up the body.
    pub body: ForwardingCall,
}

/// The single forwarding statement of a generated operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForwardingCall {
    /// The field the call is made on.
    pub receiver: String,
    /// The operation invoked on the receiver (same name as the
    /// forwarding operation).
    pub operation: String,
    /// Argument names in parameter order.
    pub arguments: Vec<String>,
    /// Whether the statement's result is returned.
    pub returns: bool,
}

// ── Wrapped Field ──────────────────────────────────────────────────────

/// The single protected immutable field holding the wrapped instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WrappedField {
    /// Field name; also the name of the sole constructor parameter.
    pub name: String,
    /// Field type: the source interface itself, or the synthesized
    /// self-type parameter in generic mode.
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

// ── Generated Envelope Spec ────────────────────────────────────────────

/// The complete description of one generated envelope type.
///
/// Members are exactly: the wrapped field, one public constructor
/// taking a value of the field's type, and the forwarding operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedEnvelopeSpec {
    /// Namespace of the generated type; equals the source namespace.
    pub namespace: String,
    /// Flat simple name of the generated type.
    pub name: String,
    /// Type parameters: the source's own, plus the synthesized
    /// self-type parameter appended last in generic mode.
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    /// Name of the synthesized self-type parameter, when present.
    #[serde(default)]
    pub self_type_parameter: Option<String>,
    /// The implemented supertype: the source interface, parameterized
    /// with its own type arguments.
    pub supertype: TypeRef,
    /// The wrapped field.
    pub wrapped_field: WrappedField,
    /// Ordered forwarding operations.
    #[serde(default)]
    pub operations: Vec<ForwardingOperation>,
}

impl GeneratedEnvelopeSpec {
    /// The qualified name of the generated type.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_joins_namespace_and_name() {
        let spec = GeneratedEnvelopeSpec {
            namespace: "a.b".into(),
            name: "OuterInnerEnvelope".into(),
            type_parameters: vec![],
            self_type_parameter: None,
            supertype: TypeRef::named("a.b.Outer.Inner"),
            wrapped_field: WrappedField {
                name: "wrapped".into(),
                ty: TypeRef::named("a.b.Outer.Inner"),
            },
            operations: vec![],
        };
        assert_eq!(spec.qualified_name(), "a.b.OuterInnerEnvelope");
    }

    #[test]
    fn qualified_name_in_root_namespace() {
        let spec = GeneratedEnvelopeSpec {
            namespace: String::new(),
            name: "FooEnvelope".into(),
            type_parameters: vec![],
            self_type_parameter: None,
            supertype: TypeRef::named("Foo"),
            wrapped_field: WrappedField {
                name: "wrapped".into(),
                ty: TypeRef::named("Foo"),
            },
            operations: vec![],
        };
        assert_eq!(spec.qualified_name(), "FooEnvelope");
    }
}
