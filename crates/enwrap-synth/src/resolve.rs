//! Interface resolution: the full, deduplicated operation set.
//!
//! The walk visits the interface's own declared operations first, then
//! each direct supertype's resolved set in declaration order,
//! recursively. The first occurrence of a signature identity wins, so a
//! local re-declaration (an override, typically narrowing the exception
//! list) beats every inherited one, and diamond inheritance contributes
//! a signature once.

use std::collections::{HashMap, HashSet};

use enwrap_model::{
    OperationSignature, SignatureKey, TypeModel, TypeParameter, TypeRef, TypeShape,
};

use crate::error::{SynthError, SynthResult};

// ── Interface Descriptor ───────────────────────────────────────────────

/// A resolved interface: identity facts plus the transitive,
/// deduplicated operation set.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDescriptor {
    /// Namespace of the source interface.
    pub namespace: String,
    /// Simple names of enclosing types, outermost first.
    pub enclosing: Vec<String>,
    /// The interface's own simple name.
    pub simple_name: String,
    /// The interface's own type parameters, in declaration order.
    pub type_parameters: Vec<TypeParameter>,
    /// Ordered, deduplicated operations; most-local declarations first.
    pub operations: Vec<OperationSignature>,
}

impl InterfaceDescriptor {
    /// The qualified name of the source interface.
    pub fn qualified_name(&self) -> String {
        let mut segments = Vec::new();
        if !self.namespace.is_empty() {
            segments.push(self.namespace.clone());
        }
        segments.extend(self.enclosing.iter().cloned());
        segments.push(self.simple_name.clone());
        segments.join(".")
    }

    /// The source interface as a type reference, parameterized with its
    /// own type arguments.
    pub fn self_type(&self) -> TypeRef {
        TypeRef::parameterized(
            self.qualified_name(),
            self.type_parameters
                .iter()
                .map(|p| TypeRef::variable(&p.name))
                .collect(),
        )
    }
}

// ── Resolution ─────────────────────────────────────────────────────────

/// Resolve an interface to its descriptor.
///
/// Fails with [`SynthError::NotAnInterface`] for anything that is not
/// interface-shaped; no partial descriptor is ever returned.
pub fn resolve_interface(model: &dyn TypeModel, name: &str) -> SynthResult<InterfaceDescriptor> {
    let shape = model
        .shape(name)
        .ok_or_else(|| SynthError::UnknownType(name.to_string()))?;
    if shape != TypeShape::Interface {
        return Err(SynthError::NotAnInterface(name.to_string()));
    }
    let mut seen: HashSet<SignatureKey> = HashSet::new();
    let mut operations = Vec::new();
    let mut visiting = Vec::new();
    collect(
        model,
        name,
        &HashMap::new(),
        &mut seen,
        &mut operations,
        &mut visiting,
    )?;
    Ok(InterfaceDescriptor {
        namespace: model.namespace(name).unwrap_or_default(),
        enclosing: model.enclosing_scopes(name),
        simple_name: model
            .simple_name(name)
            .unwrap_or_else(|| name.to_string()),
        type_parameters: model.type_parameters(name),
        operations,
    })
}

/// One step of the preorder walk: local operations, then supertypes.
fn collect(
    model: &dyn TypeModel,
    name: &str,
    bindings: &HashMap<String, TypeRef>,
    seen: &mut HashSet<SignatureKey>,
    out: &mut Vec<OperationSignature>,
    visiting: &mut Vec<String>,
) -> SynthResult<()> {
    if visiting.iter().any(|v| v == name) {
        return Err(SynthError::MalformedModel {
            name: name.to_string(),
            reason: "cyclic inheritance chain".into(),
        });
    }
    visiting.push(name.to_string());

    for operation in model.local_operations(name) {
        let operation = operation.substitute(bindings);
        if seen.insert(operation.key()) {
            out.push(operation);
        }
    }

    for supertype in model.direct_supertypes(name) {
        let supertype = supertype.substitute(bindings);
        let (super_name, arguments) = match supertype {
            TypeRef::Named { name, arguments } => (name, arguments),
            other => {
                return Err(SynthError::MalformedModel {
                    name: name.to_string(),
                    reason: format!("supertype reference `{}` is not a named type", other),
                })
            }
        };
        match model.shape(&super_name) {
            Some(TypeShape::Interface) => {}
            Some(_) => {
                return Err(SynthError::MalformedModel {
                    name: name.to_string(),
                    reason: format!("supertype `{}` is not an interface", super_name),
                })
            }
            None => {
                return Err(SynthError::MalformedModel {
                    name: name.to_string(),
                    reason: format!("supertype `{}` is not in the model", super_name),
                })
            }
        }
        let parameters = model.type_parameters(&super_name);
        if parameters.len() != arguments.len() {
            return Err(SynthError::MalformedModel {
                name: name.to_string(),
                reason: format!(
                    "supertype `{}` expects {} type arguments, got {}",
                    super_name,
                    parameters.len(),
                    arguments.len()
                ),
            });
        }
        let super_bindings: HashMap<String, TypeRef> = parameters
            .iter()
            .map(|p| p.name.clone())
            .zip(arguments)
            .collect();
        collect(model, &super_name, &super_bindings, seen, out, visiting)?;
    }

    visiting.pop();
    Ok(())
}
