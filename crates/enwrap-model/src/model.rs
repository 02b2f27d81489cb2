//! The type-model contract and its in-memory implementation.
//!
//! The `TypeModel` trait is the seam between envelope synthesis and
//! whatever supplies type facts: a compiler front end, a loaded model
//! document, or a hand-built fixture. The resolver performs the
//! transitive inheritance walk itself using these primitives.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::decl::{TypeDecl, TypeShape};
use crate::error::{ModelError, ModelResult};
use crate::signature::OperationSignature;
use crate::types::{TypeParameter, TypeRef};

// ── TypeModel Trait ────────────────────────────────────────────────────

/// Source of type facts, addressed by qualified name.
///
/// Implementations answer *local* questions only: the shape of one
/// element, its own declared operations, its direct supertypes. The
/// transitive walk across inheritance belongs to the resolver.
pub trait TypeModel: Send + Sync {
    /// Shape of the named element, or `None` if unknown to the model.
    fn shape(&self, name: &str) -> Option<TypeShape>;

    /// Namespace of the named element.
    fn namespace(&self, name: &str) -> Option<String>;

    /// Simple names of the element's enclosing types, outermost first.
    fn enclosing_scopes(&self, name: &str) -> Vec<String>;

    /// The element's own simple name.
    fn simple_name(&self, name: &str) -> Option<String>;

    /// The element's declared type parameters, in order.
    fn type_parameters(&self, name: &str) -> Vec<TypeParameter>;

    /// The element's locally declared operations, in declaration order.
    fn local_operations(&self, name: &str) -> Vec<OperationSignature>;

    /// The element's direct supertypes, in declaration order.
    fn direct_supertypes(&self, name: &str) -> Vec<TypeRef>;
}

// ── In-Memory Model ────────────────────────────────────────────────────

/// A `TypeModel` backed by a map of declarations.
///
/// Doubles as the deserialization target for model documents and as the
/// fixture type for tests.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemoryModel {
    types: HashMap<String, TypeDecl>,
}

impl InMemoryModel {
    /// An empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from declarations, rejecting duplicates.
    pub fn from_decls(decls: Vec<TypeDecl>) -> ModelResult<Self> {
        let mut model = Self::new();
        for decl in decls {
            model.insert(decl)?;
        }
        Ok(model)
    }

    /// Insert one declaration.
    pub fn insert(&mut self, decl: TypeDecl) -> ModelResult<()> {
        let name = decl.qualified_name();
        if self.types.contains_key(&name) {
            return Err(ModelError::DuplicateType(name));
        }
        self.types.insert(name, decl);
        Ok(())
    }

    /// Look up a declaration by qualified name.
    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    /// Number of declarations in the model.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the model holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeModel for InMemoryModel {
    fn shape(&self, name: &str) -> Option<TypeShape> {
        self.get(name).map(|d| d.shape)
    }

    fn namespace(&self, name: &str) -> Option<String> {
        self.get(name).map(|d| d.namespace.clone())
    }

    fn enclosing_scopes(&self, name: &str) -> Vec<String> {
        self.get(name).map(|d| d.enclosing.clone()).unwrap_or_default()
    }

    fn simple_name(&self, name: &str) -> Option<String> {
        self.get(name).map(|d| d.simple_name.clone())
    }

    fn type_parameters(&self, name: &str) -> Vec<TypeParameter> {
        self.get(name)
            .map(|d| d.type_parameters.clone())
            .unwrap_or_default()
    }

    fn local_operations(&self, name: &str) -> Vec<OperationSignature> {
        self.get(name)
            .map(|d| d.operations.clone())
            .unwrap_or_default()
    }

    fn direct_supertypes(&self, name: &str) -> Vec<TypeRef> {
        self.get(name)
            .map(|d| d.supertypes.clone())
            .unwrap_or_default()
    }
}
