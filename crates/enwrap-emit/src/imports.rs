//! Import collection for rendered source files.
//!
//! Every distinct qualified type referenced by a spec is imported by
//! simple name. Types from the spec's own namespace and unqualified
//! names need no import. When two imports would share a simple name,
//! the alphabetically first keeps the import and the others render
//! fully qualified inline.

use std::collections::{BTreeMap, BTreeSet};

use enwrap_model::TypeRef;
use enwrap_synth::GeneratedEnvelopeSpec;

/// The resolved import set of one rendered file.
#[derive(Debug)]
pub struct ImportTable {
    namespace: String,
    /// simple name → imported qualified name
    imported: BTreeMap<String, String>,
}

impl ImportTable {
    /// Collect imports for every type the spec references.
    pub fn for_spec(spec: &GeneratedEnvelopeSpec) -> Self {
        let mut referenced = BTreeSet::new();
        collect(&spec.supertype, &mut referenced);
        collect(&spec.wrapped_field.ty, &mut referenced);
        for parameter in &spec.type_parameters {
            for bound in &parameter.bounds {
                collect(bound, &mut referenced);
            }
        }
        for operation in &spec.operations {
            for parameter in &operation.type_parameters {
                for bound in &parameter.bounds {
                    collect(bound, &mut referenced);
                }
            }
            for parameter in &operation.parameters {
                collect(&parameter.ty, &mut referenced);
            }
            collect(&operation.return_type, &mut referenced);
            for thrown in &operation.throws {
                collect(thrown, &mut referenced);
            }
        }

        let mut imported = BTreeMap::new();
        // The generated type's own simple name is never importable.
        imported.insert(spec.name.clone(), spec.qualified_name());
        for qualified in &referenced {
            let (prefix, simple) = split(qualified);
            if prefix == spec.namespace {
                continue;
            }
            imported
                .entry(simple.to_string())
                .or_insert_with(|| qualified.clone());
        }
        imported.retain(|_, qualified| *qualified != spec.qualified_name());
        Self {
            namespace: spec.namespace.clone(),
            imported,
        }
    }

    /// Imported qualified names, sorted.
    pub fn import_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.imported.values().cloned().collect();
        lines.sort();
        lines
    }

    /// Render a type reference using the shortest unambiguous form.
    pub fn render(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Void => "void".to_string(),
            TypeRef::Primitive(name) | TypeRef::Variable(name) => name.clone(),
            TypeRef::Named { name, arguments } => {
                let mut rendered = self.render_name(name);
                if !arguments.is_empty() {
                    rendered.push('<');
                    for (i, argument) in arguments.iter().enumerate() {
                        if i > 0 {
                            rendered.push_str(", ");
                        }
                        rendered.push_str(&self.render(argument));
                    }
                    rendered.push('>');
                }
                rendered
            }
        }
    }

    fn render_name(&self, qualified: &str) -> String {
        if !qualified.contains('.') {
            return qualified.to_string();
        }
        let (prefix, simple) = split(qualified);
        if prefix == self.namespace {
            return simple.to_string();
        }
        match self.imported.get(simple) {
            Some(imported) if imported == qualified => simple.to_string(),
            _ => qualified.to_string(),
        }
    }
}

fn collect(ty: &TypeRef, out: &mut BTreeSet<String>) {
    if let TypeRef::Named { name, arguments } = ty {
        if name.contains('.') {
            out.insert(name.clone());
        }
        for argument in arguments {
            collect(argument, out);
        }
    }
}

fn split(qualified: &str) -> (&str, &str) {
    match qualified.rfind('.') {
        Some(dot) => (&qualified[..dot], &qualified[dot + 1..]),
        None => ("", qualified),
    }
}
