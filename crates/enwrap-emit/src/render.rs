//! Rendering of a generated envelope spec to Java source text.
//!
//! Output shape: generated-code marker, package line, sorted imports,
//! then `public abstract class <Name> implements <Source>` with the
//! protected final field, the public constructor, and one
//! `@Override public final` method per forwarding operation. Rendering
//! is pure and deterministic; persisting the text is the caller's job.

use enwrap_model::TypeParameter;
use enwrap_synth::{ForwardingOperation, GeneratedEnvelopeSpec};

use crate::imports::ImportTable;

/// Marker line at the top of every rendered file.
pub const GENERATED_HEADER: &str = "// Code generated by enwrap. DO NOT EDIT.";

// ── Source Unit ────────────────────────────────────────────────────────

/// One rendered source file, not yet persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceUnit {
    /// Namespace of the rendered type.
    pub namespace: String,
    /// Simple name of the rendered type.
    pub name: String,
    /// Full source text.
    pub content: String,
}

impl SourceUnit {
    /// File name of the unit, e.g. `FooEnvelope.java`.
    pub fn file_name(&self) -> String {
        format!("{}.java", self.name)
    }

    /// Path relative to a source root, with one directory per
    /// namespace segment.
    pub fn relative_path(&self) -> String {
        if self.namespace.is_empty() {
            self.file_name()
        } else {
            format!("{}/{}", self.namespace.replace('.', "/"), self.file_name())
        }
    }
}

// ── Rendering ──────────────────────────────────────────────────────────

/// Render one spec to a source unit.
pub fn render(spec: &GeneratedEnvelopeSpec) -> SourceUnit {
    let imports = ImportTable::for_spec(spec);
    let mut out = String::new();

    out.push_str(GENERATED_HEADER);
    out.push('\n');
    if !spec.namespace.is_empty() {
        out.push_str(&format!("package {};\n", spec.namespace));
    }
    let import_lines = imports.import_lines();
    if !import_lines.is_empty() {
        out.push('\n');
        for import in &import_lines {
            out.push_str(&format!("import {};\n", import));
        }
    }
    out.push('\n');

    out.push_str(&format!(
        "public abstract class {}{} implements {} {{\n",
        spec.name,
        type_parameter_list(&spec.type_parameters, &imports),
        imports.render(&spec.supertype),
    ));

    let field_type = imports.render(&spec.wrapped_field.ty);
    out.push_str(&format!(
        "  protected final {} {};\n",
        field_type, spec.wrapped_field.name,
    ));
    out.push('\n');
    out.push_str(&format!(
        "  public {}({} {}) {{\n",
        spec.name, field_type, spec.wrapped_field.name,
    ));
    out.push_str(&format!(
        "    this.{} = {};\n",
        spec.wrapped_field.name, spec.wrapped_field.name,
    ));
    out.push_str("  }\n");

    for operation in &spec.operations {
        out.push('\n');
        render_operation(operation, &imports, &mut out);
    }

    out.push_str("}\n");

    SourceUnit {
        namespace: spec.namespace.clone(),
        name: spec.name.clone(),
        content: out,
    }
}

fn render_operation(operation: &ForwardingOperation, imports: &ImportTable, out: &mut String) {
    out.push_str("  @Override\n");
    let mut header = String::from("  public final ");
    if !operation.type_parameters.is_empty() {
        header.push_str(&type_parameter_list(&operation.type_parameters, imports));
        header.push(' ');
    }
    header.push_str(&imports.render(&operation.return_type));
    header.push(' ');
    header.push_str(&operation.name);
    header.push('(');
    for (i, parameter) in operation.parameters.iter().enumerate() {
        if i > 0 {
            header.push_str(", ");
        }
        header.push_str(&imports.render(&parameter.ty));
        header.push(' ');
        header.push_str(&parameter.name);
    }
    header.push(')');
    if !operation.throws.is_empty() {
        header.push_str(" throws ");
        let thrown: Vec<String> = operation.throws.iter().map(|t| imports.render(t)).collect();
        header.push_str(&thrown.join(", "));
    }
    header.push_str(" {\n");
    out.push_str(&header);

    let mut statement = String::from("    ");
    if operation.body.returns {
        statement.push_str("return ");
    }
    statement.push_str(&format!(
        "{}.{}({});\n",
        operation.body.receiver,
        operation.body.operation,
        operation.body.arguments.join(", "),
    ));
    out.push_str(&statement);
    out.push_str("  }\n");
}

fn type_parameter_list(parameters: &[TypeParameter], imports: &ImportTable) -> String {
    if parameters.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = parameters
        .iter()
        .map(|parameter| {
            if parameter.bounds.is_empty() {
                parameter.name.clone()
            } else {
                let bounds: Vec<String> =
                    parameter.bounds.iter().map(|b| imports.render(b)).collect();
                format!("{} extends {}", parameter.name, bounds.join(" & "))
            }
        })
        .collect();
    format!("<{}>", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use enwrap_model::{InMemoryModel, OperationSignature, TypeDecl, TypeRef};
    use enwrap_synth::{EnvelopeSynthesizer, SynthConfig};

    fn string() -> TypeRef {
        TypeRef::named("java.lang.String")
    }

    fn synthesize(model: &InMemoryModel, name: &str) -> GeneratedEnvelopeSpec {
        EnvelopeSynthesizer::new(model).synthesize(name).unwrap()
    }

    fn synthesize_generic(model: &InMemoryModel, name: &str) -> GeneratedEnvelopeSpec {
        EnvelopeSynthesizer::new(model)
            .with_config(SynthConfig {
                generic: true,
                ..SynthConfig::default()
            })
            .synthesize(name)
            .unwrap()
    }

    #[test]
    fn marker_interface_renders_field_and_constructor_only() {
        let model =
            InMemoryModel::from_decls(vec![TypeDecl::interface("", "AnInterface")]).unwrap();
        let unit = render(&synthesize(&model, "AnInterface"));
        assert_eq!(
            unit.content,
            "\
// Code generated by enwrap. DO NOT EDIT.

public abstract class AnInterfaceEnvelope implements AnInterface {
  protected final AnInterface wrapped;

  public AnInterfaceEnvelope(AnInterface wrapped) {
    this.wrapped = wrapped;
  }
}
"
        );
    }

    #[test]
    fn package_line_and_path_preserved() {
        let model =
            InMemoryModel::from_decls(vec![TypeDecl::interface("a.complex.pkg", "AnInterface")])
                .unwrap();
        let unit = render(&synthesize(&model, "a.complex.pkg.AnInterface"));
        assert!(unit.content.contains("package a.complex.pkg;\n"));
        assert_eq!(unit.relative_path(), "a/complex/pkg/AnInterfaceEnvelope.java");
        assert_eq!(unit.file_name(), "AnInterfaceEnvelope.java");
    }

    #[test]
    fn void_and_value_operations_render_forwarding_bodies() {
        let model = InMemoryModel::from_decls(vec![TypeDecl::interface("", "AnInterface")
            .with_operations(vec![
                OperationSignature::new("test")
                    .with_parameter("a", string())
                    .with_parameter("b", TypeRef::primitive("int")),
                OperationSignature::new("name").returning(string()),
            ])])
        .unwrap();
        let unit = render(&synthesize(&model, "AnInterface"));
        assert!(unit.content.contains(
            "  @Override\n  public final void test(String a, int b) {\n    wrapped.test(a, b);\n  }\n"
        ));
        assert!(unit.content.contains(
            "  @Override\n  public final String name() {\n    return wrapped.name();\n  }\n"
        ));
        assert!(unit.content.contains("import java.lang.String;\n"));
    }

    #[test]
    fn exceptions_render_in_throws_clause() {
        let model = InMemoryModel::from_decls(vec![TypeDecl::interface("", "AnInterface")
            .with_operations(vec![OperationSignature::new("test")
                .throwing(TypeRef::named("java.lang.Exception"))])])
        .unwrap();
        let unit = render(&synthesize(&model, "AnInterface"));
        assert!(unit
            .content
            .contains("  public final void test() throws Exception {\n"));
    }

    #[test]
    fn generic_envelope_renders_self_type_parameter_last() {
        let model = InMemoryModel::from_decls(vec![TypeDecl::interface("", "Foo")
            .with_type_parameters(vec![enwrap_model::TypeParameter::new("X")])])
        .unwrap();
        let unit = render(&synthesize_generic(&model, "Foo"));
        assert!(unit.content.contains(
            "public abstract class FooEnvelope<X, W extends Foo<X>> implements Foo<X> {\n"
        ));
        assert!(unit.content.contains("  protected final W wrapped;\n"));
        assert!(unit.content.contains("  public FooEnvelope(W wrapped) {\n"));
    }

    #[test]
    fn operation_generic_parameters_render_before_return_type() {
        let model = InMemoryModel::from_decls(vec![TypeDecl::interface("", "AnInterface")
            .with_operations(vec![OperationSignature::new("apply")
                .with_type_parameters(vec![enwrap_model::TypeParameter::new("T")])
                .with_parameter("t", TypeRef::variable("T"))
                .returning(TypeRef::variable("T"))])])
        .unwrap();
        let unit = render(&synthesize(&model, "AnInterface"));
        assert!(unit
            .content
            .contains("  public final <T> T apply(T t) {\n    return wrapped.apply(t);\n  }\n"));
    }

    #[test]
    fn imports_are_sorted_and_deduplicated() {
        let model = InMemoryModel::from_decls(vec![TypeDecl::interface("", "AnInterface")
            .with_operations(vec![
                OperationSignature::new("read")
                    .returning(string())
                    .throwing(TypeRef::named("java.io.IOException")),
                OperationSignature::new("write").with_parameter("value", string()),
            ])])
        .unwrap();
        let unit = render(&synthesize(&model, "AnInterface"));
        let io = unit.content.find("import java.io.IOException;").unwrap();
        let lang = unit.content.find("import java.lang.String;").unwrap();
        assert!(io < lang);
        assert_eq!(unit.content.matches("import java.lang.String;").count(), 1);
    }

    #[test]
    fn nested_source_interface_renders_flat_envelope_name() {
        let model = InMemoryModel::from_decls(vec![
            TypeDecl::class("a.pkg", "AClass"),
            TypeDecl::interface("a.pkg", "AnInnerInterface").nested_in(&["AClass"]),
        ])
        .unwrap();
        let unit = render(&synthesize(&model, "a.pkg.AClass.AnInnerInterface"));
        assert!(unit.content.contains("import a.pkg.AClass.AnInnerInterface;\n"));
        assert!(unit.content.contains(
            "public abstract class AClassAnInnerInterfaceEnvelope implements AnInnerInterface {\n"
        ));
    }
}
