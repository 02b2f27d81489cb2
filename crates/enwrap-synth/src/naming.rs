//! Naming of generated envelopes.
//!
//! The generated type gets a single flat identifier built from the
//! enclosing-scope chain, so `a.b.Outer.Inner` becomes
//! `a.b.OuterInnerEnvelope`. The namespace is preserved unchanged.
//! Collisions between independently processed interfaces are out of
//! scope here; the consuming build must keep distinct sources from
//! clashing.

use crate::resolve::InterfaceDescriptor;

/// The default suffix appended to generated envelope names.
pub const DEFAULT_SUFFIX: &str = "Envelope";

/// The flat simple name of the envelope generated for `source`:
/// enclosing scopes outermost to innermost, the interface's own simple
/// name, then `suffix`.
pub fn envelope_name(source: &InterfaceDescriptor, suffix: &str) -> String {
    let mut name = String::new();
    for scope in &source.enclosing {
        name.push_str(scope);
    }
    name.push_str(&source.simple_name);
    name.push_str(suffix);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(enclosing: &[&str], simple_name: &str) -> InterfaceDescriptor {
        InterfaceDescriptor {
            namespace: "a.b".into(),
            enclosing: enclosing.iter().map(|s| s.to_string()).collect(),
            simple_name: simple_name.into(),
            type_parameters: vec![],
            operations: vec![],
        }
    }

    #[test]
    fn top_level_name_is_simple_name_plus_suffix() {
        assert_eq!(
            envelope_name(&descriptor(&[], "AnInterface"), DEFAULT_SUFFIX),
            "AnInterfaceEnvelope"
        );
    }

    #[test]
    fn nested_name_prepends_enclosing_scopes() {
        assert_eq!(
            envelope_name(&descriptor(&["Outer"], "Inner"), DEFAULT_SUFFIX),
            "OuterInnerEnvelope"
        );
    }

    #[test]
    fn deeply_nested_name_preserves_order() {
        assert_eq!(
            envelope_name(&descriptor(&["A", "B"], "C"), DEFAULT_SUFFIX),
            "ABCEnvelope"
        );
    }

    #[test]
    fn custom_suffix() {
        assert_eq!(
            envelope_name(&descriptor(&[], "Foo"), "Wrapper"),
            "FooWrapper"
        );
    }
}
