//! Delegation synthesis: one forwarding operation per resolved
//! signature.

use enwrap_model::OperationSignature;

use crate::spec::{ForwardingCall, ForwardingOperation};

/// Build the forwarding operation for one resolved signature.
///
/// Name, formal parameters, exceptions and own generic parameters are
/// preserved. The body is a single statement invoking the same-named
/// operation on `receiver` with the same arguments in order; the result
/// is returned directly when the signature produces a value, unmodified
/// in either case.
pub fn forwarding_operation(
    signature: &OperationSignature,
    receiver: &str,
) -> ForwardingOperation {
    ForwardingOperation {
        name: signature.name.clone(),
        type_parameters: signature.type_parameters.clone(),
        parameters: signature.parameters.clone(),
        return_type: signature.return_type.clone(),
        throws: signature.throws.clone(),
        body: ForwardingCall {
            receiver: receiver.to_string(),
            operation: signature.name.clone(),
            arguments: signature.parameters.iter().map(|p| p.name.clone()).collect(),
            returns: signature.returns_value(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enwrap_model::{TypeParameter, TypeRef};

    #[test]
    fn void_operation_forwards_without_returning() {
        let signature = OperationSignature::new("test");
        let operation = forwarding_operation(&signature, "wrapped");
        assert_eq!(operation.name, "test");
        assert_eq!(operation.body.receiver, "wrapped");
        assert_eq!(operation.body.operation, "test");
        assert!(operation.body.arguments.is_empty());
        assert!(!operation.body.returns);
    }

    #[test]
    fn value_operation_returns_the_result() {
        let signature =
            OperationSignature::new("test").returning(TypeRef::named("java.lang.String"));
        let operation = forwarding_operation(&signature, "wrapped");
        assert!(operation.body.returns);
        assert_eq!(operation.return_type, TypeRef::named("java.lang.String"));
    }

    #[test]
    fn arguments_follow_parameter_order() {
        let signature = OperationSignature::new("test")
            .with_parameter("a", TypeRef::named("java.lang.String"))
            .with_parameter("b", TypeRef::primitive("int"));
        let operation = forwarding_operation(&signature, "wrapped");
        assert_eq!(operation.body.arguments, vec!["a", "b"]);
        assert_eq!(operation.parameters[0].name, "a");
        assert_eq!(operation.parameters[1].name, "b");
    }

    #[test]
    fn exceptions_and_generic_parameters_preserved() {
        let signature = OperationSignature::new("apply")
            .with_type_parameters(vec![TypeParameter::new("T")])
            .with_parameter("t", TypeRef::variable("T"))
            .throwing(TypeRef::named("java.io.IOException"));
        let operation = forwarding_operation(&signature, "wrapped");
        assert_eq!(operation.type_parameters, vec![TypeParameter::new("T")]);
        assert_eq!(operation.throws, vec![TypeRef::named("java.io.IOException")]);
    }
}
