//! Batch documents: a serialized model plus the envelopes to generate.
//!
//! This is the on-disk input format of the CLI: the serde
//! representation of an in-memory model together with the list of
//! generation requests.

use serde::{Deserialize, Serialize};

use enwrap_model::{InMemoryModel, ModelResult, TypeDecl};

use crate::driver::GenerationRequest;

/// One batch of type declarations and generation requests.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BatchDocument {
    /// Every type declaration the model should know about.
    #[serde(default)]
    pub types: Vec<TypeDecl>,
    /// The envelopes to generate.
    #[serde(default)]
    pub generate: Vec<GenerationRequest>,
}

impl BatchDocument {
    /// Split the document into a validated model and its requests.
    pub fn into_parts(self) -> ModelResult<(InMemoryModel, Vec<GenerationRequest>)> {
        let model = InMemoryModel::from_decls(self.types)?;
        Ok((model, self.generate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enwrap_model::ModelError;

    #[test]
    fn document_parses_from_json() {
        let json = r#"{
            "types": [
                {"namespace": "a.pkg", "simple_name": "Foo", "shape": "Interface"}
            ],
            "generate": [
                {"element": "a.pkg.Foo", "config": {"generic": true, "suffix": "Envelope"}}
            ]
        }"#;
        let document: BatchDocument = serde_json::from_str(json).unwrap();
        let (model, requests) = document.into_parts().unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(requests.len(), 1);
        assert!(requests[0].config.generic);
    }

    #[test]
    fn duplicate_types_fail_validation() {
        let document = BatchDocument {
            types: vec![
                TypeDecl::interface("a.pkg", "Foo"),
                TypeDecl::interface("a.pkg", "Foo"),
            ],
            generate: vec![],
        };
        assert!(matches!(
            document.into_parts(),
            Err(ModelError::DuplicateType(_))
        ));
    }
}
