//! Artifact emission.
//!
//! Writes the projected schema texts to disk: per scope the validator
//! source, the GraphQL SDL, the JSON Schema, and one example instance; per
//! model the action-schemas source. Writes are whole-file; recovery from a
//! failed write is retrying the emission.

use crate::{
    factory::render_source,
    model::DocumentModel,
    project::{example_state, state_graphql, state_json_schema, state_source, state_type_name},
};
use serde_json::Value;
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

///
/// EmitError
///

#[derive(Debug, ThisError)]
pub enum EmitError {
    #[error("failed to write artifact '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

///
/// StateArtifacts
///
/// The in-memory artifact set for one scope.
///

#[derive(Clone, Debug, PartialEq)]
pub struct StateArtifacts {
    pub source: String,
    pub graphql: String,
    pub json_schema: Value,
    pub example: Value,
}

/// Project one scope's artifacts without touching the filesystem.
#[must_use]
pub fn state_artifacts(scope: &str, fields: &vellum_schema::node::FieldList) -> StateArtifacts {
    StateArtifacts {
        source: state_source(scope, fields),
        graphql: state_graphql(scope, fields),
        json_schema: state_json_schema(scope, fields),
        example: example_state(fields),
    }
}

/// Write every artifact for a compiled model into `dir`.
pub fn write_model_artifacts(dir: &Path, model: &DocumentModel) -> Result<(), EmitError> {
    for state in &model.descriptor().scopes {
        let artifacts = state_artifacts(&state.scope, &state.fields);
        let type_name = state_type_name(&state.scope);

        write_text(&dir.join(format!("{type_name}Schema.txt")), &artifacts.source)?;
        write_text(&dir.join(format!("{type_name}Schema.graphql")), &artifacts.graphql)?;
        write_json(&dir.join(format!("{type_name}Schema.json")), &artifacts.json_schema)?;
        write_json(&dir.join(format!("{type_name}.example.json")), &artifacts.example)?;
    }

    let actions: Vec<_> = model.actions().cloned().collect();
    write_text(&dir.join("action-schemas.txt"), &render_source(&actions))?;

    Ok(())
}

fn write_text(path: &Path, content: &str) -> Result<(), EmitError> {
    fs::write(path, content).map_err(|source| EmitError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn write_json(path: &Path, value: &Value) -> Result<(), EmitError> {
    let mut content = serde_json::to_string_pretty(value).unwrap_or_default();
    content.push('\n');

    write_text(path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::state_validator;
    use vellum_schema::{
        node::{ActionDescriptor, DocumentModelDescriptor, Field, StateDescriptor},
        registry::ScalarRegistry,
    };

    fn model() -> DocumentModel {
        let registry = ScalarRegistry::new();

        DocumentModel::compile(DocumentModelDescriptor {
            id: "document-model-1".to_string(),
            name: "Test".to_string(),
            document_type: "example/test".to_string(),
            file_extension: ".test".to_string(),
            scopes: vec![StateDescriptor::new("test", vec![
                Field::primitive(&registry, "id", "id", false).unwrap(),
                Field::array(&registry, "names", "string", true, true).unwrap(),
            ])],
            actions: vec![ActionDescriptor::new("test", "add name", vec![
                Field::primitive(&registry, "name", "string", false).unwrap(),
            ])],
        })
        .unwrap()
    }

    #[test]
    fn artifacts_are_written_per_scope() {
        let dir = tempfile::tempdir().unwrap();
        let model = model();

        write_model_artifacts(dir.path(), &model).unwrap();

        for name in [
            "TestStateSchema.txt",
            "TestStateSchema.graphql",
            "TestStateSchema.json",
            "TestState.example.json",
            "action-schemas.txt",
        ] {
            assert!(dir.path().join(name).exists(), "missing artifact {name}");
        }
    }

    #[test]
    fn written_example_validates_against_the_state_schema() {
        let dir = tempfile::tempdir().unwrap();
        let model = model();

        write_model_artifacts(dir.path(), &model).unwrap();

        let raw = fs::read_to_string(dir.path().join("TestState.example.json")).unwrap();
        let example: Value = serde_json::from_str(&raw).unwrap();

        let state = &model.descriptor().scopes[0];
        assert!(state_validator(&state.fields).accepts(&example));
    }

    #[test]
    fn emission_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let model = model();

        write_model_artifacts(dir.path(), &model).unwrap();
        let first = fs::read_to_string(dir.path().join("TestStateSchema.json")).unwrap();

        write_model_artifacts(dir.path(), &model).unwrap();
        let second = fs::read_to_string(dir.path().join("TestStateSchema.json")).unwrap();

        assert_eq!(first, second);
    }
}
