//! Document-model composition.
//!
//! Compiles a descriptor into the runtime schemas the reducer boundary
//! checks against: per-scope state validators, the `(scope, type)` action
//! table, and the whole-document validator.

use crate::{
    document::{Action, Document},
    factory::{ActionSchemas, action_schemas},
    manifest::ModuleMeta,
    project::state_validator,
    reducer::ValidatedReducer,
    validate::Validator,
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;
use vellum_schema::{
    error::ErrorTree,
    node::{DocumentModelDescriptor, NodeError},
    types::Scalar,
};

///
/// ModelError
///
/// Composition-time failures, fatal to the model's registration.
///

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("duplicate action type '{literal}' in scope '{scope}'")]
    DuplicateActionType { scope: String, literal: String },

    #[error("model validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// DocumentModel
///
/// A compiled document model: immutable after construction, owned schemas,
/// no sharing with other models.
///

#[derive(Debug)]
pub struct DocumentModel {
    descriptor: DocumentModelDescriptor,
    state_validators: BTreeMap<String, Validator>,
    actions: BTreeMap<(String, String), ActionSchemas>,
    document: Validator,
}

impl DocumentModel {
    /// Compile a descriptor, running full model validation first.
    pub fn compile(descriptor: DocumentModelDescriptor) -> Result<Self, ModelError> {
        // typed collision error first, full report second
        if let Err(NodeError::DuplicateActionType { scope, literal }) =
            descriptor.action_index()
        {
            return Err(ModelError::DuplicateActionType { scope, literal });
        }

        descriptor.validate().map_err(ModelError::Validation)?;

        let state_validators: BTreeMap<String, Validator> = descriptor
            .scopes
            .iter()
            .map(|state| (state.scope.clone(), state_validator(&state.fields)))
            .collect();

        let actions: BTreeMap<(String, String), ActionSchemas> = descriptor
            .actions
            .iter()
            .map(|action| {
                let schemas = action_schemas(action);

                ((schemas.scope.clone(), schemas.literal.clone()), schemas)
            })
            .collect();

        let document = document_validator(&descriptor, &state_validators);

        Ok(Self {
            descriptor,
            state_validators,
            actions,
            document,
        })
    }

    #[must_use]
    pub const fn descriptor(&self) -> &DocumentModelDescriptor {
        &self.descriptor
    }

    /// Read-only `{id, name}` metadata for manifest assembly.
    #[must_use]
    pub fn meta(&self) -> ModuleMeta {
        ModuleMeta {
            id: self.descriptor.id.clone(),
            name: self.descriptor.name.clone(),
        }
    }

    /// The whole-document validator.
    #[must_use]
    pub const fn document_validator(&self) -> &Validator {
        &self.document
    }

    /// The compiled state validator for one scope.
    #[must_use]
    pub fn state_validator(&self, scope: &str) -> Option<&Validator> {
        self.state_validators.get(scope)
    }

    /// The compiled schemas for one `(scope, type)` pair.
    #[must_use]
    pub fn action_schemas(&self, scope: &str, action_type: &str) -> Option<&ActionSchemas> {
        self.actions
            .get(&(scope.to_string(), action_type.to_string()))
    }

    /// Registered action schema sets, in `(scope, type)` order.
    pub fn actions(&self) -> impl Iterator<Item = &ActionSchemas> {
        self.actions.values()
    }

    /// Non-throwing conformance test for an unknown-typed document value.
    #[must_use]
    pub fn accepts_document(&self, value: &serde_json::Value) -> bool {
        self.document.accepts(value)
    }

    /// Non-throwing conformance test for an unknown-typed action value.
    #[must_use]
    pub fn accepts_action(&self, value: &serde_json::Value) -> bool {
        self.actions
            .values()
            .any(|schemas| schemas.action.accepts(value))
    }

    /// Wrap a raw transition function with entry/exit schema checks.
    pub fn wrap_reducer<F>(&self, transition: F) -> ValidatedReducer<'_>
    where
        F: Fn(Document, &Action) -> Document + 'static,
    {
        ValidatedReducer::new(self, Box::new(transition))
    }
}

fn document_validator(
    descriptor: &DocumentModelDescriptor,
    state_validators: &BTreeMap<String, Validator>,
) -> Validator {
    let header = Validator::object(vec![
        ("id", Validator::Scalar(Scalar::Id)),
        ("name", Validator::Scalar(Scalar::String)),
        (
            "documentType",
            Validator::literal(descriptor.document_type.clone()),
        ),
        ("documentModelId", Validator::Scalar(Scalar::Id)),
        (
            "preferredEditorId",
            Validator::Scalar(Scalar::Id).optional(),
        ),
    ]);

    // declaration order; strict object checking enforces the exact scope set
    let state = Validator::Object(
        descriptor
            .scopes
            .iter()
            .map(|scope| {
                (
                    scope.scope.clone(),
                    state_validators[&scope.scope].clone(),
                )
            })
            .collect(),
    );

    Validator::object(vec![
        ("header", header),
        ("state", state),
        ("operations", Validator::array(Validator::Opaque)),
    ])
}
