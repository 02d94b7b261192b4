//! Narrowing predicates.
//!
//! Boolean structural checks used to select, among several registered
//! document models, the one matching an unknown-typed value at runtime.
//! They never raise and report no detail; diagnostics belong to the
//! reducer boundary.

use crate::model::DocumentModel;
use serde_json::Value;
use vellum_schema::node::DocumentModelDescriptor;

/// Does this value conform to the model's whole-document schema?
#[must_use]
pub fn is_document_of_type(model: &DocumentModel, value: &Value) -> bool {
    model.accepts_document(value)
}

/// Does this value conform to any action schema registered on the model?
#[must_use]
pub fn is_action_of_type(model: &DocumentModel, value: &Value) -> bool {
    model.accepts_action(value)
}

/// Is this value a well-formed document-model descriptor that compiles
/// cleanly?
#[must_use]
pub fn is_document_model_of_type(value: &Value) -> bool {
    serde_json::from_value::<DocumentModelDescriptor>(value.clone())
        .is_ok_and(|descriptor| DocumentModel::compile(descriptor).is_ok())
}
