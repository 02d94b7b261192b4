//! Runtime document and action types.
//!
//! Documents are created externally and mutated only through the validated
//! reducer; the `operations` log is an append-only audit trail this core
//! never reorders or drops.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

///
/// Signer
///
/// The action's originating identity. Carried but never verified here.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signer {
    pub address: String,
    pub network_id: String,
    pub chain_id: u64,
}

///
/// DocumentHeader
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    pub id: String,
    pub name: String,
    pub document_type: String,
    pub document_model_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_editor_id: Option<String>,
}

///
/// Operation
///
/// One applied action, as recorded in the document's audit log.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(rename = "type")]
    pub action_type: String,
    pub input: Value,
    pub signer: Value,
}

///
/// Document
///
/// `state` must contain exactly the scopes declared by the owning document
/// model; the validated reducer checks that on every entry and exit.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub header: DocumentHeader,
    pub state: BTreeMap<String, Value>,
    pub operations: Vec<Operation>,
}

impl Document {
    /// State for one scope, if present.
    #[must_use]
    pub fn scope_state(&self, scope: &str) -> Option<&Value> {
        self.state.get(scope)
    }
}

///
/// Action
///
/// `scope` names a scope of the target document; `action_type` must match
/// the derived literal of one registered action for that scope.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub scope: String,

    #[serde(rename = "type")]
    pub action_type: String,

    pub input: Value,
    pub signer: Value,
}

impl Action {
    pub fn new(
        scope: impl Into<String>,
        action_type: impl Into<String>,
        input: Value,
        signer: Value,
    ) -> Self {
        Self {
            scope: scope.into(),
            action_type: action_type.into(),
            input,
            signer,
        }
    }
}
