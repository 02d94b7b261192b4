use crate::{
    error::ErrorTree,
    node::{ActionDescriptor, NodeError, StateDescriptor},
    validate::validate_model,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// DocumentModelDescriptor
///
/// The compile-time contract for one document type: its identity metadata
/// plus the scopes and actions it owns by value. Constructed once at
/// startup and immutable thereafter.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentModelDescriptor {
    pub id: String,
    pub name: String,
    pub document_type: String,
    pub file_extension: String,
    pub scopes: Vec<StateDescriptor>,
    pub actions: Vec<ActionDescriptor>,
}

impl DocumentModelDescriptor {
    #[must_use]
    pub fn get_scope(&self, scope: &str) -> Option<&StateDescriptor> {
        self.scopes.iter().find(|s| s.scope == scope)
    }

    /// Actions keyed by `(scope, literal)`. Two labels collapsing to the
    /// same literal within one scope are a naming collision.
    pub fn action_index(&self) -> Result<BTreeMap<(String, String), &ActionDescriptor>, NodeError> {
        let mut index = BTreeMap::new();

        for action in &self.actions {
            let key = (action.scope.clone(), action.literal());

            if index.insert(key.clone(), action).is_some() {
                return Err(NodeError::DuplicateActionType {
                    scope: key.0,
                    literal: key.1,
                });
            }
        }

        Ok(index)
    }

    /// Run full model validation in a staged, deterministic order.
    pub fn validate(&self) -> Result<(), ErrorTree> {
        validate_model(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{node::Field, registry::ScalarRegistry};

    fn descriptor() -> DocumentModelDescriptor {
        let registry = ScalarRegistry::new();

        DocumentModelDescriptor {
            id: "document-model-1".to_string(),
            name: "My Document Model".to_string(),
            document_type: "example/my-document-type".to_string(),
            file_extension: ".ph.mine".to_string(),
            scopes: vec![StateDescriptor::new("scope1", vec![
                Field::primitive(&registry, "something", "string", false).unwrap(),
            ])],
            actions: vec![ActionDescriptor::new("scope1", "action1", Vec::new())],
        }
    }

    #[test]
    fn action_index_keys_on_scope_and_literal() {
        let model = descriptor();
        let index = model.action_index().unwrap();

        assert!(index.contains_key(&("scope1".to_string(), "ACTION1".to_string())));
    }

    #[test]
    fn colliding_literals_are_rejected() {
        let mut model = descriptor();
        model
            .actions
            .push(ActionDescriptor::new("scope1", "Action1", Vec::new()));

        let err = model.action_index().unwrap_err();
        assert_eq!(err, NodeError::DuplicateActionType {
            scope: "scope1".to_string(),
            literal: "ACTION1".to_string(),
        });
    }

    #[test]
    fn well_formed_model_validates() {
        assert!(descriptor().validate().is_ok());
    }
}
