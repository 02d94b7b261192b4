use crate::{err, error::ErrorTree, node::DocumentModelDescriptor};
use std::collections::{BTreeMap, BTreeSet};

pub fn validate_scope_naming(model: &DocumentModelDescriptor, errs: &mut ErrorTree) {
    let mut seen = BTreeSet::new();

    for state in &model.scopes {
        if !seen.insert(state.scope.as_str()) {
            err!(errs, "duplicate scope '{}' in document model '{}'", state.scope, model.name);
        }
    }
}

pub fn validate_action_scopes(model: &DocumentModelDescriptor, errs: &mut ErrorTree) {
    for action in &model.actions {
        if model.get_scope(&action.scope).is_none() {
            errs.add(
                format!("actions.{}", action.label),
                format!("action targets undeclared scope '{}'", action.scope),
            );
        }
    }
}

pub fn validate_action_types(model: &DocumentModelDescriptor, errs: &mut ErrorTree) {
    let mut by_scope: BTreeMap<(String, String), String> = BTreeMap::new();

    for action in &model.actions {
        let key = (action.scope.clone(), action.literal());

        if let Some(prev) = by_scope.insert(key.clone(), action.label.clone()) {
            err!(
                errs,
                "duplicate action type '{}' in scope '{}' for labels '{prev}' and '{}'",
                key.1,
                key.0,
                action.label
            );
        }
    }
}
