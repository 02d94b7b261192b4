//! Model validation orchestration and shared helpers.

pub mod naming;

use crate::{error::ErrorTree, node::DocumentModelDescriptor};

/// Run full model validation in a staged, deterministic order.
pub(crate) fn validate_model(model: &DocumentModelDescriptor) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(model);

    // Phase 2: enforce model-wide invariants.
    validate_global(model, &mut errors);

    errors.result()
}

fn validate_nodes(model: &DocumentModelDescriptor) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for state in &model.scopes {
        if let Err(errs) = state.validate() {
            errors.merge(&format!("scopes.{}", state.scope), errs);
        }
    }

    for action in &model.actions {
        if let Err(errs) = action.validate() {
            errors.merge(&format!("actions.{}", action.label), errs);
        }
    }

    errors
}

// Run global validation passes that require a full model view.
fn validate_global(model: &DocumentModelDescriptor, errors: &mut ErrorTree) {
    naming::validate_scope_naming(model, errors);
    naming::validate_action_scopes(model, errors);
    naming::validate_action_types(model, errors);
}
