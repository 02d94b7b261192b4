//! The action schema factory.
//!
//! Turns one action descriptor into its paired input-schema and
//! action-schema validators plus the derived identifiers. The factory is
//! pure and deterministic: identical descriptors always produce identical
//! identifiers and schema text. Literal collisions across actions are
//! detected at model composition, not here.

use crate::{project::state_validator, validate::Validator};
use std::fmt::Write;
use vellum_schema::node::ActionDescriptor;

///
/// ActionSchemas
///
/// The two machine-checkable outputs for one action: the input-object
/// validator and the full action validator (literal scope, literal type
/// discriminator, conformant input, opaque signer).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActionSchemas {
    pub scope: String,
    pub symbol: String,
    pub literal: String,
    pub input: Validator,
    pub action: Validator,
}

/// Build the schema pair for one action descriptor.
#[must_use]
pub fn action_schemas(descriptor: &ActionDescriptor) -> ActionSchemas {
    let symbol = descriptor.symbol();
    let literal = descriptor.literal();
    let input = state_validator(&descriptor.input_fields);

    let action = Validator::object(vec![
        ("scope", Validator::literal(descriptor.scope.clone())),
        ("type", Validator::literal(literal.clone())),
        ("input", input.clone()),
        // carried but never verified
        ("signer", Validator::Opaque),
    ]);

    ActionSchemas {
        scope: descriptor.scope.clone(),
        symbol,
        literal,
        input,
        action,
    }
}

/// Emit the `action-schemas` source artifact for a set of actions.
#[must_use]
pub fn render_source(schemas: &[ActionSchemas]) -> String {
    let mut out = String::new();

    for schema in schemas {
        let _ = write!(out, "// {}ActionInputSchema\n{}", schema.symbol, schema.input.render());
        let _ = write!(out, "// {}ActionSchema\n{}", schema.symbol, schema.action.render());
    }

    out
}
