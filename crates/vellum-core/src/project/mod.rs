//! The schema projector.
//!
//! Three pure emissions over one field traversal: the runtime validator
//! (compiled from descriptors), the GraphQL SDL type, and the JSON Schema
//! document reflected from the validator. For a fixed field sequence every
//! emission is byte-identical across invocations.

mod example;
mod graphql;
mod json_schema;

#[cfg(test)]
mod tests;

pub use example::example_state;
pub use graphql::state_graphql;
pub use json_schema::state_json_schema;

use crate::validate::Validator;
use convert_case::{Boundary, Case, Casing};
use vellum_schema::node::{Field, FieldKind, FieldList};

/// GraphQL-style type name for a scope's state (`"scope1"` becomes
/// `Scope1State`).
#[must_use]
pub fn state_type_name(scope: &str) -> String {
    let pascal = scope
        .with_boundaries(&[Boundary::SPACE, Boundary::UNDERSCORE, Boundary::HYPHEN])
        .to_case(Case::Pascal);

    format!("{pascal}State")
}

/// Compile a field sequence into its runtime object validator.
///
/// Nullability composition order is fixed: item-nullable wraps the scalar
/// first, container-nullable wraps the array last.
#[must_use]
pub fn state_validator(fields: &FieldList) -> Validator {
    Validator::Object(
        fields
            .iter()
            .map(|field| (field.name.clone(), field_validator(field)))
            .collect(),
    )
}

pub(crate) fn field_validator(field: &Field) -> Validator {
    let inner = match &field.kind {
        FieldKind::Primitive { scalar } => Validator::Scalar(*scalar),
        FieldKind::Array { item } => {
            let element = Validator::Scalar(item.scalar);
            let element = if item.nullable {
                element.optional()
            } else {
                element
            };

            Validator::array(element)
        }
    };

    if field.nullable { inner.optional() } else { inner }
}

/// Emit the validator-definition source artifact for one scope.
#[must_use]
pub fn state_source(scope: &str, fields: &FieldList) -> String {
    let type_name = state_type_name(scope);
    let body = state_validator(fields).render();

    format!("// {type_name}Schema\n{body}")
}

/// Collapse all whitespace runs to single spaces (used when embedding the
/// GraphQL emission inside the JSON Schema artifact).
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
