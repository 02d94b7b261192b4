//! GraphQL SDL emission.

use crate::project::state_type_name;
use std::fmt::Write;
use vellum_schema::node::{Field, FieldKind, FieldList};

/// Emit `type <Scope>State { ... }` for one scope's field sequence.
///
/// `!` marks non-null container or item positions; nullability composition
/// matches the runtime validator exactly.
#[must_use]
pub fn state_graphql(scope: &str, fields: &FieldList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "type {} {{", state_type_name(scope));

    for field in fields {
        let _ = writeln!(out, "  {}: {}", field.name, field_type(field));
    }

    out.push_str("}\n");
    out
}

fn field_type(field: &Field) -> String {
    let bang = if field.nullable { "" } else { "!" };

    match &field.kind {
        FieldKind::Primitive { scalar } => format!("{}{bang}", scalar.type_name()),
        FieldKind::Array { item } => {
            let item_bang = if item.nullable { "" } else { "!" };

            format!("[{}{item_bang}]{bang}", item.scalar.type_name())
        }
    }
}
