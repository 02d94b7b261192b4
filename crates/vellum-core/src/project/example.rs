//! Example-instance generation.
//!
//! Produces one concrete state instance satisfying a scope's schema: every
//! required field gets a canonical sample value, optional fields are
//! omitted. Used as a fixture next to the emitted JSON Schema.

use serde_json::{Map, Value, json};
use vellum_schema::{
    node::{FieldKind, FieldList},
    types::Scalar,
};

#[must_use]
pub fn example_state(fields: &FieldList) -> Value {
    let mut out = Map::new();

    for field in fields {
        if field.nullable {
            continue;
        }

        let value = match &field.kind {
            FieldKind::Primitive { scalar } => sample_scalar(*scalar),
            FieldKind::Array { item } => json!([sample_scalar(item.scalar)]),
        };

        out.insert(field.name.clone(), value);
    }

    Value::Object(out)
}

fn sample_scalar(scalar: Scalar) -> Value {
    match scalar {
        Scalar::Id => json!("example-id"),
        Scalar::String => json!("example"),
        Scalar::Number => json!(1.0),
        Scalar::Boolean => json!(true),
        Scalar::Date => json!("2024-01-02T00:00:00Z"),
        Scalar::AmountCrypto => json!({ "amount": 1.0, "currency": "BTC" }),
    }
}
