//! JSON Schema emission.
//!
//! The document is reflected from the runtime validator and then extended
//! with two fixed metadata fields: a `$schema` self-reference and the
//! whitespace-collapsed GraphQL emission. The result is the single
//! distributable artifact carrying all three projections' content.

use crate::project::{collapse_whitespace, state_graphql, state_type_name, state_validator};
use serde_json::{Map, Value, json};
use vellum_schema::node::FieldList;

#[must_use]
pub fn state_json_schema(scope: &str, fields: &FieldList) -> Value {
    let type_name = state_type_name(scope);
    let reflected = state_validator(fields).json_schema();

    let mut schema = Map::new();
    schema.insert("$schema".to_string(), json!(format!("./{type_name}Schema.json")));
    schema.insert(
        "graphql".to_string(),
        json!(collapse_whitespace(&state_graphql(scope, fields))),
    );

    if let Value::Object(reflected) = reflected {
        schema.extend(reflected);
    }

    Value::Object(schema)
}
