//! JSON Schema reflection.
//!
//! The JSON Schema projection is derived from the runtime validator, not
//! independently from field descriptors. Optional object fields are dropped
//! from `required`; optional values elsewhere become a null union.

use crate::validate::Validator;
use serde_json::{Map, Value, json};
use vellum_schema::types::Scalar;

impl Validator {
    /// Reflect this validator into JSON Schema form.
    ///
    /// Key order in `properties` follows declaration order; emitted bytes
    /// are stable across invocations.
    #[must_use]
    pub fn json_schema(&self) -> Value {
        match self {
            Self::Scalar(scalar) => scalar_schema(*scalar),
            Self::Literal(value) => json!({ "type": "string", "const": value }),
            Self::Optional(inner) => json!({
                "anyOf": [inner.json_schema(), { "type": "null" }],
            }),
            Self::Array(item) => json!({
                "type": "array",
                "items": item.json_schema(),
            }),
            Self::Object(fields) => object_schema(fields),
            Self::Opaque => json!({}),
        }
    }
}

fn object_schema(fields: &[(String, Validator)]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for (name, validator) in fields {
        properties.insert(name.clone(), validator.json_schema());

        if !validator.is_optional() {
            required.push(Value::String(name.clone()));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert("required".to_string(), Value::Array(required));
    schema.insert("additionalProperties".to_string(), json!(false));

    Value::Object(schema)
}

fn scalar_schema(scalar: Scalar) -> Value {
    match scalar {
        Scalar::Id => json!({ "type": "string", "minLength": 1 }),
        Scalar::String => json!({ "type": "string" }),
        Scalar::Number => json!({ "type": "number" }),
        Scalar::Boolean => json!({ "type": "boolean" }),
        Scalar::Date => json!({ "type": "string", "format": "date-time" }),
        Scalar::AmountCrypto => crate::validate::amount_crypto().json_schema(),
    }
}
