//! The runtime validator tree.
//!
//! One typed tree serves as the shared intermediate representation for all
//! three schema projections: it validates values directly, reflects itself
//! into JSON Schema form, and prints its own definition source. The three
//! representations cannot drift because each is derived from this tree.

mod print;
mod reflect;

#[cfg(test)]
mod tests;

use serde_json::Value;
use std::fmt;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use vellum_schema::types::Scalar;

///
/// Violation
///
/// One schema non-conformance: the violating path plus expected vs actual
/// shape.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Violation {
    pub path: String,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}: expected {}, got {}", self.path, self.expected, self.actual)
    }
}

///
/// Validator
///
/// Composable validator combinators. `Optional` accepts JSON null or an
/// absent object key; `Opaque` accepts anything (signer payloads, operation
/// log entries). Object validation is strict: undeclared keys are
/// violations.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Validator {
    Scalar(Scalar),
    Literal(String),
    Optional(Box<Validator>),
    Array(Box<Validator>),
    Object(Vec<(String, Validator)>),
    Opaque,
}

impl Validator {
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    #[must_use]
    pub fn array(item: Self) -> Self {
        Self::Array(Box::new(item))
    }

    #[must_use]
    pub fn object(fields: Vec<(impl Into<String>, Self)>) -> Self {
        Self::Object(
            fields
                .into_iter()
                .map(|(name, validator)| (name.into(), validator))
                .collect(),
        )
    }

    /// Wrap this validator so that null/absent values are accepted.
    #[must_use]
    pub fn optional(self) -> Self {
        match self {
            Self::Optional(_) => self,
            other => Self::Optional(Box::new(other)),
        }
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Validate a value, collecting every violation with its path.
    pub fn validate(&self, value: &Value) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        self.check("$", Some(value), &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Non-throwing conformance test.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        self.validate(value).is_ok()
    }

    fn check(&self, path: &str, value: Option<&Value>, out: &mut Vec<Violation>) {
        match self {
            Self::Optional(inner) => match value {
                None | Some(Value::Null) => {}
                Some(v) => inner.check(path, Some(v), out),
            },
            Self::Opaque => {
                if value.is_none() {
                    out.push(violation(path, "any value", None));
                }
            }
            Self::Scalar(scalar) => check_scalar(*scalar, path, value, out),
            Self::Literal(expected) => match value {
                Some(Value::String(s)) if s == expected => {}
                other => out.push(violation(path, &format!("literal \"{expected}\""), other)),
            },
            Self::Array(item) => match value {
                Some(Value::Array(items)) => {
                    for (index, element) in items.iter().enumerate() {
                        item.check(&format!("{path}[{index}]"), Some(element), out);
                    }
                }
                other => out.push(violation(path, "array", other)),
            },
            Self::Object(fields) => match value {
                Some(Value::Object(map)) => {
                    for (name, validator) in fields {
                        validator.check(&format!("{path}.{name}"), map.get(name), out);
                    }
                    for key in map.keys() {
                        if !fields.iter().any(|(name, _)| name == key) {
                            out.push(Violation {
                                path: format!("{path}.{key}"),
                                expected: "no such field".to_string(),
                                actual: "present".to_string(),
                            });
                        }
                    }
                }
                other => out.push(violation(path, "object", other)),
            },
        }
    }
}

fn check_scalar(scalar: Scalar, path: &str, value: Option<&Value>, out: &mut Vec<Violation>) {
    match scalar {
        Scalar::Id => match value {
            Some(Value::String(s)) if !s.is_empty() => {}
            other => out.push(violation(path, "non-empty id string", other)),
        },
        Scalar::String => match value {
            Some(Value::String(_)) => {}
            other => out.push(violation(path, "string", other)),
        },
        Scalar::Number => match value {
            Some(Value::Number(_)) => {}
            other => out.push(violation(path, "number", other)),
        },
        Scalar::Boolean => match value {
            Some(Value::Bool(_)) => {}
            other => out.push(violation(path, "boolean", other)),
        },
        Scalar::Date => match value {
            Some(Value::String(s)) if OffsetDateTime::parse(s, &Rfc3339).is_ok() => {}
            other => out.push(violation(path, "RFC 3339 date-time string", other)),
        },
        Scalar::AmountCrypto => amount_crypto().check(path, value, out),
    }
}

/// Composed validator for the `amount_crypto` scalar.
pub(crate) fn amount_crypto() -> Validator {
    Validator::object(vec![
        ("amount", Validator::Scalar(Scalar::Number)),
        ("currency", Validator::Scalar(Scalar::String)),
    ])
}

fn violation(path: &str, expected: &str, actual: Option<&Value>) -> Violation {
    Violation {
        path: path.to_string(),
        expected: expected.to_string(),
        actual: describe(actual),
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "absent".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(_)) => "boolean".to_string(),
        Some(Value::Number(_)) => "number".to_string(),
        Some(Value::String(s)) => format!("string \"{s}\""),
        Some(Value::Array(_)) => "array".to_string(),
        Some(Value::Object(_)) => "object".to_string(),
    }
}
