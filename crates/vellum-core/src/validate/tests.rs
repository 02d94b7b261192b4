use crate::validate::{Validator, Violation};
use serde_json::json;
use vellum_schema::types::Scalar;

fn string() -> Validator {
    Validator::Scalar(Scalar::String)
}

#[test]
fn scalar_acceptance() {
    assert!(Validator::Scalar(Scalar::Id).accepts(&json!("doc-1")));
    assert!(!Validator::Scalar(Scalar::Id).accepts(&json!("")));

    assert!(string().accepts(&json!("")));
    assert!(!string().accepts(&json!(1)));

    assert!(Validator::Scalar(Scalar::Number).accepts(&json!(1.5)));
    assert!(Validator::Scalar(Scalar::Boolean).accepts(&json!(true)));

    assert!(Validator::Scalar(Scalar::Date).accepts(&json!("2024-01-02T00:00:00Z")));
    assert!(!Validator::Scalar(Scalar::Date).accepts(&json!("2024-01-02")));

    assert!(
        Validator::Scalar(Scalar::AmountCrypto)
            .accepts(&json!({ "amount": 1.0, "currency": "BTC" }))
    );
    assert!(!Validator::Scalar(Scalar::AmountCrypto).accepts(&json!({ "amount": 1.0 })));
}

#[test]
fn optional_accepts_null_and_absent() {
    let validator = Validator::object(vec![("name", string().optional())]);

    assert!(validator.accepts(&json!({})));
    assert!(validator.accepts(&json!({ "name": null })));
    assert!(validator.accepts(&json!({ "name": "x" })));
    assert!(!validator.accepts(&json!({ "name": 1 })));
}

#[test]
fn optional_array_of_required_items() {
    // nullable container, non-nullable items
    let validator = Validator::object(vec![("names", Validator::array(string()).optional())]);

    assert!(validator.accepts(&json!({})));
    assert!(validator.accepts(&json!({ "names": [] })));
    assert!(validator.accepts(&json!({ "names": ["x"] })));
    assert!(!validator.accepts(&json!({ "names": [null] })));
}

#[test]
fn required_array_of_optional_items() {
    // non-nullable container, nullable items
    let validator = Validator::object(vec![("names", Validator::array(string().optional()))]);

    assert!(validator.accepts(&json!({ "names": [] })));
    assert!(validator.accepts(&json!({ "names": [null] })));
    assert!(validator.accepts(&json!({ "names": ["x"] })));
    assert!(!validator.accepts(&json!({})));
}

#[test]
fn violations_carry_the_path() {
    let validator = Validator::object(vec![(
        "items",
        Validator::array(Validator::object(vec![("id", Validator::Scalar(Scalar::Id))])),
    )]);

    let violations = validator
        .validate(&json!({ "items": [{ "id": "a" }, { "id": "" }] }))
        .unwrap_err();

    assert_eq!(violations, vec![Violation {
        path: "$.items[1].id".to_string(),
        expected: "non-empty id string".to_string(),
        actual: "string \"\"".to_string(),
    }]);
}

#[test]
fn undeclared_keys_are_violations() {
    let validator = Validator::object(vec![("name", string())]);

    let violations = validator
        .validate(&json!({ "name": "x", "extra": 1 }))
        .unwrap_err();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "$.extra");
}

#[test]
fn literal_requires_exact_match() {
    let validator = Validator::literal("ACTION1");

    assert!(validator.accepts(&json!("ACTION1")));
    assert!(!validator.accepts(&json!("action1")));
    assert!(!validator.accepts(&json!("ACTION_1")));
}

#[test]
fn optional_wrapping_is_idempotent() {
    let once = string().optional();
    let twice = string().optional().optional();

    assert_eq!(once, twice);
}

#[test]
fn reflection_tracks_required_fields() {
    let validator = Validator::object(vec![
        ("id", Validator::Scalar(Scalar::Id)),
        ("name", string().optional()),
    ]);

    let schema = validator.json_schema();

    assert_eq!(schema["type"], json!("object"));
    assert_eq!(schema["required"], json!(["id"]));
    assert_eq!(schema["additionalProperties"], json!(false));
    assert_eq!(schema["properties"]["name"]["anyOf"][1], json!({ "type": "null" }));
}

#[test]
fn reflection_preserves_declaration_order() {
    let validator = Validator::object(vec![
        ("zebra", string()),
        ("apple", string()),
        ("mango", string()),
    ]);

    let schema = validator.json_schema();
    let keys: Vec<_> = schema["properties"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();

    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
}

#[test]
fn render_is_stable() {
    let validator = Validator::object(vec![
        ("something", string()),
        ("names", Validator::array(string().optional()).optional()),
    ]);

    let expected = "object({\n  something: string(),\n  names: optional(array(optional(string()))),\n})\n";
    assert_eq!(validator.render(), expected);
    assert_eq!(validator.render(), validator.render());
}
