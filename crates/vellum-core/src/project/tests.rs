use crate::project::{
    collapse_whitespace, example_state, state_graphql, state_json_schema, state_source,
    state_type_name, state_validator,
};
use serde_json::json;
use vellum_schema::{node::Field, node::FieldList, registry::ScalarRegistry};

fn test_fields(registry: &ScalarRegistry) -> FieldList {
    FieldList::new(vec![
        Field::primitive(registry, "id", "id", false).unwrap(),
        Field::array(registry, "ids", "id", false, false).unwrap(),
        Field::primitive(registry, "name", "string", true).unwrap(),
        Field::array(registry, "names", "string", true, true).unwrap(),
    ])
}

#[test]
fn scope_type_names() {
    assert_eq!(state_type_name("scope1"), "Scope1State");
    assert_eq!(state_type_name("global"), "GlobalState");
    assert_eq!(state_type_name("other"), "OtherState");
}

#[test]
fn graphql_single_required_string() {
    let registry = ScalarRegistry::new();
    let fields = FieldList::new(vec![
        Field::primitive(&registry, "something", "string", false).unwrap(),
    ]);

    assert_eq!(
        state_graphql("scope1", &fields),
        "type Scope1State {\n  something: String!\n}\n"
    );
}

#[test]
fn graphql_nullability_composition() {
    let registry = ScalarRegistry::new();
    let fields = test_fields(&registry);

    assert_eq!(
        state_graphql("test", &fields),
        "type TestState {\n  id: ID!\n  ids: [ID!]!\n  name: String\n  names: [String]\n}\n"
    );
}

#[test]
fn emissions_are_deterministic() {
    let registry = ScalarRegistry::new();
    let fields = test_fields(&registry);

    assert_eq!(state_graphql("test", &fields), state_graphql("test", &fields));
    assert_eq!(state_source("test", &fields), state_source("test", &fields));

    let a = serde_json::to_string_pretty(&state_json_schema("test", &fields)).unwrap();
    let b = serde_json::to_string_pretty(&state_json_schema("test", &fields)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn json_schema_carries_all_three_projections() {
    let registry = ScalarRegistry::new();
    let fields = test_fields(&registry);

    let schema = state_json_schema("test", &fields);

    assert_eq!(schema["$schema"], json!("./TestStateSchema.json"));
    assert_eq!(
        schema["graphql"],
        json!("type TestState { id: ID! ids: [ID!]! name: String names: [String] }")
    );
    assert_eq!(schema["type"], json!("object"));
    assert_eq!(schema["required"], json!(["id", "ids"]));
}

#[test]
fn json_schema_property_order_follows_declaration() {
    let registry = ScalarRegistry::new();
    let fields = test_fields(&registry);

    let schema = state_json_schema("test", &fields);
    let keys: Vec<_> = schema["properties"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();

    assert_eq!(keys, vec!["id", "ids", "name", "names"]);
}

#[test]
fn example_satisfies_the_runtime_validator() {
    let registry = ScalarRegistry::new();
    let fields = test_fields(&registry);

    let example = example_state(&fields);
    assert!(state_validator(&fields).accepts(&example));
}

#[test]
fn example_satisfies_the_reflected_schema_requirements() {
    let registry = ScalarRegistry::new();
    let fields = test_fields(&registry);

    let example = example_state(&fields);
    let schema = state_validator(&fields).json_schema();

    // every required property is present
    for name in schema["required"].as_array().unwrap() {
        assert!(example.get(name.as_str().unwrap()).is_some());
    }

    // no property outside the declared set
    let properties = schema["properties"].as_object().unwrap();
    for key in example.as_object().unwrap().keys() {
        assert!(properties.contains_key(key));
    }
}

#[test]
fn whitespace_collapse() {
    assert_eq!(collapse_whitespace("type A {\n  b: ID!\n}\n"), "type A { b: ID! }");
}

#[test]
fn source_artifact_names_the_schema() {
    let registry = ScalarRegistry::new();
    let fields = test_fields(&registry);

    let source = state_source("test", &fields);
    assert!(source.starts_with("// TestStateSchema\n"));
    assert!(source.contains("names: optional(array(optional(string())))"));
}
