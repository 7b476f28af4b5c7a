//! End-to-end checks for sample-to-schema conversion and endpoint
//! scaffolding through the public API.

use api_cli_codegen::{
    infer, parse_sample, schema_from_sample, CodeGenerator, EndpointRequest, Question,
    ScaffoldEvent, ScaffoldInteraction, ScaffoldOutcome,
};
use api_cli_core::{CliConfig, CoreError, HttpMethod, Route};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn schema_of(sample: &str) -> Value {
    serde_json::from_str(&schema_from_sample(sample).unwrap()).unwrap()
}

#[test]
fn test_documented_examples() {
    assert_eq!(
        schema_of(r#"{"d": "2024-01-01"}"#),
        json!({"type": "object", "properties": {"d": {"type": "string", "format": "date"}}})
    );
    assert_eq!(
        schema_of(r#"{"d": "2024-01-01T10:00:00Z"}"#)["properties"]["d"]["format"],
        "date-time"
    );
    assert_eq!(
        schema_of(r#"{"d": "2024-01-01T10:00:00"}"#)["properties"]["d"]["format"],
        "date-time"
    );
    assert_eq!(
        schema_of(r#"{"n": null}"#),
        json!({"type": "object", "properties": {}})
    );
    assert_eq!(
        schema_of(r#"{"arr": [{"a":1}]}"#),
        json!({
            "type": "object",
            "properties": {
                "arr": {
                    "type": "array",
                    "items": {"type": "object", "properties": {"a": {"type": "integer"}}}
                }
            }
        })
    );
    assert_eq!(
        schema_of(r#"{"arr": []}"#)["properties"]["arr"],
        json!({"type": "array", "items": {"type": "undefined"}})
    );
}

#[test]
fn test_every_scalar_key_gets_a_property() {
    let sample = json!({
        "member": "hello",
        "id": 1,
        "score": -3.25,
        "active": true,
        "due": "2023-12-31",
        "missing": null
    });
    let schema = serde_json::to_value(infer(&sample)).unwrap();
    let properties = schema["properties"].as_object().unwrap();

    assert_eq!(properties.len(), 5);
    assert_eq!(properties["member"]["type"], "string");
    assert_eq!(properties["id"]["type"], "integer");
    assert_eq!(properties["score"]["type"], "integer");
    assert_eq!(properties["active"]["type"], "boolean");
    assert_eq!(properties["due"]["format"], "date");
}

#[test]
fn test_example_from_error_message_parses() {
    let sample = r#"{"reporting_due_date": {"type": ["String", "Null"], "format": "date"}, "member":"hello", "id": 1}"#;
    let value = parse_sample(sample).unwrap();
    let schema = serde_json::to_value(infer(&value)).unwrap();
    assert_eq!(
        schema["properties"]["reporting_due_date"],
        json!({
            "type": "object",
            "properties": {
                "type": {"type": "array", "items": {"type": "string"}},
                "format": {"type": "string"}
            }
        })
    );
}

struct AlwaysYes(Vec<ScaffoldEvent>);

impl ScaffoldInteraction for AlwaysYes {
    fn confirm(&mut self, _question: &Question) -> Result<bool, CoreError> {
        Ok(true)
    }

    fn notify(&mut self, event: &ScaffoldEvent) {
        self.0.push(event.clone());
    }
}

#[test]
fn test_generator_uses_configured_routes_dir() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = CliConfig::new(temp_dir.path());
    config.routes_dir = "src/routes".into();
    let generator = CodeGenerator::new(&config);

    let request = EndpointRequest::new(Route::parse("/orgs/:orgId").unwrap(), HttpMethod::Post);
    let mut ui = AlwaysYes(Vec::new());
    let outcome = generator.create_endpoint(&request, &mut ui).unwrap();

    let dir = temp_dir.path().join("src/routes/orgs/_orgId");
    assert!(matches!(outcome, ScaffoldOutcome::Created(_)));
    assert!(dir.join("_post.js").exists());
    assert!(dir.join("response.schema.js").exists());
    assert!(dir.join("body.schema.js").exists());

    // second run: the endpoint is refused and nothing is asked
    let mut ui = AlwaysYes(Vec::new());
    let outcome = generator.create_endpoint(&request, &mut ui).unwrap();
    assert!(matches!(outcome, ScaffoldOutcome::EndpointExists { .. }));
    assert_eq!(ui.0.len(), 1);

    let handler = fs::read_to_string(dir.join("_post.js")).unwrap();
    assert!(handler.contains("orgId: {\n          type: 'string',\n          format: 'id'\n        }"));
}
