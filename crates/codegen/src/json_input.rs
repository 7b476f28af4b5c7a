//! Parsing of user supplied JSON samples and printing of inferred schemas.

use api_cli_core::CoreError;
use serde_json::Value;

use crate::schema::SchemaDescriptor;

/// Turns every single quote into a double quote so `{'id': 1}` parses.
///
/// Apostrophes inside string values are rewritten too, which usually makes
/// the sample invalid JSON. Kept as is: existing users type samples this way.
pub fn normalize_quotes(input: &str) -> String {
    input.replace('\'', "\"")
}

/// Parses a JSON sample after quote normalization
pub fn parse_sample(input: &str) -> Result<Value, CoreError> {
    serde_json::from_str(&normalize_quotes(input))
        .map_err(|source| CoreError::InvalidJson { source })
}

/// Pretty JSON with two-space indentation
pub fn render_schema(schema: &SchemaDescriptor) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(schema)?)
}

/// Parse, infer and render in one step
pub fn schema_from_sample(input: &str) -> Result<String, CoreError> {
    let value = parse_sample(input)?;
    let schema = crate::schema::infer(&value);
    tracing::debug!(properties = property_count(&schema), "inferred schema from sample");
    render_schema(&schema)
}

fn property_count(schema: &SchemaDescriptor) -> usize {
    match schema {
        SchemaDescriptor::Object { properties } => properties.len(),
        _ => 0,
    }
}
