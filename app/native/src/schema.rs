//! JSON Schema for the configuration file.

use crate::config::CuratorConfig;

/// Schema identifier embedded as `$id`.
pub const SCHEMA_ID: &str = "curator.schema.json";

/// Generates a JSON Schema for the Curator configuration.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(CuratorConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert("$id".to_string(), serde_json::json!(SCHEMA_ID));
    }

    schema
}

/// Generates the schema as a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if the schema cannot be serialized.
pub fn generate_schema_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&generate_schema())
}
