//! JSON Schema builders for tool inputs

use brand_core::CheckMode;
use brand_core::brand::{BRAND_NAME_MAX_LEN, BRAND_NAME_PATTERN};
use serde_json::{Value, json};

/// Create a JSON Schema object type
///
/// # Arguments
///
/// * `properties` - Map of property names to their schemas
/// * `required` - List of required property names
///
/// # Example
///
/// ```
/// use brand_tools::schema::{brand_name, object};
/// use serde_json::json;
///
/// let schema = object(json!({ "name": brand_name("Brand to check") }), &["name"]);
/// assert_eq!(schema["required"][0], "name");
/// ```
pub fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Create an enum schema (string with allowed values)
pub fn enum_string(values: &[&str], description: &str) -> Value {
    json!({
        "type": "string",
        "enum": values,
        "description": description,
    })
}

/// A single brand name field
pub fn brand_name(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
        "pattern": BRAND_NAME_PATTERN,
        "minLength": 1,
        "maxLength": BRAND_NAME_MAX_LEN,
    })
}

/// An array of `min..=max` brand names
pub fn brand_names(min: usize, max: usize, description: &str) -> Value {
    json!({
        "type": "array",
        "items": brand_name("Brand name"),
        "minItems": min,
        "maxItems": max,
        "description": description,
    })
}

/// The `mode` field with its per-tool default
pub fn mode(default: CheckMode) -> Value {
    let mut schema = enum_string(
        &[CheckMode::Full.as_str(), CheckMode::Quick.as_str()],
        "Check depth: 'full' runs every channel, 'quick' a cheaper subset",
    );
    schema["default"] = json!(default.as_str());
    schema
}
