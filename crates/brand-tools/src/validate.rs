//! Argument validation
//!
//! Runs before any network I/O. Every rejection is an
//! [`Error::Validation`] naming the argument that failed.

use brand_core::{BrandName, CheckMode, Error, Result};
use serde_json::{Map, Value};

/// Tool arguments as a JSON object
pub type Args = Map<String, Value>;

/// Turn raw tool arguments into an object
///
/// A missing (`null`) argument list is treated as empty, so the required
/// field checks report what is missing.
pub fn arguments(args: Value) -> Result<Args> {
    match args {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(Error::validation(
            "arguments",
            format!("expected an object, got {}", json_type(&other)),
        )),
    }
}

/// Required brand name field
pub fn brand_name(args: &Args, field: &str) -> Result<BrandName> {
    match args.get(field) {
        Some(Value::String(value)) => BrandName::parse(field, value),
        None | Some(Value::Null) => Err(Error::validation(field, "is required")),
        Some(other) => Err(Error::validation(
            field,
            format!("expected a string, got {}", json_type(other)),
        )),
    }
}

/// Required array of `min..=max` brand names
///
/// Items are reported as `field[index]`.
pub fn brand_names(args: &Args, field: &str, min: usize, max: usize) -> Result<Vec<BrandName>> {
    let items = match args.get(field) {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => return Err(Error::validation(field, "is required")),
        Some(other) => {
            return Err(Error::validation(
                field,
                format!("expected an array, got {}", json_type(other)),
            ));
        }
    };

    if !(min..=max).contains(&items.len()) {
        return Err(Error::validation(
            field,
            format!(
                "expected between {min} and {max} brand names, got {}",
                items.len()
            ),
        ));
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let item_field = format!("{field}[{index}]");
            match item {
                Value::String(value) => BrandName::parse(&item_field, value),
                other => Err(Error::validation(
                    item_field,
                    format!("expected a string, got {}", json_type(other)),
                )),
            }
        })
        .collect()
}

/// Optional `mode` field
pub fn check_mode(args: &Args) -> Result<Option<CheckMode>> {
    match args.get("mode") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|_| Error::validation("mode", format!("expected \"full\" or \"quick\", got {value}"))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
