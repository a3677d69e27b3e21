//! Environment configuration helpers

use std::str::FromStr;

/// Source of configuration values keyed by variable name
///
/// Production code passes [`env_lookup`]; tests pass a closure over a map so
/// nothing has to touch the process environment.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Read `key` from the process environment, treating blank values as unset
pub fn env_lookup(key: &str) -> Option<String> {
    non_blank(std::env::var(key).ok())
}

/// Drop values that are empty or all whitespace
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Look up `key` and parse it, reporting which variable held a bad value
pub fn parse_var<T>(lookup: EnvLookup<'_>, key: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match non_blank(lookup(key)) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| format!("{key}={raw:?} is invalid: {e}")),
        None => Ok(None),
    }
}
