//! Caller input checks, run before any request is built.

use serde_json::Value;

use crate::error::AshbyError;
use crate::types::Payload;

/// `null`, whitespace-only strings and empty arrays/objects are blank.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Reject an empty or whitespace-only string with `message`.
pub fn require_non_blank<'a>(value: &'a str, message: &str) -> Result<&'a str, AshbyError> {
    if value.trim().is_empty() {
        Err(AshbyError::InvalidInput(message.to_string()))
    } else {
        Ok(value)
    }
}

/// Reject a payload missing any of `fields`, naming every missing one.
pub fn require_fields(payload: &Payload, fields: &[&str]) -> Result<(), AshbyError> {
    let missing: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|field| payload.get(*field).is_none_or(is_blank))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AshbyError::InvalidInput(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Reject an empty payload with `message`.
pub fn require_any(payload: &Payload, message: &str) -> Result<(), AshbyError> {
    if payload.is_empty() {
        Err(AshbyError::InvalidInput(message.to_string()))
    } else {
        Ok(())
    }
}
