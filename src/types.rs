//! Shared request/response types.

use serde_json::Value;

use crate::error::AshbyError;

/// JSON object sent as the body of a POST request
pub type Payload = serde_json::Map<String, Value>;

/// Take the `results` field of a response (`null` when absent).
pub fn into_results(response: Value) -> Value {
    match response {
        Value::Object(mut map) => map.remove("results").unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

/// Take the `results` field of a response as a list.
///
/// An absent or `null` field yields an empty list; a single object is wrapped.
pub fn into_results_list(response: Value) -> Vec<Value> {
    match into_results(response) {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

/// Fail when the envelope reports `success: false`, carrying the server's message.
pub fn ensure_success(response: Value, context: &str) -> Result<Value, AshbyError> {
    if response.get("success") == Some(&Value::Bool(false)) {
        let reason = error_message(&response).unwrap_or_else(|| "unknown error".to_string());
        return Err(AshbyError::OperationFailed(format!("{context}: {reason}")));
    }
    Ok(response)
}

/// Best-effort error text from an Ashby envelope.
///
/// Looks at `error`, `errors`, `errorInfo.message` and `message`, in that order.
pub fn error_message(response: &Value) -> Option<String> {
    if let Some(error) = response.get("error").and_then(Value::as_str) {
        return Some(error.to_string());
    }
    if let Some(errors) = response.get("errors").and_then(Value::as_array) {
        let joined = errors
            .iter()
            .map(|e| match e {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; ");
        if !joined.is_empty() {
            return Some(joined);
        }
    }
    response
        .pointer("/errorInfo/message")
        .or_else(|| response.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
