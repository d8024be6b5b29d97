use serde::Serialize;
use serde_json::{Number, Value};

/// Request body for `POST /query`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// A parsed response body.
///
/// The shape is not trusted: anything that parsed as JSON (other than
/// `null`) is kept, and the `response` field is read optimistically.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
    body: Value,
}

impl QueryResponse {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Text of the `response` field, or `None` when it is absent or falsy
    /// (`null`, `false`, `0`, `""`).
    ///
    /// Non-string truthy values are rendered in their compact JSON form,
    /// except that whole-number floats drop the fraction (`1.0` shows as `1`).
    pub fn reply_text(&self) -> Option<String> {
        match self.body.get("response")? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Number(n) => Some(number_text(n)),
            other => Some(other.to_string()),
        }
    }
}

/// Below this, whole floats print without an exponent.
const PLAIN_FLOAT_LIMIT: f64 = 1e21;

fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < PLAIN_FLOAT_LIMIT => {
            format!("{f:.0}")
        }
        _ => n.to_string(),
    }
}
