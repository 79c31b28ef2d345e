use log::trace;
use serde_json::Value;

use crate::schema::types::InputKind;
use crate::schema::utils::format_number;
use crate::schema::Schema;

/// String schema. Produces `String`.
///
/// ```
/// use pliant::schema::{string, Schema};
///
/// let s = string();
/// assert_eq!(s.coerce(&serde_json::json!(42)), "42");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringSchema;

/// Creates a string schema.
pub fn string() -> StringSchema {
    StringSchema
}

impl Schema for StringSchema {
    type Output = String;

    fn coerce(&self, input: &Value) -> String {
        match input {
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(n.as_f64().unwrap_or(0.0)),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                trace!("{} input coerced to empty string", InputKind::of(input));
                String::new()
            }
        }
    }
}
