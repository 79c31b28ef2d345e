use serde_json::Value;

use crate::schema::Schema;

/// Boolean schema. Produces `bool`.
///
/// Strings are truthy when non-empty, except a case-insensitive `"false"`.
/// Arrays are truthy when non-empty. Numbers are truthy when nonzero,
/// objects always are, null never is.
///
/// ```
/// use pliant::schema::{boolean, Schema};
///
/// let s = boolean();
/// assert!(!s.coerce(&serde_json::json!("false")));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanSchema;

/// Creates a boolean schema.
pub fn boolean() -> BooleanSchema {
    BooleanSchema
}

impl Schema for BooleanSchema {
    type Output = bool;

    fn coerce(&self, input: &Value) -> bool {
        match input {
            Value::Bool(b) => *b,
            // "false" must be checked before generic truthiness
            Value::String(s) => !s.is_empty() && !s.eq_ignore_ascii_case("false"),
            Value::Array(items) => !items.is_empty(),
            Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
            Value::Object(_) => true,
            Value::Null => false,
        }
    }
}
