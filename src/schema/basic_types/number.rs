use log::trace;
use serde_json::Value;

use crate::schema::types::InputKind;
use crate::schema::utils::parse_numeric_literal;
use crate::schema::Schema;

/// Number schema. Produces `f64`.
///
/// ```
/// use pliant::schema::{number, Schema};
///
/// let s = number();
/// assert_eq!(s.coerce(&serde_json::json!(false)), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberSchema;

/// Creates a number schema.
pub fn number() -> NumberSchema {
    NumberSchema
}

impl Schema for NumberSchema {
    type Output = f64;

    fn coerce(&self, input: &Value) -> f64 {
        match input {
            // serde_json numbers are always finite, so as_f64 only fails for
            // arbitrary-precision builds; those fall back like any mismatch
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => match parse_numeric_literal(s) {
                Some(value) => value,
                None => {
                    trace!("string {:?} is not a numeric literal, using 0", s);
                    0.0
                }
            },
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Null | Value::Array(_) | Value::Object(_) => {
                trace!("{} input coerced to number 0", InputKind::of(input));
                0.0
            }
        }
    }
}
