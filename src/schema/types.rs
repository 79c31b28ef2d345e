// Input type system for the pliant schema layer
//
// Coercion input is a `serde_json::Value`. This module defines the closed
// discriminator over its runtime shape, used when describing inputs.

use std::fmt;

use serde_json::Value;

/// Represents the runtime kind of a coercion input.
///
/// A missing object property is looked up as `Value::Null`, so `Null`
/// covers both "null" and "undefined" input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Null or missing value
    Null,
    /// Boolean value
    Boolean,
    /// Numeric value
    Number,
    /// UTF-8 string
    String,
    /// Sequence of values
    Array,
    /// Mapping from field name to value
    Object,
}

impl InputKind {
    /// Returns the kind of the given input value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => InputKind::Null,
            Value::Bool(_) => InputKind::Boolean,
            Value::Number(_) => InputKind::Number,
            Value::String(_) => InputKind::String,
            Value::Array(_) => InputKind::Array,
            Value::Object(_) => InputKind::Object,
        }
    }

    /// Returns true for the structured kinds (array, object), which object
    /// schemas read properties from.
    pub fn is_structured(&self) -> bool {
        matches!(self, InputKind::Array | InputKind::Object)
    }

    /// Returns the lowercase name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            InputKind::Null => "null",
            InputKind::Boolean => "boolean",
            InputKind::Number => "number",
            InputKind::String => "string",
            InputKind::Array => "array",
            InputKind::Object => "object",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
