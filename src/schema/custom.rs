use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::schema::Schema;

/// Custom schema wrapping a caller-supplied parser.
///
/// The parser must be total. A panic inside it is not caught and reaches
/// the caller of `coerce`.
///
/// ```
/// use pliant::schema::{custom, Schema};
///
/// let s = custom(|v: &serde_json::Value| v.as_str().map(str::len).unwrap_or(0));
/// assert_eq!(s.coerce(&serde_json::json!("abc")), 3);
/// ```
pub struct CustomSchema<F, T> {
    parser: F,
    _output: PhantomData<fn() -> T>,
}

/// Creates a custom schema from a parser function.
pub fn custom<F, T>(parser: F) -> CustomSchema<F, T>
where
    F: Fn(&Value) -> T,
{
    CustomSchema {
        parser,
        _output: PhantomData,
    }
}

/// A custom schema that returns its input unchanged.
pub fn passthrough() -> CustomSchema<fn(&Value) -> Value, Value> {
    custom(Value::clone as fn(&Value) -> Value)
}

impl<F: Clone, T> Clone for CustomSchema<F, T> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            _output: PhantomData,
        }
    }
}

impl<F, T> fmt::Debug for CustomSchema<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomSchema")
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<F, T> Schema for CustomSchema<F, T>
where
    F: Fn(&Value) -> T,
{
    type Output = T;

    fn coerce(&self, input: &Value) -> T {
        (self.parser)(input)
    }
}
