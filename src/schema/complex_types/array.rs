use log::trace;
use serde_json::Value;

use crate::schema::types::InputKind;
use crate::schema::Schema;

/// Array schema. Produces a `Vec` of the element schema's output.
///
/// ```
/// use pliant::schema::{array, number, Schema};
///
/// let s = array(number());
/// assert_eq!(s.coerce(&serde_json::json!([1, "2", 3])), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArraySchema<S> {
    element: S,
}

/// Creates an array schema whose elements are coerced through `element`.
pub fn array<S: Schema>(element: S) -> ArraySchema<S> {
    ArraySchema { element }
}

impl<S> ArraySchema<S> {
    /// Returns the element schema.
    pub fn element(&self) -> &S {
        &self.element
    }
}

impl<S: Schema> Schema for ArraySchema<S> {
    type Output = Vec<S::Output>;

    fn coerce(&self, input: &Value) -> Self::Output {
        match input {
            Value::Array(items) => items.iter().map(|item| self.element.coerce(item)).collect(),
            _ => {
                trace!("{} input coerced to empty array", InputKind::of(input));
                Vec::new()
            }
        }
    }
}
