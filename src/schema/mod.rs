// Schema module for pliant
//
// This module provides the schema descriptors and their coercion rules:
//
// 1. Primitive coercers (number, string, boolean)
// 2. Choice and enumeration coercers over fixed candidate sets
// 3. Custom coercers wrapping a caller-supplied function
// 4. Composite coercers (array, object) delegating to child schemas
// 5. Type projection from a schema to the value it produces
// 6. Type-erased schemas producing JSON values, and inference from samples

use std::sync::Arc;

use serde_json::Value;

// Re-export public types and functions
pub use self::basic_types::{boolean, number, string, BooleanSchema, NumberSchema, StringSchema};
pub use self::choice::{choice, Candidate, ChoiceSchema};
pub use self::complex_types::{array, field, object, ArraySchema, Field, Fields, ObjectSchema};
pub use self::custom::{custom, passthrough, CustomSchema};
pub use self::dynamic::{boxed, BoxedSchema, DynSchema, IntoJson};
pub use self::enumeration::{enumeration, Enumerable, EnumerationSchema, Primitive, PrimitiveKind};
pub use self::inference::{infer_schema, InferenceConfig, SchemaInference};
pub use self::types::InputKind;

// Sub-modules
pub mod basic_types;
pub mod choice;
pub mod complex_types;
pub mod custom;
pub mod dynamic;
pub mod enumeration;
pub mod inference;
pub mod types;

// Internal module for shared utilities
mod utils;

/// A schema: an immutable description of a target shape plus its coercion rule.
///
/// `coerce` is total. Every input produces a value of `Output`, substituting
/// a default when the input does not fit the shape.
pub trait Schema {
    /// The type of value this schema produces.
    type Output;

    /// Coerces an arbitrary input into this schema's output type.
    fn coerce(&self, input: &Value) -> Self::Output;

    /// The value produced for a missing input.
    fn default_value(&self) -> Self::Output {
        self.coerce(&Value::Null)
    }
}

/// The value type produced by schema `S`.
///
/// ```
/// use pliant::schema::{array, number, ArraySchema, NumberSchema, Schema, Target};
///
/// let s = array(number());
/// let v: Target<ArraySchema<NumberSchema>> = s.coerce(&serde_json::json!(["1", 2]));
/// assert_eq!(v, vec![1.0, 2.0]);
/// ```
pub type Target<S> = <S as Schema>::Output;

impl<S: Schema + ?Sized> Schema for &S {
    type Output = S::Output;

    fn coerce(&self, input: &Value) -> Self::Output {
        (**self).coerce(input)
    }
}

impl<S: Schema + ?Sized> Schema for Box<S> {
    type Output = S::Output;

    fn coerce(&self, input: &Value) -> Self::Output {
        (**self).coerce(input)
    }
}

impl<S: Schema + ?Sized> Schema for Arc<S> {
    type Output = S::Output;

    fn coerce(&self, input: &Value) -> Self::Output {
        (**self).coerce(input)
    }
}
