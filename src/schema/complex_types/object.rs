// Object schema
//
// An object schema holds an ordered set of named field schemas. Two kinds of
// field set are supported:
//
// 1. Tuples of `Field<S>` (arity 1 to 12), producing a tuple of each field's
//    output in declared order. The output type is fully static.
// 2. `Vec<Field<S>>` where `S` produces JSON-convertible output (typically
//    `BoxedSchema`), producing an ordered `serde_json::Map`.
//
// Arrays count as objects here. Their elements are the properties named by
// canonical decimal indices ("0", "1", ...) and every other name is missing.

use log::trace;
use serde_json::{Map, Value};

use crate::schema::dynamic::IntoJson;
use crate::schema::types::InputKind;
use crate::schema::Schema;

/// Looked up for fields missing from the input.
static MISSING: Value = Value::Null;

/// A named field of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<S> {
    name: String,
    schema: S,
}

/// Creates a named field.
pub fn field<S: Schema>(name: impl Into<String>, schema: S) -> Field<S> {
    Field {
        name: name.into(),
        schema,
    }
}

impl<S> Field<S> {
    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field schema.
    pub fn schema(&self) -> &S {
        &self.schema
    }
}

impl<S: Schema> Field<S> {
    /// Coerces the same-named property of `input`, treating a missing one as null.
    pub fn coerce_from(&self, input: &Value) -> S::Output {
        self.schema.coerce(property(input, &self.name))
    }
}

/// Looks up a named property of an object or array input.
fn property<'a>(input: &'a Value, name: &str) -> &'a Value {
    let found = match input {
        Value::Object(properties) => properties.get(name),
        Value::Array(items) => array_index(name).and_then(|index| items.get(index)),
        _ => None,
    };
    found.unwrap_or(&MISSING)
}

/// Parses a canonical array index name. "01" and "+1" are not indices.
fn array_index(name: &str) -> Option<usize> {
    let index: usize = name.parse().ok()?;
    (index.to_string() == name).then_some(index)
}

/// An ordered set of named field schemas.
pub trait Fields {
    /// The value produced from an object input.
    type Output;

    /// Coerces every declared field from an object or array input.
    fn coerce_fields(&self, input: &Value) -> Self::Output;

    /// Returns the declared field names in order.
    fn names(&self) -> Vec<&str>;
}

macro_rules! impl_fields_for_tuple {
    ($($schema:ident : $idx:tt),+) => {
        impl<$($schema: Schema),+> Fields for ($(Field<$schema>,)+) {
            type Output = ($($schema::Output,)+);

            fn coerce_fields(&self, input: &Value) -> Self::Output {
                ($(self.$idx.coerce_from(input),)+)
            }

            fn names(&self) -> Vec<&str> {
                vec![$(self.$idx.name()),+]
            }
        }
    };
}

impl_fields_for_tuple!(A: 0);
impl_fields_for_tuple!(A: 0, B: 1);
impl_fields_for_tuple!(A: 0, B: 1, C: 2);
impl_fields_for_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_fields_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_fields_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_fields_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_fields_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
impl_fields_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8);
impl_fields_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9);
impl_fields_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10);
impl_fields_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10, L: 11);

impl<S> Fields for Vec<Field<S>>
where
    S: Schema,
    S::Output: IntoJson,
{
    type Output = Map<String, Value>;

    fn coerce_fields(&self, input: &Value) -> Self::Output {
        let mut result = Map::with_capacity(self.len());
        for field in self {
            result.insert(field.name.clone(), field.coerce_from(input).into_json());
        }
        result
    }

    fn names(&self) -> Vec<&str> {
        self.iter().map(Field::name).collect()
    }
}

/// Object schema. Produces `None` for null and primitive input, otherwise
/// the declared fields coerced from the same-named input properties.
///
/// Properties not declared in the schema are dropped.
///
/// ```
/// use pliant::schema::{field, number, object, string, Schema};
/// use serde_json::json;
///
/// let s = object((field("a", number()), field("b", string())));
/// assert_eq!(s.coerce(&json!({ "a": 1, "b": 2 })), Some((1.0, "2".to_string())));
/// assert_eq!(s.coerce(&json!(2)), None);
/// assert_eq!(s.coerce(&json!(["x"])), Some((0.0, String::new())));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema<F> {
    fields: F,
}

/// Creates an object schema from an ordered field set.
///
/// A tuple field set produces a tuple whose positions follow the declared
/// field order, so typed output is read by destructuring in that order. The
/// names stay on the schema and are listed by [`ObjectSchema::field_names`].
///
/// ```
/// use pliant::schema::{field, number, object, string, Schema};
///
/// let user = object((field("id", number()), field("name", string())));
/// if let Some((id, name)) = user.coerce(&serde_json::json!({ "name": "ann", "id": "4" })) {
///     assert_eq!((id, name.as_str()), (4.0, "ann"));
/// }
/// assert_eq!(user.field_names(), vec!["id", "name"]);
/// ```
pub fn object<F: Fields>(fields: F) -> ObjectSchema<F> {
    ObjectSchema { fields }
}

impl<F: Fields> ObjectSchema<F> {
    /// Returns the field set.
    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Returns the declared field names in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.names()
    }
}

impl<F: Fields> Schema for ObjectSchema<F> {
    type Output = Option<F::Output>;

    fn coerce(&self, input: &Value) -> Self::Output {
        let kind = InputKind::of(input);
        if !kind.is_structured() {
            trace!("{} input coerced to absent object", kind);
            return None;
        }
        Some(self.fields.coerce_fields(input))
    }
}
