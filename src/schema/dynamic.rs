// Type-erased schemas
//
// Typed schemas project to concrete Rust types. When the shape is only known
// at runtime (inferred schemas, field lists built from configuration), schemas
// are erased behind `DynSchema` and produce `serde_json::Value` instead.

use serde_json::{Map, Number, Value};

use crate::schema::Schema;

/// Conversion of a coercion output back into a JSON value.
pub trait IntoJson {
    /// Converts this value into JSON.
    fn into_json(self) -> Value;
}

impl IntoJson for Value {
    fn into_json(self) -> Value {
        self
    }
}

impl IntoJson for Map<String, Value> {
    fn into_json(self) -> Value {
        Value::Object(self)
    }
}

/// Non-finite values have no JSON representation and become null.
impl IntoJson for f64 {
    fn into_json(self) -> Value {
        Number::from_f64(self).map_or(Value::Null, Value::Number)
    }
}

impl IntoJson for f32 {
    fn into_json(self) -> Value {
        f64::from(self).into_json()
    }
}

impl IntoJson for bool {
    fn into_json(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoJson for String {
    fn into_json(self) -> Value {
        Value::String(self)
    }
}

impl IntoJson for &'static str {
    fn into_json(self) -> Value {
        Value::String(self.to_string())
    }
}

macro_rules! impl_into_json_for_integer {
    ($($int:ty),+) => {
        $(
            impl IntoJson for $int {
                fn into_json(self) -> Value {
                    Value::from(self)
                }
            }
        )+
    };
}

impl_into_json_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: IntoJson> IntoJson for Vec<T> {
    fn into_json(self) -> Value {
        Value::Array(self.into_iter().map(IntoJson::into_json).collect())
    }
}

/// `None` becomes null.
impl<T: IntoJson> IntoJson for Option<T> {
    fn into_json(self) -> Value {
        self.map_or(Value::Null, IntoJson::into_json)
    }
}

/// An object-safe schema producing JSON values.
///
/// Implemented for every [`Schema`] whose output converts into JSON.
pub trait DynSchema {
    /// Coerces the input and converts the result into JSON.
    fn coerce_json(&self, input: &Value) -> Value;
}

impl<S> DynSchema for S
where
    S: Schema,
    S::Output: IntoJson,
{
    fn coerce_json(&self, input: &Value) -> Value {
        self.coerce(input).into_json()
    }
}

impl Schema for dyn DynSchema + Send + Sync {
    type Output = Value;

    fn coerce(&self, input: &Value) -> Value {
        self.coerce_json(input)
    }
}

/// A heap-allocated, type-erased schema.
pub type BoxedSchema = Box<dyn DynSchema + Send + Sync>;

/// Erases a schema's output type.
///
/// ```
/// use pliant::schema::{boxed, number, string, BoxedSchema, Schema};
///
/// let schemas: Vec<BoxedSchema> = vec![boxed(number()), boxed(string())];
/// let out: Vec<_> = schemas.iter().map(|s| s.coerce(&serde_json::json!("7"))).collect();
/// assert_eq!(out, vec![serde_json::json!(7.0), serde_json::json!("7")]);
/// ```
pub fn boxed<S>(schema: S) -> BoxedSchema
where
    S: Schema + Send + Sync + 'static,
    S::Output: IntoJson,
{
    Box::new(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{array, boolean, choice, field, number, object, string};
    use serde_json::json;

    #[test]
    fn test_into_json_scalars() {
        assert_eq!(1.5f64.into_json(), json!(1.5));
        assert_eq!(f64::INFINITY.into_json(), Value::Null);
        assert_eq!(7u8.into_json(), json!(7));
        assert_eq!("x".into_json(), json!("x"));
        assert_eq!(Some(true).into_json(), json!(true));
        assert_eq!(None::<bool>.into_json(), Value::Null);
        assert_eq!(vec![1i64, 2].into_json(), json!([1, 2]));
    }

    #[test]
    fn test_boxed_schema_outputs() {
        assert_eq!(boxed(number()).coerce(&json!("2")), json!(2.0));
        assert_eq!(boxed(string()).coerce(&json!(false)), json!("false"));
        assert_eq!(boxed(boolean()).coerce(&json!([])), json!(false));
        assert_eq!(boxed(array(boolean())).coerce(&json!([0, 1])), json!([false, true]));
        assert_eq!(boxed(choice(vec!["a", "b"], "a")).coerce(&json!("b")), json!("b"));
    }

    #[test]
    fn test_boxed_dynamic_object_nests() {
        let inner = object(vec![field("n2", boxed(number())), field("b2", boxed(boolean()))]);
        let outer = object(vec![field("s", boxed(string())), field("o", boxed(inner))]);

        let parsed = outer.coerce(&json!({ "s": 234, "o": { "n2": 1 } }));
        assert_eq!(
            parsed.into_json(),
            json!({ "s": "234", "o": { "n2": 1.0, "b2": false } })
        );

        let parsed = outer.coerce(&json!({ "s": "x" }));
        assert_eq!(parsed.into_json(), json!({ "s": "x", "o": null }));
    }
}
