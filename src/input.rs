// Input adapters
//
// Coercion works on `serde_json::Value`. These helpers turn other raw input
// into a value first: JSON text, any serializable Rust value, or a URL query
// string. Only the conversion step can fail; coercion itself stays total.

use log::trace;
use serde::Serialize;
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::internal::error::Result;
use crate::schema::Schema;

/// Parses JSON text and coerces it through `schema`.
///
/// ```
/// use pliant::input::coerce_str;
/// use pliant::schema::{array, number};
///
/// let v = coerce_str(&array(number()), r#"[1, "2", null]"#).unwrap();
/// assert_eq!(v, vec![1.0, 2.0, 0.0]);
/// ```
pub fn coerce_str<S: Schema>(schema: &S, text: &str) -> Result<S::Output> {
    let value: Value = serde_json::from_str(text)?;
    Ok(schema.coerce(&value))
}

/// Serializes `input` into a JSON value and coerces it through `schema`.
pub fn coerce_serialize<S, T>(schema: &S, input: &T) -> Result<S::Output>
where
    S: Schema,
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(input)?;
    Ok(schema.coerce(&value))
}

/// Decodes a URL query string into a JSON object.
///
/// Every value is a string. Repeated keys collect into an array in order of
/// appearance, and a key without `=` has an empty value. A leading `?` is
/// ignored.
pub fn query_to_value(query: &str) -> Value {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut properties = Map::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = Value::String(value.into_owned());
        match properties.get_mut(&*key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                properties.insert(key.into_owned(), value);
            }
        }
    }

    trace!("decoded query into {} field(s)", properties.len());
    Value::Object(properties)
}

/// Decodes a URL query string and coerces it through `schema`.
///
/// ```
/// use pliant::input::coerce_query;
/// use pliant::schema::{boolean, field, number, object};
///
/// let s = object((field("page", number()), field("debug", boolean())));
/// assert_eq!(coerce_query(&s, "page=3&debug=false"), Some((3.0, false)));
/// ```
pub fn coerce_query<S: Schema>(schema: &S, query: &str) -> S::Output {
    schema.coerce(&query_to_value(query))
}
