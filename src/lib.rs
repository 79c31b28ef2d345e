// pliant library entry point
//
// Lenient, never-failing coercion of untyped values into schema-shaped
// Rust values. Build a schema once, then coerce any `serde_json::Value`
// through it; mismatched input degrades to a default instead of an error.

pub mod input;
pub mod internal;
pub mod schema;

pub use internal::error::{Error, Result};
pub use schema::{
    array, boolean, boxed, choice, custom, enumeration, field, infer_schema, number, object,
    passthrough, string, Schema, Target,
};
pub use serde_json::Value;
