// Schema inference for pliant
//
// Builds a type-erased schema shaped like one or more sample values, so that
// later input can be coerced into the same shape as a known-good example.

use std::collections::HashMap;

use log::debug;
use serde_json::Value;

use crate::schema::custom::passthrough;
use crate::schema::types::InputKind;
use crate::schema::{array, boolean, boxed, field, number, object, string, BoxedSchema};

/// Configuration for schema inference
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Nesting depth below which values are passed through unchanged
    pub max_depth: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self { max_depth: 32 }
    }
}

/// Schema inference engine
#[derive(Debug, Default)]
pub struct SchemaInference {
    config: InferenceConfig,
}

impl SchemaInference {
    /// Creates a new schema inference engine with default configuration
    pub fn new() -> Self {
        Self {
            config: InferenceConfig::default(),
        }
    }

    /// Creates a new schema inference engine with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Infers a schema from a single sample
    pub fn infer(&self, sample: &Value) -> BoxedSchema {
        self.infer_type(&[sample], 0)
    }

    /// Infers a schema from a collection of samples
    ///
    /// Array elements are pooled across samples, and object fields are the
    /// union of all sample fields in first-seen order. Samples of differing
    /// kinds infer a passthrough schema.
    pub fn infer_samples(&self, samples: &[Value]) -> BoxedSchema {
        let refs: Vec<&Value> = samples.iter().collect();
        self.infer_type(&refs, 0)
    }

    fn infer_type(&self, values: &[&Value], depth: usize) -> BoxedSchema {
        if depth >= self.config.max_depth {
            debug!(
                "inference depth limit {} reached, passing values through",
                self.config.max_depth
            );
            return boxed(passthrough());
        }

        let first_kind = match values.first() {
            Some(value) => InputKind::of(value),
            None => return boxed(passthrough()),
        };
        if values.iter().any(|v| InputKind::of(v) != first_kind) {
            debug!("samples mix kinds at depth {}, passing values through", depth);
            return boxed(passthrough());
        }

        match first_kind {
            InputKind::Null => boxed(passthrough()),
            InputKind::Boolean => boxed(boolean()),
            InputKind::Number => boxed(number()),
            InputKind::String => boxed(string()),
            InputKind::Array => self.infer_array_type(values, depth),
            InputKind::Object => self.infer_object_type(values, depth),
        }
    }

    /// Infers an array schema from the pooled elements of all samples
    fn infer_array_type(&self, values: &[&Value], depth: usize) -> BoxedSchema {
        let elements: Vec<&Value> = values
            .iter()
            .filter_map(|v| v.as_array())
            .flatten()
            .collect();

        boxed(array(self.infer_type(&elements, depth + 1)))
    }

    /// Infers an object schema from the union of all sample fields
    fn infer_object_type(&self, values: &[&Value], depth: usize) -> BoxedSchema {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut field_values: Vec<(&str, Vec<&Value>)> = Vec::new();

        for properties in values.iter().filter_map(|v| v.as_object()) {
            for (name, value) in properties {
                let position = *positions.entry(name.as_str()).or_insert_with(|| {
                    field_values.push((name.as_str(), Vec::new()));
                    field_values.len() - 1
                });
                field_values[position].1.push(value);
            }
        }

        let fields = field_values
            .into_iter()
            .map(|(name, samples)| field(name, self.infer_type(&samples, depth + 1)))
            .collect::<Vec<_>>();

        debug!("inferred object schema with {} field(s)", fields.len());
        boxed(object(fields))
    }
}

/// Infers a schema shaped like `sample` with the default configuration.
///
/// ```
/// use pliant::schema::{infer_schema, Schema};
/// use serde_json::json;
///
/// let s = infer_schema(&json!({ "id": 1, "tags": ["a"] }));
/// assert_eq!(s.coerce(&json!({ "id": "7", "extra": true })), json!({ "id": 7.0, "tags": [] }));
/// ```
pub fn infer_schema(sample: &Value) -> BoxedSchema {
    SchemaInference::new().infer(sample)
}
