use thiserror::Error;

/// Unified error type for the pliant library.
///
/// Coercion itself never fails. Errors only come from turning raw input
/// (JSON text, serializable Rust values) into a `serde_json::Value` before
/// coercion starts.
#[derive(Error, Debug)]
pub enum Error {
    /// Input text was not valid JSON, or a value could not be serialized to JSON.
    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for pliant input adapters.
pub type Result<T> = std::result::Result<T, Error>;

/*
Panic handling:

Coercion paths are total and never return errors. A panic raised by a
caller-supplied custom parser is not caught here; it propagates to the
caller of `coerce`, because the parser is required to be total.
*/
