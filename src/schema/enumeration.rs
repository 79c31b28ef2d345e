// Enumeration schema
//
// Like a choice, but the input is first normalized through the number or
// string coercer, so "2" matches the numeric candidate 2. The primitive kind
// is fixed once at construction from the first candidate.

use std::fmt;

use log::trace;
use serde_json::Value;

use crate::schema::basic_types::{NumberSchema, StringSchema};
use crate::schema::Schema;

/// The primitive kind an enumeration normalizes its input to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Normalize through the number schema
    Number,
    /// Normalize through the string schema
    String,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::Number => f.write_str("number"),
            PrimitiveKind::String => f.write_str("string"),
        }
    }
}

/// An input after normalization, ready for the membership check.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Number(f64),
    String(String),
}

impl Primitive {
    /// Normalizes `input` to the given kind.
    pub fn normalize(kind: PrimitiveKind, input: &Value) -> Self {
        match kind {
            PrimitiveKind::Number => Primitive::Number(NumberSchema.coerce(input)),
            PrimitiveKind::String => Primitive::String(StringSchema.coerce(input)),
        }
    }
}

/// A candidate type for enumerations.
pub trait Enumerable: Clone {
    /// The kind this candidate belongs to.
    fn kind(&self) -> PrimitiveKind;

    /// The kind used when there are no candidates to infer it from.
    fn empty_kind() -> PrimitiveKind;

    /// Returns true when the normalized input is this candidate.
    fn matches(&self, normalized: &Primitive) -> bool;

    /// The fallback for unmatched input: `0` or `""`.
    fn zero(kind: PrimitiveKind) -> Self;
}

impl Enumerable for f64 {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Number
    }

    fn empty_kind() -> PrimitiveKind {
        PrimitiveKind::Number
    }

    fn matches(&self, normalized: &Primitive) -> bool {
        matches!(normalized, Primitive::Number(n) if n == self)
    }

    fn zero(_kind: PrimitiveKind) -> Self {
        0.0
    }
}

macro_rules! impl_enumerable_for_integer {
    ($($int:ty),+) => {
        $(
            impl Enumerable for $int {
                fn kind(&self) -> PrimitiveKind {
                    PrimitiveKind::Number
                }

                fn empty_kind() -> PrimitiveKind {
                    PrimitiveKind::Number
                }

                fn matches(&self, normalized: &Primitive) -> bool {
                    matches!(normalized, Primitive::Number(n) if *n == *self as f64)
                }

                fn zero(_kind: PrimitiveKind) -> Self {
                    0
                }
            }
        )+
    };
}

impl_enumerable_for_integer!(i32, i64, u32, u64);

impl Enumerable for String {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::String
    }

    fn empty_kind() -> PrimitiveKind {
        PrimitiveKind::String
    }

    fn matches(&self, normalized: &Primitive) -> bool {
        matches!(normalized, Primitive::String(s) if s == self)
    }

    fn zero(_kind: PrimitiveKind) -> Self {
        String::new()
    }
}

impl Enumerable for &'static str {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::String
    }

    fn empty_kind() -> PrimitiveKind {
        PrimitiveKind::String
    }

    fn matches(&self, normalized: &Primitive) -> bool {
        matches!(normalized, Primitive::String(s) if s == self)
    }

    fn zero(_kind: PrimitiveKind) -> Self {
        ""
    }
}

/// JSON candidates take their kind from the value: numbers are numeric,
/// anything else is treated as a string candidate.
impl Enumerable for Value {
    fn kind(&self) -> PrimitiveKind {
        if self.is_number() {
            PrimitiveKind::Number
        } else {
            PrimitiveKind::String
        }
    }

    fn empty_kind() -> PrimitiveKind {
        PrimitiveKind::String
    }

    fn matches(&self, normalized: &Primitive) -> bool {
        match normalized {
            Primitive::Number(n) => self.as_f64() == Some(*n),
            Primitive::String(s) => self.as_str() == Some(s.as_str()),
        }
    }

    fn zero(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Number => Value::from(0),
            PrimitiveKind::String => Value::String(String::new()),
        }
    }
}

/// Enumeration schema. Produces one of the candidates, or `0` / `""`.
///
/// ```
/// use pliant::schema::{enumeration, Schema};
///
/// let s = enumeration(vec![1.0, 2.0, 3.0]);
/// assert_eq!(s.coerce(&serde_json::json!("2")), 2.0);
/// assert_eq!(s.coerce(&serde_json::json!(5)), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnumerationSchema<T> {
    candidates: Vec<T>,
    kind: PrimitiveKind,
}

/// Creates an enumeration schema.
///
/// The kind is taken from the first candidate. Later candidates of another
/// kind are kept but can never match.
pub fn enumeration<T: Enumerable>(
    candidates: impl IntoIterator<Item = T>,
) -> EnumerationSchema<T> {
    let candidates: Vec<T> = candidates.into_iter().collect();
    let kind = candidates.first().map_or_else(T::empty_kind, Enumerable::kind);
    EnumerationSchema { candidates, kind }
}

impl<T> EnumerationSchema<T> {
    /// Returns the candidates in their original order.
    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    /// Returns the kind fixed at construction.
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }
}

impl<T: Enumerable> Schema for EnumerationSchema<T> {
    type Output = T;

    fn coerce(&self, input: &Value) -> T {
        let normalized = Primitive::normalize(self.kind, input);
        match self.candidates.iter().find(|c| c.matches(&normalized)) {
            Some(candidate) => candidate.clone(),
            None => {
                trace!("{:?} is not an enumeration member, using {} zero", normalized, self.kind);
                T::zero(self.kind)
            }
        }
    }
}
