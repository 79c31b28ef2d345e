// Choice schema
//
// Picks the input when it strictly equals one of a fixed set of candidates,
// otherwise a configured default. No type normalization happens before the
// membership check: the string "2" never matches the number 2.

use log::trace;
use serde_json::{Number, Value};

use crate::schema::Schema;

/// A value that can be tested for strict equality against raw input.
///
/// Numbers compare by numeric value regardless of their JSON representation
/// (`2` equals `2.0`); every other kind must match exactly.
pub trait Candidate: Clone {
    /// Returns true when `input` is this candidate.
    fn same_value(&self, input: &Value) -> bool;
}

fn integer_of(n: &Number) -> Option<i128> {
    n.as_i64().map(i128::from).or_else(|| n.as_u64().map(i128::from))
}

fn float_is_integer(f: f64, i: i128) -> bool {
    f.fract() == 0.0 && f as i128 == i
}

/// Exact numeric equality. Integers are never widened to `f64`, so two
/// integers past 2^53 only match when they are the same integer.
fn number_eq(a: &Number, b: &Number) -> bool {
    match (integer_of(a), integer_of(b)) {
        (Some(x), Some(y)) => x == y,
        (Some(x), None) => b.as_f64().map_or(false, |f| float_is_integer(f, x)),
        (None, Some(y)) => a.as_f64().map_or(false, |f| float_is_integer(f, y)),
        (None, None) => a.as_f64() == b.as_f64(),
    }
}

fn same_number(candidate: Option<Number>, input: &Value) -> bool {
    match (candidate, input) {
        (Some(c), Value::Number(n)) => number_eq(&c, n),
        _ => false,
    }
}

impl Candidate for f64 {
    fn same_value(&self, input: &Value) -> bool {
        same_number(Number::from_f64(*self), input)
    }
}

impl Candidate for f32 {
    fn same_value(&self, input: &Value) -> bool {
        same_number(Number::from_f64(f64::from(*self)), input)
    }
}

macro_rules! impl_candidate_for_integer {
    ($($int:ty),+) => {
        $(
            impl Candidate for $int {
                fn same_value(&self, input: &Value) -> bool {
                    same_number(Some(Number::from(*self)), input)
                }
            }
        )+
    };
}

impl_candidate_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Candidate for bool {
    fn same_value(&self, input: &Value) -> bool {
        input.as_bool() == Some(*self)
    }
}

impl Candidate for String {
    fn same_value(&self, input: &Value) -> bool {
        input.as_str() == Some(self.as_str())
    }
}

impl Candidate for &'static str {
    fn same_value(&self, input: &Value) -> bool {
        input.as_str() == Some(*self)
    }
}

impl Candidate for Value {
    fn same_value(&self, input: &Value) -> bool {
        match (self, input) {
            (Value::Number(a), Value::Number(b)) => number_eq(a, b),
            _ => self == input,
        }
    }
}

/// `None` is the null candidate.
impl<T: Candidate> Candidate for Option<T> {
    fn same_value(&self, input: &Value) -> bool {
        match self {
            Some(candidate) => candidate.same_value(input),
            None => input.is_null(),
        }
    }
}

/// Choice schema. Produces one of the candidates, or the default.
///
/// ```
/// use pliant::schema::{choice, Schema};
///
/// let s = choice(vec![1, 2, 3], 1);
/// assert_eq!(s.coerce(&serde_json::json!(3)), 3);
/// assert_eq!(s.coerce(&serde_json::json!("2")), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceSchema<T> {
    candidates: Vec<T>,
    default: T,
}

/// Creates a choice schema over `candidates` with a fallback `default`.
///
/// The default does not have to be one of the candidates.
pub fn choice<T: Candidate>(
    candidates: impl IntoIterator<Item = T>,
    default: T,
) -> ChoiceSchema<T> {
    ChoiceSchema {
        candidates: candidates.into_iter().collect(),
        default,
    }
}

impl<T> ChoiceSchema<T> {
    /// Returns the candidates in their original order.
    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    /// Returns the fallback value.
    pub fn default(&self) -> &T {
        &self.default
    }
}

impl<T: Candidate> Schema for ChoiceSchema<T> {
    type Output = T;

    fn coerce(&self, input: &Value) -> T {
        match self.candidates.iter().find(|c| c.same_value(input)) {
            Some(candidate) => candidate.clone(),
            None => {
                trace!("input {} is not a choice candidate, using default", input);
                self.default.clone()
            }
        }
    }
}
