//! Scalar parsing and small collection helpers.
//!
//! These are the collaborators around the tree engine: numeric parsing that
//! wraps the low-level failure into a uniform domain error, a flat
//! membership test, one-level flattening, and a conditional pipeline step.
//! None of them depend on the path machinery.

use std::fmt;

use thiserror::Error;

use crate::tree::{List, Value};

/// The numeric shape a parse expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// A whole number
    Integer,
    /// A floating point number
    Float,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => write!(f, "integer"),
            NumberKind::Float => write!(f, "floating point number"),
        }
    }
}

/// Structured error types for scalar parsing.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScalarError {
    /// Text could not be read as the requested numeric kind
    #[error("{input} should be a(n) {kind}.")]
    NotANumber { input: String, kind: NumberKind },
}

// Conversion from ScalarError to the main Error type
impl From<ScalarError> for crate::Error {
    fn from(err: ScalarError) -> Self {
        crate::Error::Scalar(err)
    }
}

/// Parses text as a signed integer.
///
/// # Examples
///
/// ```
/// # use grove::scalar::parse_int;
/// assert_eq!(parse_int("42"), Ok(42));
/// assert_eq!(
///     parse_int("forty-two").unwrap_err().to_string(),
///     "forty-two should be a(n) integer."
/// );
/// ```
pub fn parse_int(input: &str) -> Result<i64, ScalarError> {
    input.parse().map_err(|_| ScalarError::NotANumber {
        input: input.to_string(),
        kind: NumberKind::Integer,
    })
}

/// Parses text as a floating point number.
///
/// # Examples
///
/// ```
/// # use grove::scalar::parse_float;
/// assert_eq!(parse_float("2.5"), Ok(2.5));
/// assert_eq!(
///     parse_float("pi").unwrap_err().to_string(),
///     "pi should be a(n) floating point number."
/// );
/// ```
pub fn parse_float(input: &str) -> Result<f64, ScalarError> {
    input.parse().map_err(|_| ScalarError::NotANumber {
        input: input.to_string(),
        kind: NumberKind::Float,
    })
}

/// Returns true if the list contains an element equal to `value`
pub fn member(list: &List, value: &Value) -> bool {
    list.iter().any(|item| item == value)
}

/// Concatenates nested lists one level deep.
///
/// List elements are spliced in place; any other element passes through
/// unchanged.
///
/// ```
/// # use grove::{scalar::flatten, tree::{List, Value}};
/// let nested: List = vec![
///     Value::List(vec![Value::Int(1), Value::Int(2)].into()),
///     Value::Int(3),
/// ]
/// .into();
///
/// let flat = flatten(&nested);
/// assert_eq!(flat.len(), 3);
/// ```
pub fn flatten(list: &List) -> List {
    list.iter()
        .flat_map(|element| match element {
            Value::List(inner) => inner.iter().cloned().collect::<Vec<_>>(),
            other => vec![other.clone()],
        })
        .collect()
}

/// Applies `f` to `value` when `condition` holds, otherwise passes it through.
///
/// Useful as a conditional step in a transformation pipeline:
///
/// ```
/// # use grove::scalar::apply_if;
/// let doubled = apply_if(21, true, |n| n * 2);
/// assert_eq!(doubled, 42);
///
/// let untouched = apply_if(21, false, |n| n * 2);
/// assert_eq!(untouched, 21);
/// ```
pub fn apply_if<T, F>(value: T, condition: bool, f: F) -> T
where
    F: FnOnce(T) -> T,
{
    if condition { f(value) } else { value }
}
