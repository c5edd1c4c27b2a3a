//! Attribute values and the shallow equality used for change detection
//!
//! Two attribute values are equal when they are identical scalars, or when
//! both are sequences of the same length whose elements are pairwise
//! identical scalars. Objects are equal only when both sides are the very
//! same map in memory, so diffing a list against itself stays empty while
//! two separately built extension maps are always reported as changed.

use crate::list::Extensions;

/// Scalar leaf of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    Number(u64),
    Text(&'a str),
}

/// Borrowed view of a single comparable attribute
#[derive(Debug, Clone)]
pub enum AttributeValue<'a> {
    /// Optional attribute not set
    Absent,
    Scalar(Scalar<'a>),
    Sequence(Vec<AttributeValue<'a>>),
    /// Key-value structure, compared by identity only
    Object(&'a Extensions),
}

/// Compare two attribute values, descending at most one level into sequences
pub fn shallow_eq(a: &AttributeValue<'_>, b: &AttributeValue<'_>) -> bool {
    match (a, b) {
        (AttributeValue::Absent, AttributeValue::Absent) => true,
        (AttributeValue::Scalar(a), AttributeValue::Scalar(b)) => a == b,
        (AttributeValue::Sequence(a), AttributeValue::Sequence(b)) => {
            a.len() == b.len()
                && a.iter().zip(b).all(|pair| {
                    matches!(pair, (AttributeValue::Scalar(x), AttributeValue::Scalar(y)) if x == y)
                })
        }
        (AttributeValue::Object(a), AttributeValue::Object(b)) => std::ptr::eq(*a, *b),
        _ => false,
    }
}

impl<'a> From<&'a str> for AttributeValue<'a> {
    fn from(value: &'a str) -> Self {
        AttributeValue::Scalar(Scalar::Text(value))
    }
}

impl From<u8> for AttributeValue<'_> {
    fn from(value: u8) -> Self {
        AttributeValue::Scalar(Scalar::Number(value.into()))
    }
}

impl<'a> From<&'a [String]> for AttributeValue<'a> {
    fn from(values: &'a [String]) -> Self {
        AttributeValue::Sequence(values.iter().map(|v| v.as_str().into()).collect())
    }
}

impl<'a> From<&'a Extensions> for AttributeValue<'a> {
    fn from(value: &'a Extensions) -> Self {
        AttributeValue::Object(value)
    }
}

impl<'a, T> From<Option<T>> for AttributeValue<'a>
where
    T: Into<AttributeValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Absent, Into::into)
    }
}
