//! Encoder configuration.

use std::cmp::Ordering;
use std::fmt;

use crate::value::Value;

/// One side of a member comparison: the member name and its current value
/// in the object being ordered. Comparators may order on either.
pub struct MemberEntry<'a> {
    pub key: &'a str,
    pub value: &'a Value,
}

/// User-supplied total order over object members. When present it fully
/// replaces the default ascending code-point order of member names.
pub type MemberComparator = dyn Fn(&MemberEntry, &MemberEntry) -> Ordering;

/// Options for [`stringify_with`](crate::stringify_with).
///
/// A bare comparator closure converts into options directly, so both of
/// these calls are accepted:
///
/// ```
/// use json_stable::{stringify_with, MemberEntry, StringifyOptions, Value};
///
/// let doc = Value::object([("b", Value::from(2)), ("a", Value::from(1))]);
///
/// let with_record = stringify_with(&doc, StringifyOptions::new().with_cycles(true));
/// let with_closure =
///     stringify_with(&doc, |a: &MemberEntry, b: &MemberEntry| b.key.cmp(a.key));
///
/// assert_eq!(with_record.unwrap().unwrap(), r#"{"a":1,"b":2}"#);
/// assert_eq!(with_closure.unwrap().unwrap(), r#"{"b":2,"a":1}"#);
/// ```
#[derive(Default)]
pub struct StringifyOptions {
    /// When `true`, an object reached again while still an open ancestor
    /// encodes as the string `"__cycle__"` instead of failing.
    pub cycles: bool,
    /// Replaces the default member ordering when present.
    pub comparator: Option<Box<MemberComparator>>,
}

impl StringifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cycles(mut self, cycles: bool) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn with_comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&MemberEntry, &MemberEntry) -> Ordering + 'static,
    {
        self.comparator = Some(Box::new(comparator));
        self
    }
}

/// The bare-comparator form of the options parameter.
impl<F> From<F> for StringifyOptions
where
    F: Fn(&MemberEntry, &MemberEntry) -> Ordering + 'static,
{
    fn from(comparator: F) -> Self {
        StringifyOptions::new().with_comparator(comparator)
    }
}

impl fmt::Debug for StringifyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringifyOptions")
            .field("cycles", &self.cycles)
            .field("comparator", &self.comparator.as_ref().map(|_| ".."))
            .finish()
    }
}
