//! The value graph the encoder operates over.
//!
//! [`Value`] is deliberately not `serde_json::Value`: the encoder must
//! distinguish a missing value ([`Value::Absent`]) from an explicit null,
//! must observe object identity for cycle detection, and must support
//! value graphs with shared references and cycles. Composite variants are
//! therefore reference-counted with interior mutability, so cloning a
//! `Value::Object` or `Value::Array` aliases the same instance.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// Conversion hook invoked by the encoder before any other rule applies.
///
/// A value carrying this capability is replaced by the result of a single
/// `to_plain_value` call and the replacement is encoded in its place. The
/// replacement is not re-hooked. A hook that panics unwinds through the
/// encoder unchanged.
pub trait ToPlainValue {
    fn to_plain_value(&self) -> Value;
}

/// Zero-argument closures are hooks.
impl<F> ToPlainValue for F
where
    F: Fn() -> Value,
{
    fn to_plain_value(&self) -> Value {
        self()
    }
}

/// A JSON-like value with three extensions over plain JSON: an explicit
/// "no value" sentinel, aliasable composites, and a conversion hook.
#[derive(Clone)]
pub enum Value {
    /// No value at all. Distinct from `Null`: absent members are omitted
    /// from objects, while absent array elements encode as `null`.
    Absent,
    Null,
    Bool(bool),
    /// A single numeric type, including the non-finite sentinels. NaN and
    /// the infinities encode as `null`.
    Number(f64),
    String(String),
    /// Ordered sequence. Shared: cloning aliases the same storage.
    Array(Rc<RefCell<Vec<Value>>>),
    /// Mapping with unique member names. Insertion order is retained as
    /// structural data; the encoder reorders members for output. Shared:
    /// cloning aliases the same storage, which is also the identity the
    /// cycle detector observes.
    Object(Rc<RefCell<IndexMap<String, Value>>>),
    /// A value exposing a [`ToPlainValue`] hook.
    Custom(Rc<dyn ToPlainValue>),
}

impl Value {
    /// Builds an array from an iterator of elements.
    pub fn array<I>(items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Builds an object from an iterator of `(name, value)` pairs.
    /// A duplicate name overwrites the earlier value, never appends.
    pub fn object<K, I>(pairs: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut map = IndexMap::new();
        for (key, value) in pairs {
            map.insert(key.into(), value);
        }
        Value::Object(Rc::new(RefCell::new(map)))
    }

    /// Wraps a conversion hook.
    pub fn custom(hook: impl ToPlainValue + 'static) -> Value {
        Value::Custom(Rc::new(hook))
    }

    /// Inserts a member into an object, overwriting any existing member
    /// with the same name. Returns `false` if `self` is not an object.
    ///
    /// This is how cyclic and shared graphs are built after construction:
    ///
    /// ```
    /// use json_stable::Value;
    ///
    /// let one = Value::object([("a", Value::from(1))]);
    /// let two = Value::object([("one", one.clone())]);
    /// assert!(one.insert("two", two.clone())); // `one` is now cyclic
    /// ```
    pub fn insert(&self, key: impl Into<String>, value: Value) -> bool {
        match self {
            Value::Object(map) => {
                map.borrow_mut().insert(key.into(), value);
                true
            }
            _ => false,
        }
    }

    /// Appends an element to an array. Returns `false` if `self` is not
    /// an array.
    pub fn push(&self, value: Value) -> bool {
        match self {
            Value::Array(items) => {
                items.borrow_mut().push(value);
                true
            }
            _ => false,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Value {
        Value::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

/// `None` maps to `Null`, not `Absent`; absence is an explicit choice.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Value {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Bridge from `serde_json` documents. The result never contains `Absent`
/// or `Custom`. Integers outside the exact-`f64` range lose precision, as
/// they would crossing any single-number-type boundary.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::array(items.into_iter().map(Value::from)),
            serde_json::Value::Object(map) => {
                Value::object(map.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

/// Shallow by necessity: a derived `Debug` would recurse forever on a
/// cyclic graph.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("Absent"),
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(items) => match items.try_borrow() {
                Ok(items) => write!(f, "Array({} elements)", items.len()),
                Err(_) => f.write_str("Array(<borrowed>)"),
            },
            Value::Object(map) => match map.try_borrow() {
                Ok(map) => write!(f, "Object({} members)", map.len()),
                Err(_) => f.write_str("Object(<borrowed>)"),
            },
            Value::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duplicate_insertion_overwrites() {
        let obj = Value::object([("a", Value::from(1)), ("a", Value::from(2))]);
        let Value::Object(map) = &obj else {
            panic!("expected object");
        };
        let map = map.borrow();
        assert_eq!(map.len(), 1);
        assert!(matches!(map["a"], Value::Number(n) if n == 2.0));
    }

    #[test]
    fn clone_aliases_storage() {
        let obj = Value::object([("a", Value::from(1))]);
        let alias = obj.clone();
        assert!(alias.insert("b", Value::from(2)));

        let Value::Object(map) = &obj else {
            panic!("expected object");
        };
        assert_eq!(map.borrow().len(), 2);
    }

    #[test]
    fn insert_rejects_non_objects() {
        assert!(!Value::Null.insert("a", Value::from(1)));
        assert!(!Value::from(3).insert("a", Value::from(1)));
    }

    #[test]
    fn push_appends_to_arrays_only() {
        let arr = Value::array([Value::from(1)]);
        assert!(arr.push(Value::from(2)));
        assert!(!Value::Null.push(Value::from(3)));

        let Value::Array(items) = &arr else {
            panic!("expected array");
        };
        assert_eq!(items.borrow().len(), 2);
    }

    #[test]
    fn from_serde_json_preserves_shape() {
        let v = Value::from(json!({"a": [1, "x", null], "b": true}));
        let Value::Object(map) = &v else {
            panic!("expected object");
        };
        let map = map.borrow();
        assert_eq!(map.len(), 2);
        assert!(matches!(map["b"], Value::Bool(true)));
        let Value::Array(items) = &map["a"] else {
            panic!("expected array");
        };
        assert_eq!(items.borrow().len(), 3);
    }

    #[test]
    fn from_option_maps_none_to_null() {
        assert!(Value::from(None::<i32>).is_null());
        assert!(matches!(Value::from(Some(5)), Value::Number(n) if n == 5.0));
    }

    #[test]
    fn debug_is_cycle_safe() {
        let obj = Value::object([("a", Value::from(1))]);
        obj.insert("self", obj.clone());
        assert_eq!(format!("{:?}", obj), "Object(2 members)");
    }

    #[test]
    fn custom_wraps_closures() {
        let v = Value::custom(|| Value::from("plain"));
        let Value::Custom(hook) = &v else {
            panic!("expected custom");
        };
        assert!(matches!(hook.to_plain_value(), Value::String(s) if s == "plain"));
    }
}
