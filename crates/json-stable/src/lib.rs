//! json-stable — deterministic JSON stringification with total member ordering.
//!
//! Standard JSON serializers emit object members in insertion order, so two
//! structurally-equal documents built in different orders serialize to
//! different bytes. This crate fixes member order with a total,
//! user-controllable ordering, making output byte-identical for
//! structurally-equal inputs — the property content hashing, cache-key
//! derivation, diffing, and signing all need.
//!
//! # Example
//!
//! ```
//! use json_stable::{stringify, Value};
//!
//! let a = Value::object([("x", Value::from(1)), ("y", Value::from(2))]);
//! let b = Value::object([("y", Value::from(2)), ("x", Value::from(1))]);
//!
//! assert_eq!(stringify(&a).unwrap(), stringify(&b).unwrap());
//! assert_eq!(stringify(&a).unwrap().unwrap(), r#"{"x":1,"y":2}"#);
//! ```
//!
//! Beyond plain JSON, the [`Value`] graph supports an explicit
//! [`Absent`](Value::Absent) sentinel (omitted from objects, `null` in
//! arrays), shared and cyclic references with identity-based cycle
//! detection, and a per-value [`ToPlainValue`] conversion hook.

pub mod number;
pub mod options;
pub mod sort;
pub mod stringify;
pub mod strings;
pub mod value;

// Re-exports for convenience
pub use options::{MemberComparator, MemberEntry, StringifyOptions};
pub use stringify::{stringify, stringify_with, StringifyError};
pub use value::{ToPlainValue, Value};
