//! Deterministic JSON stringification with sorted object members.
//!
//! Unlike standard JSON serialization, object members are emitted in a
//! total order over member names (ascending code-point order by default,
//! or a caller-supplied [`MemberComparator`]), so two structurally-equal
//! value graphs always produce byte-identical output regardless of the
//! order their members were inserted. Arrays keep input order. No
//! insignificant whitespace is ever emitted.
//!
//! Cycle handling: the encoder tracks the object identities on the current
//! traversal path. A shared object reached twice through non-overlapping
//! paths encodes independently at each occurrence; an object that is its
//! own ancestor is a true cycle and fails with
//! [`StringifyError::CircularStructure`], or encodes as the string
//! `"__cycle__"` when [`StringifyOptions::cycles`] is set.
//!
//! Recursion depth equals the nesting depth of the input, so encoding an
//! adversarially deep graph can exhaust the stack. Callers handling
//! untrusted input should bound depth before encoding.

use std::rc::Rc;

use indexmap::IndexMap;
use thiserror::Error;

use crate::number::format_number;
use crate::options::{MemberEntry, StringifyOptions};
use crate::sort::insertion_sort_by;
use crate::strings::to_json_string;
use crate::value::Value;

/// Emitted in place of an open ancestor when cycles are allowed.
const CYCLE_SENTINEL: &str = "__cycle__";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StringifyError {
    /// An object was reached again while still an open ancestor on the
    /// current traversal path and cycle tolerance was off.
    #[error("Converting circular structure to JSON")]
    CircularStructure,
}

/// Serializes `value` with default options: no cycle tolerance, members
/// in ascending code-point order of their names.
///
/// `Ok(None)` is the "no output" outcome and occurs only when the value
/// itself encodes to nothing ([`Value::Absent`] at the top level). Every
/// other value yields text.
///
/// # Examples
///
/// ```
/// use json_stable::{stringify, Value};
///
/// let doc = Value::object([
///     ("c", Value::from(6)),
///     ("b", Value::array([Value::from(4), Value::from(5)])),
///     ("a", Value::from(3)),
///     ("z", Value::Null),
/// ]);
/// assert_eq!(
///     stringify(&doc).unwrap().unwrap(),
///     r#"{"a":3,"b":[4,5],"c":6,"z":null}"#,
/// );
/// ```
pub fn stringify(value: &Value) -> Result<Option<String>, StringifyError> {
    stringify_with(value, StringifyOptions::default())
}

/// Serializes `value` under the given options. `options` accepts either a
/// [`StringifyOptions`] record or a bare comparator closure.
///
/// The encoder never mutates its input; independent calls are mutually
/// reentrant and may run on separate threads over the same graph as long
/// as the graph itself is not concurrently mutated.
pub fn stringify_with(
    value: &Value,
    options: impl Into<StringifyOptions>,
) -> Result<Option<String>, StringifyError> {
    let options = options.into();
    // Seen set is call-local: ancestor object identities on the current
    // traversal path, pushed on entry and popped on every exit.
    let mut seen: Vec<*const ()> = Vec::new();
    visit(value, &options, &mut seen)
}

/// One recursion step. Resolves the conversion hook, then encodes the
/// (possibly replaced) node. The hook fires at most once per node; its
/// replacement is not re-hooked.
fn visit(
    node: &Value,
    options: &StringifyOptions,
    seen: &mut Vec<*const ()>,
) -> Result<Option<String>, StringifyError> {
    if let Value::Custom(hook) = node {
        let replacement = hook.to_plain_value();
        return visit_plain(&replacement, options, seen);
    }
    visit_plain(node, options, seen)
}

fn visit_plain(
    node: &Value,
    options: &StringifyOptions,
    seen: &mut Vec<*const ()>,
) -> Result<Option<String>, StringifyError> {
    match node {
        // An uninvoked hook (a hook that returned another hooked value)
        // has no literal form and encodes to nothing.
        Value::Custom(_) => Ok(None),
        Value::Absent => Ok(None),
        Value::Number(n) => Ok(Some(format_number(*n))),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::String(s) => Ok(Some(to_json_string(s))),
        Value::Array(items) => {
            let items = items.borrow();
            let mut out = String::from('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Arrays never omit positions: absent elements become null.
                match visit(item, options, seen)? {
                    Some(text) => out.push_str(&text),
                    None => out.push_str("null"),
                }
            }
            out.push(']');
            Ok(Some(out))
        }
        Value::Null => Ok(Some("null".to_owned())),
        Value::Object(map) => {
            let id = Rc::as_ptr(map) as *const ();
            if seen.contains(&id) {
                if options.cycles {
                    return Ok(Some(to_json_string(CYCLE_SENTINEL)));
                }
                return Err(StringifyError::CircularStructure);
            }
            seen.push(id);
            let result = visit_members(&map.borrow(), options, seen);
            // Pop unconditionally, error path included, so a caller that
            // recovers cannot observe leaked ancestry in sibling subtrees.
            seen.pop();
            result
        }
    }
}

fn visit_members(
    map: &IndexMap<String, Value>,
    options: &StringifyOptions,
    seen: &mut Vec<*const ()>,
) -> Result<Option<String>, StringifyError> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    match &options.comparator {
        Some(comparator) => insertion_sort_by(&mut keys, |a, b| {
            comparator(
                &MemberEntry { key: *a, value: &map[*a] },
                &MemberEntry { key: *b, value: &map[*b] },
            )
        }),
        // default: ascending code-point order of member names
        None => insertion_sort_by(&mut keys, |a, b| a.cmp(b)),
    }

    let mut out = String::from('{');
    let mut first = true;
    for key in keys {
        // Absent members are dropped entirely: no key, no comma.
        let Some(text) = visit(&map[key], options, seen)? else {
            continue;
        };
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&to_json_string(key));
        out.push(':');
        out.push_str(&text);
    }
    out.push('}');
    Ok(Some(out))
}
