//! Structural matching: classify a heterogeneous [`Value`] by shape.
//!
//! Rules are tried in a fixed priority order and the first match wins; the
//! final arm guarantees totality. The rule order carries one known gap,
//! kept observable on purpose: a list of 3 to 6 elements matches no list
//! rule (the long-list guard wants more than 5 elements after the first)
//! and lands in the catch-all.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A heterogeneous value of unknown shape: the input domain of
/// [`analyse_data_structure`].
///
/// The serde representation is untagged, so ordinary JSON deserializes
/// directly: `5` becomes `Int`, `5.5` becomes `Float`, `[1, 2]` becomes
/// `List`, an object becomes `Map`. `Int` is declared before `Float` so
/// integral numbers keep their integer identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<Value>),
    Map(FxHashMap<String, Value>),
    Null,
}

impl Value {
    /// Runtime shape name, as reported by the catch-all rule.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "dict",
            Value::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    /// Scalars render bare, lists as `[a, b]`, maps as `{k: v}` with keys
    /// sorted so the output is deterministic.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort();
                f.write_str("{")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {}", entries[key.as_str()])?;
                }
                f.write_str("}")
            }
            Value::Null => f.write_str("null"),
        }
    }
}

/// Classify a [`Value`] by trying shape-and-guard rules in priority order.
///
/// Positive, negative, and zero integers come first, then strings by
/// emptiness, then list shapes by arity, then maps, then the catch-all
/// reporting the runtime shape name. String lengths count characters, not
/// bytes. The person rule requires *exactly* the keys `name` and `age`;
/// maps with extra keys fall to the catch-all.
pub fn analyse_data_structure(data: &Value) -> String {
    match data {
        Value::Int(n) if *n > 0 => format!("Positive integer: {n}"),
        Value::Int(n) if *n < 0 => format!("Negative integer: {n}"),
        Value::Int(_) => "Zero".to_string(),
        Value::Str(s) if s.is_empty() => "Empty string".to_string(),
        Value::Str(s) => format!("String with {} characters", s.chars().count()),
        Value::List(items) => match items.as_slice() {
            [] => "Empty list".to_string(),
            [only] => format!("List with one item: {only}"),
            [first, rest @ ..] if rest.len() > 5 => {
                format!("Long list starting with {first}")
            }
            [first, second] => format!("Two-item list: {first}, {second}"),
            // 3 to 6 elements: no list rule matches. Known gap, kept observable.
            _ => format!("Unknown data type: {}", data.type_name()),
        },
        Value::Map(entries) if entries.is_empty() => "Empty dictionary".to_string(),
        Value::Map(entries)
            if entries.len() == 2
                && entries.contains_key("name")
                && entries.contains_key("age") =>
        {
            format!("Person: {}, age {}", entries["name"], entries["age"])
        }
        _ => format!("Unknown data type: {}", data.type_name()),
    }
}
