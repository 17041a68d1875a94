// SPDX-License-Identifier: Apache-2.0

//! The parsed document tree.
//!
//! Every node exclusively owns its children, so the tree is acyclic and is
//! released post-order when the root is dropped.

use alloc::string::String;
use alloc::vec::Vec;

/// A JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `true` or `false`
    Bool(bool),
    /// `null`
    Null,
    /// Any JSON number, stored as the widest float type.
    Number(f64),
    /// A string with escapes decoded.
    String(String),
    /// Elements in document order.
    Array(Vec<Value>),
    /// Members in document order; duplicate keys are kept.
    Object(Vec<Member>),
}

/// A key/value pair inside an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub key: String,
    pub value: Value,
}

impl Member {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up the first member named `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|m| m.key == key)
            .map(|m| &m.value)
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use test_log::test;

    fn sample() -> Value {
        Value::Object(vec![
            Member::new("pi", Value::Number(1.5)),
            Member::new("name", Value::String("rd".into())),
            Member::new("list", Value::Array(vec![Value::Null, Value::Bool(true)])),
            Member::new("pi", Value::Number(3.0)),
        ])
    }

    #[test]
    fn test_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::Number(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::String("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Null.as_str(), None);
        assert_eq!(Value::Bool(true).as_f64(), None);
    }

    #[test]
    fn test_get_returns_first_member() {
        let value = sample();
        assert_eq!(value.get("pi"), Some(&Value::Number(1.5)));
        assert_eq!(value.get("name").and_then(Value::as_str), Some("rd"));
        assert_eq!(value.get("missing"), None);
        assert_eq!(Value::Null.get("pi"), None);
    }

    #[test]
    fn test_container_views_keep_order() {
        let value = sample();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .iter()
            .map(|m| m.key.as_str())
            .collect();
        assert_eq!(keys, ["pi", "name", "list", "pi"]);
        let list = value.get("list").and_then(Value::as_array).unwrap();
        assert_eq!(list, &[Value::Null, Value::Bool(true)]);
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(sample().kind_name(), "object");
        assert_eq!(Value::Array(Vec::new()).kind_name(), "array");
        assert_eq!(Value::Number(0.0).kind_name(), "number");
    }
}
