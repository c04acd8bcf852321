//! Typed, detached JSON values that scripts operate on.

use crate::error::ScriptError;
use indexmap::IndexMap;
use serde_json::Value;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Tag of a [`NodeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Null,
    Bool,
    Numeric,
    String,
    Array,
    Object,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Null => "null",
            NodeType::Bool => "bool",
            NodeType::Numeric => "numeric",
            NodeType::String => "string",
            NodeType::Array => "array",
            NodeType::Object => "object",
        };
        f.write_str(name)
    }
}

/// Payload of a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Null,
    Bool(bool),
    Numeric(f64),
    String(String),
    Array(Vec<Node>),
    Object(IndexMap<String, Node>),
}

/// A value with a diagnostic label naming whatever produced it.
///
/// Nodes built by operators and functions are always fresh and own their
/// children; nothing links them back into a source document. The label takes
/// no part in equality.
#[derive(Debug, Clone)]
pub struct Node {
    label: Cow<'static, str>,
    value: NodeValue,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Node {
    pub fn new(label: impl Into<Cow<'static, str>>, value: NodeValue) -> Self {
        Node {
            label: label.into(),
            value,
        }
    }

    pub fn null(label: impl Into<Cow<'static, str>>) -> Self {
        Node::new(label, NodeValue::Null)
    }

    pub fn bool(label: impl Into<Cow<'static, str>>, value: bool) -> Self {
        Node::new(label, NodeValue::Bool(value))
    }

    pub fn numeric(label: impl Into<Cow<'static, str>>, value: f64) -> Self {
        Node::new(label, NodeValue::Numeric(value))
    }

    pub fn string(label: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Node::new(label, NodeValue::String(value.into()))
    }

    pub fn array(label: impl Into<Cow<'static, str>>, items: Vec<Node>) -> Self {
        Node::new(label, NodeValue::Array(items))
    }

    pub fn object(label: impl Into<Cow<'static, str>>, entries: IndexMap<String, Node>) -> Self {
        Node::new(label, NodeValue::Object(entries))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &NodeValue {
        &self.value
    }

    pub fn node_type(&self) -> NodeType {
        match self.value {
            NodeValue::Null => NodeType::Null,
            NodeValue::Bool(_) => NodeType::Bool,
            NodeValue::Numeric(_) => NodeType::Numeric,
            NodeValue::String(_) => NodeType::String,
            NodeValue::Array(_) => NodeType::Array,
            NodeValue::Object(_) => NodeType::Object,
        }
    }

    // ------------------------------------------------------------ Predicates

    pub fn is_null(&self) -> bool {
        matches!(self.value, NodeValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.value, NodeValue::Bool(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.value, NodeValue::Numeric(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self.value, NodeValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self.value, NodeValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.value, NodeValue::Object(_))
    }

    pub fn is_container(&self) -> bool {
        self.is_array() || self.is_object()
    }

    // ------------------------------------------------------------- Coercions

    fn type_error(&self, expected: &'static str) -> ScriptError {
        ScriptError::TypeCoercion {
            label: self.label.to_string(),
            expected,
            found: self.node_type(),
        }
    }

    pub fn get_string(&self) -> Result<&str, ScriptError> {
        match &self.value {
            NodeValue::String(s) => Ok(s),
            _ => Err(self.type_error("string")),
        }
    }

    pub fn get_numeric(&self) -> Result<f64, ScriptError> {
        match self.value {
            NodeValue::Numeric(n) => Ok(n),
            _ => Err(self.type_error("numeric")),
        }
    }

    pub fn get_bool(&self) -> Result<bool, ScriptError> {
        match self.value {
            NodeValue::Bool(b) => Ok(b),
            _ => Err(self.type_error("bool")),
        }
    }

    /// Numeric with an integral value representable as `i64`.
    pub fn get_integer(&self) -> Result<i64, ScriptError> {
        let n = self.get_numeric()?;
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
        if n.fract() != 0.0 || n < i64::MIN as f64 || n >= i64::MAX as f64 {
            return Err(self.type_error("integer"));
        }
        Ok(n as i64)
    }

    /// Numeric with an integral, non-negative value representable as `u64`.
    pub fn get_uinteger(&self) -> Result<u64, ScriptError> {
        let n = self.get_numeric()?;
        if n.fract() != 0.0 || n < 0.0 || n >= u64::MAX as f64 {
            return Err(self.type_error("unsigned integer"));
        }
        Ok(n as u64)
    }

    // ------------------------------------------------------------ Containers

    /// Number of children; 0 for leaves.
    pub fn size(&self) -> usize {
        match &self.value {
            NodeValue::Array(items) => items.len(),
            NodeValue::Object(entries) => entries.len(),
            _ => 0,
        }
    }

    /// Children in traversal order: array order, or object insertion order.
    pub fn children(&self) -> Vec<&Node> {
        match &self.value {
            NodeValue::Array(items) => items.iter().collect(),
            NodeValue::Object(entries) => entries.values().collect(),
            _ => Vec::new(),
        }
    }

    // ------------------------------------------------------------ Comparison

    /// Structural equality. Values of different types are never equal.
    pub fn eq_node(&self, other: &Node) -> bool {
        match (&self.value, &other.value) {
            (NodeValue::Null, NodeValue::Null) => true,
            (NodeValue::Bool(a), NodeValue::Bool(b)) => a == b,
            (NodeValue::Numeric(a), NodeValue::Numeric(b)) => a == b,
            (NodeValue::String(a), NodeValue::String(b)) => a == b,
            (NodeValue::Array(a), NodeValue::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.eq_node(y))
            }
            (NodeValue::Object(a), NodeValue::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, x)| b.get(key).is_some_and(|y| x.eq_node(y)))
            }
            _ => false,
        }
    }

    /// Ordering between two nodes of the same type.
    ///
    /// `Ok(None)` when the types differ or the numbers are unordered (NaN);
    /// only numerics and strings can be ordered at all.
    fn ordering(&self, other: &Node) -> Result<Option<Ordering>, ScriptError> {
        match (&self.value, &other.value) {
            (NodeValue::Numeric(a), NodeValue::Numeric(b)) => Ok(a.partial_cmp(b)),
            (NodeValue::String(a), NodeValue::String(b)) => Ok(Some(a.cmp(b))),
            _ if self.node_type() != other.node_type() => Ok(None),
            _ => Err(self.type_error("numeric or string")),
        }
    }

    pub fn lt(&self, other: &Node) -> Result<bool, ScriptError> {
        Ok(matches!(self.ordering(other)?, Some(Ordering::Less)))
    }

    pub fn le(&self, other: &Node) -> Result<bool, ScriptError> {
        Ok(matches!(
            self.ordering(other)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    pub fn gt(&self, other: &Node) -> Result<bool, ScriptError> {
        Ok(matches!(self.ordering(other)?, Some(Ordering::Greater)))
    }

    pub fn ge(&self, other: &Node) -> Result<bool, ScriptError> {
        Ok(matches!(
            self.ordering(other)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }

    /// Truth value used by `&&`, `||` and `not`.
    ///
    /// null is false, bools are themselves, numbers are true when nonzero,
    /// strings and containers are true when non-empty.
    pub fn truthy(&self) -> bool {
        match &self.value {
            NodeValue::Null => false,
            NodeValue::Bool(b) => *b,
            NodeValue::Numeric(n) => *n != 0.0,
            NodeValue::String(s) => !s.is_empty(),
            NodeValue::Array(items) => !items.is_empty(),
            NodeValue::Object(entries) => !entries.is_empty(),
        }
    }

    // ------------------------------------------------------------ Conversion

    /// Converts back to JSON.
    ///
    /// Integral numbers within the exactly representable range are written as
    /// JSON integers; non-finite numbers become `null`.
    pub fn to_json(&self) -> Value {
        match &self.value {
            NodeValue::Null => Value::Null,
            NodeValue::Bool(b) => Value::Bool(*b),
            NodeValue::Numeric(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                Value::from(*n as i64)
            }
            NodeValue::Numeric(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            NodeValue::String(s) => Value::String(s.clone()),
            NodeValue::Array(items) => Value::Array(items.iter().map(Node::to_json).collect()),
            NodeValue::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, child)| (key.clone(), child.to_json()))
                    .collect(),
            ),
        }
    }

    fn from_json(label: Cow<'static, str>, value: Value) -> Node {
        let value = match value {
            Value::Null => NodeValue::Null,
            Value::Bool(b) => NodeValue::Bool(b),
            Value::Number(n) => NodeValue::Numeric(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => NodeValue::String(s),
            Value::Array(items) => NodeValue::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| Node::from_json(Cow::Owned(i.to_string()), item))
                    .collect(),
            ),
            Value::Object(entries) => NodeValue::Object(
                entries
                    .into_iter()
                    .map(|(key, item)| {
                        let child = Node::from_json(Cow::Owned(key.clone()), item);
                        (key, child)
                    })
                    .collect(),
            ),
        };
        Node { label, value }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::from_json(Cow::Borrowed("json"), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_coercion_rejects_fractions() {
        assert_eq!(Node::numeric("n", 4.0).get_integer().unwrap(), 4);
        assert_eq!(Node::numeric("n", -4.0).get_integer().unwrap(), -4);
        assert!(Node::numeric("n", 4.5).get_integer().is_err());
        assert!(Node::numeric("n", f64::NAN).get_integer().is_err());
        assert!(Node::numeric("n", 1e300).get_integer().is_err());
    }

    #[test]
    fn unsigned_coercion_rejects_negatives() {
        assert_eq!(Node::numeric("n", 7.0).get_uinteger().unwrap(), 7);
        let err = Node::numeric("n", -1.0).get_uinteger().unwrap_err();
        assert!(matches!(
            err,
            ScriptError::TypeCoercion {
                expected: "unsigned integer",
                ..
            }
        ));
    }

    #[test]
    fn coercion_error_names_label_and_type() {
        let err = Node::string("price", "x").get_numeric().unwrap_err();
        assert_eq!(err.to_string(), "price: expected numeric, found string");
    }

    #[test]
    fn ordering_across_types_is_false() {
        let n = Node::numeric("n", 1.0);
        let s = Node::string("s", "1");
        assert!(!n.lt(&s).unwrap());
        assert!(!n.ge(&s).unwrap());
        assert!(!n.eq_node(&s));
    }

    #[test]
    fn ordering_bools_is_an_error() {
        let t = Node::bool("t", true);
        assert!(t.lt(&Node::bool("f", false)).is_err());
    }

    #[test]
    fn json_round_trip_keeps_object_order() {
        let source = json!({"z": 1, "a": [true, null, "x"], "m": {"k": 2.5}});
        let node = Node::from(source.clone());
        assert_eq!(node.to_json(), source);
        let keys: Vec<&str> = node.children().iter().map(|c| c.label()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn deep_equality() {
        let a = Node::from(json!({"a": [1, 2], "b": "x"}));
        let b = Node::from(json!({"b": "x", "a": [1, 2]}));
        let c = Node::from(json!({"a": [1, 3], "b": "x"}));
        assert!(a.eq_node(&b));
        assert!(!a.eq_node(&c));
    }
}
