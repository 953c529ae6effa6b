//! The tree model every helper in this crate operates on.
//!
//! A [`Node`] is either a [`Scalar`] leaf, an ordered [`Sequence`] of nodes or
//! a string-keyed [`Mapping`] of nodes. Mappings keep insertion order so that
//! key iteration (and therefore difference output) is deterministic.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Ordered, index-addressed children.
pub type Sequence = Vec<Node>;

/// String-keyed children in insertion order.
pub type Mapping = IndexMap<String, Node>;

/// Shared `Undefined` leaf, read in place of a missing mapping key.
pub(crate) static UNDEFINED: Node = Node::Scalar(Scalar::Undefined);

/// A leaf value.
///
/// `Undefined` is the "no value" marker. It is distinct from `Null` for
/// comparison purposes and serializes as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Undefined, Scalar::Undefined) => true,
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Number(a), Scalar::Number(b)) => numbers_equal(a, b),
            (Scalar::String(a), Scalar::String(b)) => a == b,
            _ => false,
        }
    }
}

/// Numbers compare by value, so `1` and `1.0` are equal. An integer is
/// compared with a float exactly, never through a lossy `f64` conversion.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (integer_value(a), integer_value(b)) {
        (Some(x), Some(y)) => x == y,
        (Some(x), None) => float_is_integer(b, x),
        (None, Some(y)) => float_is_integer(a, y),
        (None, None) => a.as_f64() == b.as_f64(),
    }
}

fn integer_value(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn float_is_integer(n: &Number, int: i128) -> bool {
    n.as_f64()
        .is_some_and(|f| f.is_finite() && f.fract() == 0.0 && f as i128 == int)
}

/// The three node kinds, used for dispatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Sequence,
    Mapping,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Scalar => "scalar",
            NodeKind::Sequence => "sequence",
            NodeKind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// A value in a data tree.
///
/// The derived `PartialEq` is strict structural equality. The toolkit's own
/// comparison semantics live in [`crate::equal`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Scalar(Scalar),
    Sequence(Sequence),
    Mapping(Mapping),
}

impl Node {
    pub fn undefined() -> Self {
        Node::Scalar(Scalar::Undefined)
    }

    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Scalar(_) => NodeKind::Scalar,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Mapping(_) => NodeKind::Mapping,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Undefined))
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Number of direct children. Scalars have none.
    pub fn len(&self) -> usize {
        match self {
            Node::Scalar(_) => 0,
            Node::Sequence(items) => items.len(),
            Node::Mapping(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a direct child by mapping key or by decimal sequence index.
    ///
    /// ```
    /// use list_object_utils::Node;
    /// use serde_json::json;
    ///
    /// let node = Node::from(json!({"a": [10, 20]}));
    /// let list = node.get("a").unwrap();
    /// assert_eq!(list.get("1"), Some(&Node::from(20)));
    /// assert_eq!(list.get("x"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Scalar(_) => None,
            Node::Sequence(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            Node::Mapping(map) => map.get(key),
        }
    }

    /// Converts to a `serde_json::Value`. `Undefined` becomes `null`.
    pub fn to_value(&self) -> Value {
        match self {
            Node::Scalar(Scalar::Undefined) | Node::Scalar(Scalar::Null) => Value::Null,
            Node::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
            Node::Scalar(Scalar::Number(n)) => Value::Number(n.clone()),
            Node::Scalar(Scalar::String(s)) => Value::String(s.clone()),
            Node::Sequence(items) => Value::Array(items.iter().map(Node::to_value).collect()),
            Node::Mapping(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_value()))
                    .collect(),
            ),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::undefined()
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::null(),
            Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Node::Scalar(Scalar::Number(n)),
            Value::String(s) => Node::Scalar(Scalar::String(s)),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        Node::from(value.clone())
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        node.to_value()
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::Bool(b))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Node {
                fn from(n: $t) -> Self {
                    Node::Scalar(Scalar::Number(Number::from(n)))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Node {
    /// Non-finite floats have no JSON form and become `null`.
    fn from(n: f64) -> Self {
        match Number::from_f64(n) {
            Some(n) => Node::Scalar(Scalar::Number(n)),
            None => Node::null(),
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Scalar::String(s.to_owned()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Scalar::String(s))
    }
}

impl From<Sequence> for Node {
    fn from(items: Sequence) -> Self {
        Node::Sequence(items)
    }
}

impl From<Mapping> for Node {
    fn from(map: Mapping) -> Self {
        Node::Mapping(map)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::Sequence(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Node::Mapping(iter.into_iter().collect())
    }
}

impl FromStr for Node {
    type Err = serde_json::Error;

    /// Parses JSON text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str::<Value>(s).map(Node::from)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Node::from)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::stringify::stringify(self))
    }
}
