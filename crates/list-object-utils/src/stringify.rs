use crate::node::Node;

/// Serializes a node as compact JSON.
///
/// `Undefined` leaves are written as `null` instead of being dropped, both at
/// the top level and inside containers. Mapping keys keep their order.
///
/// # Examples
///
/// ```
/// use list_object_utils::{stringify, Node};
/// use serde_json::json;
///
/// let node = Node::Sequence(vec![Node::from(1), Node::undefined()]);
/// assert_eq!(stringify(&node), "[1,null]");
/// assert_eq!(stringify(&Node::from(json!({"b": "x", "a": [true]}))), r#"{"b":"x","a":[true]}"#);
/// ```
pub fn stringify(node: &Node) -> String {
    // Keys are always strings and numbers are always finite, so this cannot fail.
    serde_json::to_string(node).expect("node serialization is infallible")
}

/// Like [`stringify`], indented for display.
pub fn stringify_pretty(node: &Node) -> String {
    serde_json::to_string_pretty(node).expect("node serialization is infallible")
}
