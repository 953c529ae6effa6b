use std::ptr;

use crate::node::{Mapping, Node, UNDEFINED};

/// Deep equality for two sequences.
///
/// Returns `false` when either argument is absent or is not a
/// [`Node::Sequence`]; a kind mismatch is an ordinary "not equal" outcome.
/// Elements are compared pairwise: two sequences recurse into this function,
/// any pairing that involves a mapping recurses into [`equal_mappings`], and
/// everything else falls back to scalar equality.
///
/// # Examples
///
/// ```
/// use list_object_utils::{equal_sequences, Node};
/// use serde_json::json;
///
/// let a = Node::from(json!([1, [2, 3]]));
/// let b = Node::from(json!([1, [2, 3]]));
/// let c = Node::from(json!([1, [2, 4]]));
///
/// assert!(equal_sequences(&a, &b));
/// assert!(!equal_sequences(&a, &c));
/// assert!(!equal_sequences(&a, None::<&Node>));
/// ```
pub fn equal_sequences<'a, A, B>(a: A, b: B) -> bool
where
    A: Into<Option<&'a Node>>,
    B: Into<Option<&'a Node>>,
{
    let (a, b) = match (a.into(), b.into()) {
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };
    if ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Node::Sequence(items_a), Node::Sequence(items_b)) => items_equal(items_a, items_b),
        _ => false,
    }
}

/// Deep equality for two mappings.
///
/// Returns `false` when either argument is absent or is not a
/// [`Node::Mapping`]. Only the keys of `a` are visited; a key missing from `b`
/// reads as `Undefined`. Key-set parity rests on the key-count check alone,
/// so `{"x": undefined}` and `{"y": undefined}` compare equal.
///
/// # Examples
///
/// ```
/// use list_object_utils::{equal_mappings, Node};
/// use serde_json::json;
///
/// let a = Node::from(json!({"a": 1, "b": [1, 2]}));
/// let b = Node::from(json!({"b": [1, 2], "a": 1}));
///
/// assert!(equal_mappings(&a, &b));
/// assert!(!equal_mappings(&a, &Node::from(json!([1, 2]))));
/// ```
pub fn equal_mappings<'a, A, B>(a: A, b: B) -> bool
where
    A: Into<Option<&'a Node>>,
    B: Into<Option<&'a Node>>,
{
    let (a, b) = match (a.into(), b.into()) {
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };
    if ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Node::Mapping(map_a), Node::Mapping(map_b)) => entries_equal(map_a, map_b),
        _ => false,
    }
}

/// Deep equality for any two nodes, dispatching on the pair's kinds the same
/// way element comparison does.
pub fn deep_equal(a: &Node, b: &Node) -> bool {
    ptr::eq(a, b) || pair_equal(a, b)
}

fn items_equal(a: &[Node], b: &[Node]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| pair_equal(x, y))
}

fn entries_equal(a: &Mapping, b: &Mapping) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .all(|(key, x)| pair_equal(x, b.get(key).unwrap_or(&UNDEFINED)))
}

fn pair_equal(a: &Node, b: &Node) -> bool {
    match (a, b) {
        (Node::Sequence(_), Node::Sequence(_)) => equal_sequences(a, b),
        (Node::Mapping(_), Node::Mapping(_) | Node::Sequence(_))
        | (Node::Sequence(_), Node::Mapping(_)) => equal_mappings(a, b),
        (Node::Scalar(x), Node::Scalar(y)) => x == y,
        _ => false,
    }
}
