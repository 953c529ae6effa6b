//! Deep difference between a baseline and a target tree.
//!
//! A [`Difference`] answers "how do I turn `a` into `b`". It is directional:
//! entries describe values that differ and values that only exist in `b`.
//! Mapping keys that exist only in `a` are never reported, so removing a key
//! produces no entry at all. A sequence index missing from `b` reads as
//! `Undefined` and is reported as such.
//!
//! # Examples
//!
//! ```
//! use list_object_utils::{diff_mappings, diff_sequences, Node};
//! use serde_json::json;
//!
//! let a = Node::from(json!([1]));
//! let b = Node::from(json!([1, 2]));
//! assert_eq!(diff_sequences(&a, &b).to_node(), Node::from(json!({"1": 2})));
//!
//! // Removal of `a` is invisible; only the added key is reported.
//! let a = Node::from(json!({"a": 1}));
//! let b = Node::from(json!({"b": 1}));
//! assert_eq!(diff_mappings(&a, &b).to_node(), Node::from(json!({"b": 1})));
//! ```

use std::fmt;
use std::ptr;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::trace;

use crate::node::{Mapping, Node, UNDEFINED};

/// Keyed difference entries, in emission order.
pub type Entries = IndexMap<String, Change>;

/// A single entry of a difference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Change {
    /// The target's value at this key (after the value transform).
    Value(Node),
    /// Both sides hold containers of the same kind that differ further down.
    Nested(Entries),
}

impl Change {
    pub fn as_value(&self) -> Option<&Node> {
        match self {
            Change::Value(node) => Some(node),
            Change::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&Entries> {
        match self {
            Change::Nested(entries) => Some(entries),
            Change::Value(_) => None,
        }
    }

    pub fn to_node(&self) -> Node {
        match self {
            Change::Value(node) => node.clone(),
            Change::Nested(entries) => entries_to_node(entries),
        }
    }

    /// Applies this change on top of `base`, the baseline value at its key.
    pub fn apply_to(&self, base: &Node) -> Node {
        match self {
            Change::Value(node) => node.clone(),
            Change::Nested(entries) => apply_entries(base, entries),
        }
    }
}

/// The result of a difference computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Difference {
    /// One operand was absent (or not of the expected kind), so the target is
    /// reported whole. An absent target is reported as `Undefined`.
    Whole(Node),
    /// Per-key entries. Empty when the operands do not diverge.
    Keyed(Entries),
}

impl Difference {
    pub fn empty() -> Self {
        Difference::Keyed(Entries::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Difference::Whole(_) => false,
            Difference::Keyed(entries) => entries.is_empty(),
        }
    }

    /// Number of top-level entries. A whole replacement counts as one.
    pub fn len(&self) -> usize {
        match self {
            Difference::Whole(_) => 1,
            Difference::Keyed(entries) => entries.len(),
        }
    }

    pub fn entries(&self) -> Option<&Entries> {
        match self {
            Difference::Keyed(entries) => Some(entries),
            Difference::Whole(_) => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Change> {
        self.entries().and_then(|entries| entries.get(key))
    }

    /// Renders the difference as a plain node: a mapping for keyed entries,
    /// or the replacement itself.
    pub fn to_node(&self) -> Node {
        match self {
            Difference::Whole(node) => node.clone(),
            Difference::Keyed(entries) => entries_to_node(entries),
        }
    }

    pub fn into_node(self) -> Node {
        match self {
            Difference::Whole(node) => node,
            Difference::Keyed(entries) => entries_to_node(&entries),
        }
    }

    /// Replays the difference onto a copy of `base`.
    ///
    /// Sequence keys are read as decimal indices; an index past the end of the
    /// copy extends it, padding any gap with `Undefined`. A target that was
    /// shorter than the baseline replays as `Undefined` slots, not as a
    /// truncated sequence. Entries produced
    /// with a key transform only replay correctly if the transformed keys
    /// still address the baseline.
    ///
    /// ```
    /// use list_object_utils::{diff_mappings, Node};
    /// use serde_json::json;
    ///
    /// let a = Node::from(json!({"name": "x", "tags": ["a"]}));
    /// let b = Node::from(json!({"name": "y", "tags": ["a", "b"], "new": true}));
    /// assert_eq!(diff_mappings(&a, &b).apply(&a), b);
    /// ```
    pub fn apply(&self, base: &Node) -> Node {
        match self {
            Difference::Whole(node) => node.clone(),
            Difference::Keyed(entries) => apply_entries(base, entries),
        }
    }
}

impl Default for Difference {
    fn default() -> Self {
        Difference::empty()
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_node(), f)
    }
}

fn entries_to_node(entries: &Entries) -> Node {
    Node::Mapping(
        entries
            .iter()
            .map(|(key, change)| (key.clone(), change.to_node()))
            .collect(),
    )
}

fn apply_entries(base: &Node, entries: &Entries) -> Node {
    match base {
        Node::Sequence(items) => {
            let mut out = items.clone();
            for (key, change) in entries {
                let Ok(index) = key.parse::<usize>() else {
                    continue;
                };
                if index < out.len() {
                    out[index] = change.apply_to(&out[index]);
                } else {
                    out.resize(index, Node::undefined());
                    out.push(change.apply_to(&UNDEFINED));
                }
            }
            Node::Sequence(out)
        }
        Node::Mapping(map) => {
            let mut out = map.clone();
            for (key, change) in entries {
                let next = change.apply_to(out.get(key).unwrap_or(&UNDEFINED));
                out.insert(key.clone(), next);
            }
            Node::Mapping(out)
        }
        Node::Scalar(_) => apply_entries(&Node::Mapping(Mapping::new()), entries),
    }
}

/// Key transform: `(key, a_value, b_value) -> key`. `a_value` is `None` for
/// entries that only exist in the target.
pub type KeyFn<'f> = dyn Fn(&str, Option<&Node>, &Node) -> String + 'f;

/// Value transform: `(b_value, key, a_value) -> value`. Applied to leaves
/// only, never to nested entries.
pub type ValueFn<'f> = dyn Fn(&Node, &str, Option<&Node>) -> Node + 'f;

/// Optional transforms for the parametrized difference functions.
///
/// Both default to identity. They are applied at every depth of the
/// recursion.
///
/// # Examples
///
/// ```
/// use list_object_utils::{diff_mappings_with, DiffOptions, Node};
/// use serde_json::json;
///
/// let a = Node::from(json!({"a": 1, "b": {"c": 2}}));
/// let b = Node::from(json!({"a": 5, "b": {"c": 3}}));
///
/// let options = DiffOptions::new()
///     .with_key(|key, _, _| key.to_uppercase())
///     .with_value(|b, _, a| Node::from(json!({"from": a.map(|a| a.to_value()), "to": b.to_value()})));
///
/// let diff = diff_mappings_with(&a, &b, &options);
/// assert_eq!(
///     diff.to_node(),
///     Node::from(json!({
///         "A": {"from": 1, "to": 5},
///         "B": {"C": {"from": 2, "to": 3}}
///     }))
/// );
/// ```
#[derive(Default)]
pub struct DiffOptions<'f> {
    key: Option<Box<KeyFn<'f>>>,
    value: Option<Box<ValueFn<'f>>>,
}

impl<'f> DiffOptions<'f> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<&Node>, &Node) -> String + 'f,
    {
        self.key = Some(Box::new(f));
        self
    }

    pub fn with_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&Node, &str, Option<&Node>) -> Node + 'f,
    {
        self.value = Some(Box::new(f));
        self
    }

    fn emit_key(&self, key: &str, a: Option<&Node>, b: &Node) -> String {
        match &self.key {
            Some(f) => f(key, a, b),
            None => key.to_owned(),
        }
    }

    fn emit_value(&self, b: &Node, key: &str, a: Option<&Node>) -> Node {
        match &self.value {
            Some(f) => f(b, key, a),
            None => b.clone(),
        }
    }
}

impl fmt::Debug for DiffOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffOptions")
            .field("key", &self.key.is_some())
            .field("value", &self.value.is_some())
            .finish()
    }
}

// ── Public API ────────────────────────────────────────────────────────────

/// Difference between two sequences with identity key/value transforms.
///
/// See [`diff_sequences_with`].
pub fn diff_sequences<'a, A, B>(a: A, b: B) -> Difference
where
    A: Into<Option<&'a Node>>,
    B: Into<Option<&'a Node>>,
{
    diff_sequences_with(a, b, &DiffOptions::default())
}

/// Difference between two mappings with identity key/value transforms.
///
/// See [`diff_mappings_with`].
pub fn diff_mappings<'a, A, B>(a: A, b: B) -> Difference
where
    A: Into<Option<&'a Node>>,
    B: Into<Option<&'a Node>>,
{
    diff_mappings_with(a, b, &DiffOptions::default())
}

/// Difference from sequence `a` to sequence `b`.
///
/// - The same node on both sides yields an empty difference.
/// - If either side is absent, `b` is returned whole.
/// - Every index of `a` is compared; differing same-kind containers recurse
///   and are omitted when the nested result is empty, anything else records
///   `b`'s value.
/// - An index of `a` past the end of `b` compares against `Undefined`, so a
///   shorter target records `Undefined` at each missing index.
/// - Indices past the end of `a` are recorded verbatim.
pub fn diff_sequences_with<'a, A, B>(a: A, b: B, options: &DiffOptions<'_>) -> Difference
where
    A: Into<Option<&'a Node>>,
    B: Into<Option<&'a Node>>,
{
    let (a, b) = match operands(a.into(), b.into()) {
        Ok(pair) => pair,
        Err(whole) => return whole,
    };
    if ptr::eq(a, b) {
        return Difference::empty();
    }
    match (a, b) {
        (Node::Sequence(items_a), Node::Sequence(items_b)) => {
            let entries = sequence_entries(items_a, items_b, options);
            trace!(entries = entries.len(), "diffed sequences");
            Difference::Keyed(entries)
        }
        _ => {
            trace!(a = %a.kind(), b = %b.kind(), "sequence diff on non-sequence, reporting target whole");
            Difference::Whole(b.clone())
        }
    }
}

/// Difference from mapping `a` to mapping `b`.
///
/// - The same node on both sides yields an empty difference.
/// - If either side is absent, `b` is returned whole.
/// - Each key of `a` that is present in `b` is compared the same way as
///   sequence elements.
/// - Keys only in `b` are recorded verbatim.
/// - Keys only in `a` are not recorded: the difference never expresses a
///   deletion.
pub fn diff_mappings_with<'a, A, B>(a: A, b: B, options: &DiffOptions<'_>) -> Difference
where
    A: Into<Option<&'a Node>>,
    B: Into<Option<&'a Node>>,
{
    let (a, b) = match operands(a.into(), b.into()) {
        Ok(pair) => pair,
        Err(whole) => return whole,
    };
    if ptr::eq(a, b) {
        return Difference::empty();
    }
    match (a, b) {
        (Node::Mapping(map_a), Node::Mapping(map_b)) => {
            let entries = mapping_entries(map_a, map_b, options);
            trace!(entries = entries.len(), "diffed mappings");
            Difference::Keyed(entries)
        }
        _ => {
            trace!(a = %a.kind(), b = %b.kind(), "mapping diff on non-mapping, reporting target whole");
            Difference::Whole(b.clone())
        }
    }
}

// ── Core recursion ────────────────────────────────────────────────────────

fn operands<'a>(
    a: Option<&'a Node>,
    b: Option<&'a Node>,
) -> Result<(&'a Node, &'a Node), Difference> {
    match (a, b) {
        (Some(a), Some(b)) => Ok((a, b)),
        (_, b) => {
            trace!(baseline = a.is_some(), target = b.is_some(), "absent operand");
            Err(Difference::Whole(b.cloned().unwrap_or_default()))
        }
    }
}

fn sequence_entries(a: &[Node], b: &[Node], options: &DiffOptions<'_>) -> Entries {
    let mut entries = Entries::new();
    for (index, x) in a.iter().enumerate() {
        let key = index.to_string();
        // Past the end of `b` the target reads as `Undefined`.
        let y = b.get(index).unwrap_or(&UNDEFINED);
        if let Some(change) = diff_pair(x, y, &key, options) {
            entries.insert(options.emit_key(&key, Some(x), y), change);
        }
    }
    for (index, y) in b.iter().enumerate().skip(a.len()) {
        let key = index.to_string();
        let value = options.emit_value(y, &key, None);
        entries.insert(options.emit_key(&key, None, y), Change::Value(value));
    }
    entries
}

fn mapping_entries(a: &Mapping, b: &Mapping, options: &DiffOptions<'_>) -> Entries {
    let mut entries = Entries::new();
    for (key, x) in a {
        let Some(y) = b.get(key) else {
            continue;
        };
        if let Some(change) = diff_pair(x, y, key, options) {
            entries.insert(options.emit_key(key, Some(x), y), change);
        }
    }
    for (key, y) in b {
        if a.contains_key(key) {
            continue;
        }
        let value = options.emit_value(y, key, None);
        entries.insert(options.emit_key(key, None, y), Change::Value(value));
    }
    entries
}

/// Compares one aligned pair. `None` means "no entry".
fn diff_pair(a: &Node, b: &Node, key: &str, options: &DiffOptions<'_>) -> Option<Change> {
    if ptr::eq(a, b) {
        return None;
    }
    let nested = match (a, b) {
        (Node::Sequence(items_a), Node::Sequence(items_b)) => {
            sequence_entries(items_a, items_b, options)
        }
        (Node::Mapping(map_a), Node::Mapping(map_b)) => mapping_entries(map_a, map_b, options),
        (Node::Scalar(x), Node::Scalar(y)) if x == y => return None,
        _ => return Some(Change::Value(options.emit_value(b, key, Some(a)))),
    };
    if nested.is_empty() {
        None
    } else {
        Some(Change::Nested(nested))
    }
}
