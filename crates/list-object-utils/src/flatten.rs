use crate::node::{Mapping, Node};

/// Flattens a tree into a single-level mapping of dotted paths to leaves.
///
/// Path segments are mapping keys and decimal sequence indices joined with
/// `.`. The `prefix` is prepended verbatim to every path, so pass `"root."`
/// rather than `"root"` if a separator is wanted. An empty container is kept
/// as a leaf under its own path. A scalar input has no paths and yields an
/// empty mapping.
///
/// # Examples
///
/// ```
/// use list_object_utils::{flatten_paths, Node};
/// use serde_json::json;
///
/// let flat = flatten_paths(&Node::from(json!({"a": {"b": {"c": 1}}})), "");
/// assert_eq!(Node::from(flat), Node::from(json!({"a.b.c": 1})));
///
/// let flat = flatten_paths(&Node::from(json!({"a": {}})), "");
/// assert_eq!(Node::from(flat), Node::from(json!({"a": {}})));
/// ```
pub fn flatten_paths(node: &Node, prefix: &str) -> Mapping {
    let mut out = Mapping::new();
    match node {
        Node::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_entry(&mut out, prefix, &index.to_string(), item);
            }
        }
        Node::Mapping(map) => {
            for (key, value) in map {
                flatten_entry(&mut out, prefix, key, value);
            }
        }
        Node::Scalar(_) => {}
    }
    out
}

fn flatten_entry(out: &mut Mapping, prefix: &str, key: &str, value: &Node) {
    let path = format!("{prefix}{key}");
    if value.is_scalar() {
        out.insert(path, value.clone());
        return;
    }
    let flat = flatten_paths(value, &format!("{path}."));
    if flat.is_empty() {
        out.insert(path, value.clone());
    } else {
        out.extend(flat);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flatten(value: serde_json::Value) -> Node {
        Node::from(flatten_paths(&Node::from(value), ""))
    }

    #[test]
    fn test_nested_mappings() {
        assert_eq!(flatten(json!({"a": {"b": {"c": 1}}})), Node::from(json!({"a.b.c": 1})));
    }

    #[test]
    fn test_sequence_indices_are_segments() {
        assert_eq!(
            flatten(json!({"a": {"b": [10, {"c": true}]}})),
            Node::from(json!({"a.b.0": 10, "a.b.1.c": true}))
        );
    }

    #[test]
    fn test_top_level_sequence() {
        assert_eq!(flatten(json!(["x", ["y"]])), Node::from(json!({"0": "x", "1.0": "y"})));
    }

    #[test]
    fn test_empty_containers_kept() {
        assert_eq!(flatten(json!({"a": {}})), Node::from(json!({"a": {}})));
        assert_eq!(flatten(json!({"a": [], "b": {"c": {}}})), Node::from(json!({"a": [], "b.c": {}})));
    }

    #[test]
    fn test_null_is_a_leaf() {
        assert_eq!(flatten(json!({"a": null, "b": [null]})), Node::from(json!({"a": null, "b.0": null})));
    }

    #[test]
    fn test_scalar_and_empty_inputs() {
        assert!(flatten_paths(&Node::from(5), "").is_empty());
        assert!(flatten_paths(&Node::from(json!({})), "").is_empty());
        assert!(flatten_paths(&Node::from(json!([])), "").is_empty());
    }

    #[test]
    fn test_prefix_is_verbatim() {
        let node = Node::from(json!({"a": 1, "b": {"c": 2}}));
        assert_eq!(
            Node::from(flatten_paths(&node, "root.")),
            Node::from(json!({"root.a": 1, "root.b.c": 2}))
        );
        assert_eq!(Node::from(flatten_paths(&node, "x")), Node::from(json!({"xa": 1, "xb.c": 2})));
    }

    #[test]
    fn test_paths_follow_key_order() {
        let flat = flatten_paths(&Node::from(json!({"z": 1, "a": {"y": 2, "b": 3}})), "");
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a.y", "a.b"]);
    }
}
