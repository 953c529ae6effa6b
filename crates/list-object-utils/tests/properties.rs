use list_object_utils::{
    deep_equal, diff_mappings, diff_sequences, equal_mappings, equal_sequences, Fuzzer, Node,
};
use proptest::prelude::*;

fn arb_scalar() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::null()),
        any::<bool>().prop_map(Node::from),
        (-20i64..20).prop_map(Node::from),
        "[a-c]{0,3}".prop_map(Node::from),
    ]
}

fn arb_node() -> impl Strategy<Value = Node> {
    arb_scalar().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Node::Sequence),
            prop::collection::vec(("[a-d]{1,2}", inner), 0..5)
                .prop_map(|entries| Node::Mapping(entries.into_iter().collect())),
        ]
    })
}

fn arb_sequence() -> impl Strategy<Value = Node> {
    prop::collection::vec(arb_node(), 0..6).prop_map(Node::Sequence)
}

fn arb_mapping() -> impl Strategy<Value = Node> {
    prop::collection::vec(("[a-d]{1,2}", arb_node()), 0..6)
        .prop_map(|entries| Node::Mapping(entries.into_iter().collect()))
}

/// A baseline and a target derived from it by edits that never remove
/// anything. Zero edits leaves the pair equal.
fn arb_extended(base: impl Strategy<Value = Node>) -> impl Strategy<Value = (Node, Node)> {
    (base, any::<[u8; 32]>(), 0usize..4).prop_map(|(a, seed, edits)| {
        let mut fuzzer = Fuzzer::new(Some(seed));
        let mut b = a.clone();
        for _ in 0..edits {
            b = fuzzer.mutate(&b);
        }
        (a, b)
    })
}

/// True when every key of `a` still exists in `b` at every depth where both
/// hold containers of the same kind. Sequences may shrink: a missing index is
/// reported by the diff rather than hidden.
fn nothing_removed(a: &Node, b: &Node) -> bool {
    match (a, b) {
        (Node::Sequence(xs), Node::Sequence(ys)) => {
            xs.iter().zip(ys).all(|(x, y)| nothing_removed(x, y))
        }
        (Node::Mapping(xs), Node::Mapping(ys)) => xs
            .iter()
            .all(|(key, x)| ys.get(key).is_some_and(|y| nothing_removed(x, y))),
        _ => true,
    }
}

proptest! {
    #[test]
    fn equality_is_reflexive(tree in arb_node()) {
        let copy = tree.clone();
        prop_assert!(deep_equal(&tree, &copy));
        prop_assert!(deep_equal(&tree, &tree));
    }

    #[test]
    fn sequence_equality_is_reflexive(seq in arb_sequence()) {
        prop_assert!(equal_sequences(&seq, &seq.clone()));
    }

    #[test]
    fn mapping_equality_is_reflexive(map in arb_mapping()) {
        prop_assert!(equal_mappings(&map, &map.clone()));
    }

    #[test]
    fn equality_is_symmetric(a in arb_node(), b in arb_node()) {
        prop_assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
    }

    #[test]
    fn sequence_equality_is_symmetric(a in arb_sequence(), b in arb_sequence()) {
        prop_assert_eq!(equal_sequences(&a, &b), equal_sequences(&b, &a));
    }

    #[test]
    fn mapping_equality_is_symmetric(a in arb_mapping(), b in arb_mapping()) {
        prop_assert_eq!(equal_mappings(&a, &b), equal_mappings(&b, &a));
    }

    #[test]
    fn kinds_never_cross(seq in arb_sequence(), map in arb_mapping()) {
        prop_assert!(!equal_sequences(&seq, &map));
        prop_assert!(!equal_mappings(&map, &seq));
    }

    #[test]
    fn self_diff_is_empty(seq in arb_sequence(), map in arb_mapping()) {
        prop_assert!(diff_sequences(&seq, &seq.clone()).is_empty());
        prop_assert!(diff_mappings(&map, &map.clone()).is_empty());
    }

    #[test]
    fn sequence_diff_empty_iff_equal((a, b) in arb_extended(arb_sequence())) {
        prop_assert!(nothing_removed(&a, &b));
        prop_assert_eq!(diff_sequences(&a, &b).is_empty(), equal_sequences(&a, &b));
    }

    #[test]
    fn mapping_diff_empty_iff_equal((a, b) in arb_extended(arb_mapping())) {
        prop_assert!(nothing_removed(&a, &b));
        prop_assert_eq!(diff_mappings(&a, &b).is_empty(), equal_mappings(&a, &b));
    }

    #[test]
    fn truncated_sequence_diff_is_never_empty(seq in arb_sequence(), keep in 0usize..6) {
        if let Node::Sequence(items) = &seq {
            if keep < items.len() {
                let shorter = Node::Sequence(items[..keep].to_vec());
                prop_assert!(!diff_sequences(&seq, &shorter).is_empty());
            }
        }
    }

    #[test]
    fn unrelated_equal_pairs_have_empty_diff(a in arb_mapping(), b in arb_mapping()) {
        if equal_mappings(&a, &b) {
            prop_assert!(diff_mappings(&a, &b).is_empty());
        }
    }

    #[test]
    fn mapping_diff_replays_onto_baseline((a, b) in arb_extended(arb_mapping())) {
        prop_assert_eq!(diff_mappings(&a, &b).apply(&a), b);
    }

    #[test]
    fn sequence_diff_replays_onto_baseline((a, b) in arb_extended(arb_sequence())) {
        prop_assert_eq!(diff_sequences(&a, &b).apply(&a), b);
    }
}
