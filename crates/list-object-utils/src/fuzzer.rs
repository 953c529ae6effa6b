use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::node::{Mapping, Node};

const KEY_CHARS: &str = "abcdefgh";
const STRING_CHARS: &str = "abcxyz 01";

/// A seeded generator of random trees.
///
/// Uses the xoshiro256** PRNG so a run can be reproduced from its
/// [`seed`](Fuzzer::seed). Generated trees are JSON-like: they never contain
/// `Undefined` leaves.
///
/// # Examples
///
/// ```
/// use list_object_utils::{deep_equal, Fuzzer};
///
/// let mut fuzzer = Fuzzer::new(Some([7u8; 32]));
/// let tree = fuzzer.random_mapping(3);
/// let changed = fuzzer.mutate(&tree);
/// assert!(changed.len() >= tree.len());
///
/// let mut replay = Fuzzer::new(Some([7u8; 32]));
/// assert!(deep_equal(&replay.random_mapping(3), &tree));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Creates a fuzzer, drawing a seed from `OsRng` when none is given.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        &elements[self.rng.gen_range(0..elements.len())]
    }

    pub fn random_string(&mut self, len: usize, chars: &str) -> String {
        let chars: Vec<char> = chars.chars().collect();
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect()
    }

    /// A random non-`Undefined` scalar.
    pub fn random_scalar(&mut self) -> Node {
        match self.rng.gen_range(0..5) {
            0 => Node::null(),
            1 => Node::from(self.rng.gen_bool(0.5)),
            2 => Node::from(self.random_int(-50, 50)),
            3 => Node::from(f64::from(self.random_int(-100, 100) as i32) / 4.0),
            _ => {
                let len = self.rng.gen_range(0..6);
                Node::from(self.random_string(len, STRING_CHARS))
            }
        }
    }

    /// A random tree at most `depth` containers deep. At depth zero a scalar
    /// is returned.
    pub fn random_node(&mut self, depth: usize) -> Node {
        if depth == 0 || self.rng.gen_bool(0.3) {
            return self.random_scalar();
        }
        if self.rng.gen_bool(0.5) {
            self.random_sequence(depth)
        } else {
            self.random_mapping(depth)
        }
    }

    /// A random sequence whose children are at most `depth - 1` deep.
    pub fn random_sequence(&mut self, depth: usize) -> Node {
        let len = self.rng.gen_range(0..5);
        let child_depth = depth.saturating_sub(1);
        Node::Sequence((0..len).map(|_| self.random_node(child_depth)).collect())
    }

    /// A random mapping whose children are at most `depth - 1` deep.
    pub fn random_mapping(&mut self, depth: usize) -> Node {
        let len = self.rng.gen_range(0..5);
        let child_depth = depth.saturating_sub(1);
        let mut map = Mapping::new();
        for _ in 0..len {
            let key = self.random_key();
            let value = self.random_node(child_depth);
            map.insert(key, value);
        }
        Node::Mapping(map)
    }

    fn random_key(&mut self) -> String {
        let len = self.rng.gen_range(1..3);
        self.random_string(len, KEY_CHARS)
    }

    /// Returns a copy of `node` with one random edit that never removes
    /// anything: a leaf is replaced, or a container gains a new child.
    ///
    /// The edit may happen to reproduce the old value, so the result is not
    /// guaranteed to differ.
    pub fn mutate(&mut self, node: &Node) -> Node {
        match node {
            Node::Scalar(_) => self.random_node(1),
            Node::Sequence(items) => {
                let mut items = items.clone();
                if items.is_empty() || self.rng.gen_bool(0.3) {
                    items.push(self.random_node(2));
                } else {
                    let index = self.rng.gen_range(0..items.len());
                    items[index] = self.mutate(&items[index]);
                }
                Node::Sequence(items)
            }
            Node::Mapping(map) => {
                let mut map = map.clone();
                if map.is_empty() || self.rng.gen_bool(0.3) {
                    let key = self.random_key();
                    // A key that already exists is edited, never replaced.
                    match map.get_mut(&key) {
                        Some(slot) => *slot = self.mutate(slot),
                        None => {
                            let value = self.random_node(2);
                            map.insert(key, value);
                        }
                    }
                } else {
                    let index = self.rng.gen_range(0..map.len());
                    if let Some((_, slot)) = map.get_index_mut(index) {
                        *slot = self.mutate(slot);
                    }
                }
                Node::Mapping(map)
            }
        }
    }
}
