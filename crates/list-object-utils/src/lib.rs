//! list-object-utils - structural helpers for nested JSON-like data.
//!
//! Trees are built from [`Node`]s: scalar leaves, ordered sequences and
//! string-keyed mappings. The crate provides:
//!
//! - deep equality ([`equal_sequences`], [`equal_mappings`], [`deep_equal`])
//! - directional deep difference ([`diff_sequences`], [`diff_mappings`] and
//!   their `_with` variants taking [`DiffOptions`])
//! - immutable list updates ([`swap`], [`remove`], [`push`], [`set`]) and
//!   [`is_unique_set`]
//! - [`flatten_paths`], [`sort_by_index`] and [`stringify`]
//!
//! Every function is pure: inputs are borrowed and never modified.
//!
//! # Example
//!
//! ```
//! use list_object_utils::{diff_mappings, equal_mappings, Node};
//! use serde_json::json;
//!
//! let a = Node::from(json!({"user": {"name": "ada", "tags": ["x"]}}));
//! let b = Node::from(json!({"user": {"name": "ada", "tags": ["x", "y"]}}));
//!
//! assert!(!equal_mappings(&a, &b));
//! assert_eq!(diff_mappings(&a, &b).to_string(), r#"{"user":{"tags":{"1":"y"}}}"#);
//! ```

pub mod diff;
pub mod equal;
pub mod error;
pub mod flatten;
pub mod fuzzer;
pub mod list;
pub mod node;
pub mod sort;
pub mod stringify;

// Re-exports for convenience
pub use diff::{
    diff_mappings, diff_mappings_with, diff_sequences, diff_sequences_with, Change, DiffOptions,
    Difference, Entries, KeyFn, ValueFn,
};
pub use equal::{deep_equal, equal_mappings, equal_sequences};
pub use error::ListError;
pub use flatten::flatten_paths;
pub use fuzzer::Fuzzer;
pub use list::{is_unique_set, push, remove, set, swap, ListIndex};
pub use node::{Mapping, Node, NodeKind, Scalar, Sequence};
pub use sort::sort_by_index;
pub use stringify::{stringify, stringify_pretty};
