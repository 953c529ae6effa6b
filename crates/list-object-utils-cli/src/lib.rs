//! Command-line tools for list-object-utils.
//!
//! Provides the core logic used by the binary entry points:
//! - `json-equal`:   deep equality of two documents
//! - `json-diff`:    difference from a baseline document to a target
//! - `json-flatten`: dotted-path flattening of a document
//! - `json-list`:    immutable list edits on a JSON array
//!
//! Every function takes JSON text and returns the text to print, so the
//! binaries only deal with arguments, stdin and exit codes.

use std::cmp::Ordering;
use std::io::{self, Read};

use list_object_utils::{
    deep_equal, diff_mappings, diff_sequences, flatten_paths, is_unique_set, push, remove, set,
    sort_by_index, stringify, swap, ListError, Node,
};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    List(#[from] ListError),
    #[error("Expected a JSON array, got a {0}")]
    NotASequence(list_object_utils::NodeKind),
    #[error("{0}")]
    Usage(String),
}

// ── Shared plumbing ───────────────────────────────────────────────────────

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Another subscriber may already be installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Reads all of stdin.
pub fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Parses JSON text into a node.
pub fn parse(json: &str) -> Result<Node, CliError> {
    Ok(json.trim().parse::<Node>()?)
}

// ── json-equal ────────────────────────────────────────────────────────────

/// Deep equality of two JSON documents.
pub fn equal(a: &str, b: &str) -> Result<bool, CliError> {
    let (a, b) = (parse(a)?, parse(b)?);
    Ok(deep_equal(&a, &b))
}

// ── json-diff ─────────────────────────────────────────────────────────────

/// Difference from `baseline` to `target`, stringified.
///
/// An array baseline is diffed as a sequence, anything else as a mapping.
pub fn diff(baseline: &str, target: &str) -> Result<String, CliError> {
    let (a, b) = (parse(baseline)?, parse(target)?);
    let difference = if a.is_sequence() {
        diff_sequences(&a, &b)
    } else {
        diff_mappings(&a, &b)
    };
    debug!(entries = difference.len(), "computed difference");
    Ok(stringify(&difference.into_node()))
}

// ── json-flatten ──────────────────────────────────────────────────────────

/// Flattens a JSON document into dotted paths, stringified.
pub fn flatten(json: &str, prefix: &str) -> Result<String, CliError> {
    let node = parse(json)?;
    Ok(stringify(&Node::from(flatten_paths(&node, prefix))))
}

// ── json-list ─────────────────────────────────────────────────────────────

/// One `json-list` operation. Index arguments stay as parsed JSON so that
/// non-integral input is reported as such.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOp {
    Swap(Node, Node),
    Remove(Node),
    Push(Node),
    Set(Node, Node),
    Unique,
    Sort { descending: bool },
}

impl ListOp {
    /// Parses `<op> [args...]`. Arguments are JSON text.
    ///
    /// ```
    /// use list_object_utils_cli::ListOp;
    /// use list_object_utils::Node;
    ///
    /// let args = vec!["swap".to_string(), "0".to_string(), "2".to_string()];
    /// assert_eq!(ListOp::parse(&args).unwrap(), ListOp::Swap(Node::from(0), Node::from(2)));
    /// ```
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let arg = |i: usize| -> Result<Node, CliError> {
            let text = args
                .get(i)
                .ok_or_else(|| CliError::Usage(format!("Missing argument {i} for `{}`.", args[0])))?;
            parse(text)
        };
        let op = args
            .first()
            .ok_or_else(|| CliError::Usage(USAGE.to_string()))?;
        let op = match op.as_str() {
            "swap" => ListOp::Swap(arg(1)?, arg(2)?),
            "remove" => ListOp::Remove(arg(1)?),
            "push" => ListOp::Push(arg(1)?),
            "set" => ListOp::Set(arg(1)?, arg(2)?),
            "unique" => ListOp::Unique,
            "sort" => ListOp::Sort { descending: false },
            "sort-desc" => ListOp::Sort { descending: true },
            other => return Err(CliError::Usage(format!("Unknown operation `{other}`.\n{USAGE}"))),
        };
        Ok(op)
    }
}

pub const USAGE: &str =
    "Usage: json-list <swap i j | remove i | push item | set i item | unique | sort | sort-desc>";

/// Applies `op` to the JSON array `json`, returning the stringified result.
pub fn list(json: &str, op: &ListOp) -> Result<String, CliError> {
    let node = parse(json)?;
    let items = node
        .as_sequence()
        .ok_or_else(|| CliError::NotASequence(node.kind()))?;
    let out = match op {
        ListOp::Swap(i, j) => swap(items, i, j)?,
        ListOp::Remove(i) => remove(items, i)?,
        ListOp::Push(item) => push(items, item.clone()),
        ListOp::Set(i, item) => set(items, i, item.clone())?,
        ListOp::Unique => return Ok(is_unique_set(items).to_string()),
        ListOp::Sort { descending } => {
            sort_by_index(items, |i, j| numeric_order(&items[i], &items[j]), *descending)
        }
    };
    Ok(stringify(&Node::Sequence(out)))
}

/// Orders numbers by value; anything involving a non-number is a tie.
fn numeric_order(a: &Node, b: &Node) -> Ordering {
    let number = |n: &Node| n.to_value().as_f64();
    match (number(a), number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}
