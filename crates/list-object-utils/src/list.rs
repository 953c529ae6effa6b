//! Immutable single-element list updates and duplicate detection.
//!
//! Every helper copies the input slice into a new `Vec` and leaves the input
//! untouched. Index arguments accept anything implementing [`ListIndex`], so
//! indices that arrive as JSON numbers or floats are validated the same way
//! as native integers.

use serde_json::Number;
use tracing::debug;

use crate::error::ListError;
use crate::node::{Node, Scalar};

/// A value usable as a list position.
///
/// `as_integer` returns `None` when the value is not integral (a fraction,
/// NaN, infinity, or a non-numeric node). Range is checked separately.
pub trait ListIndex {
    fn as_integer(&self) -> Option<i128>;
}

macro_rules! impl_list_index {
    ($($t:ty),*) => {
        $(
            impl ListIndex for $t {
                fn as_integer(&self) -> Option<i128> {
                    Some(*self as i128)
                }
            }
        )*
    };
}

impl_list_index!(usize, isize, i32, i64, u32, u64);

impl ListIndex for f64 {
    fn as_integer(&self) -> Option<i128> {
        if self.is_finite() && self.fract() == 0.0 {
            Some(*self as i128)
        } else {
            None
        }
    }
}

impl ListIndex for &Number {
    fn as_integer(&self) -> Option<i128> {
        if let Some(n) = self.as_i64() {
            return Some(n as i128);
        }
        if let Some(n) = self.as_u64() {
            return Some(n as i128);
        }
        self.as_f64().and_then(|n| n.as_integer())
    }
}

impl ListIndex for &Node {
    fn as_integer(&self) -> Option<i128> {
        match self {
            Node::Scalar(Scalar::Number(n)) => n.as_integer(),
            _ => None,
        }
    }
}

fn integer<I: ListIndex>(name: &'static str, index: &I) -> Result<i128, ListError> {
    index.as_integer().ok_or_else(|| {
        debug!(name, "index is not an integer");
        ListError::InvalidArgument { name }
    })
}

fn in_bounds(name: &'static str, index: i128, len: usize) -> Result<usize, ListError> {
    if index < 0 || index >= len as i128 {
        debug!(name, index = %index, len, "index out of bounds");
        return Err(ListError::OutOfRange { name, index, len });
    }
    Ok(index as usize)
}

/// Returns a copy of `list` with the elements at `i` and `j` exchanged.
///
/// # Errors
///
/// `InvalidArgument` if either index is not an integer, `OutOfRange` if
/// either falls outside `0..list.len()`.
///
/// # Examples
///
/// ```
/// use list_object_utils::swap;
///
/// let list = vec![10, 20, 30];
/// assert_eq!(swap(&list, 0, 2).unwrap(), vec![30, 20, 10]);
/// assert_eq!(list, vec![10, 20, 30]);
/// ```
pub fn swap<T, I, J>(list: &[T], i: I, j: J) -> Result<Vec<T>, ListError>
where
    T: Clone,
    I: ListIndex,
    J: ListIndex,
{
    let i = integer("i", &i)?;
    let j = integer("j", &j)?;
    let i = in_bounds("i", i, list.len())?;
    let j = in_bounds("j", j, list.len())?;

    let mut out = list.to_vec();
    out.swap(i, j);
    Ok(out)
}

/// Returns a copy of `list` without the element at `i`. Later elements shift
/// down by one.
///
/// ```
/// use list_object_utils::remove;
///
/// assert_eq!(remove(&["a", "b", "c"], 1).unwrap(), vec!["a", "c"]);
/// assert!(remove(&["a"], 1).unwrap_err().is_out_of_range());
/// ```
pub fn remove<T, I>(list: &[T], i: I) -> Result<Vec<T>, ListError>
where
    T: Clone,
    I: ListIndex,
{
    let i = integer("i", &i)?;
    let i = in_bounds("i", i, list.len())?;

    let mut out = list.to_vec();
    out.remove(i);
    Ok(out)
}

/// Returns a copy of `list` with `item` appended.
pub fn push<T: Clone>(list: &[T], item: T) -> Vec<T> {
    let mut out = Vec::with_capacity(list.len() + 1);
    out.extend_from_slice(list);
    out.push(item);
    out
}

/// Returns a copy of `list` with the element at `i` replaced by `item`.
///
/// ```
/// use list_object_utils::set;
///
/// assert_eq!(set(&[1, 2, 3], 1, 9).unwrap(), vec![1, 9, 3]);
/// assert!(set(&[1, 2, 3], 1.5, 9).unwrap_err().is_invalid_argument());
/// ```
pub fn set<T, I>(list: &[T], i: I, item: T) -> Result<Vec<T>, ListError>
where
    T: Clone,
    I: ListIndex,
{
    let i = integer("i", &i)?;
    let i = in_bounds("i", i, list.len())?;

    let mut out = list.to_vec();
    out[i] = item;
    Ok(out)
}

/// Returns `true` if no two elements of `list` are equal.
///
/// Quadratic scan with a growing list of seen elements, so `T` only needs
/// `PartialEq`.
pub fn is_unique_set<T: PartialEq>(list: &[T]) -> bool {
    let mut seen: Vec<&T> = Vec::with_capacity(list.len());
    for item in list {
        if seen.contains(&item) {
            return false;
        }
        seen.push(item);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_swap() {
        let list = vec![10, 20, 30];
        assert_eq!(swap(&list, 0, 2).unwrap(), vec![30, 20, 10]);
        assert_eq!(list, vec![10, 20, 30]);
    }

    #[test]
    fn test_swap_same_index() {
        assert_eq!(swap(&[1, 2], 1, 1).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_swap_out_of_range() {
        let err = swap(&[1, 2], 0, 2).unwrap_err();
        assert_eq!(err, ListError::OutOfRange { name: "j", index: 2, len: 2 });

        let err = swap(&[1, 2], -1i64, 0).unwrap_err();
        assert_eq!(err, ListError::OutOfRange { name: "i", index: -1, len: 2 });
    }

    #[test]
    fn test_swap_checks_integers_before_bounds() {
        let err = swap(&[1, 2], 5, 0.5).unwrap_err();
        assert_eq!(err, ListError::InvalidArgument { name: "j" });
    }

    #[test]
    fn test_swap_float_indices() {
        assert_eq!(swap(&['a', 'b', 'c'], 0.0, 2.0).unwrap(), vec!['c', 'b', 'a']);
        assert!(swap(&['a'], f64::NAN, 0).unwrap_err().is_invalid_argument());
        assert!(swap(&['a'], f64::INFINITY, 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_remove() {
        assert_eq!(remove(&[1, 2, 3], 0).unwrap(), vec![2, 3]);
        assert_eq!(remove(&[1, 2, 3], 2).unwrap(), vec![1, 2]);
        assert!(remove::<i32, usize>(&[], 0).unwrap_err().is_out_of_range());
        assert!(remove(&[1], 0.25).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_push() {
        let list = vec![Node::from(1)];
        let pushed = push(&list, Node::from(json!({"a": 1})));
        assert_eq!(pushed, vec![Node::from(1), Node::from(json!({"a": 1}))]);
        assert_eq!(list.len(), 1);
        assert_eq!(push::<i32>(&[], 7), vec![7]);
    }

    #[test]
    fn test_set() {
        let list = vec!["a", "b"];
        assert_eq!(set(&list, 0, "z").unwrap(), vec!["z", "b"]);
        assert_eq!(list, vec!["a", "b"]);
        assert!(set(&list, 2, "z").unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_node_and_number_indices() {
        let list = vec![1, 2, 3];
        let index = Node::from(json!(2));
        assert_eq!(set(&list, &index, 0).unwrap(), vec![1, 2, 0]);

        let fraction = Node::from(json!(1.5));
        assert!(set(&list, &fraction, 0).unwrap_err().is_invalid_argument());

        let text = Node::from("1");
        assert!(remove(&list, &text).unwrap_err().is_invalid_argument());

        let whole_float = Number::from_f64(1.0).unwrap();
        assert_eq!(remove(&list, &whole_float).unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_is_unique_set() {
        assert!(is_unique_set::<i32>(&[]));
        assert!(is_unique_set(&[1, 2, 3]));
        assert!(!is_unique_set(&[1, 2, 1]));
        assert!(is_unique_set(&["a", "b"]));
    }

    #[test]
    fn test_is_unique_set_nodes() {
        let list = vec![Node::from(json!([1])), Node::from(json!({"a": 1})), Node::from(json!([1]))];
        assert!(!is_unique_set(&list));
        assert!(!is_unique_set(&[Node::from(1), Node::from(1.0)]));
        assert!(is_unique_set(&[Node::null(), Node::undefined()]));
    }
}
