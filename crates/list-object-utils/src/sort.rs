//! Index-driven stable sorting.

use std::cmp::Ordering;

/// Returns a copy of `list` reordered by comparing index positions.
///
/// `compare` receives two indices into `list`, not the values; close over the
/// list to compare values. When `descending` is set the comparator's result
/// is reversed. The sort is stable: indices that compare equal keep their
/// original relative order in both directions.
///
/// # Examples
///
/// ```
/// use list_object_utils::sort_by_index;
///
/// let list = vec![3, 1, 2];
/// assert_eq!(sort_by_index(&list, |i, j| list[i].cmp(&list[j]), false), vec![1, 2, 3]);
/// assert_eq!(sort_by_index(&list, |i, j| list[i].cmp(&list[j]), true), vec![3, 2, 1]);
///
/// // A comparator that never orders anything returns a plain copy.
/// assert_eq!(sort_by_index(&list, |_, _| std::cmp::Ordering::Equal, false), list);
/// ```
pub fn sort_by_index<T, F>(list: &[T], mut compare: F, descending: bool) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..list.len()).collect();
    // Ties keep their input order in both directions.
    order.sort_by(|&a, &b| {
        let ord = compare(a, b);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    order.into_iter().map(|i| list[i].clone()).collect()
}
