//! Member-ordering primitive.

use std::cmp::Ordering;

/// Insertion sort with a caller-supplied comparator.
///
/// Stable, in place, and fast for the small slices object member lists
/// usually are. A comparator that is not a strict total order degrades
/// the ordering, never panics.
///
/// # Examples
///
/// ```
/// use json_stable::sort::insertion_sort_by;
///
/// let mut keys = vec!["c", "a", "b"];
/// insertion_sort_by(&mut keys, |a, b| a.cmp(b));
/// assert_eq!(keys, vec!["a", "b", "c"]);
/// ```
pub fn insertion_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && compare(&arr[j - 1], &arr[j]) == Ordering::Greater {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}
