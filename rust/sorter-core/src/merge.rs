//! Top-down merge sort with a choice of tie-breaking merge.
//!
//! `merge_stable` takes the left head on ties and keeps equal keys in input
//! order; `merge_unstable` takes the right head on ties. Merge sort is stable
//! exactly when it merges with `merge_stable`.

use crate::keyed::Keyed;

/// Merge two sorted sequences, taking the right head when heads are equal.
///
/// Both inputs must already be sorted; this is checked in debug builds only.
pub fn merge_unstable(left: &[i64], right: &[i64]) -> Vec<i64> {
    merge_keyed(left, right, false)
}

/// Merge two sorted sequences, taking the left head when heads are equal.
///
/// Both inputs must already be sorted; this is checked in debug builds only.
///
/// ```
/// use sorter_core::merge_stable;
///
/// assert_eq!(merge_stable(&[1, 4, 9], &[2, 4]), vec![1, 2, 4, 4, 9]);
/// ```
pub fn merge_stable(left: &[i64], right: &[i64]) -> Vec<i64> {
    merge_keyed(left, right, true)
}

/// Sort by recursive halving, merging with the stable merge when `stable`
/// is set and the unstable merge otherwise. O(n log n).
///
/// ```
/// use sorter_core::merge_sort;
///
/// assert_eq!(merge_sort(&[5, 2, 9, 1, 5, 6], true), vec![1, 2, 5, 5, 6, 9]);
/// ```
pub fn merge_sort(values: &[i64], stable: bool) -> Vec<i64> {
    merge_sort_keyed(values, stable)
}

pub(crate) fn merge_sort_keyed<T: Keyed>(values: &[T], stable: bool) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let (left, right) = values.split_at(values.len() / 2);
    let left = merge_sort_keyed(left, stable);
    let right = merge_sort_keyed(right, stable);

    merge_keyed(&left, &right, stable)
}

/// Merge two sorted runs. On equal heads the left one goes first when
/// `stable`, the right one otherwise.
pub(crate) fn merge_keyed<T: Keyed>(left: &[T], right: &[T], stable: bool) -> Vec<T> {
    debug_assert!(is_sorted_by_key(left), "left run is not sorted");
    debug_assert!(is_sorted_by_key(right), "right run is not sorted");

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        let (l, r) = (left[i].key(), right[j].key());
        if l < r || (stable && l == r) {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

fn is_sorted_by_key<T: Keyed>(run: &[T]) -> bool {
    run.windows(2).all(|w| w[0].key() <= w[1].key())
}
