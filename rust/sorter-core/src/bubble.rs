use crate::keyed::Keyed;

/// Repeatedly swap adjacent out-of-order pairs until a pass makes no swap.
///
/// Stable, O(n^2) worst case. Only strictly greater pairs are swapped, so
/// equal keys never cross.
///
/// ```
/// use sorter_core::bubble_sort;
///
/// assert_eq!(bubble_sort(&[5, 3, 3, 1]), vec![1, 3, 3, 5]);
/// ```
pub fn bubble_sort(values: &[i64]) -> Vec<i64> {
    bubble_sort_keyed(values)
}

pub(crate) fn bubble_sort_keyed<T: Keyed>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    if sorted.is_empty() {
        return sorted;
    }

    loop {
        let mut swapped = false;
        for i in 1..sorted.len() {
            if sorted[i - 1].key() > sorted[i].key() {
                sorted.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    sorted
}
