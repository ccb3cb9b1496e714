/// Insert each element into the sorted prefix to its left, shifting strictly
/// greater elements one slot right.
///
/// O(n^2) worst case, O(n) on sorted input.
///
/// ```
/// use sorter_core::insertion_sort;
///
/// assert_eq!(insertion_sort(&[4, -2, 7, 0]), vec![-2, 0, 4, 7]);
/// ```
pub fn insertion_sort(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();

    for i in 1..sorted.len() {
        let current = sorted[i];
        let mut j = i;
        while j > 0 && current < sorted[j - 1] {
            sorted[j] = sorted[j - 1];
            j -= 1;
        }
        sorted[j] = current;
    }
    sorted
}
