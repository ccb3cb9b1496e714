//! Selection sorts. Neither variant is stable.

/// For each position, swap in every later element that is smaller than the
/// current occupant. The occupant may change several times per pass.
///
/// O(n^2).
pub fn selection_sort_swap_on_find(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    let n = sorted.len();

    for i in 0..n {
        for j in (i + 1)..n {
            if sorted[i] > sorted[j] {
                sorted.swap(i, j);
            }
        }
    }
    sorted
}

/// For each position, find the minimum of the remainder and swap it in,
/// at most one swap per pass.
///
/// O(n^2).
pub fn selection_sort_find_minimum(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    let n = sorted.len();

    for i in 0..n {
        let mut min_index = i;
        for j in (i + 1)..n {
            if sorted[j] < sorted[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            sorted.swap(i, min_index);
        }
    }
    sorted
}
