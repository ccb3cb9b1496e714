//! Counting sorts: rank-by-comparison and key histogram.
//!
//! Both variants are stable. The histogram placement routine is shared with
//! the radix sort digit pass.

use crate::error::SortError;
use crate::keyed::Keyed;

// ── Comparison counting ─────────────────────────────────────────────

/// Sort by counting, for each element, how many elements precede it.
///
/// Stable, O(n^2).
///
/// ```
/// use sorter_core::counting_sort_by_comparison;
///
/// assert_eq!(counting_sort_by_comparison(&[3, 1, 2, 1]), vec![1, 1, 2, 3]);
/// ```
pub fn counting_sort_by_comparison(values: &[i64]) -> Vec<i64> {
    rank_by_comparison(values)
}

pub(crate) fn rank_by_comparison<T: Keyed>(values: &[T]) -> Vec<T> {
    if values.is_empty() {
        return Vec::new();
    }

    let n = values.len();
    let mut ranks = vec![0usize; n];

    // Every unordered pair is visited once. On a tie the later index is
    // credited, so equal keys get distinct ranks in input order.
    for i in 0..n {
        for j in (i + 1)..n {
            if values[i].key() > values[j].key() {
                ranks[i] += 1;
            } else {
                ranks[j] += 1;
            }
        }
    }

    let mut sorted = values.to_vec();
    for (value, &rank) in values.iter().zip(&ranks) {
        sorted[rank] = *value;
    }
    sorted
}

// ── Histogram counting ──────────────────────────────────────────────

/// Sort keys in `[0, max_key]` with a histogram and prefix sums.
///
/// Stable, O(n + max_key). Returns [`SortError::NegativeKey`] or
/// [`SortError::InvalidBound`] for the first key outside the range.
///
/// ```
/// use sorter_core::counting_sort_by_histogram;
///
/// let sorted = counting_sort_by_histogram(&[2, 0, 1, 0], 2).unwrap();
/// assert_eq!(sorted, vec![0, 0, 1, 2]);
/// ```
pub fn counting_sort_by_histogram(values: &[i64], max_key: i64) -> Result<Vec<i64>, SortError> {
    histogram_sort(values, max_key)
}

pub(crate) fn histogram_sort<T: Keyed>(values: &[T], max_key: i64) -> Result<Vec<T>, SortError> {
    if values.is_empty() {
        return Ok(Vec::new());
    }

    check_bounds(values, max_key)?;

    // max_key >= 0 once a non-empty input passed the bounds check.
    let buckets = usize::try_from(max_key)
        .ok()
        .and_then(|k| k.checked_add(1))
        .ok_or(SortError::HistogramTooLarge { max_key })?;
    let counts = zeroed_histogram(buckets).ok_or(SortError::HistogramTooLarge { max_key })?;

    Ok(place_by_histogram(values, counts, |v| v.key() as usize))
}

fn check_bounds<T: Keyed>(values: &[T], max_key: i64) -> Result<(), SortError> {
    for (index, value) in values.iter().map(Keyed::key).enumerate() {
        if value < 0 {
            return Err(SortError::NegativeKey { index, value });
        }
        if value > max_key {
            return Err(SortError::InvalidBound {
                index,
                value,
                max_key,
            });
        }
    }
    Ok(())
}

/// Allocate a zeroed histogram without aborting on capacity overflow.
fn zeroed_histogram(buckets: usize) -> Option<Vec<usize>> {
    let mut counts = Vec::new();
    counts.try_reserve_exact(buckets).ok()?;
    counts.resize(buckets, 0);
    Some(counts)
}

/// Stable placement of `values` into `counts.len()` buckets.
///
/// `counts` must be zeroed and `bucket_of` must return an index below
/// `counts.len()` for every element.
pub(crate) fn place_by_histogram<T, F>(values: &[T], mut counts: Vec<usize>, bucket_of: F) -> Vec<T>
where
    T: Copy,
    F: Fn(&T) -> usize,
{
    for value in values {
        counts[bucket_of(value)] += 1;
    }

    // counts[k] becomes the number of elements in buckets <= k.
    for k in 1..counts.len() {
        counts[k] += counts[k - 1];
    }

    // Right-to-left so later duplicates take the later slots.
    let mut sorted = values.to_vec();
    for value in values.iter().rev() {
        let bucket = bucket_of(value);
        counts[bucket] -= 1;
        sorted[counts[bucket]] = *value;
    }
    sorted
}
