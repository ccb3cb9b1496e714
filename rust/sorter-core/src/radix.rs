//! LSD radix sort over decimal digits.
//!
//! Each pass is a stable histogram placement over ten buckets; correctness of
//! the whole sort depends on that stability.

use tracing::trace;

use crate::counting::place_by_histogram;
use crate::error::SortError;
use crate::keyed::Keyed;

const RADIX: usize = 10;

/// Decimal digits in `i64::MAX`. Digit positions past this are zero for
/// every non-negative `i64`, so passes over them cannot reorder anything.
pub const MAX_DECIMAL_DIGITS: u32 = 19;

/// Sort non-negative keys with `num_digits` stable digit passes, least
/// significant first.
///
/// O(num_digits * n). A `num_digits` of zero returns a copy of the input.
///
/// ```
/// use sorter_core::radix_sort;
///
/// let sorted = radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66], 3).unwrap();
/// assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn radix_sort(values: &[i64], num_digits: u32) -> Result<Vec<i64>, SortError> {
    radix_sort_keyed(values, num_digits)
}

pub(crate) fn radix_sort_keyed<T: Keyed>(values: &[T], num_digits: u32) -> Result<Vec<T>, SortError> {
    if values.is_empty() {
        return Ok(Vec::new());
    }

    check_non_negative(values)?;
    if num_digits == 0 {
        return Ok(values.to_vec());
    }

    for (index, value) in values.iter().map(Keyed::key).enumerate() {
        if decimal_digits(value) > num_digits {
            return Err(SortError::InvalidDigitCount {
                index,
                value,
                num_digits,
            });
        }
    }

    let mut sorted = values.to_vec();
    for digit in 0..num_digits.min(MAX_DECIMAL_DIGITS) {
        trace!(digit, len = sorted.len(), "radix digit pass");
        sorted = digit_pass(&sorted, digit);
    }
    Ok(sorted)
}

/// One stable pass keyed on the decimal digit at position `digit`
/// (0 = ones), i.e. `(value / 10^digit) % 10`.
///
/// ```
/// use sorter_core::counting_sort_by_digit;
///
/// // Ones digits are 1, 3, 1: the two ones keep their input order.
/// let pass = counting_sort_by_digit(&[21, 13, 11], 0).unwrap();
/// assert_eq!(pass, vec![21, 11, 13]);
/// ```
pub fn counting_sort_by_digit(values: &[i64], digit: u32) -> Result<Vec<i64>, SortError> {
    check_non_negative(values)?;
    Ok(digit_pass(values, digit))
}

fn digit_pass<T: Keyed>(values: &[T], digit: u32) -> Vec<T> {
    if values.is_empty() {
        return Vec::new();
    }
    place_by_histogram(values, vec![0; RADIX], |v| digit_of(v.key(), digit))
}

/// Digit of a non-negative `value` at decimal position `digit`.
pub(crate) fn digit_of(value: i64, digit: u32) -> usize {
    match 10i64.checked_pow(digit) {
        Some(place) => ((value / place) % RADIX as i64) as usize,
        None => 0,
    }
}

/// Decimal digits needed to write a non-negative `value`; zero needs one.
pub fn decimal_digits(value: i64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

fn check_non_negative<T: Keyed>(values: &[T]) -> Result<(), SortError> {
    match values.iter().map(Keyed::key).enumerate().find(|&(_, v)| v < 0) {
        Some((index, value)) => Err(SortError::NegativeKey { index, value }),
        None => Ok(()),
    }
}
