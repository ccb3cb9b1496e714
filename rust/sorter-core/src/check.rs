//! Output verification helpers.

use std::collections::HashMap;

/// True when every element is less than or equal to its successor.
pub fn is_non_decreasing(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// True when `output` holds exactly the same multiset of values as `input`.
pub fn is_permutation(output: &[i64], input: &[i64]) -> bool {
    if output.len() != input.len() {
        return false;
    }

    let mut counts: HashMap<i64, isize> = HashMap::new();
    for &v in input {
        *counts.entry(v).or_insert(0) += 1;
    }
    for &v in output {
        match counts.get_mut(&v) {
            Some(c) if *c > 0 => *c -= 1,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_decreasing_accepts_duplicates() {
        assert!(is_non_decreasing(&[]));
        assert!(is_non_decreasing(&[7]));
        assert!(is_non_decreasing(&[1, 1, 2, 2]));
        assert!(!is_non_decreasing(&[2, 1]));
    }

    #[test]
    fn permutation_compares_multisets() {
        assert!(is_permutation(&[1, 2, 2, 3], &[2, 3, 1, 2]));
        assert!(!is_permutation(&[1, 2, 3, 3], &[2, 3, 1, 2]));
        assert!(!is_permutation(&[1, 2], &[1, 2, 2]));
        assert!(is_permutation(&[], &[]));
    }
}
