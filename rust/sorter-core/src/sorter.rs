//! Algorithm dispatch with per-algorithm options.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithm::{Algorithm, Stability};
use crate::error::SortError;
use crate::radix::decimal_digits;
use crate::{
    bubble_sort, counting_sort_by_comparison, counting_sort_by_histogram, insertion_sort,
    merge_sort, radix_sort, selection_sort_find_minimum, selection_sort_swap_on_find,
};

/// Options selecting an algorithm and its parameters.
///
/// `max_key` applies to the histogram sort and `num_digits` to radix sort;
/// when unset they are inferred from the input. `stable` selects the merge
/// variant used by merge sort and is ignored by the other algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOptions {
    pub algorithm: Algorithm,
    #[serde(default = "default_stable")]
    pub stable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_key: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_digits: Option<u32>,
}

fn default_stable() -> bool {
    true
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Merge,
            stable: true,
            max_key: None,
            num_digits: None,
        }
    }
}

/// A configured sort, reusable across inputs.
#[derive(Debug, Clone, Default)]
pub struct Sorter {
    options: SortOptions,
}

impl Sorter {
    pub fn new(options: SortOptions) -> Self {
        Self { options }
    }

    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self::new(SortOptions {
            algorithm,
            ..SortOptions::default()
        })
    }

    pub fn stable(mut self, stable: bool) -> Self {
        self.options.stable = stable;
        self
    }

    pub fn max_key(mut self, max_key: i64) -> Self {
        self.options.max_key = Some(max_key);
        self
    }

    pub fn num_digits(mut self, num_digits: u32) -> Self {
        self.options.num_digits = Some(num_digits);
        self
    }

    pub fn options(&self) -> &SortOptions {
        &self.options
    }

    pub fn algorithm(&self) -> Algorithm {
        self.options.algorithm
    }

    /// Whether equal keys keep their input order under this configuration.
    pub fn is_stable(&self) -> bool {
        match self.options.algorithm.stability() {
            Stability::Stable => true,
            Stability::Unstable => false,
            Stability::Selectable => self.options.stable,
        }
    }

    /// Sort `values` into a new vector with the configured algorithm.
    pub fn sort(&self, values: &[i64]) -> Result<Vec<i64>, SortError> {
        let algorithm = self.options.algorithm;
        debug!(%algorithm, len = values.len(), "sorting");

        let sorted = match algorithm {
            Algorithm::CountingComparison => counting_sort_by_comparison(values),
            Algorithm::CountingHistogram => {
                let max_key = match self.options.max_key {
                    Some(k) => k,
                    None => {
                        let inferred = values.iter().copied().max().unwrap_or(0);
                        debug!(max_key = inferred, "inferred histogram bound");
                        inferred
                    }
                };
                counting_sort_by_histogram(values, max_key)?
            }
            Algorithm::SelectionSwapOnFind => selection_sort_swap_on_find(values),
            Algorithm::SelectionFindMinimum => selection_sort_find_minimum(values),
            Algorithm::Insertion => insertion_sort(values),
            Algorithm::Bubble => bubble_sort(values),
            Algorithm::Radix => {
                let num_digits = match self.options.num_digits {
                    Some(d) => d,
                    None => {
                        let inferred = values.iter().copied().max().map_or(0, decimal_digits);
                        debug!(num_digits = inferred, "inferred radix digit count");
                        inferred
                    }
                };
                radix_sort(values, num_digits)?
            }
            Algorithm::Merge => merge_sort(values, self.options.stable),
        };
        Ok(sorted)
    }
}
