//! Catalogue of the available algorithms and their properties.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Whether an algorithm keeps equal keys in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Stability {
    Stable,
    Unstable,
    /// Chosen per call (merge sort's merge variant).
    Selectable,
}

/// One of the sorting algorithms in this crate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Algorithm {
    CountingComparison,
    CountingHistogram,
    SelectionSwapOnFind,
    SelectionFindMinimum,
    Insertion,
    Bubble,
    Radix,
    Merge,
}

impl Algorithm {
    pub fn stability(self) -> Stability {
        match self {
            Algorithm::CountingComparison
            | Algorithm::CountingHistogram
            | Algorithm::Bubble
            | Algorithm::Radix => Stability::Stable,
            Algorithm::SelectionSwapOnFind
            | Algorithm::SelectionFindMinimum
            | Algorithm::Insertion => Stability::Unstable,
            Algorithm::Merge => Stability::Selectable,
        }
    }

    /// Asymptotic running time; `k` is the key bound, `d` the digit count.
    pub fn running_time(self) -> &'static str {
        match self {
            Algorithm::CountingComparison
            | Algorithm::SelectionSwapOnFind
            | Algorithm::SelectionFindMinimum
            | Algorithm::Insertion
            | Algorithm::Bubble => "O(n^2)",
            Algorithm::CountingHistogram => "O(n + k)",
            Algorithm::Radix => "O(d * n)",
            Algorithm::Merge => "O(n log n)",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Algorithm::CountingComparison => "rank each key by counting the keys before it",
            Algorithm::CountingHistogram => "histogram of keys in [0, k] with prefix sums",
            Algorithm::SelectionSwapOnFind => "swap each smaller key into place as it is found",
            Algorithm::SelectionFindMinimum => "find the minimum of the remainder, swap once",
            Algorithm::Insertion => "shift each key left into the sorted prefix",
            Algorithm::Bubble => "swap adjacent pairs until a pass makes no swap",
            Algorithm::Radix => "stable decimal digit passes, least significant first",
            Algorithm::Merge => "recursive halving with a stable or unstable merge",
        }
    }

    /// Whether the algorithm needs caller-supplied or inferred key bounds.
    pub fn is_bounded(self) -> bool {
        matches!(self, Algorithm::CountingHistogram | Algorithm::Radix)
    }
}
