//! Sorter Core
//!
//! Classical sorting algorithms over `i64` sequences: two counting sorts,
//! two selection sorts, insertion sort, bubble sort, LSD radix sort and
//! merge sort with a stable or unstable merge.
//!
//! Every function borrows its input and returns a newly allocated sorted
//! vector. The sorts that place keys by value ([`counting_sort_by_histogram`],
//! [`radix_sort`]) validate their key range and return [`SortError`]; the
//! comparison sorts are total.
//!
//! ```
//! use sorter_core::{Algorithm, Sorter};
//!
//! let sorted = Sorter::with_algorithm(Algorithm::Radix)
//!     .sort(&[170, 45, 75, 90, 802, 24, 2, 66])
//!     .unwrap();
//! assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
//! ```

pub mod algorithm;
pub mod bubble;
pub mod check;
pub mod counting;
pub mod error;
pub mod insertion;
mod keyed;
pub mod merge;
pub mod radix;
pub mod selection;
pub mod sorter;

pub use algorithm::{Algorithm, Stability};
pub use bubble::bubble_sort;
pub use counting::{counting_sort_by_comparison, counting_sort_by_histogram};
pub use error::SortError;
pub use insertion::insertion_sort;
pub use merge::{merge_sort, merge_stable, merge_unstable};
pub use radix::{counting_sort_by_digit, radix_sort};
pub use selection::{selection_sort_find_minimum, selection_sort_swap_on_find};
pub use sorter::{SortOptions, Sorter};
