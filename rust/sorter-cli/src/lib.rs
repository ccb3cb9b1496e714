//! Sorter CLI support library.
//!
//! Config loading, input parsing, and output rendering for the `sorter`
//! binary.

pub mod colors;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
