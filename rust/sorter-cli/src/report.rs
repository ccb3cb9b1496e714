//! Rendering sort results and the algorithm table.

use serde::Serialize;
use sorter_core::check::{is_non_decreasing, is_permutation};
use sorter_core::{Algorithm, Sorter};
use strum::IntoEnumIterator;

use crate::colors::{bold, stability};
use crate::config::OutputFormat;
use crate::error::CliError;

/// JSON shape of a `sorter sort --format json` result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SortReport {
    pub algorithm: Algorithm,
    pub stable: bool,
    pub running_time: &'static str,
    pub input_len: usize,
    pub values: Vec<i64>,
}

impl SortReport {
    pub fn new(sorter: &Sorter, input_len: usize, values: Vec<i64>) -> Self {
        let algorithm = sorter.algorithm();
        Self {
            algorithm,
            stable: sorter.is_stable(),
            running_time: algorithm.running_time(),
            input_len,
            values,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Text => Ok(self
                .values
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" ")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Check that `output` is a sorted permutation of `input`.
pub fn verify(output: &[i64], input: &[i64]) -> Result<(), CliError> {
    if !is_non_decreasing(output) {
        return Err(CliError::Verify("output is not sorted".to_string()));
    }
    if !is_permutation(output, input) {
        return Err(CliError::Verify(
            "output is not a permutation of the input".to_string(),
        ));
    }
    Ok(())
}

/// One line per algorithm: name, stability, running time, summary.
pub fn algorithm_table() -> String {
    let mut out = format!(
        "{}\n",
        bold(&format!(
            "{:<24} {:<11} {:<11} {}",
            "ALGORITHM", "STABILITY", "TIME", "SUMMARY"
        ))
    );
    for algorithm in Algorithm::iter() {
        let label = algorithm.stability().to_string();
        // Escape codes would count toward the width, so pad by hand.
        let padding = " ".repeat(11usize.saturating_sub(label.len()));
        out.push_str(&format!(
            "{:<24} {}{} {:<11} {}\n",
            algorithm.as_ref(),
            stability(&label),
            padding,
            algorithm.running_time(),
            algorithm.summary()
        ));
    }
    out
}
