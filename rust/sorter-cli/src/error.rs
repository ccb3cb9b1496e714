//! CLI error type and cause-chain rendering.

use sorter_core::SortError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in '{}'", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{path} already exists, not overwriting")]
    AlreadyExists { path: String },
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("invalid value '{token}' at position {position}")]
    Parse {
        token: String,
        position: usize,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("sort failed")]
    Sort(#[from] SortError),
    #[error("verification failed: {0}")]
    Verify(String),
    #[error("cannot encode output")]
    Json(#[from] serde_json::Error),
}

/// Render `err` and each of its sources for display.
///
/// ```text
/// <primary message>
///   caused by: <cause 1>
///   caused by: <cause 2>
/// ```
pub fn format_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_errors_render_with_cause() {
        let err = CliError::from(SortError::NegativeKey { index: 3, value: -8 });
        assert_eq!(
            format_chain(&err),
            "sort failed\n  caused by: negative key -8 at index 3"
        );
    }

    #[test]
    fn parse_errors_include_token_and_position() {
        let source = "x1".parse::<i64>().unwrap_err();
        let err = CliError::Parse {
            token: "x1".to_string(),
            position: 2,
            source,
        };
        let rendered = format_chain(&err);
        assert!(rendered.starts_with("invalid value 'x1' at position 2"));
        assert!(rendered.contains("caused by: invalid digit"));
    }

    #[test]
    fn leaf_errors_render_single_line() {
        let err = CliError::Verify("output is not sorted".to_string());
        assert_eq!(format_chain(&err), "verification failed: output is not sorted");
    }
}
