//! Configuration file parsing for `sorter.toml`.
//!
//! Searches current directory then ancestors, falling back to
//! `~/.config/sorter/sorter.toml` if no project-level file is found.

use serde::{Deserialize, Serialize};
use sorter_core::{Algorithm, SortOptions};
use std::path::{Path, PathBuf};

use crate::error::CliError;

pub const CONFIG_FILE_NAME: &str = "sorter.toml";

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct SorterConfig {
    #[serde(default)]
    pub sort: SortSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SortSection {
    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,
    /// Merge variant for merge sort.
    #[serde(default = "default_true")]
    pub stable: bool,
    /// Inclusive key bound for the histogram counting sort.
    pub max_key: Option<i64>,
    /// Decimal digit count for radix sort.
    pub num_digits: Option<u32>,
}

impl Default for SortSection {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            stable: true,
            max_key: None,
            num_digits: None,
        }
    }
}

impl SortSection {
    pub fn to_options(&self) -> SortOptions {
        SortOptions {
            algorithm: self.algorithm,
            stable: self.stable,
            max_key: self.max_key,
            num_digits: self.num_digits,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
    /// Check every result for sortedness and permutation before printing.
    #[serde(default)]
    pub verify: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogSection {
    /// Default `tracing` filter directive, overridden by `SORTER_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_algorithm() -> Algorithm {
    Algorithm::Merge
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl SorterConfig {
    /// Search the current directory, its ancestors, then the global config
    /// dir. `Ok(None)` when no file exists; a file that exists but cannot be
    /// read or parsed is an error.
    pub fn load_with_path() -> Result<Option<(PathBuf, Self)>, CliError> {
        let cwd = std::env::current_dir()?;
        let global_dir = dirs::home_dir().map(|home| home.join(".config").join("sorter"));
        Self::find_and_load(&cwd, global_dir.as_deref())
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Search `start` and its ancestors, then `global_dir`, for `sorter.toml`.
    pub fn find_and_load(
        start: &Path,
        global_dir: Option<&Path>,
    ) -> Result<Option<(PathBuf, Self)>, CliError> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let cfg = Self::load_from(&config_path)?;
                return Ok(Some((config_path, cfg)));
            }
            if !dir.pop() {
                break;
            }
        }
        if let Some(global_dir) = global_dir {
            let global = global_dir.join(CONFIG_FILE_NAME);
            if global.exists() {
                let cfg = Self::load_from(&global)?;
                return Ok(Some((global, cfg)));
            }
        }
        Ok(None)
    }

    /// Parse a TOML string directly.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Generate a default `sorter.toml` template.
    pub fn default_template() -> &'static str {
        r#"# Sorter configuration

[sort]
# counting-comparison | counting-histogram | selection-swap-on-find |
# selection-find-minimum | insertion | bubble | radix | merge
algorithm = "merge"
# Merge sort only: take the left element on ties
stable = true
# Histogram counting sort key bound (inferred from input when unset)
# max_key = 1000
# Radix sort digit count (inferred from input when unset)
# num_digits = 4

[output]
# text | json
format = "text"
verify = false

[log]
# tracing filter directive; SORTER_LOG takes precedence
level = "warn"
"#
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sort_section() {
        let toml_str = r#"
[sort]
algorithm = "counting-histogram"
max_key = 255
"#;
        let cfg = SorterConfig::parse(toml_str).expect("should parse");
        assert_eq!(cfg.sort.algorithm, Algorithm::CountingHistogram);
        assert_eq!(cfg.sort.max_key, Some(255));
        assert_eq!(cfg.sort.num_digits, None);
        assert!(cfg.sort.stable);
    }

    #[test]
    fn parse_output_and_log() {
        let toml_str = r#"
[output]
format = "json"
verify = true

[log]
level = "debug"
"#;
        let cfg = SorterConfig::parse(toml_str).expect("should parse");
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(cfg.output.verify);
        assert_eq!(cfg.log.level, "debug");
    }

    #[test]
    fn empty_string_returns_default() {
        let cfg = SorterConfig::parse("").expect("empty toml is valid");
        assert_eq!(cfg, SorterConfig::default());
        assert_eq!(cfg.sort.algorithm, Algorithm::Merge);
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert_eq!(cfg.log.level, "warn");
    }

    #[test]
    fn unknown_algorithm_is_an_error() {
        let result = SorterConfig::parse("[sort]\nalgorithm = \"quick\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_toml_returns_error() {
        assert!(SorterConfig::parse("[broken").is_err());
    }

    #[test]
    fn default_template_round_trips() {
        let cfg = SorterConfig::parse(SorterConfig::default_template())
            .expect("default template must be valid toml");
        assert_eq!(cfg, SorterConfig::default());
    }

    #[test]
    fn sort_section_to_options() {
        let cfg = SorterConfig::parse("[sort]\nalgorithm = \"merge\"\nstable = false\n")
            .expect("should parse");
        let opts = cfg.sort.to_options();
        assert_eq!(opts.algorithm, Algorithm::Merge);
        assert!(!opts.stable);
    }

    /// Fresh directory under the system temp dir, unique per test.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "sorter-config-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn search_finds_config_in_ancestor() {
        let root = scratch_dir("ancestor");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).expect("create nested dir");
        std::fs::write(
            root.join(CONFIG_FILE_NAME),
            "[sort]\nalgorithm = \"radix\"\nnum_digits = 3\n",
        )
        .expect("write config");

        let (path, cfg) = SorterConfig::find_and_load(&nested, None)
            .expect("valid config")
            .expect("config found");
        assert_eq!(path, root.join(CONFIG_FILE_NAME));
        assert_eq!(cfg.sort.algorithm, Algorithm::Radix);
        assert_eq!(cfg.sort.num_digits, Some(3));
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn search_reports_invalid_config_instead_of_defaults() {
        let root = scratch_dir("invalid");
        std::fs::write(root.join(CONFIG_FILE_NAME), "[sort]\nalgorithm = \"radx\"\n")
            .expect("write config");

        let err = SorterConfig::find_and_load(&root, None).unwrap_err();
        match err {
            CliError::Config { path, .. } => assert_eq!(path, root.join(CONFIG_FILE_NAME)),
            other => panic!("expected config error, got {:?}", other),
        }
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn search_falls_back_to_global_dir() {
        let root = scratch_dir("global");
        let project = root.join("project");
        let global = root.join("global");
        std::fs::create_dir_all(&project).expect("create project dir");
        std::fs::create_dir_all(&global).expect("create global dir");
        std::fs::write(global.join(CONFIG_FILE_NAME), "[output]\nformat = \"json\"\n")
            .expect("write config");

        // The scratch tree sits under the temp dir, which has no sorter.toml.
        let found = SorterConfig::find_and_load(&project, Some(&global)).expect("valid config");
        let (path, cfg) = found.expect("global config found");
        assert_eq!(path, global.join(CONFIG_FILE_NAME));
        assert_eq!(cfg.output.format, OutputFormat::Json);

        let invalid = root.join("invalid-global");
        std::fs::create_dir_all(&invalid).expect("create dir");
        std::fs::write(invalid.join(CONFIG_FILE_NAME), "[broken").expect("write config");
        assert!(SorterConfig::find_and_load(&project, Some(&invalid)).is_err());
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn search_without_any_file_is_none() {
        let root = scratch_dir("none");
        let found = SorterConfig::find_and_load(&root, Some(&root.join("missing")))
            .expect("no file is not an error");
        assert!(found.is_none());
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let err = SorterConfig::load_from(Path::new("/nonexistent/sorter.toml")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
