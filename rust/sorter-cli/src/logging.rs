//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `SORTER_LOG=debug`.
pub const LOG_ENV: &str = "SORTER_LOG";

/// Pick the filter directive: `-v` flags win, then `SORTER_LOG`, then config.
pub fn filter_directive(verbosity: u8, env_value: Option<&str>, config_level: &str) -> String {
    match verbosity {
        0 => env_value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(config_level)
            .to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Directive used when the configured one does not parse.
pub const FALLBACK_DIRECTIVE: &str = "warn";

/// Parse `directive`, or fall back to `FALLBACK_DIRECTIVE` and return the
/// warning to show the user.
pub fn build_filter(directive: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (
            EnvFilter::new(FALLBACK_DIRECTIVE),
            Some(format!(
                "invalid log filter '{}' ({}), using '{}'",
                directive, e, FALLBACK_DIRECTIVE
            )),
        ),
    }
}

/// Install a stderr `fmt` subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(verbosity: u8, config_level: &str) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(verbosity, env_value.as_deref(), config_level);
    let (filter, warning) = build_filter(&directive);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Some(warning) = warning {
        tracing::warn!("{}", warning);
    }
}
