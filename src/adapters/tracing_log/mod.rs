// Tracing log adapter - Structured logging using tracing crate

use tracing_subscriber::EnvFilter;

use crate::adapters::toml_config::LogFormat;
use crate::domain::errors::*;

/// Pick the filter directive
///
/// `RUST_LOG` wins, then `--verbose`, then the configured level.
pub fn filter_directive(rust_log: Option<&str>, log_level: &str, verbose: bool) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if verbose => "debug".to_string(),
        _ => log_level.to_string(),
    }
}

/// Install the global tracing subscriber writing to stderr
///
/// Stdout stays reserved for plan reports and dry-run output. Calling this
/// twice is harmless; the second subscriber is simply not installed.
pub fn init_logging(log_level: &str, format: LogFormat, verbose: bool) -> Result<(), DomainError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), log_level, verbose);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| DomainError::ConfigFail(format!("Invalid log filter '{}': {}", directive, e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    Ok(())
}
