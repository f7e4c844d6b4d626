//! Logging setup shared by `cleanname` binaries.
//!
//! Events go to stderr so stdout stays reserved for the rename report.

use std::fmt;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const C_DEFAULT_DIRECTIVE: &str = "warn";

/// Output shape of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumLogFormat {
    /// Human-readable single lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logger initialization options.
#[derive(Debug, Clone, Default)]
pub struct SpecLogOptions {
    /// Number of `-v` flags; `0` defers to `RUST_LOG`.
    pub n_verbosity: u8,
    /// Line format.
    pub rule_format: EnumLogFormat,
}

#[derive(Debug)]
pub enum LogInitError {
    /// Filter directive could not be parsed.
    InvalidFilter(String),
    /// A global subscriber was already installed.
    AlreadyInitialized(String),
}

impl fmt::Display for LogInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilter(msg) => write!(f, "Invalid log filter: {msg}"),
            Self::AlreadyInitialized(msg) => write!(f, "Logger already initialized: {msg}"),
        }
    }
}

impl std::error::Error for LogInitError {}

/// Map a `-v` count to a filter directive. `None` means "use the environment".
pub fn verbosity_directive(n_verbosity: u8) -> Option<&'static str> {
    match n_verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Build the event filter for `spec_log_options`.
///
/// Explicit verbosity wins over `RUST_LOG`; without either, only warnings pass.
pub fn build_filter(spec_log_options: &SpecLogOptions) -> Result<EnvFilter, LogInitError> {
    match verbosity_directive(spec_log_options.n_verbosity) {
        Some(directive) => {
            EnvFilter::try_new(directive).map_err(|e| LogInitError::InvalidFilter(e.to_string()))
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(C_DEFAULT_DIRECTIVE))),
    }
}

/// Install the global stderr subscriber.
pub fn init_logging(spec_log_options: &SpecLogOptions) -> Result<(), LogInitError> {
    let filter = build_filter(spec_log_options)?;
    let registry = tracing_subscriber::registry().with(filter);
    let res_init = match spec_log_options.rule_format {
        EnumLogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        EnumLogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
    res_init.map_err(|e| LogInitError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{EnumLogFormat, SpecLogOptions, build_filter, verbosity_directive};

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(verbosity_directive(0), None);
        assert_eq!(verbosity_directive(1), Some("info"));
        assert_eq!(verbosity_directive(2), Some("debug"));
        assert_eq!(verbosity_directive(9), Some("trace"));
    }

    #[test]
    fn build_filter_uses_explicit_verbosity() {
        let spec_log_options = SpecLogOptions {
            n_verbosity: 2,
            rule_format: EnumLogFormat::Text,
        };
        let filter = build_filter(&spec_log_options).expect("filter");
        assert_eq!(filter.to_string(), "debug");
    }
}
