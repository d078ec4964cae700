use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidLogLevel { value: String, source: ParseError },
    SubscriberInstall(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidLogLevel { value, .. } => {
                write!(f, "AGE_VERIFY_LOG_LEVEL '{value}' is not a valid log filter")
            }
            TelemetryError::SubscriberInstall(err) => {
                write!(f, "unable to install the stderr log subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidLogLevel { source, .. } => Some(source),
            TelemetryError::SubscriberInstall(err) => Some(&**err),
        }
    }
}

/// Resolve the filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|source| {
            TelemetryError::InvalidLogLevel {
                value: config.log_level.clone(),
                source,
            }
        }),
    }
}

/// Install the global subscriber. Output goes to stderr so prompts and the
/// summary on stdout stay clean.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::SubscriberInstall)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_reports_offending_value() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = TelemetryConfig {
            log_level: "age_verify=loud".to_string(),
        };
        match env_filter(&config) {
            Err(err @ TelemetryError::InvalidLogLevel { .. }) => {
                assert_eq!(
                    err.to_string(),
                    "AGE_VERIFY_LOG_LEVEL 'age_verify=loud' is not a valid log filter"
                );
            }
            other => panic!("expected env filter error, got {other:?}"),
        }
    }

    #[test]
    fn plain_level_builds_filter() {
        let config = TelemetryConfig {
            log_level: "info".to_string(),
        };
        assert!(env_filter(&config).is_ok());
    }
}
