use std::env;
use std::fmt;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the questionnaire binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("AGE_VERIFY_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = match env::var("AGE_VERIFY_LOG_LEVEL") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::EmptyLogLevel);
            }
            Ok(value) => value.trim().to_string(),
            Err(env::VarError::NotPresent) => DEFAULT_LOG_LEVEL.to_string(),
            Err(env::VarError::NotUnicode(_)) => return Err(ConfigError::NonUnicodeLogLevel),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls. Log lines go to stderr; stdout belongs to the questionnaire.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyLogLevel,
    NonUnicodeLogLevel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyLogLevel => {
                write!(f, "AGE_VERIFY_LOG_LEVEL must not be empty when set")
            }
            ConfigError::NonUnicodeLogLevel => {
                write!(f, "AGE_VERIFY_LOG_LEVEL must be valid unicode")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
