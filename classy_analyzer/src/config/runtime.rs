//! Runtime preferences
//!
//! Each preference struct reads its defaults from `CLASSY_*` environment
//! variables; a TOML document can override any subset of fields.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Parse `name` from the environment, keeping `default` when it is unset or
/// does not parse
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Errors loading a runtime configuration document
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Whether to collect token metrics per run
    pub collect_detailed_metrics: bool,

    /// Whether to count whitespace and comments in metrics
    pub include_trivia_in_counts: bool,

    /// Whether to show position information in error messages
    pub include_position_in_errors: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env_or(env_vars::LEXICAL_DETAILED_METRICS, true),
            include_trivia_in_counts: env_or(env_vars::LEXICAL_INCLUDE_TRIVIA, false),
            include_position_in_errors: env_or(env_vars::LEXICAL_INCLUDE_POSITIONS, true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisPreferences {
    /// Keep going past declarations that cannot be analyzed
    pub skip_unanalyzable: bool,

    /// Emit a debug event for every analyzed declaration
    pub log_definitions: bool,
}

impl Default for AnalysisPreferences {
    fn default() -> Self {
        Self {
            skip_unanalyzable: env_or(env_vars::ANALYSIS_SKIP_UNANALYZABLE, true),
            log_definitions: env_or(env_vars::ANALYSIS_LOG_DEFINITIONS, false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_or(env_vars::LOGGING_USE_STRUCTURED, false),
            enable_console_logging: env_or(env_vars::LOGGING_ENABLE_CONSOLE, false),
            min_log_level: env_or(env_vars::LOGGING_MIN_LEVEL, LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        self.to_events_log_level().as_str()
    }

    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        use crate::logging::events::LogLevel as EventLevel;
        match self {
            LogLevel::Error => EventLevel::Error,
            LogLevel::Warning => EventLevel::Warning,
            LogLevel::Info => EventLevel::Info,
            LogLevel::Debug => EventLevel::Debug,
        }
    }
}

/// Accepts level names in any case, `warn`, or the numeric rank
impl FromStr for LogLevel {
    type Err = String;

    fn from_str(level: &str) -> Result<Self, Self::Err> {
        match level.to_ascii_lowercase().as_str() {
            "error" | "0" => Ok(LogLevel::Error),
            "warning" | "warn" | "1" => Ok(LogLevel::Warning),
            "info" | "2" => Ok(LogLevel::Info),
            "debug" | "3" => Ok(LogLevel::Debug),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub analysis: AnalysisPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a TOML document; missing sections and fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render as a TOML document
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "CLASSY_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_INCLUDE_TRIVIA: &str = "CLASSY_LEXICAL_INCLUDE_TRIVIA";
    pub const LEXICAL_INCLUDE_POSITIONS: &str = "CLASSY_LEXICAL_INCLUDE_POSITIONS";

    // Analysis
    pub const ANALYSIS_SKIP_UNANALYZABLE: &str = "CLASSY_ANALYSIS_SKIP_UNANALYZABLE";
    pub const ANALYSIS_LOG_DEFINITIONS: &str = "CLASSY_ANALYSIS_LOG_DEFINITIONS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "CLASSY_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "CLASSY_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "CLASSY_LOGGING_MIN_LEVEL";
}
