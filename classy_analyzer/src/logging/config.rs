//! Logging configuration
//!
//! Buffer limits are compile-time constants. Level and output format come
//! from [`LoggingPreferences`], installed once per process or read from the
//! environment on demand.

use crate::config::compile_time::logging::{LOG_BUFFER_SIZE, MAX_LOG_MESSAGE_LENGTH};
use crate::config::runtime::LoggingPreferences;
use crate::logging::events::LogLevel;
use std::sync::OnceLock;

static PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Pin the preferences for this process; only the first call wins
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    PREFERENCES
        .set(preferences)
        .map_err(|_| "Logging preferences already initialized".to_string())
}

fn with_preferences<T>(read: impl FnOnce(&LoggingPreferences) -> T) -> T {
    match PREFERENCES.get() {
        Some(preferences) => read(preferences),
        None => read(&LoggingPreferences::default()),
    }
}

pub fn get_min_log_level() -> LogLevel {
    with_preferences(|p| p.min_log_level.to_events_log_level())
}

pub fn use_structured_logging() -> bool {
    with_preferences(|p| p.use_structured_logging)
}

pub fn use_console_logging() -> bool {
    with_preferences(|p| p.enable_console_logging)
}

pub fn get_error_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}

/// Reject zero-sized limits
pub fn validate_config() -> Result<(), String> {
    let limits = [
        ("LOG_BUFFER_SIZE", LOG_BUFFER_SIZE),
        ("MAX_LOG_MESSAGE_LENGTH", MAX_LOG_MESSAGE_LENGTH),
    ];
    match limits.iter().find(|(_, value)| *value == 0) {
        Some((name, _)) => Err(format!("{name} must be greater than 0")),
        None => Ok(()),
    }
}

pub fn get_config_summary() -> String {
    with_preferences(|p| {
        format!(
            "=== Logging Configuration ===\n\
             Min level: {}\n\
             Structured: {}\n\
             Console: {}\n\
             Buffer size: {}\n\
             Max message length: {}\n",
            p.min_log_level.as_str(),
            p.use_structured_logging,
            p.enable_console_logging,
            LOG_BUFFER_SIZE,
            MAX_LOG_MESSAGE_LENGTH,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_time_limits_are_valid() {
        assert!(validate_config().is_ok());
        assert_eq!(get_error_buffer_size(), LOG_BUFFER_SIZE);
        assert_eq!(get_max_log_message_length(), MAX_LOG_MESSAGE_LENGTH);
    }

    #[test]
    fn test_config_summary() {
        let summary = get_config_summary();
        assert!(summary.contains("Min level:"));
        assert!(summary.contains(&format!("Buffer size: {LOG_BUFFER_SIZE}")));
    }
}
