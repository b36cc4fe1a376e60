//! Process-wide logging
//!
//! The `log_*!` macros route through one global [`LoggingService`]. Nothing
//! is emitted until [`init_global_logging`] or
//! [`init_global_logging_with_service`] has been called.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{
    ConsoleLogger, EventSummary, Logger, LoggingService, MemoryLogger, MultiLogger, OutputFormat,
};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Install a console service built from the runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Invalid logging configuration: {e}"))?;

    let service = Arc::new(service::create_configured_service());
    init_global_logging_with_service(service.clone())?;

    service.log_success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging initialized",
    );
    Ok(())
}

/// Install a caller-built service; tests use this with a [`MemoryLogger`]
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Attach `context` to `event` and hand it to the global logger, if any
#[doc(hidden)]
pub fn emit(event: LogEvent, context: Vec<(&str, String)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };
    let event = context
        .into_iter()
        .fold(event, |event, (key, value)| event.with_context(key, &value));
    logger.log_event(event);
}

/// Whether `log_debug!` output can reach any logger
pub fn debug_enabled() -> bool {
    try_get_global_logger().is_some_and(|logger| logger.should_log(LogLevel::Debug))
}

/// Log an error, falling back to stderr before initialization
pub fn safe_log_error(code: Code, message: &str) {
    let event = LogEvent::error(code, message);
    match try_get_global_logger() {
        Some(logger) => logger.log_event(event),
        None => eprintln!("{}", event.format()),
    }
}

pub fn get_system_diagnostics() -> String {
    format!(
        "=== Logging System Diagnostics ===\nInitialized: {}\n\n{}",
        is_initialized(),
        config::get_config_summary()
    )
}
