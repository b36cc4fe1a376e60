//! Logging service and logger targets

use super::codes::Code;
use super::config;
use super::events::{LogEvent, LogLevel};
use std::sync::{Arc, Mutex, MutexGuard};

/// Sink for log events. Implementations must be shareable across threads
/// because analysis may run on several threads against one global service.
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Level-filtering front end over a single [`Logger`]
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Build a service from the `CLASSY_LOGGING_*` preferences
    pub fn with_config() -> Self {
        let logger = create_configured_multi_logger();
        let min_level = logger.min_level;
        Self::new(Arc::new(logger), min_level)
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }

    pub fn log_error(&self, code: Code, message: &str) {
        self.log_event(LogEvent::error(code, message));
    }

    pub fn log_success(&self, code: Code, message: &str) {
        self.log_event(LogEvent::success(code, message));
    }

    pub fn log_warning(&self, message: &str) {
        self.log_event(LogEvent::warning(message));
    }

    pub fn log_info(&self, message: &str) {
        self.log_event(LogEvent::info(message));
    }

    pub fn log_debug(&self, message: &str) {
        self.log_event(LogEvent::debug(message));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `[LEVEL] CODE - message (key=value, ...)`
    Plain,
    /// One JSON object per line
    Json,
}

/// Writes errors to stderr and everything else to stdout
pub struct ConsoleLogger {
    min_level: LogLevel,
    format: OutputFormat,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel, format: OutputFormat) -> Self {
        Self { min_level, format }
    }

    pub fn plain(min_level: LogLevel) -> Self {
        Self::new(min_level, OutputFormat::Plain)
    }

    pub fn json(min_level: LogLevel) -> Self {
        Self::new(min_level, OutputFormat::Json)
    }

    fn render(&self, event: &LogEvent) -> String {
        match self.format {
            OutputFormat::Plain => event.format(),
            OutputFormat::Json => event.format_json().unwrap_or_else(|_| event.format()),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        if event.level > self.min_level {
            return;
        }
        let line = self.render(event);
        if event.is_error() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// Bounded in-memory event buffer used to assert on emitted events.
/// Once the configured buffer size is reached the oldest events are dropped.
#[derive(Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned buffer still holds valid events
    fn lock(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn collect_where(&self, keep: impl Fn(&LogEvent) -> bool) -> Vec<LogEvent> {
        self.lock().iter().filter(|&event| keep(event)).cloned().collect()
    }

    fn any(&self, matches: impl Fn(&LogEvent) -> bool) -> bool {
        self.lock().iter().any(matches)
    }

    pub fn event_count(&self) -> usize {
        self.lock().len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn get_errors(&self) -> Vec<LogEvent> {
        self.collect_where(LogEvent::is_error)
    }

    pub fn get_warnings(&self) -> Vec<LogEvent> {
        self.collect_where(LogEvent::is_warning)
    }

    pub fn get_events_with_code(&self, code: Code) -> Vec<LogEvent> {
        self.collect_where(|event| event.code == code)
    }

    pub fn get_events_by_category(&self, category: &str) -> Vec<LogEvent> {
        self.collect_where(|event| event.category() == category)
    }

    pub fn has_error_with_code(&self, code: Code) -> bool {
        self.any(|event| event.is_error() && event.code == code)
    }

    pub fn has_success_with_code(&self, code: Code) -> bool {
        self.any(|event| event.is_info() && event.code == code)
    }

    pub fn get_summary(&self) -> EventSummary {
        self.lock()
            .iter()
            .fold(EventSummary::default(), |mut summary, event| {
                summary.total_count += 1;
                match event.level {
                    LogLevel::Error => summary.error_count += 1,
                    LogLevel::Warning => summary.warning_count += 1,
                    LogLevel::Info => summary.info_count += 1,
                    LogLevel::Debug => summary.debug_count += 1,
                }
                summary
            })
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let capacity = config::get_error_buffer_size().max(1);
        let mut events = self.lock();
        if events.len() >= capacity {
            let overflow = events.len() + 1 - capacity;
            events.drain(..overflow);
        }
        events.push(event.clone());
    }
}

/// Per-level counts of the events held by a [`MemoryLogger`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSummary {
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub debug_count: usize,
}

impl EventSummary {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Forwards each event at or above its level to every attached logger
pub struct MultiLogger {
    loggers: Vec<Arc<dyn Logger>>,
    min_level: LogLevel,
}

impl MultiLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            loggers: Vec::new(),
            min_level,
        }
    }

    pub fn add_logger(&mut self, logger: Arc<dyn Logger>) {
        self.loggers.push(logger);
    }

    pub fn with_console(mut self, console: ConsoleLogger) -> Self {
        self.add_logger(Arc::new(console));
        self
    }

    /// Attach a fresh memory buffer and hand back a handle to it
    pub fn with_memory(mut self) -> (Self, Arc<MemoryLogger>) {
        let memory = Arc::new(MemoryLogger::new());
        self.add_logger(memory.clone());
        (self, memory)
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl Logger for MultiLogger {
    fn log(&self, event: &LogEvent) {
        if event.level > self.min_level {
            return;
        }
        for logger in &self.loggers {
            logger.log(event);
        }
    }
}

pub fn create_configured_service() -> LoggingService {
    LoggingService::with_config()
}

/// Multi-logger with a console target only when console output is enabled
pub fn create_configured_multi_logger() -> MultiLogger {
    let min_level = config::get_min_log_level();
    let multi = MultiLogger::new(min_level);
    if !config::use_console_logging() {
        return multi;
    }

    let console = if config::use_structured_logging() {
        ConsoleLogger::json(min_level)
    } else {
        ConsoleLogger::plain(min_level)
    };
    multi.with_console(console)
}

pub fn create_test_logger() -> Arc<MemoryLogger> {
    Arc::new(MemoryLogger::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_memory_logger_queries() {
        let logger = MemoryLogger::new();
        logger.log(&LogEvent::info("Analyzing"));
        logger.log(&LogEvent::warning("Declaration skipped"));
        logger.log(&LogEvent::error(
            codes::analysis::MALFORMED_DECLARATION,
            "No brace",
        ));

        assert_eq!(logger.event_count(), 3);
        assert_eq!(logger.get_errors().len(), 1);
        assert_eq!(logger.get_warnings().len(), 1);
        assert!(logger.has_error_with_code(codes::analysis::MALFORMED_DECLARATION));
        assert!(!logger.has_success_with_code(codes::analysis::MALFORMED_DECLARATION));

        let summary = logger.get_summary();
        assert_eq!(
            summary,
            EventSummary {
                total_count: 3,
                error_count: 1,
                warning_count: 1,
                info_count: 1,
                debug_count: 0,
            }
        );
        assert!(summary.has_errors());

        logger.clear();
        assert_eq!(logger.get_summary(), EventSummary::default());
    }

    #[test]
    fn test_multi_logger_fans_out() {
        let (multi, first) = MultiLogger::new(LogLevel::Debug).with_memory();
        let (multi, second) = multi.with_memory();
        let multi = multi.with_console(ConsoleLogger::plain(LogLevel::Error));
        assert_eq!(multi.len(), 3);

        multi.log(&LogEvent::debug("Token skipped"));

        assert_eq!(first.event_count(), 1);
        assert_eq!(second.event_count(), 1);
    }

    #[test]
    fn test_multi_logger_level_gate() {
        let (multi, memory) = MultiLogger::new(LogLevel::Warning).with_memory();
        multi.log(&LogEvent::info("dropped"));
        multi.log(&LogEvent::warning("kept"));
        assert_eq!(memory.event_count(), 1);
    }

    #[test]
    fn test_logging_service_filters_by_level() {
        let logger = create_test_logger();
        let service = LoggingService::new(logger.clone(), LogLevel::Warning);

        service.log_debug("Clause scanned");
        service.log_info("Analyzing");
        service.log_warning("Skipped declaration");
        service.log_error(codes::lexical::UNTERMINATED_COMMENT, "Open comment");
        service.log_success(codes::success::CLASSY_ANALYSIS_COMPLETE, "Analyzed");

        assert_eq!(logger.event_count(), 2);
        assert!(logger.has_error_with_code(codes::lexical::UNTERMINATED_COMMENT));
        assert!(!logger.has_success_with_code(codes::success::CLASSY_ANALYSIS_COMPLETE));
    }

    #[test]
    fn test_events_by_category_and_code() {
        let logger = MemoryLogger::new();
        logger.log(&LogEvent::error(
            codes::analysis::NOT_A_CLASS_KEYWORD,
            "Wrong token",
        ));
        logger.log(&LogEvent::error(codes::lexical::TOO_MANY_TOKENS, "Too many"));

        assert_eq!(logger.get_events_by_category("Analysis").len(), 1);
        assert_eq!(logger.get_events_by_category("Lexical").len(), 1);
        assert_eq!(
            logger
                .get_events_with_code(codes::lexical::TOO_MANY_TOKENS)
                .len(),
            1
        );
    }

    #[test]
    fn test_configured_logger_follows_console_preference() {
        let multi = create_configured_multi_logger();
        assert_eq!(multi.is_empty(), !config::use_console_logging());

        let service = create_configured_service();
        assert!(service.should_log(LogLevel::Error));
        assert_eq!(
            service.should_log(LogLevel::Debug),
            config::get_min_log_level() == LogLevel::Debug
        );
    }

    #[test]
    fn test_console_render_formats() {
        let event = LogEvent::warning("Declaration skipped").with_context("keyword_index", "4");

        let plain = ConsoleLogger::plain(LogLevel::Debug).render(&event);
        assert!(plain.starts_with("[WARN]"));

        let json = ConsoleLogger::json(LogLevel::Debug).render(&event);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["context"]["keyword_index"], "4");
    }
}
