//! Log events and their text and JSON renderings

use super::codes::{self, Code, ErrorMetadata};
use crate::utils::Span;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Ordered from most to least severe; a logger at level `L` accepts `<= L`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: SystemTime,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    pub span: Option<Span>,
    pub context: BTreeMap<String, String>,
}

impl LogEvent {
    fn with_level(level: LogLevel, code: Code, message: &str) -> Self {
        let limit = crate::config::compile_time::logging::MAX_LOG_MESSAGE_LENGTH;
        Self {
            timestamp: SystemTime::now(),
            level,
            code,
            message: message.chars().take(limit).collect(),
            span: None,
            context: BTreeMap::new(),
        }
    }

    pub fn error(code: Code, message: &str) -> Self {
        Self::with_level(LogLevel::Error, code, message)
    }

    /// Uncoded warning, reported as `W000`
    pub fn warning(message: &str) -> Self {
        Self::with_level(LogLevel::Warning, Code::new("W000"), message)
    }

    pub fn info(message: &str) -> Self {
        Self::with_level(LogLevel::Info, Code::new("I000"), message)
    }

    /// Info-level event carrying one of the `codes::success` codes
    pub fn success(code: Code, message: &str) -> Self {
        Self::with_level(LogLevel::Info, code, message)
    }

    pub fn debug(message: &str) -> Self {
        Self::with_level(LogLevel::Debug, Code::new("D000"), message)
    }

    pub fn with_span(self, span: Span) -> Self {
        Self {
            span: Some(span),
            ..self
        }
    }

    /// Add or replace one context entry
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.level, LogLevel::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.level, LogLevel::Warning)
    }

    pub fn is_info(&self) -> bool {
        matches!(self.level, LogLevel::Info)
    }

    /// Registry entry for this event's code; `None` for uncoded events
    pub fn metadata(&self) -> Option<&'static ErrorMetadata> {
        codes::get_error_metadata(self.code.as_str())
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.code.as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.code.as_str())
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.code.as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.code.as_str())
    }

    pub fn description(&self) -> &'static str {
        codes::get_description(self.code.as_str())
    }

    /// `[LEVEL] CODE - message at line:column (key=value, ...)`
    pub fn format(&self) -> String {
        let mut line = format!("[{}] {} - {}", self.level.as_str(), self.code, self.message);
        if let Some(span) = &self.span {
            line.push_str(&format!(" at {}:{}", span.start.line, span.start.column));
        }
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            line.push_str(&format!(" ({})", pairs.join(", ")));
        }
        line
    }

    /// Single-line JSON record for structured output
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&JsonRecord::from(self))
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: u64,
    level: &'static str,
    code: &'static str,
    message: &'a str,
    category: &'static str,
    severity: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_metadata: Option<JsonErrorMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<JsonSpan>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    context: &'a BTreeMap<String, String>,
}

#[derive(Serialize)]
struct JsonErrorMetadata {
    recoverable: bool,
    requires_halt: bool,
    description: &'static str,
}

#[derive(Serialize)]
struct JsonSpan {
    start_line: u32,
    start_column: u32,
    end_line: u32,
    end_column: u32,
}

impl<'a> From<&'a LogEvent> for JsonRecord<'a> {
    fn from(event: &'a LogEvent) -> Self {
        let timestamp = event
            .timestamp
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);

        Self {
            timestamp,
            level: event.level.as_str(),
            code: event.code.as_str(),
            message: &event.message,
            category: event.category(),
            severity: event.severity(),
            error_metadata: event.is_error().then(|| JsonErrorMetadata {
                recoverable: event.is_recoverable(),
                requires_halt: event.requires_halt(),
                description: event.description(),
            }),
            span: event.span.map(|span| JsonSpan {
                start_line: span.start.line,
                start_column: span.start.column,
                end_line: span.end.line,
                end_column: span.end.column,
            }),
            context: &event.context,
        }
    }
}
