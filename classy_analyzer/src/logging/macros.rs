//! Logging macros
//!
//! Context pairs are written `"key" => value`; any `Display` value works.
//! Every macro is a no-op until a global logger is installed.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_context {
    ($($key:expr => $value:expr),*) => {
        vec![$(($key, format!("{}", $value))),*]
    };
}

/// `log_error!(code, message [, span = span] [, "key" => value, ...])`
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr, span = $span:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::error($code, $message).with_span($span),
            $crate::__log_context!($($key => $value),*),
        )
    };

    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::error($code, $message),
            $crate::__log_context!($($key => $value),*),
        )
    };
}

#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::success($code, $message),
            $crate::__log_context!($($key => $value),*),
        )
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::info($message),
            $crate::__log_context!($($key => $value),*),
        )
    };
}

#[macro_export]
macro_rules! log_warning {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::warning($message),
            $crate::__log_context!($($key => $value),*),
        )
    };
}

/// Context values are only formatted when debug output is enabled
#[macro_export]
macro_rules! log_debug {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        if $crate::logging::debug_enabled() {
            $crate::logging::emit(
                $crate::logging::LogEvent::debug($message),
                $crate::__log_context!($($key => $value),*),
            )
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::logging::codes;
    use crate::tokens::TokenKind;
    use crate::utils::{Position, Span};

    #[test]
    fn test_macros_accept_display_context() {
        let keyword_index: usize = 4;

        log_error!(codes::analysis::NOT_A_CLASS_KEYWORD, "Not a declaration keyword",
            "index" => keyword_index,
            "found" => TokenKind::Identifier
        );
        log_error!(codes::lexical::UNTERMINATED_STRING, "Open string",
            span = Span::new(Position::start(), Position::start())
        );
        log_success!(codes::success::CLASSY_ANALYSIS_COMPLETE, "Analysis complete",
            "definitions" => 2,
            "skipped" => 0,
        );
        log_info!("Analyzing source");
        log_warning!("Declaration skipped", "keyword_index" => keyword_index);
        log_debug!("Clause scanned", "entries" => 3, "multi_line" => false);
    }

    #[test]
    fn test_context_pairs_are_stringified() {
        let pairs: Vec<(&str, String)> = __log_context!("a" => 1, "b" => TokenKind::Comma);
        assert_eq!(pairs[0], ("a", "1".to_string()));
        assert_eq!(pairs[1].0, "b");
    }
}
