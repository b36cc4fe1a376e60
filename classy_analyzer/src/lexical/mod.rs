//! Lexical analysis
//!
//! The analyzer only depends on the [`Lexer`] trait; [`LexicalAnalyzer`] is
//! the reference implementation used by the pipeline and tests.

pub mod analyzer;

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::tokens::TokenStream;

pub use analyzer::{Lexer, LexerError, LexicalAnalyzer, LexicalMetrics};

/// Tokenize with default preferences
pub fn tokenize(source: &str) -> Result<TokenStream, LexerError> {
    LexicalAnalyzer::new().tokenize(source)
}

/// Tokenize with custom runtime preferences (limits stay compile-time)
pub fn tokenize_with_preferences(
    source: &str,
    preferences: LexicalPreferences,
) -> Result<TokenStream, LexerError> {
    LexicalAnalyzer::with_preferences(preferences).tokenize(source)
}

/// Current compile-time limits
pub fn get_security_limits() -> SecurityLimits {
    SecurityLimits {
        max_identifier_length: MAX_IDENTIFIER_LENGTH,
        max_comment_length: MAX_COMMENT_LENGTH,
        max_string_size: MAX_STRING_SIZE,
        max_token_count: MAX_TOKEN_COUNT,
    }
}

/// Compile-time lexer limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityLimits {
    pub max_identifier_length: usize,
    pub max_comment_length: usize,
    pub max_string_size: usize,
    pub max_token_count: usize,
}
