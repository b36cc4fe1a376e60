//! Reference lexical analyzer
//!
//! Splits PHP-flavoured source into the closed [`TokenKind`] set. Every byte of
//! input lands in exactly one token, so concatenating token texts reproduces
//! the source.

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{classify_punctuation, classify_word, Token, TokenKind, TokenStream};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success};

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Unterminated block comment starting at line {line}, column {column}")]
    UnterminatedComment { line: u32, column: u32 },

    #[error("Unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },

    #[error("Identifier too long: {length} characters (max {MAX_IDENTIFIER_LENGTH})")]
    IdentifierTooLong { length: usize },

    #[error("Comment too long: {length} bytes (max {MAX_COMMENT_LENGTH})")]
    CommentTooLong { length: usize },

    #[error("String too large: {size} bytes (max {MAX_STRING_SIZE})")]
    StringTooLarge { size: usize },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::UnterminatedComment { .. } => codes::lexical::UNTERMINATED_COMMENT,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            LexerError::CommentTooLong { .. } => codes::lexical::COMMENT_TOO_LONG,
            LexerError::StringTooLarge { .. } => codes::lexical::STRING_TOO_LARGE,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }
}

/// Anything that can turn source text into a [`TokenStream`]
pub trait Lexer {
    fn tokenize(&mut self, source: &str) -> Result<TokenStream, LexerError>;
}

/// Per-run token statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub classy_keyword_tokens: usize,
    pub clause_keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub punctuation_tokens: usize,
    pub other_tokens: usize,
    pub comment_count: usize,
    pub max_comment_length: usize,
    pub max_identifier_length: usize,

    // Only counted when trivia is included
    pub whitespace_tokens: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        if token.is_trivia() && !preferences.include_trivia_in_counts {
            return;
        }
        self.total_tokens += 1;

        if !preferences.collect_detailed_metrics {
            return;
        }

        match token.kind {
            kind if kind.is_classy() => self.classy_keyword_tokens += 1,
            kind if kind.is_clause_keyword() => self.clause_keyword_tokens += 1,
            TokenKind::Identifier => {
                self.identifier_tokens += 1;
                self.max_identifier_length =
                    self.max_identifier_length.max(token.text.chars().count());
            }
            TokenKind::LineComment | TokenKind::BlockComment => {
                self.comment_count += 1;
                self.max_comment_length = self.max_comment_length.max(token.text.len());
            }
            TokenKind::Whitespace => self.whitespace_tokens += 1,
            TokenKind::Other | TokenKind::NewKeyword => self.other_tokens += 1,
            _ => self.punctuation_tokens += 1,
        }
    }
}

/// Reference lexer for PHP-flavoured source
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Metrics of the most recent run
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    pub fn set_preferences(&mut self, preferences: LexicalPreferences) {
        self.preferences = preferences;
    }

    fn run(&mut self, source: &str) -> Result<TokenStream, LexerError> {
        let mut tokens = Vec::new();
        let mut offset = 0;
        let mut position = Position::start();
        // Sources without an open tag are treated as bare code
        let mut in_code = find_open_tag(source).is_none();

        while offset < source.len() {
            if tokens.len() >= MAX_TOKEN_COUNT {
                let error = LexerError::TooManyTokens {
                    count: tokens.len(),
                };
                self.report(&error, position);
                return Err(error);
            }

            let rest = &source[offset..];
            let (kind, length) = if in_code {
                match scan_token(rest, position) {
                    Ok(scanned) => scanned,
                    Err(error) => {
                        self.report(&error, position);
                        return Err(error);
                    }
                }
            } else {
                in_code = true;
                match find_open_tag(rest) {
                    Some(0) => continue,
                    Some(start) => (TokenKind::Other, start),
                    None => (TokenKind::Other, rest.len()),
                }
            };

            let text = &rest[..length];
            if text == CLOSE_TAG {
                in_code = false;
            }
            let token = Token::with_span(kind, text, Span::covering(position, text));
            self.metrics.record_token(&token, &self.preferences);
            tokens.push(token);

            position = position.advance_str(text);
            offset += length;
        }

        Ok(TokenStream::new(tokens))
    }

    fn report(&self, error: &LexerError, position: Position) {
        let message = if self.preferences.include_position_in_errors {
            format!(
                "Lexical analysis failed at line {}, column {}",
                position.line, position.column
            )
        } else {
            "Lexical analysis failed".to_string()
        };

        log_error!(error.error_code(), &message,
            span = Span::new(position, position),
            "error" => error,
            "tokens_processed" => self.metrics.total_tokens
        );
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer for LexicalAnalyzer {
    fn tokenize(&mut self, source: &str) -> Result<TokenStream, LexerError> {
        self.metrics = LexicalMetrics::default();

        log_debug!("Starting lexical analysis",
            "bytes" => source.len(),
            "max_tokens_allowed" => MAX_TOKEN_COUNT
        );

        let stream = self.run(source)?;

        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed successfully",
            "token_count" => stream.len(),
            "counted_tokens" => self.metrics.total_tokens,
            "classy_keywords" => self.metrics.classy_keyword_tokens,
            "identifiers" => self.metrics.identifier_tokens,
            "comments" => self.metrics.comment_count
        );

        Ok(stream)
    }
}

// === SCANNERS ===
// Each returns the token kind and its byte length within `rest`.

fn scan_token(rest: &str, position: Position) -> Result<(TokenKind, usize), LexerError> {
    let Some(first) = rest.chars().next() else {
        return Ok((TokenKind::Other, 0));
    };

    if first.is_ascii_whitespace() {
        let length = rest
            .find(|c: char| !c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        return Ok((TokenKind::Whitespace, length));
    }

    if rest.starts_with("/*") {
        return scan_block_comment(rest, position);
    }

    if rest.starts_with("//") || (first == '#' && !rest.starts_with("#[")) {
        return scan_line_comment(rest);
    }

    if is_word_start(first) {
        let length = word_length(rest);
        let word = &rest[..length];
        let char_count = word.chars().count();
        if char_count > MAX_IDENTIFIER_LENGTH {
            return Err(LexerError::IdentifierTooLong { length: char_count });
        }
        return Ok((classify_word(word), length));
    }

    if first == '$' {
        let after = &rest[1..];
        let length = match after.chars().next() {
            Some(c) if is_word_start(c) => 1 + word_length(after),
            _ => 1,
        };
        return Ok((TokenKind::Other, length));
    }

    if first == '\'' || first == '"' {
        return scan_string(rest, first, position);
    }

    if first.is_ascii_digit() {
        let length = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
            .unwrap_or(rest.len());
        return Ok((TokenKind::Other, length));
    }

    if starts_with_ignore_case(rest, OPEN_TAG) {
        return Ok((TokenKind::Other, OPEN_TAG.len()));
    }

    for operator in ["?->", CLOSE_TAG, "::", "->"] {
        if rest.starts_with(operator) {
            return Ok((TokenKind::Other, operator.len()));
        }
    }

    let kind = classify_punctuation(first).unwrap_or(TokenKind::Other);
    Ok((kind, first.len_utf8()))
}

fn scan_line_comment(rest: &str) -> Result<(TokenKind, usize), LexerError> {
    let length = match rest.find(['\n', '\r']) {
        Some(i) if rest[i..].starts_with("\r\n") => i + 2,
        Some(i) => i + 1,
        None => rest.len(),
    };
    check_comment_length(length)?;
    Ok((TokenKind::LineComment, length))
}

fn scan_block_comment(rest: &str, position: Position) -> Result<(TokenKind, usize), LexerError> {
    let close = rest[2..]
        .find("*/")
        .ok_or(LexerError::UnterminatedComment {
            line: position.line,
            column: position.column,
        })?;
    let length = close + 4;
    check_comment_length(length)?;
    Ok((TokenKind::BlockComment, length))
}

fn check_comment_length(length: usize) -> Result<(), LexerError> {
    if length > MAX_COMMENT_LENGTH {
        return Err(LexerError::CommentTooLong { length });
    }
    Ok(())
}

fn scan_string(
    rest: &str,
    quote: char,
    position: Position,
) -> Result<(TokenKind, usize), LexerError> {
    let mut escaped = false;
    for (i, c) in rest.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            let length = i + 1;
            if length > MAX_STRING_SIZE {
                return Err(LexerError::StringTooLarge { size: length });
            }
            return Ok((TokenKind::Other, length));
        }
    }

    Err(LexerError::UnterminatedString {
        line: position.line,
        column: position.column,
    })
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

fn word_length(rest: &str) -> usize {
    rest.find(|c: char| !is_word_continue(c))
        .unwrap_or(rest.len())
}

const OPEN_TAG: &str = "<?php";
const CLOSE_TAG: &str = "?>";

/// Byte offset of the first `<?php` in `text`, in any case
fn find_open_tag(text: &str) -> Option<usize> {
    text.to_ascii_lowercase().find(OPEN_TAG)
}

fn starts_with_ignore_case(rest: &str, prefix: &str) -> bool {
    rest.get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}
