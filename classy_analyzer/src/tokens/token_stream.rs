//! Immutable, indexed token stream with kind-aware search
//!
//! All searches are pure functions of the stream content. Indices returned
//! here are only meaningful for the stream instance that produced them.

use crate::tokens::token::{Token, TokenKind};
use crate::utils::{Position, Span};

/// Errors raised by stream primitives
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenStreamError {
    #[error("Token index {index} out of range for stream of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unbalanced delimiters: '{open_text}' at index {open_index} is never closed")]
    UnbalancedDelimiters { open_index: usize, open_text: String },

    #[error("Token at index {index} is {found}, not an opening delimiter")]
    NotADelimiter { index: usize, found: TokenKind },
}

/// Ordered, 0-indexed, read-only view over tokens
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, failing when the index is outside `[0, len)`
    pub fn at(&self, index: usize) -> Result<&Token, TokenStreamError> {
        self.tokens
            .get(index)
            .ok_or(TokenStreamError::IndexOutOfRange {
                index,
                len: self.tokens.len(),
            })
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Kind at `index`, if in range
    pub fn kind_at(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|token| token.kind)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Fail unless `index` is in range
    pub fn ensure_index(&self, index: usize) -> Result<(), TokenStreamError> {
        self.at(index).map(|_| ())
    }

    // === SEARCH PRIMITIVES ===

    /// First index after `from` (exclusive) whose kind is in `kinds`.
    ///
    /// Tokens whose kind is in `skip` are never matched, even if `kinds`
    /// also names their kind.
    pub fn find_next(&self, from: usize, kinds: &[TokenKind], skip: &[TokenKind]) -> Option<usize> {
        let start = from.checked_add(1)?;
        self.tokens
            .iter()
            .enumerate()
            .skip(start)
            .filter(|(_, token)| !skip.contains(&token.kind))
            .find(|(_, token)| kinds.contains(&token.kind))
            .map(|(index, _)| index)
    }

    /// Next non-trivia token after `from` (exclusive)
    pub fn find_next_significant(&self, from: usize) -> Option<usize> {
        let start = from.checked_add(1)?;
        (start..self.tokens.len()).find(|&i| !self.tokens[i].is_trivia())
    }

    /// Closest non-trivia token before `from` (exclusive)
    pub fn find_previous_significant(&self, from: usize) -> Option<usize> {
        let end = from.min(self.tokens.len());
        (0..end).rev().find(|&i| !self.tokens[i].is_trivia())
    }

    /// Closest token before `from` (exclusive) that is not whitespace.
    ///
    /// Comments are returned like any other token.
    pub fn find_previous_non_whitespace(&self, from: usize) -> Option<usize> {
        let end = from.min(self.tokens.len());
        (0..end).rev().find(|&i| !self.tokens[i].is_whitespace())
    }

    /// Index of the balanced closer for the `{` or `(` at `open_index`.
    ///
    /// Only the same delimiter pair affects depth: parentheses inside a brace
    /// region are ignored and vice versa.
    pub fn matching_closer(&self, open_index: usize) -> Result<usize, TokenStreamError> {
        let open = self.at(open_index)?;
        let close_kind = open.kind.closer().ok_or(TokenStreamError::NotADelimiter {
            index: open_index,
            found: open.kind,
        })?;
        let open_kind = open.kind;

        let mut depth = 0usize;
        for (index, token) in self.tokens.iter().enumerate().skip(open_index) {
            if token.kind == open_kind {
                depth += 1;
            } else if token.kind == close_kind {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            }
        }

        Err(TokenStreamError::UnbalancedDelimiters {
            open_index,
            open_text: open.text.clone(),
        })
    }

    // === REGION HELPERS ===

    /// Number of `kind` tokens strictly between `start` and `end`
    pub fn count_kind_between(&self, start: usize, end: usize, kind: TokenKind) -> usize {
        self.between(start, end)
            .iter()
            .filter(|token| token.kind == kind)
            .count()
    }

    /// True if any token strictly between `start` and `end` holds a line break
    pub fn any_line_break_between(&self, start: usize, end: usize) -> bool {
        self.between(start, end)
            .iter()
            .any(|token| token.contains_line_break())
    }

    /// Indices of every token whose kind is in `kinds`, ascending
    pub fn find_all_of_kinds(&self, kinds: &[TokenKind]) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| kinds.contains(&token.kind))
            .map(|(index, _)| index)
            .collect()
    }

    /// Tokens strictly between two indices (empty when the range is empty)
    pub fn between(&self, start: usize, end: usize) -> &[Token] {
        let from = start.saturating_add(1).min(self.tokens.len());
        let to = end.min(self.tokens.len());
        if from >= to {
            &[]
        } else {
            &self.tokens[from..to]
        }
    }

    /// Concatenated text of all tokens, which reproduces lexed source exactly
    pub fn source_text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    /// Short description of the neighbourhood of `index` for diagnostics
    pub fn context_snippet(&self, index: usize, radius: usize) -> String {
        let start = index.saturating_sub(radius);
        let end = (index + radius + 1).min(self.tokens.len());
        self.tokens
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|token| token.text.as_str())
            .collect::<String>()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Builds a stream from `(kind, text)` pairs, computing spans as it goes
#[derive(Debug)]
pub struct TokenStreamBuilder {
    tokens: Vec<Token>,
    current_position: Position,
}

impl TokenStreamBuilder {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            current_position: Position::start(),
        }
    }

    /// Add a token, spanning its text from the current position
    pub fn push(mut self, kind: TokenKind, text: &str) -> Self {
        let span = Span::covering(self.current_position, text);
        self.tokens.push(Token::with_span(kind, text, span));
        self.current_position = span.end;
        self
    }

    pub fn push_all(mut self, tokens: &[(TokenKind, &str)]) -> Self {
        for (kind, text) in tokens {
            self = self.push(*kind, text);
        }
        self
    }

    pub fn build(self) -> TokenStream {
        TokenStream::new(self.tokens)
    }
}

impl Default for TokenStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}
