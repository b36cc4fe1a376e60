//! Token and token-kind definitions
//!
//! The kind set is closed: the analyzer only distinguishes what it needs to
//! bound classy declarations, and everything else collapses into
//! [`TokenKind::Other`].
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed enumeration of token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Declaration keywords
    ClassKeyword,
    InterfaceKeyword,
    TraitKeyword,

    // Inheritance keywords
    ExtendsKeyword,
    ImplementsKeyword,

    NewKeyword,

    // Qualified names
    Identifier,
    NamespaceSeparator,

    // Punctuation
    Comma,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,

    // Trivia
    Whitespace,
    LineComment,
    BlockComment,

    Other,
}

impl TokenKind {
    /// Whitespace and comments
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// `class`, `interface` or `trait`
    pub fn is_classy(&self) -> bool {
        matches!(
            self,
            TokenKind::ClassKeyword | TokenKind::InterfaceKeyword | TokenKind::TraitKeyword
        )
    }

    /// `extends` or `implements`
    pub fn is_clause_keyword(&self) -> bool {
        matches!(self, TokenKind::ExtendsKeyword | TokenKind::ImplementsKeyword)
    }

    /// Tokens that may appear inside a qualified type name
    pub fn is_name_part(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::NamespaceSeparator)
    }

    /// The closer paired with an opening delimiter
    pub fn closer(&self) -> Option<TokenKind> {
        match self {
            TokenKind::OpenBrace => Some(TokenKind::CloseBrace),
            TokenKind::OpenParen => Some(TokenKind::CloseParen),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::ClassKeyword => "ClassKeyword",
            TokenKind::InterfaceKeyword => "InterfaceKeyword",
            TokenKind::TraitKeyword => "TraitKeyword",
            TokenKind::ExtendsKeyword => "ExtendsKeyword",
            TokenKind::ImplementsKeyword => "ImplementsKeyword",
            TokenKind::NewKeyword => "NewKeyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::NamespaceSeparator => "NamespaceSeparator",
            TokenKind::Comma => "Comma",
            TokenKind::OpenBrace => "OpenBrace",
            TokenKind::CloseBrace => "CloseBrace",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::LineComment => "LineComment",
            TokenKind::BlockComment => "BlockComment",
            TokenKind::Other => "Other",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trivia kinds, the usual skip set for stream searches
pub const TRIVIA: &[TokenKind] = &[
    TokenKind::Whitespace,
    TokenKind::LineComment,
    TokenKind::BlockComment,
];

/// Declaration keyword kinds
pub const CLASSY_KEYWORDS: &[TokenKind] = &[
    TokenKind::ClassKeyword,
    TokenKind::InterfaceKeyword,
    TokenKind::TraitKeyword,
];

/// Classify a word as a keyword kind, or [`TokenKind::Identifier`].
///
/// Keywords are matched case-insensitively.
pub fn classify_word(word: &str) -> TokenKind {
    match word.to_ascii_lowercase().as_str() {
        "class" => TokenKind::ClassKeyword,
        "interface" => TokenKind::InterfaceKeyword,
        "trait" => TokenKind::TraitKeyword,
        "extends" => TokenKind::ExtendsKeyword,
        "implements" => TokenKind::ImplementsKeyword,
        "new" => TokenKind::NewKeyword,
        _ => TokenKind::Identifier,
    }
}

/// Classify single-character punctuation the analyzer cares about
pub fn classify_punctuation(ch: char) -> Option<TokenKind> {
    match ch {
        ',' => Some(TokenKind::Comma),
        '{' => Some(TokenKind::OpenBrace),
        '}' => Some(TokenKind::CloseBrace),
        '(' => Some(TokenKind::OpenParen),
        ')' => Some(TokenKind::CloseParen),
        '\\' => Some(TokenKind::NamespaceSeparator),
        _ => None,
    }
}

/// One lexical unit: literal text plus kind tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Token without source location (hand-built streams)
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            span: Span::dummy(),
        }
    }

    pub fn with_span(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    pub fn is_classy(&self) -> bool {
        self.kind.is_classy()
    }

    /// True if the literal text holds a line break (`\n` or `\r`)
    pub fn contains_line_break(&self) -> bool {
        self.text.contains(['\n', '\r'])
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
