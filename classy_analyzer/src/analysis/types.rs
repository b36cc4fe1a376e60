//! Declaration descriptors
//!
//! Descriptors hold only indices into the stream they were computed from, so
//! they are cheap to copy and outlive the stream. They become meaningless if
//! that stream is replaced.

use crate::tokens::TokenKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which declaration keyword introduced a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassyKind {
    Class,
    Interface,
    Trait,
}

impl ClassyKind {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::ClassKeyword => Some(ClassyKind::Class),
            TokenKind::InterfaceKeyword => Some(ClassyKind::Interface),
            TokenKind::TraitKeyword => Some(ClassyKind::Trait),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassyKind::Class => "class",
            ClassyKind::Interface => "interface",
            ClassyKind::Trait => "trait",
        }
    }
}

impl fmt::Display for ClassyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `extends` or `implements`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseKind {
    Extends,
    Implements,
}

impl ClauseKind {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::ExtendsKeyword => Some(ClauseKind::Extends),
            TokenKind::ImplementsKeyword => Some(ClauseKind::Implements),
            _ => None,
        }
    }

    pub fn token_kind(&self) -> TokenKind {
        match self {
            ClauseKind::Extends => TokenKind::ExtendsKeyword,
            ClauseKind::Implements => TokenKind::ImplementsKeyword,
        }
    }
}

/// One `extends` or `implements` clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritanceClause {
    /// Index of the clause keyword
    pub start_index: usize,
    /// Comma-separated entries, always at least 1
    pub entry_count: usize,
    pub spans_multiple_lines: bool,
    pub kind: ClauseKind,
}

impl InheritanceClause {
    /// Key used by consumers that report clause sizes by name
    pub fn label(&self) -> &'static str {
        match self.kind {
            ClauseKind::Extends => "numberOfExtends",
            ClauseKind::Implements => "numberOfImplements",
        }
    }
}

/// Structural description of one classy declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    /// First token of the declaration; currently always the keyword
    pub start_index: usize,
    pub keyword_index: usize,
    pub open_brace_index: usize,
    pub extends: Option<InheritanceClause>,
    pub implements: Option<InheritanceClause>,
    pub is_anonymous: bool,
    pub kind: ClassyKind,
}

impl ClassDefinition {
    pub fn has_extends(&self) -> bool {
        self.extends.is_some()
    }

    pub fn has_implements(&self) -> bool {
        self.implements.is_some()
    }

    /// Present clauses in index order
    pub fn inheritance_clauses(&self) -> impl Iterator<Item = &InheritanceClause> {
        self.extends.iter().chain(self.implements.iter())
    }

    /// True if any clause spans more than one line
    pub fn spans_multiple_lines(&self) -> bool {
        self.inheritance_clauses()
            .any(|clause| clause.spans_multiple_lines)
    }
}
