//! Analysis failures

use crate::logging::{codes, Code};
use crate::tokens::{TokenKind, TokenStreamError};

/// Failures raised while analyzing a classy declaration.
///
/// Every variant is a deterministic validation failure; the analyzer never
/// returns a partial descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Token index {index} out of range for stream of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Token at index {index} is {found}, not a class, interface or trait keyword")]
    NotAClassKeyword { index: usize, found: TokenKind },

    #[error("Malformed declaration at index {index}: {reason}")]
    MalformedDeclaration { index: usize, reason: String },

    #[error("Unbalanced delimiters: opener at index {open_index} is never closed")]
    UnbalancedDelimiters { open_index: usize },

    #[error("Token at index {index} is {found}, not an extends or implements keyword")]
    NotAClauseKeyword { index: usize, found: TokenKind },

    #[error("Token at index {index} is {found}, not an opening delimiter")]
    NotADelimiter { index: usize, found: TokenKind },
}

impl AnalysisError {
    pub fn error_code(&self) -> Code {
        match self {
            AnalysisError::IndexOutOfRange { .. } => codes::analysis::INDEX_OUT_OF_RANGE,
            AnalysisError::NotAClassKeyword { .. } => codes::analysis::NOT_A_CLASS_KEYWORD,
            AnalysisError::MalformedDeclaration { .. } => codes::analysis::MALFORMED_DECLARATION,
            AnalysisError::UnbalancedDelimiters { .. } => codes::analysis::UNBALANCED_DELIMITERS,
            AnalysisError::NotAClauseKeyword { .. } => codes::analysis::NOT_A_CLAUSE_KEYWORD,
            AnalysisError::NotADelimiter { .. } => codes::analysis::NOT_A_DELIMITER,
        }
    }

    /// True when the declaration itself is unanalyzable, as opposed to a
    /// caller passing a bad index
    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        AnalysisError::MalformedDeclaration {
            index,
            reason: reason.into(),
        }
    }
}

impl From<TokenStreamError> for AnalysisError {
    fn from(error: TokenStreamError) -> Self {
        match error {
            TokenStreamError::IndexOutOfRange { index, len } => {
                AnalysisError::IndexOutOfRange { index, len }
            }
            TokenStreamError::UnbalancedDelimiters { open_index, .. } => {
                AnalysisError::UnbalancedDelimiters { open_index }
            }
            TokenStreamError::NotADelimiter { index, found } => {
                AnalysisError::NotADelimiter { index, found }
            }
        }
    }
}
