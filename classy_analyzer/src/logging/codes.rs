//! Error and success codes with their classification metadata

use std::fmt;

/// Stable identifier attached to every log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Classification of one error code
#[derive(Debug, Clone, Copy)]
pub struct ErrorMetadata {
    pub code: Code,
    pub category: &'static str,
    pub severity: Severity,
    /// The caller can keep going past this failure
    pub recoverable: bool,
    /// Processing of the current source must stop
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

pub mod lexical {
    use super::Code;

    pub const UNTERMINATED_COMMENT: Code = Code::new("E020");
    pub const UNTERMINATED_STRING: Code = Code::new("E021");
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E022");
    pub const COMMENT_TOO_LONG: Code = Code::new("E023");
    pub const TOO_MANY_TOKENS: Code = Code::new("E024");
    pub const STRING_TOO_LARGE: Code = Code::new("E025");
}

/// Classy declaration analysis
pub mod analysis {
    use super::Code;

    pub const INDEX_OUT_OF_RANGE: Code = Code::new("E060");
    pub const NOT_A_CLASS_KEYWORD: Code = Code::new("E061");
    pub const MALFORMED_DECLARATION: Code = Code::new("E062");
    pub const UNBALANCED_DELIMITERS: Code = Code::new("E063");
    pub const NOT_A_CLAUSE_KEYWORD: Code = Code::new("E064");
    pub const NOT_A_DELIMITER: Code = Code::new("E065");
}

pub mod success {
    use super::Code;

    pub const OPERATION_COMPLETED_SUCCESSFULLY: Code = Code::new("I001");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const CLASSY_ANALYSIS_COMPLETE: Code = Code::new("I060");
}

const fn entry(
    code: Code,
    category: &'static str,
    severity: Severity,
    halts: bool,
    description: &'static str,
    recommended_action: &'static str,
) -> ErrorMetadata {
    ErrorMetadata {
        code,
        category,
        severity,
        recoverable: !halts,
        requires_halt: halts,
        description,
        recommended_action,
    }
}

/// Halting errors stop the current source; the others only affect a single
/// declaration or a single caller request.
static REGISTRY: &[ErrorMetadata] = &[
    entry(
        system::INTERNAL_ERROR,
        "System",
        Severity::Critical,
        true,
        "Critical internal error",
        "File a bug report with the failing input",
    ),
    entry(
        system::INITIALIZATION_FAILURE,
        "System",
        Severity::Critical,
        true,
        "Logging or configuration could not be initialized",
        "Check the CLASSY_* environment and configuration file",
    ),
    entry(
        lexical::UNTERMINATED_COMMENT,
        "Lexical",
        Severity::High,
        true,
        "Block comment is never closed",
        "Close the comment with */",
    ),
    entry(
        lexical::UNTERMINATED_STRING,
        "Lexical",
        Severity::High,
        true,
        "String literal is never closed",
        "Add the closing quote",
    ),
    entry(
        lexical::IDENTIFIER_TOO_LONG,
        "Lexical",
        Severity::Medium,
        true,
        "Identifier exceeds maximum length",
        "Shorten the identifier",
    ),
    entry(
        lexical::COMMENT_TOO_LONG,
        "Lexical",
        Severity::Medium,
        true,
        "Comment exceeds maximum length",
        "Split the comment",
    ),
    entry(
        lexical::TOO_MANY_TOKENS,
        "Lexical",
        Severity::High,
        true,
        "Source produces too many tokens",
        "Split the source into smaller units",
    ),
    entry(
        lexical::STRING_TOO_LARGE,
        "Lexical",
        Severity::Medium,
        true,
        "String literal exceeds maximum size",
        "Move the literal content out of the source",
    ),
    entry(
        analysis::INDEX_OUT_OF_RANGE,
        "Analysis",
        Severity::High,
        true,
        "Token index is outside the stream",
        "Pass an index obtained from the same stream",
    ),
    entry(
        analysis::NOT_A_CLASS_KEYWORD,
        "Analysis",
        Severity::High,
        true,
        "Token is not a class, interface or trait keyword",
        "Pass the index of the declaration keyword",
    ),
    entry(
        analysis::MALFORMED_DECLARATION,
        "Analysis",
        Severity::Medium,
        false,
        "Declaration has no reachable opening brace",
        "Leave this declaration untouched",
    ),
    entry(
        analysis::UNBALANCED_DELIMITERS,
        "Analysis",
        Severity::Medium,
        false,
        "Constructor argument parentheses are never closed",
        "Leave this declaration untouched",
    ),
    entry(
        analysis::NOT_A_CLAUSE_KEYWORD,
        "Analysis",
        Severity::High,
        true,
        "Token is not an extends or implements keyword",
        "Pass the index of the clause keyword",
    ),
    entry(
        analysis::NOT_A_DELIMITER,
        "Analysis",
        Severity::High,
        true,
        "Token is not an opening brace or parenthesis",
        "Pass the index of an opening delimiter",
    ),
];

pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    REGISTRY.iter().find(|metadata| metadata.code.as_str() == code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code).map_or(Severity::Medium, |m| m.severity)
}

/// Unknown codes are treated as recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code).map_or(true, |m| m.recoverable)
}

pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code).map_or(false, |m| m.requires_halt)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code).map_or("Unknown error", |m| m.description)
}

pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code).map_or("No specific action available", |m| m.recommended_action)
}

pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code).map_or("Unknown", |m| m.category)
}
