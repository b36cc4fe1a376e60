//! Structural analysis of classy declarations (`class`, `interface`,
//! `trait`) over a lexed token stream.
//!
//! ```text
//! source --Lexer--> TokenStream --ClassAnalyzer--> ClassDefinition
//! ```

#[macro_use]
pub mod logging;

pub mod analysis;
pub mod config;
pub mod lexical;
pub mod pipeline;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use analysis::{
    AnalysisError, ClassAnalyzer, ClassDefinition, ClassyKind, ClauseKind, InheritanceClause,
};
pub use lexical::{Lexer, LexerError, LexicalAnalyzer};
pub use pipeline::{analyze_source, process_source, PipelineError, SourceAnalysis};
pub use tokens::{Token, TokenKind, TokenStream, TokenStreamBuilder};

// Serializable pipeline summary
pub use pipeline::output::PipelineOutput;
