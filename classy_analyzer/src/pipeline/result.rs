use crate::analysis::{AnalysisError, ClassDefinition};
use crate::tokens::TokenStream;
use std::time::Duration;

/// A declaration the analyzer could not bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDeclaration {
    pub keyword_index: usize,
    pub error: AnalysisError,
}

/// Everything learned about one source text
#[derive(Debug, Clone)]
pub struct SourceAnalysis {
    pub stream: TokenStream,
    /// Analyzed declarations in keyword order
    pub definitions: Vec<ClassDefinition>,
    pub skipped: Vec<SkippedDeclaration>,
    pub processing_duration: Duration,
}

impl SourceAnalysis {
    /// Number of declaration keywords found
    pub fn declaration_count(&self) -> usize {
        self.definitions.len() + self.skipped.len()
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// The definition whose keyword sits at `keyword_index`
    pub fn definition_at(&self, keyword_index: usize) -> Option<&ClassDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.keyword_index == keyword_index)
    }

    pub fn log_success(&self) {
        crate::log_success!(
            crate::logging::codes::success::CLASSY_ANALYSIS_COMPLETE,
            "Classy declaration analysis completed",
            "tokens" => self.stream.len(),
            "definitions" => self.definitions.len(),
            "skipped" => self.skipped.len(),
            "duration_ms" => format!("{:.2}", self.processing_duration.as_secs_f64() * 1000.0)
        );
    }
}
