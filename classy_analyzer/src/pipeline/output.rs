use super::result::{SkippedDeclaration, SourceAnalysis};
use crate::analysis::ClassDefinition;
use serde::{Deserialize, Serialize};

/// Serializable summary of a [`SourceAnalysis`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub definitions: Vec<ClassDefinition>,
    pub skipped: Vec<SkippedOutput>,
}

/// A skipped declaration reduced to its code and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedOutput {
    pub keyword_index: usize,
    pub code: String,
    pub message: String,
}

impl From<&SkippedDeclaration> for SkippedOutput {
    fn from(skipped: &SkippedDeclaration) -> Self {
        Self {
            keyword_index: skipped.keyword_index,
            code: skipped.error.error_code().as_str().to_string(),
            message: skipped.error.to_string(),
        }
    }
}

impl PipelineOutput {
    pub fn new(analysis: &SourceAnalysis) -> Self {
        Self {
            definitions: analysis.definitions.clone(),
            skipped: analysis.skipped.iter().map(SkippedOutput::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
