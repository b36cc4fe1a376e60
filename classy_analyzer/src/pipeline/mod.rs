mod error;
pub mod output;
mod result;

pub use error::PipelineError;
pub use output::{PipelineOutput, SkippedOutput};
pub use result::{SkippedDeclaration, SourceAnalysis};

use crate::analysis::ClassAnalyzer;
use crate::config::compile_time::analysis::DIAGNOSTIC_CONTEXT_RADIUS;
use crate::config::runtime::AnalysisPreferences;
use crate::lexical::{Lexer, LexicalAnalyzer};
use std::time::Instant;

/// Tokenize `source` and analyze every classy declaration in it
/// (source -> tokens -> keyword indices -> definitions)
pub fn analyze_source<L: Lexer>(lexer: &mut L, source: &str) -> Result<SourceAnalysis, PipelineError> {
    analyze_source_with_preferences(lexer, source, &AnalysisPreferences::default())
}

/// Same as [`analyze_source`] with explicit analysis preferences
pub fn analyze_source_with_preferences<L: Lexer>(
    lexer: &mut L,
    source: &str,
    preferences: &AnalysisPreferences,
) -> Result<SourceAnalysis, PipelineError> {
    let start_time = Instant::now();

    crate::log_info!("Starting classy declaration analysis",
        "bytes" => source.len(),
        "skip_unanalyzable" => preferences.skip_unanalyzable
    );

    let stream = lexer.tokenize(source)?;
    let analyzer = ClassAnalyzer::new(&stream);

    let mut definitions = Vec::new();
    let mut skipped = Vec::new();

    for keyword_index in analyzer.find_classy_indices() {
        match analyzer.get_class_definition(keyword_index) {
            Ok(definition) => {
                if preferences.log_definitions {
                    crate::log_debug!("Analyzed declaration",
                        "kind" => definition.kind,
                        "keyword_index" => keyword_index,
                        "open_brace_index" => definition.open_brace_index,
                        "anonymous" => definition.is_anonymous
                    );
                }
                definitions.push(definition);
            }
            Err(error) if preferences.skip_unanalyzable => {
                crate::log_warning!("Skipping unanalyzable declaration",
                    "keyword_index" => keyword_index,
                    "error_code" => error.error_code(),
                    "reason" => &error,
                    "near" => stream.context_snippet(keyword_index, DIAGNOSTIC_CONTEXT_RADIUS)
                );
                skipped.push(SkippedDeclaration {
                    keyword_index,
                    error,
                });
            }
            Err(error) => {
                crate::log_error!(error.error_code(), "Classy declaration analysis aborted",
                    "keyword_index" => keyword_index,
                    "reason" => &error,
                    "near" => stream.context_snippet(keyword_index, DIAGNOSTIC_CONTEXT_RADIUS)
                );
                return Err(error.into());
            }
        }
    }

    let analysis = SourceAnalysis {
        stream,
        definitions,
        skipped,
        processing_duration: start_time.elapsed(),
    };
    analysis.log_success();

    Ok(analysis)
}

/// Analyze with the reference lexer and default preferences
pub fn process_source(source: &str) -> Result<SourceAnalysis, PipelineError> {
    analyze_source(&mut LexicalAnalyzer::new(), source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisError, ClassyKind};
    use crate::lexical::LexerError;
    use crate::logging::{self, codes, LogLevel, LoggingService, MemoryLogger};
    use crate::tokens::TokenStream;
    use assert_matches::assert_matches;
    use std::sync::{Arc, OnceLock};

    fn memory_logger() -> Arc<MemoryLogger> {
        static LOGGER: OnceLock<Arc<MemoryLogger>> = OnceLock::new();
        LOGGER
            .get_or_init(|| {
                let logger = Arc::new(MemoryLogger::new());
                let service = LoggingService::new(logger.clone(), LogLevel::Debug);
                let _ = logging::init_global_logging_with_service(Arc::new(service));
                logger
            })
            .clone()
    }

    fn strict() -> AnalysisPreferences {
        AnalysisPreferences {
            skip_unanalyzable: false,
            log_definitions: false,
        }
    }

    /// Lexer that hands back a prepared stream
    struct FixedLexer(TokenStream);

    impl Lexer for FixedLexer {
        fn tokenize(&mut self, _source: &str) -> Result<TokenStream, LexerError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_analyzes_every_declaration() {
        let source = "<?php
interface Greets extends Named {}
final class Hello extends Base implements Greets, \\Countable
{
    public function make() { return new class(1) implements Greets {}; }
}
echo Hello::class;
";
        let analysis = process_source(source).unwrap();

        assert!(analysis.is_complete());
        assert_eq!(analysis.definitions.len(), 3);
        let kinds: Vec<ClassyKind> = analysis.definitions.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![ClassyKind::Interface, ClassyKind::Class, ClassyKind::Class]
        );
        assert_eq!(analysis.definitions[1].implements.unwrap().entry_count, 2);
        assert!(analysis.definitions[2].is_anonymous);
        assert_eq!(analysis.stream.source_text(), source);
    }

    #[test]
    fn test_skips_unanalyzable_declarations() {
        let logger = memory_logger();
        let analysis = process_source("new class(1, 2 {}; class Ok extends Base {}").unwrap();

        assert_eq!(analysis.declaration_count(), 2);
        assert_eq!(analysis.definitions.len(), 1);
        assert_eq!(
            analysis.skipped,
            vec![SkippedDeclaration {
                keyword_index: 2,
                error: AnalysisError::UnbalancedDelimiters { open_index: 3 },
            }]
        );
        assert!(analysis.definition_at(2).is_none());

        let warning = logger
            .get_warnings()
            .into_iter()
            .find(|event| {
                event.context.get("error_code").map(String::as_str)
                    == Some(codes::analysis::UNBALANCED_DELIMITERS.as_str())
            })
            .unwrap();
        assert_eq!(warning.context["near"], "new class(1, ");
    }

    #[test]
    fn test_strict_mode_aborts_on_first_failure() {
        let logger = memory_logger();
        let result = analyze_source_with_preferences(
            &mut LexicalAnalyzer::new(),
            "class Good {} trait Broken extends",
            &strict(),
        );

        assert_matches!(
            result,
            Err(PipelineError::Analysis(AnalysisError::MalformedDeclaration { .. }))
        );
        assert!(logger.has_error_with_code(codes::analysis::MALFORMED_DECLARATION));
    }

    #[test]
    fn test_lexer_errors_propagate() {
        let result = process_source("class A { /* never closed");
        let error = result.unwrap_err();
        assert_matches!(
            error,
            PipelineError::LexicalAnalysis(LexerError::UnterminatedComment { .. })
        );
        assert_eq!(error.error_code(), codes::lexical::UNTERMINATED_COMMENT);
    }

    #[test]
    fn test_accepts_any_lexer() {
        use crate::tokens::{TokenKind::*, TokenStreamBuilder};
        let stream = TokenStreamBuilder::new()
            .push_all(&[
                (TraitKeyword, "trait"),
                (Whitespace, " "),
                (Identifier, "T"),
                (OpenBrace, "{"),
                (CloseBrace, "}"),
            ])
            .build();

        let analysis = analyze_source(&mut FixedLexer(stream), "ignored").unwrap();
        assert_eq!(analysis.definitions.len(), 1);
        assert_eq!(analysis.definitions[0].open_brace_index, 3);
    }

    #[test]
    fn test_success_is_logged() {
        let logger = memory_logger();
        process_source("class Logged {}").unwrap();
        assert!(logger.has_success_with_code(codes::success::CLASSY_ANALYSIS_COMPLETE));
    }

    #[test]
    fn test_output_serializes_to_json() {
        let analysis = process_source("class A implements B, C {} class D extends ;").unwrap();
        let output = PipelineOutput::new(&analysis);

        assert_eq!(output.definitions.len(), 1);
        assert_eq!(output.skipped.len(), 1);
        assert_eq!(output.skipped[0].code, "E062");

        let json = output.to_json().unwrap();
        let parsed: PipelineOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, output);
    }

    #[test]
    fn test_pipeline_error_code() {
        let error = PipelineError::pipeline_error("bad state");
        assert_eq!(error.error_code(), codes::system::INTERNAL_ERROR);
        assert_eq!(error.to_string(), "Pipeline error: bad state");
    }
}
