//! Classy declaration analyzer
//!
//! Walks a [`TokenStream`] forward from a `class`, `interface` or `trait`
//! keyword to its opening brace and describes the `extends` and `implements`
//! clauses found on the way. The analyzer is a read-only view: it never
//! mutates the stream and never logs; failures are returned to the caller.

use super::error::AnalysisError;
use super::types::{ClassDefinition, ClassyKind, ClauseKind, InheritanceClause};
use crate::tokens::{TokenKind, TokenStream, CLASSY_KEYWORDS, TRIVIA};

/// Operator texts after which a classy keyword is a class-name fetch
/// (`Foo::class`, `$o->class`), not a declaration
const MEMBER_ACCESS_OPERATORS: &[&str] = &["::", "->", "?->"];

/// What the walk from keyword to opening brace found
#[derive(Debug, Clone, Copy)]
struct DeclarationHeader {
    kind: ClassyKind,
    is_anonymous: bool,
    open_brace_index: usize,
    extends_index: Option<usize>,
    implements_index: Option<usize>,
}

/// Read-only analyzer over one token stream
#[derive(Debug, Clone, Copy)]
pub struct ClassAnalyzer<'a> {
    stream: &'a TokenStream,
}

impl<'a> ClassAnalyzer<'a> {
    pub fn new(stream: &'a TokenStream) -> Self {
        Self { stream }
    }

    pub fn stream(&self) -> &'a TokenStream {
        self.stream
    }

    /// True if the closest significant token before `keyword_index` is `new`
    pub fn is_anonymous_class(&self, keyword_index: usize) -> Result<bool, AnalysisError> {
        self.stream.ensure_index(keyword_index)?;

        let previous = self
            .stream
            .find_previous_significant(keyword_index)
            .and_then(|index| self.stream.kind_at(index));

        Ok(previous == Some(TokenKind::NewKeyword))
    }

    /// The declaration's `extends` clause, if any
    pub fn get_class_extends(
        &self,
        keyword_index: usize,
    ) -> Result<Option<InheritanceClause>, AnalysisError> {
        let header = self.scan_header(keyword_index)?;
        Ok(self.extends_clause(&header))
    }

    /// The declaration's `implements` clause, if any
    pub fn get_class_implements(
        &self,
        keyword_index: usize,
    ) -> Result<Option<InheritanceClause>, AnalysisError> {
        let header = self.scan_header(keyword_index)?;
        Ok(self.implements_clause(&header))
    }

    /// Full structural description of the declaration at `keyword_index`
    pub fn get_class_definition(
        &self,
        keyword_index: usize,
    ) -> Result<ClassDefinition, AnalysisError> {
        let header = self.scan_header(keyword_index)?;

        Ok(ClassDefinition {
            start_index: keyword_index,
            keyword_index,
            open_brace_index: header.open_brace_index,
            extends: self.extends_clause(&header),
            implements: self.implements_clause(&header),
            is_anonymous: header.is_anonymous,
            kind: header.kind,
        })
    }

    /// Describe the clause starting at an `extends` or `implements` keyword.
    ///
    /// The clause ends at the next opening brace or clause keyword.
    pub fn get_class_inheritance_info(
        &self,
        clause_keyword_index: usize,
    ) -> Result<InheritanceClause, AnalysisError> {
        let token = self.stream.at(clause_keyword_index)?;
        let kind =
            ClauseKind::from_token_kind(token.kind).ok_or(AnalysisError::NotAClauseKeyword {
                index: clause_keyword_index,
                found: token.kind,
            })?;

        let boundary = self
            .stream
            .find_next(
                clause_keyword_index,
                &[
                    TokenKind::OpenBrace,
                    TokenKind::ImplementsKeyword,
                    TokenKind::ExtendsKeyword,
                ],
                TRIVIA,
            )
            .ok_or_else(|| {
                AnalysisError::malformed(
                    clause_keyword_index,
                    "no opening brace or clause keyword follows the clause",
                )
            })?;

        Ok(self.clause_info(clause_keyword_index, boundary, kind))
    }

    /// Declaration keywords in ascending order, excluding class-name fetches
    pub fn find_classy_indices(&self) -> Vec<usize> {
        self.stream
            .find_all_of_kinds(CLASSY_KEYWORDS)
            .into_iter()
            .filter(|&index| !self.is_class_name_fetch(index))
            .collect()
    }

    /// Analyze every declaration found by [`Self::find_classy_indices`]
    pub fn analyze_all(&self) -> Vec<Result<ClassDefinition, AnalysisError>> {
        self.find_classy_indices()
            .into_iter()
            .map(|index| self.get_class_definition(index))
            .collect()
    }

    // ========================================================================
    // HEADER WALK AND CLAUSE SCANNING
    // ========================================================================

    fn is_class_name_fetch(&self, index: usize) -> bool {
        self.stream
            .find_previous_significant(index)
            .and_then(|previous| self.stream.get(previous))
            .map(|token| MEMBER_ACCESS_OPERATORS.contains(&token.text.as_str()))
            .unwrap_or(false)
    }

    /// Walk from the keyword to the first top-level opening brace.
    ///
    /// Only qualified names, commas, one `extends`, one later `implements`,
    /// and (for anonymous classes) one leading argument list may appear on
    /// the way. Each clause keyword and each comma must be followed by a
    /// name. Anything else means the declaration cannot be bounded.
    fn scan_header(&self, keyword_index: usize) -> Result<DeclarationHeader, AnalysisError> {
        let token = self.stream.at(keyword_index)?;
        let kind = ClassyKind::from_token_kind(token.kind).ok_or(AnalysisError::NotAClassKeyword {
            index: keyword_index,
            found: token.kind,
        })?;
        let is_anonymous = self.is_anonymous_class(keyword_index)?;

        let mut extends_index = None;
        let mut implements_index = None;
        let mut arguments_skipped = false;
        let mut awaiting_name = false;
        let mut cursor = keyword_index;

        loop {
            let index = self.stream.find_next_significant(cursor).ok_or_else(|| {
                AnalysisError::malformed(keyword_index, "stream ends before the opening brace")
            })?;
            let found = self.stream.at(index)?;

            if awaiting_name && !found.kind.is_name_part() {
                return Err(AnalysisError::malformed(
                    keyword_index,
                    format!(
                        "expected a type name but found {} '{}' at index {}",
                        found.kind, found.text, index
                    ),
                ));
            }

            cursor = match found.kind {
                TokenKind::OpenBrace => {
                    return Ok(DeclarationHeader {
                        kind,
                        is_anonymous,
                        open_brace_index: index,
                        extends_index,
                        implements_index,
                    });
                }
                part if part.is_name_part() => {
                    awaiting_name = false;
                    index
                }
                TokenKind::Comma if extends_index.is_some() || implements_index.is_some() => {
                    awaiting_name = true;
                    index
                }
                TokenKind::ExtendsKeyword
                    if extends_index.is_none() && implements_index.is_none() =>
                {
                    extends_index = Some(index);
                    awaiting_name = true;
                    index
                }
                TokenKind::ImplementsKeyword if implements_index.is_none() => {
                    implements_index = Some(index);
                    awaiting_name = true;
                    index
                }
                TokenKind::OpenParen
                    if is_anonymous
                        && !arguments_skipped
                        && extends_index.is_none()
                        && implements_index.is_none() =>
                {
                    arguments_skipped = true;
                    self.stream.matching_closer(index)?
                }
                other => {
                    return Err(AnalysisError::malformed(
                        keyword_index,
                        format!(
                            "unexpected {} '{}' at index {} before the opening brace",
                            other, found.text, index
                        ),
                    ));
                }
            };
        }
    }

    fn extends_clause(&self, header: &DeclarationHeader) -> Option<InheritanceClause> {
        let start = header.extends_index?;
        let boundary = header.implements_index.unwrap_or(header.open_brace_index);
        Some(self.clause_info(start, boundary, ClauseKind::Extends))
    }

    fn implements_clause(&self, header: &DeclarationHeader) -> Option<InheritanceClause> {
        let start = header.implements_index?;
        Some(self.clause_info(start, header.open_brace_index, ClauseKind::Implements))
    }

    fn clause_info(&self, start: usize, boundary: usize, kind: ClauseKind) -> InheritanceClause {
        let entry_count = 1 + self
            .stream
            .count_kind_between(start, boundary, TokenKind::Comma);
        let scan_end = self.line_scan_end(start, boundary);

        InheritanceClause {
            start_index: start,
            entry_count,
            spans_multiple_lines: self.stream.any_line_break_between(start, scan_end),
            kind,
        }
    }

    /// Exclusive end of the region checked for line breaks.
    ///
    /// Before an opening brace, trailing whitespace is dropped, and so is a
    /// trailing line comment since its text carries its own newline.
    fn line_scan_end(&self, start: usize, boundary: usize) -> usize {
        if self.stream.kind_at(boundary) != Some(TokenKind::OpenBrace) {
            return boundary;
        }

        match self.stream.find_previous_non_whitespace(boundary) {
            Some(last) if last > start => {
                if self.stream.kind_at(last) == Some(TokenKind::LineComment) {
                    last
                } else {
                    last + 1
                }
            }
            _ => start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::tokenize;
    use crate::tokens::TokenStreamBuilder;
    use assert_matches::assert_matches;

    fn lex(source: &str) -> TokenStream {
        tokenize(source).unwrap()
    }

    /// Index of the `nth` token of `kind`
    fn nth_of(stream: &TokenStream, kind: TokenKind, nth: usize) -> usize {
        stream.find_all_of_kinds(&[kind])[nth]
    }

    fn first_definition(source: &str) -> (TokenStream, ClassDefinition) {
        let stream = lex(source);
        let analyzer = ClassAnalyzer::new(&stream);
        let keyword = analyzer.find_classy_indices()[0];
        let definition = analyzer.get_class_definition(keyword).unwrap();
        (stream, definition)
    }

    fn clause(
        start_index: usize,
        entry_count: usize,
        spans_multiple_lines: bool,
        kind: ClauseKind,
    ) -> Option<InheritanceClause> {
        Some(InheritanceClause {
            start_index,
            entry_count,
            spans_multiple_lines,
            kind,
        })
    }

    #[test]
    fn test_extends_only() {
        let (stream, definition) = first_definition("class Nakano extends Izumi {}");

        assert_eq!(
            definition,
            ClassDefinition {
                start_index: 0,
                keyword_index: 0,
                open_brace_index: nth_of(&stream, TokenKind::OpenBrace, 0),
                extends: clause(4, 1, false, ClauseKind::Extends),
                implements: None,
                is_anonymous: false,
                kind: ClassyKind::Class,
            }
        );
    }

    #[test]
    fn test_no_extends() {
        let stream = lex("class Izumi {}");
        let analyzer = ClassAnalyzer::new(&stream);
        assert_eq!(analyzer.get_class_extends(0), Ok(None));
        assert_eq!(analyzer.get_class_implements(0), Ok(None));
    }

    #[test]
    fn test_extends_and_implements() {
        let (stream, definition) =
            first_definition("class Nakano extends Izumi implements CatInterface {}");

        assert_eq!(definition.extends, clause(4, 1, false, ClauseKind::Extends));
        assert_eq!(
            definition.implements,
            clause(
                nth_of(&stream, TokenKind::ImplementsKeyword, 0),
                1,
                false,
                ClauseKind::Implements
            )
        );
        assert_eq!(definition.open_brace_index, 12);
    }

    #[test]
    fn test_anonymous_without_clauses() {
        let (_, definition) = first_definition("new class {};");

        assert!(definition.is_anonymous);
        assert_eq!(definition.keyword_index, 2);
        assert_eq!(definition.start_index, 2);
        assert_eq!(definition.open_brace_index, 4);
        assert!(!definition.has_extends());
        assert!(!definition.has_implements());
    }

    #[test]
    fn test_line_break_before_brace_is_not_multi_line() {
        let (_, definition) = first_definition("class X implements Z, T, R\n{\n}");
        let implements = definition.implements.unwrap();
        assert_eq!(implements.entry_count, 3);
        assert!(!implements.spans_multiple_lines);
    }

    #[test]
    fn test_line_break_between_entries_is_multi_line() {
        let (_, definition) = first_definition("class A implements B,\n C{}");
        let implements = definition.implements.unwrap();
        assert_eq!(implements.entry_count, 2);
        assert!(implements.spans_multiple_lines);
    }

    #[test]
    fn test_trailing_line_comment_is_not_multi_line() {
        let (_, definition) = first_definition("class A implements B,T,R    //\n{\n}");
        let implements = definition.implements.unwrap();
        assert_eq!(implements.entry_count, 3);
        assert!(!implements.spans_multiple_lines);
    }

    #[test]
    fn test_trailing_block_comment_with_line_break_is_multi_line() {
        let (_, definition) = first_definition("class A implements B /* x\n */ {}");
        assert!(definition.implements.unwrap().spans_multiple_lines);

        let (_, definition) = first_definition("class A implements B /* x */\n{}");
        assert!(!definition.implements.unwrap().spans_multiple_lines);
    }

    #[test]
    fn test_anonymous_with_arguments_and_clauses() {
        let source = "new class(3) extends\nSomeClass implements SomeInterface, D {}";
        let (stream, definition) = first_definition(source);

        assert!(definition.is_anonymous);
        let extends = definition.extends.unwrap();
        assert_eq!(extends.start_index, nth_of(&stream, TokenKind::ExtendsKeyword, 0));
        assert_eq!(extends.entry_count, 1);
        assert!(extends.spans_multiple_lines);

        let implements = definition.implements.unwrap();
        assert_eq!(implements.entry_count, 2);
        assert!(!implements.spans_multiple_lines);
    }

    #[test]
    fn test_qualified_names_count_once() {
        let (_, definition) = first_definition("class A implements Z\\C\\B,C,D  {\n\n\n}");
        let implements = definition.implements.unwrap();
        assert_eq!(implements.entry_count, 3);
        assert!(!implements.spans_multiple_lines);
    }

    #[test]
    fn test_clauses_split_by_comments() {
        let source = "<?php
namespace A {
    interface C {}
}

namespace {
    class B{}

    class A extends //
        B     implements /*  */ \\A
        \\C, Z{
        public function test()
        {
            echo 1;
        }
    }

    $a = new A();
    $a->test();
}";
        let stream = lex(source);
        let analyzer = ClassAnalyzer::new(&stream);
        let keywords = analyzer.find_classy_indices();
        assert_eq!(keywords.len(), 3);

        let definition = analyzer.get_class_definition(keywords[2]).unwrap();
        let extends = definition.extends.unwrap();
        assert_eq!(extends.entry_count, 1);
        assert!(extends.spans_multiple_lines);

        let implements = definition.implements.unwrap();
        assert_eq!(implements.entry_count, 2);
        assert!(implements.spans_multiple_lines);
        assert_eq!(
            analyzer
                .get_class_inheritance_info(implements.start_index)
                .unwrap(),
            implements
        );
    }

    #[test]
    fn test_anonymous_clause_line_breaks() {
        let (_, definition) = first_definition(
            "$a = new class(4) extends\nSomeClass\timplements SomeInterface, D\n\n{};",
        );
        assert!(definition.extends.unwrap().spans_multiple_lines);
        let implements = definition.implements.unwrap();
        assert_eq!(implements.entry_count, 2);
        assert!(!implements.spans_multiple_lines);

        let (_, definition) = first_definition(
            "$a = new class(5) extends SomeClass\nimplements    SomeInterface, D {};",
        );
        assert!(definition.extends.unwrap().spans_multiple_lines);
        assert!(!definition.implements.unwrap().spans_multiple_lines);
    }

    #[test]
    fn test_inheritance_info_from_clause_keyword() {
        let stream = lex("class X11 implements    Z   , T,R\n{\n}");
        let analyzer = ClassAnalyzer::new(&stream);
        let implements = nth_of(&stream, TokenKind::ImplementsKeyword, 0);

        let info = analyzer.get_class_inheritance_info(implements).unwrap();
        assert_eq!(info.start_index, implements);
        assert_eq!(info.entry_count, 3);
        assert!(!info.spans_multiple_lines);
        assert_eq!(info.label(), "numberOfImplements");
    }

    #[test]
    fn test_inheritance_info_failures() {
        let stream = lex("class A extends B");
        let analyzer = ClassAnalyzer::new(&stream);

        assert_matches!(
            analyzer.get_class_inheritance_info(0),
            Err(AnalysisError::NotAClauseKeyword {
                index: 0,
                found: TokenKind::ClassKeyword
            })
        );
        assert_matches!(
            analyzer.get_class_inheritance_info(4),
            Err(AnalysisError::MalformedDeclaration { index: 4, .. })
        );
        assert_matches!(
            analyzer.get_class_inheritance_info(40),
            Err(AnalysisError::IndexOutOfRange { index: 40, .. })
        );
    }

    #[test]
    fn test_interface_and_trait_kinds() {
        let (_, definition) = first_definition("interface I extends A, \\B\\C {}");
        assert_eq!(definition.kind, ClassyKind::Interface);
        assert_eq!(definition.extends.unwrap().entry_count, 2);

        let (_, definition) = first_definition("trait T {}");
        assert_eq!(definition.kind, ClassyKind::Trait);
        assert_eq!(definition.extends, None);
    }

    #[test]
    fn test_keywords_match_case_insensitively() {
        let (_, definition) = first_definition("CLASS A EXTENDS B IMPLEMENTS C {}");
        assert!(definition.has_extends());
        assert!(definition.has_implements());
    }

    #[test]
    fn test_hand_built_stream() {
        use TokenKind::*;
        let stream = TokenStreamBuilder::new()
            .push_all(&[
                (ClassKeyword, "class"),
                (Whitespace, " "),
                (Identifier, "A"),
                (Whitespace, " "),
                (ImplementsKeyword, "implements"),
                (Whitespace, " "),
                (Identifier, "B"),
                (Comma, ","),
                (Whitespace, "\n"),
                (Identifier, "C"),
                (OpenBrace, "{"),
                (CloseBrace, "}"),
            ])
            .build();

        let definition = ClassAnalyzer::new(&stream).get_class_definition(0).unwrap();
        assert_eq!(definition.open_brace_index, 10);
        assert_eq!(definition.implements, clause(4, 2, true, ClauseKind::Implements));
    }

    #[test]
    fn test_not_a_class_keyword() {
        let stream = lex("class A extends B {}");
        let analyzer = ClassAnalyzer::new(&stream);

        assert_matches!(
            analyzer.get_class_definition(2),
            Err(AnalysisError::NotAClassKeyword {
                index: 2,
                found: TokenKind::Identifier
            })
        );
        assert_matches!(
            analyzer.get_class_extends(4),
            Err(AnalysisError::NotAClassKeyword { .. })
        );
        assert_matches!(
            analyzer.get_class_implements(1),
            Err(AnalysisError::NotAClassKeyword { .. })
        );
    }

    #[test]
    fn test_index_out_of_range() {
        let stream = lex("class A {}");
        let analyzer = ClassAnalyzer::new(&stream);

        assert_matches!(
            analyzer.get_class_definition(100),
            Err(AnalysisError::IndexOutOfRange { index: 100, len: 6 })
        );
        assert_matches!(
            analyzer.is_anonymous_class(6),
            Err(AnalysisError::IndexOutOfRange { index: 6, len: 6 })
        );
    }

    #[test]
    fn test_malformed_declarations() {
        let sources = [
            "class A extends B",
            "class A extends B;",
            "class A(1) {}",
            "class A extends B extends C {}",
            "class A implements B extends C {}",
            "class A implements B implements C {}",
            "new class(1) (2) {}",
            "new class extends B (1) {}",
            "class A , B {}",
        ];

        for source in sources {
            let stream = lex(source);
            let analyzer = ClassAnalyzer::new(&stream);
            let keyword = nth_of(&stream, TokenKind::ClassKeyword, 0);
            assert_matches!(
                analyzer.get_class_definition(keyword),
                Err(AnalysisError::MalformedDeclaration { index, .. }) if index == keyword,
                "{}",
                source
            );
        }
    }

    #[test]
    fn test_clause_without_names_is_malformed() {
        let sources = [
            "class A implements {}",
            "class A extends , {}",
            "class A extends B, {}",
            "class A implements B,, C {}",
            "class A extends implements B {}",
            "new class(1) extends {}",
        ];

        for source in sources {
            let stream = lex(source);
            let keyword = nth_of(&stream, TokenKind::ClassKeyword, 0);
            assert_matches!(
                ClassAnalyzer::new(&stream).get_class_definition(keyword),
                Err(AnalysisError::MalformedDeclaration { index, ref reason })
                    if index == keyword && reason.starts_with("expected a type name"),
                "{}",
                source
            );
        }
    }

    #[test]
    fn test_unbalanced_constructor_arguments() {
        let stream = lex("new class(1, 2 {}");
        let analyzer = ClassAnalyzer::new(&stream);
        assert_matches!(
            analyzer.get_class_definition(2),
            Err(AnalysisError::UnbalancedDelimiters { open_index: 3 })
        );
    }

    #[test]
    fn test_nested_constructor_arguments_are_skipped() {
        let (stream, definition) = first_definition("new class($a, f(1), [2]) implements I {}");
        assert!(definition.is_anonymous);
        assert_eq!(definition.open_brace_index, nth_of(&stream, TokenKind::OpenBrace, 0));
        assert_eq!(definition.implements.unwrap().entry_count, 1);
    }

    #[test]
    fn test_anonymous_detection_skips_trivia() {
        let stream = lex("new /* c */\n class {}");
        let analyzer = ClassAnalyzer::new(&stream);
        let keyword = nth_of(&stream, TokenKind::ClassKeyword, 0);
        assert_eq!(analyzer.is_anonymous_class(keyword), Ok(true));

        let stream = lex("class A {}");
        assert_eq!(ClassAnalyzer::new(&stream).is_anonymous_class(0), Ok(false));
    }

    #[test]
    fn test_find_classy_indices_skips_class_name_fetches() {
        let stream = lex("$x = Foo::class; $y = $o->class; $z = $o?->class; class A {} trait T {}");
        let analyzer = ClassAnalyzer::new(&stream);

        let indices = analyzer.find_classy_indices();
        assert_eq!(indices.len(), 2);
        assert_eq!(stream.kind_at(indices[0]), Some(TokenKind::ClassKeyword));
        assert_eq!(stream.kind_at(indices[1]), Some(TokenKind::TraitKeyword));
        assert!(indices[0] < indices[1]);
    }

    #[test]
    fn test_analyze_all_reports_each_declaration() {
        let stream = lex("class A extends B {} class C extends ; interface I {}");
        let results = ClassAnalyzer::new(&stream).analyze_all();

        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().unwrap().has_extends());
        assert_matches!(results[1], Err(AnalysisError::MalformedDeclaration { .. }));
        assert_eq!(results[2].as_ref().unwrap().kind, ClassyKind::Interface);
    }

    #[test]
    fn test_text_before_open_tag_is_not_analyzed() {
        let stream = lex("Hello class world <?php class A {}");
        let results = ClassAnalyzer::new(&stream).analyze_all();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].as_ref().unwrap().keyword_index, 3);
    }

    #[test]
    fn test_structural_invariants() {
        let sources = [
            "class Nakano extends Izumi implements CatInterface {}",
            "new class(3) extends\nSomeClass implements SomeInterface, D {}",
            "$o = new class implements A, B, C {};",
            "interface I extends A, B {}",
            "class A implements B,T,R    //\n{\n}",
        ];

        for source in sources {
            let stream = lex(source);
            let analyzer = ClassAnalyzer::new(&stream);
            for keyword in analyzer.find_classy_indices() {
                let definition = analyzer.get_class_definition(keyword).unwrap();

                assert_eq!(analyzer.get_class_definition(keyword).unwrap(), definition);
                assert!(definition.keyword_index < definition.open_brace_index);
                for clause in definition.inheritance_clauses() {
                    assert!(clause.entry_count >= 1);
                    assert!(clause.start_index > definition.keyword_index);
                    assert!(clause.start_index < definition.open_brace_index);
                }
                if let (Some(extends), Some(implements)) =
                    (definition.extends, definition.implements)
                {
                    assert!(extends.start_index < implements.start_index);
                }
                if definition.is_anonymous {
                    let previous = stream.find_previous_significant(keyword).unwrap();
                    assert_eq!(stream.kind_at(previous), Some(TokenKind::NewKeyword));
                }
            }
        }
    }

    #[test]
    fn test_shared_stream_across_threads() {
        let stream = lex("class A extends B implements C, D {} new class {};");

        let (first, second) = std::thread::scope(|scope| {
            let a = scope.spawn(|| ClassAnalyzer::new(&stream).analyze_all());
            let b = scope.spawn(|| ClassAnalyzer::new(&stream).analyze_all());
            (a.join().unwrap(), b.join().unwrap())
        });

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
