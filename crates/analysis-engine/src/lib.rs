//! Legal document analysis engine
//!
//! Flags two classes of defects in statutory or contractual text:
//! references to article numbers that are never declared, and pairs of
//! articles carrying opposing obligations. Detection is deterministic
//! pattern matching over normalized text; the engine performs no I/O and
//! holds no state across calls, so it can be embedded behind any
//! transport.
//!
//! Surface forms live in the rule tables of [`patterns`]; opposing
//! phrases live in the injectable [`catalog`].

pub mod catalog;
pub mod index;
pub mod patterns;
pub mod rules;

use shared_types::{AnalysisReport, AnalysisStatus, Issue, LegalDocument};

pub use catalog::{default_catalog, CatalogError, ContradictionCatalog, PhrasePair};
pub use index::{build_article_index, Article, ArticleIndex};
pub use patterns::PatternRule;

/// Analysis entry point. Owns the contradiction catalog; everything else
/// is computed fresh per call.
pub struct AnalysisEngine {
    catalog: ContradictionCatalog,
}

impl AnalysisEngine {
    /// Engine with the built-in opposing-phrase catalog.
    pub fn new() -> Self {
        Self {
            catalog: ContradictionCatalog::default(),
        }
    }

    /// Engine with an injected catalog.
    pub fn with_catalog(catalog: ContradictionCatalog) -> Self {
        Self { catalog }
    }

    /// Analyze a document's lines.
    ///
    /// Builds the article index once, runs the reference pass, then the
    /// contradiction pass, and returns their issues in that order. Never
    /// fails: documents without structure simply yield fewer or zero
    /// issues.
    pub fn analyze_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Issue> {
        let article_index = index::build_article_index(lines);
        let mut issues = rules::check_references(lines, &article_index);
        issues.extend(rules::check_contradictions(&article_index, &self.catalog));
        issues
    }

    /// Analyze raw text, split on line breaks.
    pub fn analyze_text(&self, text: &str) -> Vec<Issue> {
        let lines: Vec<&str> = text.lines().collect();
        self.analyze_lines(&lines)
    }

    /// Analyze a document and assemble the report envelope.
    pub fn analyze_document(&self, document: &LegalDocument) -> AnalysisReport {
        let issues = self.analyze_lines(&document.text_content);
        AnalysisReport {
            document: document.filename.clone(),
            issues,
            status: AnalysisStatus::Completed,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for arbitrary document lines, including Cyrillic text,
    /// marker words, and numbers.
    fn document_lines() -> impl Strategy<Value = Vec<String>> {
        let line = prop_oneof![
            ".{0,60}",
            "(статья|Article|ст\\.|art\\.|пункт|clause) ?[0-9]{0,3}(\\.[0-9]{0,2})?( [а-яa-z ]{0,30})?",
            "(согласие|без согласия|запрещается|разрешается)( [а-я]{1,10}){0,3}",
        ];
        prop::collection::vec(line, 0..30)
    }

    proptest! {
        #[test]
        fn analyze_never_panics(lines in document_lines()) {
            let engine = AnalysisEngine::new();
            let _ = engine.analyze_lines(&lines);
        }

        #[test]
        fn analyze_is_deterministic(lines in document_lines()) {
            let engine = AnalysisEngine::new();
            prop_assert_eq!(engine.analyze_lines(&lines), engine.analyze_lines(&lines));
        }

        #[test]
        fn every_issue_is_fully_described(lines in document_lines()) {
            let engine = AnalysisEngine::new();
            for issue in engine.analyze_lines(&lines) {
                prop_assert!(!issue.description.is_empty());
                prop_assert!(!issue.location.is_empty());
            }
        }

        #[test]
        fn resolved_documents_have_no_missing_references(id in 1u32..500) {
            let engine = AnalysisEngine::new();
            let lines = vec![
                format!("Статья {}. Предмет.", id),
                format!("см. ст. {}", id),
            ];
            let issues = engine.analyze_lines(&lines);
            prop_assert!(issues
                .iter()
                .all(|i| i.issue_type != shared_types::IssueType::MissingReference));
        }
    }
}
