//! Missing-reference detection

use std::collections::HashSet;

use shared_types::{Issue, IssueType, Severity};

use crate::index::ArticleIndex;
use crate::patterns::{line_snippet, REFERENCE_RULES};

/// Scan every line for inline article references and report identifiers
/// no declaration covers.
///
/// One issue per distinct missing identifier; the first offending line is
/// the one reported. Line scan and rule order are fixed, so the chosen
/// representative line is the same on every run.
pub fn check_references<S: AsRef<str>>(lines: &[S], index: &ArticleIndex) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut reported: HashSet<String> = HashSet::new();

    for (offset, raw) in lines.iter().enumerate() {
        let line = raw.as_ref();
        for rule in REFERENCE_RULES.iter() {
            for id in rule.identifiers(line) {
                if index.contains(id) || reported.contains(id) {
                    continue;
                }
                tracing::trace!(rule = rule.name, id, line = offset + 1, "unresolved reference");
                reported.insert(id.to_string());
                issues.push(Issue {
                    issue_type: IssueType::MissingReference,
                    description: format!("Ссылка на несуществующую статью {}", id),
                    location: format!("строка {}", offset + 1),
                    severity: Severity::High,
                    text_snippet: Some(line_snippet(line)),
                });
            }
        }
    }

    tracing::debug!(missing = issues.len(), "reference pass finished");
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_article_index;

    fn run(lines: &[&str]) -> Vec<Issue> {
        let index = build_article_index(lines);
        check_references(lines, &index)
    }

    #[test]
    fn resolved_references_produce_no_issues() {
        let issues = run(&[
            "Статья 1. Предмет",
            "Подробности в статье 2.",
            "Статья 2. Подробности",
        ]);
        assert!(issues.is_empty());
    }

    #[test]
    fn unresolved_reference_is_reported_with_line_and_snippet() {
        let issues = run(&["Статья 1. Предмет", "Споры решаются в порядке ст.99."]);

        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.issue_type, IssueType::MissingReference);
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.location, "строка 2");
        assert!(issue.description.contains("99"));
        assert_eq!(issue.text_snippet.as_deref(), Some("Споры решаются в порядке ст.99."));
    }

    #[test]
    fn repeated_missing_identifier_is_reported_once() {
        let issues = run(&[
            "см. ст. 42",
            "снова ст. 42",
            "и ещё раз ст. 42",
            "опять ст. 42",
            "наконец ст. 42",
        ]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "строка 1");
    }

    #[test]
    fn every_distinct_identifier_gets_its_own_issue() {
        let issues = run(&["см. ст. 5 и ст. 6", "а также статью 7"]);

        assert_eq!(issues.len(), 3);
        let locations: Vec<&str> = issues.iter().map(|i| i.location.as_str()).collect();
        assert_eq!(locations, vec!["строка 1", "строка 1", "строка 2"]);
    }

    #[test]
    fn clause_references_resolve_against_the_target_article() {
        let issues = run(&["Статья 12. Ответственность", "в силу пункта 3 статьи 12"]);
        assert!(issues.is_empty());

        let issues = run(&["per clause 2 of article 7"]);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].description.contains('7'));
    }

    #[test]
    fn decimal_references_round_trip() {
        let issues = run(&["Article 1.1 Scope", "details in art. 1.1"]);
        assert!(issues.is_empty());
    }
}
