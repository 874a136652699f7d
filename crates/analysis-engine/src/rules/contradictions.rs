//! Opposing-obligation detection across article pairs
//!
//! The article is the unit of context: phrases are matched against an
//! article's full accumulated text, never against line windows.

use shared_types::{Issue, IssueType, Severity};

use crate::catalog::ContradictionCatalog;
use crate::index::ArticleIndex;
use crate::patterns::phrase_snippet;

/// Test every unordered pair of distinct articles against the catalog.
///
/// Substring containment is directional per phrase slot, so both
/// directions are applied explicitly. At most one issue is emitted per
/// (article, article, pair) triple; a pair matching inside a single
/// article is not a contradiction.
pub fn check_contradictions(index: &ArticleIndex, catalog: &ContradictionCatalog) -> Vec<Issue> {
    let mut issues = Vec::new();

    // Lowercase each article once; the pair loop only does substring tests.
    let lowered: Vec<(&crate::index::Article, String)> =
        index.iter().map(|a| (a, a.text.to_lowercase())).collect();

    for i in 0..lowered.len() {
        for j in (i + 1)..lowered.len() {
            let (first, first_text) = &lowered[i];
            let (second, second_text) = &lowered[j];

            for pair in catalog.pairs() {
                let forward = first_text.contains(&pair.a) && second_text.contains(&pair.b);
                let reverse =
                    !forward && first_text.contains(&pair.b) && second_text.contains(&pair.a);
                if !forward && !reverse {
                    continue;
                }

                let (holder_a, holder_b) = if forward {
                    (*first, *second)
                } else {
                    (*second, *first)
                };
                tracing::trace!(
                    label = pair.label.as_str(),
                    first = holder_a.id.as_str(),
                    second = holder_b.id.as_str(),
                    "opposing phrases found"
                );
                issues.push(Issue {
                    issue_type: IssueType::SemanticContradiction,
                    description: format!(
                        "Семантическое противоречие ({}): статья {} содержит «{}», статья {} содержит «{}»",
                        pair.label, holder_a.id, pair.a, holder_b.id, pair.b
                    ),
                    location: format!("статьи {} и {}", first.id, second.id),
                    severity: Severity::Medium,
                    text_snippet: phrase_snippet(&holder_a.text, &pair.a),
                });
            }
        }
    }

    tracing::debug!(contradictions = issues.len(), "contradiction pass finished");
    issues
}
