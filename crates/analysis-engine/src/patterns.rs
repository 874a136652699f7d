//! Pattern grammar for article declarations and inline references
//!
//! Every surface form the engine recognizes lives here as an entry in an
//! ordered rule table. The indexing and resolution passes iterate the
//! tables; adding a new surface form means adding a rule, not touching
//! detection logic.

use lazy_static::lazy_static;
use regex::Regex;

/// A named surface-form rule: a compiled pattern plus the capture group
/// that holds the article identifier.
#[derive(Debug)]
pub struct PatternRule {
    /// Rule name, used in trace events
    pub name: &'static str,
    /// Compiled pattern
    pub regex: Regex,
    /// Capture group holding the numeric identifier
    pub capture: usize,
}

impl PatternRule {
    /// All identifiers this rule finds in a line, left to right,
    /// non-overlapping. Matches without the capture group are skipped.
    pub fn identifiers<'t>(&self, line: &'t str) -> Vec<&'t str> {
        self.regex
            .captures_iter(line)
            .filter_map(|cap| cap.get(self.capture))
            .map(|m| m.as_str())
            .collect()
    }
}

lazy_static! {
    /// Declaration rules, in match order. A line declares an article when
    /// one of these matches at its whitespace-stripped start. The numeric
    /// token allows decimal sub-numbering ("10.1").
    pub static ref DECLARATION_RULES: Vec<PatternRule> = vec![
        PatternRule {
            name: "declaration_ru",
            regex: Regex::new(r"(?i)^\s*статья\s+№?\s*(\d+(?:\.\d+)?)").unwrap(),
            capture: 1,
        },
        PatternRule {
            name: "declaration_en",
            regex: Regex::new(r"(?i)^\s*art(?:icle|\.)\s+№?\s*(\d+(?:\.\d+)?)").unwrap(),
            capture: 1,
        },
    ];

    /// Reference rules, in match order. Compound "clause N of article M"
    /// forms come first so their clause number is never misread as an
    /// article identifier by the simple forms.
    pub static ref REFERENCE_RULES: Vec<PatternRule> = vec![
        PatternRule {
            name: "clause_of_article_ru",
            regex: Regex::new(
                r"(?i)\bпункт\w*\s+\d+(?:\.\d+)?\s+стать(?:я|и|е|ю|ей)\s*№?\s*(\d+(?:\.\d+)?)",
            )
            .unwrap(),
            capture: 1,
        },
        PatternRule {
            name: "clause_of_article_en",
            regex: Regex::new(
                r"(?i)\bclause\s+\d+(?:\.\d+)?\s+of\s+article\s+(\d+(?:\.\d+)?)",
            )
            .unwrap(),
            capture: 1,
        },
        PatternRule {
            name: "article_ru",
            // "статья 5" in any case form, or the "ст.99" abbreviation
            // with or without a space after the dot
            regex: Regex::new(r"(?i)\b(?:стать(?:я|и|е|ю|ей)|ст\.)\s*№?\s*(\d+(?:\.\d+)?)")
                .unwrap(),
            capture: 1,
        },
        PatternRule {
            name: "article_en",
            regex: Regex::new(r"(?i)\bart(?:icle|\.)?\s*(\d+(?:\.\d+)?)").unwrap(),
            capture: 1,
        },
    ];
}

/// Trim a line to a reviewer-sized excerpt (at most 160 characters).
pub fn line_snippet(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.chars().count() <= 160 {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(160).collect();
    format!("{}...", cut.trim_end())
}

/// Excerpt around the first case-insensitive occurrence of `phrase`,
/// with up to 40 characters of context on each side. Offsets are kept
/// on character boundaries, so multi-byte text is safe to slice.
pub fn phrase_snippet(text: &str, phrase: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let pos = lower.find(phrase)?;

    let start = lower[..pos]
        .char_indices()
        .rev()
        .nth(39)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    let match_end = pos + phrase.len();
    let end = lower[match_end..]
        .char_indices()
        .nth(40)
        .map(|(idx, _)| match_end + idx)
        .unwrap_or(lower.len());

    Some(format!("...{}...", lower[start..end].trim()))
}
