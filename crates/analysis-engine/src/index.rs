//! Article indexing
//!
//! Builds the structural index of a document: which article identifier is
//! declared on which line, and the full text each article spans.

use std::collections::HashMap;

use crate::patterns::DECLARATION_RULES;

/// A single indexed article.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Normalized numeric identifier ("10", "10.1")
    pub id: String,
    /// 1-based number of the declaration line
    pub line: usize,
    /// Declaration line plus every following line up to the next
    /// declaration, space-joined and trimmed
    pub text: String,
}

/// Insertion-ordered index of declared articles.
///
/// At most one entry per identifier. A duplicate declaration replaces the
/// earlier entry's line and text but keeps its enumeration position, so
/// downstream passes see a stable article order.
#[derive(Debug, Default)]
pub struct ArticleIndex {
    articles: Vec<Article>,
    by_id: HashMap<String, usize>,
}

impl ArticleIndex {
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.by_id.get(id).map(|&slot| &self.articles[slot])
    }

    /// Articles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    fn insert(&mut self, article: Article) {
        match self.by_id.get(&article.id) {
            Some(&slot) => self.articles[slot] = article,
            None => {
                self.by_id.insert(article.id.clone(), self.articles.len());
                self.articles.push(article);
            }
        }
    }
}

/// Scan the document's lines and build the article index.
///
/// Lines before the first declaration belong to no article and are not
/// indexed. A document without declarations yields an empty index; that is
/// a valid result, not an error.
pub fn build_article_index<S: AsRef<str>>(lines: &[S]) -> ArticleIndex {
    let mut index = ArticleIndex::default();
    let mut current: Option<Article> = None;

    for (offset, raw) in lines.iter().enumerate() {
        let line = raw.as_ref();

        let declared = DECLARATION_RULES.iter().find_map(|rule| {
            rule.regex
                .captures(line)
                .and_then(|cap| cap.get(rule.capture))
                .map(|m| m.as_str().to_string())
        });

        match declared {
            Some(id) => {
                if let Some(finished) = current.take() {
                    index.insert(finished);
                }
                current = Some(Article {
                    id,
                    line: offset + 1,
                    text: line.trim().to_string(),
                });
            }
            None => {
                if let Some(article) = current.as_mut() {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        article.text.push(' ');
                        article.text.push_str(trimmed);
                    }
                }
            }
        }
    }
    if let Some(finished) = current.take() {
        index.insert(finished);
    }

    tracing::debug!(articles = index.len(), "article index built");
    index
}
