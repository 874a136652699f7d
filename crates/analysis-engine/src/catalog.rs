//! Opposing-phrase catalog for contradiction detection
//!
//! The catalog is configuration: detection logic never hardcodes phrases,
//! and test suites inject synthetic catalogs.

use thiserror::Error;

/// A pair of literal phrases expressing opposite legal obligations.
///
/// Phrases are matched as lowercase substrings of an article's text, so
/// each side must already be lowercase; [`ContradictionCatalog::new`]
/// normalizes them.
#[derive(Debug, Clone, PartialEq)]
pub struct PhrasePair {
    /// Short label naming the opposition, used in issue descriptions
    pub label: String,
    /// One side of the opposition
    pub a: String,
    /// The other side
    pub b: String,
}

impl PhrasePair {
    pub fn new(label: &str, a: &str, b: &str) -> Self {
        Self {
            label: label.to_string(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }
}

/// Catalog construction errors.
#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    /// A blank phrase would match every article and flood the output.
    #[error("phrase pair \"{label}\" has an empty side")]
    EmptyPhrase { label: String },
}

/// Validated, ordered list of opposing phrase pairs.
#[derive(Debug, Clone)]
pub struct ContradictionCatalog {
    pairs: Vec<PhrasePair>,
}

impl ContradictionCatalog {
    /// Validate and normalize the pairs: both sides must be non-blank;
    /// phrases are lowercased for substring matching.
    pub fn new(pairs: Vec<PhrasePair>) -> Result<Self, CatalogError> {
        let mut normalized = Vec::with_capacity(pairs.len());
        for pair in pairs {
            if pair.a.trim().is_empty() || pair.b.trim().is_empty() {
                return Err(CatalogError::EmptyPhrase { label: pair.label });
            }
            normalized.push(PhrasePair {
                label: pair.label,
                a: pair.a.to_lowercase(),
                b: pair.b.to_lowercase(),
            });
        }
        Ok(Self { pairs: normalized })
    }

    pub fn pairs(&self) -> &[PhrasePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for ContradictionCatalog {
    fn default() -> Self {
        default_catalog()
    }
}

/// Built-in catalog of opposing obligations common in Russian data
/// protection and contract texts, with English equivalents.
pub fn default_catalog() -> ContradictionCatalog {
    ContradictionCatalog::new(vec![
        PhrasePair::new("согласие на обработку", "согласие", "без согласия"),
        PhrasePair::new("запрет и разрешение", "запрещается", "разрешается"),
        PhrasePair::new("consent requirement", "consent", "without consent"),
        PhrasePair::new("prohibition and permission", "is prohibited", "is permitted"),
    ])
    .expect("built-in catalog phrases are non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_catalog_is_valid_and_lowercase() {
        let catalog = default_catalog();
        assert!(!catalog.is_empty());
        for pair in catalog.pairs() {
            assert_eq!(pair.a, pair.a.to_lowercase());
            assert_eq!(pair.b, pair.b.to_lowercase());
        }
    }

    #[test]
    fn blank_phrase_is_rejected() {
        let result = ContradictionCatalog::new(vec![PhrasePair::new("пустая пара", "  ", "без согласия")]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::EmptyPhrase {
                label: "пустая пара".to_string()
            }
        );
    }

    #[test]
    fn phrases_are_normalized_to_lowercase() {
        let catalog =
            ContradictionCatalog::new(vec![PhrasePair::new("case", "Запрещается", "РАЗРЕШАЕТСЯ")])
                .unwrap();
        assert_eq!(catalog.pairs()[0].a, "запрещается");
        assert_eq!(catalog.pairs()[0].b, "разрешается");
    }
}
