//! Descriptor model consumed by the viewer.
//!
//! Everything in here is built once by [`compile`](super::compile) and never
//! mutated afterwards. Entry and page descriptors are shared behind [`Arc`] so
//! that view state can hold on to the descriptor it was mounted from.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// One labeled code sample, displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Display tag, usually a language name.
    pub label: String,
    /// Opaque text. Never parsed or executed.
    pub content: String,
}

impl Variant {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

/// Why a list of variants could not become a [`VariantSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantSetError {
    #[error("no code variants")]
    Empty,
    #[error("duplicate variant label '{0}'")]
    DuplicateLabel(String),
}

/// Ordered, non-empty collection of variants with unique labels.
///
/// Insertion order is display order; the first variant is the default.
/// Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    variants: Arc<[Variant]>,
}

impl VariantSet {
    pub fn new(variants: Vec<Variant>) -> Result<Self, VariantSetError> {
        if variants.is_empty() {
            return Err(VariantSetError::Empty);
        }
        for (i, variant) in variants.iter().enumerate() {
            if variants[..i].iter().any(|v| v.label == variant.label) {
                return Err(VariantSetError::DuplicateLabel(variant.label.clone()));
            }
        }
        Ok(Self {
            variants: variants.into(),
        })
    }

    /// Build from `(label, content)` pairs.
    pub fn from_pairs<L, C>(pairs: impl IntoIterator<Item = (L, C)>) -> Result<Self, VariantSetError>
    where
        L: Into<String>,
        C: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(l, c)| Variant::new(l, c)).collect())
    }

    pub fn first(&self) -> &Variant {
        &self.variants[0]
    }

    pub fn get(&self, index: usize) -> Option<&Variant> {
        self.variants.get(index)
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.variants.iter().position(|v| v.label == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.label.as_str())
    }
}

/// Difficulty tag shown as a badge next to each entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Any other label. Kept as authored and rendered with a neutral badge.
    Unrecognized(String),
}

impl Difficulty {
    /// Parse an authored label. Matching ignores case and surrounding space.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Unrecognized(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unrecognized(label) => label,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Difficulty::Unrecognized(_))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One stage of a problem-solving narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: String,
    pub description: String,
    /// Bulleted details, possibly empty.
    pub details: Vec<String>,
    /// Keyword chips in authoring order, without duplicates.
    pub keywords: Vec<String>,
}

/// Free-form complexity annotations. Displayed, never computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityInfo {
    pub time: String,
    pub space: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approach {
    pub steps: Vec<Step>,
    pub pattern: Option<String>,
    pub complexity: Option<ComplexityInfo>,
}

/// Static description of a single tutorial entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicEntryDescriptor {
    pub title: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub variants: VariantSet,
    /// Variant shown first when the code view mounts. Always a label of `variants`.
    pub default_variant: Option<String>,
    pub explanation: String,
    pub approach: Option<Approach>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub id: String,
    pub label: String,
    pub entries: Vec<Arc<TopicEntryDescriptor>>,
}

/// One topic area: a header plus its categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub categories: Vec<CategoryDescriptor>,
}

impl PageDescriptor {
    pub fn category(&self, id: &str) -> Option<&CategoryDescriptor> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

/// All topic areas known to the viewer, in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Site {
    pub pages: Vec<Arc<PageDescriptor>>,
}

impl Site {
    pub fn page(&self, id: &str) -> Option<&Arc<PageDescriptor>> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn page_index(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_set_keeps_insertion_order() {
        let set = VariantSet::from_pairs([("Python", "p"), ("C++", "c"), ("Java", "j")]).unwrap();
        let labels: Vec<&str> = set.labels().collect();
        assert_eq!(labels, vec!["Python", "C++", "Java"]);
        assert_eq!(set.first().label, "Python");
        assert_eq!(set.position("Java"), Some(2));
    }

    #[test]
    fn test_variant_set_rejects_empty() {
        let result = VariantSet::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(result, Err(VariantSetError::Empty));
    }

    #[test]
    fn test_variant_set_rejects_duplicate_labels() {
        let result = VariantSet::from_pairs([("Go", "a"), ("Rust", "b"), ("Go", "c")]);
        assert_eq!(result, Err(VariantSetError::DuplicateLabel("Go".to_string())));
    }

    #[test]
    fn test_variant_set_error_messages() {
        assert_eq!(VariantSetError::Empty.to_string(), "no code variants");
        let err: Box<dyn std::error::Error> = Box::new(VariantSetError::DuplicateLabel("Go".into()));
        assert_eq!(err.to_string(), "duplicate variant label 'Go'");
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse(" medium "), Difficulty::Medium);
        assert_eq!(Difficulty::parse("HARD"), Difficulty::Hard);

        let other = Difficulty::parse("Expert");
        assert_eq!(other, Difficulty::Unrecognized("Expert".to_string()));
        assert!(!other.is_recognized());
        assert_eq!(other.label(), "Expert");
    }
}
