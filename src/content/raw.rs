//! Authoring format for tutorial content.
//!
//! These types mirror the JSON that content authors write. They are loose on
//! purpose: an entry may give a single `solution` or a `solutions` map, any
//! difficulty string is accepted, and nothing is checked until the content is
//! compiled into the descriptor model.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::model::{Site, TopicEntryDescriptor};

/// Label used for a lone `solution` with no `language`.
pub const DEFAULT_SOLUTION_LABEL: &str = "Code";

/// Top-level authoring document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSite {
    #[serde(default)]
    pub pages: Vec<RawPage>,
}

impl RawSite {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub categories: Vec<RawCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub entries: Vec<RawEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub title: String,
    pub difficulty: String,
    #[serde(default)]
    pub description: String,
    /// Single code sample; mutually exclusive with `solutions`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    /// Label for `solution`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions: Option<RawSolutions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_variant: Option<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach: Option<RawApproach>,
}

impl RawEntry {
    pub fn new(
        title: impl Into<String>,
        difficulty: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            difficulty: difficulty.into(),
            description: description.into(),
            solution: None,
            language: None,
            solutions: None,
            default_variant: None,
            explanation: String::new(),
            approach: None,
        }
    }

    pub fn solution(mut self, language: impl Into<String>, code: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self.solution = Some(code.into());
        self
    }

    pub fn solutions<L, C>(mut self, pairs: impl IntoIterator<Item = (L, C)>) -> Self
    where
        L: Into<String>,
        C: Into<String>,
    {
        self.solutions = Some(RawSolutions(
            pairs.into_iter().map(|(l, c)| (l.into(), c.into())).collect(),
        ));
        self
    }

    pub fn default_variant(mut self, label: impl Into<String>) -> Self {
        self.default_variant = Some(label.into());
        self
    }

    pub fn explanation(mut self, text: impl Into<String>) -> Self {
        self.explanation = text.into();
        self
    }

    pub fn approach(mut self, approach: RawApproach) -> Self {
        self.approach = Some(approach);
        self
    }
}

/// Label → code map that keeps the order it was written in.
///
/// Serialized as a JSON object. Duplicate keys are preserved so the validator
/// can report them instead of silently keeping the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSolutions(pub Vec<(String, String)>);

impl Serialize for RawSolutions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, code) in &self.0 {
            map.serialize_entry(label, code)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RawSolutions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = RawSolutions;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of label to code")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, code)) = access.next_entry::<String, String>()? {
                    pairs.push((label, code));
                }
                Ok(RawSolutions(pairs))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawApproach {
    #[serde(default)]
    pub steps: Vec<RawStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<RawComplexity>,
}

impl RawApproach {
    pub fn new(steps: impl IntoIterator<Item = RawStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            pattern: None,
            complexity: None,
        }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn complexity(mut self, time: impl Into<String>, space: impl Into<String>) -> Self {
        self.complexity = Some(RawComplexity {
            time: time.into(),
            space: space.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStep {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl RawStep {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            details: Vec::new(),
            keywords: Vec::new(),
        }
    }

    pub fn details<S: Into<String>>(mut self, details: impl IntoIterator<Item = S>) -> Self {
        self.details = details.into_iter().map(Into::into).collect();
        self
    }

    pub fn keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComplexity {
    pub time: String,
    pub space: String,
}

// Export direction: compiled descriptors back to the authoring format.

impl From<&Site> for RawSite {
    fn from(site: &Site) -> Self {
        let pages = site
            .pages
            .iter()
            .map(|page| RawPage {
                id: page.id.clone(),
                title: page.title.clone(),
                subtitle: page.subtitle.clone(),
                categories: page
                    .categories
                    .iter()
                    .map(|category| RawCategory {
                        id: category.id.clone(),
                        label: category.label.clone(),
                        entries: category.entries.iter().map(|e| RawEntry::from(e.as_ref())).collect(),
                    })
                    .collect(),
            })
            .collect();
        RawSite { pages }
    }
}

impl From<&TopicEntryDescriptor> for RawEntry {
    fn from(entry: &TopicEntryDescriptor) -> Self {
        RawEntry {
            title: entry.title.clone(),
            difficulty: entry.difficulty.label().to_string(),
            description: entry.description.clone(),
            solution: None,
            language: None,
            solutions: Some(RawSolutions(
                entry.variants.iter().map(|v| (v.label.clone(), v.content.clone())).collect(),
            )),
            default_variant: entry.default_variant.clone(),
            explanation: entry.explanation.clone(),
            approach: entry.approach.as_ref().map(|approach| RawApproach {
                steps: approach
                    .steps
                    .iter()
                    .map(|s| RawStep {
                        title: s.title.clone(),
                        description: s.description.clone(),
                        details: s.details.clone(),
                        keywords: s.keywords.clone(),
                    })
                    .collect(),
                pattern: approach.pattern.clone(),
                complexity: approach.complexity.as_ref().map(|c| RawComplexity {
                    time: c.time.clone(),
                    space: c.space.clone(),
                }),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solutions_preserve_key_order() {
        let json = r#"{
            "title": "Search",
            "difficulty": "Easy",
            "solutions": { "Python": "p", "C++": "c", "Java": "j" }
        }"#;

        let entry: RawEntry = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = entry
            .solutions
            .as_ref()
            .unwrap()
            .0
            .iter()
            .map(|(l, _)| l.as_str())
            .collect();
        assert_eq!(labels, vec!["Python", "C++", "Java"]);
        assert_eq!(entry.description, "");
        assert!(entry.approach.is_none());
    }

    #[test]
    fn test_solutions_keep_duplicate_keys() {
        let json = r#"{ "Go": "a", "Go": "b" }"#;
        let solutions: RawSolutions = serde_json::from_str(json).unwrap();
        assert_eq!(solutions.0.len(), 2);
    }

    #[test]
    fn test_solutions_serialize_as_object() {
        let solutions = RawSolutions(vec![
            ("Rust".to_string(), "fn main() {}".to_string()),
            ("C".to_string(), "int main;".to_string()),
        ]);
        let json = serde_json::to_string(&solutions).unwrap();
        assert_eq!(json, r#"{"Rust":"fn main() {}","C":"int main;"}"#);
    }

    #[test]
    fn test_deserialize_single_solution_entry() {
        let json = r#"{
            "title": "Inorder",
            "difficulty": "Easy",
            "solution": "def walk(node): ...",
            "language": "Python",
            "approach": {
                "steps": [ { "title": "Recurse", "keywords": ["dfs"] } ],
                "complexity": { "time": "O(n)", "space": "O(h)" }
            }
        }"#;

        let entry: RawEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.solution.as_deref(), Some("def walk(node): ..."));
        assert_eq!(entry.language.as_deref(), Some("Python"));
        let approach = entry.approach.unwrap();
        assert_eq!(approach.steps[0].keywords, vec!["dfs"]);
        assert!(approach.steps[0].details.is_empty());
        assert_eq!(approach.complexity.unwrap().time, "O(n)");
        assert!(approach.pattern.is_none());
    }
}
