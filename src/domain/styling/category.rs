//! Garden style categories and their weighted trigger rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, StyleId};
use crate::domain::interview::AnswerMap;

/// A weighted signal for one style.
///
/// Matches when the answer at `answer_key` is a single choice inside
/// `match_set` or a multi choice intersecting it. Unanswered keys never match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerRule {
    pub answer_key: QuestionId,
    pub match_set: Vec<String>,
    /// May be negative.
    pub weight: i32,
}

impl TriggerRule {
    pub fn new(answer_key: &str, match_set: &[&str], weight: i32) -> Self {
        Self {
            answer_key: answer_key.into(),
            match_set: match_set.iter().map(|v| v.to_string()).collect(),
            weight,
        }
    }

    pub fn matches(&self, answers: &AnswerMap) -> bool {
        answers.matches_any(self.answer_key.as_str(), self.match_set.as_slice())
    }
}

/// An outcome category scored against the answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub id: StyleId,
    pub label: String,
    pub base_score: i32,
    pub narrative: String,
    #[serde(default)]
    pub sensory_notes: Vec<String>,
    #[serde(default)]
    pub default_plants: Vec<String>,
    #[serde(default)]
    pub default_features: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<TriggerRule>,
}

/// Registry of categories in declaration order.
///
/// Declaration order breaks scoring ties, so it is part of the catalog's
/// meaning and is kept exactly as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCatalog(Vec<CategoryDefinition>);

impl CategoryCatalog {
    pub fn new(categories: Vec<CategoryDefinition>) -> Self {
        Self(categories)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.0.iter()
    }

    pub fn get(&self, id: &str) -> Option<&CategoryDefinition> {
        self.0.iter().find(|c| c.id == *id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Structural problems, empty when the catalog is usable.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.0.is_empty() {
            problems.push("category catalog is empty".to_string());
        }
        for (idx, category) in self.0.iter().enumerate() {
            if self.0[..idx].iter().any(|c| c.id == category.id) {
                problems.push(format!("style '{}' is defined twice", category.id));
            }
            for trigger in &category.triggers {
                if trigger.match_set.is_empty() {
                    problems.push(format!(
                        "style '{}' has a trigger on '{}' with an empty match set",
                        category.id, trigger.answer_key
                    ));
                }
            }
        }
        problems
    }
}
