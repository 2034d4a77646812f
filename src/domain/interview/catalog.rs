//! QuestionCatalog - the question definitions and their candidate order.
//!
//! The order is the candidate sequence; applicability predicates decide which
//! candidates are actually presented, so every realized interview path is a
//! subsequence of it.

use serde::{Deserialize, Serialize};

use super::QuestionDefinition;
use crate::domain::foundation::QuestionId;

/// Immutable registry of questions plus their fixed total order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    order: Vec<QuestionId>,
    questions: Vec<QuestionDefinition>,
}

impl QuestionCatalog {
    /// Creates a catalog whose order is the order of `questions`.
    pub fn new(questions: Vec<QuestionDefinition>) -> Self {
        let order = questions.iter().map(|q| q.id.clone()).collect();
        Self { order, questions }
    }

    /// Creates a catalog with an order declared separately from the definitions.
    pub fn with_order(order: Vec<QuestionId>, questions: Vec<QuestionDefinition>) -> Self {
        Self { order, questions }
    }

    /// The candidate question sequence.
    pub fn order(&self) -> &[QuestionId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&QuestionDefinition> {
        self.questions.iter().find(|q| q.id == *id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the 0-based position of a question in the order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|q| q == id)
    }

    /// Returns true if `a` comes before `b` in the order.
    pub fn is_before(&self, a: &str, b: &str) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    /// Definitions in candidate order.
    pub fn iter(&self) -> impl Iterator<Item = &QuestionDefinition> {
        self.order.iter().filter_map(|id| self.get(id.as_str()))
    }

    /// Structural problems with the catalog, empty when it is usable.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.order.is_empty() {
            problems.push("question order is empty".to_string());
        }

        for (idx, id) in self.order.iter().enumerate() {
            if self.order[..idx].contains(id) {
                problems.push(format!("question '{}' appears twice in the order", id));
            }
            if !self.contains(id.as_str()) {
                problems.push(format!("ordered question '{}' has no definition", id));
            }
        }

        for (idx, question) in self.questions.iter().enumerate() {
            if self.questions[..idx].iter().any(|q| q.id == question.id) {
                problems.push(format!("question '{}' is defined twice", question.id));
            }
            if self.position(question.id.as_str()).is_none() {
                problems.push(format!("question '{}' is not in the order", question.id));
            }
            problems.extend(question.problems());

            // Predicates may only look back: a question's applicability is
            // decided when the scan reaches it.
            if let Some(condition) = &question.applies_when {
                for key in condition.referenced_keys() {
                    if !self.is_before(key.as_str(), question.id.as_str()) {
                        problems.push(format!(
                            "question '{}' depends on '{}', which is not asked before it",
                            question.id, key
                        ));
                    }
                }
            }
        }

        problems
    }
}
