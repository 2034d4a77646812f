//! Answer values and the per-interview answer store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::QuestionId;

/// A typed answer to one question.
///
/// Exactly one shape is active per answer; the shape must agree with the
/// question's [`InputType`](super::InputType) before it reaches the store.
/// Deserialized multi selections pass through [`AnswerValue::multi`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "AnswerShape")]
pub enum AnswerValue {
    SingleChoice(String),
    /// Set semantics for matching, insertion order kept for display.
    MultiChoice(Vec<String>),
    FreeText(String),
    Scale(i32),
}

impl AnswerValue {
    /// Creates a single-choice answer.
    pub fn single(value: impl Into<String>) -> Self {
        AnswerValue::SingleChoice(value.into())
    }

    /// Creates a multi-choice answer, collapsing duplicates to their first occurrence.
    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selected: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !selected.contains(&value) {
                selected.push(value);
            }
        }
        AnswerValue::MultiChoice(selected)
    }

    /// Collapses duplicate multi selections; other shapes are returned as is.
    pub fn normalized(self) -> Self {
        match self {
            AnswerValue::MultiChoice(values) => AnswerValue::multi(values),
            other => other,
        }
    }

    /// Creates a free-text answer. The text is carried verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::FreeText(value.into())
    }

    /// Creates a scale answer.
    pub fn scale(value: i32) -> Self {
        AnswerValue::Scale(value)
    }

    /// Short name of the active shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AnswerValue::SingleChoice(_) => "single_choice",
            AnswerValue::MultiChoice(_) => "multi_choice",
            AnswerValue::FreeText(_) => "free_text",
            AnswerValue::Scale(_) => "scale",
        }
    }

    /// Returns true if this answer selects `value`.
    ///
    /// Free text and scale answers never select anything.
    pub fn selects(&self, value: &str) -> bool {
        match self {
            AnswerValue::SingleChoice(choice) => choice == value,
            AnswerValue::MultiChoice(choices) => choices.iter().any(|c| c == value),
            AnswerValue::FreeText(_) | AnswerValue::Scale(_) => false,
        }
    }

    /// Returns true if this answer selects at least one member of `set`.
    pub fn selects_any<S: AsRef<str>>(&self, set: &[S]) -> bool {
        set.iter().any(|candidate| self.selects(candidate.as_ref()))
    }
}

/// Wire form of [`AnswerValue`] before normalization.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum AnswerShape {
    SingleChoice(String),
    MultiChoice(Vec<String>),
    FreeText(String),
    Scale(i32),
}

impl From<AnswerShape> for AnswerValue {
    fn from(shape: AnswerShape) -> Self {
        match shape {
            AnswerShape::SingleChoice(value) => AnswerValue::SingleChoice(value),
            AnswerShape::MultiChoice(values) => AnswerValue::multi(values),
            AnswerShape::FreeText(value) => AnswerValue::FreeText(value),
            AnswerShape::Scale(value) => AnswerValue::Scale(value),
        }
    }
}

/// Mapping from question id to the answer given for it.
///
/// Absence means "not yet answered". Only the interview session writes to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<QuestionId, AnswerValue>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an answer, overwriting any previous answer for the same question.
    pub fn insert(&mut self, id: QuestionId, value: AnswerValue) -> Option<AnswerValue> {
        self.0.insert(id, value)
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.0.iter()
    }

    /// Single choice equal to `value`, or multi choice containing it.
    pub fn has_selection(&self, key: &str, value: &str) -> bool {
        self.get(key).is_some_and(|answer| answer.selects(value))
    }

    /// Single choice inside `set`, or multi choice intersecting it.
    pub fn matches_any<S: AsRef<str>>(&self, key: &str, set: &[S]) -> bool {
        self.get(key).is_some_and(|answer| answer.selects_any(set))
    }

    /// Returns the single-choice value stored under `key`, if that is its shape.
    pub fn choice(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(AnswerValue::SingleChoice(choice)) => Some(choice.as_str()),
            _ => None,
        }
    }

    /// Returns the multi-choice selections stored under `key`, if that is its shape.
    pub fn selections(&self, key: &str) -> Option<&[String]> {
        match self.get(key) {
            Some(AnswerValue::MultiChoice(choices)) => Some(choices.as_slice()),
            _ => None,
        }
    }

    /// Returns the scale value stored under `key`, if that is its shape.
    pub fn scale(&self, key: &str) -> Option<i32> {
        match self.get(key) {
            Some(AnswerValue::Scale(value)) => Some(*value),
            _ => None,
        }
    }
}
