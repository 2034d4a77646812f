//! Question definitions and answer admission checks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AnswerMap, AnswerValue, Condition, InterviewError};
use crate::domain::foundation::{QuestionId, ValidationError};

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    Single,
    Multi,
    FreeText,
    Scale,
}

impl InputType {
    /// Returns true if `value` has the shape this input type produces.
    pub fn accepts(&self, value: &AnswerValue) -> bool {
        matches!(
            (self, value),
            (InputType::Single, AnswerValue::SingleChoice(_))
                | (InputType::Multi, AnswerValue::MultiChoice(_))
                | (InputType::FreeText, AnswerValue::FreeText(_))
                | (InputType::Scale, AnswerValue::Scale(_))
        )
    }

    /// Returns true for input types that choose from an option list.
    pub fn has_options(&self) -> bool {
        matches!(self, InputType::Single | InputType::Multi)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputType::Single => "single",
            InputType::Multi => "multi",
            InputType::FreeText => "free-text",
            InputType::Scale => "scale",
        };
        f.write_str(s)
    }
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl QuestionOption {
    pub fn new(value: &str, label: &str, description: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            description: Some(description.to_string()),
        }
    }
}

/// Bounds of a scale question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleConfig {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    /// Tick labels from `min` upward; blank entries are unlabeled ticks.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl ScaleConfig {
    /// Checks that the bounds describe a usable slider.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min >= self.max {
            return Err(ValidationError::invalid_format(
                "scale",
                format!("min {} must be below max {}", self.min, self.max),
            ));
        }
        if self.step <= 0 {
            return Err(ValidationError::invalid_format(
                "scale.step",
                "step must be positive",
            ));
        }
        Ok(())
    }

    /// Returns true if `value` is inside the bounds and on a step.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min
            && value <= self.max
            && (i64::from(value) - i64::from(self.min)) % i64::from(self.step) == 0
    }
}

/// An immutable question in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: QuestionId,
    pub title: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub input: InputType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleConfig>,
    /// Question is presented only when this holds. Absent means always.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applies_when: Option<Condition>,
}

impl QuestionDefinition {
    /// Starts a definition with no options, scale, or predicate.
    pub fn new(id: &str, title: &str, prompt: &str, input: InputType) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            prompt: prompt.to_string(),
            helper: None,
            placeholder: None,
            input,
            options: Vec::new(),
            scale: None,
            applies_when: None,
        }
    }

    pub fn with_helper(mut self, helper: &str) -> Self {
        self.helper = Some(helper.to_string());
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn with_options(mut self, options: Vec<QuestionOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_scale(mut self, scale: ScaleConfig) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn applies_when(mut self, condition: Condition) -> Self {
        self.applies_when = Some(condition);
        self
    }

    /// Evaluates the applicability predicate; a missing predicate always applies.
    pub fn is_applicable(&self, answers: &AnswerMap) -> bool {
        self.applies_when
            .as_ref()
            .map_or(true, |condition| condition.evaluate(answers))
    }

    /// Looks up the display label for an option value.
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }

    /// Checks that `value` is an acceptable answer to this question.
    ///
    /// Empty multi selections and blank text pass; admission of those is left
    /// to the presentation layer.
    pub fn admit(&self, value: &AnswerValue) -> Result<(), InterviewError> {
        if !self.input.accepts(value) {
            return Err(InterviewError::InvalidAnswerShape {
                question: self.id.clone(),
                expected: self.input,
                actual: value.kind(),
            });
        }

        match value {
            AnswerValue::SingleChoice(choice) if !choice.is_empty() => self.admit_option(choice),
            AnswerValue::MultiChoice(choices) => {
                choices.iter().try_for_each(|choice| self.admit_option(choice))
            }
            AnswerValue::Scale(n) => match &self.scale {
                Some(scale) if scale.contains(*n) => Ok(()),
                Some(scale) => Err(InterviewError::OutOfRange {
                    question: self.id.clone(),
                    min: scale.min,
                    max: scale.max,
                    step: scale.step,
                    actual: *n,
                }),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }

    fn admit_option(&self, choice: &str) -> Result<(), InterviewError> {
        if self.option_label(choice).is_some() {
            Ok(())
        } else {
            Err(InterviewError::UnknownOption {
                question: self.id.clone(),
                value: choice.to_string(),
            })
        }
    }

    /// Structural problems with this definition, described for catalog validation.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.title.trim().is_empty() {
            problems.push(format!("question '{}' has an empty title", self.id));
        }
        if self.input.has_options() && self.options.is_empty() {
            problems.push(format!(
                "{} question '{}' has no options",
                self.input, self.id
            ));
        }
        let mut seen: Vec<&str> = Vec::new();
        for option in &self.options {
            if seen.contains(&option.value.as_str()) {
                problems.push(format!(
                    "question '{}' repeats option '{}'",
                    self.id, option.value
                ));
            }
            seen.push(option.value.as_str());
        }
        match (&self.input, &self.scale) {
            (InputType::Scale, None) => {
                problems.push(format!("scale question '{}' has no bounds", self.id))
            }
            (InputType::Scale, Some(scale)) => {
                if let Err(err) = scale.validate() {
                    problems.push(format!("question '{}': {}", self.id, err));
                }
            }
            _ => {}
        }
        problems
    }
}
