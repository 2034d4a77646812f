//! Insight Generator - live advisory notes recomputed after every answer.
//!
//! Each rule is independent and pure. Rules run in declared order and only
//! those with an opinion contribute a note. A rule whose keys are unanswered
//! has no opinion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;
use crate::domain::interview::{AnswerMap, Condition};

/// A note surfaced alongside the interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryNote {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// One note body per exact single-choice value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceBody {
    pub value: String,
    pub body: String,
}

/// A note body for scale values at or above `min`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleTier {
    pub min: i32,
    pub body: String,
}

/// How a rule turns answers into an optional note body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoteGenerator {
    /// Looks up the body for the single choice stored under `answer_key`.
    ByChoice {
        answer_key: QuestionId,
        bodies: Vec<ChoiceBody>,
    },

    /// First tier whose `min` the scale value reaches; declare tiers high to low.
    ByScaleThreshold {
        answer_key: QuestionId,
        tiers: Vec<ScaleTier>,
    },

    /// Lists the selections under `answer_key` in `template` (`{}` is replaced
    /// by the values joined with ", "), or uses `fallback` when there are none.
    /// Silent unless `gate` holds.
    ListingSelections {
        gate: Condition,
        answer_key: QuestionId,
        template: String,
        fallback: String,
    },
}

impl NoteGenerator {
    pub fn by_choice(answer_key: &str, bodies: &[(&str, &str)]) -> Self {
        NoteGenerator::ByChoice {
            answer_key: answer_key.into(),
            bodies: bodies
                .iter()
                .map(|(value, body)| ChoiceBody {
                    value: value.to_string(),
                    body: body.to_string(),
                })
                .collect(),
        }
    }

    pub fn by_scale_threshold(answer_key: &str, tiers: &[(i32, &str)]) -> Self {
        NoteGenerator::ByScaleThreshold {
            answer_key: answer_key.into(),
            tiers: tiers
                .iter()
                .map(|(min, body)| ScaleTier {
                    min: *min,
                    body: body.to_string(),
                })
                .collect(),
        }
    }

    /// Returns the note body, or `None` for no opinion.
    pub fn generate(&self, answers: &AnswerMap) -> Option<String> {
        match self {
            NoteGenerator::ByChoice { answer_key, bodies } => {
                let choice = answers.choice(answer_key.as_str())?;
                bodies
                    .iter()
                    .find(|entry| entry.value == choice)
                    .map(|entry| entry.body.clone())
            }
            NoteGenerator::ByScaleThreshold { answer_key, tiers } => {
                let value = answers.scale(answer_key.as_str())?;
                tiers
                    .iter()
                    .find(|tier| value >= tier.min)
                    .map(|tier| tier.body.clone())
            }
            NoteGenerator::ListingSelections {
                gate,
                answer_key,
                template,
                fallback,
            } => {
                if !gate.evaluate(answers) {
                    return None;
                }
                match answers.selections(answer_key.as_str()) {
                    Some(values) if !values.is_empty() => {
                        Some(template.replacen("{}", &values.join(", "), 1))
                    }
                    _ => Some(fallback.clone()),
                }
            }
        }
    }

    /// Every answer key this generator reads.
    pub fn referenced_keys(&self) -> Vec<&QuestionId> {
        match self {
            NoteGenerator::ByChoice { answer_key, .. }
            | NoteGenerator::ByScaleThreshold { answer_key, .. } => vec![answer_key],
            NoteGenerator::ListingSelections {
                gate, answer_key, ..
            } => {
                let mut keys = gate.referenced_keys();
                keys.push(answer_key);
                keys
            }
        }
    }
}

/// A named generator with the title shown on its notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRule {
    pub id: String,
    pub title: String,
    pub generator: NoteGenerator,
}

impl NoteRule {
    pub fn new(id: &str, title: &str, generator: NoteGenerator) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            generator,
        }
    }
}

/// Ordered registry of note rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightGenerator(Vec<NoteRule>);

impl InsightGenerator {
    pub fn new(rules: Vec<NoteRule>) -> Self {
        Self(rules)
    }

    pub fn rules(&self) -> &[NoteRule] {
        &self.0
    }

    /// Runs every rule in order and keeps the notes that fire.
    pub fn generate(&self, answers: &AnswerMap) -> Vec<AdvisoryNote> {
        self.0
            .iter()
            .filter_map(|rule| {
                rule.generator.generate(answers).map(|body| AdvisoryNote {
                    id: rule.id.clone(),
                    title: rule.title.clone(),
                    body,
                })
            })
            .collect()
    }
}
