//! Blueprint Assembler - derives the final garden blueprint.
//!
//! The assembler starts from the winning style and layers answer-driven
//! additions on top. Each part (palette, hero features, care rhythm,
//! vignettes) is computed independently from the final answers.

use serde::{Deserialize, Serialize};

use super::CategoryDefinition;
use crate::domain::foundation::{QuestionId, StyleId};
use crate::domain::interview::{AnswerMap, Condition, QuestionCatalog};

/// Adds fixed items when a condition holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionRule {
    pub when: Condition,
    pub items: Vec<String>,
}

impl AdditionRule {
    pub fn new(when: Condition, items: &[&str]) -> Self {
        Self {
            when,
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }
}

/// Lines appended to the care rhythm for one exact single-choice value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareBranch {
    pub value: String,
    pub lines: Vec<String>,
}

/// Selects exactly one block of care lines from a single-choice answer.
///
/// Nothing is appended when the question is unanswered. A present answer
/// that matches no branch falls back to `otherwise`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareBlock {
    pub answer_key: QuestionId,
    pub branches: Vec<CareBranch>,
    #[serde(default)]
    pub otherwise: Vec<String>,
}

impl CareBlock {
    pub fn new(answer_key: &str, branches: &[(&str, &[&str])]) -> Self {
        Self {
            answer_key: answer_key.into(),
            branches: branches
                .iter()
                .map(|(value, lines)| CareBranch {
                    value: value.to_string(),
                    lines: lines.iter().map(|l| l.to_string()).collect(),
                })
                .collect(),
            otherwise: Vec::new(),
        }
    }

    pub fn otherwise(mut self, lines: &[&str]) -> Self {
        self.otherwise = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    fn lines_for(&self, answers: &AnswerMap) -> &[String] {
        match answers.choice(self.answer_key.as_str()) {
            Some(choice) => self
                .branches
                .iter()
                .find(|branch| branch.value == choice)
                .map_or(self.otherwise.as_slice(), |branch| branch.lines.as_slice()),
            None => &[],
        }
    }
}

/// Answer-driven rules applied on top of the winning style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyRules {
    /// Extra plants, applied in declaration order.
    #[serde(default)]
    pub palette_additions: Vec<AdditionRule>,
    /// Multi-choice question whose selected option labels become hero features.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_label_source: Option<QuestionId>,
    /// Single bonus features, applied after the selected labels.
    #[serde(default)]
    pub feature_bonuses: Vec<AdditionRule>,
    #[serde(default)]
    pub care_rhythm: Vec<CareBlock>,
    #[serde(default)]
    pub vignettes: Vec<AdditionRule>,
}

impl AssemblyRules {
    /// Every answer key the rules read.
    pub fn referenced_keys(&self) -> Vec<&QuestionId> {
        let mut keys: Vec<&QuestionId> = Vec::new();
        let conditions = self
            .palette_additions
            .iter()
            .chain(&self.feature_bonuses)
            .chain(&self.vignettes)
            .map(|rule| &rule.when);
        for condition in conditions {
            keys.extend(condition.referenced_keys());
        }
        keys.extend(self.feature_label_source.iter());
        keys.extend(self.care_rhythm.iter().map(|block| &block.answer_key));
        keys
    }
}

/// Summary of the winning style as shown at the top of the blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSummary {
    pub id: StyleId,
    pub label: String,
    pub narrative: String,
    pub sensory_notes: Vec<String>,
}

/// The final recommendation artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub headline: StyleSummary,
    pub plant_palette: Vec<String>,
    pub hero_features: Vec<String>,
    pub care_rhythm: Vec<String>,
    pub vignettes: Vec<String>,
}

/// Assembles blueprints from a winning style and the final answers.
#[derive(Debug, Clone, Copy)]
pub struct BlueprintAssembler<'a> {
    rules: &'a AssemblyRules,
    questions: &'a QuestionCatalog,
}

impl<'a> BlueprintAssembler<'a> {
    pub fn new(rules: &'a AssemblyRules, questions: &'a QuestionCatalog) -> Self {
        Self { rules, questions }
    }

    /// Builds the blueprint. Same inputs always give the same output.
    pub fn assemble(&self, winner: &CategoryDefinition, answers: &AnswerMap) -> Blueprint {
        Blueprint {
            headline: StyleSummary {
                id: winner.id.clone(),
                label: winner.label.clone(),
                narrative: winner.narrative.clone(),
                sensory_notes: winner.sensory_notes.clone(),
            },
            plant_palette: self.plant_palette(winner, answers),
            hero_features: self.hero_features(winner, answers),
            care_rhythm: self.care_rhythm(answers),
            vignettes: self.vignettes(answers),
        }
    }

    fn plant_palette(&self, winner: &CategoryDefinition, answers: &AnswerMap) -> Vec<String> {
        let mut palette = OrderedSet::seeded(&winner.default_plants);
        for rule in &self.rules.palette_additions {
            if rule.when.evaluate(answers) {
                palette.extend(&rule.items);
            }
        }
        palette.into_vec()
    }

    fn hero_features(&self, winner: &CategoryDefinition, answers: &AnswerMap) -> Vec<String> {
        let mut features = OrderedSet::seeded(&winner.default_features);

        if let Some(source) = &self.rules.feature_label_source {
            let question = self.questions.get(source.as_str());
            for value in answers.selections(source.as_str()).unwrap_or_default() {
                // Values without a label in the option list are ignored.
                if let Some(label) = question.and_then(|q| q.option_label(value)) {
                    features.insert(label);
                }
            }
        }

        for rule in &self.rules.feature_bonuses {
            if rule.when.evaluate(answers) {
                features.extend(&rule.items);
            }
        }
        features.into_vec()
    }

    fn care_rhythm(&self, answers: &AnswerMap) -> Vec<String> {
        self.rules
            .care_rhythm
            .iter()
            .flat_map(|block| block.lines_for(answers).iter().cloned())
            .collect()
    }

    fn vignettes(&self, answers: &AnswerMap) -> Vec<String> {
        self.rules
            .vignettes
            .iter()
            .filter(|rule| rule.when.evaluate(answers))
            .flat_map(|rule| rule.items.iter().cloned())
            .collect()
    }
}

/// Insertion-ordered string set; duplicates are dropped by exact identity.
struct OrderedSet(Vec<String>);

impl OrderedSet {
    fn seeded(items: &[String]) -> Self {
        let mut set = Self(Vec::with_capacity(items.len()));
        set.extend(items);
        set
    }

    fn insert(&mut self, item: &str) {
        if !self.0.iter().any(|existing| existing == item) {
            self.0.push(item.to_string());
        }
    }

    fn extend(&mut self, items: &[String]) {
        for item in items {
            self.insert(item);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.0
    }
}
