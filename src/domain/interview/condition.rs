//! Conditions over the answer store, expressed as data.
//!
//! Question applicability, blueprint addition rules, and note gates all use
//! the same small evaluator so rule tables stay serializable.

use serde::{Deserialize, Serialize};

use super::AnswerMap;
use crate::domain::foundation::QuestionId;

/// A boolean expression over an [`AnswerMap`].
///
/// Leaves never hold for keys that have not been answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum Condition {
    /// Single choice equal to `value`, or multi choice containing it.
    Selected { key: QuestionId, value: String },

    /// Single choice inside `values`, or multi choice intersecting them.
    AnyOf { key: QuestionId, values: Vec<String> },

    /// Single choice inside `values`. Multi choices never satisfy this.
    ChoiceIn { key: QuestionId, values: Vec<String> },

    All { conditions: Vec<Condition> },

    Any { conditions: Vec<Condition> },

    Not { condition: Box<Condition> },
}

impl Condition {
    pub fn selected(key: &str, value: &str) -> Self {
        Condition::Selected {
            key: key.into(),
            value: value.to_string(),
        }
    }

    pub fn any_of(key: &str, values: &[&str]) -> Self {
        Condition::AnyOf {
            key: key.into(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn choice_in(key: &str, values: &[&str]) -> Self {
        Condition::ChoiceIn {
            key: key.into(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Evaluates the condition against the current answers.
    pub fn evaluate(&self, answers: &AnswerMap) -> bool {
        match self {
            Condition::Selected { key, value } => answers.has_selection(key.as_str(), value),
            Condition::AnyOf { key, values } => answers.matches_any(key.as_str(), values),
            Condition::ChoiceIn { key, values } => answers
                .choice(key.as_str())
                .is_some_and(|choice| values.iter().any(|v| v == choice)),
            Condition::All { conditions } => conditions.iter().all(|c| c.evaluate(answers)),
            Condition::Any { conditions } => conditions.iter().any(|c| c.evaluate(answers)),
            Condition::Not { condition } => !condition.evaluate(answers),
        }
    }

    /// Every answer key read by this condition, in first-seen order.
    pub fn referenced_keys(&self) -> Vec<&QuestionId> {
        let mut keys = Vec::new();
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a QuestionId>) {
        match self {
            Condition::Selected { key, .. }
            | Condition::AnyOf { key, .. }
            | Condition::ChoiceIn { key, .. } => {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
            Condition::All { conditions } | Condition::Any { conditions } => {
                for condition in conditions {
                    condition.collect_keys(keys);
                }
            }
            Condition::Not { condition } => condition.collect_keys(keys),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::AnswerValue;

    fn answers() -> AnswerMap {
        let mut map = AnswerMap::new();
        map.insert("gardenFeel".into(), AnswerValue::single("enchanted"));
        map.insert("usage".into(), AnswerValue::multi(["family-hub", "serene"]));
        map
    }

    #[test]
    fn selected_reads_single_and_multi() {
        let map = answers();
        assert!(Condition::selected("gardenFeel", "enchanted").evaluate(&map));
        assert!(Condition::selected("usage", "family-hub").evaluate(&map));
        assert!(!Condition::selected("usage", "wildlife").evaluate(&map));
    }

    #[test]
    fn choice_in_ignores_multi_choice() {
        let map = answers();
        let feel = Condition::choice_in("gardenFeel", &["serene", "enchanted", "productive"]);
        assert!(feel.evaluate(&map));

        // "serene" is among the usage selections but usage is a multi choice.
        let usage = Condition::choice_in("usage", &["serene"]);
        assert!(!usage.evaluate(&map));
    }

    #[test]
    fn unanswered_keys_never_satisfy_leaves() {
        let map = AnswerMap::new();
        assert!(!Condition::selected("usage", "wildlife").evaluate(&map));
        assert!(!Condition::any_of("usage", &["wildlife"]).evaluate(&map));
        assert!(!Condition::choice_in("gardenFeel", &["serene"]).evaluate(&map));
    }

    #[test]
    fn combinators_compose() {
        let map = answers();
        let both = Condition::All {
            conditions: vec![
                Condition::selected("gardenFeel", "enchanted"),
                Condition::selected("usage", "family-hub"),
            ],
        };
        let either = Condition::Any {
            conditions: vec![
                Condition::selected("sunExposure", "full-shade"),
                Condition::selected("usage", "family-hub"),
            ],
        };
        let negated = Condition::Not {
            condition: Box::new(Condition::selected("usage", "wildlife")),
        };

        assert!(both.evaluate(&map));
        assert!(either.evaluate(&map));
        assert!(negated.evaluate(&map));
        assert!(Condition::All { conditions: vec![] }.evaluate(&map));
        assert!(!Condition::Any { conditions: vec![] }.evaluate(&map));
    }

    #[test]
    fn referenced_keys_deduplicates() {
        let condition = Condition::Any {
            conditions: vec![
                Condition::selected("sunExposure", "full-shade"),
                Condition::selected("sunExposure", "dappled"),
                Condition::selected("usage", "wildlife"),
            ],
        };
        let keys: Vec<&str> = condition
            .referenced_keys()
            .into_iter()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, vec!["sunExposure", "usage"]);
    }

    #[test]
    fn serializes_with_when_tag() {
        let yaml = serde_yaml::to_string(&Condition::selected("usage", "wildlife")).unwrap();
        assert!(yaml.contains("when: selected"));
        let back: Condition = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, Condition::selected("usage", "wildlife"));
    }
}
