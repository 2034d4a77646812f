//! Scoring Engine - weighted trigger tallies and winner selection.

use serde::{Deserialize, Serialize};

use super::{CategoryCatalog, CategoryDefinition};
use crate::domain::foundation::StyleId;
use crate::domain::interview::AnswerMap;

/// Final tally for one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub style: StyleId,
    pub score: i32,
    /// Number of trigger rules that fired.
    pub matched_rules: usize,
}

/// Result of classifying an answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub winner: StyleId,
    /// Every style's tally, in catalog declaration order.
    pub tally: Vec<CategoryScore>,
}

impl Classification {
    pub fn score_of(&self, style: &str) -> Option<i32> {
        self.tally
            .iter()
            .find(|entry| entry.style == *style)
            .map(|entry| entry.score)
    }
}

/// Scoring functions over a category catalog.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores one category: base score plus the weight of every rule that fires.
    ///
    /// The tally saturates at the bounds of `i32`.
    pub fn score(category: &CategoryDefinition, answers: &AnswerMap) -> CategoryScore {
        let mut score = category.base_score;
        let mut matched_rules = 0;
        for trigger in &category.triggers {
            if trigger.matches(answers) {
                score = score.saturating_add(trigger.weight);
                matched_rules += 1;
            }
        }
        CategoryScore {
            style: category.id.clone(),
            score,
            matched_rules,
        }
    }

    /// Scores every category and picks the winner.
    ///
    /// The winner has the strictly highest tally; on a tie the category
    /// declared first in the catalog wins. Returns `None` only for an empty
    /// catalog, which catalog validation rules out.
    pub fn classify(catalog: &CategoryCatalog, answers: &AnswerMap) -> Option<Classification> {
        let tally: Vec<CategoryScore> = catalog
            .iter()
            .map(|category| Self::score(category, answers))
            .collect();

        let mut best: Option<&CategoryScore> = None;
        for entry in &tally {
            if best.map_or(true, |current| entry.score > current.score) {
                best = Some(entry);
            }
        }
        let winner = best?.style.clone();

        Some(Classification { winner, tally })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::AnswerValue;
    use crate::domain::styling::TriggerRule;

    fn style(id: &str, base_score: i32, triggers: Vec<TriggerRule>) -> CategoryDefinition {
        CategoryDefinition {
            id: id.into(),
            label: id.to_string(),
            base_score,
            narrative: String::new(),
            sensory_notes: vec![],
            default_plants: vec![],
            default_features: vec![],
            triggers,
        }
    }

    fn feel(value: &str) -> AnswerMap {
        let mut answers = AnswerMap::new();
        answers.insert("gardenFeel".into(), AnswerValue::single(value));
        answers
    }

    #[test]
    fn empty_answers_score_base_only() {
        let category = style("zen", 4, vec![TriggerRule::new("gardenFeel", &["serene"], 3)]);
        let score = ScoringEngine::score(&category, &AnswerMap::new());
        assert_eq!(score.score, 4);
        assert_eq!(score.matched_rules, 0);
    }

    #[test]
    fn all_matching_rules_accumulate() {
        let category = style(
            "zen",
            1,
            vec![
                TriggerRule::new("gardenFeel", &["serene"], 3),
                TriggerRule::new("gardenFeel", &["serene", "wild"], 2),
                TriggerRule::new("usage", &["wildlife"], 5),
            ],
        );
        let score = ScoringEngine::score(&category, &feel("serene"));
        assert_eq!(score.score, 6);
        assert_eq!(score.matched_rules, 2);
    }

    #[test]
    fn negative_weights_subtract() {
        let category = style("zen", 1, vec![TriggerRule::new("gardenFeel", &["wild"], -4)]);
        assert_eq!(ScoringEngine::score(&category, &feel("wild")).score, -3);
    }

    #[test]
    fn extreme_weights_saturate_instead_of_overflowing() {
        let high = style("high", i32::MAX, vec![TriggerRule::new("gardenFeel", &["serene"], 1)]);
        assert_eq!(ScoringEngine::score(&high, &feel("serene")).score, i32::MAX);

        let low = style("low", i32::MIN, vec![TriggerRule::new("gardenFeel", &["serene"], -1)]);
        let score = ScoringEngine::score(&low, &feel("serene"));
        assert_eq!(score.score, i32::MIN);
        assert_eq!(score.matched_rules, 1);
    }

    #[test]
    fn highest_tally_wins() {
        let catalog = CategoryCatalog::new(vec![
            style("zen", 1, vec![TriggerRule::new("gardenFeel", &["serene"], 3)]),
            style("wild", 1, vec![TriggerRule::new("gardenFeel", &["wild"], 3)]),
        ]);
        let result = ScoringEngine::classify(&catalog, &feel("wild")).unwrap();
        assert_eq!(result.winner, "wild");
        assert_eq!(result.score_of("zen"), Some(1));
        assert_eq!(result.score_of("wild"), Some(4));
    }

    #[test]
    fn ties_go_to_first_declared() {
        let catalog = CategoryCatalog::new(vec![
            style("first", 2, vec![]),
            style("second", 1, vec![TriggerRule::new("gardenFeel", &["serene"], 1)]),
            style("third", 2, vec![]),
        ]);
        let result = ScoringEngine::classify(&catalog, &feel("serene")).unwrap();
        assert_eq!(result.winner, "first");

        let reversed = CategoryCatalog::new(vec![
            style("third", 2, vec![]),
            style("first", 2, vec![]),
        ]);
        assert_eq!(
            ScoringEngine::classify(&reversed, &AnswerMap::new())
                .unwrap()
                .winner,
            "third"
        );
    }

    #[test]
    fn tally_is_reported_in_declaration_order() {
        let catalog = CategoryCatalog::new(vec![style("b", 0, vec![]), style("a", 9, vec![])]);
        let result = ScoringEngine::classify(&catalog, &AnswerMap::new()).unwrap();
        let order: Vec<&str> = result.tally.iter().map(|s| s.style.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn empty_catalog_has_no_winner() {
        let catalog = CategoryCatalog::new(vec![]);
        assert!(ScoringEngine::classify(&catalog, &AnswerMap::new()).is_none());
    }
}
