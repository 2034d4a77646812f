//! FlowController - decides which question comes next.
//!
//! # Algorithm
//!
//! Scan the catalog order; skip anything already asked; the first unasked
//! question whose predicate holds for the current answers is next. If the
//! scan runs out, the interview is complete.
//!
//! The controller keeps no state of its own, so the same `(answers, asked)`
//! pair always produces the same step. [`FlowController::is_final_step`]
//! relies on that to look one step ahead.

use super::{AnswerMap, FlowError, QuestionCatalog};
use crate::domain::foundation::QuestionId;

/// Outcome of a flow computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStep {
    /// Present this question next.
    Ask(QuestionId),
    /// No further question applies.
    Complete,
}

impl FlowStep {
    pub fn is_complete(&self) -> bool {
        matches!(self, FlowStep::Complete)
    }

    pub fn question(&self) -> Option<&QuestionId> {
        match self {
            FlowStep::Ask(id) => Some(id),
            FlowStep::Complete => None,
        }
    }
}

/// Pure next-question computation over a question catalog.
#[derive(Debug, Clone, Copy)]
pub struct FlowController<'a> {
    catalog: &'a QuestionCatalog,
}

impl<'a> FlowController<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// Computes the next question given the answers so far and the asked history.
    ///
    /// Questions in `asked` are skipped even if their predicate no longer
    /// holds. Predicates of unasked questions are evaluated against the
    /// current answers at scan time.
    ///
    /// # Errors
    ///
    /// `asked` must hold catalog questions in strictly increasing order
    /// position. Anything else is a caller bug and is reported, not repaired.
    pub fn next(&self, answers: &AnswerMap, asked: &[QuestionId]) -> Result<FlowStep, FlowError> {
        self.check_history(asked)?;

        for id in self.catalog.order() {
            if asked.contains(id) {
                continue;
            }
            let question = self
                .catalog
                .get(id.as_str())
                .ok_or_else(|| FlowError::UnknownQuestion(id.clone()))?;
            if question.is_applicable(answers) {
                return Ok(FlowStep::Ask(id.clone()));
            }
        }

        Ok(FlowStep::Complete)
    }

    /// Returns true if answering `current` would complete the interview.
    ///
    /// Simulates `asked + [current]` and defers to [`FlowController::next`].
    pub fn is_final_step(
        &self,
        current: &QuestionId,
        answers: &AnswerMap,
        asked: &[QuestionId],
    ) -> Result<bool, FlowError> {
        let mut simulated = asked.to_vec();
        if !simulated.contains(current) {
            simulated.push(current.clone());
        }
        Ok(self.next(answers, &simulated)?.is_complete())
    }

    fn check_history(&self, asked: &[QuestionId]) -> Result<(), FlowError> {
        let mut last: Option<usize> = None;
        for id in asked {
            let position = self
                .catalog
                .position(id.as_str())
                .ok_or_else(|| FlowError::UnknownQuestion(id.clone()))?;
            if last.is_some_and(|prev| position <= prev) {
                return Err(FlowError::InconsistentHistory {
                    question: id.clone(),
                });
            }
            last = Some(position);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::{
        AnswerValue, Condition, InputType, QuestionDefinition, QuestionOption,
    };

    fn catalog() -> QuestionCatalog {
        let yes_no = || {
            vec![
                QuestionOption::new("yes", "Yes", ""),
                QuestionOption::new("no", "No", ""),
            ]
        };
        QuestionCatalog::new(vec![
            QuestionDefinition::new("first", "First", "?", InputType::Single).with_options(yes_no()),
            QuestionDefinition::new("gated", "Gated", "?", InputType::Single)
                .with_options(yes_no())
                .applies_when(Condition::selected("first", "yes")),
            QuestionDefinition::new("last", "Last", "?", InputType::FreeText),
        ])
    }

    fn ids(raw: &[&str]) -> Vec<QuestionId> {
        raw.iter().map(|id| QuestionId::from(*id)).collect()
    }

    #[test]
    fn starts_with_first_applicable_question() {
        let catalog = catalog();
        let flow = FlowController::new(&catalog);
        assert_eq!(
            flow.next(&AnswerMap::new(), &[]).unwrap(),
            FlowStep::Ask("first".into())
        );
    }

    #[test]
    fn skips_questions_whose_predicate_fails() {
        let catalog = catalog();
        let flow = FlowController::new(&catalog);
        let mut answers = AnswerMap::new();
        answers.insert("first".into(), AnswerValue::single("no"));

        assert_eq!(
            flow.next(&answers, &ids(&["first"])).unwrap(),
            FlowStep::Ask("last".into())
        );
    }

    #[test]
    fn presents_gated_question_when_predicate_holds() {
        let catalog = catalog();
        let flow = FlowController::new(&catalog);
        let mut answers = AnswerMap::new();
        answers.insert("first".into(), AnswerValue::single("yes"));

        assert_eq!(
            flow.next(&answers, &ids(&["first"])).unwrap(),
            FlowStep::Ask("gated".into())
        );
    }

    #[test]
    fn asked_questions_stay_skipped_even_if_predicate_now_fails() {
        let catalog = catalog();
        let flow = FlowController::new(&catalog);
        let mut answers = AnswerMap::new();
        answers.insert("first".into(), AnswerValue::single("no"));
        answers.insert("gated".into(), AnswerValue::single("yes"));

        assert_eq!(
            flow.next(&answers, &ids(&["first", "gated"])).unwrap(),
            FlowStep::Ask("last".into())
        );
    }

    #[test]
    fn completes_when_scan_is_exhausted() {
        let catalog = catalog();
        let flow = FlowController::new(&catalog);
        let answers = AnswerMap::new();
        assert_eq!(
            flow.next(&answers, &ids(&["first", "last"])).unwrap(),
            FlowStep::Complete
        );
    }

    #[test]
    fn is_final_step_looks_one_question_ahead() {
        let catalog = catalog();
        let flow = FlowController::new(&catalog);
        let mut answers = AnswerMap::new();
        answers.insert("first".into(), AnswerValue::single("no"));

        let asked = ids(&["first"]);
        assert!(!flow.is_final_step(&"first".into(), &answers, &[]).unwrap());
        assert!(flow.is_final_step(&"last".into(), &answers, &asked).unwrap());
    }

    #[test]
    fn is_final_step_does_not_duplicate_current() {
        let catalog = catalog();
        let flow = FlowController::new(&catalog);
        let answers = AnswerMap::new();
        let asked = ids(&["first", "last"]);
        assert!(flow.is_final_step(&"last".into(), &answers, &asked).unwrap());
    }

    #[test]
    fn rejects_out_of_order_history() {
        let catalog = catalog();
        let flow = FlowController::new(&catalog);
        let err = flow
            .next(&AnswerMap::new(), &ids(&["last", "first"]))
            .unwrap_err();
        assert_eq!(
            err,
            FlowError::InconsistentHistory {
                question: "first".into()
            }
        );
    }

    #[test]
    fn rejects_repeated_history() {
        let catalog = catalog();
        let flow = FlowController::new(&catalog);
        assert!(flow
            .next(&AnswerMap::new(), &ids(&["first", "first"]))
            .is_err());
    }

    #[test]
    fn rejects_unknown_history_entries() {
        let catalog = catalog();
        let flow = FlowController::new(&catalog);
        assert_eq!(
            flow.next(&AnswerMap::new(), &ids(&["ghost"])).unwrap_err(),
            FlowError::UnknownQuestion("ghost".into())
        );
    }
}
