//! InterviewSession aggregate.
//!
//! Owns the answer store and asked history for one run of the interview and
//! drives the flow controller, scoring engine, blueprint assembler, and
//! insight generator.
//!
//! # Invariants
//!
//! - only the current question can be answered, and only with a value the
//!   question admits
//! - `asked` is strictly increasing in catalog order with no repeats
//! - the blueprint exists exactly when the status is `Complete`, and is
//!   computed once at completion
//! - advisory notes always reflect the current answers

use std::sync::Arc;

use chrono::Duration;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::display::display_label;
use super::{
    AnswerMap, AnswerValue, FlowController, FlowError, FlowStep, InterviewError,
    InterviewProgress, QuestionDefinition,
};
use crate::domain::catalogs::InterviewCatalogs;
use crate::domain::foundation::{
    DomainError, InterviewId, InterviewStatus, QuestionId, StateMachine, StyleId, Timestamp,
};
use crate::domain::styling::{
    AdvisoryNote, Blueprint, BlueprintAssembler, Classification, ScoringEngine,
};

/// One row of the asked history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub question_id: QuestionId,
    pub title: String,
    pub display: String,
}

/// What happened after an accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The interview continues with this question.
    NextQuestion(QuestionId),
    /// No further question applies; the blueprint was assembled for this style.
    Completed(StyleId),
}

/// A single interview run over injected catalogs.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    id: InterviewId,
    catalogs: Arc<InterviewCatalogs>,
    answers: AnswerMap,
    asked: Vec<QuestionId>,
    current: Option<QuestionId>,
    status: InterviewStatus,
    classification: Option<Classification>,
    blueprint: Option<Blueprint>,
    notes: Vec<AdvisoryNote>,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl InterviewSession {
    /// Starts an interview and positions it on the first applicable question.
    ///
    /// # Errors
    ///
    /// - `CatalogInvalid` if the catalogs fail validation
    pub fn new(catalogs: Arc<InterviewCatalogs>) -> Result<Self, DomainError> {
        catalogs.validate()?;

        let mut session = Self {
            id: InterviewId::new(),
            catalogs,
            answers: AnswerMap::new(),
            asked: Vec::new(),
            current: None,
            status: InterviewStatus::InProgress,
            classification: None,
            blueprint: None,
            notes: Vec::new(),
            started_at: Timestamp::now(),
            completed_at: None,
        };
        session.advance()?;
        Ok(session)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &InterviewId {
        &self.id
    }

    pub fn status(&self) -> InterviewStatus {
        self.status
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Question ids in the order they were asked.
    pub fn asked(&self) -> &[QuestionId] {
        &self.asked
    }

    pub fn catalogs(&self) -> &InterviewCatalogs {
        &self.catalogs
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    /// Wall time from start to completion.
    pub fn duration(&self) -> Option<Duration> {
        self.completed_at
            .as_ref()
            .map(|done| self.started_at.elapsed_until(done))
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&QuestionDefinition> {
        self.current
            .as_ref()
            .and_then(|id| self.catalogs.questions.get(id.as_str()))
    }

    /// The blueprint, available only after completion.
    pub fn blueprint(&self) -> Option<&Blueprint> {
        self.blueprint.as_ref()
    }

    /// The blueprint, or `NotComplete` if the interview is still running.
    pub fn require_blueprint(&self) -> Result<&Blueprint, InterviewError> {
        self.blueprint.as_ref().ok_or(InterviewError::NotComplete)
    }

    /// Full scoring tally, available only after completion.
    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    /// Notes for the current answers, before or after completion.
    pub fn advisory_notes(&self) -> &[AdvisoryNote] {
        &self.notes
    }

    /// Asked questions with display labels for their answers.
    pub fn asked_history(&self) -> Vec<HistoryEntry> {
        self.asked
            .iter()
            .filter_map(|id| self.catalogs.questions.get(id.as_str()))
            .map(|question| HistoryEntry {
                question_id: question.id.clone(),
                title: question.title.clone(),
                display: display_label(question, self.answers.get(question.id.as_str())),
            })
            .collect()
    }

    pub fn progress(&self) -> InterviewProgress {
        InterviewProgress {
            answered: self.asked.len(),
            candidates: self.catalogs.questions.len(),
            complete: self.status.is_complete(),
        }
    }

    /// Returns true if answering the current question will finish the interview.
    pub fn is_final_step(&self) -> Result<bool, InterviewError> {
        let Some(current) = &self.current else {
            return Ok(false);
        };
        let flow = FlowController::new(&self.catalogs.questions);
        Ok(flow.is_final_step(current, &self.answers, &self.asked)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Answers the current question and moves on.
    ///
    /// # Errors
    ///
    /// - `AlreadyComplete` once the blueprint has been produced
    /// - `InvalidAnswerShape`, `UnknownOption`, `OutOfRange` if the current
    ///   question does not admit `value`; nothing is stored in that case
    ///
    /// Repeated multi selections are collapsed before the answer is stored.
    pub fn submit_answer(&mut self, value: AnswerValue) -> Result<SubmitOutcome, InterviewError> {
        let value = value.normalized();
        if !self.status.accepts_answers() {
            return Err(InterviewError::AlreadyComplete);
        }
        let current = self.current.clone().ok_or(InterviewError::AlreadyComplete)?;
        let question = self
            .catalogs
            .questions
            .get(current.as_str())
            .ok_or_else(|| FlowError::UnknownQuestion(current.clone()))?;

        if let Err(err) = question.admit(&value) {
            warn!(interview_id = %self.id, question = %current, error = %err, "answer rejected");
            return Err(err);
        }

        debug!(interview_id = %self.id, question = %current, kind = value.kind(), "answer accepted");
        self.answers.insert(current.clone(), value);
        if !self.asked.contains(&current) {
            self.asked.push(current);
        }
        self.notes = self.catalogs.insights.generate(&self.answers);

        self.advance()?;
        match (&self.current, &self.classification) {
            (Some(next), _) => Ok(SubmitOutcome::NextQuestion(next.clone())),
            (None, Some(classification)) => Ok(SubmitOutcome::Completed(classification.winner.clone())),
            (None, None) => Err(InterviewError::NotComplete),
        }
    }

    /// Discards all answers and derived state and starts over.
    pub fn restart(&mut self) -> Result<(), InterviewError> {
        let previous = self.id;
        self.id = InterviewId::new();
        self.answers.clear();
        self.asked.clear();
        self.current = None;
        self.status = InterviewStatus::InProgress;
        self.classification = None;
        self.blueprint = None;
        self.notes.clear();
        self.started_at = Timestamp::now();
        self.completed_at = None;

        info!(interview_id = %self.id, previous = %previous, "interview restarted");
        self.advance()
    }

    fn advance(&mut self) -> Result<(), InterviewError> {
        let flow = FlowController::new(&self.catalogs.questions);
        match flow.next(&self.answers, &self.asked)? {
            FlowStep::Ask(next) => {
                debug!(interview_id = %self.id, question = %next, "question presented");
                self.current = Some(next);
                Ok(())
            }
            FlowStep::Complete => {
                self.current = None;
                self.complete()
            }
        }
    }

    fn complete(&mut self) -> Result<(), InterviewError> {
        let mut status = self.status;
        status
            .advance_to(InterviewStatus::Complete)
            .map_err(|_| InterviewError::AlreadyComplete)?;

        let classification = ScoringEngine::classify(&self.catalogs.styles, &self.answers)
            .expect("validated catalogs declare at least one style");
        let winner = self
            .catalogs
            .styles
            .get(classification.winner.as_str())
            .expect("winner comes from the same catalog");
        let blueprint = BlueprintAssembler::new(&self.catalogs.assembly, &self.catalogs.questions)
            .assemble(winner, &self.answers);

        info!(
            interview_id = %self.id,
            style = %classification.winner,
            answered = self.asked.len(),
            "interview complete"
        );

        self.status = status;
        self.classification = Some(classification);
        self.blueprint = Some(blueprint);
        self.completed_at = Some(Timestamp::now());
        Ok(())
    }
}
