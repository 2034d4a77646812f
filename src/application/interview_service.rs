//! InterviewService - application facade over interview sessions.
//!
//! Loads catalogs once from a `CatalogSource`, hands out sessions that share
//! them, and packages finished sessions into a serializable report.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::answer_input::parse_answer;
use crate::domain::catalogs::InterviewCatalogs;
use crate::domain::foundation::{DomainError, InterviewId, StyleId};
use crate::domain::interview::{HistoryEntry, InterviewError, InterviewSession, SubmitOutcome};
use crate::domain::styling::{AdvisoryNote, Blueprint, CategoryScore};
use crate::ports::{CatalogError, CatalogSource};

/// Everything a finished interview produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewReport {
    pub interview_id: InterviewId,
    pub style: StyleId,
    pub blueprint: Blueprint,
    pub tally: Vec<CategoryScore>,
    pub advisory_notes: Vec<AdvisoryNote>,
    pub history: Vec<HistoryEntry>,
}

/// Entry point for running interviews over one set of catalogs.
#[derive(Debug, Clone)]
pub struct InterviewService {
    catalogs: Arc<InterviewCatalogs>,
}

impl InterviewService {
    pub fn new(catalogs: Arc<InterviewCatalogs>) -> Self {
        Self { catalogs }
    }

    /// Loads catalogs from `source`.
    pub fn load(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let catalogs = source.load()?;
        info!(
            source = %source.describe(),
            questions = catalogs.questions.len(),
            styles = catalogs.styles.len(),
            "catalogs loaded"
        );
        Ok(Self::new(Arc::new(catalogs)))
    }

    pub fn catalogs(&self) -> &Arc<InterviewCatalogs> {
        &self.catalogs
    }

    /// Starts a fresh session on the shared catalogs.
    pub fn start(&self) -> Result<InterviewSession, DomainError> {
        let session = InterviewSession::new(Arc::clone(&self.catalogs))?;
        info!(interview_id = %session.id(), "interview started");
        Ok(session)
    }

    /// Parses a typed line against the current question and submits it.
    pub fn answer_line(
        &self,
        session: &mut InterviewSession,
        line: &str,
    ) -> Result<SubmitOutcome, DomainError> {
        let question = session
            .current_question()
            .ok_or(InterviewError::AlreadyComplete)?;
        let value = parse_answer(question, line)?;
        Ok(session.submit_answer(value)?)
    }

    /// Packages a completed session.
    ///
    /// # Errors
    ///
    /// - `NotComplete` if the session has not produced a blueprint yet
    pub fn report(&self, session: &InterviewSession) -> Result<InterviewReport, InterviewError> {
        let blueprint = session.require_blueprint()?.clone();
        let classification = session
            .classification()
            .ok_or(InterviewError::NotComplete)?;

        Ok(InterviewReport {
            interview_id: *session.id(),
            style: classification.winner.clone(),
            blueprint,
            tally: classification.tally.clone(),
            advisory_notes: session.advisory_notes().to_vec(),
            history: session.asked_history(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::BuiltinCatalogSource;
    use crate::domain::foundation::ErrorCode;

    fn service() -> InterviewService {
        InterviewService::load(&BuiltinCatalogSource::new()).unwrap()
    }

    #[test]
    fn sessions_share_catalogs() {
        let service = service();
        let first = service.start().unwrap();
        let second = service.start().unwrap();
        assert_ne!(first.id(), second.id());
        assert_eq!(Arc::strong_count(service.catalogs()), 3);
    }

    #[test]
    fn answer_line_resolves_positions() {
        let service = service();
        let mut session = service.start().unwrap();
        let outcome = service.answer_line(&mut session, "1").unwrap();
        assert_eq!(outcome, SubmitOutcome::NextQuestion("usage".into()));
        assert_eq!(session.answers().choice("gardenFeel"), Some("serene"));
    }

    #[test]
    fn answer_line_surfaces_rejections_as_domain_errors() {
        let service = service();
        let mut session = service.start().unwrap();
        let err = service.answer_line(&mut session, "tropical").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownOption);
    }

    #[test]
    fn report_requires_completion() {
        let service = service();
        let session = service.start().unwrap();
        assert_eq!(
            service.report(&session).unwrap_err(),
            InterviewError::NotComplete
        );
    }
}
