//! Interview-specific error types.

use thiserror::Error;

use super::InputType;
use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};

/// Preconditions violated while computing the next question.
///
/// These are caller bugs: the asked history no longer lines up with the
/// catalog's question order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Question '{0}' is not in the catalog")]
    UnknownQuestion(QuestionId),

    #[error("Asked history is out of order at '{question}'")]
    InconsistentHistory { question: QuestionId },
}

/// Errors returned by the interview session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterviewError {
    #[error("Question '{question}' expects a {expected} answer, got {actual}")]
    InvalidAnswerShape {
        question: QuestionId,
        expected: InputType,
        actual: &'static str,
    },

    #[error("Question '{question}' has no option '{value}'")]
    UnknownOption { question: QuestionId, value: String },

    #[error("Question '{question}' expects {min}..={max} in steps of {step}, got {actual}")]
    OutOfRange {
        question: QuestionId,
        min: i32,
        max: i32,
        step: i32,
        actual: i32,
    },

    #[error("Interview is complete; restart to answer again")]
    AlreadyComplete,

    #[error("Interview is not complete; no blueprint yet")]
    NotComplete,

    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl InterviewError {
    pub fn code(&self) -> ErrorCode {
        match self {
            InterviewError::InvalidAnswerShape { .. } => ErrorCode::InvalidAnswerShape,
            InterviewError::UnknownOption { .. } => ErrorCode::UnknownOption,
            InterviewError::OutOfRange { .. } => ErrorCode::OutOfRange,
            InterviewError::AlreadyComplete => ErrorCode::InterviewComplete,
            InterviewError::NotComplete => ErrorCode::InterviewIncomplete,
            InterviewError::Flow(FlowError::UnknownQuestion(_)) => ErrorCode::QuestionNotFound,
            InterviewError::Flow(FlowError::InconsistentHistory { .. }) => {
                ErrorCode::InconsistentHistory
            }
        }
    }

    /// Returns true for errors caused by the submitted value itself.
    pub fn is_rejected_answer(&self) -> bool {
        matches!(
            self,
            InterviewError::InvalidAnswerShape { .. }
                | InterviewError::UnknownOption { .. }
                | InterviewError::OutOfRange { .. }
        )
    }
}

impl From<InterviewError> for DomainError {
    fn from(err: InterviewError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match &err {
            InterviewError::InvalidAnswerShape { question, .. }
            | InterviewError::UnknownOption { question, .. }
            | InterviewError::OutOfRange { question, .. } => {
                domain.with_detail("question", question.as_str())
            }
            _ => domain,
        }
    }
}
