//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the interview domain.

mod errors;
mod ids;
mod interview_status;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{InterviewId, QuestionId, StyleId};
pub use interview_status::InterviewStatus;
pub use state_machine::{StateMachine, TransitionError};
pub use timestamp::Timestamp;
