//! Lifecycle transitions for status enums.

use std::fmt;

use thiserror::Error;

use super::{DomainError, ErrorCode};

/// A move the lifecycle does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot move from {from} to {to}")]
pub struct TransitionError {
    pub from: String,
    pub to: String,
}

impl From<TransitionError> for DomainError {
    fn from(err: TransitionError) -> Self {
        DomainError::new(ErrorCode::InvalidStateTransition, err.to_string())
    }
}

/// A status enum with a fixed successor table.
///
/// ```ignore
/// let mut status = InterviewStatus::InProgress;
/// status.advance_to(InterviewStatus::Complete)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + fmt::Display + 'static {
    /// Statuses reachable in one step.
    fn successors(&self) -> &'static [Self];

    fn can_transition_to(&self, target: &Self) -> bool {
        self.successors().contains(target)
    }

    /// Moves to `target`; on an illegal move `self` is left untouched.
    fn advance_to(&mut self, target: Self) -> Result<(), TransitionError> {
        if !self.can_transition_to(&target) {
            return Err(TransitionError {
                from: self.to_string(),
                to: target.to_string(),
            });
        }
        *self = target;
        Ok(())
    }

    /// No way out.
    fn is_terminal(&self) -> bool {
        self.successors().is_empty()
    }
}
