//! InterviewStatus enum for tracking the lifecycle of an interview run.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of an interview.
///
/// `Complete` is terminal for the state machine; a restart discards the run
/// and begins a new one in `InProgress` rather than transitioning back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    #[default]
    InProgress,
    Complete,
}

impl InterviewStatus {
    /// Returns true while answers are still being accepted.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, InterviewStatus::InProgress)
    }

    /// Returns true once the blueprint has been produced.
    pub fn is_complete(&self) -> bool {
        matches!(self, InterviewStatus::Complete)
    }
}

impl StateMachine for InterviewStatus {
    fn successors(&self) -> &'static [Self] {
        match self {
            InterviewStatus::InProgress => &[InterviewStatus::Complete],
            InterviewStatus::Complete => &[],
        }
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterviewStatus::InProgress => "In Progress",
            InterviewStatus::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}
