//! InterviewProgress value object - progress shown above the current question.

use serde::{Deserialize, Serialize};

/// Snapshot of how far the interview has come.
///
/// `candidates` counts every question in the catalog order, including ones
/// that may end up skipped, so the bar can jump when a branch is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewProgress {
    pub answered: usize,
    pub candidates: usize,
    pub complete: bool,
}

impl InterviewProgress {
    /// Returns the completion percentage (0-100).
    ///
    /// A finished interview always reads 100 even when questions were skipped.
    pub fn percent_complete(&self) -> u8 {
        if self.complete {
            return 100;
        }
        if self.candidates == 0 {
            return 0;
        }
        ((self.answered.min(self.candidates) * 100) / self.candidates) as u8
    }
}
