//! Application layer - orchestrates domain operations over ports.
//!
//! - `InterviewService` - loads catalogs and runs sessions on them
//! - `parse_answer` - typed input to `AnswerValue`

mod answer_input;
mod interview_service;

pub use answer_input::parse_answer;
pub use interview_service::{InterviewReport, InterviewService};
