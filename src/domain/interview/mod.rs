//! Interview module - the adaptive question flow.
//!
//! # Components
//!
//! - `AnswerMap` / `AnswerValue` - the answer store
//! - `Condition` - applicability predicates as data
//! - `QuestionCatalog` - question definitions and their candidate order
//! - `FlowController` - pure next-question computation and lookahead
//! - `InterviewSession` - aggregate that owns one interview run

mod answer;
mod catalog;
mod condition;
mod display;
mod errors;
mod flow;
mod progress;
mod question;
mod session;

pub use answer::{AnswerMap, AnswerValue};
pub use catalog::QuestionCatalog;
pub use condition::Condition;
pub use display::display_label;
pub use errors::{FlowError, InterviewError};
pub use flow::{FlowController, FlowStep};
pub use progress::InterviewProgress;
pub use question::{InputType, QuestionDefinition, QuestionOption, ScaleConfig};
pub use session::{HistoryEntry, InterviewSession, SubmitOutcome};
