//! Garden module - the reference garden interview tables.
//!
//! Fifteen questions, six styles, the blueprint addition rules, and four
//! advisory note rules. Built fresh on each call so callers own their copy.

mod assembly;
mod notes;
mod questions;
mod styles;

pub use assembly::assembly_rules;
pub use notes::insight_generator;
pub use questions::{question_catalog, QUESTION_ORDER};
pub use styles::style_catalog;

use super::catalogs::InterviewCatalogs;

/// All garden tables bundled for a session.
pub fn reference_catalogs() -> InterviewCatalogs {
    InterviewCatalogs {
        questions: question_catalog(),
        styles: style_catalog(),
        assembly: assembly_rules(),
        insights: insight_generator(),
    }
}
