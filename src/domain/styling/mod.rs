//! Styling module - classification and assembly.
//!
//! Pure domain services that turn a finished answer set into a garden
//! blueprint, plus the advisory notes that run alongside the interview.
//!
//! # Components
//!
//! - `CategoryCatalog` - garden styles with weighted trigger rules
//! - `ScoringEngine` - tallies and winner selection (declaration-order tie-break)
//! - `BlueprintAssembler` - palette, hero features, care rhythm, vignettes
//! - `InsightGenerator` - ordered advisory note rules

mod blueprint;
mod category;
mod insights;
mod scoring;

pub use blueprint::{
    AdditionRule, AssemblyRules, Blueprint, BlueprintAssembler, CareBlock, CareBranch,
    StyleSummary,
};
pub use category::{CategoryCatalog, CategoryDefinition, TriggerRule};
pub use insights::{AdvisoryNote, ChoiceBody, InsightGenerator, NoteGenerator, NoteRule, ScaleTier};
pub use scoring::{CategoryScore, Classification, ScoringEngine};
