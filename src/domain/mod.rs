//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, status, errors)
//! - `interview` - Answer store, question catalog, flow controller, session
//! - `styling` - Style scoring, blueprint assembly, advisory notes
//! - `catalogs` - The bundle of tables a session runs on
//! - `garden` - The reference garden interview tables

pub mod catalogs;
pub mod foundation;
pub mod garden;
pub mod interview;
pub mod styling;
