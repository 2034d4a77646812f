//! Garden Sherpa - Adaptive Garden Interview
//!
//! This crate runs a branching questionnaire about a client's garden,
//! classifies the answers into a design style, and assembles a garden
//! blueprint with advisory notes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
