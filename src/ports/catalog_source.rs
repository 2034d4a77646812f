//! Catalog Source Port - Interface for loading interview catalogs.
//!
//! A source produces a complete, validated `InterviewCatalogs` bundle.
//! Sessions never read catalogs from anywhere else.

use std::path::PathBuf;

use crate::domain::catalogs::InterviewCatalogs;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while loading catalogs
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Catalog is invalid: {}", problems.join("; "))]
    Invalid { problems: Vec<String> },
}

impl CatalogError {
    /// Runs catalog validation and converts any problems into `Invalid`.
    pub fn check(catalogs: &InterviewCatalogs) -> Result<(), CatalogError> {
        let problems = catalogs.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Invalid { problems })
        }
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        let code = match &err {
            CatalogError::Io { .. } => ErrorCode::CatalogUnavailable,
            CatalogError::Parse(_) | CatalogError::Invalid { .. } => ErrorCode::CatalogInvalid,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for loading the catalogs an interview runs on
pub trait CatalogSource: Send + Sync {
    /// Short description of where the catalogs come from, for logs.
    fn describe(&self) -> String;

    /// Load and validate the catalogs
    ///
    /// # Errors
    /// - `Io` if the backing file cannot be read
    /// - `Parse` if the document is malformed
    /// - `Invalid` if the tables are inconsistent
    fn load(&self) -> Result<InterviewCatalogs, CatalogError>;
}
