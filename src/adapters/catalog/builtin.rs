//! Built-in catalog source backed by the reference garden tables.

use crate::domain::catalogs::InterviewCatalogs;
use crate::domain::garden;
use crate::ports::{CatalogError, CatalogSource};

/// Serves the garden interview compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl BuiltinCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinCatalogSource {
    fn describe(&self) -> String {
        "built-in garden catalogs".to_string()
    }

    fn load(&self) -> Result<InterviewCatalogs, CatalogError> {
        let catalogs = garden::reference_catalogs();
        CatalogError::check(&catalogs)?;
        Ok(catalogs)
    }
}
