//! Catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::{BuiltinCatalogSource, YamlCatalogSource};
use crate::ports::CatalogSource;

/// Where interview catalogs come from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file; the built-in garden catalogs are used when unset
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Build the catalog source this configuration selects
    pub fn source(&self) -> Box<dyn CatalogSource> {
        match &self.path {
            Some(path) => Box::new(YamlCatalogSource::new(path)),
            None => Box::new(BuiltinCatalogSource::new()),
        }
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.as_os_str().is_empty() => {
                Err(ValidationError::MissingRequired("catalog.path"))
            }
            Some(path) if !path.is_file() => Err(ValidationError::CatalogNotFound(path.clone())),
            _ => Ok(()),
        }
    }
}
