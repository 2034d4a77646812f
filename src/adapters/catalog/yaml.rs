//! YAML catalog source
//!
//! Reads an `InterviewCatalogs` document from disk so the interview can be
//! re-themed without recompiling. The document has the same shape the
//! catalogs serialize to:
//!
//! ```yaml
//! questions:
//!   order: [gardenFeel, usage]
//!   questions:
//!     - id: gardenFeel
//!       ...
//! styles:
//!   - id: modern-zen
//!     ...
//! assembly: { ... }   # optional
//! insights: [ ... ]   # optional
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::catalogs::InterviewCatalogs;
use crate::ports::{CatalogError, CatalogSource};

/// Loads catalogs from a YAML file
#[derive(Debug, Clone)]
pub struct YamlCatalogSource {
    path: PathBuf,
}

impl YamlCatalogSource {
    /// Create a source reading from `path`
    ///
    /// # Example
    /// ```ignore
    /// let source = YamlCatalogSource::new("./catalogs/garden.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a YAML document without touching the filesystem.
    pub fn parse(yaml: &str) -> Result<InterviewCatalogs, CatalogError> {
        let catalogs: InterviewCatalogs =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        CatalogError::check(&catalogs)?;
        Ok(catalogs)
    }
}

impl CatalogSource for YamlCatalogSource {
    fn describe(&self) -> String {
        format!("yaml catalogs at {}", self.path.display())
    }

    fn load(&self) -> Result<InterviewCatalogs, CatalogError> {
        let yaml = fs::read_to_string(&self.path).map_err(|e| CatalogError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let catalogs = Self::parse(&yaml)?;
        tracing::debug!(
            path = %self.path.display(),
            questions = catalogs.questions.len(),
            styles = catalogs.styles.len(),
            "loaded catalogs"
        );
        Ok(catalogs)
    }
}
