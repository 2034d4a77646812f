//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Catalog sources (built-in tables, YAML files)

pub mod catalog;

pub use catalog::{BuiltinCatalogSource, YamlCatalogSource};
