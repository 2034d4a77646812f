//! Catalog Sources
//!
//! Implementations of the CatalogSource port.
//!
//! - **BuiltinCatalogSource** - The garden interview compiled into the crate
//! - **YamlCatalogSource** - Catalogs read from a YAML file

mod builtin;
mod yaml;

pub use builtin::BuiltinCatalogSource;
pub use yaml::YamlCatalogSource;
