//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogSource` - Where interview catalogs are loaded from

mod catalog_source;

pub use catalog_source::{CatalogError, CatalogSource};
