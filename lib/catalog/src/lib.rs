//! # pickx Catalog
//!
//! Data-loading collaborator for the pickx engine: parses a catalog file
//! into a validated [`CriterionRegistry`](pickx_core::CriterionRegistry) and
//! [`Catalog`](pickx_core::Catalog), and holds them behind a copy-on-write
//! snapshot so the catalog can be reloaded while rankings are in flight.

pub mod loader;
pub mod store;

pub use loader::{load_catalog, CatalogFile, ItemRecord, LoadError};
pub use store::{CatalogSnapshot, CatalogStore};
