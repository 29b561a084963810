//! Copy-on-write catalog holder.
//!
//! Readers clone an `Arc` snapshot under a short read lock; a reload parses
//! and validates the replacement off-lock and swaps it in one write, so
//! in-flight rankings always observe a single consistent catalog.

use crate::loader::{load_catalog, LoadError};
use parking_lot::RwLock;
use pickx_core::{Catalog, CriterionRegistry};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// One immutable view of the catalog and its criterion configuration.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub registry: CriterionRegistry,
    pub catalog: Catalog,
}

/// Holds the current catalog snapshot and the path it was loaded from.
pub struct CatalogStore {
    path: PathBuf,
    snapshot: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogStore {
    /// Load the catalog file and wrap it in a store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();
        let (registry, catalog) = load_catalog(&path)?;
        Ok(Self {
            path,
            snapshot: RwLock::new(Arc::new(CatalogSnapshot { registry, catalog })),
        })
    }

    /// Current snapshot. Cheap: clones an `Arc`, never the catalog.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.snapshot.read().clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn item_count(&self) -> usize {
        self.snapshot.read().catalog.len()
    }

    /// Re-read the catalog file and atomically replace the snapshot.
    /// On any load error the previous snapshot stays in place.
    pub fn reload(&self) -> Result<usize, LoadError> {
        let (registry, catalog) = load_catalog(&self.path)?;
        let count = catalog.len();
        *self.snapshot.write() = Arc::new(CatalogSnapshot { registry, catalog });
        info!(items = count, "catalog snapshot replaced");
        Ok(count)
    }
}
