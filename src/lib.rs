//! # pickx
//!
//! A multi-criteria decision engine that recommends the best-fit item from a
//! catalog given a user's stated preferences, plus a ranked shortlist of
//! close alternatives.
//!
//! The engine normalizes heterogeneous-unit criteria (GB, mAh, euros) onto a
//! shared [0,1] scale where 1 always means "better", builds an aspiration
//! point from the user's input on the same scale, and ranks catalog items by
//! Chebyshev (worst-criterion) distance to the aspiration: a candidate is
//! only as good as its worst criterion relative to what was asked for.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! pickx --data ./data/phones.json --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use pickx::prelude::*;
//!
//! let registry = CriterionRegistry::new(vec![
//!     Criterion::maximize("RAM"),
//!     Criterion::minimize("Price"),
//! ]).unwrap();
//!
//! let catalog = Catalog::new(vec![
//!     CatalogItem::new(
//!         1u64.into(),
//!         [("RAM".to_string(), 8.0), ("Price".to_string(), 400.0)].into_iter().collect(),
//!         None,
//!     ),
//!     CatalogItem::new(
//!         2u64.into(),
//!         [("RAM".to_string(), 12.0), ("Price".to_string(), 700.0)].into_iter().collect(),
//!         None,
//!     ),
//! ]);
//!
//! let aspiration = Aspiration::new().with("RAM", 12.0).with("Price", 500.0);
//! let result = rank(&catalog, &registry, &aspiration, DEFAULT_SHORTLIST).unwrap();
//! println!("best: {} (distance {})", result.best.id, result.best_distance);
//! ```
//!
//! ## Crate Structure
//!
//! - `pickx-core` - Criterion registry, normalizer, ranking engine, annotator
//! - `pickx-catalog` - Catalog file loading and copy-on-write snapshots
//! - `pickx-api` - REST endpoints for the presentation layer

// Re-export core types
pub use pickx_core::{
    annotate, chebyshev, rank,
    Aspiration, Bounds, Catalog, CatalogItem, Criterion, CriterionCheck, CriterionRegistry,
    Direction, Error, ItemId, NormalizedAspiration, Normalizer, Recommendation, Result,
    DEFAULT_SHORTLIST,
};

// Re-export the catalog collaborator
pub use pickx_catalog::{load_catalog, CatalogSnapshot, CatalogStore, LoadError};

// Re-export the API
pub use pickx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        annotate, chebyshev, rank,
        Aspiration, Bounds, Catalog, CatalogItem, CatalogSnapshot, CatalogStore, Criterion,
        CriterionCheck, CriterionRegistry, Direction, Error, ItemId, LoadError,
        NormalizedAspiration, Normalizer, Recommendation, RestApi, Result, DEFAULT_SHORTLIST,
    };
}
