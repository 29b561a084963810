//! # pickx Core
//!
//! Core library for the pickx recommendation engine.
//!
//! This crate provides the multi-criteria decision machinery:
//!
//! - [`CriterionRegistry`] - Ordered, validated criteria with optimization directions
//! - [`Catalog`] / [`CatalogItem`] - The in-memory item catalog
//! - [`Normalizer`] - Rescaling of heterogeneous-unit criteria onto [0,1]
//! - [`rank`] - Chebyshev-distance ranking against an aspiration point
//! - [`annotate`] - Raw-value satisfied/violated checks for display
//!
//! ## Example
//!
//! ```rust
//! use pickx_core::{rank, Aspiration, Catalog, CatalogItem, Criterion, CriterionRegistry};
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
//! registry.validate_against(&catalog).unwrap();
//!
//! let aspiration = Aspiration::new().with("RAM", 12.0).with("Price", 500.0);
//! let result = rank(&catalog, &registry, &aspiration, 4).unwrap();
//! println!("best match: {}", result.best.id);
//! ```

pub mod annotate;
pub mod catalog;
pub mod criterion;
pub mod error;
pub mod normalize;
pub mod rank;

pub use annotate::{annotate, CriterionCheck};
pub use catalog::{Aspiration, Catalog, CatalogItem, ItemId};
pub use criterion::{Criterion, CriterionRegistry, Direction};
pub use error::{Error, Result};
pub use normalize::{Bounds, NormalizedAspiration, Normalizer};
pub use rank::{chebyshev, rank, Recommendation, DEFAULT_SHORTLIST};
