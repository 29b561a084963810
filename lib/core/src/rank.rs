//! Aspiration-based ranking of catalog items.
//!
//! The metric is the Chebyshev (worst-criterion) distance in normalized
//! space: a candidate is only as good as its worst criterion relative to the
//! aspiration, so an item that is excellent on some axes but badly misses
//! one is penalized for the miss.

use crate::annotate::{annotate, CriterionCheck};
use crate::catalog::{Aspiration, Catalog, CatalogItem};
use crate::criterion::CriterionRegistry;
use crate::normalize::Normalizer;
use crate::{Error, Result};
use ahash::AHashMap;
use tracing::debug;

/// Default shortlist size: the best match plus up to four alternatives.
pub const DEFAULT_SHORTLIST: usize = 4;

/// Maximum absolute per-coordinate deviation between two vectors.
#[inline]
pub fn chebyshev(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Output of one ranking request.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub best: CatalogItem,
    pub best_distance: f64,
    /// Next-closest items, ascending by distance, at most the requested
    /// shortlist size. Never padded: with N catalog items there are at most
    /// N-1 alternatives.
    pub alternatives: Vec<(CatalogItem, f64)>,
    /// Per-criterion satisfaction checks for the best item and every
    /// alternative, keyed by item id string, in registry order.
    pub annotations: AHashMap<String, Vec<CriterionCheck>>,
    /// Criteria whose aspiration normalized outside [0,1].
    pub out_of_range: Vec<String>,
}

/// Rank the catalog against the user's aspiration and select the best match
/// plus a shortlist of alternatives.
///
/// Pure in its inputs: identical (catalog, registry, aspiration) yield an
/// identical ordering, ties resolved by catalog position (stable sort).
pub fn rank(
    catalog: &Catalog,
    registry: &CriterionRegistry,
    aspiration: &Aspiration,
    shortlist_size: usize,
) -> Result<Recommendation> {
    if catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let normalizer = Normalizer::fit(registry, catalog)?;
    let matrix = normalizer.normalize_catalog(catalog)?;
    let target = normalizer.normalize_aspiration(aspiration)?;

    let mut order: Vec<(usize, f64)> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| (i, chebyshev(&target.values, row)))
        .collect();

    // Stable sort: equal distances keep catalog order, so output is
    // reproducible for identical input.
    order.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let items = catalog.items();
    let (best_index, best_distance) = order[0];
    let best = items[best_index].clone();

    let alternatives: Vec<(CatalogItem, f64)> = order
        .iter()
        .skip(1)
        .take(shortlist_size)
        .map(|&(i, d)| (items[i].clone(), d))
        .collect();

    let mut annotations = AHashMap::with_capacity(1 + alternatives.len());
    annotations.insert(best.id.to_string(), annotate(registry, &best, aspiration)?);
    for (item, _) in &alternatives {
        annotations.insert(item.id.to_string(), annotate(registry, item, aspiration)?);
    }

    debug!(
        best = %best.id,
        distance = best_distance,
        alternatives = alternatives.len(),
        "ranked catalog"
    );

    Ok(Recommendation {
        best,
        best_distance,
        alternatives,
        annotations,
        out_of_range: target.out_of_range,
    })
}
