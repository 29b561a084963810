//! Rescaling of heterogeneous-unit criteria onto a shared [0,1] scale.
//!
//! The catalog's observed per-criterion (min, max) anchors the scale; the
//! aspiration is rescaled with the same bounds, never recomputed from the
//! aspiration itself. An aspiration outside the observed range legally maps
//! outside [0,1] and participates in the distance as-is.

use crate::catalog::{Aspiration, Catalog};
use crate::criterion::{Criterion, CriterionRegistry};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Per-criterion (min, max) observed across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Bounds of a non-empty column. Returns `None` for an empty iterator.
    pub fn from_column(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds { min: first, max: first };
        for v in iter {
            bounds.min = bounds.min.min(v);
            bounds.max = bounds.max.max(v);
        }
        Some(bounds)
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// All catalog values identical for this criterion. The criterion then
    /// carries zero discriminating signal and rescales to 1 everywhere.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.range() == 0.0
    }
}

/// Normalized aspiration vector in the registry's comparable column order.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAspiration {
    pub values: Vec<f64>,
    /// Criteria whose aspiration fell outside the catalog's observed range.
    /// Informational, never an error.
    pub out_of_range: Vec<String>,
}

/// Fitted normalizer: one (criterion, bounds) column per comparable
/// criterion, in registry order.
#[derive(Debug, Clone)]
pub struct Normalizer {
    columns: Vec<(Criterion, Bounds)>,
}

impl Normalizer {
    /// Fit bounds on the catalog for every comparable criterion.
    pub fn fit(registry: &CriterionRegistry, catalog: &Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut columns = Vec::with_capacity(registry.comparable_count());
        for criterion in registry.comparable() {
            let mut values = Vec::with_capacity(catalog.len());
            for item in catalog.items() {
                let v = item
                    .value(&criterion.name)
                    .ok_or_else(|| Error::MissingCriterion {
                        criterion: criterion.name.clone(),
                        item: item.id.to_string(),
                    })?;
                if !v.is_finite() {
                    return Err(Error::NonFiniteValue {
                        criterion: criterion.name.clone(),
                        item: item.id.to_string(),
                    });
                }
                values.push(v);
            }
            // Non-empty by the catalog check above.
            let bounds = Bounds::from_column(values).ok_or(Error::EmptyCatalog)?;
            columns.push((criterion.clone(), bounds));
        }
        Ok(Self { columns })
    }

    /// Fitted (criterion, bounds) columns in registry order.
    pub fn columns(&self) -> &[(Criterion, Bounds)] {
        &self.columns
    }

    /// Rescale the full catalog into a row-major matrix. Column order is the
    /// registry's comparable order, row order the catalog's item order.
    pub fn normalize_catalog(&self, catalog: &Catalog) -> Result<Vec<Vec<f64>>> {
        let mut matrix = Vec::with_capacity(catalog.len());
        for item in catalog.items() {
            let mut row = Vec::with_capacity(self.columns.len());
            for (criterion, bounds) in &self.columns {
                let v = item
                    .value(&criterion.name)
                    .ok_or_else(|| Error::MissingCriterion {
                        criterion: criterion.name.clone(),
                        item: item.id.to_string(),
                    })?;
                row.push(criterion.direction.rescale(v, bounds));
            }
            matrix.push(row);
        }
        Ok(matrix)
    }

    /// Rescale the user's aspiration with the catalog's bounds.
    ///
    /// A value outside the observed range normalizes outside [0,1]; that is
    /// a preference outside the product space, logged and flagged but never
    /// clamped or rejected.
    pub fn normalize_aspiration(&self, aspiration: &Aspiration) -> Result<NormalizedAspiration> {
        let mut values = Vec::with_capacity(self.columns.len());
        let mut out_of_range = Vec::new();

        for (criterion, bounds) in &self.columns {
            let raw = aspiration
                .get(&criterion.name)
                .ok_or_else(|| Error::MissingAspiration(criterion.name.clone()))?;
            if !raw.is_finite() {
                return Err(Error::NonFiniteAspiration(criterion.name.clone()));
            }

            let scaled = criterion.direction.rescale(raw, bounds);
            if !(0.0..=1.0).contains(&scaled) {
                warn!(
                    criterion = %criterion.name,
                    aspiration = raw,
                    min = bounds.min,
                    max = bounds.max,
                    "aspiration outside observed catalog range"
                );
                out_of_range.push(criterion.name.clone());
            }
            values.push(scaled);
        }

        Ok(NormalizedAspiration { values, out_of_range })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;
    use crate::criterion::Criterion;
    use ahash::AHashMap;

    fn item(id: u64, pairs: &[(&str, f64)]) -> CatalogItem {
        let values: AHashMap<String, f64> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        CatalogItem::new(id.into(), values, None)
    }

    fn registry() -> CriterionRegistry {
        CriterionRegistry::new(vec![
            Criterion::maximize("RAM"),
            Criterion::minimize("Price"),
        ])
        .unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            item(1, &[("RAM", 4.0), ("Price", 200.0)]),
            item(2, &[("RAM", 8.0), ("Price", 400.0)]),
            item(3, &[("RAM", 12.0), ("Price", 600.0)]),
        ])
    }

    #[test]
    fn test_bounds_from_column() {
        let b = Bounds::from_column([5.0, 1.0, 3.0]).unwrap();
        assert_eq!(b.min, 1.0);
        assert_eq!(b.max, 5.0);
        assert!(Bounds::from_column(std::iter::empty::<f64>()).is_none());
    }

    #[test]
    fn test_fit_on_empty_catalog_fails() {
        let result = Normalizer::fit(&registry(), &Catalog::new(vec![]));
        assert!(matches!(result, Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_extremes_normalize_to_unit_interval_ends() {
        let normalizer = Normalizer::fit(&registry(), &catalog()).unwrap();
        let matrix = normalizer.normalize_catalog(&catalog()).unwrap();

        // Maximize: min -> 0, max -> 1.
        assert_eq!(matrix[0][0], 0.0);
        assert_eq!(matrix[2][0], 1.0);
        // Minimize: min -> 1, max -> 0.
        assert_eq!(matrix[0][1], 1.0);
        assert_eq!(matrix[2][1], 0.0);
        // Interior values land in between.
        assert_eq!(matrix[1][0], 0.5);
        assert_eq!(matrix[1][1], 0.5);
    }

    #[test]
    fn test_aspiration_uses_catalog_bounds() {
        let normalizer = Normalizer::fit(&registry(), &catalog()).unwrap();
        let aspiration = Aspiration::new().with("RAM", 8.0).with("Price", 200.0);
        let normalized = normalizer.normalize_aspiration(&aspiration).unwrap();
        assert_eq!(normalized.values, vec![0.5, 1.0]);
        assert!(normalized.out_of_range.is_empty());
    }

    #[test]
    fn test_out_of_range_aspiration_flagged_not_clamped() {
        let normalizer = Normalizer::fit(&registry(), &catalog()).unwrap();
        let aspiration = Aspiration::new().with("RAM", 16.0).with("Price", 100.0);
        let normalized = normalizer.normalize_aspiration(&aspiration).unwrap();
        assert_eq!(normalized.values, vec![1.5, 1.25]);
        assert_eq!(normalized.out_of_range, vec!["RAM", "Price"]);
    }

    #[test]
    fn test_missing_aspiration_value_fails() {
        let normalizer = Normalizer::fit(&registry(), &catalog()).unwrap();
        let aspiration = Aspiration::new().with("RAM", 8.0);
        match normalizer.normalize_aspiration(&aspiration) {
            Err(Error::MissingAspiration(name)) => assert_eq!(name, "Price"),
            other => panic!("expected MissingAspiration, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_range_column_normalizes_to_one() {
        let flat = Catalog::new(vec![
            item(1, &[("RAM", 8.0), ("Price", 200.0)]),
            item(2, &[("RAM", 8.0), ("Price", 400.0)]),
        ]);
        let normalizer = Normalizer::fit(&registry(), &flat).unwrap();
        let matrix = normalizer.normalize_catalog(&flat).unwrap();

        assert_eq!(matrix[0][0], 1.0);
        assert_eq!(matrix[1][0], 1.0);

        // The aspiration collapses to 1 as well, wherever it sits.
        let aspiration = Aspiration::new().with("RAM", 64.0).with("Price", 300.0);
        let normalized = normalizer.normalize_aspiration(&aspiration).unwrap();
        assert_eq!(normalized.values[0], 1.0);
        // Degenerate columns are never reported as out of range.
        assert!(!normalized.out_of_range.contains(&"RAM".to_string()));
    }
}
