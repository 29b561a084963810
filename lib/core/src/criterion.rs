use crate::catalog::Catalog;
use crate::normalize::Bounds;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Optimization direction of a criterion.
///
/// Each variant carries its own normalization transform and satisfaction
/// rule, so sign handling never leaks into the arithmetic of callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Higher raw values are better (memory, RAM, battery).
    Maximize,
    /// Lower raw values are better (price).
    Minimize,
}

impl Direction {
    /// Rescale a raw value onto [0,1] where 1 is always "more desirable".
    ///
    /// The bounds come from the catalog, never from the value being
    /// rescaled, so aspirations outside the observed range legally map
    /// below 0 or above 1. A zero-range criterion rescales to 1 for every
    /// input: it is perfectly satisfied everywhere and contributes 0 to
    /// every distance.
    #[inline]
    pub fn rescale(&self, value: f64, bounds: &Bounds) -> f64 {
        if bounds.is_degenerate() {
            return 1.0;
        }
        let scaled = (value - bounds.min) / bounds.range();
        match self {
            Direction::Maximize => scaled,
            Direction::Minimize => 1.0 - scaled,
        }
    }

    /// Raw-value satisfaction: does `actual` meet the user's literal ask?
    #[inline]
    pub fn satisfies(&self, actual: f64, aspiration: f64) -> bool {
        match self {
            Direction::Maximize => actual >= aspiration,
            Direction::Minimize => actual <= aspiration,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Maximize => write!(f, "maximize"),
            Direction::Minimize => write!(f, "minimize"),
        }
    }
}

/// A single catalog criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub direction: Direction,
    /// Comparable criteria participate in ranking; the rest are display-only.
    #[serde(default = "default_comparable")]
    pub comparable: bool,
}

fn default_comparable() -> bool {
    true
}

impl Criterion {
    pub fn maximize(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Maximize,
            comparable: true,
        }
    }

    pub fn minimize(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Minimize,
            comparable: true,
        }
    }

    #[must_use]
    pub fn display_only(mut self) -> Self {
        self.comparable = false;
        self
    }
}

/// Ordered, validated set of criteria.
///
/// The declaration order is load-bearing: it defines the column order for
/// every positional array produced by the normalizer and the ranking pass,
/// so misaligned parallel arrays cannot occur by convention drift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionRegistry {
    criteria: Vec<Criterion>,
}

impl CriterionRegistry {
    /// Build a registry, rejecting duplicates and an empty comparable set.
    pub fn new(criteria: Vec<Criterion>) -> Result<Self> {
        let mut seen = HashSet::new();
        for criterion in &criteria {
            if !seen.insert(criterion.name.as_str()) {
                return Err(Error::DuplicateCriterion(criterion.name.clone()));
            }
        }
        if !criteria.iter().any(|c| c.comparable) {
            return Err(Error::NoComparableCriteria);
        }
        Ok(Self { criteria })
    }

    /// Every comparable criterion must be a finite numeric column on every
    /// catalog item. Fatal at startup; the engine never ranks against an
    /// inconsistent configuration.
    pub fn validate_against(&self, catalog: &Catalog) -> Result<()> {
        for item in catalog.items() {
            for criterion in self.comparable() {
                match item.value(&criterion.name) {
                    None => {
                        return Err(Error::MissingCriterion {
                            criterion: criterion.name.clone(),
                            item: item.id.to_string(),
                        });
                    }
                    Some(v) if !v.is_finite() => {
                        return Err(Error::NonFiniteValue {
                            criterion: criterion.name.clone(),
                            item: item.id.to_string(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    /// All criteria in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    /// Comparable criteria in declaration order (the engine's column order).
    pub fn comparable(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter().filter(|c| c.comparable)
    }

    pub fn comparable_count(&self) -> usize {
        self.criteria.iter().filter(|c| c.comparable).count()
    }

    pub fn get(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}
