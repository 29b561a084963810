use crate::catalog::{Aspiration, CatalogItem};
use crate::criterion::CriterionRegistry;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Satisfied/violated flag for one comparable criterion of a selected item.
///
/// Computed on raw values, deliberately independent of the normalization
/// used for ranking: satisfaction is defined against the user's literal
/// numeric ask, not the relative catalog scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionCheck {
    pub criterion: String,
    pub satisfied: bool,
}

/// Check every comparable criterion of `item` against the raw aspiration,
/// in registry order. Used purely for display annotation.
pub fn annotate(
    registry: &CriterionRegistry,
    item: &CatalogItem,
    aspiration: &Aspiration,
) -> Result<Vec<CriterionCheck>> {
    let mut checks = Vec::with_capacity(registry.comparable_count());
    for criterion in registry.comparable() {
        let actual = item
            .value(&criterion.name)
            .ok_or_else(|| Error::MissingCriterion {
                criterion: criterion.name.clone(),
                item: item.id.to_string(),
            })?;
        let target = aspiration
            .get(&criterion.name)
            .ok_or_else(|| Error::MissingAspiration(criterion.name.clone()))?;
        checks.push(CriterionCheck {
            criterion: criterion.name.clone(),
            satisfied: criterion.direction.satisfies(actual, target),
        });
    }
    Ok(checks)
}
