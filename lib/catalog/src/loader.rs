//! Catalog file parsing.
//!
//! The on-disk format is a single JSON document carrying the criterion
//! configuration and the item rows:
//!
//! ```json
//! {
//!   "criteria": [
//!     { "name": "Memory", "direction": "maximize" },
//!     { "name": "Price", "direction": "minimize" }
//!   ],
//!   "items": [
//!     { "id": 1, "values": { "Memory": 128, "Price": 300 },
//!       "payload": { "model": "Example A1", "image": "1.jpg" } }
//!   ]
//! }
//! ```

use ahash::AHashMap;
use pickx_core::{Catalog, CatalogItem, Criterion, CriterionRegistry, ItemId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] pickx_core::Error),
}

/// Serialized form of one catalog row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub values: AHashMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// Serialized form of a complete catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub criteria: Vec<Criterion>,
    pub items: Vec<ItemRecord>,
}

impl CatalogFile {
    /// Build the validated registry and catalog. Any schema mismatch is
    /// fatal here; the engine never sees an inconsistent configuration.
    pub fn into_parts(self) -> Result<(CriterionRegistry, Catalog), LoadError> {
        let registry = CriterionRegistry::new(self.criteria)?;
        let items = self
            .items
            .into_iter()
            .map(|record| CatalogItem::new(record.id, record.values, record.payload))
            .collect();
        let catalog = Catalog::new(items);
        registry.validate_against(&catalog)?;
        Ok((registry, catalog))
    }
}

/// Read and validate a catalog file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<(CriterionRegistry, Catalog), LoadError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&raw)?;
    let (registry, catalog) = file.into_parts()?;
    info!(
        path = %path.display(),
        items = catalog.len(),
        criteria = registry.len(),
        "catalog loaded"
    );
    Ok((registry, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "criteria": [
            { "name": "RAM", "direction": "maximize" },
            { "name": "Price", "direction": "minimize" }
        ],
        "items": [
            { "id": 1, "values": { "RAM": 8, "Price": 400 },
              "payload": { "model": "A1" } },
            { "id": "sku-2", "values": { "RAM": 12, "Price": 700 } }
        ]
    }"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_sample_catalog() {
        let file = write_temp(SAMPLE);
        let (registry, catalog) = load_catalog(file.path()).unwrap();

        assert_eq!(registry.comparable_count(), 2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].value("RAM"), Some(8.0));
        assert_eq!(catalog.items()[1].id.to_string(), "sku-2");
        assert!(catalog.items()[1].payload.is_none());
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let file = write_temp(
            r#"{
                "criteria": [
                    { "name": "RAM", "direction": "maximize" },
                    { "name": "Price", "direction": "minimize" }
                ],
                "items": [
                    { "id": 1, "values": { "RAM": 8 } }
                ]
            }"#,
        );
        match load_catalog(file.path()) {
            Err(LoadError::Core(pickx_core::Error::MissingCriterion { criterion, .. })) => {
                assert_eq!(criterion, "Price");
            }
            other => panic!("expected MissingCriterion, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_direction_is_a_parse_error() {
        let file = write_temp(
            r#"{
                "criteria": [ { "name": "RAM", "direction": "biggest" } ],
                "items": []
            }"#,
        );
        assert!(matches!(load_catalog(file.path()), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_catalog("/nonexistent/catalog.json"),
            Err(LoadError::Io(_))
        ));
    }
}
