use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Stable identifier for a catalog item.
///
/// The engine only guarantees identifier stability; mapping an id to a
/// display asset (image, product page) is the presentation layer's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    String(String),
    Integer(u64),
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::String(s) => write!(f, "{}", s),
            ItemId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::String(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::String(s.to_string())
    }
}

impl From<u64> for ItemId {
    fn from(i: u64) -> Self {
        ItemId::Integer(i)
    }
}

/// One row of the catalog: an id, the raw numeric values of the comparable
/// criteria, and a free-form payload of display-only attributes (model name,
/// brand, image reference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub values: AHashMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl CatalogItem {
    #[must_use]
    pub fn new(id: ItemId, values: AHashMap<String, f64>, payload: Option<serde_json::Value>) -> Self {
        Self { id, values, payload }
    }

    /// Raw value of a comparable criterion, if present.
    #[inline]
    pub fn value(&self, criterion: &str) -> Option<f64> {
        self.values.get(criterion).copied()
    }

    #[must_use]
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Ordered, immutable sequence of catalog items.
///
/// The position of an item in the catalog is the deterministic tie-breaker
/// for equal ranking distances, so order is part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The user's stated ideal value per comparable criterion for one query.
///
/// Created per request, consumed by the normalizer and the annotator, never
/// retained across requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aspiration {
    targets: AHashMap<String, f64>,
}

impl Aspiration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, criterion: impl Into<String>, value: f64) -> Self {
        self.targets.insert(criterion.into(), value);
        self
    }

    pub fn set(&mut self, criterion: impl Into<String>, value: f64) {
        self.targets.insert(criterion.into(), value);
    }

    #[inline]
    pub fn get(&self, criterion: &str) -> Option<f64> {
        self.targets.get(criterion).copied()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl FromIterator<(String, f64)> for Aspiration {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}
