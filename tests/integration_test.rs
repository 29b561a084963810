// Integration tests for pickx
use pickx_catalog::{load_catalog, CatalogStore};
use pickx_core::{rank, Aspiration, Catalog, CatalogItem, Criterion, CriterionRegistry};
use std::io::Write;

fn item(id: u64, pairs: &[(&str, f64)]) -> CatalogItem {
    let values = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    CatalogItem::new(id.into(), values, None)
}

fn phone_registry() -> CriterionRegistry {
    CriterionRegistry::new(vec![
        Criterion::maximize("Memory"),
        Criterion::maximize("RAM"),
        Criterion::maximize("Battery"),
        Criterion::minimize("Price"),
    ])
    .unwrap()
}

/// Fixed two-phone regression scenario with exact distances.
///
/// Bounds: Memory [128,256], RAM [8,12], Battery [5000,6000], Price [300,500].
/// Normalized rows: item 1 = (0,0,0,1), item 2 = (1,1,1,0); the aspiration
/// normalizes to (1,1,1,1). Both items end up at Chebyshev distance exactly
/// 1.0 (item 1 misses on the three maximize axes, item 2 on price), so the
/// stable tie rule applies and catalog order decides.
#[test]
fn test_two_phone_regression_distances() {
    let catalog = Catalog::new(vec![
        item(1, &[("Memory", 128.0), ("RAM", 8.0), ("Battery", 5000.0), ("Price", 300.0)]),
        item(2, &[("Memory", 256.0), ("RAM", 12.0), ("Battery", 6000.0), ("Price", 500.0)]),
    ]);
    let aspiration = Aspiration::new()
        .with("Memory", 256.0)
        .with("RAM", 12.0)
        .with("Battery", 6000.0)
        .with("Price", 300.0);

    let result = rank(&catalog, &phone_registry(), &aspiration, 4).unwrap();

    assert_eq!(result.best_distance, 1.0);
    assert_eq!(result.alternatives.len(), 1);
    assert_eq!(result.alternatives[0].1, 1.0);
    // Equal distances: the earlier catalog row wins.
    assert_eq!(result.best.id.to_string(), "1");
    assert_eq!(result.alternatives[0].0.id.to_string(), "2");
}

#[test]
fn test_end_to_end_from_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "criteria": [
                { "name": "Memory", "direction": "maximize" },
                { "name": "RAM", "direction": "maximize" },
                { "name": "Battery", "direction": "maximize" },
                { "name": "Price", "direction": "minimize" }
            ],
            "items": [
                { "id": 1, "values": { "Memory": 64, "RAM": 4, "Battery": 4000, "Price": 200 },
                  "payload": { "model": "Budget B1", "image": "1.jpg" } },
                { "id": 2, "values": { "Memory": 128, "RAM": 8, "Battery": 5000, "Price": 450 },
                  "payload": { "model": "Mid M2", "image": "2.jpg" } },
                { "id": 3, "values": { "Memory": 256, "RAM": 12, "Battery": 6000, "Price": 900 },
                  "payload": { "model": "Pro P3", "image": "3.jpg" } },
                { "id": 4, "values": { "Memory": 512, "RAM": 16, "Battery": 5500, "Price": 1400 },
                  "payload": { "model": "Ultra U4", "image": "4.jpg" } }
            ]
        }"#,
    )
    .unwrap();

    let store = CatalogStore::open(file.path()).unwrap();
    let snapshot = store.snapshot();

    let aspiration = Aspiration::new()
        .with("Memory", 128.0)
        .with("RAM", 8.0)
        .with("Battery", 5000.0)
        .with("Price", 450.0);

    let result = rank(&snapshot.catalog, &snapshot.registry, &aspiration, 4).unwrap();

    // Item 2 matches the aspiration exactly.
    assert_eq!(result.best.id.to_string(), "2");
    assert_eq!(result.best_distance, 0.0);
    assert_eq!(result.alternatives.len(), 3);

    // The best item satisfies every criterion it exactly meets.
    let checks = &result.annotations["2"];
    assert!(checks.iter().all(|c| c.satisfied));

    // Display payload travels through untouched.
    let model = result.best.payload.as_ref().unwrap()["model"].as_str().unwrap();
    assert_eq!(model, "Mid M2");
}

#[test]
fn test_reload_is_visible_to_new_rankings() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "criteria": [
                { "name": "RAM", "direction": "maximize" },
                { "name": "Price", "direction": "minimize" }
            ],
            "items": [
                { "id": 1, "values": { "RAM": 8, "Price": 400 } }
            ]
        }"#,
    )
    .unwrap();

    let store = CatalogStore::open(file.path()).unwrap();
    assert_eq!(store.item_count(), 1);

    std::fs::write(
        file.path(),
        r#"{
            "criteria": [
                { "name": "RAM", "direction": "maximize" },
                { "name": "Price", "direction": "minimize" }
            ],
            "items": [
                { "id": 1, "values": { "RAM": 8, "Price": 400 } },
                { "id": 2, "values": { "RAM": 16, "Price": 600 } }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(store.reload().unwrap(), 2);

    let snapshot = store.snapshot();
    let aspiration = Aspiration::new().with("RAM", 16.0).with("Price", 600.0);
    let result = rank(&snapshot.catalog, &snapshot.registry, &aspiration, 4).unwrap();
    assert_eq!(result.best.id.to_string(), "2");
}

#[test]
fn test_bundled_sample_catalog_loads_and_ranks() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/phones.json");
    let (registry, catalog) = load_catalog(path).unwrap();
    assert!(catalog.len() >= 5);

    let aspiration = Aspiration::new()
        .with("Memory", 256.0)
        .with("RAM", 8.0)
        .with("Battery", 5000.0)
        .with("Price", 500.0);

    let result = rank(&catalog, &registry, &aspiration, 4).unwrap();
    assert_eq!(result.alternatives.len(), 4);
    for (_, distance) in &result.alternatives {
        assert!(*distance >= result.best_distance);
    }
}
