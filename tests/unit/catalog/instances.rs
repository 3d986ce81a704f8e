use super::*;
use crate::model::instance::{DecorationAdjustment, PriceOverride};

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "layerstack_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn config(energy: &str) -> InstanceConfig {
    InstanceConfig::new("proj", "p1", Some(energy.to_string()), Some("35".to_string()))
}

#[test]
fn insert_assigns_id_and_timestamps() {
    let mut store = InstanceStore::open(temp_dir("instances_insert").join("i.json")).unwrap();
    let stored = store.upsert(config("B1"), "2025-01-01T00:00:00Z");
    assert!(stored.id.starts_with("inst-"));
    assert_eq!(stored.created_at, "2025-01-01T00:00:00Z");
    assert_eq!(stored.updated_at, "2025-01-01T00:00:00Z");
    assert_eq!(store.records().len(), 1);

    let other = store.upsert(config("B3"), "2025-01-01T00:00:00Z");
    assert_ne!(other.id, stored.id);
    assert_eq!(store.by_project("proj").len(), 2);
}

#[test]
fn update_keeps_identity_and_replaces_fields() {
    let mut store = InstanceStore::open(temp_dir("instances_update").join("i.json")).unwrap();
    let first = store.upsert(config("B1"), "t0");

    let mut next = config("B1");
    next.price_override = Some(PriceOverride {
        promo: "¥1999".to_string(),
        ..PriceOverride::default()
    });
    next.decoration_adjustments = Some(vec![DecorationAdjustment {
        decoration_id: "d1".to_string(),
        offset_x: 10.0,
        offset_y: -5.0,
    }]);
    let updated = store.upsert(next, "t1");

    assert_eq!(store.records().len(), 1);
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.created_at, "t0");
    assert_eq!(updated.updated_at, "t1");
    assert_eq!(store.records()[0], updated);
    assert!(updated.adjustment_for("d1").is_some());
}

#[test]
fn delete_removes_by_id() {
    let mut store = InstanceStore::open(temp_dir("instances_delete").join("i.json")).unwrap();
    let stored = store.upsert(config("B1"), "t0");
    assert!(!store.delete("missing"));
    assert!(store.delete(&stored.id));
    assert!(store.records().is_empty());
}

#[test]
fn save_and_reopen() {
    let tmp = temp_dir("instances_save");
    let path = tmp.join("instances.json");
    let mut store = InstanceStore::open(&path).unwrap();
    let stored = store.upsert(config("B1"), "t0");
    store.save().unwrap();

    let reopened = InstanceStore::open(&path).unwrap();
    assert_eq!(reopened.path(), path.as_path());
    assert_eq!(reopened.records(), &[stored]);
    std::fs::remove_dir_all(&tmp).ok();
}
