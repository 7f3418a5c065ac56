use entity_registry::{Entity, EntityId, Registry};
use serde_json::json;

#[test]
fn test_ids_unique_and_increasing() {
    let mut registry = Registry::new();
    let ids: Vec<EntityId> = (0..16).map(|_| registry.create_entity().id()).collect();
    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(ids[0], EntityId(0));
}

#[test]
fn test_independent_registries_own_their_counters() {
    let mut a = Registry::new();
    let mut b = Registry::new();
    a.create_entity();
    a.create_entity();
    // A second registry starts over at 0.
    assert_eq!(b.create_entity().id(), EntityId(0));
}

#[test]
fn test_lookup_by_id() {
    let mut registry = Registry::new();
    let e = registry.create_entity();
    let found = registry.entity_by_id(e.id()).unwrap();
    assert!(Entity::same_carrier(&e, &found));

    assert!(registry.entity_by_id(EntityId(999)).is_none());

    registry.remove_entity(&e);
    assert!(
        registry.entity_by_id(e.id()).is_none(),
        "lookup does not search removed entities"
    );
}

#[test]
fn test_lookup_by_name() {
    let mut registry = Registry::new();
    let first = registry.create_entity();
    let second = registry.create_entity();
    first.set_name("door");
    second.set_name("door");

    // No uniqueness is enforced; the earliest-created match wins.
    let found = registry.entity_by_name("door").unwrap();
    assert!(Entity::same_carrier(&found, &first));

    assert!(registry.entity_by_name("window").is_none());
}

#[test]
fn test_remove_entity_is_idempotent() {
    let mut registry = Registry::new();
    let e = registry.create_entity();
    registry.remove_entity(&e);
    assert!(!registry.has_entity(&e));
    // Second removal of the same handle is a silent no-op.
    registry.remove_entity(&e);
    assert_eq!(registry.entity_count(), 0);
}

#[test]
fn test_removed_entity_components_readable_until_flush() {
    let mut registry = Registry::new();
    let e = registry.create_entity();
    registry.set_component(&e, "Position", json!({ "x": 2, "y": 3 }));
    registry.set_component(&e, "Health", json!(10));

    registry.remove_entity(&e);
    assert!(!registry.has_entity(&e));
    assert_eq!(
        registry.get_component(&e, "Position"),
        Some(&json!({ "x": 2, "y": 3 }))
    );
    assert_eq!(registry.get_component(&e, "Health"), Some(&json!(10)));

    registry.flush_changes();
    assert!(registry.get_component(&e, "Position").is_none());
    assert!(registry.get_component(&e, "Health").is_none());
}

#[test]
fn test_remove_entity_notifies_unrelated_sets() {
    let mut registry = Registry::new();
    let e = registry.create_entity();
    let other = registry.create_entity();
    registry.set_component(&e, "Position", json!({ "x": 0 }));
    registry.set_component(&other, "Velocity", json!({ "x": 1 }));

    // e never had Velocity; the Velocity set must tolerate the removal.
    registry.remove_entity(&e);
    assert!(!registry.entities_with("Position").contains(&e));
    assert!(registry.entities_with("Velocity").contains(&other));
    assert_eq!(registry.entities_with("Velocity").len(), 1);
}

#[test]
fn test_remove_all_entities() {
    let mut registry = Registry::new();
    let a = registry.create_entity();
    let b = registry.create_entity();
    registry.set_component(&a, "Position", json!({ "x": 0 }));
    registry.set_component(&b, "Position", json!({ "x": 1 }));

    registry.remove_all_entities();
    assert!(registry.all_entities().is_empty());
    assert!(registry.entities_with("Position").is_empty());

    // Same per-entity staging as individual removals.
    assert_eq!(registry.get_component(&a, "Position"), Some(&json!({ "x": 0 })));
    assert_eq!(registry.get_component(&b, "Position"), Some(&json!({ "x": 1 })));
    assert_eq!(registry.entities_with("Position").removed().len(), 2);

    registry.flush_changes();
    assert!(registry.get_component(&a, "Position").is_none());
}

#[test]
fn test_all_entities_is_live_table() {
    let mut registry = Registry::new();
    let e = registry.create_entity();
    assert_eq!(registry.all_entities().len(), 1);
    assert!(registry.all_entities().contains_key(&e.id()));
    registry.remove_entity(&e);
    assert!(registry.all_entities().is_empty());
}
